use super::{CommandContext, CommandOutcome};
use crate::error::Result;
use crate::model::{Document, FocusDirective};

/// Backspace with the caret at the start of a line.
///
/// An indented line loses one level of indent (all of it with ctrl) and
/// stays put. A root-level line is appended to the previous line and removed;
/// focus lands at the junction.
pub fn run(document: &mut Document, ctx: &CommandContext) -> Result<CommandOutcome> {
    if ctx.selection_end != 0 {
        return Ok(CommandOutcome::NotHandled);
    }

    let node = document.get_mut(ctx.focused)?;
    if node.indent > 0 {
        node.indent = if ctx.modifiers.ctrl { 0 } else { node.indent - 1 };
        return Ok(CommandOutcome::changed(FocusDirective::at(
            ctx.focused,
            ctx.selection_end,
        )));
    }

    if ctx.focused == 0 {
        return Ok(CommandOutcome::NotHandled);
    }

    let removed = document.remove_at(ctx.focused)?;
    let previous = document.get_mut(ctx.focused - 1)?;
    let junction = previous.char_len();
    previous.text.push_str(&removed.text);
    document.ensure_non_empty();

    Ok(CommandOutcome::changed(FocusDirective::at(
        ctx.focused - 1,
        junction,
    )))
}
