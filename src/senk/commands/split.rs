use super::{CommandContext, CommandOutcome};
use crate::error::Result;
use crate::model::{byte_index, Document, FocusDirective, Node};

/// Enter: opens a new line below the focused one at the same indent.
///
/// Without ctrl the text after the selection moves to the new line and the
/// focused line keeps the text before it; anything selected is dropped. With
/// ctrl the new line starts empty and the focused line is left alone.
pub fn run(document: &mut Document, ctx: &CommandContext) -> Result<CommandOutcome> {
    let node = document.get(ctx.focused)?;
    let mut fresh = Node::new("", node.indent);

    if !ctx.modifiers.ctrl {
        let (start, end) = ctx.clamped(node);
        let head = node.text[..byte_index(&node.text, start)].to_string();
        fresh.text = node.text[byte_index(&node.text, end)..].to_string();
        document.get_mut(ctx.focused)?.text = head;
    }

    let index = ctx.focused + 1;
    document.insert_at(index, fresh)?;
    Ok(CommandOutcome::changed(FocusDirective::at(index, 0)))
}
