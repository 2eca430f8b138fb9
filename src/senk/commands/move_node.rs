//! Reordering: a line trades places with its neighbour and keeps focus.
//!
//! Only the focused line moves; its children stay where they are.

use super::{CommandContext, CommandOutcome};
use crate::error::Result;
use crate::model::{Document, FocusDirective};

pub fn up(document: &mut Document, ctx: &CommandContext) -> Result<CommandOutcome> {
    if ctx.focused == 0 {
        return Ok(CommandOutcome::NotHandled);
    }
    let target = ctx.focused - 1;
    document.swap(ctx.focused, target)?;
    Ok(CommandOutcome::changed(FocusDirective::at(
        target,
        ctx.selection_end,
    )))
}

pub fn down(document: &mut Document, ctx: &CommandContext) -> Result<CommandOutcome> {
    if ctx.focused >= document.last_index() {
        return Ok(CommandOutcome::NotHandled);
    }
    let target = ctx.focused + 1;
    document.swap(ctx.focused, target)?;
    Ok(CommandOutcome::changed(FocusDirective::at(
        target,
        ctx.selection_end,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::doc;
    use crate::commands::{apply, Command};

    #[test]
    fn move_down_swaps_with_next() {
        let mut d = doc(&[("x", 0), ("y", 0)]);
        let outcome = apply(&mut d, Command::MoveDown, &CommandContext::caret(0, 0)).unwrap();
        assert_eq!(d, doc(&[("y", 0), ("x", 0)]));
        assert_eq!(outcome.focus().map(|f| f.index), Some(1));
        assert!(outcome.is_changed());
    }

    #[test]
    fn move_up_swaps_with_previous_and_keeps_indent() {
        let mut d = doc(&[("a", 0), ("b", 2), ("c", 1)]);
        let outcome = apply(&mut d, Command::MoveUp, &CommandContext::caret(2, 1)).unwrap();
        assert_eq!(d, doc(&[("a", 0), ("c", 1), ("b", 2)]));
        assert_eq!(outcome.focus(), Some(FocusDirective::at(1, 1)));
    }

    #[test]
    fn move_preserves_selection_end_as_cursor() {
        let mut d = doc(&[("abc", 0), ("def", 0)]);
        let outcome = apply(&mut d, Command::MoveUp, &CommandContext::selection(1, 1, 3)).unwrap();
        assert_eq!(outcome.focus(), Some(FocusDirective::at(0, 3)));
    }

    #[test]
    fn move_at_boundaries_is_a_no_op() {
        let mut d = doc(&[("a", 0), ("b", 0)]);
        assert_eq!(
            apply(&mut d, Command::MoveUp, &CommandContext::caret(0, 0)).unwrap(),
            CommandOutcome::NotHandled
        );
        assert_eq!(
            apply(&mut d, Command::MoveDown, &CommandContext::caret(1, 0)).unwrap(),
            CommandOutcome::NotHandled
        );
        assert_eq!(d, doc(&[("a", 0), ("b", 0)]));
    }
}
