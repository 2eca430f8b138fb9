//! Focus movement between lines. None of these touch the document.

use super::{CommandContext, CommandOutcome};
use crate::error::Result;
use crate::model::{Document, FocusDirective};

/// Focus the previous line, keeping the caret column.
pub fn up(_document: &Document, ctx: &CommandContext) -> Result<CommandOutcome> {
    // a range selection is being extended or collapsed natively
    if !ctx.is_collapsed() || ctx.focused == 0 {
        return Ok(CommandOutcome::NotHandled);
    }
    Ok(CommandOutcome::moved(FocusDirective::at(
        ctx.focused - 1,
        ctx.selection_end,
    )))
}

/// Focus the next line, keeping the caret column.
pub fn down(document: &Document, ctx: &CommandContext) -> Result<CommandOutcome> {
    if !ctx.is_collapsed() || ctx.focused >= document.last_index() {
        return Ok(CommandOutcome::NotHandled);
    }
    Ok(CommandOutcome::moved(FocusDirective::at(
        ctx.focused + 1,
        ctx.selection_end,
    )))
}

/// Left arrow at the very start of a line jumps to the end of the previous one.
pub fn left(_document: &Document, ctx: &CommandContext) -> Result<CommandOutcome> {
    if !ctx.is_collapsed() || ctx.selection_start != 0 || ctx.focused == 0 {
        return Ok(CommandOutcome::NotHandled);
    }
    Ok(CommandOutcome::moved(FocusDirective::end_of(ctx.focused - 1)))
}

/// Right arrow at the very end of a line jumps to the start of the next one.
pub fn right(document: &Document, ctx: &CommandContext) -> Result<CommandOutcome> {
    let node = document.get(ctx.focused)?;
    let (_, end) = ctx.clamped(node);
    if !ctx.is_collapsed() || end != node.char_len() || ctx.focused >= document.last_index() {
        return Ok(CommandOutcome::NotHandled);
    }
    Ok(CommandOutcome::moved(FocusDirective::at(ctx.focused + 1, 0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::doc;
    use crate::commands::{apply, Command};
    use crate::model::Cursor;

    #[test]
    fn up_keeps_column() {
        let mut d = doc(&[("first", 0), ("second", 0)]);
        let outcome = apply(&mut d, Command::NavigateUp, &CommandContext::caret(1, 4)).unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::Handled {
                focus: FocusDirective::at(0, 4),
                changed: false
            }
        );
    }

    #[test]
    fn up_on_first_line_is_not_handled() {
        let mut d = doc(&[("only", 0)]);
        let outcome = apply(&mut d, Command::NavigateUp, &CommandContext::caret(0, 2)).unwrap();
        assert_eq!(outcome, CommandOutcome::NotHandled);
    }

    #[test]
    fn up_and_down_ignore_range_selections() {
        let mut d = doc(&[("a", 0), ("bcd", 0), ("e", 0)]);
        let ctx = CommandContext::selection(1, 0, 2);
        assert_eq!(
            apply(&mut d, Command::NavigateUp, &ctx).unwrap(),
            CommandOutcome::NotHandled
        );
        assert_eq!(
            apply(&mut d, Command::NavigateDown, &ctx).unwrap(),
            CommandOutcome::NotHandled
        );
    }

    #[test]
    fn down_moves_to_next_line() {
        let mut d = doc(&[("a", 0), ("b", 1)]);
        let outcome = apply(&mut d, Command::NavigateDown, &CommandContext::caret(0, 1)).unwrap();
        assert_eq!(outcome.focus(), Some(FocusDirective::at(1, 1)));
    }

    #[test]
    fn down_on_last_line_is_not_handled() {
        let mut d = doc(&[("a", 0), ("b", 0)]);
        let outcome = apply(&mut d, Command::NavigateDown, &CommandContext::caret(1, 0)).unwrap();
        assert_eq!(outcome, CommandOutcome::NotHandled);
    }

    #[test]
    fn left_at_line_start_focuses_end_of_previous() {
        let mut d = doc(&[("abc", 0), ("def", 0)]);
        let outcome = apply(&mut d, Command::NavigateLeft, &CommandContext::caret(1, 0)).unwrap();
        let focus = outcome.focus().unwrap();
        assert_eq!(focus, FocusDirective::new(0, Cursor::End));
        assert_eq!(focus.cursor.resolve(&d.get(0).unwrap().text), 3);
    }

    #[test]
    fn left_mid_line_is_not_handled() {
        let mut d = doc(&[("abc", 0), ("def", 0)]);
        let outcome = apply(&mut d, Command::NavigateLeft, &CommandContext::caret(1, 1)).unwrap();
        assert_eq!(outcome, CommandOutcome::NotHandled);
    }

    #[test]
    fn right_at_line_end_focuses_start_of_next() {
        let mut d = doc(&[("héllo", 0), ("def", 0)]);
        let outcome = apply(&mut d, Command::NavigateRight, &CommandContext::caret(0, 5)).unwrap();
        assert_eq!(outcome.focus(), Some(FocusDirective::at(1, 0)));
    }

    #[test]
    fn right_mid_line_or_on_last_line_is_not_handled() {
        let mut d = doc(&[("abc", 0), ("def", 0)]);
        assert_eq!(
            apply(&mut d, Command::NavigateRight, &CommandContext::caret(0, 2)).unwrap(),
            CommandOutcome::NotHandled
        );
        assert_eq!(
            apply(&mut d, Command::NavigateRight, &CommandContext::caret(1, 3)).unwrap(),
            CommandOutcome::NotHandled
        );
    }
}
