use super::{CommandContext, CommandOutcome};
use crate::error::Result;
use crate::model::{Document, FocusDirective};

/// One level deeper. There is no upper bound.
pub fn increase(document: &mut Document, ctx: &CommandContext) -> Result<CommandOutcome> {
    document.get_mut(ctx.focused)?.indent += 1;
    Ok(CommandOutcome::changed(stay(ctx)))
}

/// One level shallower, floored at the root.
pub fn decrease(document: &mut Document, ctx: &CommandContext) -> Result<CommandOutcome> {
    let node = document.get_mut(ctx.focused)?;
    if node.indent == 0 {
        return Ok(CommandOutcome::moved(stay(ctx)));
    }
    node.indent -= 1;
    Ok(CommandOutcome::changed(stay(ctx)))
}

fn stay(ctx: &CommandContext) -> FocusDirective {
    FocusDirective::at(ctx.focused, ctx.selection_end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::doc;
    use crate::commands::{apply, Command};
    use crate::format::serialize;

    #[test]
    fn indent_then_serialize() {
        let mut d = doc(&[("a", 0)]);
        let outcome = apply(&mut d, Command::Indent, &CommandContext::caret(0, 0)).unwrap();
        assert_eq!(d, doc(&[("a", 1)]));
        assert_eq!(serialize(&d), " a");
        assert_eq!(outcome.focus(), Some(FocusDirective::at(0, 0)));
    }

    #[test]
    fn indent_allows_jumps() {
        let mut d = doc(&[("a", 0), ("b", 0)]);
        for _ in 0..5 {
            apply(&mut d, Command::Indent, &CommandContext::caret(1, 1)).unwrap();
        }
        assert_eq!(d, doc(&[("a", 0), ("b", 5)]));
    }

    #[test]
    fn outdent_decrements() {
        let mut d = doc(&[("a", 3)]);
        let outcome = apply(&mut d, Command::Outdent, &CommandContext::caret(0, 1)).unwrap();
        assert_eq!(d, doc(&[("a", 2)]));
        assert!(outcome.is_changed());
        assert_eq!(outcome.focus(), Some(FocusDirective::at(0, 1)));
    }

    #[test]
    fn outdent_floors_at_zero() {
        let mut d = doc(&[("a", 0)]);
        let outcome = apply(&mut d, Command::Outdent, &CommandContext::caret(0, 0)).unwrap();
        assert_eq!(d, doc(&[("a", 0)]));
        assert!(outcome.is_handled());
        assert!(!outcome.is_changed());
    }
}
