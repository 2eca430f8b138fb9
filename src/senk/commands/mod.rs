//! # Command Engine
//!
//! Every editing operation is a [`Command`] applied to one focused line of a
//! [`Document`], described by a [`CommandContext`]: the focused index, the
//! selection bounds inside that line, and the modifier keys held down.
//!
//! The engine keeps no state between calls. [`apply`] validates the context,
//! mutates the document in place and reports a [`CommandOutcome`]:
//!
//! - `Handled { focus, changed }`: the caller should suppress its default
//!   input handling and move focus as directed. `changed` says whether the
//!   document differs from before (and therefore needs persisting).
//! - `NotHandled`: the command does not apply here (cursor not at a line
//!   boundary, no previous line, a range is selected...). The document is
//!   untouched and the caller lets its default text editing proceed.
//!
//! Invalid contexts (focused index out of range, selection start after end)
//! are rejected with a [`PreconditionViolation`] before anything is touched.
//!
//! Offsets count chars and are clamped to the length of the focused line.
//!
//! Each command family lives in its own module:
//! - [`navigate`]: focus changes only
//! - [`move_node`]: swapping a line with its neighbour
//! - [`split`]: breaking a line in two
//! - [`merge`]: backspace at the start of a line
//! - [`indent`]: indentation changes

use crate::error::{PreconditionViolation, Result, SenkError};
use crate::model::{Document, FocusDirective, Node};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod indent;
pub mod merge;
pub mod move_node;
pub mod navigate;
pub mod split;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    MoveUp,
    MoveDown,
    Split,
    MergeWithPrevious,
    Indent,
    Outdent,
}

impl Command {
    pub const ALL: [Command; 10] = [
        Command::NavigateUp,
        Command::NavigateDown,
        Command::NavigateLeft,
        Command::NavigateRight,
        Command::MoveUp,
        Command::MoveDown,
        Command::Split,
        Command::MergeWithPrevious,
        Command::Indent,
        Command::Outdent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::NavigateUp => "navigate-up",
            Command::NavigateDown => "navigate-down",
            Command::NavigateLeft => "navigate-left",
            Command::NavigateRight => "navigate-right",
            Command::MoveUp => "move-up",
            Command::MoveDown => "move-down",
            Command::Split => "split",
            Command::MergeWithPrevious => "merge-with-previous",
            Command::Indent => "indent",
            Command::Outdent => "outdent",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = SenkError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Command::ALL
            .iter()
            .find(|cmd| cmd.name() == normalized)
            .copied()
            .ok_or_else(|| SenkError::UnknownCommand(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
    };

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            shift: false,
        }
    }

    pub fn shift() -> Self {
        Self {
            ctrl: false,
            shift: true,
        }
    }
}

/// Everything the engine needs to know about the caller's input state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandContext {
    pub focused: usize,
    pub selection_start: usize,
    pub selection_end: usize,
    pub modifiers: Modifiers,
}

impl CommandContext {
    /// A collapsed cursor at `offset` in line `focused`.
    pub fn caret(focused: usize, offset: usize) -> Self {
        Self::selection(focused, offset, offset)
    }

    pub fn selection(focused: usize, start: usize, end: usize) -> Self {
        Self {
            focused,
            selection_start: start,
            selection_end: end,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_ctrl(self) -> Self {
        let modifiers = Modifiers {
            ctrl: true,
            ..self.modifiers
        };
        self.with_modifiers(modifiers)
    }

    pub fn is_collapsed(&self) -> bool {
        self.selection_start == self.selection_end
    }

    /// Selection bounds clamped to the focused line's length.
    pub(crate) fn clamped(&self, node: &Node) -> (usize, usize) {
        let len = node.char_len();
        (self.selection_start.min(len), self.selection_end.min(len))
    }

    fn validate(&self, document: &Document) -> Result<()> {
        document.check_index(self.focused)?;
        if self.selection_start > self.selection_end {
            return Err(PreconditionViolation::InvertedSelection {
                start: self.selection_start,
                end: self.selection_end,
            }
            .into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandOutcome {
    Handled { focus: FocusDirective, changed: bool },
    NotHandled,
}

impl CommandOutcome {
    pub(crate) fn moved(focus: FocusDirective) -> Self {
        CommandOutcome::Handled {
            focus,
            changed: false,
        }
    }

    pub(crate) fn changed(focus: FocusDirective) -> Self {
        CommandOutcome::Handled {
            focus,
            changed: true,
        }
    }

    pub fn is_handled(&self) -> bool {
        matches!(self, CommandOutcome::Handled { .. })
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, CommandOutcome::Handled { changed: true, .. })
    }

    pub fn focus(&self) -> Option<FocusDirective> {
        match self {
            CommandOutcome::Handled { focus, .. } => Some(*focus),
            CommandOutcome::NotHandled => None,
        }
    }
}

/// Applies `command` to `document` as described by `ctx`.
pub fn apply(
    document: &mut Document,
    command: Command,
    ctx: &CommandContext,
) -> Result<CommandOutcome> {
    ctx.validate(document)?;

    let outcome = match command {
        Command::NavigateUp => navigate::up(document, ctx),
        Command::NavigateDown => navigate::down(document, ctx),
        Command::NavigateLeft => navigate::left(document, ctx),
        Command::NavigateRight => navigate::right(document, ctx),
        Command::MoveUp => move_node::up(document, ctx),
        Command::MoveDown => move_node::down(document, ctx),
        Command::Split => split::run(document, ctx),
        Command::MergeWithPrevious => merge::run(document, ctx),
        Command::Indent => indent::increase(document, ctx),
        Command::Outdent => indent::decrease(document, ctx),
    }?;

    document.ensure_non_empty();
    Ok(outcome)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::{Document, Node};

    pub fn doc(nodes: &[(&str, usize)]) -> Document {
        Document::from_nodes(nodes.iter().map(|(t, i)| Node::new(*t, *i)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::doc;
    use super::*;
    use crate::format::{deserialize, serialize};

    #[test]
    fn parses_command_names() {
        assert_eq!("split".parse::<Command>().unwrap(), Command::Split);
        assert_eq!(
            "merge_with_previous".parse::<Command>().unwrap(),
            Command::MergeWithPrevious
        );
        assert_eq!("Move-Up".parse::<Command>().unwrap(), Command::MoveUp);
        assert!(matches!(
            "explode".parse::<Command>(),
            Err(SenkError::UnknownCommand(_))
        ));
    }

    #[test]
    fn names_round_trip_through_display() {
        for cmd in Command::ALL {
            assert_eq!(cmd.to_string().parse::<Command>().unwrap(), cmd);
        }
    }

    #[test]
    fn rejects_out_of_range_focus_without_mutation() {
        let mut d = doc(&[("a", 0)]);
        let err = apply(&mut d, Command::Split, &CommandContext::caret(3, 0)).unwrap_err();
        assert!(matches!(
            err,
            SenkError::Precondition(PreconditionViolation::IndexOutOfRange { index: 3, len: 1 })
        ));
        assert_eq!(d, doc(&[("a", 0)]));
    }

    #[test]
    fn rejects_inverted_selection_without_mutation() {
        let mut d = doc(&[("abc", 0)]);
        let err = apply(&mut d, Command::Split, &CommandContext::selection(0, 2, 1)).unwrap_err();
        assert!(matches!(
            err,
            SenkError::Precondition(PreconditionViolation::InvertedSelection { start: 2, end: 1 })
        ));
        assert_eq!(d, doc(&[("abc", 0)]));
    }

    #[test]
    fn document_never_empty_after_any_command() {
        let mut d = deserialize("");
        let script = [
            (Command::Split, CommandContext::caret(0, 0)),
            (Command::MergeWithPrevious, CommandContext::caret(1, 0)),
            (Command::Indent, CommandContext::caret(0, 0)),
            (Command::MergeWithPrevious, CommandContext::caret(0, 0).with_ctrl()),
            (Command::MergeWithPrevious, CommandContext::caret(0, 0)),
            (Command::Outdent, CommandContext::caret(0, 0)),
            (Command::MoveDown, CommandContext::caret(0, 0)),
            (Command::MoveUp, CommandContext::caret(0, 0)),
            (Command::NavigateLeft, CommandContext::caret(0, 0)),
        ];
        for (cmd, ctx) in script {
            apply(&mut d, cmd, &ctx).unwrap();
            assert!(!d.is_empty(), "{} emptied the document", cmd);
        }
        assert_eq!(serialize(&d), "");
    }

    #[test]
    fn split_then_merge_restores_line() {
        let mut d = doc(&[("before", 0), ("hello world", 0)]);
        apply(&mut d, Command::Split, &CommandContext::caret(1, 5)).unwrap();
        assert_eq!(d, doc(&[("before", 0), ("hello", 0), (" world", 0)]));

        let outcome =
            apply(&mut d, Command::MergeWithPrevious, &CommandContext::caret(2, 0)).unwrap();
        assert_eq!(d, doc(&[("before", 0), ("hello world", 0)]));
        assert_eq!(outcome.focus(), Some(FocusDirective::at(1, 5)));
    }

    #[test]
    fn outcome_helpers() {
        let handled = CommandOutcome::changed(FocusDirective::at(1, 0));
        assert!(handled.is_handled());
        assert!(handled.is_changed());
        assert!(!CommandOutcome::moved(FocusDirective::at(0, 0)).is_changed());
        assert_eq!(CommandOutcome::NotHandled.focus(), None);
    }
}
