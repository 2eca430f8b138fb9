//! # Editor Session
//!
//! An [`EditorSession`] owns exactly one [`Document`] for the lifetime of an
//! editing session. Hosts feed it commands (or raw key events) together with
//! the caret context, then act on the returned [`SessionResponse`]:
//!
//! - `outcome` tells the host whether to suppress its default input handling
//!   and where focus goes next.
//! - `snapshot` carries the serialized document whenever it changed, ready to
//!   hand to storage. Persisting is the host's business and never blocks the
//!   next command.

use crate::commands::{self, Command, CommandContext, CommandOutcome};
use crate::error::Result;
use crate::format;
use crate::keymap::{self, KeyEvent};
use crate::model::{Document, FocusDirective};
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResponse {
    pub outcome: CommandOutcome,
    pub snapshot: Option<String>,
}

impl SessionResponse {
    fn not_handled() -> Self {
        Self {
            outcome: CommandOutcome::NotHandled,
            snapshot: None,
        }
    }

    pub fn focus(&self) -> Option<FocusDirective> {
        self.outcome.focus()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    document: Document,
}

impl EditorSession {
    /// Starts a session from stored text. An empty string gives one blank line.
    pub fn load(text: &str) -> Self {
        Self {
            document: format::deserialize(text),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn serialize(&self) -> String {
        format::serialize(&self.document)
    }

    pub fn apply(&mut self, command: Command, ctx: &CommandContext) -> Result<SessionResponse> {
        let outcome = commands::apply(&mut self.document, command, ctx)?;
        debug!("{} at line {}: {:?}", command, ctx.focused, outcome);

        let snapshot = outcome.is_changed().then(|| self.serialize());
        Ok(SessionResponse { outcome, snapshot })
    }

    /// Routes a key event through the keymap. The event's modifiers replace
    /// whatever `ctx` carried.
    pub fn apply_key(&mut self, event: &KeyEvent, ctx: &CommandContext) -> Result<SessionResponse> {
        let ctx = ctx.with_modifiers(event.modifiers);
        match keymap::map_key(event, &ctx) {
            Some(command) => self.apply(command, &ctx),
            None => Ok(SessionResponse::not_handled()),
        }
    }

    /// Replaces the text of one line, as typing into it would.
    pub fn edit_text(&mut self, index: usize, text: impl Into<String>) -> Result<String> {
        self.document.get_mut(index)?.text = text.into();
        Ok(self.serialize())
    }
}
