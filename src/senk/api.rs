//! # API Facade
//!
//! The API layer is a **thin facade** that wires the editor core to storage.
//! It is the single entry point for every senk operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! For editing operations the facade plays the collaborator role around an
//! [`EditorSession`]:
//! 1. **Ingest**: load the note's stored text (a missing note reads as empty)
//! 2. **Dispatch**: hand the command and its context to the session
//! 3. **Egress**: persist the serialized snapshot if the document changed, and
//!    return the focus directive to the caller
//!
//! ## What the API Does NOT Do
//!
//! - **Editing logic**: That belongs in `commands/*.rs`
//! - **I/O to the terminal**: No stdout, stderr, or exit codes
//! - **Presentation**: Returns data structures; rendering is up to the client
//!
//! ## Generic Over NoteStore
//!
//! `SenkApi<S: NoteStore>` is generic over the storage backend:
//! - Production: `SenkApi<FileStore>`
//! - Testing: `SenkApi<InMemoryStore>`

use crate::commands::{Command, CommandContext, CommandOutcome};
use crate::config::SenkConfig;
use crate::error::{Result, SenkError};
use crate::format;
use crate::keymap::KeyEvent;
use crate::model::{fresh_note_id, is_valid_note_id, Document, FocusDirective, Note, NoteMeta};
use crate::render;
use crate::session::{EditorSession, SessionResponse};
use crate::store::NoteStore;
use chrono::Utc;
use log::{debug, info, warn};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub notes: Vec<NoteMeta>,
    pub document: Option<Document>,
    pub outcome: Option<CommandOutcome>,
    pub output: Option<String>,
    pub config: Option<SenkConfig>,
    pub path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_notes(mut self, notes: Vec<NoteMeta>) -> Self {
        self.notes = notes;
        self
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_config(mut self, config: SenkConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn focus(&self) -> Option<FocusDirective> {
        self.outcome.and_then(|o| o.focus())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Html,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// The main API facade for senk operations.
///
/// Generic over `NoteStore` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct SenkApi<S: NoteStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: NoteStore> SenkApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn create_note(&mut self, id: Option<String>) -> Result<CmdResult> {
        let id = id.unwrap_or_else(fresh_note_id);
        check_id(&id)?;
        if self.store.contains(&id)? {
            return Err(SenkError::Api(format!("Note {} already exists", id)));
        }

        let note = Note::new(id, String::new());
        self.store.save_note(&note)?;
        info!("created note {}", note.meta.id);

        let mut result = CmdResult::default().with_document(Document::new());
        result.add_message(CmdMessage::success(format!(
            "Note created: {}",
            note.meta.id
        )));
        Ok(result.with_notes(vec![note.meta]))
    }

    /// Opens an editing session on a note. A note that does not exist yet
    /// starts as a single empty line.
    pub fn open_note(&self, id: &str) -> Result<EditorSession> {
        let (note, _) = self.load_note(id)?;
        Ok(EditorSession::load(&note.content))
    }

    pub fn show_note(&self, id: &str) -> Result<CmdResult> {
        check_id(id)?;
        let note = self.store.get_note(id)?;
        let document = format::deserialize(&note.content);
        Ok(CmdResult::default()
            .with_document(document)
            .with_notes(vec![note.meta]))
    }

    pub fn apply_command(
        &mut self,
        id: &str,
        command: Command,
        ctx: &CommandContext,
    ) -> Result<CmdResult> {
        let (note, stored) = self.load_note(id)?;
        let mut session = EditorSession::load(&note.content);
        let response = session.apply(command, ctx)?;
        let mut result = self.finish_edit(note, session, response, command.name())?;
        if !stored {
            result.add_message(started_empty(id));
        }
        Ok(result)
    }

    pub fn apply_key(
        &mut self,
        id: &str,
        event: &KeyEvent,
        ctx: &CommandContext,
    ) -> Result<CmdResult> {
        let (note, stored) = self.load_note(id)?;
        let mut session = EditorSession::load(&note.content);
        let response = session.apply_key(event, ctx)?;
        let mut result = self.finish_edit(note, session, response, "key")?;
        if !stored {
            result.add_message(started_empty(id));
        }
        Ok(result)
    }

    /// Replaces the text of one line.
    pub fn set_line(&mut self, id: &str, index: usize, text: &str) -> Result<CmdResult> {
        if text.contains('\n') {
            return Err(SenkError::Api(
                "Line text cannot contain a newline; use split instead".to_string(),
            ));
        }
        let (note, stored) = self.load_note(id)?;
        let mut session = EditorSession::load(&note.content);
        let snapshot = session.edit_text(index, text)?;
        let meta = self.persist(note, snapshot)?;

        let mut result = CmdResult::default()
            .with_document(session.into_document())
            .with_notes(vec![meta]);
        result.outcome = Some(CommandOutcome::Handled {
            focus: FocusDirective::end_of(index),
            changed: true,
        });
        if !stored {
            result.add_message(started_empty(id));
        }
        Ok(result)
    }

    pub fn list_notes(&self) -> Result<CmdResult> {
        let notes = self.store.list_notes()?;
        let mut result = CmdResult::default();
        if notes.is_empty() {
            result.add_message(CmdMessage::info("No notes yet."));
        }
        Ok(result.with_notes(notes))
    }

    /// Stores `text` as the note's outline, creating the note if needed.
    /// The text is normalized through the outline format on the way in.
    pub fn import_note(&mut self, id: &str, text: &str) -> Result<CmdResult> {
        let document = format::deserialize(&text.replace("\r\n", "\n"));
        let (note, _) = self.load_note(id)?;
        let meta = self.persist(note, format::serialize(&document))?;

        let mut result = CmdResult::default().with_document(document);
        result.add_message(CmdMessage::success(format!(
            "Imported {} lines into {}",
            result.document.as_ref().map(Document::len).unwrap_or(0),
            meta.id
        )));
        Ok(result.with_notes(vec![meta]))
    }

    pub fn export_note(&self, id: &str, export: ExportFormat) -> Result<CmdResult> {
        let note = self.store.get_note(id)?;
        let document = format::deserialize(&note.content);
        let output = match export {
            ExportFormat::Text => format::serialize(&document),
            ExportFormat::Html => render::to_html(&document),
            ExportFormat::Json => serde_json::to_string_pretty(&document)?,
        };
        Ok(CmdResult::default()
            .with_output(output)
            .with_document(document))
    }

    pub fn delete_note(&mut self, id: &str) -> Result<CmdResult> {
        self.store.delete_note(id)?;
        info!("deleted note {}", id);
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!("Note deleted: {}", id)));
        Ok(result)
    }

    pub fn note_path(&self, id: &str) -> Result<CmdResult> {
        check_id(id)?;
        Ok(CmdResult::default().with_path(self.store.note_path(id)?))
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        let mut config = SenkConfig::load(&self.data_dir)?;
        let mut result = CmdResult::default();
        match action {
            ConfigAction::ShowAll => {}
            ConfigAction::ShowKey(key) => {
                result = result.with_output(config.get(&key)?);
            }
            ConfigAction::Set(key, value) => {
                config.set(&key, &value)?;
                config.save(&self.data_dir)?;
                result.add_message(CmdMessage::success(format!(
                    "{} set to {}",
                    key,
                    config.get(&key)?
                )));
            }
        }
        Ok(result.with_config(config))
    }

    /// Loads a note for editing. A note that is not stored yet starts empty;
    /// the flag tells whether it came from the store.
    fn load_note(&self, id: &str) -> Result<(Note, bool)> {
        check_id(id)?;
        match self.store.get_note(id) {
            Ok(note) => Ok((note, true)),
            Err(SenkError::NoteNotFound(_)) => {
                debug!("note {} not stored yet, starting empty", id);
                Ok((Note::new(id.to_string(), String::new()), false))
            }
            Err(e) => Err(e),
        }
    }

    fn persist(&mut self, mut note: Note, content: String) -> Result<NoteMeta> {
        note.content = content;
        note.meta.updated_at = Utc::now();
        self.store.save_note(&note)?;
        debug!("persisted note {} ({} bytes)", note.meta.id, note.content.len());
        Ok(note.meta)
    }

    fn finish_edit(
        &mut self,
        note: Note,
        session: EditorSession,
        response: SessionResponse,
        label: &str,
    ) -> Result<CmdResult> {
        let mut notes = vec![];
        match response.snapshot {
            Some(snapshot) => notes.push(self.persist(note, snapshot)?),
            None => notes.push(note.meta),
        }

        let mut result = CmdResult::default()
            .with_document(session.into_document())
            .with_notes(notes);
        if !response.outcome.is_handled() {
            result.add_message(CmdMessage::info(format!(
                "{} does not apply here; nothing changed",
                label
            )));
        }
        result.outcome = Some(response.outcome);
        Ok(result)
    }
}

fn started_empty(id: &str) -> CmdMessage {
    warn!("note {} did not exist; started it empty", id);
    CmdMessage::warning(format!("Note {} did not exist; started it empty", id))
}

fn check_id(id: &str) -> Result<()> {
    if !is_valid_note_id(id) {
        return Err(SenkError::InvalidNoteId(id.to_string()));
    }
    Ok(())
}
