//! # Storage Layer
//!
//! The editor core never touches persistence directly: it hands serialized
//! outline text to whoever owns storage. The [`NoteStore`] trait is that owner.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Metadata for every note in `data.json`
//!   - Outline text in one file per note: `{id}{ext}`
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── data.json           # Metadata for all notes (JSON object keyed by id)
//! ├── groceries.txt       # Outline text, indentation as leading spaces
//! └── config.json         # Configuration
//! ```
//!
//! Metadata and content are stored separately so listing notes doesn't require
//! reading every content file.

use crate::error::Result;
use crate::model::{Note, NoteMeta};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for note storage.
pub trait NoteStore {
    /// Save a note (create or update)
    fn save_note(&mut self, note: &Note) -> Result<()>;

    /// Get a note by id
    fn get_note(&self, id: &str) -> Result<Note>;

    /// List metadata for all notes, most recently updated first
    fn list_notes(&self) -> Result<Vec<NoteMeta>>;

    /// Delete a note permanently
    fn delete_note(&mut self, id: &str) -> Result<()>;

    /// Where the note's text lives, for file-based stores
    fn note_path(&self, id: &str) -> Result<PathBuf>;

    fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.list_notes()?.iter().any(|meta| meta.id == id))
    }
}

pub(crate) fn sort_recent_first(metas: &mut [NoteMeta]) {
    metas.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.id.cmp(&b.id)));
}
