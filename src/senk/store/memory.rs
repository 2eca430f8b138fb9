use super::{sort_recent_first, NoteStore};
use crate::error::{Result, SenkError};
use crate::model::{is_valid_note_id, Note, NoteMeta};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    notes: HashMap<String, Note>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteStore for InMemoryStore {
    fn save_note(&mut self, note: &Note) -> Result<()> {
        if !is_valid_note_id(&note.meta.id) {
            return Err(SenkError::InvalidNoteId(note.meta.id.clone()));
        }
        self.notes.insert(note.meta.id.clone(), note.clone());
        Ok(())
    }

    fn get_note(&self, id: &str) -> Result<Note> {
        self.notes
            .get(id)
            .cloned()
            .ok_or_else(|| SenkError::NoteNotFound(id.to_string()))
    }

    fn list_notes(&self) -> Result<Vec<NoteMeta>> {
        let mut metas: Vec<NoteMeta> = self.notes.values().map(|n| n.meta.clone()).collect();
        sort_recent_first(&mut metas);
        Ok(metas)
    }

    fn delete_note(&mut self, id: &str) -> Result<()> {
        if self.notes.remove(id).is_none() {
            return Err(SenkError::NoteNotFound(id.to_string()));
        }
        Ok(())
    }

    fn note_path(&self, id: &str) -> Result<PathBuf> {
        Err(SenkError::Store(format!(
            "Note {} has no path in an in-memory store",
            id
        )))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_note(mut self, id: &str, content: &str) -> Self {
            let note = Note::new(id.to_string(), content.to_string());
            self.store.save_note(&note).unwrap();
            self
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let note = Note::new(format!("note-{}", i + 1), format!("Line {}", i + 1));
                self.store.save_note(&note).unwrap();
            }
            self
        }
    }
}
