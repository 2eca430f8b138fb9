use super::{sort_recent_first, NoteStore};
use crate::config::CONFIG_FILENAME;
use crate::error::{Result, SenkError};
use crate::model::{is_valid_note_id, Note, NoteMeta};
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

const DATA_FILENAME: &str = "data.json";

/// Files the store shares its directory with. No note may be named onto them.
const RESERVED_FILENAMES: [&str; 2] = [DATA_FILENAME, CONFIG_FILENAME];

pub struct FileStore {
    root: PathBuf,
    file_ext: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_ext: ".txt".to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    fn content_path(&self, id: &str) -> Result<PathBuf> {
        let filename = format!("{}{}", id, self.file_ext);
        if !is_valid_note_id(id) || RESERVED_FILENAMES.contains(&filename.as_str()) {
            return Err(SenkError::InvalidNoteId(id.to_string()));
        }
        Ok(self.root.join(filename))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }

    fn load_metadata(&self) -> Result<HashMap<String, NoteMeta>> {
        let data_file = self.root.join(DATA_FILENAME);
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file)?;
        let meta: HashMap<String, NoteMeta> = serde_json::from_str(&content)?;
        Ok(meta)
    }

    fn save_metadata(&self, meta: &HashMap<String, NoteMeta>) -> Result<()> {
        let data_file = self.root.join(DATA_FILENAME);
        let content = serde_json::to_string_pretty(meta)?;
        fs::write(data_file, content)?;
        Ok(())
    }
}

impl NoteStore for FileStore {
    fn save_note(&mut self, note: &Note) -> Result<()> {
        let path = self.content_path(&note.meta.id)?;
        self.ensure_dir()?;

        let mut meta_map = self.load_metadata()?;
        meta_map.insert(note.meta.id.clone(), note.meta.clone());
        self.save_metadata(&meta_map)?;

        fs::write(&path, &note.content)?;
        debug!("saved note {} to {}", note.meta.id, path.display());
        Ok(())
    }

    fn get_note(&self, id: &str) -> Result<Note> {
        let path = self.content_path(id)?;
        let meta_map = self.load_metadata()?;
        let meta = meta_map
            .get(id)
            .cloned()
            .ok_or_else(|| SenkError::NoteNotFound(id.to_string()))?;

        // metadata without a content file is an empty outline
        let content = if path.exists() {
            fs::read_to_string(path)?
        } else {
            String::new()
        };

        Ok(Note { meta, content })
    }

    fn list_notes(&self) -> Result<Vec<NoteMeta>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut metas: Vec<NoteMeta> = self.load_metadata()?.into_values().collect();
        sort_recent_first(&mut metas);
        Ok(metas)
    }

    fn delete_note(&mut self, id: &str) -> Result<()> {
        let path = self.content_path(id)?;
        let mut meta_map = self.load_metadata()?;
        if meta_map.remove(id).is_none() {
            return Err(SenkError::NoteNotFound(id.to_string()));
        }
        self.save_metadata(&meta_map)?;

        if path.exists() {
            fs::remove_file(path)?;
        }
        debug!("deleted note {}", id);
        Ok(())
    }

    fn note_path(&self, id: &str) -> Result<PathBuf> {
        self.content_path(id)
    }
}
