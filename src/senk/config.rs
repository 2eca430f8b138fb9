use crate::error::{Result, SenkError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_EXT: &str = ".txt";
const DEFAULT_BULLET: &str = "•";
const DEFAULT_INDENT_WIDTH: usize = 2;

/// Configuration for senk, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SenkConfig {
    /// File extension for note content files (e.g., ".txt", ".outline")
    #[serde(default = "default_file_ext")]
    pub file_ext: String,

    /// Marker printed before each line when showing an outline
    #[serde(default = "default_bullet")]
    pub bullet: String,

    /// Columns per indent level when showing an outline
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

fn default_file_ext() -> String {
    DEFAULT_FILE_EXT.to_string()
}

fn default_bullet() -> String {
    DEFAULT_BULLET.to_string()
}

fn default_indent_width() -> usize {
    DEFAULT_INDENT_WIDTH
}

impl Default for SenkConfig {
    fn default() -> Self {
        Self {
            file_ext: default_file_ext(),
            bullet: default_bullet(),
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

/// Keys accepted by `senk config`.
pub const CONFIG_KEYS: [&str; 3] = ["file-ext", "bullet", "indent-width"];

impl SenkConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: SenkConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get_file_ext(&self) -> &str {
        &self.file_ext
    }

    /// Set the file extension (normalizes to start with a dot)
    pub fn set_file_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "file-ext" => Ok(self.file_ext.clone()),
            "bullet" => Ok(self.bullet.clone()),
            "indent-width" => Ok(self.indent_width.to_string()),
            other => Err(SenkError::Api(format!("Unknown config key: {}", other))),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "file-ext" => self.set_file_ext(value),
            "bullet" => self.bullet = value.to_string(),
            "indent-width" => {
                self.indent_width = value.parse().map_err(|_| {
                    SenkError::Api(format!("indent-width must be a number, got {:?}", value))
                })?;
            }
            other => return Err(SenkError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }
}
