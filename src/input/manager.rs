//! Input manager for resume files and stdin

use crate::error::{Result, ResumeCraftError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// Where resume text comes from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl From<PathBuf> for InputSource {
    /// `-` selects stdin
    fn from(path: PathBuf) -> Self {
        if path.as_path() == Path::new("-") {
            InputSource::Stdin
        } else {
            InputSource::File(path)
        }
    }
}

impl InputSource {
    /// Name shown in logs and used to derive output file names
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read resume text from `source`, refusing text that is empty after
    /// trimming. The text itself is returned untrimmed.
    pub async fn read_resume(&mut self, source: &InputSource) -> Result<String> {
        let text = match source {
            InputSource::Stdin => {
                info!("Reading resume text from stdin");
                let mut buffer = String::new();
                tokio::io::stdin().read_to_string(&mut buffer).await?;
                buffer
            }
            InputSource::File(path) => self.extract_text(path).await?,
        };

        ensure_not_empty(text)
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        // Binary formats are refused before touching the file
        let file_type = FileType::from_path(path);
        if let FileType::Binary(format) = &file_type {
            return Err(ResumeCraftError::UnsupportedFormat(format!(
                "{} files are not supported. Please paste the resume as plain text instead.",
                format
            )));
        }

        if !path.exists() {
            return Err(ResumeCraftError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match file_type {
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Binary(_) | FileType::Unknown(_) => {
                return Err(ResumeCraftError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}. Use a .txt or .md file, or pipe text on stdin.",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

/// Reject text that is blank after trimming
pub fn ensure_not_empty(text: String) -> Result<String> {
    if text.trim().is_empty() {
        Err(ResumeCraftError::EmptyInput)
    } else {
        Ok(text)
    }
}
