//! File type detection

use std::path::Path;

/// Binary document formats that are refused before any read
const BINARY_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "rtf", "odt"];

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Text,
    Markdown,
    /// A binary document format, carrying its uppercase extension
    Binary(String),
    Unknown(String),
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_lowercase();
        match ext.as_str() {
            "txt" | "text" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            e if BINARY_EXTENSIONS.contains(&e) => FileType::Binary(ext.to_uppercase()),
            _ => FileType::Unknown(ext),
        }
    }

    /// Files without an extension are read as plain text
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => Self::from_extension(ext),
            None => FileType::Text,
        }
    }

    pub fn is_readable(&self) -> bool {
        matches!(self, FileType::Text | FileType::Markdown)
    }
}
