//! Input processing module
//! Reads resume text from files or stdin and refuses binary formats

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::{InputManager, InputSource};
