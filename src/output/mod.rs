//! Output module
//! Renders analyses for the terminal and exports clean resume documents

pub mod export;
pub mod formatter;
pub mod progress;
