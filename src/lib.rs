//! Resume text analyzer.
//!
//! The core is three pure functions: [`parse`] turns free-form resume text
//! into a [`ResumeRecord`], [`analyze`] scores a record against the text it
//! came from, and [`optimize_for_role`] tailors a record's skills to a
//! target role. None of them can fail. Reading input, configuration and
//! rendering live around them and report errors through [`ResumeCraftError`].

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod session;

pub use config::Config;
pub use error::{Result, ResumeCraftError};
pub use processing::{AnalysisReport, Analyzer, Extractor, Optimizer, ResumeRecord};
pub use session::Session;

use std::sync::OnceLock;

static EXTRACTOR: OnceLock<Extractor> = OnceLock::new();
static ANALYZER: OnceLock<Analyzer> = OnceLock::new();
static OPTIMIZER: OnceLock<Optimizer> = OnceLock::new();

/// Extract a record from raw resume text
pub fn parse(text: &str) -> ResumeRecord {
    EXTRACTOR.get_or_init(Extractor::new).parse(text)
}

/// Score `record`, with `raw_text` supplying signals the record drops
pub fn analyze(record: &ResumeRecord, raw_text: &str) -> AnalysisReport {
    ANALYZER.get_or_init(Analyzer::new).analyze(record, raw_text)
}

/// Copy of `record` with skills suggested for `role` merged in
pub fn optimize_for_role(record: &ResumeRecord, role: &str) -> ResumeRecord {
    OPTIMIZER.get_or_init(Optimizer::new).optimize_for_role(record, role)
}
