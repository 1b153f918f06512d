//! Resume extraction, scoring and role targeting

pub mod analyzer;
pub mod extractor;
pub mod optimizer;
pub mod record;
pub mod taxonomy;
pub mod text_processor;

pub use analyzer::{AnalysisReport, Analyzer};
pub use extractor::Extractor;
pub use optimizer::Optimizer;
pub use record::ResumeRecord;
