//! Caller-owned "current resume" state.
//!
//! The core functions are stateless; a `Session` keeps the last parsed or
//! optimized record together with its report and the raw text it came from.
//! Every action replaces that snapshot wholesale.

use crate::error::{Result, ResumeCraftError};
use crate::processing::{AnalysisReport, ResumeRecord};
use log::debug;

#[derive(Debug, Clone)]
struct Snapshot {
    raw_text: String,
    record: ResumeRecord,
    report: AnalysisReport,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<Snapshot>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and analyze `text`, replacing whatever was loaded.
    /// Blank text is rejected and leaves the session unchanged.
    pub fn load_text(&mut self, text: &str) -> Result<&ResumeRecord> {
        if text.trim().is_empty() {
            return Err(ResumeCraftError::EmptyInput);
        }

        let record = crate::parse(text);
        let report = crate::analyze(&record, text);
        debug!("Session loaded '{}' (overall {})", record.name, report.overall_score);

        let snapshot = self.current.insert(Snapshot {
            raw_text: text.to_string(),
            record,
            report,
        });
        Ok(&snapshot.record)
    }

    /// Tailor the loaded record to `role` and re-analyze it against the
    /// original text
    pub fn optimize(&mut self, role: &str) -> Result<&ResumeRecord> {
        let current = self.current.as_ref().ok_or(ResumeCraftError::NoResumeLoaded)?;

        let record = crate::optimize_for_role(&current.record, role);
        let report = crate::analyze(&record, &current.raw_text);
        let raw_text = current.raw_text.clone();

        let snapshot = self.current.insert(Snapshot {
            raw_text,
            record,
            report,
        });
        Ok(&snapshot.record)
    }

    pub fn record(&self) -> Option<&ResumeRecord> {
        self.current.as_ref().map(|s| &s.record)
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.current.as_ref().map(|s| &s.report)
    }

    pub fn raw_text(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.raw_text.as_str())
    }

    /// Record and report, or `NoResumeLoaded`
    pub fn current(&self) -> Result<(&ResumeRecord, &AnalysisReport)> {
        self.current
            .as_ref()
            .map(|s| (&s.record, &s.report))
            .ok_or(ResumeCraftError::NoResumeLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
