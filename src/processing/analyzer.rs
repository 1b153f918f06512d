//! Heuristic scoring of a parsed resume and the findings derived from it

use crate::processing::record::ResumeRecord;
use crate::processing::taxonomy::{ACTION_VERBS, SECTION_WORDS};
use crate::processing::text_processor::TextProcessor;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

const MAX_STRENGTHS: usize = 5;
const MAX_WEAKNESSES: usize = 5;
const MAX_IMPROVEMENTS: usize = 6;

const OVERALL_BASE: u32 = 40;
const ATS_BASE: u32 = 50;
const FORMATTING_BASE: u32 = 60;

/// Raw text shorter than this is flagged as too brief
const SHORT_TEXT_CHARS: usize = 300;
/// Raw text longer than this is flagged as too long
const LONG_TEXT_CHARS: usize = 5000;
/// Lower bound of the comfortable length range used by formatting
const COMFORTABLE_MIN_CHARS: usize = 500;

/// Scores and findings for one resume. Deterministic for a given
/// `(record, raw text)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Overall quality score (0 to 100)
    pub overall_score: u8,

    /// Applicant-tracking-system compatibility (0 to 100), independent of
    /// the overall score
    pub ats_score: u8,

    pub section_scores: SectionScores,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<Weakness>,
    pub improvements: Vec<Improvement>,

    /// Action verbs and quantified metrics found in the text
    pub highlights: Highlights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScores {
    pub contact: u8,
    pub skills: u8,
    pub experience: u8,
    pub education: u8,
    pub formatting: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weakness {
    pub message: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Improvement {
    pub section: ImprovementArea,
    pub tip: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImprovementArea {
    Experience,
    Summary,
    Skills,
    Keywords,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlights {
    pub action_verbs: Vec<String>,
    pub metrics: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Percentage,
    Currency,
    Multiplier,
    Audience,
    Duration,
}

/// Coarse reading of a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
}

/// Everything the scoring rules read from the raw text
struct TextSignals {
    char_count: usize,
    line_count: usize,
    action_verbs: Vec<&'static str>,
    metrics: Vec<(MetricKind, String)>,
    has_section_words: bool,
    has_table_characters: bool,
    is_ascii: bool,
    has_bullets: bool,
    has_tab_runs: bool,
}

impl TextSignals {
    fn has_metric(&self, kind: MetricKind) -> bool {
        self.metrics.iter().any(|(k, _)| *k == kind)
    }
}

pub struct Analyzer {
    text_processor: TextProcessor,
    metric_patterns: Vec<(MetricKind, Regex)>,
    section_word_regex: Regex,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    pub fn new() -> Self {
        let metric_patterns = vec![
            (MetricKind::Percentage, r"\d+(?:\.\d+)?\s?%"),
            (MetricKind::Currency, r"\$\s?\d[\d,]*(?:\.\d+)?(?:[kKmMbB]\b)?"),
            (MetricKind::Multiplier, r"\b\d+(?:\.\d+)?x\b"),
            (MetricKind::Audience, r"(?i)\b\d[\d,]*\+?\s*(?:users|customers|clients)\b"),
            (MetricKind::Duration, r"(?i)\b\d+(?:\.\d+)?\s*(?:ms|seconds|minutes|hours)\b"),
        ]
        .into_iter()
        .map(|(kind, pattern)| (kind, Regex::new(pattern).expect("Invalid metric regex")))
        .collect();

        let section_word_regex = Regex::new(&format!(r"(?i)\b(?:{})\b", SECTION_WORDS.join("|")))
            .expect("Invalid section word regex");

        Self {
            text_processor: TextProcessor::new(),
            metric_patterns,
            section_word_regex,
        }
    }

    /// Score `record`, using `raw_text` for signals the record drops
    pub fn analyze(&self, record: &ResumeRecord, raw_text: &str) -> AnalysisReport {
        let signals = self.collect_signals(raw_text);

        let report = AnalysisReport {
            overall_score: self.overall_score(record, &signals),
            ats_score: self.ats_score(&signals),
            section_scores: self.section_scores(record, &signals),
            strengths: self.strengths(record, &signals),
            weaknesses: self.weaknesses(record, &signals),
            improvements: self.improvements(record, &signals),
            highlights: Self::highlights(&signals),
        };

        debug!(
            "Analysis: overall={}, ats={}, {} strengths, {} weaknesses, {} improvements",
            report.overall_score,
            report.ats_score,
            report.strengths.len(),
            report.weaknesses.len(),
            report.improvements.len()
        );

        report
    }

    fn collect_signals(&self, raw_text: &str) -> TextSignals {
        let mut action_verbs: Vec<&'static str> = Vec::new();
        for word in self.text_processor.words(raw_text) {
            if let Some(verb) = ACTION_VERBS.iter().copied().find(|v| v.eq_ignore_ascii_case(word)) {
                if !action_verbs.contains(&verb) {
                    action_verbs.push(verb);
                }
            }
        }

        let metrics = self
            .metric_patterns
            .iter()
            .flat_map(|(kind, regex)| {
                regex
                    .find_iter(raw_text)
                    .map(move |m| (*kind, m.as_str().trim().to_string()))
            })
            .collect();

        TextSignals {
            char_count: self.text_processor.char_count(raw_text),
            line_count: self.text_processor.lines(raw_text).len(),
            action_verbs,
            metrics,
            has_section_words: self.section_word_regex.is_match(raw_text),
            has_table_characters: self.text_processor.has_table_characters(raw_text),
            is_ascii: self.text_processor.is_predominantly_ascii(raw_text),
            has_bullets: self.text_processor.has_bullets(raw_text),
            has_tab_runs: self.text_processor.has_tab_runs(raw_text),
        }
    }

    fn overall_score(&self, record: &ResumeRecord, signals: &TextSignals) -> u8 {
        let skills = (record.skills.len() as u32 * 2).min(20);
        let experience = (record.experiences.len() as u32 * 3).min(15);

        let mut contact = 0;
        if record.email.is_some() {
            contact += 3;
        }
        if record.phone.is_some() {
            contact += 3;
        }
        if record.linkedin.is_some() {
            contact += 4;
        }

        let metrics = (signals.metrics.len() as u32 * 2).min(10);
        let verbs = (signals.action_verbs.len() as u32).min(5);

        clamp_score(OVERALL_BASE + skills + experience + contact + metrics + verbs)
    }

    fn ats_score(&self, signals: &TextSignals) -> u8 {
        let mut score = ATS_BASE;
        if !signals.has_table_characters {
            score += 10;
        }
        if !signals.action_verbs.is_empty() {
            score += 15;
        }
        if signals.has_section_words {
            score += 15;
        }
        if signals.is_ascii {
            score += 10;
        }
        clamp_score(score)
    }

    fn section_scores(&self, record: &ResumeRecord, signals: &TextSignals) -> SectionScores {
        let contact = match (record.email.is_some(), record.phone.is_some()) {
            (true, true) => 100,
            (true, false) | (false, true) => 60,
            (false, false) => 20,
        };

        let mut formatting = FORMATTING_BASE;
        if signals.line_count > 10 {
            formatting += 10;
        }
        if signals.has_bullets {
            formatting += 10;
        }
        if !signals.has_tab_runs {
            formatting += 10;
        }
        if (COMFORTABLE_MIN_CHARS..=LONG_TEXT_CHARS).contains(&signals.char_count) {
            formatting += 10;
        }

        SectionScores {
            contact,
            skills: clamp_score(record.skills.len() as u32 * 10),
            experience: clamp_score(record.experiences.len() as u32 * 20),
            education: if record.education.is_empty() { 30 } else { 80 },
            formatting: clamp_score(formatting),
        }
    }

    fn strengths(&self, record: &ResumeRecord, signals: &TextSignals) -> Vec<String> {
        let mut strengths = Vec::new();

        if record.skills.len() >= 5 {
            strengths.push(format!("Strong skill set with {} relevant skills", record.skills.len()));
        }
        if signals.has_metric(MetricKind::Percentage) {
            strengths.push("Quantifies impact with percentages".to_string());
        }
        if signals.has_metric(MetricKind::Currency) {
            strengths.push("Shows business impact in dollar terms".to_string());
        }
        if record.experiences.len() >= 3 {
            strengths.push(format!(
                "Clear experience structure with {} entries",
                record.experiences.len()
            ));
        }
        if record.linkedin.is_some() {
            strengths.push("Includes a LinkedIn profile".to_string());
        }
        if signals.action_verbs.len() >= 3 {
            strengths.push(format!(
                "Uses action-oriented language ({})",
                signals.action_verbs[..3].join(", ")
            ));
        }

        strengths.truncate(MAX_STRENGTHS);
        strengths
    }

    fn weaknesses(&self, record: &ResumeRecord, signals: &TextSignals) -> Vec<Weakness> {
        let mut weaknesses = Vec::new();
        let mut flag = |message: &str, priority: Priority| {
            weaknesses.push(Weakness {
                message: message.to_string(),
                priority,
            })
        };

        if record.skills.len() < 3 {
            flag("Few recognizable skills listed", Priority::High);
        }
        if !signals.has_metric(MetricKind::Percentage) && !signals.has_metric(MetricKind::Currency) {
            flag("No quantified achievements (percentages or dollar amounts)", Priority::High);
        }
        if record.summary.is_none() {
            flag("No professional summary detected", Priority::Medium);
        }
        if record.education.is_empty() {
            flag("No education entries detected", Priority::Medium);
        }
        if signals.char_count < SHORT_TEXT_CHARS {
            flag("Resume is very brief; add more detail about your roles", Priority::High);
        }
        if signals.char_count > LONG_TEXT_CHARS {
            flag("Resume is long; trim it to the most relevant content", Priority::Low);
        }

        weaknesses.truncate(MAX_WEAKNESSES);
        weaknesses
    }

    fn improvements(&self, record: &ResumeRecord, signals: &TextSignals) -> Vec<Improvement> {
        let mut improvements = Vec::new();
        let mut suggest = |section: ImprovementArea, tip: &str| {
            improvements.push(Improvement {
                section,
                tip: tip.to_string(),
            })
        };

        if !signals.has_metric(MetricKind::Percentage) {
            suggest(
                ImprovementArea::Experience,
                "Add percentage metrics to achievements, e.g. \"cut page load time by 40%\"",
            );
        }
        if !signals.has_metric(MetricKind::Currency) {
            suggest(
                ImprovementArea::Experience,
                "Quantify business impact in dollars, e.g. \"saved $120K in annual hosting costs\"",
            );
        }
        if signals.action_verbs.is_empty() {
            suggest(
                ImprovementArea::Experience,
                "Start bullets with strong action verbs such as \"Developed\", \"Led\" or \"Implemented\"",
            );
        }
        if record.summary.is_none() {
            suggest(
                ImprovementArea::Summary,
                "Add a two or three sentence professional summary under a \"Summary\" heading",
            );
        }
        if record.skills.len() < 8 {
            suggest(
                ImprovementArea::Skills,
                "Expand the skills section with tools and technologies relevant to your target role",
            );
        }

        improvements.truncate(MAX_IMPROVEMENTS - 1);
        improvements.push(Improvement {
            section: ImprovementArea::Keywords,
            tip: "Mirror keywords from the job description you are applying to".to_string(),
        });
        improvements
    }

    fn highlights(signals: &TextSignals) -> Highlights {
        let mut metrics: Vec<String> = Vec::new();
        for (_, text) in &signals.metrics {
            if !metrics.contains(text) {
                metrics.push(text.clone());
            }
        }

        Highlights {
            action_verbs: signals.action_verbs.iter().map(|v| v.to_string()).collect(),
            metrics,
        }
    }
}

impl SectionScores {
    /// Section name and score pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u8)> {
        [
            ("contact", self.contact),
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
            ("formatting", self.formatting),
        ]
        .into_iter()
    }
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Strong,
            60..=79 => ScoreBand::Fair,
            _ => ScoreBand::Weak,
        }
    }
}

fn clamp_score(score: u32) -> u8 {
    score.min(100) as u8
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

impl std::fmt::Display for ImprovementArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImprovementArea::Experience => write!(f, "Experience"),
            ImprovementArea::Summary => write!(f, "Summary"),
            ImprovementArea::Skills => write!(f, "Skills"),
            ImprovementArea::Keywords => write!(f, "Keywords"),
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreBand::Strong => write!(f, "Strong"),
            ScoreBand::Fair => write!(f, "Fair"),
            ScoreBand::Weak => write!(f, "Needs work"),
        }
    }
}
