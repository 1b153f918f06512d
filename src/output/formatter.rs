//! Rendering of a parsed record and its analysis for the terminal, JSON
//! consumers and Markdown documents

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::analyzer::{Priority, ScoreBand};
use crate::processing::{AnalysisReport, ResumeRecord};
use colored::{Color, Colorize};
use serde::Serialize;
use std::path::Path;

/// Shown in place of a contact field the extractor did not find
const NOT_FOUND: &str = "Not found";

/// Trait for formatting an analyzed resume
pub trait OutputFormatter {
    fn format_analysis(&self, record: &ResumeRecord, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and score badges
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    detailed: bool,
}

/// Picks the formatter for a requested output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

/// JSON document: the record and its analysis side by side
#[derive(Serialize)]
struct AnalysisOutput<'a> {
    record: &'a ResumeRecord,
    analysis: &'a AnalysisReport,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let band = ScoreBand::from_score(score);
        let color = match band {
            ScoreBand::Strong => Color::Green,
            ScoreBand::Fair => Color::Yellow,
            ScoreBand::Weak => Color::Red,
        };
        let label = band.to_string().to_uppercase();

        if self.use_colors {
            format!("[{}]", label.color(color).bold())
        } else {
            format!("[{}]", label)
        }
    }

    fn format_priority_icon(&self, priority: Priority) -> String {
        let (icon, color) = match priority {
            Priority::High => ("[!]", Color::Red),
            Priority::Medium => ("[*]", Color::Yellow),
            Priority::Low => ("[-]", Color::Blue),
        };
        self.colorize(icon, color)
    }

    /// Ten-cell bar for a 0-100 score
    fn score_bar(score: u8) -> String {
        let filled = (score as usize + 5) / 10;
        format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
    }

    fn contact_line(&self, label: &str, value: Option<&str>) -> String {
        match value {
            Some(value) => format!("  {:<10} {}\n", label, value),
            None => format!("  {:<10} {}\n", label, self.colorize(NOT_FOUND, Color::BrightBlack)),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_analysis(&self, record: &ResumeRecord, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header(&format!("RESUME ANALYSIS: {}", record.name), 1));
        if let Some(role) = &record.optimized_for {
            output.push_str(&format!("Optimized for: {}\n", self.colorize(role, Color::Cyan)));
        }
        output.push_str(&format!(
            "Overall Score: {}/100 {}\n",
            report.overall_score,
            self.format_score_badge(report.overall_score)
        ));
        output.push_str(&format!(
            "ATS Compatibility: {}/100 {}\n",
            report.ats_score,
            self.format_score_badge(report.ats_score)
        ));

        output.push_str(&self.format_header("Contact", 2));
        output.push_str(&self.contact_line("Email:", record.email.as_deref()));
        output.push_str(&self.contact_line("Phone:", record.phone.as_deref()));
        output.push_str(&self.contact_line("LinkedIn:", record.linkedin.as_deref()));
        if let Some(portfolio) = &record.portfolio {
            output.push_str(&self.contact_line("Portfolio:", Some(portfolio.as_str())));
        }

        output.push_str(&self.format_header("Section Scores", 2));
        for (section, score) in report.section_scores.iter() {
            output.push_str(&format!("  {:<11} {:>3} {}\n", section, score, Self::score_bar(score)));
        }

        if !report.strengths.is_empty() {
            output.push_str(&self.format_header("Strengths", 3));
            for strength in &report.strengths {
                output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
            }
        }

        if !report.weaknesses.is_empty() {
            output.push_str(&self.format_header("Weaknesses", 3));
            for weakness in &report.weaknesses {
                output.push_str(&format!(
                    "  {} {}\n",
                    self.format_priority_icon(weakness.priority),
                    weakness.message
                ));
            }
        }

        output.push_str(&self.format_header("Improvement Tips", 3));
        for (i, improvement) in report.improvements.iter().enumerate() {
            output.push_str(&format!(
                "  {}. [{}] {}\n",
                i + 1,
                self.colorize(&improvement.section.to_string(), Color::Cyan),
                improvement.tip
            ));
        }

        if self.detailed {
            output.push_str(&self.format_header("Skills by Category", 3));
            if record.skills.is_empty() {
                output.push_str("  No recognizable skills\n");
            }
            for group in record.skills_by_category() {
                output.push_str(&format!("  {}: {}\n", group.category, group.skills.join(", ")));
            }

            output.push_str(&self.format_header("Highlights", 3));
            output.push_str(&format!(
                "  Action verbs: {}\n",
                join_or_none(&report.highlights.action_verbs)
            ));
            output.push_str(&format!("  Metrics: {}\n", join_or_none(&report.highlights.metrics)));

            if !record.experiences.is_empty() {
                output.push_str(&self.format_header("Experience", 3));
                for experience in &record.experiences {
                    output.push_str(&format!("  • {}\n", experience));
                }
            }

            if !record.education.is_empty() {
                output.push_str(&self.format_header("Education", 3));
                for education in &record.education {
                    output.push_str(&format!("  • {}\n", education));
                }
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_analysis(&self, record: &ResumeRecord, report: &AnalysisReport) -> Result<String> {
        let output = AnalysisOutput {
            record,
            analysis: report,
        };
        if self.pretty {
            Ok(serde_json::to_string_pretty(&output)?)
        } else {
            Ok(serde_json::to_string(&output)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(detailed: bool) -> Self {
        Self { detailed }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match ScoreBand::from_score(score) {
            ScoreBand::Strong => "🟢 Strong",
            ScoreBand::Fair => "🟡 Fair",
            ScoreBand::Weak => "🔴 Needs work",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_analysis(&self, record: &ResumeRecord, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# Resume Analysis: {}\n\n", record.name));
        if let Some(role) = &record.optimized_for {
            output.push_str(&format!("_Optimized for: {}_\n\n", role));
        }
        output.push_str(&format!(
            "**Overall Score:** {}/100 {}\n\n",
            report.overall_score,
            Self::markdown_score_badge(report.overall_score)
        ));
        output.push_str(&format!(
            "**ATS Compatibility:** {}/100 {}\n\n",
            report.ats_score,
            Self::markdown_score_badge(report.ats_score)
        ));

        output.push_str("## Contact\n\n");
        output.push_str(&format!("- **Email:** {}\n", record.email.as_deref().unwrap_or(NOT_FOUND)));
        output.push_str(&format!("- **Phone:** {}\n", record.phone.as_deref().unwrap_or(NOT_FOUND)));
        output.push_str(&format!(
            "- **LinkedIn:** {}\n",
            record.linkedin.as_deref().unwrap_or(NOT_FOUND)
        ));
        if let Some(portfolio) = &record.portfolio {
            output.push_str(&format!("- **Portfolio:** {}\n", portfolio));
        }
        output.push('\n');

        output.push_str("## Section Scores\n\n| Section | Score |\n|---|---|\n");
        for (section, score) in report.section_scores.iter() {
            output.push_str(&format!("| {} | {} |\n", section, score));
        }
        output.push('\n');

        if !report.strengths.is_empty() {
            output.push_str("## Strengths\n\n");
            for strength in &report.strengths {
                output.push_str(&format!("- {}\n", strength));
            }
            output.push('\n');
        }

        if !report.weaknesses.is_empty() {
            output.push_str("## Weaknesses\n\n");
            for weakness in &report.weaknesses {
                output.push_str(&format!("- **{}**: {}\n", weakness.priority, weakness.message));
            }
            output.push('\n');
        }

        output.push_str("## Improvement Tips\n\n");
        for (i, improvement) in report.improvements.iter().enumerate() {
            output.push_str(&format!("{}. **{}**: {}\n", i + 1, improvement.section, improvement.tip));
        }
        output.push('\n');

        if self.detailed {
            output.push_str("## Skills\n\n");
            for group in record.skills_by_category() {
                output.push_str(&format!("- **{}:** {}\n", group.category, group.skills.join(", ")));
            }
            output.push('\n');

            output.push_str("## Highlights\n\n");
            output.push_str(&format!(
                "- **Action verbs:** {}\n",
                join_or_none(&report.highlights.action_verbs)
            ));
            output.push_str(&format!("- **Metrics:** {}\n\n", join_or_none(&report.highlights.metrics)));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(detailed),
        }
    }

    pub fn generate_report(
        &self,
        record: &ResumeRecord,
        report: &AnalysisReport,
        format: OutputFormat,
    ) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        };
        formatter.format_analysis(record, report)
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none found".to_string()
    } else {
        items.join(", ")
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}
