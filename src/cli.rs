//! CLI interface for resumecraft

use crate::config::{ExportFormat, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resumecraft")]
#[command(version)]
#[command(about = "Resume text analyzer: extraction, scoring, role targeting and export")]
#[command(long_about = "Parse free-form resume text into structured fields, score it for quality and ATS compatibility, \
tailor the skill list to a target role, and export a clean plain-text or HTML resume")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a resume and print the extracted fields as JSON
    Parse {
        /// Resume file (TXT, MD) or - for stdin
        input: PathBuf,
    },

    /// Parse and score a resume
    Analyze {
        /// Resume file (TXT, MD) or - for stdin
        input: PathBuf,

        /// Tailor skills to this role before scoring
        #[arg(short, long)]
        role: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Include highlights and skill categories
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Tailor a resume's skills to a target role and re-score it
    Optimize {
        /// Resume file (TXT, MD) or - for stdin
        input: PathBuf,

        /// Target role, e.g. "Frontend Developer"
        #[arg(short, long)]
        role: String,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Render a clean resume document
    Export {
        /// Resume file (TXT, MD) or - for stdin
        input: PathBuf,

        /// Export format: text, html
        #[arg(short, long)]
        format: Option<String>,

        /// Tailor skills to this role first
        #[arg(short, long)]
        role: Option<String>,

        /// Write to a file instead of stdout; without a path a name is suggested
        #[arg(short, long, num_args = 0..=1)]
        save: Option<Option<PathBuf>>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Parse and validate export format
pub fn parse_export_format(format: &str) -> Result<ExportFormat, String> {
    match format.to_lowercase().as_str() {
        "text" | "txt" => Ok(ExportFormat::Text),
        "html" => Ok(ExportFormat::Html),
        _ => Err(format!("Invalid export format: {}. Supported: text, html", format)),
    }
}
