//! Configuration management for resumecraft

use crate::error::{Result, ResumeCraftError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub optimize: OptimizeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
    pub detailed: bool,
    /// Spinner on stderr while the pipeline runs
    pub show_progress: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub include_styles: bool,
    pub timestamp_filenames: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Text,
    Html,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeConfig {
    /// Role used when `--role` is given blank
    pub default_role: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color: true,
            detailed: false,
            show_progress: true,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Text,
            include_styles: true,
            timestamp_filenames: false,
        }
    }
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            default_role: "General Position".to_string(),
        }
    }
}

impl Config {
    /// Load from `path`, writing the defaults there first if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeCraftError::Configuration(format!("Failed to parse config {}: {}", path.display(), e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ResumeCraftError::Configuration(format!("Failed to serialize config: {}", e)))
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resumecraft")
            .join("config.toml")
    }

    /// `role` trimmed, or the configured default when blank
    pub fn resolve_role(&self, role: &str) -> String {
        let role = role.trim();
        if role.is_empty() {
            self.optimize.default_role.clone()
        } else {
            role.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\nformat = \"json\"\ncolor = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
        assert!(config.output.show_progress);
        assert_eq!(config.export.format, ExportFormat::Text);
        assert_eq!(config.optimize.default_role, "General Position");
    }

    #[test]
    fn test_invalid_file_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\nformat = \"pdf\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ResumeCraftError::Configuration(_)));
    }

    #[test]
    fn test_resolve_role() {
        let config = Config::default();
        assert_eq!(config.resolve_role("  Data Engineer "), "Data Engineer");
        assert_eq!(config.resolve_role("   "), "General Position");
    }
}
