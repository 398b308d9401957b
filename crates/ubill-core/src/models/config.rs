//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::bill::ExtractionMode;

/// Main configuration for the ubill pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UbillConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Export configuration.
    pub output: OutputConfig,
}

impl Default for UbillConfig {
    fn default() -> Self {
        Self {
            pdf: PdfConfig::default(),
            extraction: ExtractionConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to process (0 = unlimited).
    pub max_pages: usize,

    /// Minimum extracted text length to treat the document as text-based.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            max_pages: 0,
            min_text_length: 50,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Extraction mode selected before traversal. The session may
    /// still drop to manual on structural failure.
    pub default_mode: ExtractionMode,

    /// Sentinel used when no facility name can be recognized and the
    /// operator declines to supply one.
    pub unknown_name: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_mode: ExtractionMode::Automatic,
            unknown_name: "Unknown Name".to_string(),
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Fixed path that always receives a second copy of the CSV,
    /// alongside the caller-specified output path.
    pub default_csv_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_csv_path: PathBuf::from("extracted_data.csv"),
        }
    }
}

impl UbillConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UbillConfig::default();
        assert_eq!(config.extraction.default_mode, ExtractionMode::Automatic);
        assert_eq!(config.extraction.unknown_name, "Unknown Name");
        assert_eq!(config.output.default_csv_path, PathBuf::from("extracted_data.csv"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = UbillConfig::default();
        config.extraction.default_mode = ExtractionMode::Manual;
        config.pdf.max_pages = 3;

        let json = serde_json::to_string(&config).unwrap();
        let parsed: UbillConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.extraction.default_mode, ExtractionMode::Manual);
        assert_eq!(parsed.pdf.max_pages, 3);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: UbillConfig = serde_json::from_str(r#"{"pdf": {"max_pages": 5}}"#).unwrap();
        assert_eq!(parsed.pdf.max_pages, 5);
        assert_eq!(parsed.pdf.min_text_length, 50);
        assert_eq!(parsed.extraction.unknown_name, "Unknown Name");
    }
}
