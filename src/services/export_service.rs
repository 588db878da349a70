//! Domain service for catalog exports.
//!
//! Produces a downloadable snapshot of every tool plus the system status,
//! either as a JSON document or as a CSV table of the tools.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
        }
    }

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A rendered export ready to be sent or written to disk.
#[derive(Debug, Clone)]
pub struct ExportedData {
    pub format: ExportFormat,
    pub body: String,
}

impl ExportedData {
    #[must_use]
    pub fn filename(&self) -> String {
        format!(
            "{}.{}",
            crate::constants::export::FILE_STEM,
            self.format.extension()
        )
    }
}

#[async_trait::async_trait]
pub trait ExportService: Send + Sync {
    /// Renders the current catalog in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Serialization`] if the JSON document cannot be
    /// encoded.
    async fn export(&self, format: ExportFormat) -> Result<ExportedData, ExportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!(matches!(
            "xyz".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat(f)) if f == "xyz"
        ));
        assert!("CSV".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_filename() {
        let data = ExportedData {
            format: ExportFormat::Csv,
            body: String::new(),
        };
        assert_eq!(data.filename(), "knox-export.csv");
    }
}
