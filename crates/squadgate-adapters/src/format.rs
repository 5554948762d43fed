//! Document formats shared by the file adapters.
//!
//! Roster and squad files are plain TOML or JSON; the extension decides
//! which parser runs.

use std::{fs, path::Path};

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Supported on-disk document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Failure reading or writing a document.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unsupported file type '{path}' (expected .toml or .json)")]
    UnsupportedExtension { path: String },

    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{path}': {reason}")]
    Parse { path: String, reason: String },

    #[error("failed to serialize '{path}': {reason}")]
    Serialize { path: String, reason: String },
}

fn format_of(path: &Path) -> Result<FileFormat, FormatError> {
    FileFormat::from_path(path).ok_or_else(|| FormatError::UnsupportedExtension {
        path: path.display().to_string(),
    })
}

/// Read and deserialize a TOML or JSON document.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, FormatError> {
    let format = format_of(path)?;
    let raw = fs::read_to_string(path).map_err(|source| FormatError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let parsed = match format {
        FileFormat::Toml => toml::from_str(&raw).map_err(|e| e.to_string()),
        FileFormat::Json => serde_json::from_str(&raw).map_err(|e| e.to_string()),
    };
    parsed.map_err(|reason| FormatError::Parse {
        path: path.display().to_string(),
        reason,
    })
}

/// Serialize `value` in the format implied by `path` and write it.
pub fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<(), FormatError> {
    let format = format_of(path)?;
    let rendered = match format {
        FileFormat::Toml => toml::to_string_pretty(value).map_err(|e| e.to_string()),
        FileFormat::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
    }
    .map_err(|reason| FormatError::Serialize {
        path: path.display().to_string(),
        reason,
    })?;

    fs::write(path, rendered).map_err(|source| FormatError::Write {
        path: path.display().to_string(),
        source,
    })
}
