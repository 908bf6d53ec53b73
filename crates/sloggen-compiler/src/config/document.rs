//! The declarative config document.
//!
//! Lists of single-entry maps (`levels`, `attrs`) keep document order so the
//! last-wins merge sees entries exactly as written.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use sloggen_core::Severity;

use super::error::{ConfigError, DecodeError, Result};

/// Serialization syntax of a config document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DocumentFormat {
    #[default]
    Json,
    Toml,
    Yaml,
}

impl DocumentFormat {
    /// Parse a format name as accepted by `--format`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_name(ext).ok_or_else(|| ConfigError::UnsupportedFormat(ext.to_string()))
    }
}

/// Raw config document, 1:1 with the on-disk shape.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    #[serde(default)]
    pub pkg: Option<String>,
    #[serde(default)]
    pub imports: Vec<String>,
    /// name → severity
    #[serde(default)]
    pub levels: Vec<IndexMap<String, Severity>>,
    #[serde(default)]
    pub consts: Vec<String>,
    /// key → type
    #[serde(default)]
    pub attrs: Vec<IndexMap<String, String>>,
    #[serde(default)]
    pub logger: Option<LoggerBlock>,
}

/// The `logger` block of a document.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerBlock {
    #[serde(default)]
    pub api: Option<String>,
    #[serde(default, alias = "context")]
    pub ctx: bool,
}

impl Document {
    /// Decode a document. Blank input is an empty document.
    pub fn parse(text: &str, format: DocumentFormat) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let doc: Self = match format {
            DocumentFormat::Json => serde_json::from_str(text).map_err(DecodeError::from)?,
            DocumentFormat::Toml => toml::from_str(text).map_err(DecodeError::from)?,
            DocumentFormat::Yaml => serde_yaml_ng::from_str(text).map_err(DecodeError::from)?,
        };
        doc.check_entries()?;
        Ok(doc)
    }

    /// Each `levels`/`attrs` entry must name at least one pair.
    fn check_entries(&self) -> Result<()> {
        if let Some(index) = self.levels.iter().position(IndexMap::is_empty) {
            return Err(DecodeError::EmptyEntry { field: "levels", index }.into());
        }
        if let Some(index) = self.attrs.iter().position(IndexMap::is_empty) {
            return Err(DecodeError::EmptyEntry { field: "attrs", index }.into());
        }
        Ok(())
    }
}
