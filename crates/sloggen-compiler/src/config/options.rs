//! Command-line style option set.
//!
//! Values are kept as the user typed them; [`RawConfig::apply`] parses and
//! validates them as a whole before merging anything.
//!
//! [`RawConfig::apply`]: super::RawConfig::apply

use sloggen_core::Severity;
use sloggen_core::utils::split_pair;

use super::error::{ConfigError, Result};

/// Options equivalent to the fields of a [`Document`](super::Document).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub pkg: Option<String>,
    pub imports: Vec<String>,
    /// `name:severity`
    pub levels: Vec<String>,
    pub consts: Vec<String>,
    /// `key:type`
    pub attrs: Vec<String>,
    /// Enable the `Logger` type.
    pub logger: bool,
    /// `any` or `attr`; ignored without a logger.
    pub api: Option<String>,
    /// Add `ctx context.Context` to `Logger` methods; ignored without a logger.
    pub context: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pkg(mut self, name: impl Into<String>) -> Self {
        self.pkg = Some(name.into());
        self
    }

    pub fn import(mut self, path: impl Into<String>) -> Self {
        self.imports.push(path.into());
        self
    }

    pub fn level(mut self, value: impl Into<String>) -> Self {
        self.levels.push(value.into());
        self
    }

    pub fn constant(mut self, name: impl Into<String>) -> Self {
        self.consts.push(name.into());
        self
    }

    pub fn attr(mut self, value: impl Into<String>) -> Self {
        self.attrs.push(value.into());
        self
    }

    pub fn logger(mut self, value: bool) -> Self {
        self.logger = value;
        self
    }

    pub fn api(mut self, value: impl Into<String>) -> Self {
        self.api = Some(value.into());
        self
    }

    pub fn context(mut self, value: bool) -> Self {
        self.context = value;
        self
    }

    pub(super) fn parse_levels(&self) -> Result<Vec<(String, Severity)>> {
        self.levels.iter().map(|s| parse_level(s)).collect()
    }

    pub(super) fn parse_attrs(&self) -> Result<Vec<(String, String)>> {
        self.attrs.iter().map(|s| parse_attr(s)).collect()
    }
}

/// Parse a `name:severity` level flag.
pub fn parse_level(value: &str) -> Result<(String, Severity)> {
    let (name, severity) = split_pair(value).ok_or_else(|| ConfigError::MalformedOption {
        flag: "level",
        value: value.to_string(),
    })?;
    let severity = severity
        .parse::<Severity>()
        .map_err(|source| ConfigError::InvalidSeverity {
            value: severity.to_string(),
            source,
        })?;
    Ok((name.to_string(), severity))
}

/// Parse a `key:type` attribute flag.
pub fn parse_attr(value: &str) -> Result<(String, String)> {
    let (key, typ) = split_pair(value).ok_or_else(|| ConfigError::MalformedOption {
        flag: "attr",
        value: value.to_string(),
    })?;
    Ok((key.to_string(), typ.to_string()))
}
