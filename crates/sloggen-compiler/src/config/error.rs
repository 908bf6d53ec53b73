//! Errors raised while turning raw input into a [`Model`](sloggen_core::Model).

use std::num::ParseIntError;

/// Underlying cause of a document that failed to decode.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml_ng::Error),

    /// An empty map in a list of single-entry maps.
    #[error("{field}[{index}]: empty entry, expected one `name: value` pair")]
    EmptyEntry { field: &'static str, index: usize },
}

/// Errors that can occur during config resolution.
///
/// Every variant is a deterministic function of the input: retrying with the
/// same input fails the same way.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The declarative document is not valid JSON/TOML/YAML or has the wrong shape.
    #[error("decoding config: {0}")]
    Decode(#[from] DecodeError),

    /// The config path has no recognized extension.
    #[error("unsupported config format {0:?} (expected .json, .toml or .yaml)")]
    UnsupportedFormat(String),

    /// A `key:value` flag did not split into exactly two parts.
    #[error("--{flag}={value}: invalid value")]
    MalformedOption { flag: &'static str, value: String },

    /// A level severity is not an integer.
    #[error("parsing severity {value:?}: {source}")]
    InvalidSeverity {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// `logger.api` is neither `any` nor `attr`.
    #[error("{0:?}: invalid logger.api value")]
    InvalidApi(String),

    /// A level name, attribute key or constant name is empty or not a single token.
    #[error("{field} name {name:?}: must be a non-empty token without whitespace or ':'")]
    InvalidName { field: &'static str, name: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
