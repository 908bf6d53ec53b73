//! Config resolution: raw input → canonical [`Model`].
//!
//! Two input modes feed the same pipeline:
//! - `document` - a declarative JSON/TOML/YAML document
//! - `options` - a command-line style option set
//!
//! Either one, or a document layered with options, is first flattened into a
//! [`RawConfig`] and then folded by [`resolve`].

mod document;
mod error;
mod options;
mod raw;
mod resolve;

#[cfg(test)]
mod resolve_tests;

pub use document::{Document, DocumentFormat, LoggerBlock};
pub use error::{ConfigError, DecodeError, Result};
pub use options::{Options, parse_attr, parse_level};
pub use raw::{RawConfig, RawLogger};
pub use resolve::resolve;

use sloggen_core::Model;

/// Resolve a model from an optional document with `options` layered on top.
pub fn load(document: Option<(&str, DocumentFormat)>, options: &Options) -> Result<Model> {
    let mut raw = match document {
        Some((text, format)) => RawConfig::from(Document::parse(text, format)?),
        None => RawConfig::default(),
    };
    raw.apply(options)?;
    resolve(raw)
}
