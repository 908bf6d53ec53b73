#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Config resolution and Go code emission for sloggen.
//!
//! The pipeline has two stages:
//! - [`config`] turns a JSON/TOML/YAML document and/or an option set into a
//!   canonical [`Model`](sloggen_core::Model)
//! - [`emit`] renders a model as a single Go source file
//!
//! [`generate`] runs both.

pub mod config;
pub mod emit;

pub use config::{ConfigError, DocumentFormat, Options};
pub use emit::{EmitError, SyntaxError};

/// Errors from either pipeline stage.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Resolve the inputs and render the Go source.
pub fn generate(document: Option<(&str, DocumentFormat)>, options: &Options) -> Result<String> {
    let model = config::load(document, options)?;
    Ok(emit::emit(&model)?)
}
