//! Go source emission from a resolved model.
//!
//! The output is a fixed sequence of slots, each rendered by a pure function
//! of the model:
//! - generated-code header and `package` clause
//! - imports
//! - level constants and string constants
//! - attribute constructors
//! - `ParseLevel`/`ReplaceAttr` when custom levels exist
//! - the `Logger` wrapper type when requested
//!
//! Text is produced already `gofmt`-stable. [`format::gofmt`] is an optional
//! extra pass through the real formatter.

mod emitter;
mod error;
pub mod format;
mod naming;
mod render;
pub mod syntax;

#[cfg(test)]
mod naming_tests;
#[cfg(test)]
mod syntax_tests;

pub use emitter::Emitter;
pub use error::{EmitError, Result, SyntaxError};
pub use naming::{go_to_upper, level_const, quote, slog_constructor};

use sloggen_core::Model;

/// Render `model` as Go source.
pub fn emit(model: &Model) -> Result<String> {
    Emitter::new(model).emit()
}
