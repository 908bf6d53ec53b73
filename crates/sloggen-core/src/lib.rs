#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for sloggen.
//!
//! Two layers:
//! - **Model layer**: the canonical, fully resolved description of what to
//!   generate ([`Model`], [`LoggerModel`], [`ApiStyle`])
//! - **Naming layer**: identifier helpers shared by the resolver and emitter
//!   ([`utils`])

mod model;
pub mod utils;


pub use model::{ApiStyle, LoggerModel, Model, Severity};

// ============================================================================
// Generator Constants
// ============================================================================

/// Package name used when the configuration does not name one.
pub const DEFAULT_PACKAGE: &str = "slogx";

/// The four severities `log/slog` predefines, with their conventional names.
///
/// Ordered by ascending severity.
pub const CONVENTIONAL_LEVELS: [(Severity, &str); 4] =
    [(-4, "debug"), (0, "info"), (4, "warn"), (8, "error")];

/// Import path of the structured-logging package.
pub const IMPORT_SLOG: &str = "log/slog";
/// Imports used by the generated `ParseLevel` helper.
pub const IMPORTS_LEVEL_HELPERS: [&str; 2] = ["fmt", "strings"];
/// Imports used by the generated `Logger` type.
pub const IMPORTS_LOGGER: [&str; 3] = ["context", "runtime", "time"];

/// Whether `severity` is one of the four conventional `log/slog` severities.
pub fn is_conventional_severity(severity: Severity) -> bool {
    CONVENTIONAL_LEVELS.iter().any(|&(s, _)| s == severity)
}
