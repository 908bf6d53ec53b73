//! Emission error types.

/// Generated text that would not be valid Go.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("package name {0:?} is not a valid Go identifier")]
    InvalidPackage(String),

    #[error("{what} {name:?} produces invalid identifier {ident:?}")]
    InvalidIdentifier {
        what: &'static str,
        name: String,
        ident: String,
    },

    #[error("identifier {0:?} is declared more than once")]
    DuplicateIdentifier(String),

    #[error("level names {0:?} and {1:?} are equal ignoring case")]
    DuplicateLevelName(String, String),

    #[error("import path {0:?} is not valid")]
    InvalidImport(String),

    #[error("attr {key:?}: {typ:?} is not a valid Go type")]
    InvalidType { key: String, typ: String },
}

/// Errors that can occur while rendering a model.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// Writing into the output buffer failed.
    #[error("rendering code: {0}")]
    Render(#[from] std::fmt::Error),

    /// The model would render to invalid source.
    #[error("invalid code: {0}")]
    Syntax(#[from] SyntaxError),

    /// The external formatter could not run or rejected the source.
    #[error("formatting code with {program}: {message}")]
    Format { program: String, message: String },
}

pub type Result<T> = std::result::Result<T, EmitError>;
