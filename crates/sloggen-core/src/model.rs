//! The canonical model handed from the resolver to the emitter.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::{CONVENTIONAL_LEVELS, is_conventional_severity};

/// Level severity (`slog.Level` is a Go `int`).
pub type Severity = i64;

/// Variadic parameter convention of the generated `Logger` methods.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStyle {
    /// `args ...any`, passed to `Record.Add`.
    #[default]
    Any,
    /// `attrs ...slog.Attr`, passed to `Record.AddAttrs`.
    Attr,
}

impl ApiStyle {
    /// Parse the configuration spelling (`"any"` or `"attr"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "any" => Some(Self::Any),
            "attr" => Some(Self::Attr),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Attr => "attr",
        }
    }
}

impl fmt::Display for ApiStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings of the generated `Logger` wrapper type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoggerModel {
    /// One method is generated per level, in ascending severity.
    pub levels: BTreeMap<Severity, String>,
    pub api: ApiStyle,
    /// Methods take a leading `ctx context.Context`.
    pub context: bool,
}

impl LoggerModel {
    /// A logger over the four conventional levels.
    pub fn with_conventional_levels(api: ApiStyle, context: bool) -> Self {
        Self {
            levels: CONVENTIONAL_LEVELS
                .iter()
                .map(|&(severity, name)| (severity, name.to_string()))
                .collect(),
            api,
            context,
        }
    }

    pub fn attr_api(&self) -> bool {
        self.api == ApiStyle::Attr
    }
}

/// Fully resolved description of one generated Go file.
///
/// Every collection is sorted by construction, so iterating the model always
/// visits entries in the same order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Model {
    pub package: String,
    pub imports: BTreeSet<String>,
    /// severity → name
    pub levels: BTreeMap<Severity, String>,
    pub consts: BTreeSet<String>,
    /// key → Go type
    pub attrs: BTreeMap<String, String>,
    pub logger: Option<LoggerModel>,
}

impl Model {
    /// Whether any level falls outside the four conventional severities.
    ///
    /// Custom levels need `ParseLevel` and `ReplaceAttr`, since `log/slog`
    /// only knows how to name its own four.
    pub fn has_custom_levels(&self) -> bool {
        self.levels
            .keys()
            .any(|&severity| !is_conventional_severity(severity))
    }
}
