//! Folding a [`RawConfig`] into the canonical [`Model`].

use std::collections::{BTreeMap, BTreeSet};

use sloggen_core::{
    ApiStyle, DEFAULT_PACKAGE, IMPORT_SLOG, IMPORTS_LEVEL_HELPERS, IMPORTS_LOGGER, LoggerModel,
    Model, Severity,
};

use super::error::{ConfigError, Result};
use super::raw::RawConfig;

/// Resolve a raw config into a model.
///
/// Levels merge by severity and attributes by key; in both cases the last
/// entry for a given key replaces earlier ones.
pub fn resolve(raw: RawConfig) -> Result<Model> {
    let logger_api = match &raw.logger {
        Some(logger) => Some(resolve_api(logger.api.as_deref())?),
        None => None,
    };

    let mut levels: BTreeMap<Severity, String> = BTreeMap::new();
    for (name, severity) in raw.levels {
        check_name("level", &name)?;
        if let Some(prev) = levels.insert(severity, name) {
            tracing::trace!(severity, %prev, "level overridden");
        }
    }

    let mut attrs: BTreeMap<String, String> = BTreeMap::new();
    for (key, typ) in raw.attrs {
        check_name("attr", &key)?;
        if let Some(prev) = attrs.insert(key, typ) {
            tracing::trace!(%prev, "attr type overridden");
        }
    }

    let mut consts = BTreeSet::new();
    for name in raw.consts {
        check_name("const", &name)?;
        consts.insert(name);
    }

    let logger = match (raw.logger, logger_api) {
        (Some(logger), Some(api)) if levels.is_empty() => Some(
            LoggerModel::with_conventional_levels(api, logger.context),
        ),
        (Some(logger), Some(api)) => Some(LoggerModel {
            levels: levels.clone(),
            api,
            context: logger.context,
        }),
        _ => None,
    };

    let package = match raw.pkg {
        Some(pkg) if !pkg.is_empty() => pkg,
        _ => DEFAULT_PACKAGE.to_string(),
    };

    let imports = derive_imports(raw.imports, &levels, &attrs, logger.is_some());

    let model = Model {
        package,
        imports,
        levels,
        consts,
        attrs,
        logger,
    };

    tracing::debug!(
        package = %model.package,
        imports = model.imports.len(),
        levels = model.levels.len(),
        consts = model.consts.len(),
        attrs = model.attrs.len(),
        logger = model.logger.is_some(),
        "resolved config"
    );

    Ok(model)
}

fn resolve_api(api: Option<&str>) -> Result<ApiStyle> {
    match api {
        None => Ok(ApiStyle::default()),
        Some(name) => {
            ApiStyle::from_name(name).ok_or_else(|| ConfigError::InvalidApi(name.to_string()))
        }
    }
}

/// Explicit imports plus whatever the populated sections need.
fn derive_imports(
    explicit: Vec<String>,
    levels: &BTreeMap<Severity, String>,
    attrs: &BTreeMap<String, String>,
    has_logger: bool,
) -> BTreeSet<String> {
    let mut imports: BTreeSet<String> = explicit.into_iter().collect();

    if !levels.is_empty() || !attrs.is_empty() || has_logger {
        imports.insert(IMPORT_SLOG.to_string());
    }
    if !levels.is_empty() {
        imports.extend(IMPORTS_LEVEL_HELPERS.iter().map(|s| s.to_string()));
    }
    if has_logger {
        imports.extend(IMPORTS_LOGGER.iter().map(|s| s.to_string()));
    }

    imports
}

fn check_name(field: &'static str, name: &str) -> Result<()> {
    let valid = !name.is_empty() && !name.chars().any(|c| c == ':' || c.is_whitespace());
    if valid {
        return Ok(());
    }
    Err(ConfigError::InvalidName {
        field,
        name: name.to_string(),
    })
}
