//! Loosely-typed intermediate configuration.
//!
//! Both input modes land here first. Entries are plain ordered sequences,
//! duplicates included; uniqueness is only enforced when folding into the
//! [`Model`](sloggen_core::Model).

use sloggen_core::Severity;

use super::document::Document;
use super::error::Result;
use super::options::Options;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawConfig {
    pub pkg: Option<String>,
    pub imports: Vec<String>,
    /// (name, severity) in input order
    pub levels: Vec<(String, Severity)>,
    pub consts: Vec<String>,
    /// (key, type) in input order
    pub attrs: Vec<(String, String)>,
    pub logger: Option<RawLogger>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawLogger {
    pub api: Option<String>,
    pub context: bool,
}

impl From<Document> for RawConfig {
    fn from(doc: Document) -> Self {
        Self {
            pkg: doc.pkg,
            imports: doc.imports,
            levels: doc.levels.into_iter().flatten().collect(),
            consts: doc.consts,
            attrs: doc.attrs.into_iter().flatten().collect(),
            logger: doc.logger.map(|block| RawLogger {
                api: block.api,
                context: block.ctx,
            }),
        }
    }
}

impl RawConfig {
    /// Build a config from options alone.
    pub fn from_options(options: &Options) -> Result<Self> {
        let mut raw = Self::default();
        raw.apply(options)?;
        Ok(raw)
    }

    /// Layer `options` on top of this config.
    ///
    /// Option entries are appended after existing ones, so they win the
    /// last-wins merge. Every option is parsed before anything is merged: on
    /// error, `self` is left untouched.
    pub fn apply(&mut self, options: &Options) -> Result<()> {
        let levels = options.parse_levels()?;
        let attrs = options.parse_attrs()?;

        if let Some(pkg) = &options.pkg {
            self.pkg = Some(pkg.clone());
        }
        self.imports.extend(options.imports.iter().cloned());
        self.levels.extend(levels);
        self.consts.extend(options.consts.iter().cloned());
        self.attrs.extend(attrs);

        if options.logger && self.logger.is_none() {
            self.logger = Some(RawLogger::default());
        }
        if let Some(logger) = &mut self.logger {
            if let Some(api) = &options.api {
                logger.api = Some(api.clone());
            }
            if options.context {
                logger.context = true;
            }
        }

        Ok(())
    }
}
