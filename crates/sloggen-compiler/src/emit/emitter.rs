//! Core emitter struct and main emit logic.

use std::collections::BTreeSet;

use sloggen_core::Model;

use super::error::{Result, SyntaxError};
use super::syntax;

/// Go source emitter for a resolved model.
pub struct Emitter<'a> {
    pub(super) model: &'a Model,
    /// Package-level identifiers declared so far
    pub(super) declared: BTreeSet<String>,
    /// Rendered slots, joined by blank lines
    pub(super) sections: Vec<String>,
}

impl<'a> Emitter<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self {
            model,
            declared: BTreeSet::new(),
            sections: Vec::new(),
        }
    }

    /// Render the whole file.
    ///
    /// Slots are visited in a fixed order and every model collection is
    /// sorted, so the output depends only on the model.
    pub fn emit(mut self) -> Result<String> {
        syntax::check_package(&self.model.package)?;

        self.emit_header()?;
        self.emit_imports()?;
        self.emit_level_consts()?;
        self.emit_string_consts()?;
        self.emit_attr_funcs()?;
        if self.model.has_custom_levels() {
            self.emit_parse_level()?;
            self.emit_replace_attr()?;
        }
        if self.model.logger.is_some() {
            self.emit_logger()?;
        }

        tracing::debug!(
            package = %self.model.package,
            sections = self.sections.len(),
            "emitted source"
        );

        Ok(self.sections.join("\n"))
    }

    /// Reserve a package-level identifier.
    pub(super) fn declare(&mut self, what: &'static str, name: &str, ident: String) -> Result<String> {
        if !syntax::is_identifier(&ident) {
            return Err(SyntaxError::InvalidIdentifier {
                what,
                name: name.to_string(),
                ident,
            }
            .into());
        }
        if !self.declared.insert(ident.clone()) {
            return Err(SyntaxError::DuplicateIdentifier(ident).into());
        }
        Ok(ident)
    }
}
