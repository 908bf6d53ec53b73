//! Output rendering methods, one per slot.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use sloggen_core::utils::to_camel_case;

use super::Emitter;
use super::error::{Result, SyntaxError};
use super::naming::{go_to_upper, level_const, quote, slog_constructor};
use super::syntax;

const HEADER: &str = "// Code generated by sloggen. DO NOT EDIT.";

impl Emitter<'_> {
    pub(super) fn emit_header(&mut self) -> Result<()> {
        self.sections.push(format!("{HEADER}\n"));
        self.sections
            .push(format!("package {}\n", self.model.package));
        Ok(())
    }

    pub(super) fn emit_imports(&mut self) -> Result<()> {
        if self.model.imports.is_empty() {
            return Ok(());
        }
        let mut out = String::new();
        for path in &self.model.imports {
            syntax::check_import(path)?;
            writeln!(out, "import {}", quote(path))?;
        }
        self.sections.push(out);
        Ok(())
    }

    pub(super) fn emit_level_consts(&mut self) -> Result<()> {
        let model = self.model;
        if model.levels.is_empty() {
            return Ok(());
        }
        let mut out = String::new();
        for (severity, name) in &model.levels {
            let ident = self.declare("level", name, level_const(name))?;
            writeln!(out, "const {ident} = slog.Level({severity})")?;
        }
        self.sections.push(out);
        Ok(())
    }

    pub(super) fn emit_string_consts(&mut self) -> Result<()> {
        let model = self.model;
        if model.consts.is_empty() {
            return Ok(());
        }
        let mut out = String::new();
        for name in &model.consts {
            let ident = self.declare("const", name, to_camel_case(name))?;
            writeln!(out, "const {ident} = {}", quote(name))?;
        }
        self.sections.push(out);
        Ok(())
    }

    pub(super) fn emit_attr_funcs(&mut self) -> Result<()> {
        let model = self.model;
        for (key, typ) in &model.attrs {
            let ident = self.declare("attr", key, to_camel_case(key))?;
            syntax::check_type(key, typ)?;

            let mut out = String::new();
            writeln!(out, "func {ident}(value {typ}) slog.Attr {{")?;
            writeln!(
                out,
                "\treturn slog.{}({}, value)",
                slog_constructor(typ),
                quote(key)
            )?;
            writeln!(out, "}}")?;
            self.sections.push(out);
        }
        Ok(())
    }

    pub(super) fn emit_parse_level(&mut self) -> Result<()> {
        let model = self.model;
        self.declare("helper", "ParseLevel", "ParseLevel".to_string())?;

        // Names are matched after `strings.ToUpper`, so they must stay distinct after folding.
        let mut seen: BTreeMap<String, &str> = BTreeMap::new();
        let mut out = String::new();
        writeln!(out, "func ParseLevel(s string) (slog.Level, error) {{")?;
        writeln!(out, "\tswitch strings.ToUpper(s) {{")?;
        for name in model.levels.values() {
            let upper = go_to_upper(name);
            if let Some(prev) = seen.insert(upper.clone(), name) {
                return Err(
                    SyntaxError::DuplicateLevelName(prev.to_string(), name.clone()).into(),
                );
            }
            writeln!(out, "\tcase {}:", quote(&upper))?;
            writeln!(out, "\t\treturn {}, nil", level_const(name))?;
        }
        writeln!(out, "\tdefault:")?;
        writeln!(
            out,
            "\t\treturn 0, fmt.Errorf(\"slog: level string %q: unknown name\", s)"
        )?;
        writeln!(out, "\t}}")?;
        writeln!(out, "}}")?;
        self.sections.push(out);
        Ok(())
    }

    pub(super) fn emit_replace_attr(&mut self) -> Result<()> {
        self.declare("helper", "ReplaceAttr", "ReplaceAttr".to_string())?;

        let mut out = String::new();
        writeln!(out, "func ReplaceAttr(_ []string, attr slog.Attr) slog.Attr {{")?;
        writeln!(out, "\tif attr.Key != slog.LevelKey {{")?;
        writeln!(out, "\t\treturn attr")?;
        writeln!(out, "\t}}")?;
        writeln!(out, "\tlevel, ok := attr.Value.Any().(slog.Level)")?;
        writeln!(out, "\tif !ok {{")?;
        writeln!(out, "\t\treturn attr")?;
        writeln!(out, "\t}}")?;
        writeln!(out, "\tswitch level {{")?;
        for name in self.model.levels.values() {
            writeln!(out, "\tcase {}:", level_const(name))?;
            writeln!(
                out,
                "\t\tattr.Value = slog.StringValue({})",
                quote(&go_to_upper(name))
            )?;
        }
        writeln!(out, "\t}}")?;
        writeln!(out, "\treturn attr")?;
        writeln!(out, "}}")?;
        self.sections.push(out);
        Ok(())
    }

    pub(super) fn emit_logger(&mut self) -> Result<()> {
        let model = self.model;
        let Some(logger) = model.logger.as_ref() else {
            return Ok(());
        };
        self.declare("logger", "Logger", "Logger".to_string())?;
        self.sections
            .push("type Logger struct{ Logger *slog.Logger }\n".to_string());

        let (variadic, forward, add) = if logger.attr_api() {
            ("attrs ...slog.Attr", "attrs...", "r.AddAttrs(attrs...)")
        } else {
            ("args ...any", "args...", "r.Add(args...)")
        };
        let (ctx_param, ctx_arg) = if logger.context {
            ("ctx context.Context, ", "ctx")
        } else {
            ("", "context.Background()")
        };
        // Without top-level levels the logger falls back to slog's own constants.
        let qualifier = if model.levels.is_empty() {
            "slog."
        } else {
            ""
        };

        // Field and methods share one namespace.
        let mut members: BTreeSet<String> = ["Logger".to_string(), "log".to_string()].into();
        for name in logger.levels.values() {
            let method = to_camel_case(name);
            if !syntax::is_identifier(&method) {
                return Err(SyntaxError::InvalidIdentifier {
                    what: "level",
                    name: name.clone(),
                    ident: method,
                }
                .into());
            }
            if !members.insert(method.clone()) {
                return Err(SyntaxError::DuplicateIdentifier(format!("Logger.{method}")).into());
            }

            let mut out = String::new();
            writeln!(
                out,
                "func (l Logger) {method}({ctx_param}msg string, {variadic}) {{"
            )?;
            writeln!(
                out,
                "\tl.log({ctx_arg}, {qualifier}{}, msg, {forward})",
                level_const(name)
            )?;
            writeln!(out, "}}")?;
            self.sections.push(out);
        }

        let mut out = String::new();
        writeln!(
            out,
            "func (l Logger) log(ctx context.Context, level slog.Level, msg string, {variadic}) {{"
        )?;
        writeln!(out, "\tif !l.Logger.Enabled(ctx, level) {{")?;
        writeln!(out, "\t\treturn")?;
        writeln!(out, "\t}}")?;
        writeln!(out)?;
        writeln!(out, "\tvar pcs [1]uintptr")?;
        writeln!(
            out,
            "\truntime.Callers(3, pcs[:]) // skip [runtime.Callers, l.log, l.<Level>]"
        )?;
        writeln!(out)?;
        writeln!(out, "\tr := slog.NewRecord(time.Now(), level, msg, pcs[0])")?;
        writeln!(out, "\t{add}")?;
        writeln!(out, "\t_ = l.Logger.Handler().Handle(ctx, r)")?;
        writeln!(out, "}}")?;
        self.sections.push(out);
        Ok(())
    }
}
