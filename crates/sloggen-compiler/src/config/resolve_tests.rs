use std::collections::{BTreeMap, BTreeSet};

use sloggen_core::{ApiStyle, LoggerModel, Model};

use super::{ConfigError, DocumentFormat, Options, RawConfig, RawLogger, load, resolve};

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn levels(entries: &[(i64, &str)]) -> BTreeMap<i64, String> {
    entries
        .iter()
        .map(|&(severity, name)| (severity, name.to_string()))
        .collect()
}

fn conventional() -> BTreeMap<i64, String> {
    levels(&[(-4, "debug"), (0, "info"), (4, "warn"), (8, "error")])
}

fn resolve_options(options: Options) -> Model {
    resolve(RawConfig::from_options(&options).unwrap()).unwrap()
}

#[test]
fn document_resolves_to_model() {
    let text = r#"
        pkg = "test"
        imports = ["time"]
        levels = [{ custom = -8 }]
        consts = ["foo"]
        attrs = [{ bar = "time.Time" }, { baz = "time.Duration" }]
    "#;
    let model = load(Some((text, DocumentFormat::Toml)), &Options::new()).unwrap();

    assert_eq!(
        model,
        Model {
            package: "test".to_string(),
            imports: set(&["fmt", "log/slog", "strings", "time"]),
            levels: levels(&[(-8, "custom")]),
            consts: set(&["foo"]),
            attrs: [
                ("bar".to_string(), "time.Time".to_string()),
                ("baz".to_string(), "time.Duration".to_string()),
            ]
            .into(),
            logger: None,
        }
    );
}

#[test]
fn empty_input_uses_fallback_package() {
    let model = resolve(RawConfig::default()).unwrap();
    assert_eq!(
        model,
        Model {
            package: "slogx".to_string(),
            ..Model::default()
        }
    );
}

#[test]
fn empty_package_uses_fallback() {
    let model = resolve_options(Options::new().pkg(""));
    assert_eq!(model.package, "slogx");
}

#[test]
fn levels_last_wins_by_severity() {
    let model = resolve_options(Options::new().level("info:0").level("notice:0"));
    assert_eq!(model.levels, levels(&[(0, "notice")]));
}

#[test]
fn same_name_different_severity_kept_as_two_levels() {
    let model = resolve_options(Options::new().level("info:0").level("info:1"));
    assert_eq!(model.levels, levels(&[(0, "info"), (1, "info")]));
}

#[test]
fn attrs_last_wins_by_key() {
    let model = resolve_options(Options::new().attr("id:int").attr("id:string"));
    assert_eq!(
        model.attrs,
        [("id".to_string(), "string".to_string())].into()
    );
}

#[test]
fn attrs_sorted_by_key() {
    let model = resolve_options(Options::new().attr("baz:time.Duration").attr("bar:time.Time"));
    let keys: Vec<_> = model.attrs.keys().map(String::as_str).collect();
    assert_eq!(keys, ["bar", "baz"]);
}

#[test]
fn consts_sorted_and_deduplicated() {
    let model = resolve_options(
        Options::new()
            .constant("request_id")
            .constant("b")
            .constant("request_id"),
    );
    assert_eq!(model.consts, set(&["b", "request_id"]));
}

#[test]
fn no_sections_no_imports() {
    let model = resolve_options(Options::new().constant("foo"));
    assert!(model.imports.is_empty());
}

#[test]
fn explicit_imports_sorted_and_deduplicated() {
    let model = resolve_options(
        Options::new()
            .import("time")
            .import("log/slog")
            .import("time")
            .attr("at:time.Time"),
    );
    assert_eq!(model.imports, set(&["log/slog", "time"]));
}

#[test]
fn attrs_require_slog_only() {
    let model = resolve_options(Options::new().attr("id:int"));
    assert_eq!(model.imports, set(&["log/slog"]));
}

#[test]
fn levels_require_helper_imports() {
    let model = resolve_options(Options::new().level("info:0"));
    assert_eq!(model.imports, set(&["fmt", "log/slog", "strings"]));
}

#[test]
fn logger_requires_context_and_runtime() {
    let model = resolve_options(Options::new().logger(true));
    assert_eq!(
        model.imports,
        set(&["context", "log/slog", "runtime", "time"])
    );
}

#[test]
fn logger_without_levels_gets_conventional_levels() {
    let model = resolve_options(Options::new().logger(true));
    assert!(model.levels.is_empty());
    assert_eq!(
        model.logger,
        Some(LoggerModel {
            levels: conventional(),
            api: ApiStyle::Any,
            context: false,
        })
    );
}

#[test]
fn logger_with_levels_gets_exactly_those() {
    let model = resolve_options(
        Options::new()
            .logger(true)
            .level("trace:-8")
            .level("info:0"),
    );
    let logger = model.logger.unwrap();
    assert_eq!(logger.levels, levels(&[(-8, "trace"), (0, "info")]));
    assert_eq!(logger.levels, model.levels);
}

#[test]
fn logger_api_and_context() {
    let model = resolve_options(Options::new().logger(true).api("attr").context(true));
    let logger = model.logger.unwrap();
    assert!(logger.attr_api());
    assert!(logger.context);
}

#[test]
fn invalid_api_value() {
    let raw = RawConfig {
        logger: Some(RawLogger {
            api: Some("json".to_string()),
            context: false,
        }),
        ..RawConfig::default()
    };
    let err = resolve(raw).unwrap_err();
    assert!(matches!(&err, ConfigError::InvalidApi(api) if api == "json"));
    insta::assert_snapshot!(err, @r#""json": invalid logger.api value"#);
}

#[test]
fn invalid_api_value_from_document() {
    let text = r#"{"logger": {"api": "Any"}}"#;
    let err = load(Some((text, DocumentFormat::Json)), &Options::new()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidApi(_)));
}

#[test]
fn api_without_logger_is_not_validated() {
    let model = resolve_options(Options::new().api("bogus"));
    assert_eq!(model.logger, None);
}

#[test]
fn empty_level_name_rejected() {
    let err = resolve(RawConfig::from_options(&Options::new().level(":5")).unwrap()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidName { field: "level", .. }));
    insta::assert_snapshot!(err, @r#"level name "": must be a non-empty token without whitespace or ':'"#);
}

#[test]
fn attr_key_with_separator_rejected() {
    let text = r#"{"attrs": [{"a:b": "int"}]}"#;
    let err = load(Some((text, DocumentFormat::Json)), &Options::new()).unwrap_err();
    assert!(matches!(&err, ConfigError::InvalidName { field: "attr", name } if name == "a:b"));
}

#[test]
fn const_with_whitespace_rejected() {
    let err = resolve(RawConfig::from_options(&Options::new().constant("a b")).unwrap())
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidName { field: "const", .. }));
}

#[test]
fn options_override_document() {
    let text = r#"
        {
          "pkg": "doc",
          "levels": [{"info": 0}],
          "attrs": [{"id": "int"}],
          "logger": {"api": "any"}
        }
    "#;
    let options = Options::new()
        .pkg("cli")
        .level("notice:0")
        .attr("id:string")
        .api("attr")
        .context(true);

    let model = load(Some((text, DocumentFormat::Json)), &options).unwrap();
    assert_eq!(model.package, "cli");
    assert_eq!(model.levels, levels(&[(0, "notice")]));
    assert_eq!(model.attrs["id"], "string");
    let logger = model.logger.unwrap();
    assert!(logger.attr_api());
    assert!(logger.context);
}

#[test]
fn resolution_is_deterministic() {
    let options = Options::new()
        .level("warn:4")
        .level("trace:-8")
        .attr("z:int")
        .attr("a:string")
        .constant("y")
        .constant("x")
        .import("time")
        .logger(true);

    let first = resolve_options(options.clone());
    let second = resolve_options(options);
    assert_eq!(first, second);
}
