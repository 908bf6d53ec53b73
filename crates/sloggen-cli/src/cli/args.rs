//! Argument builders for the `sloggen` command.
//!
//! Each function returns a `clap::Arg`; `commands.rs` composes them.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Declarative config document (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .help("Read a JSON, TOML or YAML config document ('-' for stdin)")
}

/// Document syntax override (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .value_parser(["json", "toml", "yaml"])
        .help("Config document syntax (inferred from extension if not specified)")
}

/// Go package name (--pkg).
pub fn pkg_arg() -> Arg {
    Arg::new("pkg")
        .long("pkg")
        .value_name("NAME")
        .help("Package name of the generated file [default: slogx]")
}

/// Extra import (-i/--import).
pub fn import_arg() -> Arg {
    Arg::new("import")
        .short('i')
        .long("import")
        .value_name("PATH")
        .action(ArgAction::Append)
        .help("Add an import path (repeatable)")
}

/// Custom level (-l/--level).
pub fn level_arg() -> Arg {
    Arg::new("level")
        .short('l')
        .long("level")
        .value_name("NAME:SEVERITY")
        .action(ArgAction::Append)
        .help("Add a level; a later entry with the same severity wins (repeatable)")
}

/// String constant (-c/--const).
pub fn const_arg() -> Arg {
    Arg::new("const")
        .short('c')
        .long("const")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Add a string constant (repeatable)")
}

/// Typed attribute (-a/--attr).
pub fn attr_arg() -> Arg {
    Arg::new("attr")
        .short('a')
        .long("attr")
        .value_name("KEY:TYPE")
        .action(ArgAction::Append)
        .help("Add an attribute constructor; a later entry with the same key wins (repeatable)")
}

/// Generate the wrapper type (--logger).
pub fn logger_arg() -> Arg {
    Arg::new("logger")
        .long("logger")
        .action(ArgAction::SetTrue)
        .help("Generate a Logger type with one method per level")
}

/// Logger variadic convention (--api).
pub fn api_arg() -> Arg {
    Arg::new("api")
        .long("api")
        .value_name("API")
        .value_parser(["any", "attr"])
        .help("Logger method arguments: '...any' or '...slog.Attr' [default: any]")
}

/// Context parameter on logger methods (--ctx).
pub fn ctx_arg() -> Arg {
    Arg::new("ctx")
        .long("ctx")
        .action(ArgAction::SetTrue)
        .help("Add a leading context.Context parameter to Logger methods")
}

/// Base output directory (-o/--output-dir).
pub fn output_dir_arg() -> Arg {
    Arg::new("output_dir")
        .short('o')
        .long("output-dir")
        .value_name("DIR")
        .default_value(".")
        .value_parser(value_parser!(PathBuf))
        .help("Directory that receives <pkg>/<pkg>.go")
}

/// Print instead of writing (--stdout).
pub fn stdout_arg() -> Arg {
    Arg::new("stdout")
        .long("stdout")
        .action(ArgAction::SetTrue)
        .help("Print the generated source instead of writing a file")
}

/// Print the resolved model (--dump-model).
pub fn dump_model_arg() -> Arg {
    Arg::new("dump_model")
        .long("dump-model")
        .action(ArgAction::SetTrue)
        .help("Print the resolved model as JSON and exit")
}

/// External formatter pass (--gofmt).
pub fn gofmt_arg() -> Arg {
    Arg::new("gofmt")
        .long("gofmt")
        .action(ArgAction::SetTrue)
        .help("Pipe the generated source through gofmt")
}

/// Log verbosity (-v, repeatable).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
}
