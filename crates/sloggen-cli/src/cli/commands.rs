//! Command builder for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI.
pub fn build_cli() -> Command {
    Command::new("sloggen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate typed log/slog helpers for Go")
        .override_usage(
            "\
  sloggen --config <PATH> [OPTIONS]
  sloggen [--pkg <NAME>] [-l <NAME:SEVERITY>]... [-a <KEY:TYPE>]... [OPTIONS]",
        )
        .after_help(
            r#"EXAMPLES:
  sloggen --config sloggen.toml                    # writes ./slogx/slogx.go
  sloggen --pkg log -l trace:-8 -a user_id:int     # flags only
  sloggen --config sloggen.json -l alert:12        # flags layered over the document
  sloggen --logger --api attr --ctx --stdout       # print a Logger wrapper
  cat sloggen.toml | sloggen --config - --format toml

Set SLOGGEN_LOG (e.g. SLOGGEN_LOG=debug) to override -v."#,
        )
        .arg(config_arg())
        .arg(format_arg())
        .arg(pkg_arg())
        .arg(import_arg())
        .arg(level_arg())
        .arg(const_arg())
        .arg(attr_arg())
        .arg(logger_arg())
        .arg(api_arg())
        .arg(ctx_arg())
        .arg(output_dir_arg())
        .arg(stdout_arg().conflicts_with("dump_model"))
        .arg(dump_model_arg())
        .arg(gofmt_arg())
        .arg(verbose_arg())
}
