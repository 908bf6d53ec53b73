//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `GenerateParams` mirrors `GenerateArgs` field for field; the `Into` impl
//! folds the generator flags into an [`Options`] set.

use std::path::PathBuf;

use clap::ArgMatches;
use sloggen_compiler::{DocumentFormat, Options};

use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub config: Option<PathBuf>,
    pub format: Option<DocumentFormat>,
    pub pkg: Option<String>,
    pub imports: Vec<String>,
    pub levels: Vec<String>,
    pub consts: Vec<String>,
    pub attrs: Vec<String>,
    pub logger: bool,
    pub api: Option<String>,
    pub ctx: bool,
    pub output_dir: PathBuf,
    pub stdout: bool,
    pub dump_model: bool,
    pub gofmt: bool,
    pub verbose: u8,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config: m.get_one::<PathBuf>("config").cloned(),
            format: m
                .get_one::<String>("format")
                .and_then(|name| DocumentFormat::from_name(name)),
            pkg: m.get_one::<String>("pkg").cloned(),
            imports: get_many(m, "import"),
            levels: get_many(m, "level"),
            consts: get_many(m, "const"),
            attrs: get_many(m, "attr"),
            logger: m.get_flag("logger"),
            api: m.get_one::<String>("api").cloned(),
            ctx: m.get_flag("ctx"),
            output_dir: m
                .get_one::<PathBuf>("output_dir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(".")),
            stdout: m.get_flag("stdout"),
            dump_model: m.get_flag("dump_model"),
            gofmt: m.get_flag("gofmt"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        let options = Options {
            pkg: p.pkg,
            imports: p.imports,
            levels: p.levels,
            consts: p.consts,
            attrs: p.attrs,
            logger: p.logger,
            api: p.api,
            context: p.ctx,
        };
        Self {
            config: p.config,
            format: p.format,
            options,
            output_dir: p.output_dir,
            stdout: p.stdout,
            dump_model: p.dump_model,
            gofmt: p.gofmt,
        }
    }
}

/// Collect a repeatable string arg in command-line order.
fn get_many(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
