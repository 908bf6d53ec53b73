use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use sloggen_compiler::emit::{self, format};
use sloggen_compiler::{ConfigError, DocumentFormat, EmitError, Options, config};

use super::config_loader::load_document;

pub struct GenerateArgs {
    pub config: Option<PathBuf>,
    pub format: Option<DocumentFormat>,
    pub options: Options,
    pub output_dir: PathBuf,
    pub stdout: bool,
    pub dump_model: bool,
    pub gofmt: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("encoding model: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn run(args: GenerateArgs) {
    if let Err(e) = generate(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Resolve, emit and write. Nothing touches the file system until the
/// source has been fully rendered.
pub fn generate(args: &GenerateArgs) -> Result<(), Error> {
    let document = match &args.config {
        Some(path) => Some(load_document(path, args.format)?),
        None => None,
    };
    let document = document
        .as_ref()
        .map(|(text, format)| (text.as_str(), *format));

    let model = config::load(document, &args.options)?;

    if args.dump_model {
        let json = serde_json::to_string_pretty(&model)?;
        return write_stdout(&json);
    }

    let mut source = emit::emit(&model)?;
    if args.gofmt {
        source = format::gofmt(&source)?;
    }

    if args.stdout {
        return write_stdout(source.trim_end_matches('\n'));
    }

    let dir = args.output_dir.join(&model.package);
    let path = dir.join(format!("{}.go", model.package));
    create_dir(&dir)?;
    write_atomic(&path, &source)?;

    tracing::info!(path = %path.display(), bytes = source.len(), "wrote output");
    Ok(())
}

fn write_stdout(text: &str) -> Result<(), Error> {
    let mut out = io::stdout().lock();
    writeln!(out, "{text}").map_err(|source| Error::Io {
        path: PathBuf::from("<stdout>"),
        source,
    })
}

fn create_dir(dir: &Path) -> Result<(), Error> {
    match fs::create_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(source) => Err(Error::Io {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// Write through a sibling temp file so a failed write leaves the target alone.
fn write_atomic(path: &Path, contents: &str) -> Result<(), Error> {
    let io_err = |source: io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    if let Err(source) = fs::write(&tmp, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(source));
    }
    fs::rename(&tmp, path).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        io_err(source)
    })
}
