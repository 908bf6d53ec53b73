use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use sloggen_compiler::DocumentFormat;

use super::generate::Error;

/// Read the config document at `path` (`-` for stdin) and pick its syntax.
///
/// An explicit `format` wins over the file extension. Stdin has no extension,
/// so it falls back to JSON unless `format` is given.
pub fn load_document(
    path: &Path,
    format: Option<DocumentFormat>,
) -> Result<(String, DocumentFormat), Error> {
    if path.as_os_str() == "-" {
        let text = load_stdin()?;
        return Ok((text, format.unwrap_or_default()));
    }

    let format = match format {
        Some(format) => format,
        None => DocumentFormat::from_path(path)?,
    };
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?format, bytes = text.len(), "read config");
    Ok((text, format))
}

fn load_stdin() -> Result<String, Error> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|source| Error::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    Ok(buf)
}
