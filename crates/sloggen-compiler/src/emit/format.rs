//! External formatter pass.

use std::io::Write;
use std::process::{Command, Stdio};

use super::error::{EmitError, Result};

/// Run `source` through `gofmt`.
pub fn gofmt(source: &str) -> Result<String> {
    format_with("gofmt", source)
}

/// Run `source` through `program`, which reads stdin and writes the
/// formatted text to stdout.
pub fn format_with(program: &str, source: &str) -> Result<String> {
    let fail = |message: String| EmitError::Format {
        program: program.to_string(),
        message,
    };

    let mut child = Command::new(program)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| fail(e.to_string()))?;

    // Dropping stdin closes the pipe so the formatter sees EOF.
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(source.as_bytes())
            .map_err(|e| fail(e.to_string()))?;
    }

    let output = child.wait_with_output().map_err(|e| fail(e.to_string()))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(fail(stderr.trim().to_string()));
    }

    tracing::debug!(program, bytes = output.stdout.len(), "formatted source");

    String::from_utf8(output.stdout).map_err(|e| fail(e.to_string()))
}
