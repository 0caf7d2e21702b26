//! Command handlers. Each returns whether the input was free of errors so
//! `main` can pick the exit code.

mod check;
mod debug;
mod explain;

pub use check::check_file;
pub use debug::{lex_file, parse_file};
pub use explain::explain_error;

use std::io::IsTerminal;
use std::path::PathBuf;

use vibe_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use vibe_diagnostic::Diagnostic;

use crate::CliError;

/// Read a source file.
pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: PathBuf::from(path),
        source,
    })
}

/// Render diagnostics to stderr, followed by a summary line.
pub(crate) fn report(path: &str, source: &str, color: ColorMode, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(color, is_tty, path, source);
    emitter.emit_all(diagnostics);
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    emitter.emit_summary(errors, diagnostics.len() - errors);
    emitter.flush();
}
