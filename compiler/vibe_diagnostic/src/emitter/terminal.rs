//! Human-readable diagnostic output with optional ANSI color.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const WARNING: &str = "\x1b[1;33m";
    pub const NOTE: &str = "\x1b[1;36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m";
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color=` value.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Renders diagnostics against one source file:
///
/// ```text
/// error[E1003]: expected `end` to close `if`
///   --> main.vibe:3:1
///    |
///  3 | puts(x)
///    | ^ reached end of input
/// ```
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    path: &'src str,
    source: &'src str,
    lines: LineOffsetTable,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    pub fn new(writer: W, mode: ColorMode, is_tty: bool, path: &'src str, source: &'src str) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            path,
            source,
            lines: LineOffsetTable::build(source),
        }
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_snippet(&mut self, start: u32, end: u32, message: &str, primary: bool) {
        let (line, col) = self.lines.offset_to_line_col(self.source, start);
        let text = self.lines.line_text(self.source, line);
        let gutter = line.to_string().len();

        // Carets cover the span on its first line, at least one column wide.
        let (end_line, end_col) = self.lines.offset_to_line_col(self.source, end);
        let width = if end_line == line && end_col > col {
            (end_col - col) as usize
        } else {
            1
        };
        let pad = " ".repeat(col.saturating_sub(1) as usize);
        let marker = if primary { "^" } else { "-" }.repeat(width);

        let _ = writeln!(self.writer, "{:gutter$} |", "");
        if text.is_empty() {
            let _ = writeln!(self.writer, "{line:>gutter$} |");
        } else {
            let _ = writeln!(self.writer, "{line:>gutter$} | {text}");
        }
        let _ = write!(self.writer, "{:gutter$} | {pad}", "");
        let color = if primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };
        self.write_colored(&format!("{marker} {message}"), color);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_severity(diagnostic.severity);
        let code = format!("[{}]", diagnostic.code.as_str());
        self.write_colored(&code, colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            let (line, col) = self.lines.offset_to_line_col(self.source, label.span.start);
            let marker = if label.is_primary { "-->" } else { ":::" };
            let _ = writeln!(self.writer, "  {marker} {}:{line}:{col}", self.path);
            self.write_snippet(label.span.start, label.span.end, &label.message, label.is_primary);
        }

        if let Some(expected) = diagnostic.expected_summary() {
            let _ = writeln!(self.writer, "   = expected {expected}");
        }
        for note in &diagnostic.notes {
            let _ = writeln!(self.writer, "   = note: {note}");
        }
        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count == 0 && warning_count == 0 {
            return;
        }
        let mut parts = Vec::new();
        if error_count > 0 {
            parts.push(format!("{error_count} error{}", plural_s(error_count)));
        }
        if warning_count > 0 {
            parts.push(format!("{warning_count} warning{}", plural_s(warning_count)));
        }
        let _ = writeln!(self.writer, "{} emitted", parts.join(", "));
    }
}

impl<'src> TerminalEmitter<'src, io::Stderr> {
    /// Emitter writing to stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool, path: &'src str, source: &'src str) -> Self {
        Self::new(io::stderr(), mode, is_tty, path, source)
    }
}
