use std::fmt;

use vibe_ir::{Span, TokenTag};

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source range with a short message under it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    /// The primary label marks the error itself; secondary ones point at
    /// related places such as the opener of an unclosed block.
    pub is_primary: bool,
}

/// One reportable problem.
///
/// Built with a consuming builder:
///
/// ```
/// use vibe_diagnostic::{Diagnostic, ErrorCode};
/// use vibe_ir::{Span, TokenTag};
///
/// let diag = Diagnostic::error(ErrorCode::E1003)
///     .with_message("expected `end` to close `def`")
///     .with_label(Span::point(30), "reached end of input")
///     .with_secondary_label(Span::new(0, 3), "`def` opened here")
///     .with_expected([TokenTag::End]);
///
/// assert_eq!(diag.primary_span(), Some(Span::point(30)));
/// assert_eq!(diag.expected_summary().as_deref(), Some("`end`"));
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    /// Token kinds valid at the primary location (syntax errors only).
    pub expected: Vec<TokenTag>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: code.description().to_string(),
            labels: Vec::new(),
            expected: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn error(code: ErrorCode) -> Self {
        Self::new(code, Severity::Error)
    }

    pub fn warning(code: ErrorCode) -> Self {
        Self::new(code, Severity::Warning)
    }

    /// Replace the default message (the code's description).
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        self.push_label(span, message.into(), true)
    }

    pub fn with_secondary_label(self, span: Span, message: impl Into<String>) -> Self {
        self.push_label(span, message.into(), false)
    }

    fn push_label(mut self, span: Span, message: String, is_primary: bool) -> Self {
        self.labels.push(Label {
            span,
            message,
            is_primary,
        });
        self
    }

    pub fn with_expected(mut self, expected: impl IntoIterator<Item = TokenTag>) -> Self {
        self.expected.extend(expected);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find_map(|label| label.is_primary.then_some(label.span))
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Accepted tokens as prose, `None` when nothing was recorded.
    pub fn expected_summary(&self) -> Option<String> {
        match self.expected.as_slice() {
            [] => None,
            [only] => Some(only.description()),
            many => {
                let names: Vec<String> = many.iter().map(|tag| tag.description()).collect();
                Some(format!("one of {}", names.join(", ")))
            }
        }
    }
}

/// Single-line rendering without source context, for logs.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        if let Some(span) = self.primary_span() {
            write!(f, " at {span}")?;
        }
        Ok(())
    }
}
