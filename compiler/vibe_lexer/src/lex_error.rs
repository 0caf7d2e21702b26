//! Lexer error types.

use vibe_diagnostic::{Diagnostic, ErrorCode};
use vibe_ir::Span;

/// A lexer error: what went wrong and where.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unrecognized character `{}`", .0.escape_debug())]
    UnrecognizedCharacter(char),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid escape sequence `\\{}`", .0.escape_debug())]
    InvalidEscape(char),
    #[error("integer literal is too large")]
    IntegerOverflow,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { span, kind }
    }

    /// Byte offset where the error starts.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.span.start
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnrecognizedCharacter(_) => ErrorCode::E0002,
            LexErrorKind::IntegerOverflow => ErrorCode::E0003,
            LexErrorKind::InvalidEscape(_) => ErrorCode::E0004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let (label, note) = match self.kind {
            LexErrorKind::UnterminatedString => (
                "string starts here",
                Some("add a closing `\"` before the end of the file"),
            ),
            LexErrorKind::UnrecognizedCharacter(_) => ("not valid here", None),
            LexErrorKind::InvalidEscape(_) => (
                "unknown escape",
                Some("valid escapes are `\\n`, `\\r`, `\\t`, `\\\\` and `\\\"`"),
            ),
            LexErrorKind::IntegerOverflow => (
                "does not fit in 64 bits",
                Some("integer literals must be at most 18446744073709551615"),
            ),
        };
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label);
        match note {
            Some(note) => diag.with_note(note),
            None => diag,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}

impl std::error::Error for LexError {}
