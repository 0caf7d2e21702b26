//! Parse errors.
//!
//! A [`ParseError`] is what the grammar functions return through `Result`;
//! it converts to a [`Diagnostic`] only when it leaves the parser.

use std::fmt;

use vibe_diagnostic::{Diagnostic, ErrorCategory, ErrorCode};
use vibe_ir::{Span, TokenTag};
use vibe_lexer::LexError;

use crate::recovery::TokenSet;

/// What was being parsed when an error occurred, for "while parsing ..."
/// notes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    // === Declarations ===
    Method,
    Parameters,
    TypeAnnotation,
    Class,
    ClassMember,

    // === Statements ===
    If,
    Unless,
    Case,
    While,
    Until,
    For,
    Begin,
    Rescue,
    Raise,
    Yield,
    Require,

    // === Expressions ===
    Expression,
    Arguments,
    Block,
    MemberAccess,
    Subscript,
    Array,
    Hash,
    Parenthesized,
    String,
}

impl ErrorContext {
    /// Phrase for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::Method => "a method definition",
            Self::Parameters => "a parameter list",
            Self::TypeAnnotation => "a type annotation",
            Self::Class => "a class definition",
            Self::ClassMember => "a class member",
            Self::If => "an `if` statement",
            Self::Unless => "an `unless` statement",
            Self::Case => "a `case` statement",
            Self::While => "a `while` loop",
            Self::Until => "an `until` loop",
            Self::For => "a `for` loop",
            Self::Begin => "a `begin` block",
            Self::Rescue => "a `rescue` clause",
            Self::Raise => "a `raise` statement",
            Self::Yield => "a `yield` statement",
            Self::Require => "a `require` import",
            Self::Expression => "an expression",
            Self::Arguments => "an argument list",
            Self::Block => "a `do` block",
            Self::MemberAccess => "a member access",
            Self::Subscript => "a subscript",
            Self::Array => "an array literal",
            Self::Hash => "a hash literal",
            Self::Parenthesized => "a parenthesized expression",
            Self::String => "a string literal",
        }
    }
}

/// A related location, e.g. where an unclosed block was opened.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RelatedSpan {
    pub span: Span,
    pub message: String,
}

/// A syntax, lexical, or resource-limit error.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// Tokens that would have been accepted here.
    pub expected: TokenSet,
    /// The token actually found, when one was.
    pub found: Option<TokenTag>,
    pub context: Option<ErrorContext>,
    pub related: Option<RelatedSpan>,
}

impl ParseError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            expected: TokenSet::new(),
            found: None,
            context: None,
            related: None,
        }
    }

    /// "expected X, found Y" at the found token.
    pub fn unexpected(code: ErrorCode, expected: TokenSet, found: TokenTag, span: Span) -> Self {
        let message = if expected.is_empty() {
            format!("unexpected {found}")
        } else {
            format!("expected {}, found {found}", expected.format_expected())
        };
        ParseError {
            expected,
            found: Some(found),
            ..ParseError::new(code, message, span)
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use]
    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related = Some(RelatedSpan {
            span,
            message: message.into(),
        });
        self
    }

    pub fn from_lex_error(error: &LexError) -> Self {
        ParseError::new(error.code(), error.kind.to_string(), error.span)
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match (self.code.category(), self.found) {
            (ErrorCategory::Lex, _) => "invalid token".to_string(),
            (ErrorCategory::ResourceLimit, _) => "nesting limit reached here".to_string(),
            (ErrorCategory::Syntax, Some(TokenTag::Eof)) => "reached end of input".to_string(),
            (ErrorCategory::Syntax, Some(found)) => format!("unexpected {found}"),
            (ErrorCategory::Syntax, None) => "here".to_string(),
        };
        let mut diag = Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_label(self.span, label)
            .with_expected(self.expected.iter());
        if let Some(related) = &self.related {
            diag = diag.with_secondary_label(related.span, related.message.clone());
        }
        if let Some(context) = self.context {
            diag = diag.with_note(format!("while parsing {}", context.description()));
        }
        diag
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.code, self.span, self.message)
    }
}

impl std::error::Error for ParseError {}
