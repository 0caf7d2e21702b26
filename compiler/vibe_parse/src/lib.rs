//! Recursive descent parser for vibescript.
//!
//! Produces a flat [`SyntaxTree`] whose nodes live in one [`NodeArena`].
//! Parsing never fails as a whole: syntax errors are recorded, the parser
//! resynchronizes at the next statement boundary, and the skipped tokens
//! become an `error` node.
//!
//! ```
//! let output = vibe_parse::parse("x = 1 + 2 * 3");
//! assert!(!output.has_errors());
//! assert_eq!(
//!     output.tree.to_sexp(),
//!     "(program (assignment target: (identifier x) value: (binary + left: (integer 1) \
//!      right: (binary * left: (integer 2) right: (integer 3)))))"
//! );
//! ```

mod cursor;
mod disambiguate;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use disambiguate::Resolution;
pub use error::{ErrorContext, ParseError, RelatedSpan};
pub use recovery::{synchronize_statement, TokenSet};

use tracing::{debug, debug_span};
use vibe_diagnostic::{Diagnostic, ErrorCode};
use vibe_ir::{Name, NodeArena, NodeId, NodeKind, Span, StringInterner, SyntaxTree};
use vibe_lexer::SOFT_KEYWORDS;
use vibe_stack::{DepthBudget, DEFAULT_MAX_DEPTH};

/// How the parser reacts to the first error.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RecoveryMode {
    /// Resynchronize and keep collecting diagnostics.
    #[default]
    Recover,
    /// Keep only the first diagnostic and stop parsing.
    FailFast,
}

/// Parse configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    /// Maximum nesting of statements and expressions.
    pub max_depth: u32,
    pub recovery: RecoveryMode,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            recovery: RecoveryMode::Recover,
        }
    }
}

/// A tree plus every diagnostic found on the way, ordered by position.
#[derive(Debug)]
pub struct ParseOutput {
    pub tree: SyntaxTree,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ParseError::to_diagnostic).collect()
    }
}

/// Parse with default options.
pub fn parse(source: &str) -> ParseOutput {
    parse_with_options(source, ParseOptions::default())
}

pub fn parse_with_options(source: &str, options: ParseOptions) -> ParseOutput {
    let _span = debug_span!("parse", source_len = source.len()).entered();
    let mut parser = Parser::new(source, options);
    let root = parser.parse_program();
    parser.finish(root)
}

/// Names of the soft keywords, interned once per parse.
#[derive(Copy, Clone, Debug)]
pub(crate) struct SoftKeywords {
    pub require: Name,
    pub alias_key: Name,
    pub property: Name,
    pub getter: Name,
    pub setter: Name,
}

impl SoftKeywords {
    fn new(interner: &mut StringInterner) -> Self {
        let [require, alias_key, property, getter, setter] =
            SOFT_KEYWORDS.map(|word| interner.intern(word));
        SoftKeywords {
            require,
            alias_key,
            property,
            getter,
            setter,
        }
    }
}

/// Parser state.
pub(crate) struct Parser<'src> {
    cursor: Cursor<'src>,
    arena: NodeArena,
    errors: Vec<ParseError>,
    depth: DepthBudget,
    recovery: RecoveryMode,
    /// Set once no further diagnostics may be recorded.
    halted: bool,
    soft: SoftKeywords,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, options: ParseOptions) -> Self {
        let mut cursor = Cursor::new(source);
        let soft = SoftKeywords::new(cursor.interner_mut());
        Parser {
            cursor,
            arena: NodeArena::with_capacity(source.len()),
            errors: Vec::new(),
            depth: DepthBudget::new(options.max_depth),
            recovery: options.recovery,
            halted: false,
            soft,
        }
    }

    /// `program`: every statement up to end of input.
    fn parse_program(&mut self) -> NodeId {
        let body = self.parse_body(TokenSet::new());
        let end = u32::try_from(self.cursor.source().len()).unwrap_or(u32::MAX);
        self.arena
            .alloc(NodeKind::Program { body }, Span::new(0, end))
    }

    /// Record an error. Once halted, errors are dropped.
    pub(crate) fn report(&mut self, error: ParseError) {
        if self.halted {
            debug!(%error, "suppressed");
            return;
        }
        debug!(%error, "syntax error");
        if self.recovery == RecoveryMode::FailFast || error.code == ErrorCode::E2001 {
            self.halted = true;
        }
        self.errors.push(error);
    }

    /// Whether statement loops should stop and skip the rest of the input.
    pub(crate) fn should_halt(&self) -> bool {
        self.halted
            || (self.recovery == RecoveryMode::FailFast && self.cursor.has_lex_errors())
    }

    fn finish(self, root: NodeId) -> ParseOutput {
        let parts = self.cursor.finish();
        let mut errors: Vec<ParseError> = parts.errors.iter().map(ParseError::from_lex_error).collect();
        errors.extend(self.errors);
        errors.sort_by_key(|e| e.span.start);
        if self.recovery == RecoveryMode::FailFast {
            errors.truncate(1);
        }
        debug!(
            nodes = self.arena.len(),
            errors = errors.len(),
            comments = parts.comments.len(),
            "parsed"
        );
        ParseOutput {
            tree: SyntaxTree::new(self.arena, parts.interner, root),
            errors,
        }
    }
}

#[cfg(test)]
mod tests;
