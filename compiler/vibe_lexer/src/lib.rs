//! Lexer for the vibescript front-end.
//!
//! Produces tokens lazily through [`Lexer::next_token`]; the parser pulls them
//! as it needs them. [`lex`] collects a whole stream, which is what the `lex`
//! command and the tests want.
//!
//! The lexer has two output channels besides tokens: ordinary comments go to
//! the trivia channel ([`Lexer::comments`]), and problems go to
//! [`Lexer::errors`]. Lexing itself never fails.

mod cursor;
pub mod directive;
mod keywords;
mod lex_error;
mod lexer;

pub use keywords::{resolve_name, SOFT_KEYWORDS};
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{Comment, Lexer, LexerParts};

use tracing::debug;
use vibe_ir::{StringInterner, TokenList};

/// A fully lexed source.
#[derive(Debug)]
pub struct LexOutput<'src> {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
    pub comments: Vec<Comment<'src>>,
    pub interner: StringInterner,
}

impl LexOutput<'_> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex a whole source into a token list ending in `Eof`.
pub fn lex(source: &str) -> LexOutput<'_> {
    let mut lexer = Lexer::new(source);
    let mut tokens = TokenList::new();
    for token in lexer.by_ref() {
        tokens.push(token);
    }
    let LexerParts {
        interner,
        errors,
        comments,
    } = lexer.finish();
    debug!(
        source_len = source.len(),
        tokens = tokens.len(),
        errors = errors.len(),
        comments = comments.len(),
        "lexed"
    );
    LexOutput {
        tokens,
        errors,
        comments,
        interner,
    }
}
