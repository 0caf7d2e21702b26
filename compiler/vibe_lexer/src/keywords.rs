//! Keyword resolution.
//!
//! Identifiers are scanned maximally first, then looked up here, so `ifoo`
//! stays one identifier. Reserved keywords always resolve; soft keywords
//! (`require`, `as`, `property`, `getter`, `setter`) lex as identifiers and
//! only mean something to the parser in their grammatical position.

use vibe_ir::{StringInterner, TokenKind};

/// Soft keywords, recognized by the parser by spelling.
pub const SOFT_KEYWORDS: [&str; 5] = ["require", "as", "property", "getter", "setter"];

/// Look up a reserved keyword by text.
///
/// Length-bucketed: every keyword is 2 to 7 bytes long, so anything else is
/// rejected without a comparison.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "do" => Some(TokenKind::Do),
            "if" => Some(TokenKind::If),
            "in" => Some(TokenKind::In),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "def" => Some(TokenKind::Def),
            "end" => Some(TokenKind::End),
            "for" => Some(TokenKind::For),
            "nil" => Some(TokenKind::Nil),
            _ => None,
        },
        4 => match text {
            "case" => Some(TokenKind::Case),
            "else" => Some(TokenKind::Else),
            "next" => Some(TokenKind::Next),
            "self" => Some(TokenKind::SelfLower),
            "true" => Some(TokenKind::True),
            "when" => Some(TokenKind::When),
            _ => None,
        },
        5 => match text {
            "begin" => Some(TokenKind::Begin),
            "break" => Some(TokenKind::Break),
            "class" => Some(TokenKind::Class),
            "elsif" => Some(TokenKind::Elsif),
            "false" => Some(TokenKind::False),
            "raise" => Some(TokenKind::Raise),
            "until" => Some(TokenKind::Until),
            "while" => Some(TokenKind::While),
            "yield" => Some(TokenKind::Yield),
            _ => None,
        },
        6 => match text {
            "ensure" => Some(TokenKind::Ensure),
            "export" => Some(TokenKind::Export),
            "rescue" => Some(TokenKind::Rescue),
            "return" => Some(TokenKind::Return),
            "unless" => Some(TokenKind::Unless),
            _ => None,
        },
        7 => match text {
            "private" => Some(TokenKind::Private),
            _ => None,
        },
        _ => None,
    }
}

/// Token kind of a complete name: a reserved keyword, a constant when it
/// starts uppercase, else an identifier.
pub fn resolve_name(text: &str, interner: &mut StringInterner) -> TokenKind {
    if text.starts_with(|c: char| c.is_ascii_uppercase()) {
        return TokenKind::Constant(interner.intern(text));
    }
    lookup(text).unwrap_or_else(|| TokenKind::Ident(interner.intern(text)))
}
