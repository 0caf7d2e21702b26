//! Error recovery for the parser.
//!
//! Provides token sets and synchronization for continuing parsing after
//! errors. Membership is a single bit test on a `u128`; every [`TokenTag`]
//! fits because there are fewer than 128 of them.

use vibe_ir::TokenTag;

use crate::cursor::Cursor;

/// A set of token tags.
///
/// ```
/// use vibe_ir::TokenTag;
/// use vibe_parse::TokenSet;
///
/// const CLOSERS: TokenSet = TokenSet::new().with(TokenTag::RParen).with(TokenTag::Comma);
/// assert!(CLOSERS.contains(TokenTag::Comma));
/// assert_eq!(CLOSERS.format_expected(), "`)` or `,`");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct TokenSet(u128);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn single(tag: TokenTag) -> Self {
        Self(1u128 << tag.index())
    }

    #[inline]
    #[must_use]
    pub const fn with(self, tag: TokenTag) -> Self {
        Self(self.0 | (1u128 << tag.index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(&self, tag: TokenTag) -> bool {
        (self.0 & (1u128 << tag.index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Members in tag order.
    pub fn iter(self) -> impl Iterator<Item = TokenTag> {
        TokenTag::ALL.into_iter().filter(move |&tag| self.contains(tag))
    }

    /// `` `end` ``, `` `)` or `,` ``, or `one of `a`, `b`, `c``.
    pub fn format_expected(&self) -> String {
        let names: Vec<String> = self.iter().map(TokenTag::description).collect();
        match names.as_slice() {
            [] => String::new(),
            [one] => one.clone(),
            [a, b] => format!("{a} or {b}"),
            many => format!("one of {}", many.join(", ")),
        }
    }
}

/// Tokens that can start an expression.
pub const EXPR_START: TokenSet = TokenSet::new()
    .with(TokenTag::Ident)
    .with(TokenTag::Constant)
    .with(TokenTag::Int)
    .with(TokenTag::Float)
    .with(TokenTag::StringOpen)
    .with(TokenTag::Symbol)
    .with(TokenTag::InstanceVar)
    .with(TokenTag::ClassVar)
    .with(TokenTag::True)
    .with(TokenTag::False)
    .with(TokenTag::Nil)
    .with(TokenTag::SelfLower)
    .with(TokenTag::LBracket)
    .with(TokenTag::LBrace)
    .with(TokenTag::LParen)
    .with(TokenTag::Minus)
    .with(TokenTag::Bang);

/// Keywords that close some enclosing body.
pub const BODY_END: TokenSet = TokenSet::new()
    .with(TokenTag::End)
    .with(TokenTag::Elsif)
    .with(TokenTag::Else)
    .with(TokenTag::When)
    .with(TokenTag::Rescue)
    .with(TokenTag::Ensure);

/// Recovery set for statement boundaries: keywords that start a statement or
/// declaration, and body terminators.
pub const STMT_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenTag::Def)
    .with(TokenTag::Private)
    .with(TokenTag::Export)
    .with(TokenTag::Class)
    .with(TokenTag::If)
    .with(TokenTag::Unless)
    .with(TokenTag::Case)
    .with(TokenTag::While)
    .with(TokenTag::Until)
    .with(TokenTag::For)
    .with(TokenTag::Begin)
    .with(TokenTag::Return)
    .with(TokenTag::Break)
    .with(TokenTag::Next)
    .with(TokenTag::Raise)
    .with(TokenTag::Yield)
    .union(BODY_END);

/// Recovery set inside a class body.
pub const MEMBER_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenTag::Def)
    .with(TokenTag::Private)
    .with(TokenTag::ClassVar)
    .with(TokenTag::End);

/// Advance the cursor until reaching a token in the recovery set, a token
/// that begins a new line, or EOF. A new line ends the skip so one bad line
/// does not swallow the statements after it.
///
/// Returns `true` if a stopping token was found, `false` if EOF was reached.
pub fn synchronize_statement(cursor: &mut Cursor<'_>, recovery: TokenSet) -> bool {
    while !cursor.is_at_end() {
        if recovery.contains(cursor.current_tag()) || cursor.at_line_start() {
            return true;
        }
        cursor.advance();
    }
    false
}
