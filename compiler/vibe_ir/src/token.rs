//! Token types produced by the lexer.
//!
//! [`TokenKind`] carries literal payloads; [`TokenTag`] is its payload-free
//! discriminant, used for bitset membership (`TokenSet`) and for naming
//! tokens in "expected ..." diagnostics.

use std::fmt;
use std::ops::Index;

use crate::{Name, Span};

/// A token with its source span.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    #[inline]
    pub const fn tag(&self) -> TokenTag {
        self.kind.tag()
    }
}

/// Token kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals and names
    /// `[a-z_][A-Za-z0-9_]*[?!]?`
    Ident(Name),
    /// `[A-Z][A-Za-z0-9_]*`
    Constant(Name),
    /// Integer literal, digit separators removed.
    Int(u64),
    /// Float literal stored as `f64` bits so the kind stays `Eq + Hash`.
    Float(u64),
    /// Opening `"` of a string literal.
    StringOpen,
    /// Raw run of string content between escapes.
    StringContent(Name),
    /// Decoded escape sequence (`\n` carries `'\n'`).
    StringEscape(char),
    /// Closing `"` of a string literal.
    StringClose,
    /// `:name`, payload without the colon.
    Symbol(Name),
    /// `@name`, payload without the sigil.
    InstanceVar(Name),
    /// `@@name`, payload without the sigils.
    ClassVar(Name),

    // Reserved keywords
    Def,
    End,
    If,
    Elsif,
    Else,
    Unless,
    Case,
    When,
    While,
    Until,
    For,
    In,
    Begin,
    Rescue,
    Ensure,
    Return,
    Break,
    Next,
    Raise,
    Yield,
    Class,
    Private,
    Export,
    Do,
    True,
    False,
    Nil,
    SelfLower,
    And,
    Or,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Eq,
    PlusEq,
    MinusEq,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    AmpAmp,
    PipePipe,
    Bang,
    DotDot,
    Arrow,

    // Punctuation
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Dot,
    Colon,
    Pipe,
    Question,

    // Promoted comments
    /// `# vibe: MAJOR.MINOR`
    VersionDirective { major: u32, minor: u32 },
    /// `# uses: a, b`; the names are re-read from the token's span.
    UsesDirective,

    Eof,
}

impl TokenKind {
    /// Payload-free discriminant.
    pub const fn tag(&self) -> TokenTag {
        match self {
            Self::Ident(_) => TokenTag::Ident,
            Self::Constant(_) => TokenTag::Constant,
            Self::Int(_) => TokenTag::Int,
            Self::Float(_) => TokenTag::Float,
            Self::StringOpen => TokenTag::StringOpen,
            Self::StringContent(_) => TokenTag::StringContent,
            Self::StringEscape(_) => TokenTag::StringEscape,
            Self::StringClose => TokenTag::StringClose,
            Self::Symbol(_) => TokenTag::Symbol,
            Self::InstanceVar(_) => TokenTag::InstanceVar,
            Self::ClassVar(_) => TokenTag::ClassVar,
            Self::Def => TokenTag::Def,
            Self::End => TokenTag::End,
            Self::If => TokenTag::If,
            Self::Elsif => TokenTag::Elsif,
            Self::Else => TokenTag::Else,
            Self::Unless => TokenTag::Unless,
            Self::Case => TokenTag::Case,
            Self::When => TokenTag::When,
            Self::While => TokenTag::While,
            Self::Until => TokenTag::Until,
            Self::For => TokenTag::For,
            Self::In => TokenTag::In,
            Self::Begin => TokenTag::Begin,
            Self::Rescue => TokenTag::Rescue,
            Self::Ensure => TokenTag::Ensure,
            Self::Return => TokenTag::Return,
            Self::Break => TokenTag::Break,
            Self::Next => TokenTag::Next,
            Self::Raise => TokenTag::Raise,
            Self::Yield => TokenTag::Yield,
            Self::Class => TokenTag::Class,
            Self::Private => TokenTag::Private,
            Self::Export => TokenTag::Export,
            Self::Do => TokenTag::Do,
            Self::True => TokenTag::True,
            Self::False => TokenTag::False,
            Self::Nil => TokenTag::Nil,
            Self::SelfLower => TokenTag::SelfLower,
            Self::And => TokenTag::And,
            Self::Or => TokenTag::Or,
            Self::Plus => TokenTag::Plus,
            Self::Minus => TokenTag::Minus,
            Self::Star => TokenTag::Star,
            Self::Slash => TokenTag::Slash,
            Self::Percent => TokenTag::Percent,
            Self::Eq => TokenTag::Eq,
            Self::PlusEq => TokenTag::PlusEq,
            Self::MinusEq => TokenTag::MinusEq,
            Self::EqEq => TokenTag::EqEq,
            Self::NotEq => TokenTag::NotEq,
            Self::Lt => TokenTag::Lt,
            Self::Gt => TokenTag::Gt,
            Self::LtEq => TokenTag::LtEq,
            Self::GtEq => TokenTag::GtEq,
            Self::AmpAmp => TokenTag::AmpAmp,
            Self::PipePipe => TokenTag::PipePipe,
            Self::Bang => TokenTag::Bang,
            Self::DotDot => TokenTag::DotDot,
            Self::Arrow => TokenTag::Arrow,
            Self::LParen => TokenTag::LParen,
            Self::RParen => TokenTag::RParen,
            Self::LBracket => TokenTag::LBracket,
            Self::RBracket => TokenTag::RBracket,
            Self::LBrace => TokenTag::LBrace,
            Self::RBrace => TokenTag::RBrace,
            Self::Comma => TokenTag::Comma,
            Self::Dot => TokenTag::Dot,
            Self::Colon => TokenTag::Colon,
            Self::Pipe => TokenTag::Pipe,
            Self::Question => TokenTag::Question,
            Self::VersionDirective { .. } => TokenTag::VersionDirective,
            Self::UsesDirective => TokenTag::UsesDirective,
            Self::Eof => TokenTag::Eof,
        }
    }

    /// True for keywords, whose spelling is fixed.
    pub const fn is_keyword(&self) -> bool {
        self.tag().is_keyword()
    }
}

/// Discriminant of [`TokenKind`].
///
/// Values are dense and below 128 so a `u128` bitset covers all of them.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(u8)]
pub enum TokenTag {
    Ident,
    Constant,
    Int,
    Float,
    StringOpen,
    StringContent,
    StringEscape,
    StringClose,
    Symbol,
    InstanceVar,
    ClassVar,
    Def,
    End,
    If,
    Elsif,
    Else,
    Unless,
    Case,
    When,
    While,
    Until,
    For,
    In,
    Begin,
    Rescue,
    Ensure,
    Return,
    Break,
    Next,
    Raise,
    Yield,
    Class,
    Private,
    Export,
    Do,
    True,
    False,
    Nil,
    SelfLower,
    And,
    Or,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Eq,
    PlusEq,
    MinusEq,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    AmpAmp,
    PipePipe,
    Bang,
    DotDot,
    Arrow,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Dot,
    Colon,
    Pipe,
    Question,
    VersionDirective,
    UsesDirective,
    Eof,
}

impl TokenTag {
    /// Number of tags.
    pub const COUNT: u8 = TokenTag::Eof as u8 + 1;

    /// All tags in discriminant order.
    pub const ALL: [TokenTag; TokenTag::COUNT as usize] = [
        TokenTag::Ident,
        TokenTag::Constant,
        TokenTag::Int,
        TokenTag::Float,
        TokenTag::StringOpen,
        TokenTag::StringContent,
        TokenTag::StringEscape,
        TokenTag::StringClose,
        TokenTag::Symbol,
        TokenTag::InstanceVar,
        TokenTag::ClassVar,
        TokenTag::Def,
        TokenTag::End,
        TokenTag::If,
        TokenTag::Elsif,
        TokenTag::Else,
        TokenTag::Unless,
        TokenTag::Case,
        TokenTag::When,
        TokenTag::While,
        TokenTag::Until,
        TokenTag::For,
        TokenTag::In,
        TokenTag::Begin,
        TokenTag::Rescue,
        TokenTag::Ensure,
        TokenTag::Return,
        TokenTag::Break,
        TokenTag::Next,
        TokenTag::Raise,
        TokenTag::Yield,
        TokenTag::Class,
        TokenTag::Private,
        TokenTag::Export,
        TokenTag::Do,
        TokenTag::True,
        TokenTag::False,
        TokenTag::Nil,
        TokenTag::SelfLower,
        TokenTag::And,
        TokenTag::Or,
        TokenTag::Plus,
        TokenTag::Minus,
        TokenTag::Star,
        TokenTag::Slash,
        TokenTag::Percent,
        TokenTag::Eq,
        TokenTag::PlusEq,
        TokenTag::MinusEq,
        TokenTag::EqEq,
        TokenTag::NotEq,
        TokenTag::Lt,
        TokenTag::Gt,
        TokenTag::LtEq,
        TokenTag::GtEq,
        TokenTag::AmpAmp,
        TokenTag::PipePipe,
        TokenTag::Bang,
        TokenTag::DotDot,
        TokenTag::Arrow,
        TokenTag::LParen,
        TokenTag::RParen,
        TokenTag::LBracket,
        TokenTag::RBracket,
        TokenTag::LBrace,
        TokenTag::RBrace,
        TokenTag::Comma,
        TokenTag::Dot,
        TokenTag::Colon,
        TokenTag::Pipe,
        TokenTag::Question,
        TokenTag::VersionDirective,
        TokenTag::UsesDirective,
        TokenTag::Eof,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`index`](Self::index).
    pub const fn from_index(index: u8) -> Option<TokenTag> {
        if index < Self::COUNT {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    pub const fn is_keyword(self) -> bool {
        (self as u8) >= (TokenTag::Def as u8) && (self as u8) <= (TokenTag::Or as u8)
    }

    /// Fixed spelling for keywords, operators and punctuation.
    pub const fn spelling(self) -> Option<&'static str> {
        let text = match self {
            TokenTag::Def => "def",
            TokenTag::End => "end",
            TokenTag::If => "if",
            TokenTag::Elsif => "elsif",
            TokenTag::Else => "else",
            TokenTag::Unless => "unless",
            TokenTag::Case => "case",
            TokenTag::When => "when",
            TokenTag::While => "while",
            TokenTag::Until => "until",
            TokenTag::For => "for",
            TokenTag::In => "in",
            TokenTag::Begin => "begin",
            TokenTag::Rescue => "rescue",
            TokenTag::Ensure => "ensure",
            TokenTag::Return => "return",
            TokenTag::Break => "break",
            TokenTag::Next => "next",
            TokenTag::Raise => "raise",
            TokenTag::Yield => "yield",
            TokenTag::Class => "class",
            TokenTag::Private => "private",
            TokenTag::Export => "export",
            TokenTag::Do => "do",
            TokenTag::True => "true",
            TokenTag::False => "false",
            TokenTag::Nil => "nil",
            TokenTag::SelfLower => "self",
            TokenTag::And => "and",
            TokenTag::Or => "or",
            TokenTag::Plus => "+",
            TokenTag::Minus => "-",
            TokenTag::Star => "*",
            TokenTag::Slash => "/",
            TokenTag::Percent => "%",
            TokenTag::Eq => "=",
            TokenTag::PlusEq => "+=",
            TokenTag::MinusEq => "-=",
            TokenTag::EqEq => "==",
            TokenTag::NotEq => "!=",
            TokenTag::Lt => "<",
            TokenTag::Gt => ">",
            TokenTag::LtEq => "<=",
            TokenTag::GtEq => ">=",
            TokenTag::AmpAmp => "&&",
            TokenTag::PipePipe => "||",
            TokenTag::Bang => "!",
            TokenTag::DotDot => "..",
            TokenTag::Arrow => "->",
            TokenTag::LParen => "(",
            TokenTag::RParen => ")",
            TokenTag::LBracket => "[",
            TokenTag::RBracket => "]",
            TokenTag::LBrace => "{",
            TokenTag::RBrace => "}",
            TokenTag::Comma => ",",
            TokenTag::Dot => ".",
            TokenTag::Colon => ":",
            TokenTag::Pipe => "|",
            TokenTag::Question => "?",
            _ => return None,
        };
        Some(text)
    }

    /// Human-readable name for diagnostics.
    ///
    /// Fixed-spelling tokens are quoted: `` `end` ``, `` `(` ``.
    pub fn description(self) -> String {
        if let Some(text) = self.spelling() {
            return format!("`{text}`");
        }
        let name = match self {
            TokenTag::Ident => "identifier",
            TokenTag::Constant => "constant",
            TokenTag::Int => "integer",
            TokenTag::Float => "float",
            TokenTag::StringOpen => "string",
            TokenTag::StringContent => "string content",
            TokenTag::StringEscape => "escape sequence",
            TokenTag::StringClose => "closing `\"`",
            TokenTag::Symbol => "symbol",
            TokenTag::InstanceVar => "instance variable",
            TokenTag::ClassVar => "class variable",
            TokenTag::VersionDirective => "version directive",
            TokenTag::UsesDirective => "uses directive",
            _ => "end of input",
        };
        name.to_string()
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// A fully materialized token stream, ending with [`TokenKind::Eof`].
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Kinds only, handy in tests.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;
