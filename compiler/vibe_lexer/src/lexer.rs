//! The lazy token producer.
//!
//! [`Lexer::next_token`] dispatches on the current byte, in the manner of a
//! hand-written scanner: whitespace and ordinary comments are consumed as
//! trivia, the two directive comment shapes become tokens, and every other
//! byte starts exactly one token or one [`LexError`]. The lexer never fails;
//! it always makes progress and ends with a single `Eof`.
//!
//! String literals switch the lexer into string mode, where the body is split
//! into raw content runs and decoded escapes until the closing quote.

use tracing::trace;
use vibe_ir::{Span, StringInterner, Token, TokenKind};

use crate::cursor::Cursor;
use crate::directive::{self, Directive};
use crate::keywords;
use crate::lex_error::{LexError, LexErrorKind};

/// An ordinary comment on the trivia channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Comment<'src> {
    pub span: Span,
    /// Text from `#` to end of line, newline excluded.
    pub text: &'src str,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mode {
    Code,
    /// Inside a string literal opened at this byte offset.
    String { open: usize },
}

/// Everything the lexer accumulated besides tokens.
#[derive(Debug, Default)]
pub struct LexerParts<'src> {
    pub interner: StringInterner,
    pub errors: Vec<LexError>,
    pub comments: Vec<Comment<'src>>,
}

pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    interner: StringInterner,
    mode: Mode,
    errors: Vec<LexError>,
    comments: Vec<Comment<'src>>,
    finished: bool,
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Source offsets beyond `u32::MAX` saturate.
#[inline]
fn span(start: usize, end: usize) -> Span {
    let to_u32 = |offset: usize| u32::try_from(offset).unwrap_or(u32::MAX);
    Span::new(to_u32(start), to_u32(end))
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_interner(source, StringInterner::new())
    }

    /// Lex into an existing interner.
    pub fn with_interner(source: &'src str, interner: StringInterner) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            interner,
            mode: Mode::Code,
            errors: Vec::new(),
            comments: Vec::new(),
            finished: false,
        }
    }

    pub fn source(&self) -> &'src str {
        self.cursor.source()
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// The parser interns cooked string values through this.
    pub fn interner_mut(&mut self) -> &mut StringInterner {
        &mut self.interner
    }

    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn comments(&self) -> &[Comment<'src>] {
        &self.comments
    }

    pub fn finish(self) -> LexerParts<'src> {
        LexerParts {
            interner: self.interner,
            errors: self.errors,
            comments: self.comments,
        }
    }

    /// Produce the next token. After end of input, keeps returning `Eof`.
    pub fn next_token(&mut self) -> Token {
        if let Mode::String { open } = self.mode {
            return self.string_part(open);
        }

        loop {
            self.cursor.skip_whitespace();
            let start = self.cursor.pos();
            let Some(byte) = self.cursor.current() else {
                return Token::new(TokenKind::Eof, span(start, start));
            };

            let kind = match byte {
                b'#' => match self.comment(start) {
                    Some(kind) => kind,
                    None => continue,
                },
                b'a'..=b'z' | b'_' => self.identifier(start),
                b'A'..=b'Z' => self.constant(start),
                b'0'..=b'9' => self.number(start),
                b'"' => {
                    self.cursor.advance();
                    self.mode = Mode::String { open: start };
                    TokenKind::StringOpen
                }
                b'@' => match self.variable(start) {
                    Some(kind) => kind,
                    None => continue,
                },
                b':' => self.colon(),

                // ─── Operators ──────────────────────────────────────────
                b'+' => self.one_or_two(b'=', TokenKind::Plus, TokenKind::PlusEq),
                b'-' => self.minus(),
                b'*' => self.single(TokenKind::Star),
                b'/' => self.single(TokenKind::Slash),
                b'%' => self.single(TokenKind::Percent),
                b'=' => self.one_or_two(b'=', TokenKind::Eq, TokenKind::EqEq),
                b'!' => self.one_or_two(b'=', TokenKind::Bang, TokenKind::NotEq),
                b'<' => self.one_or_two(b'=', TokenKind::Lt, TokenKind::LtEq),
                b'>' => self.one_or_two(b'=', TokenKind::Gt, TokenKind::GtEq),
                b'|' => self.one_or_two(b'|', TokenKind::Pipe, TokenKind::PipePipe),
                b'.' => self.one_or_two(b'.', TokenKind::Dot, TokenKind::DotDot),
                b'&' if self.cursor.peek() == Some(b'&') => {
                    self.cursor.advance_n(2);
                    TokenKind::AmpAmp
                }

                // ─── Punctuation ────────────────────────────────────────
                b'(' => self.single(TokenKind::LParen),
                b')' => self.single(TokenKind::RParen),
                b'[' => self.single(TokenKind::LBracket),
                b']' => self.single(TokenKind::RBracket),
                b'{' => self.single(TokenKind::LBrace),
                b'}' => self.single(TokenKind::RBrace),
                b',' => self.single(TokenKind::Comma),
                b'?' => self.single(TokenKind::Question),

                _ => {
                    self.unrecognized(start);
                    continue;
                }
            };
            return Token::new(kind, span(start, self.cursor.pos()));
        }
    }

    #[inline]
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    #[inline]
    fn one_or_two(&mut self, second: u8, one: TokenKind, two: TokenKind) -> TokenKind {
        self.cursor.advance();
        if self.cursor.eat(second) {
            two
        } else {
            one
        }
    }

    fn minus(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.eat(b'=') {
            TokenKind::MinusEq
        } else if self.cursor.eat(b'>') {
            TokenKind::Arrow
        } else {
            TokenKind::Minus
        }
    }

    fn unrecognized(&mut self, start: usize) {
        let c = self.cursor.advance_char().unwrap_or('\u{FFFD}');
        self.error(
            LexErrorKind::UnrecognizedCharacter(c),
            span(start, self.cursor.pos()),
        );
    }

    fn error(&mut self, kind: LexErrorKind, span: Span) {
        trace!(?kind, %span, "lex error");
        self.errors.push(LexError::new(kind, span));
    }

    // ─── Names ──────────────────────────────────────────────────────────

    /// Absorb one trailing `?`/`!` unless it begins `!=`/`?=`.
    fn trailing_marker(&mut self) {
        let marker = matches!(self.cursor.current(), Some(b'?' | b'!'));
        let assign_like = self.cursor.peek() == Some(b'=') && self.cursor.peek_at(2) != Some(b'=');
        if marker && !assign_like {
            self.cursor.advance();
        }
    }

    fn identifier(&mut self, start: usize) -> TokenKind {
        self.cursor.eat_while(is_ident_continue);
        self.trailing_marker();
        keywords::resolve_name(self.cursor.slice(start), &mut self.interner)
    }

    fn constant(&mut self, start: usize) -> TokenKind {
        self.cursor.eat_while(is_ident_continue);
        keywords::resolve_name(self.cursor.slice(start), &mut self.interner)
    }

    /// `@name` or `@@name`. A sigil without a name is an error.
    fn variable(&mut self, start: usize) -> Option<TokenKind> {
        self.cursor.advance();
        let class_var = self.cursor.eat(b'@');
        if !self.cursor.current().is_some_and(is_ident_start) {
            self.error(
                LexErrorKind::UnrecognizedCharacter('@'),
                span(start, self.cursor.pos()),
            );
            return None;
        }
        let name_start = self.cursor.pos();
        self.cursor.eat_while(is_ident_continue);
        let name = self.interner.intern(self.cursor.slice(name_start));
        Some(if class_var {
            TokenKind::ClassVar(name)
        } else {
            TokenKind::InstanceVar(name)
        })
    }

    /// `:name` is a symbol unless the colon directly follows something that
    /// takes a colon after it (`key:`, `f(as:`, `"key":`).
    fn colon(&mut self) -> TokenKind {
        let after_operand = self
            .cursor
            .prev()
            .is_some_and(|b| is_ident_continue(b) || matches!(b, b'?' | b'!' | b')' | b']' | b'"'));
        self.cursor.advance();
        if after_operand || !self.cursor.current().is_some_and(is_ident_start) {
            return TokenKind::Colon;
        }
        let name_start = self.cursor.pos();
        self.cursor.eat_while(is_ident_continue);
        TokenKind::Symbol(self.interner.intern(self.cursor.slice(name_start)))
    }

    // ─── Numbers ────────────────────────────────────────────────────────

    fn number(&mut self, start: usize) -> TokenKind {
        let digit_or_sep = |b: u8| b.is_ascii_digit() || b == b'_';
        self.cursor.eat_while(digit_or_sep);

        // `1..5` is integer, range, integer.
        let is_float = self.cursor.current() == Some(b'.')
            && self.cursor.peek().is_some_and(|b| b.is_ascii_digit());
        if is_float {
            self.cursor.advance();
            self.cursor.eat_while(digit_or_sep);
        }

        let digits: String = self
            .cursor
            .slice(start)
            .chars()
            .filter(|&c| c != '_')
            .collect();
        if is_float {
            let value = digits.parse::<f64>().unwrap_or(f64::INFINITY);
            return TokenKind::Float(value.to_bits());
        }
        match digits.parse::<u64>() {
            Ok(value) => TokenKind::Int(value),
            Err(_) => {
                self.error(
                    LexErrorKind::IntegerOverflow,
                    span(start, self.cursor.pos()),
                );
                TokenKind::Int(0)
            }
        }
    }

    // ─── Comments ───────────────────────────────────────────────────────

    /// Consume a comment; `Some` when it is a directive.
    fn comment(&mut self, start: usize) -> Option<TokenKind> {
        self.cursor.skip_to_line_end();
        let text = self.cursor.slice(start);
        match directive::classify(text) {
            Some(Directive::Version { major, minor }) => {
                trace!(major, minor, "version directive");
                Some(TokenKind::VersionDirective { major, minor })
            }
            Some(Directive::Uses(names)) => {
                trace!(?names, "uses directive");
                Some(TokenKind::UsesDirective)
            }
            None => {
                self.comments.push(Comment {
                    span: span(start, self.cursor.pos()),
                    text,
                });
                None
            }
        }
    }

    // ─── Strings ────────────────────────────────────────────────────────

    fn string_part(&mut self, open: usize) -> Token {
        let start = self.cursor.pos();
        let kind = match self.cursor.current() {
            None => return self.unterminated_string(open),
            Some(b'"') => {
                self.cursor.advance();
                self.mode = Mode::Code;
                TokenKind::StringClose
            }
            Some(b'\\') => {
                self.cursor.advance();
                match self.cursor.advance_char() {
                    None => return self.unterminated_string(open),
                    Some(c) => self.escape(c, start),
                }
            }
            Some(_) => {
                self.cursor.skip_string_content();
                TokenKind::StringContent(self.interner.intern(self.cursor.slice(start)))
            }
        };
        Token::new(kind, span(start, self.cursor.pos()))
    }

    fn escape(&mut self, c: char, start: usize) -> TokenKind {
        let decoded = match c {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '\\' => '\\',
            '"' => '"',
            other => {
                self.error(
                    LexErrorKind::InvalidEscape(other),
                    span(start, self.cursor.pos()),
                );
                let mut buf = [0u8; 4];
                return TokenKind::StringContent(self.interner.intern(other.encode_utf8(&mut buf)));
            }
        };
        TokenKind::StringEscape(decoded)
    }

    /// Record the error and close the string with a zero-width token at end
    /// of input.
    fn unterminated_string(&mut self, open: usize) -> Token {
        let end = self.cursor.len();
        self.error(LexErrorKind::UnterminatedString, span(open, end));
        self.mode = Mode::Code;
        Token::new(TokenKind::StringClose, span(end, end))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token up to and including `Eof`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.kind == TokenKind::Eof;
        Some(token)
    }
}

#[cfg(test)]
mod tests;
