//! Token cursor over the lazy lexer.
//!
//! Tokens are pulled from [`Lexer::next_token`] on demand into a small
//! lookahead buffer; `buffer[0]` is the current token. The buffer only grows
//! as far as the deepest `peek_nth` asked for, which for every rule in this
//! grammar is a handful of tokens.
//!
//! Directive comments never enter the buffer. They wait on a side queue until
//! a statement position claims them with [`Cursor::take_directive`]; one that
//! is stepped over unclaimed is demoted to an ordinary comment.

use std::collections::VecDeque;

use tracing::trace;
use vibe_ir::{Span, StringInterner, Token, TokenKind, TokenTag};
use vibe_lexer::{Comment, Lexer, LexerParts};

pub struct Cursor<'src> {
    lexer: Lexer<'src>,
    buffer: VecDeque<Token>,
    /// Lexed directives not yet claimed, in source order.
    directives: VecDeque<Token>,
    /// Directives found outside statement position.
    demoted: Vec<Comment<'src>>,
    previous_span: Span,
    /// Tokens consumed so far; used for progress checks during recovery.
    consumed: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut cursor = Cursor {
            lexer: Lexer::new(source),
            buffer: VecDeque::with_capacity(8),
            directives: VecDeque::new(),
            demoted: Vec::new(),
            previous_span: Span::DUMMY,
            consumed: 0,
        };
        cursor.fill(1);
        cursor
    }

    fn fill(&mut self, len: usize) {
        while self.buffer.len() < len {
            let token = self.lexer.next_token();
            if matches!(token.tag(), TokenTag::VersionDirective | TokenTag::UsesDirective) {
                self.directives.push_back(token);
            } else {
                self.buffer.push_back(token);
            }
        }
    }

    fn demote(&mut self, directive: Token) {
        trace!(span = %directive.span, "directive outside statement position");
        let text = self.text(directive.span);
        self.demoted.push(Comment {
            span: directive.span,
            text,
        });
    }

    /// Demote every pending directive that starts before `offset`.
    fn demote_before(&mut self, offset: u32) {
        while let Some(directive) = self.directives.front().copied() {
            if directive.span.start >= offset {
                break;
            }
            self.directives.pop_front();
            self.demote(directive);
        }
    }

    fn eof_token(&self) -> Token {
        let end = u32::try_from(self.lexer.source().len()).unwrap_or(u32::MAX);
        Token::new(TokenKind::Eof, Span::point(end))
    }

    #[inline]
    pub fn source(&self) -> &'src str {
        self.lexer.source()
    }

    /// Source text under a span.
    pub fn text(&self, span: Span) -> &'src str {
        self.source().get(span.to_range()).unwrap_or("")
    }

    pub fn interner(&self) -> &StringInterner {
        self.lexer.interner()
    }

    pub fn interner_mut(&mut self) -> &mut StringInterner {
        self.lexer.interner_mut()
    }

    /// Whether the lexer has recorded any error so far.
    pub fn has_lex_errors(&self) -> bool {
        !self.lexer.errors().is_empty()
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.consumed
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.buffer
            .front()
            .copied()
            .unwrap_or_else(|| self.eof_token())
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_tag(&self) -> TokenTag {
        self.current().tag()
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the last consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        self.previous_span
    }

    /// Whether a line break separates the current token from the last
    /// consumed one.
    pub fn at_line_start(&self) -> bool {
        self.line_break_between(self.previous_span, self.current_span())
    }

    /// Whether the source between two spans contains a line break.
    pub fn line_break_between(&self, before: Span, after: Span) -> bool {
        let gap = before.end as usize..after.start as usize;
        self.source().get(gap).is_some_and(|text| text.contains('\n'))
    }

    /// The token `n` positions ahead; `peek_nth(0)` is the current token.
    pub fn peek_nth(&mut self, n: usize) -> Token {
        self.fill(n + 1);
        self.buffer
            .get(n)
            .copied()
            .unwrap_or_else(|| self.eof_token())
    }

    pub fn peek_tag(&mut self, n: usize) -> TokenTag {
        self.peek_nth(n).tag()
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_tag() == TokenTag::Eof
    }

    #[inline]
    pub fn check(&self, tag: TokenTag) -> bool {
        self.current_tag() == tag
    }

    /// Consume the current token. `Eof` is never consumed.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.demote_before(token.span.start);
            self.buffer.pop_front();
            self.fill(1);
            self.previous_span = token.span;
            self.consumed += 1;
            trace!(kind = ?token.kind, span = %token.span, "advance");
        }
        token
    }

    /// Claim the directive comment sitting between the last consumed token
    /// and the current one. Only statement positions call this.
    pub fn take_directive(&mut self) -> Option<Token> {
        let current = self.current_span().start;
        let directive = self.directives.front().copied().filter(|d| d.span.start < current)?;
        self.directives.pop_front();
        self.previous_span = directive.span;
        self.consumed += 1;
        trace!(kind = ?directive.kind, span = %directive.span, "directive");
        Some(directive)
    }

    /// Split a current `:name` symbol into `:` and the name token, where the
    /// grammar requires a colon (`x :Integer`). Returns whether it split.
    pub fn split_symbol(&mut self) -> bool {
        let token = self.current();
        if !matches!(token.kind, TokenKind::Symbol(_)) {
            return false;
        }
        let colon = Span::new(token.span.start, token.span.start + 1);
        let name = Span::new(colon.end, token.span.end);
        let text = self.text(name);
        let kind = vibe_lexer::resolve_name(text, self.lexer.interner_mut());
        let Some(front) = self.buffer.front_mut() else {
            return false;
        };
        *front = Token::new(TokenKind::Colon, colon);
        self.buffer.insert(1, Token::new(kind, name));
        trace!(span = %token.span, "split symbol");
        true
    }

    /// Consume the current token if it has this tag.
    pub fn eat(&mut self, tag: TokenTag) -> bool {
        if self.check(tag) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn skip_to_eof(&mut self) {
        while !self.is_at_end() {
            self.advance();
        }
    }

    /// Hand back the interner and the lexer's side channels. Unclaimed
    /// directives join the comments.
    pub fn finish(mut self) -> LexerParts<'src> {
        self.demote_before(u32::MAX);
        let mut parts = self.lexer.finish();
        parts.comments.append(&mut self.demoted);
        parts.comments.sort_by_key(|comment| comment.span.start);
        parts
    }
}
