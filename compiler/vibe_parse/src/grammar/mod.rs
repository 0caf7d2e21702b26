//! Grammar productions, as `impl Parser` blocks split by area.
//!
//! - `mod.rs`: shared helpers (node allocation, `expect`, bodies, recovery)
//! - `stmt.rs`: statements, control flow, jumps, imports, directives
//! - `expr/`: Pratt expression parser, postfix chains, primaries
//! - `item/`: methods, parameters, types, classes

pub(crate) mod expr;
mod item;
mod stmt;

use smallvec::SmallVec;
use tracing::trace;
use vibe_diagnostic::ErrorCode;
use vibe_ir::{ArenaMark, Name, NodeId, NodeKind, NodeRange, Span, Token, TokenKind, TokenTag};
use vibe_stack::ensure_sufficient_stack;

use crate::error::{ErrorContext, ParseError};
use crate::recovery::{synchronize_statement, TokenSet, STMT_BOUNDARY};
use crate::Parser;

/// Closes `def`, `while`, `for`, blocks and the last clause of most
/// constructs.
pub(crate) const END: TokenSet = TokenSet::single(TokenTag::End);

impl Parser<'_> {
    #[inline]
    pub(crate) fn alloc(&mut self, kind: NodeKind, span: Span) -> NodeId {
        self.arena.alloc(kind, span)
    }

    #[inline]
    pub(crate) fn alloc_list(&mut self, ids: &[NodeId]) -> NodeRange {
        self.arena.alloc_list(ids)
    }

    /// Span from `start` to the end of the last consumed token.
    #[inline]
    pub(crate) fn span_from(&self, start: Span) -> Span {
        let end = self.cursor.previous_span().end.max(start.start);
        Span::new(start.start, end)
    }

    #[inline]
    pub(crate) fn node_span(&self, id: NodeId) -> Span {
        self.arena.span(id)
    }

    /// Error at the current token: expected one of `expected`.
    pub(crate) fn unexpected(&self, code: ErrorCode, expected: TokenSet) -> ParseError {
        let found = self.cursor.current();
        ParseError::unexpected(code, expected, found.tag(), found.span)
    }

    /// Consume a token with this tag or fail with E1001.
    pub(crate) fn expect(&mut self, tag: TokenTag, context: ErrorContext) -> Result<Token, ParseError> {
        self.expect_with(tag, ErrorCode::E1001, context)
    }

    pub(crate) fn expect_with(
        &mut self,
        tag: TokenTag,
        code: ErrorCode,
        context: ErrorContext,
    ) -> Result<Token, ParseError> {
        if self.cursor.check(tag) {
            Ok(self.cursor.advance())
        } else {
            Err(self.unexpected(code, TokenSet::single(tag)).with_context(context))
        }
    }

    /// Consume an identifier and return its name.
    pub(crate) fn expect_ident(&mut self, context: ErrorContext) -> Result<(Name, Span), ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok((name, token.span))
            }
            _ => Err(self
                .unexpected(ErrorCode::E1004, TokenSet::single(TokenTag::Ident))
                .with_context(context)),
        }
    }

    /// Consume a constant and return its name.
    pub(crate) fn expect_constant(&mut self, context: ErrorContext) -> Result<Name, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Constant(name) => {
                self.cursor.advance();
                Ok(name)
            }
            _ => Err(self
                .unexpected(ErrorCode::E1004, TokenSet::single(TokenTag::Constant))
                .with_context(context)),
        }
    }

    /// Consume the `end` closing a construct opened by `keyword` at `opener`.
    pub(crate) fn expect_end(
        &mut self,
        opener: Span,
        keyword: &str,
        context: ErrorContext,
    ) -> Result<Span, ParseError> {
        if self.cursor.check(TokenTag::End) {
            return Ok(self.cursor.advance().span);
        }
        let found = self.cursor.current();
        let mut error = ParseError::unexpected(ErrorCode::E1003, END, found.tag(), found.span)
            .with_related(opener, format!("`{keyword}` opened here"))
            .with_context(context);
        error.message = format!("expected `end` to close `{keyword}`, found {}", found.tag());
        Err(error)
    }

    /// Run `f` one nesting level deeper, with stack growth and the depth
    /// budget.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if let Err(exceeded) = self.depth.enter() {
            let span = self.cursor.current_span();
            self.cursor.skip_to_eof();
            return Err(ParseError::new(ErrorCode::E2001, exceeded.to_string(), span));
        }
        let result = ensure_sufficient_stack(|| f(self));
        self.depth.exit();
        result
    }

    /// Statements and declarations until a token in `terminators` or end of
    /// input; the terminator is not consumed.
    pub(crate) fn parse_body(&mut self, terminators: TokenSet) -> NodeRange {
        let mut stmts: SmallVec<[NodeId; 8]> = SmallVec::new();
        loop {
            if self.should_halt() {
                self.cursor.skip_to_eof();
                break;
            }
            if let Some(directive) = self.cursor.take_directive() {
                stmts.push(self.parse_directive(directive));
                continue;
            }
            let tag = self.cursor.current_tag();
            if tag == TokenTag::Eof || terminators.contains(tag) {
                break;
            }
            let start = self.cursor.current_span();
            let position = self.cursor.position();
            let mark = self.arena.mark();
            match self.parse_statement() {
                Ok(id) => stmts.push(id),
                Err(error) => {
                    let id = self.recover(error, mark, start, position, STMT_BOUNDARY);
                    stmts.push(id);
                }
            }
        }
        self.alloc_list(&stmts)
    }

    /// Report `error`, skip to the next line or the next token in
    /// `boundary`, and cover what was skipped with an `error` node. Always
    /// consumes at least one token unless at end of input.
    pub(crate) fn recover(
        &mut self,
        error: ParseError,
        mark: ArenaMark,
        start: Span,
        position: usize,
        boundary: TokenSet,
    ) -> NodeId {
        self.report(error);
        synchronize_statement(&mut self.cursor, boundary);
        self.finish_recovery(mark, start, position)
    }

    /// Force progress past a failed production, drop the nodes it built
    /// since `mark`, and allocate the `error` node covering everything
    /// consumed since `position`.
    pub(crate) fn finish_recovery(&mut self, mark: ArenaMark, start: Span, position: usize) -> NodeId {
        if self.cursor.position() == position && !self.cursor.is_at_end() {
            self.cursor.advance();
        }
        self.arena.truncate(mark);
        let span = if self.cursor.position() == position {
            Span::point(start.start)
        } else {
            self.span_from(start)
        };
        trace!(%span, "recovered");
        self.alloc(NodeKind::Error, span)
    }
}
