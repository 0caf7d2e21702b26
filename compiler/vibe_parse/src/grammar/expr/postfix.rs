//! Postfix chains: calls, member access, subscripts, and the argument lists
//! and `do` blocks hanging off them.

use smallvec::SmallVec;
use vibe_diagnostic::ErrorCode;
use vibe_ir::{Name, NodeId, NodeKind, NodeRange, Span, TokenKind, TokenTag};

use crate::error::{ErrorContext, ParseError};
use crate::grammar::END;
use crate::recovery::TokenSet;
use crate::Parser;

impl Parser<'_> {
    /// Apply `.name`, `.name(args)`, and `[index]` to `left` until none
    /// follows.
    pub(crate) fn parse_postfix(&mut self, mut left: NodeId) -> Result<NodeId, ParseError> {
        loop {
            let start = self.node_span(left);
            left = match self.cursor.current_tag() {
                TokenTag::Dot => {
                    self.cursor.advance();
                    let (member, _) = self.expect_ident(ErrorContext::MemberAccess)?;
                    if self.cursor.check(TokenTag::LParen) {
                        self.finish_call(Some(left), member, start)?
                    } else {
                        let block = self.parse_optional_block()?;
                        self.alloc(
                            NodeKind::MemberAccess {
                                receiver: left,
                                member,
                                block,
                            },
                            self.span_from(start),
                        )
                    }
                }
                TokenTag::LBracket => {
                    self.cursor.advance();
                    let index = self.parse_expr()?;
                    self.expect(TokenTag::RBracket, ErrorContext::Subscript)?;
                    self.alloc(
                        NodeKind::Subscript {
                            receiver: left,
                            index,
                        },
                        self.span_from(start),
                    )
                }
                _ => return Ok(left),
            };
        }
    }

    /// Arguments and optional block of a call whose method name was already
    /// consumed; the cursor is at `(`.
    pub(crate) fn finish_call(
        &mut self,
        receiver: Option<NodeId>,
        method: Name,
        start: Span,
    ) -> Result<NodeId, ParseError> {
        let args = self.parse_arguments()?;
        let block = self.parse_optional_block()?;
        Ok(self.alloc(
            NodeKind::Call {
                receiver,
                method,
                args,
                block,
            },
            self.span_from(start),
        ))
    }

    /// `( [arg (, arg)* [,]] )`
    pub(crate) fn parse_arguments(&mut self) -> Result<NodeRange, ParseError> {
        self.expect(TokenTag::LParen, ErrorContext::Arguments)?;
        let mut args: SmallVec<[NodeId; 4]> = SmallVec::new();
        while !self.cursor.check(TokenTag::RParen) {
            args.push(self.parse_argument()?);
            if !self.cursor.eat(TokenTag::Comma) {
                break;
            }
        }
        if !self.cursor.eat(TokenTag::RParen) {
            let expected = TokenSet::single(TokenTag::RParen).with(TokenTag::Comma);
            return Err(self
                .unexpected(ErrorCode::E1007, expected)
                .with_context(ErrorContext::Arguments));
        }
        Ok(self.alloc_list(&args))
    }

    /// `key: value` when an identifier is followed by `:` (or by `:value`
    /// written as one symbol), else an expression.
    fn parse_argument(&mut self) -> Result<NodeId, ParseError> {
        let token = self.cursor.current();
        if let TokenKind::Ident(name) = token.kind {
            if matches!(self.cursor.peek_tag(1), TokenTag::Colon | TokenTag::Symbol) {
                self.cursor.advance();
                self.cursor.split_symbol();
                self.cursor.advance();
                let key = self.alloc(NodeKind::Identifier(name), token.span);
                let value = self.parse_expr()?;
                return Ok(self.alloc(NodeKind::KeywordArg { key, value }, self.span_from(token.span)));
            }
        }
        self.parse_expr()
    }

    /// `do [|a, b|] body end`, if the next token is `do`.
    pub(crate) fn parse_optional_block(&mut self) -> Result<Option<NodeId>, ParseError> {
        if !self.cursor.check(TokenTag::Do) {
            return Ok(None);
        }
        let open = self.cursor.advance().span;

        let mut names: SmallVec<[Name; 4]> = SmallVec::new();
        if self.cursor.eat(TokenTag::Pipe) {
            loop {
                let (name, _) = self.expect_ident(ErrorContext::Block)?;
                names.push(name);
                if !self.cursor.eat(TokenTag::Comma) {
                    break;
                }
            }
            self.expect(TokenTag::Pipe, ErrorContext::Block)?;
        }
        let params = self.arena.alloc_names(&names);

        let body = self.parse_body(END);
        self.expect_end(open, "do", ErrorContext::Block)?;
        Ok(Some(self.alloc(NodeKind::Block { params, body }, self.span_from(open))))
    }
}
