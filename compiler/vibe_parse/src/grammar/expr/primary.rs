//! Primary expressions.

use smallvec::SmallVec;
use vibe_diagnostic::ErrorCode;
use vibe_ir::{NodeId, NodeKind, TokenKind, TokenTag};

use crate::error::{ErrorContext, ParseError};
use crate::recovery::{TokenSet, EXPR_START};
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<NodeId, ParseError> {
        let token = self.cursor.current();
        if let TokenKind::Ident(name) = token.kind {
            self.cursor.advance();
            // `name(` is a receiverless call.
            if self.cursor.check(TokenTag::LParen) {
                return self.finish_call(None, name, token.span);
            }
            return Ok(self.alloc(NodeKind::Identifier(name), token.span));
        }
        let leaf = match token.kind {
            TokenKind::Constant(name) => NodeKind::Constant(name),
            TokenKind::Int(value) => NodeKind::Integer(value),
            TokenKind::Float(bits) => NodeKind::Float(bits),
            TokenKind::Symbol(name) => NodeKind::Symbol(name),
            TokenKind::InstanceVar(name) => NodeKind::InstanceVar(name),
            TokenKind::ClassVar(name) => NodeKind::ClassVar(name),
            TokenKind::True => NodeKind::True,
            TokenKind::False => NodeKind::False,
            TokenKind::Nil => NodeKind::Nil,
            TokenKind::SelfLower => NodeKind::SelfRef,
            TokenKind::StringOpen => return self.parse_string(),
            TokenKind::LBracket => return self.parse_array(),
            TokenKind::LBrace => return self.parse_hash(),
            TokenKind::LParen => return self.parse_parenthesized(),
            _ => {
                let mut error = self
                    .unexpected(ErrorCode::E1002, EXPR_START)
                    .with_context(ErrorContext::Expression);
                error.message = format!("expected expression, found {}", token.tag());
                return Err(error);
            }
        };
        self.cursor.advance();
        Ok(self.alloc(leaf, token.span))
    }

    /// `"..."`: concatenates content runs and decoded escapes into one
    /// interned value.
    pub(crate) fn parse_string(&mut self) -> Result<NodeId, ParseError> {
        let open = self.expect(TokenTag::StringOpen, ErrorContext::String)?.span;
        let mut value = String::new();
        loop {
            match self.cursor.current_kind() {
                TokenKind::StringContent(raw) => value.push_str(self.cursor.interner().lookup(raw)),
                TokenKind::StringEscape(c) => value.push(c),
                TokenKind::StringClose => {
                    self.cursor.advance();
                    break;
                }
                _ => {
                    let expected = TokenSet::single(TokenTag::StringClose);
                    return Err(self
                        .unexpected(ErrorCode::E1001, expected)
                        .with_context(ErrorContext::String));
                }
            }
            self.cursor.advance();
        }
        let name = self.cursor.interner_mut().intern(&value);
        Ok(self.alloc(NodeKind::String(name), self.span_from(open)))
    }

    /// `[a, b,]`
    fn parse_array(&mut self) -> Result<NodeId, ParseError> {
        let open = self.cursor.advance().span;
        let mut elements: SmallVec<[NodeId; 8]> = SmallVec::new();
        while !self.cursor.check(TokenTag::RBracket) {
            elements.push(self.parse_expr()?);
            if !self.cursor.eat(TokenTag::Comma) {
                break;
            }
        }
        self.expect_closer(TokenTag::RBracket, ErrorContext::Array)?;
        let elements = self.alloc_list(&elements);
        Ok(self.alloc(NodeKind::Array { elements }, self.span_from(open)))
    }

    /// `{key: value,}` where a key is an identifier or a string.
    fn parse_hash(&mut self) -> Result<NodeId, ParseError> {
        let open = self.cursor.advance().span;
        let mut entries: SmallVec<[NodeId; 8]> = SmallVec::new();
        while !self.cursor.check(TokenTag::RBrace) {
            entries.push(self.parse_hash_entry()?);
            if !self.cursor.eat(TokenTag::Comma) {
                break;
            }
        }
        self.expect_closer(TokenTag::RBrace, ErrorContext::Hash)?;
        let entries = self.alloc_list(&entries);
        Ok(self.alloc(NodeKind::Hash { entries }, self.span_from(open)))
    }

    fn parse_hash_entry(&mut self) -> Result<NodeId, ParseError> {
        let token = self.cursor.current();
        let key = match token.kind {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                self.alloc(NodeKind::Identifier(name), token.span)
            }
            TokenKind::StringOpen => self.parse_string()?,
            _ => {
                let expected = TokenSet::new()
                    .with(TokenTag::Ident)
                    .with(TokenTag::StringOpen)
                    .with(TokenTag::RBrace);
                return Err(self
                    .unexpected(ErrorCode::E1001, expected)
                    .with_context(ErrorContext::Hash));
            }
        };
        self.cursor.split_symbol();
        self.expect(TokenTag::Colon, ErrorContext::Hash)?;
        let value = self.parse_expr()?;
        Ok(self.alloc(NodeKind::HashEntry { key, value }, self.span_from(token.span)))
    }

    /// `( expr )`
    fn parse_parenthesized(&mut self) -> Result<NodeId, ParseError> {
        let open = self.cursor.advance().span;
        let expr = self.parse_expr()?;
        self.expect(TokenTag::RParen, ErrorContext::Parenthesized)?;
        Ok(self.alloc(NodeKind::Parenthesized { expr }, self.span_from(open)))
    }

    /// Closing bracket of a comma-separated list; a missing one also
    /// accepts `,`.
    fn expect_closer(&mut self, closer: TokenTag, context: ErrorContext) -> Result<(), ParseError> {
        if self.cursor.eat(closer) {
            return Ok(());
        }
        let expected = TokenSet::single(closer).with(TokenTag::Comma);
        Err(self.unexpected(ErrorCode::E1001, expected).with_context(context))
    }
}
