//! Parameter lists.
//!
//! ```text
//! (x, y = 1, count: Integer = 0, @name, @age: Integer?)
//! ```

use smallvec::SmallVec;
use vibe_diagnostic::ErrorCode;
use vibe_ir::{NodeId, NodeKind, TokenKind, TokenTag};

use crate::disambiguate::{self, Resolution};
use crate::error::{ErrorContext, ParseError};
use crate::recovery::TokenSet;
use crate::Parser;

const PARAM_START: TokenSet = TokenSet::new()
    .with(TokenTag::Ident)
    .with(TokenTag::InstanceVar);

impl Parser<'_> {
    /// `( [param (, param)* [,]] )` as a `Parameters` node.
    pub(crate) fn parse_parameters(&mut self) -> Result<NodeId, ParseError> {
        let open = self.expect(TokenTag::LParen, ErrorContext::Parameters)?.span;
        let mut params: SmallVec<[NodeId; 4]> = SmallVec::new();
        while !self.cursor.check(TokenTag::RParen) {
            let Some(resolution) = disambiguate::parameter(&mut self.cursor) else {
                return Err(self
                    .unexpected(ErrorCode::E1006, PARAM_START.with(TokenTag::RParen))
                    .with_context(ErrorContext::Parameters));
            };
            params.push(self.parse_parameter(resolution)?);
            if !self.cursor.eat(TokenTag::Comma) {
                break;
            }
        }
        if !self.cursor.eat(TokenTag::RParen) {
            let expected = TokenSet::single(TokenTag::RParen).with(TokenTag::Comma);
            return Err(self
                .unexpected(ErrorCode::E1006, expected)
                .with_context(ErrorContext::Parameters));
        }
        let params = self.alloc_list(&params);
        Ok(self.alloc(NodeKind::Parameters { params }, self.span_from(open)))
    }

    fn parse_parameter(&mut self, resolution: Resolution) -> Result<NodeId, ParseError> {
        let token = self.cursor.advance();
        let kind = match (resolution, token.kind) {
            (Resolution::IvarParameter, TokenKind::InstanceVar(name)) => {
                self.cursor.split_symbol();
                let ty = if self.cursor.eat(TokenTag::Colon) {
                    Some(self.parse_type_annotation()?)
                } else {
                    None
                };
                NodeKind::IvarParam { name, ty }
            }
            (Resolution::TypedParameter, TokenKind::Ident(name)) => {
                self.cursor.split_symbol();
                self.expect(TokenTag::Colon, ErrorContext::Parameters)?;
                let ty = self.parse_type_annotation()?;
                let default = self.parse_default()?;
                NodeKind::TypedParam { name, ty, default }
            }
            (_, TokenKind::Ident(name)) => {
                let default = self.parse_default()?;
                NodeKind::SimpleParam { name, default }
            }
            _ => {
                return Err(ParseError::unexpected(
                    ErrorCode::E1006,
                    PARAM_START,
                    token.tag(),
                    token.span,
                )
                .with_context(ErrorContext::Parameters));
            }
        };
        Ok(self.alloc(kind, self.span_from(token.span)))
    }

    /// `= expr` after a parameter, if present.
    fn parse_default(&mut self) -> Result<Option<NodeId>, ParseError> {
        if self.cursor.eat(TokenTag::Eq) {
            Ok(Some(self.parse_expr()?))
        } else {
            Ok(None)
        }
    }
}
