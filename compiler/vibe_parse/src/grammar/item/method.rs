//! `[private] def (name | self.name) [(params)] [-> type] body end`

use tracing::trace;
use vibe_ir::{MethodName, NodeId, NodeKind, TokenTag};

use crate::error::{ErrorContext, ParseError};
use crate::grammar::END;
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn parse_method(&mut self) -> Result<NodeId, ParseError> {
        let start = self.cursor.current_span();
        let private = self.cursor.eat(TokenTag::Private);
        let def = self.expect(TokenTag::Def, ErrorContext::Method)?.span;

        let singleton =
            self.cursor.check(TokenTag::SelfLower) && self.cursor.peek_tag(1) == TokenTag::Dot;
        let name = if singleton {
            self.cursor.advance();
            self.cursor.advance();
            MethodName::SelfQualified(self.expect_ident(ErrorContext::Method)?.0)
        } else {
            MethodName::Simple(self.expect_ident(ErrorContext::Method)?.0)
        };
        trace!(?name, private, "method");

        let params = if self.cursor.check(TokenTag::LParen) {
            Some(self.parse_parameters()?)
        } else {
            None
        };
        let return_type = if self.cursor.eat(TokenTag::Arrow) {
            Some(self.parse_type_annotation()?)
        } else {
            None
        };

        let body = self.parse_body(END);
        self.expect_end(def, "def", ErrorContext::Method)?;
        Ok(self.alloc(
            NodeKind::Method {
                private,
                name,
                params,
                return_type,
                body,
            },
            self.span_from(start),
        ))
    }
}
