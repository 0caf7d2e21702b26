//! Type annotations: `Integer`, `string?`, `Integer | nil`.

use smallvec::SmallVec;
use vibe_diagnostic::ErrorCode;
use vibe_ir::{NodeId, NodeKind, TokenKind, TokenTag, TypeRef};

use crate::error::{ErrorContext, ParseError};
use crate::recovery::TokenSet;
use crate::Parser;

const TYPE_START: TokenSet = TokenSet::new()
    .with(TokenTag::Ident)
    .with(TokenTag::Constant)
    .with(TokenTag::Nil);

impl Parser<'_> {
    /// One or more type names joined by `|`.
    pub(crate) fn parse_type_annotation(&mut self) -> Result<NodeId, ParseError> {
        let start = self.cursor.current_span();
        let mut types: SmallVec<[NodeId; 2]> = SmallVec::new();
        loop {
            types.push(self.parse_type_name()?);
            if !self.cursor.eat(TokenTag::Pipe) {
                break;
            }
        }
        let types = self.alloc_list(&types);
        Ok(self.alloc(NodeKind::TypeAnnotation { types }, self.span_from(start)))
    }

    /// `name`, `Name` or `nil`, optionally marked nilable with `?`.
    ///
    /// The lexer folds a trailing `?` into a lowercase identifier
    /// (`integer?`, `nil?`), so the marker is split back off here.
    fn parse_type_name(&mut self) -> Result<NodeId, ParseError> {
        let token = self.cursor.current();
        let (name, mut nilable) = match token.kind {
            TokenKind::Ident(name) => {
                let text = self.cursor.interner().lookup(name);
                match text.strip_suffix('?') {
                    Some("nil") => (TypeRef::Nil, true),
                    Some(base) => {
                        let base = base.to_owned();
                        (TypeRef::Named(self.cursor.interner_mut().intern(&base)), true)
                    }
                    None => (TypeRef::Named(name), false),
                }
            }
            TokenKind::Constant(name) => (TypeRef::Named(name), false),
            TokenKind::Nil => (TypeRef::Nil, false),
            _ => {
                let mut error = self
                    .unexpected(ErrorCode::E1005, TYPE_START)
                    .with_context(ErrorContext::TypeAnnotation);
                error.message = format!("expected type, found {}", token.tag());
                return Err(error);
            }
        };
        self.cursor.advance();
        if self.cursor.eat(TokenTag::Question) {
            nilable = true;
        }
        Ok(self.alloc(NodeKind::TypeName { name, nilable }, self.span_from(token.span)))
    }
}
