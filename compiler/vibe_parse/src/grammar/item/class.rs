//! `class Name member+ end`

use smallvec::SmallVec;
use tracing::trace;
use vibe_diagnostic::ErrorCode;
use vibe_ir::{AccessorKind, Name, NodeId, NodeKind, TokenKind, TokenTag};

use crate::error::{ErrorContext, ParseError};
use crate::recovery::{TokenSet, MEMBER_BOUNDARY};
use crate::Parser;

const MEMBER_START: TokenSet = TokenSet::new()
    .with(TokenTag::Def)
    .with(TokenTag::Private)
    .with(TokenTag::ClassVar)
    .with(TokenTag::Ident);

impl Parser<'_> {
    pub(crate) fn parse_class(&mut self) -> Result<NodeId, ParseError> {
        let open = self.cursor.advance().span;
        let name = self.expect_constant(ErrorContext::Class)?;

        let mut members: SmallVec<[NodeId; 8]> = SmallVec::new();
        loop {
            if self.should_halt() {
                self.cursor.skip_to_eof();
                break;
            }
            let tag = self.cursor.current_tag();
            if matches!(tag, TokenTag::End | TokenTag::Eof) {
                break;
            }
            let start = self.cursor.current_span();
            let position = self.cursor.position();
            let mark = self.arena.mark();
            match self.parse_member() {
                Ok(id) => members.push(id),
                Err(error) => {
                    self.report(error);
                    self.skip_to_member();
                    members.push(self.finish_recovery(mark, start, position));
                }
            }
        }

        if members.is_empty() {
            let message = format!("class `{}` has no members", self.cursor.interner().lookup(name));
            let error = self
                .unexpected(ErrorCode::E1008, MEMBER_START)
                .with_related(open, "`class` opened here")
                .with_context(ErrorContext::Class);
            self.report(ParseError {
                message,
                ..error
            });
        }
        let members = self.alloc_list(&members);
        self.expect_end(open, "class", ErrorContext::Class)?;
        Ok(self.alloc(NodeKind::Class { name, members }, self.span_from(open)))
    }

    fn parse_member(&mut self) -> Result<NodeId, ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Def | TokenKind::Private => self.parse_method(),
            TokenKind::ClassVar(name) => {
                self.cursor.advance();
                self.expect(TokenTag::Eq, ErrorContext::ClassMember)?;
                let value = self.parse_expr()?;
                Ok(self.alloc(NodeKind::ClassVarAssign { name, value }, self.span_from(token.span)))
            }
            TokenKind::Ident(name) => match self.accessor_kind(name) {
                Some(kind) => self.parse_accessor(kind),
                None => Err(self.invalid_member()),
            },
            _ => Err(self.invalid_member()),
        }
    }

    /// `property a, b` and friends.
    fn parse_accessor(&mut self, kind: AccessorKind) -> Result<NodeId, ParseError> {
        let start = self.cursor.advance().span;
        let mut names: SmallVec<[Name; 4]> = SmallVec::new();
        loop {
            names.push(self.expect_ident(ErrorContext::ClassMember)?.0);
            if !self.cursor.eat(TokenTag::Comma) {
                break;
            }
        }
        trace!(keyword = kind.keyword(), count = names.len(), "accessor");
        let names = self.arena.alloc_names(&names);
        Ok(self.alloc(NodeKind::AccessorDecl { kind, names }, self.span_from(start)))
    }

    fn accessor_kind(&self, name: Name) -> Option<AccessorKind> {
        if name == self.soft.property {
            Some(AccessorKind::Property)
        } else if name == self.soft.getter {
            Some(AccessorKind::Getter)
        } else if name == self.soft.setter {
            Some(AccessorKind::Setter)
        } else {
            None
        }
    }

    fn invalid_member(&self) -> ParseError {
        let found = self.cursor.current_tag();
        let mut error = self
            .unexpected(ErrorCode::E1010, MEMBER_START)
            .with_context(ErrorContext::ClassMember);
        error.message = format!(
            "expected `def`, `private`, `property`, `getter`, `setter` or a class variable, found {found}"
        );
        error
    }

    /// Skip to the next token that can start a member, or the closing `end`.
    fn skip_to_member(&mut self) {
        loop {
            let token = self.cursor.current();
            let at_accessor = matches!(token.kind, TokenKind::Ident(name) if self.accessor_kind(name).is_some());
            if self.cursor.is_at_end() || at_accessor || MEMBER_BOUNDARY.contains(token.tag()) {
                return;
            }
            self.cursor.advance();
        }
    }
}
