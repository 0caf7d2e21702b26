//! Statements: control flow, jumps, imports, directives, and expression
//! statements.

use smallvec::SmallVec;
use tracing::trace;
use vibe_diagnostic::ErrorCode;
use vibe_ir::{Name, NodeId, NodeKind, Token, TokenKind, TokenTag};
use vibe_lexer::directive;

use crate::disambiguate::{self, Resolution};
use crate::error::{ErrorContext, ParseError};
use crate::grammar::END;
use crate::recovery::{TokenSet, BODY_END, EXPR_START};
use crate::Parser;

const IF_BODY_END: TokenSet = END.with(TokenTag::Elsif).with(TokenTag::Else);
const ELSE_BODY_END: TokenSet = END.with(TokenTag::Else);
const WHEN_BODY_END: TokenSet = ELSE_BODY_END.with(TokenTag::When);
const BEGIN_BODY_END: TokenSet = END.with(TokenTag::Rescue).with(TokenTag::Ensure);

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Result<NodeId, ParseError> {
        self.nested(Self::parse_statement_inner)
    }

    fn parse_statement_inner(&mut self) -> Result<NodeId, ParseError> {
        let tag = self.cursor.current_tag();
        trace!(?tag, "statement");
        match tag {
            TokenTag::Def | TokenTag::Private => self.parse_method(),
            TokenTag::Export => self.parse_export(),
            TokenTag::Class => self.parse_class(),
            TokenTag::If => self.parse_if(),
            TokenTag::Unless => self.parse_unless(),
            TokenTag::Case => self.parse_case(),
            TokenTag::While | TokenTag::Until => self.parse_loop(tag),
            TokenTag::For => self.parse_for(),
            TokenTag::Begin => self.parse_begin(),
            TokenTag::Return => self.parse_return(),
            TokenTag::Break => Ok(self.leaf(NodeKind::Break)),
            TokenTag::Next => Ok(self.leaf(NodeKind::Next)),
            TokenTag::Raise => self.parse_raise(),
            TokenTag::Yield => self.parse_yield(),
            TokenTag::Ident
                if disambiguate::require_or_assignment(
                    &mut self.cursor,
                    self.soft.require,
                    self.soft.alias_key,
                ) == Resolution::Require =>
            {
                self.parse_require()
            }
            _ if BODY_END.contains(tag) => {
                let mut error = self.unexpected(ErrorCode::E1001, TokenSet::new());
                error.message = format!("unexpected {tag} without a matching opener");
                Err(error)
            }
            _ => self.parse_expr(),
        }
    }

    /// Consume one token and allocate a node covering it.
    fn leaf(&mut self, kind: NodeKind) -> NodeId {
        let span = self.cursor.advance().span;
        self.alloc(kind, span)
    }

    // ─── Conditionals ───────────────────────────────────────────────────

    /// `if cond body (elsif cond body)* [else body] end`
    fn parse_if(&mut self) -> Result<NodeId, ParseError> {
        let open = self.cursor.advance().span;
        let condition = self.parse_expr()?;
        let body = self.parse_body(IF_BODY_END);

        let mut elsifs: SmallVec<[NodeId; 4]> = SmallVec::new();
        while self.cursor.check(TokenTag::Elsif) {
            let start = self.cursor.advance().span;
            let condition = self.parse_expr()?;
            let body = self.parse_body(IF_BODY_END);
            elsifs.push(self.alloc(NodeKind::Elsif { condition, body }, self.span_from(start)));
        }
        let elsifs = self.alloc_list(&elsifs);
        let else_branch = self.parse_else()?;

        self.expect_end(open, "if", ErrorContext::If)?;
        Ok(self.alloc(
            NodeKind::If {
                condition,
                body,
                elsifs,
                else_branch,
            },
            self.span_from(open),
        ))
    }

    /// `unless cond body [else body] end`
    fn parse_unless(&mut self) -> Result<NodeId, ParseError> {
        let open = self.cursor.advance().span;
        let condition = self.parse_expr()?;
        let body = self.parse_body(ELSE_BODY_END);
        let else_branch = self.parse_else()?;
        self.expect_end(open, "unless", ErrorContext::Unless)?;
        Ok(self.alloc(
            NodeKind::Unless {
                condition,
                body,
                else_branch,
            },
            self.span_from(open),
        ))
    }

    /// Optional `else body`, up to but not including `end`.
    fn parse_else(&mut self) -> Result<Option<NodeId>, ParseError> {
        if !self.cursor.check(TokenTag::Else) {
            return Ok(None);
        }
        let start = self.cursor.advance().span;
        let body = self.parse_body(END);
        Ok(Some(self.alloc(NodeKind::Else { body }, self.span_from(start))))
    }

    /// `case subject (when a, b body)+ [else body] end`
    fn parse_case(&mut self) -> Result<NodeId, ParseError> {
        let open = self.cursor.advance().span;
        let subject = self.parse_expr()?;

        let mut whens: SmallVec<[NodeId; 4]> = SmallVec::new();
        while self.cursor.check(TokenTag::When) {
            let start = self.cursor.advance().span;
            let mut patterns: SmallVec<[NodeId; 4]> = SmallVec::new();
            loop {
                patterns.push(self.parse_expr()?);
                if !self.cursor.eat(TokenTag::Comma) {
                    break;
                }
            }
            let patterns = self.alloc_list(&patterns);
            let body = self.parse_body(WHEN_BODY_END);
            whens.push(self.alloc(NodeKind::When { patterns, body }, self.span_from(start)));
        }
        if whens.is_empty() {
            let error = self
                .unexpected(ErrorCode::E1009, TokenSet::single(TokenTag::When))
                .with_related(open, "`case` opened here")
                .with_context(ErrorContext::Case);
            self.report(ParseError {
                message: "`case` needs at least one `when` clause".to_string(),
                ..error
            });
        }
        let whens = self.alloc_list(&whens);
        let else_branch = self.parse_else()?;

        self.expect_end(open, "case", ErrorContext::Case)?;
        Ok(self.alloc(
            NodeKind::Case {
                subject,
                whens,
                else_branch,
            },
            self.span_from(open),
        ))
    }

    // ─── Loops ──────────────────────────────────────────────────────────

    /// `while cond body end` and `until cond body end`.
    fn parse_loop(&mut self, tag: TokenTag) -> Result<NodeId, ParseError> {
        let open = self.cursor.advance().span;
        let condition = self.parse_expr()?;
        let body = self.parse_body(END);
        let kind = if tag == TokenTag::While {
            self.expect_end(open, "while", ErrorContext::While)?;
            NodeKind::While { condition, body }
        } else {
            self.expect_end(open, "until", ErrorContext::Until)?;
            NodeKind::Until { condition, body }
        };
        Ok(self.alloc(kind, self.span_from(open)))
    }

    /// `for name in iterable body end`
    fn parse_for(&mut self) -> Result<NodeId, ParseError> {
        let open = self.cursor.advance().span;
        let (name, name_span) = self.expect_ident(ErrorContext::For)?;
        let variable = self.alloc(NodeKind::Identifier(name), name_span);
        self.expect(TokenTag::In, ErrorContext::For)?;
        let iterable = self.parse_expr()?;
        let body = self.parse_body(END);
        self.expect_end(open, "for", ErrorContext::For)?;
        Ok(self.alloc(
            NodeKind::For {
                variable,
                iterable,
                body,
            },
            self.span_from(open),
        ))
    }

    // ─── Exceptions ─────────────────────────────────────────────────────

    /// `begin body (rescue [(Constant)] body)* [ensure body] end`
    fn parse_begin(&mut self) -> Result<NodeId, ParseError> {
        let open = self.cursor.advance().span;
        let body = self.parse_body(BEGIN_BODY_END);

        let mut rescues: SmallVec<[NodeId; 2]> = SmallVec::new();
        while self.cursor.check(TokenTag::Rescue) {
            rescues.push(self.parse_rescue()?);
        }
        let rescues = self.alloc_list(&rescues);

        let ensure = if self.cursor.check(TokenTag::Ensure) {
            let start = self.cursor.advance().span;
            let body = self.parse_body(END);
            Some(self.alloc(NodeKind::Ensure { body }, self.span_from(start)))
        } else {
            None
        };

        self.expect_end(open, "begin", ErrorContext::Begin)?;
        Ok(self.alloc(
            NodeKind::Begin {
                body,
                rescues,
                ensure,
            },
            self.span_from(open),
        ))
    }

    fn parse_rescue(&mut self) -> Result<NodeId, ParseError> {
        let start = self.cursor.advance().span;
        let filter = match disambiguate::rescue_filter(&mut self.cursor) {
            Resolution::RescueFilter => {
                self.cursor.advance();
                let name = self.expect_constant(ErrorContext::Rescue)?;
                self.expect(TokenTag::RParen, ErrorContext::Rescue)?;
                Some(name)
            }
            _ => None,
        };
        let body = self.parse_body(BEGIN_BODY_END);
        Ok(self.alloc(NodeKind::Rescue { filter, body }, self.span_from(start)))
    }

    // ─── Jumps ──────────────────────────────────────────────────────────

    /// `return [expr]`; the operand is taken whenever an expression can
    /// start at the next token.
    fn parse_return(&mut self) -> Result<NodeId, ParseError> {
        let start = self.cursor.advance().span;
        let value = if EXPR_START.contains(self.cursor.current_tag()) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(self.alloc(NodeKind::Return { value }, self.span_from(start)))
    }

    /// `raise(expr)`
    fn parse_raise(&mut self) -> Result<NodeId, ParseError> {
        let start = self.cursor.advance().span;
        self.expect(TokenTag::LParen, ErrorContext::Raise)?;
        let value = self.parse_expr()?;
        self.expect(TokenTag::RParen, ErrorContext::Raise)?;
        Ok(self.alloc(NodeKind::Raise { value }, self.span_from(start)))
    }

    /// `yield` or `yield(args)`.
    fn parse_yield(&mut self) -> Result<NodeId, ParseError> {
        let start = self.cursor.advance().span;
        let args = if self.cursor.check(TokenTag::LParen) {
            Some(self.parse_arguments()?)
        } else {
            None
        };
        Ok(self.alloc(NodeKind::Yield { args }, self.span_from(start)))
    }

    // ─── Imports and directives ─────────────────────────────────────────

    /// `name = require("path"[, as: "alias"])`; the disambiguator has
    /// already matched the whole shape.
    fn parse_require(&mut self) -> Result<NodeId, ParseError> {
        let (name, name_span) = self.expect_ident(ErrorContext::Require)?;
        let variable = self.alloc(NodeKind::Identifier(name), name_span);
        self.expect(TokenTag::Eq, ErrorContext::Require)?;
        self.expect_ident(ErrorContext::Require)?;
        self.expect(TokenTag::LParen, ErrorContext::Require)?;
        let path = self.parse_string()?;
        let alias = if self.cursor.eat(TokenTag::Comma) {
            self.expect_ident(ErrorContext::Require)?;
            self.expect(TokenTag::Colon, ErrorContext::Require)?;
            Some(self.parse_string()?)
        } else {
            None
        };
        self.expect(TokenTag::RParen, ErrorContext::Require)?;
        Ok(self.alloc(
            NodeKind::Require {
                variable,
                path,
                alias,
            },
            self.span_from(name_span),
        ))
    }

    /// A directive comment claimed at a statement start.
    pub(crate) fn parse_directive(&mut self, token: Token) -> NodeId {
        let kind = match token.kind {
            TokenKind::VersionDirective { major, minor } => NodeKind::VersionDirective { major, minor },
            _ => {
                let text = self.cursor.text(token.span);
                let names: SmallVec<[Name; 4]> = directive::uses_names(text)
                    .into_iter()
                    .map(|name| self.cursor.interner_mut().intern(name))
                    .collect();
                NodeKind::UsesDirective {
                    names: self.arena.alloc_names(&names),
                }
            }
        };
        self.alloc(kind, token.span)
    }
}

