//! Expression parsing.
//!
//! A Pratt loop over [`BindingPower`]: a unary-or-postfix operand, then infix
//! operators for as long as their power is at least the caller's minimum.
//! Left-associative operators parse their right operand one level tighter;
//! assignment parses it at its own level, which makes it right-associative.
//!
//! # Module Structure
//!
//! - `mod.rs`: entry point (`parse_expr`) and the Pratt loop
//! - `operators.rs`: binding powers and operator matching
//! - `postfix.rs`: calls, member access, subscripts, arguments, blocks
//! - `primary.rs`: literals, names, arrays, hashes, parentheses

mod operators;
mod postfix;
mod primary;

pub(crate) use operators::infix_binding;

use vibe_ir::{NodeId, NodeKind};

use crate::error::ParseError;
use crate::Parser;
use operators::{BindingPower, InfixOp};

impl Parser<'_> {
    /// Parse a full expression, assignment included.
    pub(crate) fn parse_expr(&mut self) -> Result<NodeId, ParseError> {
        self.parse_expr_bp(BindingPower::Assignment)
    }

    fn parse_expr_bp(&mut self, min: BindingPower) -> Result<NodeId, ParseError> {
        self.nested(|p| p.parse_expr_bp_inner(min))
    }

    fn parse_expr_bp_inner(&mut self, min: BindingPower) -> Result<NodeId, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some((op, power)) = self.match_infix_op() {
            if power < min {
                break;
            }
            self.cursor.advance();
            let start = self.node_span(left);
            left = match op {
                InfixOp::Binary(op) => {
                    let right = self.parse_expr_bp(power.next())?;
                    self.alloc(NodeKind::Binary { op, left, right }, self.span_from(start))
                }
                InfixOp::Assign => {
                    let value = self.parse_expr_bp(power)?;
                    self.alloc(
                        NodeKind::Assignment {
                            target: left,
                            value,
                        },
                        self.span_from(start),
                    )
                }
                InfixOp::Compound(op) => {
                    let value = self.parse_expr_bp(power)?;
                    self.alloc(
                        NodeKind::CompoundAssignment {
                            op,
                            target: left,
                            value,
                        },
                        self.span_from(start),
                    )
                }
            };
        }

        Ok(left)
    }

    /// `-x`, `!x`, or a postfix chain. `-a.b(c)` is `-(a.b(c))`.
    fn parse_unary(&mut self) -> Result<NodeId, ParseError> {
        if let Some(op) = self.match_unary_op() {
            let start = self.cursor.advance().span;
            let operand = self.nested(Self::parse_unary)?;
            return Ok(self.alloc(NodeKind::Unary { op, operand }, self.span_from(start)));
        }
        let primary = self.parse_primary()?;
        self.parse_postfix(primary)
    }
}
