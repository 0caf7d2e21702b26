//! Operator tables.

use vibe_ir::{BinaryOp, CompoundOp, TokenTag, UnaryOp};

use crate::Parser;

/// Binding power, lowest first. Variant order is the precedence order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum BindingPower {
    Assignment,
    Or,
    And,
    Equality,
    Comparison,
    Range,
    Additive,
    Multiplicative,
    Unary,
    Postfix,
}

impl BindingPower {
    /// The next tighter level; right operands of left-associative operators
    /// are parsed at this power.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::Assignment => Self::Or,
            Self::Or => Self::And,
            Self::And => Self::Equality,
            Self::Equality => Self::Comparison,
            Self::Comparison => Self::Range,
            Self::Range => Self::Additive,
            Self::Additive => Self::Multiplicative,
            Self::Multiplicative => Self::Unary,
            Self::Unary | Self::Postfix => Self::Postfix,
        }
    }
}

/// An infix operator found in the token stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum InfixOp {
    Binary(BinaryOp),
    Assign,
    Compound(CompoundOp),
}

/// Infix operator and binding power of a token, if it is one.
pub(crate) fn infix_binding(tag: TokenTag) -> Option<(InfixOp, BindingPower)> {
    use BindingPower as P;
    let binary = |op, power| Some((InfixOp::Binary(op), power));
    match tag {
        TokenTag::Eq => Some((InfixOp::Assign, P::Assignment)),
        TokenTag::PlusEq => Some((InfixOp::Compound(CompoundOp::Add), P::Assignment)),
        TokenTag::MinusEq => Some((InfixOp::Compound(CompoundOp::Sub), P::Assignment)),
        TokenTag::PipePipe | TokenTag::Or => binary(BinaryOp::Or, P::Or),
        TokenTag::AmpAmp | TokenTag::And => binary(BinaryOp::And, P::And),
        TokenTag::EqEq => binary(BinaryOp::Eq, P::Equality),
        TokenTag::NotEq => binary(BinaryOp::NotEq, P::Equality),
        TokenTag::Lt => binary(BinaryOp::Lt, P::Comparison),
        TokenTag::Gt => binary(BinaryOp::Gt, P::Comparison),
        TokenTag::LtEq => binary(BinaryOp::LtEq, P::Comparison),
        TokenTag::GtEq => binary(BinaryOp::GtEq, P::Comparison),
        TokenTag::DotDot => binary(BinaryOp::Range, P::Range),
        TokenTag::Plus => binary(BinaryOp::Add, P::Additive),
        TokenTag::Minus => binary(BinaryOp::Sub, P::Additive),
        TokenTag::Star => binary(BinaryOp::Mul, P::Multiplicative),
        TokenTag::Slash => binary(BinaryOp::Div, P::Multiplicative),
        TokenTag::Percent => binary(BinaryOp::Rem, P::Multiplicative),
        _ => None,
    }
}

impl Parser<'_> {
    pub(crate) fn match_infix_op(&self) -> Option<(InfixOp, BindingPower)> {
        infix_binding(self.cursor.current_tag())
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.cursor.current_tag() {
            TokenTag::Minus => Some(UnaryOp::Neg),
            TokenTag::Bang => Some(UnaryOp::Not),
            _ => None,
        }
    }
}
