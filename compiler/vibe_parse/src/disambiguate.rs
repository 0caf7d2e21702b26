//! Disambiguation rules.
//!
//! Four places in the grammar could be read two ways. Each is settled here by
//! a lookahead predicate that runs before anything is consumed, so the parser
//! never backtracks:
//!
//! 1. A bare identifier inside a parameter list is a parameter.
//! 2. An `@name` inside a parameter list is an instance-variable parameter.
//! 3. `name = require("path"[, as: "alias"])`, matched in full, is an import;
//!    any other shape is an ordinary assignment.
//! 4. `rescue (Constant)` is a rescue filter, never a parenthesized body
//!    expression.
//!
//! Rules 1 and 2 fall out of grammatical position: the parameter-list parser
//! is the only caller of [`parameter`].

use tracing::trace;
use vibe_ir::{Name, TokenKind, TokenTag};

use crate::cursor::Cursor;
use crate::grammar::expr::infix_binding;

/// Outcome of one disambiguation decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    SimpleParameter,
    TypedParameter,
    IvarParameter,
    Require,
    Assignment,
    RescueFilter,
    RescueBody,
}

/// Rules 1 and 2: classify the parameter starting at the current token.
/// `None` when no parameter starts here.
pub(crate) fn parameter(cursor: &mut Cursor<'_>) -> Option<Resolution> {
    let resolution = match cursor.current_tag() {
        TokenTag::Ident if matches!(cursor.peek_tag(1), TokenTag::Colon | TokenTag::Symbol) => {
            Resolution::TypedParameter
        }
        TokenTag::Ident => Resolution::SimpleParameter,
        TokenTag::InstanceVar => Resolution::IvarParameter,
        _ => return None,
    };
    trace!(rule = "parameter-position", ?resolution);
    Some(resolution)
}

/// Rule 3: does an import start at the current token?
pub(crate) fn require_or_assignment(
    cursor: &mut Cursor<'_>,
    require: Name,
    alias_key: Name,
) -> Resolution {
    let resolution = if matches_require(cursor, require, alias_key) {
        Resolution::Require
    } else {
        Resolution::Assignment
    };
    trace!(rule = "require-vs-assignment", ?resolution);
    resolution
}

/// `Ident = require ( string [, as : string] )` with no continuation after
/// the closing parenthesis on the same line.
fn matches_require(cursor: &mut Cursor<'_>, require: Name, alias_key: Name) -> bool {
    let is_name = |kind: TokenKind, expected: Name| kind == TokenKind::Ident(expected);

    if cursor.peek_tag(0) != TokenTag::Ident
        || cursor.peek_tag(1) != TokenTag::Eq
        || !is_name(cursor.peek_nth(2).kind, require)
        || cursor.peek_tag(3) != TokenTag::LParen
    {
        return false;
    }
    let Some(mut at) = string_end(cursor, 4) else {
        return false;
    };
    if cursor.peek_tag(at) == TokenTag::Comma {
        if !is_name(cursor.peek_nth(at + 1).kind, alias_key)
            || cursor.peek_tag(at + 2) != TokenTag::Colon
        {
            return false;
        }
        let Some(end) = string_end(cursor, at + 3) else {
            return false;
        };
        at = end;
    }
    if cursor.peek_tag(at) != TokenTag::RParen {
        return false;
    }
    let close = cursor.peek_nth(at).span;
    let next = cursor.peek_nth(at + 1);
    cursor.line_break_between(close, next.span) || !continues_expression(next.tag())
}

/// Index just past a complete string literal starting at `at`.
fn string_end(cursor: &mut Cursor<'_>, mut at: usize) -> Option<usize> {
    if cursor.peek_tag(at) != TokenTag::StringOpen {
        return None;
    }
    at += 1;
    loop {
        match cursor.peek_tag(at) {
            TokenTag::StringContent | TokenTag::StringEscape => at += 1,
            TokenTag::StringClose => return Some(at + 1),
            _ => return None,
        }
    }
}

/// Tokens that would make `require(...)` the left side of a larger
/// expression.
fn continues_expression(tag: TokenTag) -> bool {
    matches!(tag, TokenTag::Dot | TokenTag::LBracket | TokenTag::Do)
        || infix_binding(tag).is_some()
}

/// Rule 4: called with the cursor just past `rescue`.
pub(crate) fn rescue_filter(cursor: &mut Cursor<'_>) -> Resolution {
    let resolution = if cursor.peek_tag(0) == TokenTag::LParen
        && cursor.peek_tag(1) == TokenTag::Constant
        && cursor.peek_tag(2) == TokenTag::RParen
    {
        Resolution::RescueFilter
    } else {
        Resolution::RescueBody
    };
    trace!(rule = "rescue-filter", ?resolution);
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn require_resolution(source: &str) -> Resolution {
        let mut cursor = Cursor::new(source);
        let require = cursor.interner_mut().intern("require");
        let alias_key = cursor.interner_mut().intern("as");
        require_or_assignment(&mut cursor, require, alias_key)
    }

    #[test]
    fn test_require_shapes() {
        assert_eq!(require_resolution(r#"x = require("./foo")"#), Resolution::Require);
        assert_eq!(
            require_resolution(r#"x = require("./foo", as: "Bar")"#),
            Resolution::Require
        );
        assert_eq!(
            require_resolution(r#"x = require("a\tb")"#),
            Resolution::Require
        );
    }

    #[test]
    fn test_require_before_next_line() {
        for source in [
            "x = require(\"a\")\n[1, 2].each()",
            "x = require(\"a\")\n-1",
            "x = require(\"a\", as: \"b\")\n[y]",
        ] {
            assert_eq!(require_resolution(source), Resolution::Require, "{source}");
        }
    }

    #[test]
    fn test_require_fallbacks() {
        for source in [
            "x = require(y)",
            r#"x = require("a").b"#,
            r#"x = require("a") + 1"#,
            r#"x = require("a")[0]"#,
            r#"x = require("a") do end"#,
            r#"x = require("a", "b")"#,
            r#"x = require("a", alias: "b")"#,
            r#"x += require("a")"#,
            r#"x = required("a")"#,
        ] {
            assert_eq!(require_resolution(source), Resolution::Assignment, "{source}");
        }
    }

    #[test]
    fn test_rescue_filter() {
        let mut cursor = Cursor::new("(TypeError) b()");
        assert_eq!(rescue_filter(&mut cursor), Resolution::RescueFilter);
        let mut cursor = Cursor::new("(x) b()");
        assert_eq!(rescue_filter(&mut cursor), Resolution::RescueBody);
        let mut cursor = Cursor::new("b()");
        assert_eq!(rescue_filter(&mut cursor), Resolution::RescueBody);
        // Nothing was consumed.
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_parameter_positions() {
        let mut cursor = Cursor::new("y: Integer");
        assert_eq!(parameter(&mut cursor), Some(Resolution::TypedParameter));
        let mut cursor = Cursor::new("y :Integer");
        assert_eq!(parameter(&mut cursor), Some(Resolution::TypedParameter));
        let mut cursor = Cursor::new("x = 1");
        assert_eq!(parameter(&mut cursor), Some(Resolution::SimpleParameter));
        let mut cursor = Cursor::new("@z");
        assert_eq!(parameter(&mut cursor), Some(Resolution::IvarParameter));
        let mut cursor = Cursor::new("1");
        assert_eq!(parameter(&mut cursor), None);
    }
}
