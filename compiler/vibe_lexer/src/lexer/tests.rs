use pretty_assertions::assert_eq;
use proptest::prelude::*;
use vibe_ir::{Span, TokenKind, TokenTag};

use crate::{lex, LexErrorKind, Lexer};

/// Render every token with its payload, `Eof` excluded.
fn render(source: &str) -> Vec<String> {
    let out = lex(source);
    out.tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| match t.kind {
            TokenKind::Ident(n) => format!("ident({})", out.interner.lookup(n)),
            TokenKind::Constant(n) => format!("const({})", out.interner.lookup(n)),
            TokenKind::Symbol(n) => format!("sym({})", out.interner.lookup(n)),
            TokenKind::InstanceVar(n) => format!("ivar({})", out.interner.lookup(n)),
            TokenKind::ClassVar(n) => format!("cvar({})", out.interner.lookup(n)),
            TokenKind::StringContent(n) => format!("content({})", out.interner.lookup(n)),
            TokenKind::StringEscape(c) => format!("escape({c:?})"),
            TokenKind::Int(v) => format!("int({v})"),
            TokenKind::Float(bits) => format!("float({})", f64::from_bits(bits)),
            TokenKind::VersionDirective { major, minor } => format!("version({major}.{minor})"),
            other => other.tag().spelling().map_or_else(|| format!("{:?}", other.tag()), str::to_owned),
        })
        .collect()
}

fn tags(source: &str) -> Vec<TokenTag> {
    lex(source).tokens.iter().map(|t| t.tag()).collect()
}

#[test]
fn test_identifiers_and_keywords() {
    assert_eq!(
        render("def empty? save! ifoo end"),
        vec!["def", "ident(empty?)", "ident(save!)", "ident(ifoo)", "end"]
    );
    assert_eq!(render("Foo_1 nil?"), vec!["const(Foo_1)", "ident(nil?)"]);
}

#[test]
fn test_soft_keywords_are_identifiers() {
    assert_eq!(
        render("require as property getter setter"),
        vec![
            "ident(require)",
            "ident(as)",
            "ident(property)",
            "ident(getter)",
            "ident(setter)"
        ]
    );
}

#[test]
fn test_marker_not_absorbed_before_assignment() {
    assert_eq!(render("a!=b"), vec!["ident(a)", "!=", "ident(b)"]);
    assert_eq!(render("ok?==true"), vec!["ident(ok?)", "==", "true"]);
}

#[test]
fn test_numbers() {
    assert_eq!(render("1_000 2.5"), vec!["int(1000)", "float(2.5)"]);
    assert_eq!(render("1..5"), vec!["int(1)", "..", "int(5)"]);
    assert_eq!(render("3.foo"), vec!["int(3)", ".", "ident(foo)"]);
}

#[test]
fn test_integer_overflow() {
    let out = lex("99999999999999999999");
    assert_eq!(out.tokens[0].kind, TokenKind::Int(0));
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, LexErrorKind::IntegerOverflow);
    assert_eq!(out.errors[0].span, Span::new(0, 20));
}

#[test]
fn test_operators() {
    assert_eq!(
        render("+ += - -= -> * / % = == != < <= > >= && || ! .. . | ?"),
        vec![
            "+", "+=", "-", "-=", "->", "*", "/", "%", "=", "==", "!=", "<", "<=", ">", ">=",
            "&&", "||", "!", "..", ".", "|", "?"
        ]
    );
}

#[test]
fn test_symbols_and_colons() {
    assert_eq!(render(":ok"), vec!["sym(ok)"]);
    assert_eq!(render("when :a"), vec!["when", "sym(a)"]);
    assert_eq!(render("y:Integer"), vec!["ident(y)", ":", "const(Integer)"]);
    assert_eq!(
        render("f(as:\"x\")"),
        vec!["ident(f)", "(", "ident(as)", ":", "StringOpen", "content(x)", "StringClose", ")"]
    );
    assert_eq!(
        render("{key: :val}"),
        vec!["{", "ident(key)", ":", "sym(val)", "}"]
    );
}

#[test]
fn test_variables() {
    assert_eq!(render("@name @@count"), vec!["ivar(name)", "cvar(count)"]);
    let out = lex("@ x");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, LexErrorKind::UnrecognizedCharacter('@'));
    assert_eq!(render("@ x"), vec!["ident(x)"]);
}

#[test]
fn test_string_parts() {
    assert_eq!(
        render(r#""a\tb\"""#),
        vec![
            "StringOpen",
            "content(a)",
            "escape('\\t')",
            "content(b)",
            "escape('\"')",
            "StringClose"
        ]
    );
    assert_eq!(render("\"\""), vec!["StringOpen", "StringClose"]);
}

#[test]
fn test_string_keeps_raw_newlines_and_comment_chars() {
    assert_eq!(
        render("\"line\n# not a comment\""),
        vec!["StringOpen", "content(line\n# not a comment)", "StringClose"]
    );
    assert!(lex("\"line\n# not a comment\"").comments.is_empty());
}

#[test]
fn test_unterminated_string() {
    let source = "x = \"abc";
    let out = lex(source);
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, LexErrorKind::UnterminatedString);
    assert_eq!(out.errors[0].span, Span::new(4, 8));

    let close = out.tokens.iter().find(|t| t.kind == TokenKind::StringClose);
    assert_eq!(close.map(|t| t.span), Some(Span::new(8, 8)));
    assert_eq!(out.tokens.iter().last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn test_invalid_escape() {
    let out = lex(r#""a\qb""#);
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, LexErrorKind::InvalidEscape('q'));
    assert_eq!(out.errors[0].span, Span::new(2, 4));
    assert_eq!(
        render(r#""a\qb""#),
        vec!["StringOpen", "content(a)", "content(q)", "content(b)", "StringClose"]
    );
}

#[test]
fn test_unrecognized_character_is_skipped_whole() {
    let out = lex("a ¤ b $");
    assert_eq!(out.errors.len(), 2);
    assert_eq!(out.errors[0].kind, LexErrorKind::UnrecognizedCharacter('¤'));
    assert_eq!(out.errors[0].span, Span::new(2, 4));
    assert_eq!(out.errors[1].kind, LexErrorKind::UnrecognizedCharacter('$'));
    assert_eq!(render("a ¤ b $"), vec!["ident(a)", "ident(b)"]);
}

#[test]
fn test_comments_are_trivia() {
    let out = lex("x # trailing\n# own line\ny");
    assert_eq!(tags("x # trailing\n# own line\ny"), vec![
        TokenTag::Ident,
        TokenTag::Ident,
        TokenTag::Eof
    ]);
    let texts: Vec<&str> = out.comments.iter().map(|c| c.text).collect();
    assert_eq!(texts, vec!["# trailing", "# own line"]);
    assert_eq!(out.comments[0].span, Span::new(2, 12));
}

#[test]
fn test_directives_are_promoted() {
    let source = "# vibe: 1.2\n# uses: json, http\n# just a note\n";
    assert_eq!(render(source), vec!["version(1.2)", "UsesDirective"]);
    let out = lex(source);
    assert_eq!(out.comments.len(), 1);
    assert_eq!(out.tokens[1].span, Span::new(12, 30));
}

#[test]
fn test_eof_span_and_repeat() {
    let mut lexer = Lexer::new("x  ");
    assert_eq!(lexer.next_token().span, Span::new(0, 1));
    let eof = lexer.next_token();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.span, Span::new(3, 3));
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn test_iterator_stops_after_eof() {
    let lexer = Lexer::new("a b");
    assert_eq!(lexer.count(), 3);
}

proptest! {
    #[test]
    fn prop_lexing_never_panics_and_spans_are_monotone(source in "\\PC{0,64}") {
        let out = lex(&source);
        let len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let mut last_end = 0;
        for token in out.tokens.iter() {
            prop_assert!(token.span.start >= last_end);
            prop_assert!(token.span.end <= len);
            prop_assert!(source.is_char_boundary(token.span.start as usize));
            prop_assert!(source.is_char_boundary(token.span.end as usize));
            last_end = token.span.end;
        }
        prop_assert_eq!(out.tokens.iter().last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn prop_lexing_ruby_like_text(source in "[a-z@:\"\\\\#. =()\n0-9]{0,48}") {
        let out = lex(&source);
        for err in &out.errors {
            prop_assert!(err.span.start as usize <= source.len());
        }
    }
}
