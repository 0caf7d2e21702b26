use pretty_assertions::assert_eq;
use proptest::prelude::*;
use vibe_diagnostic::ErrorCode;
use vibe_ir::Span;

use super::{assert_all_reachable, assert_spans_nested, codes, fail_fast};
use crate::{parse, parse_with_options, ParseOptions};

#[test]
fn test_missing_end_points_at_opener() {
    let output = parse("if ready\n  go()\n");
    assert_eq!(output.errors.len(), 1);
    let error = &output.errors[0];
    assert_eq!(error.code, ErrorCode::E1003);
    assert_eq!(error.related.as_ref().map(|r| r.span), Some(Span::new(0, 2)));
    assert_eq!(output.tree.to_sexp(), "(program (error))");

    let diag = error.to_diagnostic();
    assert_eq!(diag.labels.len(), 2);
}

#[test]
fn test_resumes_on_next_line() {
    let output = parse("x = )\ny = 2");
    assert_eq!(output.errors.iter().map(|e| e.code).collect::<Vec<_>>(), vec![ErrorCode::E1002]);
    assert_eq!(
        output.tree.to_sexp(),
        "(program (error) (assignment target: (identifier y) value: (integer 2)))"
    );
    assert_spans_nested(&output.tree);
}

#[test]
fn test_error_inside_body_stays_inside() {
    let output = parse("def f()\n  x = )\nend\ny");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(
        output.tree.to_sexp(),
        "(program (method f parameters: (parameters) body: [(error)]) (identifier y))"
    );
}

#[test]
fn test_failed_construct_leaves_no_orphans() {
    let output = parse("def f()\n  x = )\n");
    assert_eq!(
        output.errors.iter().map(|e| e.code).collect::<Vec<_>>(),
        vec![ErrorCode::E1002, ErrorCode::E1003]
    );
    assert_eq!(output.tree.to_sexp(), "(program (error))");
    assert_eq!(output.tree.error_count(), 1);
    assert_all_reachable(&output.tree);

    let output = parse("class A\n  def m()\n    x = )\n  1\n  property a\nend");
    assert_eq!(output.tree.error_count(), 1);
    assert_all_reachable(&output.tree);
}

#[test]
fn test_collects_every_error_in_order() {
    let output = parse("x = )\ny = ]\nz = 3");
    let starts: Vec<u32> = output.errors.iter().map(|e| e.span.start).collect();
    assert_eq!(starts, vec![4, 10]);
    assert_eq!(output.tree.statements().len(), 3);
}

#[test]
fn test_lex_errors_are_reported_with_parse_errors() {
    let output = parse("x = 1 $ 2\ny = )");
    let found: Vec<ErrorCode> = output.errors.iter().map(|e| e.code).collect();
    assert_eq!(found, vec![ErrorCode::E0002, ErrorCode::E1002]);
    assert_eq!(output.errors[0].span, Span::new(6, 7));
}

#[test]
fn test_fail_fast_keeps_first_error() {
    assert_eq!(fail_fast("x = )\ny = ]\nz = 3"), vec![ErrorCode::E1002]);
    assert_eq!(fail_fast("x = \"abc"), vec![ErrorCode::E0001]);
    assert!(fail_fast("x = 1").is_empty());
}

#[test]
fn test_depth_limit() {
    let source = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert!(codes(&source).is_empty());

    let options = ParseOptions {
        max_depth: 16,
        ..ParseOptions::default()
    };
    let output = parse_with_options(&source, options);
    assert_eq!(output.errors.iter().map(|e| e.code).collect::<Vec<_>>(), vec![ErrorCode::E2001]);
    assert_eq!(output.tree.span(output.tree.root()).to_range(), 0..source.len());
}

#[test]
fn test_deep_unary_chain_is_limited() {
    let source = format!("{}x", "-".repeat(5000));
    assert_eq!(codes(&source), vec![ErrorCode::E2001]);
}

fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "def ", "end", "if ", "else", "class ", "Foo", "x", "@a", "@@b", " = ", "(", ")", "[", "]",
        "{", "}", ",", ".", ":", "1", "2.5", "\"s\"", "\"", "\\", "+", "-", "*", " do ", "|", "\n",
        "rescue ", "begin", "case ", "when ", "require", "as:", "# vibe: 1.0\n", "#", "?", "->",
        " ", "é", "$",
    ])
}

proptest! {
    #[test]
    fn prop_never_panics_on_text(source in "\\PC{0,80}") {
        let output = parse(&source);
        prop_assert_eq!(output.tree.span(output.tree.root()).to_range(), 0..source.len());
    }

    #[test]
    fn prop_spans_nest(parts in prop::collection::vec(fragment(), 0..40)) {
        let source = parts.concat();
        let output = parse(&source);
        prop_assert_eq!(output.tree.span(output.tree.root()).to_range(), 0..source.len());
        assert_spans_nested(&output.tree);
        assert_all_reachable(&output.tree);
    }
}
