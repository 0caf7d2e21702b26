//! Parser tests over complete programs, checked through the S-expression
//! rendering of the tree.

mod declarations;
mod expressions;
mod recovery;

use vibe_diagnostic::ErrorCode;
use vibe_ir::{NodeId, SyntaxTree};

use crate::{parse, parse_with_options, ParseOptions, RecoveryMode};

/// Render `source`, failing the test on any diagnostic.
fn sexp(source: &str) -> String {
    let output = parse(source);
    assert!(
        output.errors.is_empty(),
        "unexpected errors for {source:?}: {:#?}",
        output.errors
    );
    assert_spans_nested(&output.tree);
    assert_all_reachable(&output.tree);
    output.tree.to_sexp()
}

fn codes(source: &str) -> Vec<ErrorCode> {
    parse(source).errors.iter().map(|e| e.code).collect()
}

fn fail_fast(source: &str) -> Vec<ErrorCode> {
    let options = ParseOptions {
        recovery: RecoveryMode::FailFast,
        ..ParseOptions::default()
    };
    parse_with_options(source, options)
        .errors
        .iter()
        .map(|e| e.code)
        .collect()
}

/// Every child lies inside its parent and siblings do not overlap.
fn assert_spans_nested(tree: &SyntaxTree) {
    fn check(tree: &SyntaxTree, id: NodeId) {
        let parent = tree.span(id);
        let children = tree.children(id);
        for &child in &children {
            let span = tree.span(child);
            assert!(
                parent.contains_span(span),
                "{} {parent} does not contain {} {span}",
                tree.kind(id).name(),
                tree.kind(child).name()
            );
            check(tree, child);
        }
        for pair in children.windows(2) {
            let (a, b) = (tree.span(pair[0]), tree.span(pair[1]));
            assert!(a.end <= b.start, "siblings out of order: {a} then {b}");
        }
    }
    check(tree, tree.root());
}

/// Every node in the arena hangs off the root exactly once.
fn assert_all_reachable(tree: &SyntaxTree) {
    let mut seen = tree.descendants();
    let reachable = seen.len();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), reachable, "a node has two parents");
    assert_eq!(reachable, tree.arena().len(), "arena holds unreachable nodes");
}

#[test]
fn test_empty_program() {
    assert_eq!(sexp(""), "(program)");
    assert_eq!(sexp("  # just a comment\n"), "(program)");
}

#[test]
fn test_root_covers_input() {
    let source = "# header\nx = 1\n\n";
    let output = parse(source);
    let root = output.tree.span(output.tree.root());
    assert_eq!(root.to_range(), 0..source.len());
}
