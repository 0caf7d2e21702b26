use super::*;
use pretty_assertions::assert_eq;

fn leaf(arena: &mut NodeArena, start: u32, end: u32) -> NodeId {
    arena.alloc(NodeKind::Integer(u64::from(start)), Span::new(start, end))
}

#[test]
fn test_alloc_and_lists() {
    let mut arena = NodeArena::new();
    let a = leaf(&mut arena, 0, 1);
    let b = leaf(&mut arena, 2, 3);
    let range = arena.alloc_list(&[a, b]);
    assert_eq!(arena.list(range), &[a, b]);
    assert_eq!(arena.len(), 2);
    assert_eq!(arena.span(b), Span::new(2, 3));
    assert_eq!(arena.alloc_list(&[]), NodeRange::EMPTY);
    assert!(arena.list(NodeRange::EMPTY).is_empty());
}

#[test]
fn test_name_pool() {
    let mut arena = NodeArena::new();
    let names = [Name::from_index(3), Name::from_index(1)];
    let range = arena.alloc_names(&names);
    assert_eq!(arena.names(range), &names);
    assert!(arena.names(NameRange::EMPTY).is_empty());
}

#[test]
fn test_if_fields_in_source_order() {
    let mut arena = NodeArena::new();
    let condition = leaf(&mut arena, 3, 4);
    let stmt = leaf(&mut arena, 5, 6);
    let body = arena.alloc_list(&[stmt]);
    let else_node = arena.alloc(NodeKind::Else { body: NodeRange::EMPTY }, Span::new(7, 11));
    let kind = NodeKind::If {
        condition,
        body,
        elsifs: NodeRange::EMPTY,
        else_branch: Some(else_node),
    };

    let names: Vec<&str> = kind.fields().iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["condition", "body", "elsifs", "else"]);
    assert_eq!(kind.fields()[0].1, Child::Node(condition));
}

#[test]
fn test_optional_fields_are_skipped() {
    let mut arena = NodeArena::new();
    let value = leaf(&mut arena, 7, 8);
    let bare = NodeKind::Return { value: None };
    let with_value = NodeKind::Return { value: Some(value) };
    assert!(bare.fields().is_empty());
    assert_eq!(with_value.fields().as_slice(), &[("value", Child::Node(value))]);
}

#[test]
fn test_kind_names() {
    assert_eq!(NodeKind::SelfRef.name(), "self");
    assert_eq!(
        NodeKind::AccessorDecl {
            kind: AccessorKind::Getter,
            names: NameRange::EMPTY
        }
        .name(),
        "getter_declaration"
    );
    assert_eq!(
        NodeKind::VersionDirective { major: 1, minor: 2 }.name(),
        "version_directive"
    );
}

#[test]
fn test_method_name_variants() {
    let name = Name::from_index(4);
    assert!(MethodName::SelfQualified(name).is_singleton());
    assert!(!MethodName::Simple(name).is_singleton());
    assert_eq!(MethodName::SelfQualified(name).name(), name);
}

#[test]
fn test_truncate_drops_nodes_after_mark() {
    let mut arena = NodeArena::new();
    let kept = arena.alloc(NodeKind::Nil, Span::new(0, 3));
    let kept_list = arena.alloc_list(&[kept]);
    let mark = arena.mark();

    let dropped = arena.alloc(NodeKind::Error, Span::new(4, 5));
    arena.alloc_list(&[dropped, dropped]);
    arena.alloc_names(&[Name::from_index(1)]);
    arena.truncate(mark);

    assert_eq!(arena.len(), 1);
    assert_eq!(arena.list(kept_list), &[kept]);
    let again = arena.alloc(NodeKind::Error, Span::new(4, 5));
    assert_eq!(again, dropped);
}
