//! S-expression rendering of syntax trees.
//!
//! `(kind attributes... field: child field: [child child])`. Empty lists and
//! absent optional fields are omitted; the program's statements are printed
//! without a field label.

use std::fmt::Write;

use crate::ast::{Child, NodeId, NodeKind, TypeRef};
use crate::SyntaxTree;

impl SyntaxTree {
    /// Render the whole tree.
    pub fn to_sexp(&self) -> String {
        self.sexp_of(self.root())
    }

    /// Render the subtree at `id`.
    pub fn sexp_of(&self, id: NodeId) -> String {
        let mut out = String::new();
        write_node(self, id, &mut out);
        out
    }
}

fn write_node(tree: &SyntaxTree, id: NodeId, out: &mut String) {
    let kind = tree.kind(id);
    out.push('(');
    out.push_str(kind.name());
    write_attributes(tree, kind, out);

    if let NodeKind::Program { body } = kind {
        for &stmt in tree.list(*body) {
            out.push(' ');
            write_node(tree, stmt, out);
        }
        out.push(')');
        return;
    }

    for (field, child) in kind.fields() {
        match child {
            Child::Node(child) => {
                let _ = write!(out, " {field}: ");
                write_node(tree, child, out);
            }
            Child::List(range) => {
                let items = tree.list(range);
                if items.is_empty() {
                    continue;
                }
                let _ = write!(out, " {field}: [");
                for (i, &item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    write_node(tree, item, out);
                }
                out.push(']');
            }
        }
    }
    out.push(')');
}

fn write_attributes(tree: &SyntaxTree, kind: &NodeKind, out: &mut String) {
    match kind {
        NodeKind::Method { private, name, .. } => {
            if *private {
                out.push_str(" private");
            }
            let prefix = if name.is_singleton() { "self." } else { "" };
            let _ = write!(out, " {prefix}{}", tree.name(name.name()));
        }
        NodeKind::SimpleParam { name, .. }
        | NodeKind::TypedParam { name, .. }
        | NodeKind::Class { name, .. }
        | NodeKind::Identifier(name)
        | NodeKind::Constant(name)
        | NodeKind::Call { method: name, .. }
        | NodeKind::MemberAccess { member: name, .. } => {
            let _ = write!(out, " {}", tree.name(*name));
        }
        NodeKind::IvarParam { name, .. } | NodeKind::InstanceVar(name) => {
            let _ = write!(out, " @{}", tree.name(*name));
        }
        NodeKind::ClassVarAssign { name, .. } | NodeKind::ClassVar(name) => {
            let _ = write!(out, " @@{}", tree.name(*name));
        }
        NodeKind::Symbol(name) => {
            let _ = write!(out, " :{}", tree.name(*name));
        }
        NodeKind::String(value) => {
            let _ = write!(out, " {:?}", tree.name(*value));
        }
        NodeKind::Integer(value) => {
            let _ = write!(out, " {value}");
        }
        NodeKind::Float(bits) => {
            let _ = write!(out, " {:?}", f64::from_bits(*bits));
        }
        NodeKind::TypeName { name, nilable } => {
            match name {
                TypeRef::Named(n) => {
                    let _ = write!(out, " {}", tree.name(*n));
                }
                TypeRef::Nil => out.push_str(" nil"),
            }
            if *nilable {
                out.push('?');
            }
        }
        NodeKind::AccessorDecl { names, .. } | NodeKind::UsesDirective { names } => {
            for name in tree.names(*names) {
                let _ = write!(out, " {name}");
            }
        }
        NodeKind::Block { params, .. } if !params.is_empty() => {
            let _ = write!(out, " |{}|", tree.names(*params).join(" "));
        }
        NodeKind::Rescue {
            filter: Some(name), ..
        } => {
            let _ = write!(out, " {}", tree.name(*name));
        }
        NodeKind::VersionDirective { major, minor } => {
            let _ = write!(out, " {major}.{minor}");
        }
        NodeKind::Binary { op, .. } => {
            let _ = write!(out, " {op}");
        }
        NodeKind::Unary { op, .. } => {
            let _ = write!(out, " {op}");
        }
        NodeKind::CompoundAssignment { op, .. } => {
            let _ = write!(out, " {op}");
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::ast::{BinaryOp, NodeArena, NodeKind, NodeRange};
    use crate::{Span, StringInterner, SyntaxTree};

    #[test]
    fn test_binary_rendering() {
        let mut interner = StringInterner::new();
        let mut arena = NodeArena::new();
        let x = interner.intern("x");
        let left = arena.alloc(NodeKind::Identifier(x), Span::new(0, 1));
        let right = arena.alloc(NodeKind::Float(1.5f64.to_bits()), Span::new(4, 7));
        let binary = arena.alloc(
            NodeKind::Binary {
                op: BinaryOp::Add,
                left,
                right,
            },
            Span::new(0, 7),
        );
        let body = arena.alloc_list(&[binary]);
        let root = arena.alloc(NodeKind::Program { body }, Span::new(0, 7));
        let tree = SyntaxTree::new(arena, interner, root);

        assert_eq!(
            tree.to_sexp(),
            "(program (binary + left: (identifier x) right: (float 1.5)))"
        );
    }

    #[test]
    fn test_empty_lists_omitted() {
        let interner = StringInterner::new();
        let mut arena = NodeArena::new();
        let array = arena.alloc(
            NodeKind::Array {
                elements: NodeRange::EMPTY,
            },
            Span::new(0, 2),
        );
        let body = arena.alloc_list(&[array]);
        let root = arena.alloc(NodeKind::Program { body }, Span::new(0, 2));
        let tree = SyntaxTree::new(arena, interner, root);

        assert_eq!(tree.to_sexp(), "(program (array))");
    }
}
