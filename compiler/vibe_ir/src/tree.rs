//! The owned result of one parse.

use crate::ast::{Child, Node, NodeArena, NodeId, NodeKind, NodeRange, NameRange};
use crate::{Name, Span, StringInterner};

/// Immutable syntax tree: root, node arena and the names it refers to.
///
/// Dropping the tree releases every node at once.
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    arena: NodeArena,
    interner: StringInterner,
    root: NodeId,
}

impl SyntaxTree {
    /// Assemble a tree. `root` must be a `Program` node in `arena`.
    pub fn new(arena: NodeArena, interner: StringInterner, root: NodeId) -> Self {
        debug_assert!(matches!(arena.kind(root), NodeKind::Program { .. }));
        SyntaxTree {
            arena,
            interner,
            root,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    #[inline]
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        self.arena.get(id)
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        self.arena.kind(id)
    }

    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.arena.span(id)
    }

    #[inline]
    pub fn list(&self, range: NodeRange) -> &[NodeId] {
        self.arena.list(range)
    }

    /// Resolve a name to its text.
    #[inline]
    pub fn name(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    /// Resolve every name in a range.
    pub fn names(&self, range: NameRange) -> Vec<&str> {
        self.arena
            .names(range)
            .iter()
            .map(|&n| self.interner.lookup(n))
            .collect()
    }

    /// Top-level statements and declarations.
    pub fn statements(&self) -> &[NodeId] {
        match self.kind(self.root) {
            NodeKind::Program { body } => self.list(*body),
            _ => &[],
        }
    }

    /// Direct children of a node, flattened in source order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        for (_, child) in self.kind(id).fields() {
            match child {
                Child::Node(child) => out.push(child),
                Child::List(range) => out.extend_from_slice(self.list(range)),
            }
        }
        out
    }

    /// Pre-order walk from the root.
    pub fn descendants(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.arena.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            out.push(id);
            let children = self.children(id);
            stack.extend(children.into_iter().rev());
        }
        out
    }

    /// Number of `Error` nodes reachable from the root.
    pub fn error_count(&self) -> usize {
        self.descendants()
            .into_iter()
            .filter(|&id| matches!(self.kind(id), NodeKind::Error))
            .count()
    }
}
