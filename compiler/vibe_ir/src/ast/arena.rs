//! Index-addressed node pool for one parse.

use std::fmt;

use crate::{Name, Span};

use super::{Node, NodeKind};

/// Index of a node in its [`NodeArena`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Contiguous run of child ids in the arena's list pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct NodeRange {
    pub start: u32,
    pub len: u32,
}

impl NodeRange {
    pub const EMPTY: NodeRange = NodeRange { start: 0, len: 0 };

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

/// Contiguous run of names in the arena's name pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct NameRange {
    pub start: u32,
    pub len: u32,
}

impl NameRange {
    pub const EMPTY: NameRange = NameRange { start: 0, len: 0 };

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

/// Pool sizes at one point of a parse; see [`NodeArena::truncate`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ArenaMark {
    nodes: usize,
    lists: usize,
    names: usize,
}

/// Owns every node, child list and name list of one tree.
///
/// Allocation is append-only apart from [`NodeArena::truncate`], which
/// discards a failed construct; once the parser hands the arena to a
/// [`SyntaxTree`](crate::SyntaxTree) it is only ever read.
#[derive(Clone, Default, Debug)]
pub struct NodeArena {
    nodes: Vec<Node>,
    lists: Vec<NodeId>,
    names: Vec<Name>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the pools from the source length.
    pub fn with_capacity(source_len: usize) -> Self {
        // Roughly one node per three bytes of typical source.
        let nodes = source_len / 3;
        NodeArena {
            nodes: Vec::with_capacity(nodes),
            lists: Vec::with_capacity(nodes / 2),
            names: Vec::new(),
        }
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "node count is bounded by u32 source offsets"
    )]
    pub fn alloc(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(Node::new(kind, span));
        id
    }

    /// Copy `ids` into the list pool as one contiguous range.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "list pool is bounded by u32 source offsets"
    )]
    pub fn alloc_list(&mut self, ids: &[NodeId]) -> NodeRange {
        if ids.is_empty() {
            return NodeRange::EMPTY;
        }
        let start = self.lists.len() as u32;
        self.lists.extend_from_slice(ids);
        NodeRange {
            start,
            len: ids.len() as u32,
        }
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "name pool is bounded by u32 source offsets"
    )]
    pub fn alloc_names(&mut self, names: &[Name]) -> NameRange {
        if names.is_empty() {
            return NameRange::EMPTY;
        }
        let start = self.names.len() as u32;
        self.names.extend_from_slice(names);
        NameRange {
            start,
            len: names.len() as u32,
        }
    }

    /// Get a node.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.get(id).kind
    }

    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.get(id).span
    }

    #[inline]
    pub fn list(&self, range: NodeRange) -> &[NodeId] {
        let start = range.start as usize;
        &self.lists[start..start + range.len()]
    }

    #[inline]
    pub fn names(&self, range: NameRange) -> &[Name] {
        let start = range.start as usize;
        &self.names[start..start + range.len()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn mark(&self) -> ArenaMark {
        ArenaMark {
            nodes: self.nodes.len(),
            lists: self.lists.len(),
            names: self.names.len(),
        }
    }

    /// Drop everything allocated since `mark`. Ids allocated before the mark
    /// never point past it.
    pub fn truncate(&mut self, mark: ArenaMark) {
        self.nodes.truncate(mark.nodes);
        self.lists.truncate(mark.lists);
        self.names.truncate(mark.names);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
