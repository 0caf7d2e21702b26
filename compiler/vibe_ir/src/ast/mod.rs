//! Syntax tree node definitions.
//!
//! # Design
//!
//! Nodes never own their children directly. A child is a [`NodeId`] into
//! the [`NodeArena`], a child list is a [`NodeRange`] into the arena's list
//! pool, and a list of plain names (accessor names, block parameters, uses
//! directive entries) is a [`NameRange`]. Children are always allocated
//! before their parent, so a tree is acyclic by construction.
//!
//! [`NodeKind::fields`] exposes the named-field view of every variant in
//! source order; generic walks (printing, span checks) go through it rather
//! than matching every variant.

mod arena;
mod operators;

pub use arena::{ArenaMark, NameRange, NodeArena, NodeId, NodeRange};
pub use operators::{BinaryOp, CompoundOp, UnaryOp};

use smallvec::SmallVec;

use crate::{Name, Span};

/// A node: kind plus the span of every token it covers.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    #[inline]
    pub const fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span }
    }
}

/// Name of a method declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MethodName {
    /// `def name`
    Simple(Name),
    /// `def self.name`
    SelfQualified(Name),
}

impl MethodName {
    pub const fn name(self) -> Name {
        match self {
            MethodName::Simple(name) | MethodName::SelfQualified(name) => name,
        }
    }

    pub const fn is_singleton(self) -> bool {
        matches!(self, MethodName::SelfQualified(_))
    }
}

/// Which accessor a class member declares.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AccessorKind {
    Property,
    Getter,
    Setter,
}

impl AccessorKind {
    /// The soft keyword introducing the declaration.
    pub const fn keyword(self) -> &'static str {
        match self {
            AccessorKind::Property => "property",
            AccessorKind::Getter => "getter",
            AccessorKind::Setter => "setter",
        }
    }
}

/// Referent of one alternative in a type annotation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeRef {
    Named(Name),
    Nil,
}

/// A child slot as seen through [`NodeKind::fields`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Child {
    Node(NodeId),
    List(NodeRange),
}

/// Ordered `(field name, child)` pairs of one node.
pub type Fields = SmallVec<[(&'static str, Child); 4]>;

/// Node kinds, one per grammar production.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum NodeKind {
    /// Root: every top-level statement and declaration.
    Program { body: NodeRange },

    // Declarations
    Method {
        private: bool,
        name: MethodName,
        /// `Parameters` node when a parenthesized list was written.
        params: Option<NodeId>,
        /// `TypeAnnotation` after `->`.
        return_type: Option<NodeId>,
        body: NodeRange,
    },
    ExportMethod { method: NodeId },
    Parameters { params: NodeRange },
    SimpleParam { name: Name, default: Option<NodeId> },
    TypedParam { name: Name, ty: NodeId, default: Option<NodeId> },
    IvarParam { name: Name, ty: Option<NodeId> },
    /// `T | U?`; every entry is a `TypeName`.
    TypeAnnotation { types: NodeRange },
    TypeName { name: TypeRef, nilable: bool },
    Class { name: Name, members: NodeRange },
    AccessorDecl { kind: AccessorKind, names: NameRange },
    ClassVarAssign { name: Name, value: NodeId },

    // Control flow
    If {
        condition: NodeId,
        body: NodeRange,
        elsifs: NodeRange,
        else_branch: Option<NodeId>,
    },
    Elsif { condition: NodeId, body: NodeRange },
    Else { body: NodeRange },
    Unless {
        condition: NodeId,
        body: NodeRange,
        else_branch: Option<NodeId>,
    },
    Case {
        subject: NodeId,
        whens: NodeRange,
        else_branch: Option<NodeId>,
    },
    When { patterns: NodeRange, body: NodeRange },
    While { condition: NodeId, body: NodeRange },
    Until { condition: NodeId, body: NodeRange },
    For {
        /// `Identifier` node.
        variable: NodeId,
        iterable: NodeId,
        body: NodeRange,
    },
    Begin {
        body: NodeRange,
        rescues: NodeRange,
        ensure: Option<NodeId>,
    },
    Rescue { filter: Option<Name>, body: NodeRange },
    Ensure { body: NodeRange },

    // Jumps
    Return { value: Option<NodeId> },
    Break,
    Next,
    Raise { value: NodeId },
    /// `None` for a bare `yield`, `Some` once parentheses were written.
    Yield { args: Option<NodeRange> },

    // Imports and directives
    Require {
        /// `Identifier` node.
        variable: NodeId,
        /// `String` node.
        path: NodeId,
        /// `String` node after `as:`.
        alias: Option<NodeId>,
    },
    VersionDirective { major: u32, minor: u32 },
    UsesDirective { names: NameRange },

    // Expressions
    Assignment { target: NodeId, value: NodeId },
    CompoundAssignment {
        op: CompoundOp,
        target: NodeId,
        value: NodeId,
    },
    Binary {
        op: BinaryOp,
        left: NodeId,
        right: NodeId,
    },
    Unary { op: UnaryOp, operand: NodeId },
    Call {
        receiver: Option<NodeId>,
        method: Name,
        args: NodeRange,
        block: Option<NodeId>,
    },
    MemberAccess {
        receiver: NodeId,
        member: Name,
        block: Option<NodeId>,
    },
    Subscript { receiver: NodeId, index: NodeId },
    Block { params: NameRange, body: NodeRange },
    /// `key: value` inside an argument list; `key` is an `Identifier` node.
    KeywordArg { key: NodeId, value: NodeId },

    // Primaries
    Identifier(Name),
    Constant(Name),
    Integer(u64),
    /// `f64` bits.
    Float(u64),
    /// Cooked string value, escapes decoded.
    String(Name),
    Symbol(Name),
    True,
    False,
    Nil,
    SelfRef,
    InstanceVar(Name),
    ClassVar(Name),
    Array { elements: NodeRange },
    Hash { entries: NodeRange },
    /// `key` is an `Identifier` or `String` node.
    HashEntry { key: NodeId, value: NodeId },
    Parenthesized { expr: NodeId },

    /// Tokens skipped while recovering from a syntax error.
    Error,
}

impl NodeKind {
    /// Production name, as printed in S-expressions.
    pub const fn name(&self) -> &'static str {
        match self {
            NodeKind::Program { .. } => "program",
            NodeKind::Method { .. } => "method",
            NodeKind::ExportMethod { .. } => "export_method",
            NodeKind::Parameters { .. } => "parameters",
            NodeKind::SimpleParam { .. } => "simple_parameter",
            NodeKind::TypedParam { .. } => "typed_parameter",
            NodeKind::IvarParam { .. } => "ivar_parameter",
            NodeKind::TypeAnnotation { .. } => "type_annotation",
            NodeKind::TypeName { .. } => "type_name",
            NodeKind::Class { .. } => "class",
            NodeKind::AccessorDecl { kind, .. } => match kind {
                AccessorKind::Property => "property_declaration",
                AccessorKind::Getter => "getter_declaration",
                AccessorKind::Setter => "setter_declaration",
            },
            NodeKind::ClassVarAssign { .. } => "class_variable_assignment",
            NodeKind::If { .. } => "if",
            NodeKind::Elsif { .. } => "elsif",
            NodeKind::Else { .. } => "else",
            NodeKind::Unless { .. } => "unless",
            NodeKind::Case { .. } => "case",
            NodeKind::When { .. } => "when",
            NodeKind::While { .. } => "while",
            NodeKind::Until { .. } => "until",
            NodeKind::For { .. } => "for",
            NodeKind::Begin { .. } => "begin",
            NodeKind::Rescue { .. } => "rescue",
            NodeKind::Ensure { .. } => "ensure",
            NodeKind::Return { .. } => "return",
            NodeKind::Break => "break",
            NodeKind::Next => "next",
            NodeKind::Raise { .. } => "raise",
            NodeKind::Yield { .. } => "yield",
            NodeKind::Require { .. } => "require",
            NodeKind::VersionDirective { .. } => "version_directive",
            NodeKind::UsesDirective { .. } => "uses_directive",
            NodeKind::Assignment { .. } => "assignment",
            NodeKind::CompoundAssignment { .. } => "compound_assignment",
            NodeKind::Binary { .. } => "binary",
            NodeKind::Unary { .. } => "unary",
            NodeKind::Call { .. } => "call",
            NodeKind::MemberAccess { .. } => "member_access",
            NodeKind::Subscript { .. } => "subscript",
            NodeKind::Block { .. } => "block",
            NodeKind::KeywordArg { .. } => "keyword_argument",
            NodeKind::Identifier(_) => "identifier",
            NodeKind::Constant(_) => "constant",
            NodeKind::Integer(_) => "integer",
            NodeKind::Float(_) => "float",
            NodeKind::String(_) => "string",
            NodeKind::Symbol(_) => "symbol",
            NodeKind::True => "true",
            NodeKind::False => "false",
            NodeKind::Nil => "nil",
            NodeKind::SelfRef => "self",
            NodeKind::InstanceVar(_) => "instance_variable",
            NodeKind::ClassVar(_) => "class_variable",
            NodeKind::Array { .. } => "array",
            NodeKind::Hash { .. } => "hash",
            NodeKind::HashEntry { .. } => "hash_entry",
            NodeKind::Parenthesized { .. } => "parenthesized",
            NodeKind::Error => "error",
        }
    }

    /// Child slots in source order. Absent optional children are skipped.
    pub fn fields(&self) -> Fields {
        let mut out = Fields::new();
        match *self {
            NodeKind::Program { body } => {
                out.push(("body", Child::List(body)));
            }
            NodeKind::Method {
                params,
                return_type,
                body,
                ..
            } => {
                if let Some(id) = params {
                    out.push(("parameters", Child::Node(id)));
                }
                if let Some(id) = return_type {
                    out.push(("return_type", Child::Node(id)));
                }
                out.push(("body", Child::List(body)));
            }
            NodeKind::ExportMethod { method } => out.push(("method", Child::Node(method))),
            NodeKind::Parameters { params } => out.push(("params", Child::List(params))),
            NodeKind::SimpleParam { default, .. } => {
                if let Some(id) = default {
                    out.push(("default", Child::Node(id)));
                }
            }
            NodeKind::TypedParam { ty, default, .. } => {
                out.push(("type", Child::Node(ty)));
                if let Some(id) = default {
                    out.push(("default", Child::Node(id)));
                }
            }
            NodeKind::IvarParam { ty, .. } => {
                if let Some(id) = ty {
                    out.push(("type", Child::Node(id)));
                }
            }
            NodeKind::TypeAnnotation { types } => out.push(("types", Child::List(types))),
            NodeKind::Class { members, .. } => out.push(("members", Child::List(members))),
            NodeKind::ClassVarAssign { value, .. } => out.push(("value", Child::Node(value))),
            NodeKind::If {
                condition,
                body,
                elsifs,
                else_branch,
            } => {
                out.push(("condition", Child::Node(condition)));
                out.push(("body", Child::List(body)));
                out.push(("elsifs", Child::List(elsifs)));
                if let Some(id) = else_branch {
                    out.push(("else", Child::Node(id)));
                }
            }
            NodeKind::Elsif { condition, body }
            | NodeKind::While { condition, body }
            | NodeKind::Until { condition, body } => {
                out.push(("condition", Child::Node(condition)));
                out.push(("body", Child::List(body)));
            }
            NodeKind::Else { body } | NodeKind::Ensure { body } | NodeKind::Rescue { body, .. } => {
                out.push(("body", Child::List(body)));
            }
            NodeKind::Unless {
                condition,
                body,
                else_branch,
            } => {
                out.push(("condition", Child::Node(condition)));
                out.push(("body", Child::List(body)));
                if let Some(id) = else_branch {
                    out.push(("else", Child::Node(id)));
                }
            }
            NodeKind::Case {
                subject,
                whens,
                else_branch,
            } => {
                out.push(("subject", Child::Node(subject)));
                out.push(("whens", Child::List(whens)));
                if let Some(id) = else_branch {
                    out.push(("else", Child::Node(id)));
                }
            }
            NodeKind::When { patterns, body } => {
                out.push(("patterns", Child::List(patterns)));
                out.push(("body", Child::List(body)));
            }
            NodeKind::For {
                variable,
                iterable,
                body,
            } => {
                out.push(("variable", Child::Node(variable)));
                out.push(("iterable", Child::Node(iterable)));
                out.push(("body", Child::List(body)));
            }
            NodeKind::Begin {
                body,
                rescues,
                ensure,
            } => {
                out.push(("body", Child::List(body)));
                out.push(("rescues", Child::List(rescues)));
                if let Some(id) = ensure {
                    out.push(("ensure", Child::Node(id)));
                }
            }
            NodeKind::Return { value } => {
                if let Some(id) = value {
                    out.push(("value", Child::Node(id)));
                }
            }
            NodeKind::Raise { value } => out.push(("value", Child::Node(value))),
            NodeKind::Yield { args } => {
                if let Some(range) = args {
                    out.push(("arguments", Child::List(range)));
                }
            }
            NodeKind::Require {
                variable,
                path,
                alias,
            } => {
                out.push(("variable", Child::Node(variable)));
                out.push(("path", Child::Node(path)));
                if let Some(id) = alias {
                    out.push(("alias", Child::Node(id)));
                }
            }
            NodeKind::Assignment { target, value }
            | NodeKind::CompoundAssignment { target, value, .. } => {
                out.push(("target", Child::Node(target)));
                out.push(("value", Child::Node(value)));
            }
            NodeKind::Binary { left, right, .. } => {
                out.push(("left", Child::Node(left)));
                out.push(("right", Child::Node(right)));
            }
            NodeKind::Unary { operand, .. } => out.push(("operand", Child::Node(operand))),
            NodeKind::Call {
                receiver,
                args,
                block,
                ..
            } => {
                if let Some(id) = receiver {
                    out.push(("receiver", Child::Node(id)));
                }
                out.push(("arguments", Child::List(args)));
                if let Some(id) = block {
                    out.push(("block", Child::Node(id)));
                }
            }
            NodeKind::MemberAccess {
                receiver, block, ..
            } => {
                out.push(("receiver", Child::Node(receiver)));
                if let Some(id) = block {
                    out.push(("block", Child::Node(id)));
                }
            }
            NodeKind::Subscript { receiver, index } => {
                out.push(("receiver", Child::Node(receiver)));
                out.push(("index", Child::Node(index)));
            }
            NodeKind::Block { body, .. } => out.push(("body", Child::List(body))),
            NodeKind::KeywordArg { key, value } | NodeKind::HashEntry { key, value } => {
                out.push(("key", Child::Node(key)));
                out.push(("value", Child::Node(value)));
            }
            NodeKind::Array { elements } => out.push(("elements", Child::List(elements))),
            NodeKind::Hash { entries } => out.push(("entries", Child::List(entries))),
            NodeKind::Parenthesized { expr } => out.push(("expression", Child::Node(expr))),
            NodeKind::TypeName { .. }
            | NodeKind::AccessorDecl { .. }
            | NodeKind::Break
            | NodeKind::Next
            | NodeKind::VersionDirective { .. }
            | NodeKind::UsesDirective { .. }
            | NodeKind::Identifier(_)
            | NodeKind::Constant(_)
            | NodeKind::Integer(_)
            | NodeKind::Float(_)
            | NodeKind::String(_)
            | NodeKind::Symbol(_)
            | NodeKind::True
            | NodeKind::False
            | NodeKind::Nil
            | NodeKind::SelfRef
            | NodeKind::InstanceVar(_)
            | NodeKind::ClassVar(_)
            | NodeKind::Error => {}
        }
        out
    }
}

#[cfg(test)]
mod tests;
