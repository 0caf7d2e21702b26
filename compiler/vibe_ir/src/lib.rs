//! Intermediate representation shared by the vibescript front-end.
//!
//! # Design
//!
//! - **Flat tree**: nodes reference children through [`NodeId`] indices into a
//!   per-parse [`NodeArena`]; there is no `Box<Node>` anywhere.
//! - **Interned names**: identifiers, constants, symbols and cooked string
//!   literals are [`Name`] handles into a [`StringInterner`] owned by the same
//!   parse.
//! - **Immutability**: a [`SyntaxTree`] only hands out shared references; the
//!   parser is the only writer and gives the arena up when it finishes.

pub mod ast;
mod interner;
mod name;
mod printer;
mod span;
mod token;
mod tree;

pub use ast::{
    AccessorKind, ArenaMark, BinaryOp, Child, CompoundOp, MethodName, NameRange, Node, NodeArena,
    NodeId, NodeKind, NodeRange, TypeRef, UnaryOp,
};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList, TokenTag};
pub use tree::SyntaxTree;

/// Compile-time size check for hot types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

static_assert_size!(Span, 8);
static_assert_size!(Name, 4);
static_assert_size!(NodeId, 4);
