//! vx IR: the flattened syntax tree.
//!
//! The parser produces one [`Ast`]: a preorder `Vec` of fixed-size
//! [`AstNode`] records where each node's `size` counts its whole subtree.
//! Children are found by skipping sizes, not by following pointers.
//!
//! - [`Span`]: byte range of a terminal's token.
//! - [`GrammarTag`]: closed set of syntactic categories.
//! - [`Ast`]: append / insert-before arena with checked doubling growth.
//! - [`validate`]: proves every size counter describes a proper nesting.
//! - [`visitor`]: preorder walk and S-expression rendering.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod ast;
mod node;
mod span;
mod validate;
pub mod visitor;

pub use ast::{Ast, AstError, Children};
pub use node::{AstNode, GrammarTag, NodeId, NodeKind};
pub use span::Span;
pub use validate::{validate, TreeError};
