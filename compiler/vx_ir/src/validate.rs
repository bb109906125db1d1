//! Structural check of the size encoding.
//!
//! A tree is well formed when node 0 spans the whole arena and every
//! node's range fits inside its parent's range. In preorder that is the
//! same as saying each parent's children tile `(parent, parent + size)`
//! exactly. The walk keeps a stack of open range ends instead of recursing.

use thiserror::Error;

use crate::{Ast, NodeKind};

/// First violation found by [`validate`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum TreeError {
    #[error("root covers {size} nodes but the tree has {len}")]
    RootSize { size: u32, len: usize },
    #[error("node {index} is an unfilled slot")]
    EmptySlot { index: usize },
    #[error("node {index} has size 0")]
    ZeroSize { index: usize },
    #[error("node {index} ends at {end}, past its parent's end {parent_end}")]
    Overhang {
        index: usize,
        end: usize,
        parent_end: usize,
    },
}

/// Check that every size counter describes a proper nesting.
pub fn validate(ast: &Ast) -> Result<(), TreeError> {
    let nodes = ast.nodes();
    let Some(root) = nodes.first() else {
        return Ok(());
    };
    if root.size as usize != nodes.len() {
        return Err(TreeError::RootSize {
            size: root.size,
            len: nodes.len(),
        });
    }

    let mut open_ends: Vec<usize> = Vec::new();
    for (index, node) in nodes.iter().enumerate() {
        while open_ends.last().is_some_and(|&end| index >= end) {
            open_ends.pop();
        }
        if node.kind == NodeKind::Empty {
            return Err(TreeError::EmptySlot { index });
        }
        if node.size == 0 {
            return Err(TreeError::ZeroSize { index });
        }
        let end = index + node.size as usize;
        let parent_end = open_ends.last().copied().unwrap_or(nodes.len());
        if end > parent_end {
            return Err(TreeError::Overhang {
                index,
                end,
                parent_end,
            });
        }
        open_ends.push(end);
    }
    Ok(())
}
