//! Flattened preorder tree arena.
//!
//! All nodes live in one `Vec<AstNode>` in preorder. A node at index `i`
//! with size `s` owns the descendants at indices `i + 1 .. i + s`; its
//! children are found by hopping over each child's own size. There are no
//! child pointers.
//!
//! # Building
//!
//! The arena keeps one *open slot*: an empty node after the committed nodes
//! that the parser is about to fill. [`Ast::current`] returns it, and
//! [`Ast::make_non_terminal`] / [`Ast::make_terminal`] fill it in place
//! (size 1) and open the next one. A parent therefore always precedes its
//! children, and the parent's size is grown by the sizes its child calls
//! report. The open slot never shows up in [`Ast::len`] or [`Ast::nodes`].
//!
//! Operators are discovered after their left operand, so they are spliced
//! in with [`Ast::insert_before`]. Every already-built ancestor whose range
//! covers the insertion point then needs [`Ast::bump_ancestors`].

use std::ops::Index;

use thiserror::Error;

use crate::{AstNode, GrammarTag, NodeId, Span};

/// Largest number of nodes an arena can address with a [`NodeId`].
const MAX_NODES: usize = u32::MAX as usize;

/// Arena growth failure.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum AstError {
    /// Doubling the capacity would exceed the addressable node count.
    #[error("syntax tree capacity overflow")]
    CapacityOverflow,
    /// The allocator refused the larger buffer.
    #[error("out of memory while growing the syntax tree")]
    OutOfMemory,
    /// `insert_before` past the end of the committed nodes.
    #[error("node index {index} out of bounds for tree of {len} nodes")]
    IndexOutOfBounds { index: u32, len: u32 },
}

/// Flat preorder syntax tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ast {
    /// Committed nodes, optionally followed by the open slot.
    nodes: Vec<AstNode>,
    /// Number of committed nodes.
    len: usize,
}

impl Default for Ast {
    fn default() -> Self {
        Self::new()
    }
}

impl Ast {
    /// Preallocated node count for [`Ast::new`].
    pub const DEFAULT_CAPACITY: usize = 1024;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an arena with room for `capacity` nodes.
    ///
    /// A failed preallocation is not an error: the arena starts empty and
    /// growth reports the failure when it happens.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::new();
        let _ = nodes.try_reserve_exact(capacity.min(MAX_NODES));
        Ast { nodes, len: 0 }
    }

    /// Number of committed nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Committed nodes in preorder.
    #[inline]
    pub fn nodes(&self) -> &[AstNode] {
        &self.nodes[..self.len]
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&AstNode> {
        self.nodes().get(id.index())
    }

    /// Id the next committed node will receive.
    #[inline]
    pub fn next_id(&self) -> NodeId {
        NodeId::new(self.len_u32())
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "growth caps the arena at MAX_NODES"
    )]
    #[inline]
    fn len_u32(&self) -> u32 {
        self.len as u32
    }

    fn has_open_slot(&self) -> bool {
        self.nodes.len() > self.len
    }

    /// Make room for one more node, doubling the capacity when full.
    fn reserve_one(&mut self) -> Result<(), AstError> {
        if self.nodes.len() < self.nodes.capacity() {
            return Ok(());
        }
        let new_capacity = self
            .nodes
            .capacity()
            .max(1)
            .checked_mul(2)
            .filter(|&cap| cap <= MAX_NODES)
            .ok_or(AstError::CapacityOverflow)?;
        let additional = new_capacity - self.nodes.len();
        self.nodes
            .try_reserve_exact(additional)
            .map_err(|_| AstError::OutOfMemory)
    }

    /// Ensure the open slot exists and return its id.
    ///
    /// Idempotent: while the slot is unfilled, repeated calls return the
    /// same id.
    pub fn append_empty(&mut self) -> Result<NodeId, AstError> {
        if !self.has_open_slot() {
            self.reserve_one()?;
            self.nodes.push(AstNode::EMPTY);
        }
        Ok(self.next_id())
    }

    /// The node being built: the open slot, created on demand.
    #[inline]
    pub fn current(&mut self) -> Result<NodeId, AstError> {
        self.append_empty()
    }

    /// Fill the current slot with a structural node and open the next one.
    pub fn make_non_terminal(&mut self, tag: GrammarTag) -> Result<NodeId, AstError> {
        self.fill_current(AstNode::non_terminal(tag))
    }

    /// Fill the current slot with a token-backed node and open the next one.
    pub fn make_terminal(&mut self, tag: GrammarTag, span: Span) -> Result<NodeId, AstError> {
        self.fill_current(AstNode::terminal(tag, span))
    }

    fn fill_current(&mut self, node: AstNode) -> Result<NodeId, AstError> {
        let id = self.current()?;
        self.nodes[id.index()] = node;
        self.len += 1;
        self.append_empty()?;
        Ok(id)
    }

    /// Splice `node` in at `index`, shifting `index..` one slot right.
    ///
    /// The inserted node becomes the parent of whatever range its own size
    /// covers. Sizes of existing nodes are untouched; ancestors that
    /// already counted the shifted range must be fixed with
    /// [`bump_ancestors`](Self::bump_ancestors).
    pub fn insert_before(&mut self, index: NodeId, node: AstNode) -> Result<(), AstError> {
        if index.index() > self.len {
            return Err(AstError::IndexOutOfBounds {
                index: index.raw(),
                len: self.len_u32(),
            });
        }
        self.reserve_one()?;
        self.nodes.insert(index.index(), node);
        self.len += 1;
        Ok(())
    }

    /// Grow by one every node before `index` whose range reached past
    /// `index` before an [`insert_before`](Self::insert_before) at `index`.
    ///
    /// After the insert, those nodes' stale ranges end one slot early; a
    /// range that still covers `index` strictly after its own start is
    /// exactly a range that has to grow.
    pub fn bump_ancestors(&mut self, index: NodeId) {
        for id in self.ancestors_of(index) {
            self.nodes[id.index()].size += 1;
        }
    }

    /// Add `amount` to the size of `id`.
    #[inline]
    pub fn add_to_size(&mut self, id: NodeId, amount: u32) {
        if let Some(node) = self.nodes[..self.len].get_mut(id.index()) {
            node.size = node.size.saturating_add(amount);
        }
    }

    /// Direct children of `id`, in order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let nodes = self.nodes();
        let (next, end) = match nodes.get(id.index()) {
            Some(node) => (id.index() + 1, (id.index() + node.size as usize).min(nodes.len())),
            None => (0, 0),
        };
        Children { nodes, next, end }
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors_of(&self, id: NodeId) -> Vec<NodeId> {
        let target = id.index();
        let mut ancestors: Vec<NodeId> = self
            .nodes()
            .iter()
            .enumerate()
            .take(target)
            .filter(|(i, node)| i + node.size as usize > target)
            .filter_map(|(i, _)| u32::try_from(i).ok().map(NodeId::new))
            .collect();
        ancestors.reverse();
        ancestors
    }
}

impl Index<NodeId> for Ast {
    type Output = AstNode;

    #[track_caller]
    fn index(&self, id: NodeId) -> &AstNode {
        &self.nodes()[id.index()]
    }
}

/// Iterator over the direct children of a node.
#[derive(Clone, Debug)]
pub struct Children<'a> {
    nodes: &'a [AstNode],
    next: usize,
    end: usize,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.next >= self.end {
            return None;
        }
        let id = NodeId::new(u32::try_from(self.next).ok()?);
        let size = self.nodes.get(self.next).map_or(1, |n| n.size.max(1));
        self.next += size as usize;
        Some(id)
    }
}
