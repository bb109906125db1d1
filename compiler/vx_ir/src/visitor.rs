//! Preorder traversal of the flat tree.
//!
//! The walk is a single forward pass over the arena. A stack of open range
//! ends tells when a subtree is finished, so `leave` fires in postorder
//! without recursion.
//!
//! Any `FnMut(NodeId, &AstNode, usize)` closure is a [`Visitor`] that only
//! cares about entering nodes.

use std::fmt::Write as _;

use crate::{Ast, AstNode, NodeId};

/// Callbacks for [`walk`]. `depth` is 0 for top-level nodes.
pub trait Visitor {
    fn visit(&mut self, id: NodeId, node: &AstNode, depth: usize);

    fn leave(&mut self, _id: NodeId, _node: &AstNode, _depth: usize) {}
}

impl<F> Visitor for F
where
    F: FnMut(NodeId, &AstNode, usize),
{
    fn visit(&mut self, id: NodeId, node: &AstNode, depth: usize) {
        self(id, node, depth);
    }
}

/// Visit every committed node in preorder.
pub fn walk<V: Visitor + ?Sized>(ast: &Ast, visitor: &mut V) {
    let nodes = ast.nodes();
    let mut open: Vec<(usize, NodeId)> = Vec::new();

    for (index, node) in nodes.iter().enumerate() {
        while let Some(&(end, id)) = open.last() {
            if index < end {
                break;
            }
            open.pop();
            visitor.leave(id, &ast[id], open.len());
        }
        let Ok(raw) = u32::try_from(index) else {
            break;
        };
        let id = NodeId::new(raw);
        visitor.visit(id, node, open.len());
        open.push((index + node.size.max(1) as usize, id));
    }

    while let Some((_, id)) = open.pop() {
        visitor.leave(id, &ast[id], open.len());
    }
}

/// Render the tree as an S-expression.
///
/// Terminal leaves print their source text; terminals with children print
/// `(text children...)`; non-terminals print `(Tag children...)`.
pub fn to_sexpr(ast: &Ast, source: &[u8]) -> String {
    let mut printer = SexprPrinter {
        source,
        out: String::new(),
    };
    walk(ast, &mut printer);
    printer.out
}

struct SexprPrinter<'s> {
    source: &'s [u8],
    out: String,
}

impl SexprPrinter<'_> {
    fn opens_list(node: &AstNode) -> bool {
        !node.is_terminal() || node.has_children()
    }

    fn text(&self, node: &AstNode) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(self.source.get(node.span.to_range()).unwrap_or_default())
    }
}

impl Visitor for SexprPrinter<'_> {
    fn visit(&mut self, _id: NodeId, node: &AstNode, _depth: usize) {
        if !self.out.is_empty() && !self.out.ends_with('(') {
            self.out.push(' ');
        }
        if Self::opens_list(node) {
            self.out.push('(');
        }
        if node.is_empty_slot() {
            self.out.push_str("<empty>");
        } else if node.is_terminal() {
            let text = self.text(node).into_owned();
            self.out.push_str(&text);
        } else {
            let _ = write!(self.out, "{}", node.tag);
        }
    }

    fn leave(&mut self, _id: NodeId, node: &AstNode, _depth: usize) {
        if Self::opens_list(node) {
            self.out.push(')');
        }
    }
}

#[cfg(test)]
mod tests;
