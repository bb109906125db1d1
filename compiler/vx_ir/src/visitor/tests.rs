#![allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]

use super::*;
use crate::{GrammarTag, Span};
use pretty_assertions::assert_eq;

/// Tree for `1 + 2` as the parser lays it out:
/// `Statements[Expression[+[1, 2]]]`.
fn addition() -> (Ast, &'static [u8]) {
    let source: &'static [u8] = b"1 + 2";
    let mut ast = Ast::new();
    let root = ast.make_non_terminal(GrammarTag::Statements).unwrap();
    let expr = ast.make_non_terminal(GrammarTag::Expression).unwrap();
    let lhs = ast
        .make_terminal(GrammarTag::DecimalNumber, Span::new(0, 1))
        .unwrap();
    ast.make_terminal(GrammarTag::DecimalNumber, Span::new(4, 5))
        .unwrap();
    let mut op = AstNode::terminal(GrammarTag::Operator, Span::new(2, 3));
    op.size = 3;
    ast.insert_before(lhs, op).unwrap();
    ast.add_to_size(expr, 3);
    ast.add_to_size(root, 4);
    (ast, source)
}

#[test]
fn walk_reports_depths_in_preorder() {
    let (ast, _) = addition();
    let mut seen = Vec::new();
    walk(&ast, &mut |id: NodeId, node: &AstNode, depth: usize| {
        seen.push((id.raw(), node.tag, depth));
    });
    assert_eq!(
        seen,
        vec![
            (0, GrammarTag::Statements, 0),
            (1, GrammarTag::Expression, 1),
            (2, GrammarTag::Operator, 2),
            (3, GrammarTag::DecimalNumber, 3),
            (4, GrammarTag::DecimalNumber, 3),
        ]
    );
}

#[derive(Default)]
struct Events(Vec<String>);

impl Visitor for Events {
    fn visit(&mut self, id: NodeId, _node: &AstNode, _depth: usize) {
        self.0.push(format!("+{}", id.raw()));
    }

    fn leave(&mut self, id: NodeId, _node: &AstNode, _depth: usize) {
        self.0.push(format!("-{}", id.raw()));
    }
}

#[test]
fn leave_fires_in_postorder() {
    let (ast, _) = addition();
    let mut events = Events::default();
    walk(&ast, &mut events);
    assert_eq!(
        events.0,
        vec!["+0", "+1", "+2", "+3", "-3", "+4", "-4", "-2", "-1", "-0"]
    );
}

#[test]
fn sexpr_rendering() {
    let (ast, source) = addition();
    assert_eq!(to_sexpr(&ast, source), "(Statements (Expression (+ 1 2)))");
}

#[test]
fn sexpr_of_childless_non_terminal() {
    let mut ast = Ast::new();
    ast.make_non_terminal(GrammarTag::Block).unwrap();
    assert_eq!(to_sexpr(&ast, b""), "(Block)");
}

#[test]
fn sexpr_of_empty_tree() {
    assert_eq!(to_sexpr(&Ast::new(), b""), "");
}
