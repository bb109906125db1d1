use super::*;

#[test]
fn node_id_accessors() {
    let id = NodeId::new(7);
    assert_eq!(id.index(), 7);
    assert_eq!(id.raw(), 7);
    assert_eq!(format!("{id:?}"), "NodeId(7)");
    assert_eq!(NodeId::ROOT.index(), 0);
    assert!(NodeId::new(1) < NodeId::new(2));
}

#[test]
fn tag_names_match_variants() {
    assert_eq!(GrammarTag::Statements.name(), "Statements");
    assert_eq!(GrammarTag::MemberAccess.to_string(), "MemberAccess");
    assert_eq!(GrammarTag::ALL.len(), 36);
    assert_eq!(GrammarTag::ALL.first(), Some(&GrammarTag::Statements));
    assert_eq!(GrammarTag::ALL.last(), Some(&GrammarTag::StringLiteral));
}

#[test]
fn constructors() {
    let empty = AstNode::EMPTY;
    assert!(empty.is_empty_slot());
    assert_eq!(empty.size, 0);
    assert_eq!(NodeKind::default(), NodeKind::Empty);

    let nt = AstNode::non_terminal(GrammarTag::Block);
    assert_eq!(nt.kind, NodeKind::NonTerminal);
    assert_eq!(nt.span, Span::DUMMY);
    assert_eq!(nt.size, 1);
    assert!(!nt.is_terminal());
    assert!(!nt.has_children());

    let t = AstNode::terminal(GrammarTag::Identifier, Span::new(3, 6));
    assert!(t.is_terminal());
    assert_eq!(t.span, Span::new(3, 6));

    let parent = AstNode { size: 3, ..t };
    assert!(parent.has_children());
}
