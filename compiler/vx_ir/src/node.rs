//! Node record, node ids and grammar categories.

use std::fmt;

use crate::Span;

/// Index of a node in an [`Ast`](crate::Ast).
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// The first node of a tree; the root after a successful parse.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the index into the arena.
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

/// Whether a node carries a source span.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum NodeKind {
    /// Slot reserved but not yet filled.
    #[default]
    Empty,
    /// Carries the span of the token it was built from.
    Terminal,
    /// Pure structure, no source text.
    NonTerminal,
}

macro_rules! grammar_tags {
    ($($(#[$meta:meta])* $variant:ident,)*) => {
        /// Syntactic category of a node.
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub enum GrammarTag {
            $($(#[$meta])* $variant,)*
        }

        impl GrammarTag {
            /// Every tag, in declaration order.
            pub const ALL: &'static [GrammarTag] = &[$(GrammarTag::$variant,)*];

            pub const fn name(self) -> &'static str {
                match self {
                    $(GrammarTag::$variant => stringify!($variant),)*
                }
            }
        }
    };
}

grammar_tags! {
    Statements,
    Statement,
    Block,
    /// Wrapper around an operand at a grammar position.
    Expression,
    Paren,
    /// Binary operator; terminal spanning the operator token.
    Operator,
    PrefixOperator,
    /// `++` / `--` after an assignable chain.
    PostfixOperator,
    Call,
    Index,
    /// `lo..hi` inside an index.
    Range,
    MemberAccess,
    /// `=` or compound assignment; terminal spanning the operator token.
    Assignment,
    IfExpression,
    ElseClause,
    MatchExpression,
    MatchCase,
    Declaration,
    PublicityPublic,
    PublicityPrivate,
    FunctionDeclaration,
    Function,
    Lambda,
    VariableDeclaration,
    Types,
    Type,
    JumpStatement,
    LoopStatement,
    ImportStatement,
    Identifier,
    DecimalNumber,
    HexNumber,
    BinaryNumber,
    FloatNumber,
    CharLiteral,
    StringLiteral,
}

impl fmt::Display for GrammarTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One slot of the flattened tree.
///
/// `size` counts the node itself plus all descendants, which occupy the
/// index range directly after it. `tag` and `span` are meaningless while
/// `kind` is [`NodeKind::Empty`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AstNode {
    pub kind: NodeKind,
    pub tag: GrammarTag,
    pub span: Span,
    pub size: u32,
}

impl AstNode {
    /// An unfilled slot.
    pub const EMPTY: AstNode = AstNode {
        kind: NodeKind::Empty,
        tag: GrammarTag::Expression,
        span: Span::DUMMY,
        size: 0,
    };

    /// A structural node of size 1.
    #[inline]
    pub const fn non_terminal(tag: GrammarTag) -> Self {
        AstNode {
            kind: NodeKind::NonTerminal,
            tag,
            span: Span::DUMMY,
            size: 1,
        }
    }

    /// A token-backed node of size 1.
    #[inline]
    pub const fn terminal(tag: GrammarTag, span: Span) -> Self {
        AstNode {
            kind: NodeKind::Terminal,
            tag,
            span,
            size: 1,
        }
    }

    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::Terminal)
    }

    #[inline]
    pub const fn is_empty_slot(&self) -> bool {
        matches!(self.kind, NodeKind::Empty)
    }

    /// Returns `true` if the node has at least one child.
    #[inline]
    pub const fn has_children(&self) -> bool {
        self.size > 1
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{AstNode, NodeId};
    crate::static_assert_size!(AstNode, 16);
    crate::static_assert_size!(NodeId, 4);
}

#[cfg(test)]
mod tests;
