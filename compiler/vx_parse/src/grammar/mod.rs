//! Grammar rules, one routine per nonterminal.
//!
//! - `stmt`: statement lists, blocks, statement dispatch, jumps, loops,
//!   imports
//! - `decl`: declarations with publicity, functions, variables, types
//! - `control`: `if` and `match` expressions
//! - `expr`: the Pratt engine and statement-position expressions

mod control;
mod decl;
mod expr;
mod stmt;

use vx_ir::GrammarTag;
use vx_lexer_core::TokenKind;

use crate::{ParseObserver, ParseResult, Parser};

impl<O: ParseObserver> Parser<'_, O> {
    /// `Statements EOF`
    pub(crate) fn program(&mut self) -> ParseResult<()> {
        self.statements()?;
        if self.cursor.is_eof() {
            Ok(())
        } else {
            Err(self.error("end of file"))
        }
    }
}

/// Leaf tag for a literal or identifier token.
fn literal_tag(kind: TokenKind) -> Option<GrammarTag> {
    let tag = match kind {
        TokenKind::Identifier => GrammarTag::Identifier,
        TokenKind::DecimalNumber => GrammarTag::DecimalNumber,
        TokenKind::HexNumber => GrammarTag::HexNumber,
        TokenKind::BinaryNumber => GrammarTag::BinaryNumber,
        TokenKind::FloatNumber => GrammarTag::FloatNumber,
        TokenKind::CharLiteral => GrammarTag::CharLiteral,
        TokenKind::StringLiteral => GrammarTag::StringLiteral,
        TokenKind::Symbol | TokenKind::EndOfFile => return None,
    };
    Some(tag)
}
