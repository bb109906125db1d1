//! `if` and `match` expressions.
//!
//! Both are usable as statements and as operands.

use vx_ir::GrammarTag;

use crate::keyword::Keyword;
use crate::{ParseObserver, ParseResult, Parser};

impl<O: ParseObserver> Parser<'_, O> {
    /// `'if' Expression Block [ElseClause]`
    ///
    /// `else` may sit on a later line. The newlines are only consumed when
    /// an `else` follows; otherwise the cursor goes back to the token right
    /// after the block.
    pub(crate) fn if_expression(&mut self) -> ParseResult<u32> {
        self.rule(GrammarTag::IfExpression, |p| {
            let node = p.ast.make_non_terminal(GrammarTag::IfExpression)?;
            p.cursor.advance();
            let size = p.expression()?;
            p.ast.add_to_size(node, size);
            let size = p.block()?;
            p.ast.add_to_size(node, size);

            let after_block = p.cursor.snapshot();
            p.cursor.skip_newlines();
            if p.cursor.keyword() == Some(Keyword::Else) {
                let size = p.else_clause()?;
                p.ast.add_to_size(node, size);
            } else {
                p.cursor.restore(after_block);
            }
            Ok(p.size_of(node))
        })
    }

    /// `'else' (IfExpression | Block)`
    fn else_clause(&mut self) -> ParseResult<u32> {
        self.rule(GrammarTag::ElseClause, |p| {
            let node = p.ast.make_non_terminal(GrammarTag::ElseClause)?;
            p.cursor.advance();
            let size = if p.cursor.keyword() == Some(Keyword::If) {
                p.if_expression()?
            } else {
                p.block()?
            };
            p.ast.add_to_size(node, size);
            Ok(p.size_of(node))
        })
    }

    /// `'match' Expression '{' MatchCase ('\n'+ MatchCase)* '}'`
    pub(crate) fn match_expression(&mut self) -> ParseResult<u32> {
        self.rule(GrammarTag::MatchExpression, |p| {
            let node = p.ast.make_non_terminal(GrammarTag::MatchExpression)?;
            p.cursor.advance();
            let size = p.expression()?;
            p.ast.add_to_size(node, size);
            p.expect_symbol(b"{", "`{`")?;
            p.cursor.skip_newlines();
            if p.cursor.is_symbol(b"}") {
                return Err(p.error("match case"));
            }
            loop {
                let size = p.match_case()?;
                p.ast.add_to_size(node, size);
                if p.cursor.is_symbol(b"}") {
                    break;
                }
                if !p.cursor.is_newline() {
                    return Err(p.error("newline or `}` after match case"));
                }
                p.cursor.skip_newlines();
                if p.cursor.is_symbol(b"}") {
                    break;
                }
            }
            p.cursor.advance();
            Ok(p.size_of(node))
        })
    }

    /// `Expression ':' (Block | Statement)`
    fn match_case(&mut self) -> ParseResult<u32> {
        self.rule(GrammarTag::MatchCase, |p| {
            let node = p.ast.make_non_terminal(GrammarTag::MatchCase)?;
            let size = p.expression()?;
            p.ast.add_to_size(node, size);
            p.expect_symbol(b":", "`:`")?;
            let size = if p.cursor.is_symbol(b"{") {
                p.block()?
            } else {
                p.statement()?
            };
            p.ast.add_to_size(node, size);
            Ok(p.size_of(node))
        })
    }
}
