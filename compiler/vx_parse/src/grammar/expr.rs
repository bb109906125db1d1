//! Expressions.
//!
//! Operand position goes through the Pratt engine: a primary, then a loop
//! over postfix and infix operators driven by the binding power tables.
//! Operators are only recognized after their left operand has been built,
//! so each one is spliced in front of that operand with
//! [`Ast::insert_before`](vx_ir::Ast::insert_before) and takes it over as
//! its first child.
//!
//! Statement position additionally allows assignment, compound assignment
//! and `++` / `--` after a chain of member, index and call suffixes. A chain
//! containing a call is not assignable.

use vx_ir::{AstNode, GrammarTag, Span};
use vx_lexer_core::TokenKind;

use super::literal_tag;
use crate::binding_power::OpKey;
use crate::keyword::Keyword;
use crate::{ParseObserver, ParseResult, Parser, Subtree};

/// Assignment spellings accepted after an assignable chain.
const ASSIGN_OPS: [&[u8]; 9] = [
    b"=", b"+=", b"-=", b"*=", b"/=", b"%=", b"^=", b"|=", b"&=",
];

impl<O: ParseObserver> Parser<'_, O> {
    /// An operand-position expression under an `Expression` node.
    pub(crate) fn expression(&mut self) -> ParseResult<u32> {
        self.rule(GrammarTag::Expression, |p| {
            let node = p.ast.make_non_terminal(GrammarTag::Expression)?;
            let inner = p.pratt(0)?;
            p.ast.add_to_size(node, inner.size);
            Ok(p.size_of(node))
        })
    }

    /// Parse operators binding at least as tightly as `min`.
    pub(crate) fn pratt(&mut self, min: u8) -> ParseResult<Subtree> {
        let lhs = self.primary()?;
        self.pratt_loop(lhs, min)
    }

    fn primary(&mut self) -> ParseResult<Subtree> {
        let start = self.ast.current()?;
        let size = match self.cursor.kind() {
            TokenKind::Symbol if self.cursor.is_symbol(b"(") => self.paren()?,
            TokenKind::Symbol => self.prefix()?,
            _ => match self.cursor.keyword() {
                Some(Keyword::If) => self.if_expression()?,
                Some(Keyword::Match) => self.match_expression()?,
                Some(_) => return Err(self.error("expression")),
                None => self.leaf()?,
            },
        };
        Ok(Subtree { start, size })
    }

    /// One identifier or literal token.
    fn leaf(&mut self) -> ParseResult<u32> {
        let Some(tag) = literal_tag(self.cursor.kind()) else {
            return Err(self.error("expression"));
        };
        self.ast.make_terminal(tag, self.cursor.span())?;
        self.cursor.advance();
        Ok(1)
    }

    /// `'(' Expression ')'`, newlines allowed inside.
    fn paren(&mut self) -> ParseResult<u32> {
        self.rule(GrammarTag::Paren, |p| {
            let node = p.ast.make_non_terminal(GrammarTag::Paren)?;
            p.cursor.advance();
            p.cursor.skip_newlines();
            let inner = p.pratt(0)?;
            p.ast.add_to_size(node, inner.size);
            p.cursor.skip_newlines();
            p.expect_symbol(b")", "`)`")?;
            Ok(p.size_of(node))
        })
    }

    fn prefix(&mut self) -> ParseResult<u32> {
        let power = OpKey::from_symbol(self.cursor.text()).map_or(0, OpKey::prefix_power);
        if power == 0 {
            return Err(self.error("expression"));
        }
        self.rule(GrammarTag::PrefixOperator, |p| {
            let node = p
                .ast
                .make_terminal(GrammarTag::PrefixOperator, p.cursor.span())?;
            p.cursor.advance();
            let operand = p.pratt(power)?;
            p.ast.add_to_size(node, operand.size);
            Ok(p.size_of(node))
        })
    }

    /// Extend `lhs` with postfix and infix operators of power `>= min`.
    pub(crate) fn pratt_loop(&mut self, mut lhs: Subtree, min: u8) -> ParseResult<Subtree> {
        while self.cursor.kind() == TokenKind::Symbol {
            let Some(key) = OpKey::from_symbol(self.cursor.text()) else {
                break;
            };

            let postfix = key.postfix_power();
            if postfix != 0 {
                if postfix < min {
                    break;
                }
                lhs = match key {
                    OpKey::LBracket => self.index(lhs)?,
                    OpKey::LParen => self.call(lhs)?,
                    _ => {
                        // `..` belongs to an enclosing range.
                        if self.cursor.peek_is_symbol(b".") {
                            break;
                        }
                        self.member(lhs)?
                    }
                };
                continue;
            }

            let (left, right) = key.infix_power();
            if left == 0 || left < min {
                break;
            }
            if left == right {
                return Err(self.error("operator with unambiguous associativity"));
            }
            lhs = self.infix(lhs, right)?;
        }
        Ok(lhs)
    }

    fn infix(&mut self, lhs: Subtree, right: u8) -> ParseResult<Subtree> {
        self.rule(GrammarTag::Operator, |p| {
            let span = p.cursor.span();
            p.cursor.advance();
            p.cursor.skip_newlines();
            let rhs = p.pratt(right)?;
            let size = 1 + lhs.size + rhs.size;
            p.splice(lhs, terminal(GrammarTag::Operator, span, size))
        })
    }

    /// `'[' Expression ['..' Expression] ']'`
    fn index(&mut self, lhs: Subtree) -> ParseResult<Subtree> {
        self.rule(GrammarTag::Index, |p| {
            p.cursor.advance();
            p.cursor.skip_newlines();
            let mut inner = p.pratt(0)?;
            if p.cursor.is_symbol(b".") && p.cursor.peek_is_symbol(b".") {
                inner = p.range(inner)?;
            }
            p.cursor.skip_newlines();
            p.expect_symbol(b"]", "`]`")?;
            let size = 1 + lhs.size + inner.size;
            p.splice(lhs, non_terminal(GrammarTag::Index, size))
        })
    }

    /// `lo '..' hi`; the cursor is on the first `.`.
    fn range(&mut self, lo: Subtree) -> ParseResult<Subtree> {
        self.rule(GrammarTag::Range, |p| {
            p.cursor.advance();
            p.cursor.advance();
            p.cursor.skip_newlines();
            let hi = p.pratt(0)?;
            let size = 1 + lo.size + hi.size;
            p.splice(lo, non_terminal(GrammarTag::Range, size))
        })
    }

    /// `'(' (Expression (',' Expression)*)? ')'`
    fn call(&mut self, lhs: Subtree) -> ParseResult<Subtree> {
        self.rule(GrammarTag::Call, |p| {
            p.cursor.advance();
            p.cursor.skip_newlines();
            let mut size = 1 + lhs.size;
            if !p.cursor.is_symbol(b")") {
                loop {
                    let arg = p.pratt(0)?;
                    size += arg.size;
                    p.cursor.skip_newlines();
                    if !p.cursor.is_symbol(b",") {
                        break;
                    }
                    p.cursor.advance();
                    p.cursor.skip_newlines();
                }
            }
            p.expect_symbol(b")", "`)` or `,`")?;
            p.splice(lhs, non_terminal(GrammarTag::Call, size))
        })
    }

    /// `'.' Identifier`
    fn member(&mut self, lhs: Subtree) -> ParseResult<Subtree> {
        self.rule(GrammarTag::MemberAccess, |p| {
            p.cursor.advance();
            p.identifier()?;
            let size = 1 + lhs.size + 1;
            p.splice(lhs, non_terminal(GrammarTag::MemberAccess, size))
        })
    }

    /// Insert `node` at the start of `lhs`, making it the subtree root.
    fn splice(&mut self, lhs: Subtree, node: AstNode) -> ParseResult<Subtree> {
        self.ast.insert_before(lhs.start, node)?;
        Ok(Subtree {
            start: lhs.start,
            size: node.size,
        })
    }

    /// An expression in statement position, under an `Expression` node.
    pub(crate) fn statement_expression(&mut self) -> ParseResult<u32> {
        self.rule(GrammarTag::Expression, |p| {
            let node = p.ast.make_non_terminal(GrammarTag::Expression)?;
            let is_leaf = p.cursor.keyword().is_none() && p.cursor.kind().is_literal();
            let inner = if is_leaf {
                p.assignable_chain()?
            } else {
                p.pratt(0)?
            };
            p.ast.add_to_size(node, inner.size);
            Ok(p.size_of(node))
        })
    }

    /// A leaf with member, index and call suffixes, optionally ending in an
    /// assignment or `++` / `--`. Otherwise the chain becomes the left
    /// operand of an ordinary operator expression.
    fn assignable_chain(&mut self) -> ParseResult<Subtree> {
        let start = self.ast.current()?;
        let mut lhs = Subtree {
            start,
            size: self.leaf()?,
        };

        let mut called = false;
        loop {
            if self.cursor.is_symbol(b".") && !self.cursor.peek_is_symbol(b".") {
                lhs = self.member(lhs)?;
            } else if self.cursor.is_symbol(b"[") {
                lhs = self.index(lhs)?;
            } else if self.cursor.is_symbol(b"(") {
                lhs = self.call(lhs)?;
                called = true;
            } else {
                break;
            }
        }

        let text = self.cursor.text();
        let is_symbol = self.cursor.kind() == TokenKind::Symbol;
        if is_symbol && ASSIGN_OPS.iter().any(|op| *op == text) {
            if called {
                return Err(self.error("assignable target (not a call result)"));
            }
            self.assignment(lhs)
        } else if is_symbol && (text == b"++" || text == b"--") {
            if called {
                return Err(self.error("assignable target (not a call result)"));
            }
            self.postfix_step(lhs)
        } else {
            self.pratt_loop(lhs, 0)
        }
    }

    /// `target op Expression` for `=` and the compound forms.
    fn assignment(&mut self, lhs: Subtree) -> ParseResult<Subtree> {
        self.rule(GrammarTag::Assignment, |p| {
            let span = p.cursor.span();
            p.cursor.advance();
            p.cursor.skip_newlines();
            let rhs = p.expression()?;
            let size = 1 + lhs.size + rhs;
            p.splice(lhs, terminal(GrammarTag::Assignment, span, size))
        })
    }

    /// `target ++` / `target --`
    fn postfix_step(&mut self, lhs: Subtree) -> ParseResult<Subtree> {
        self.rule(GrammarTag::PostfixOperator, |p| {
            let span = p.cursor.span();
            let size = 1 + lhs.size;
            let spliced = p.splice(lhs, terminal(GrammarTag::PostfixOperator, span, size))?;
            p.cursor.advance();
            Ok(spliced)
        })
    }
}

fn terminal(tag: GrammarTag, span: Span, size: u32) -> AstNode {
    AstNode {
        size,
        ..AstNode::terminal(tag, span)
    }
}

fn non_terminal(tag: GrammarTag, size: u32) -> AstNode {
    AstNode {
        size,
        ..AstNode::non_terminal(tag)
    }
}
