//! Statement lists, blocks and simple statements.

use vx_ir::GrammarTag;

use crate::keyword::Keyword;
use crate::{ParseObserver, ParseResult, Parser};

impl<O: ParseObserver> Parser<'_, O> {
    /// `Statement ((';' | '\n')+ Statement)*`, stopping before `}` or EOF.
    pub(crate) fn statements(&mut self) -> ParseResult<u32> {
        self.rule(GrammarTag::Statements, |p| {
            let node = p.ast.make_non_terminal(GrammarTag::Statements)?;
            loop {
                p.cursor.skip_separators();
                if p.cursor.is_eof() || p.cursor.is_symbol(b"}") {
                    break;
                }
                let size = p.statement()?;
                p.ast.add_to_size(node, size);
                if !p.cursor.is_terminator() {
                    return Err(p.error("`;` or newline after statement"));
                }
            }
            Ok(p.size_of(node))
        })
    }

    /// `'{' Statements? '}'`
    pub(crate) fn block(&mut self) -> ParseResult<u32> {
        self.rule(GrammarTag::Block, |p| {
            if !p.cursor.is_symbol(b"{") {
                return Err(p.error("`{`"));
            }
            let node = p.ast.make_non_terminal(GrammarTag::Block)?;
            p.cursor.advance();
            p.cursor.skip_separators();
            if p.cursor.is_symbol(b"}") {
                p.cursor.advance();
                return Ok(1);
            }
            let size = p.statements()?;
            p.ast.add_to_size(node, size);
            p.expect_symbol(b"}", "`}`")?;
            Ok(p.size_of(node))
        })
    }

    /// One statement, dispatched on its leading keyword.
    pub(crate) fn statement(&mut self) -> ParseResult<u32> {
        self.rule(GrammarTag::Statement, |p| {
            let node = p.ast.make_non_terminal(GrammarTag::Statement)?;
            let size = match p.cursor.keyword() {
                Some(Keyword::If) => p.if_expression()?,
                Some(Keyword::Match) => p.match_expression()?,
                Some(kw) if kw.starts_declaration() => p.declaration()?,
                Some(Keyword::Loop) => p.loop_statement()?,
                Some(kw) if kw.is_jump() => p.jump_statement()?,
                Some(Keyword::Import) => p.import_statement()?,
                _ => p.statement_expression()?,
            };
            p.ast.add_to_size(node, size);
            Ok(p.size_of(node))
        })
    }

    /// `('break' | 'continue') [Label] Expression` or
    /// `('return' | 'yield') Expression`.
    ///
    /// The first byte of the keyword picks the form. An identifier after
    /// `break` / `continue` is a label only when an operand token follows
    /// it; otherwise it starts the expression.
    fn jump_statement(&mut self) -> ParseResult<u32> {
        self.rule(GrammarTag::JumpStatement, |p| {
            let keyword = p.cursor.text().first().copied();
            let node = p
                .ast
                .make_terminal(GrammarTag::JumpStatement, p.cursor.span())?;
            p.cursor.advance();
            if matches!(keyword, Some(b'b' | b'c'))
                && p.cursor.is_plain_identifier()
                && p.cursor.peek().kind.is_literal()
            {
                p.identifier()?;
                p.ast.add_to_size(node, 1);
            }
            let size = p.expression()?;
            p.ast.add_to_size(node, size);
            Ok(p.size_of(node))
        })
    }

    /// `loop Block [while Expression]`, `loop while Expression Block`, or
    /// `loop Type`.
    ///
    /// The last form is a header placeholder with no iteration meaning.
    fn loop_statement(&mut self) -> ParseResult<u32> {
        self.rule(GrammarTag::LoopStatement, |p| {
            let node = p.ast.make_non_terminal(GrammarTag::LoopStatement)?;
            p.cursor.advance();

            if p.cursor.is_symbol(b"{") {
                let size = p.block()?;
                p.ast.add_to_size(node, size);
                // Post-condition only on the same line as the closing brace.
                if p.cursor.keyword() == Some(Keyword::While) {
                    p.cursor.advance();
                    let size = p.expression()?;
                    p.ast.add_to_size(node, size);
                }
            } else if p.cursor.keyword() == Some(Keyword::While) {
                p.cursor.advance();
                let size = p.expression()?;
                p.ast.add_to_size(node, size);
                let size = p.block()?;
                p.ast.add_to_size(node, size);
            } else {
                let size = p.type_()?;
                p.ast.add_to_size(node, size);
            }
            Ok(p.size_of(node))
        })
    }

    /// `import Identifier ('.' Identifier)*`
    fn import_statement(&mut self) -> ParseResult<u32> {
        self.rule(GrammarTag::ImportStatement, |p| {
            let node = p.ast.make_non_terminal(GrammarTag::ImportStatement)?;
            p.cursor.advance();
            p.identifier()?;
            p.ast.add_to_size(node, 1);
            while p.cursor.is_symbol(b".") {
                p.cursor.advance();
                p.identifier()?;
                p.ast.add_to_size(node, 1);
            }
            Ok(p.size_of(node))
        })
    }
}
