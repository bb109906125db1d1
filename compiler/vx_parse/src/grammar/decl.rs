//! Declarations.
//!
//! ```text
//! Declaration         = Publicity (FunctionDeclaration | VariableDeclaration)
//! Publicity           = 'public' | 'private' | (nothing: implicit private)
//! FunctionDeclaration = 'def' Identifier ['='] '(' Types? ')' Block
//! VariableDeclaration = ('var' | 'val') Type '=' Expression
//! Types               = Type (',' Type)*
//! Type                = Identifier [Identifier]
//! ```

use vx_ir::GrammarTag;

use crate::keyword::Keyword;
use crate::{ParseObserver, ParseResult, Parser};

impl<O: ParseObserver> Parser<'_, O> {
    pub(crate) fn declaration(&mut self) -> ParseResult<u32> {
        self.rule(GrammarTag::Declaration, |p| {
            let node = p.ast.make_non_terminal(GrammarTag::Declaration)?;
            let size = p.publicity()?;
            p.ast.add_to_size(node, size);

            let size = match p.cursor.keyword() {
                Some(Keyword::Def) => p.function_declaration()?,
                Some(Keyword::Var | Keyword::Val) => p.variable_declaration()?,
                _ => return Err(p.error("`def`, `var` or `val`")),
            };
            p.ast.add_to_size(node, size);
            Ok(p.size_of(node))
        })
    }

    /// Explicit keywords become terminals; a missing one is an implicit
    /// `PublicityPrivate` non-terminal.
    fn publicity(&mut self) -> ParseResult<u32> {
        let tag = match self.cursor.keyword() {
            Some(Keyword::Public) => GrammarTag::PublicityPublic,
            Some(Keyword::Private) => GrammarTag::PublicityPrivate,
            _ => {
                self.ast.make_non_terminal(GrammarTag::PublicityPrivate)?;
                return Ok(1);
            }
        };
        self.ast.make_terminal(tag, self.cursor.span())?;
        self.cursor.advance();
        Ok(1)
    }

    fn function_declaration(&mut self) -> ParseResult<u32> {
        self.rule(GrammarTag::FunctionDeclaration, |p| {
            let node = p.ast.make_non_terminal(GrammarTag::FunctionDeclaration)?;
            p.cursor.advance();
            p.identifier()?;
            p.ast.add_to_size(node, 1);

            let size = if p.cursor.is_symbol(b"=") {
                p.cursor.advance();
                p.function_body(GrammarTag::Lambda)?
            } else {
                p.function_body(GrammarTag::Function)?
            };
            p.ast.add_to_size(node, size);
            Ok(p.size_of(node))
        })
    }

    /// `'(' Types? ')' Block` under a `Function` or `Lambda` node.
    fn function_body(&mut self, tag: GrammarTag) -> ParseResult<u32> {
        self.rule(tag, |p| {
            let node = p.ast.make_non_terminal(tag)?;
            p.expect_symbol(b"(", "`(`")?;
            p.cursor.skip_newlines();
            if !p.cursor.is_symbol(b")") {
                let size = p.types()?;
                p.ast.add_to_size(node, size);
                p.cursor.skip_newlines();
            }
            p.expect_symbol(b")", "`)`")?;
            let size = p.block()?;
            p.ast.add_to_size(node, size);
            Ok(p.size_of(node))
        })
    }

    /// The keyword token is the node's span.
    fn variable_declaration(&mut self) -> ParseResult<u32> {
        self.rule(GrammarTag::VariableDeclaration, |p| {
            let node = p
                .ast
                .make_terminal(GrammarTag::VariableDeclaration, p.cursor.span())?;
            p.cursor.advance();
            let size = p.type_()?;
            p.ast.add_to_size(node, size);
            p.expect_symbol(b"=", "`=`")?;
            p.cursor.skip_newlines();
            let size = p.expression()?;
            p.ast.add_to_size(node, size);
            Ok(p.size_of(node))
        })
    }

    fn types(&mut self) -> ParseResult<u32> {
        self.rule(GrammarTag::Types, |p| {
            let node = p.ast.make_non_terminal(GrammarTag::Types)?;
            loop {
                let size = p.type_()?;
                p.ast.add_to_size(node, size);
                if !p.cursor.is_symbol(b",") {
                    break;
                }
                p.cursor.advance();
                p.cursor.skip_newlines();
            }
            Ok(p.size_of(node))
        })
    }

    /// `Identifier [Identifier]`: a type name and an optional binding name.
    pub(crate) fn type_(&mut self) -> ParseResult<u32> {
        self.rule(GrammarTag::Type, |p| {
            let node = p.ast.make_non_terminal(GrammarTag::Type)?;
            p.identifier()?;
            p.ast.add_to_size(node, 1);
            if p.cursor.is_plain_identifier() {
                p.identifier()?;
                p.ast.add_to_size(node, 1);
            }
            Ok(p.size_of(node))
        })
    }

    /// A non-keyword identifier leaf.
    pub(crate) fn identifier(&mut self) -> ParseResult<()> {
        if !self.cursor.is_plain_identifier() {
            return Err(self.error("identifier"));
        }
        self.ast
            .make_terminal(GrammarTag::Identifier, self.cursor.span())?;
        self.cursor.advance();
        Ok(())
    }
}
