//! Parser for vx.
//!
//! Recursive descent for statements and declarations, a Pratt engine for
//! operator expressions, and one flat [`Ast`] as output.
//!
//! # Conventions
//!
//! Every grammar routine fills the arena's current slot with its own node,
//! then grows that node's size by the sizes its child routines report, and
//! finally returns its own size to the caller. Children are always appended
//! right after their parent, so the running sum is the descendant count.
//!
//! Errors propagate with `?`: the first rule that fails aborts every caller,
//! and nothing touches the arena afterwards.
//!
//! # Example
//!
//! ```
//! use vx_lexer_core::SourceBuffer;
//!
//! let buf = SourceBuffer::new("val Int x = 1 + 2 * 3\n");
//! let output = vx_parse::parse(&buf);
//! assert!(output.is_ok());
//! assert!(vx_ir::validate(&output.ast).is_ok());
//! ```

mod binding_power;
mod cursor;
mod error;
mod grammar;
mod keyword;
mod observer;
mod stack;

pub use binding_power::OpKey;
pub use cursor::TokenCursor;
pub use error::{ErrorToken, ParseError};
pub use keyword::Keyword;
pub use observer::{NoopObserver, ParseObserver, TracingObserver};

use tracing::debug;
use vx_ir::{Ast, GrammarTag, NodeId};
use vx_lexer_core::SourceBuffer;

use crate::stack::ensure_sufficient_stack;

pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// Tuning knobs for a parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Nodes to preallocate in the arena.
    pub initial_capacity: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            initial_capacity: Ast::DEFAULT_CAPACITY,
        }
    }
}

/// Result of parsing a buffer.
///
/// The tree is returned even on failure; it then holds whatever was built
/// before the error and should only be used for diagnostics.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub ast: Ast,
    pub error: Option<ParseError>,
}

impl ParseOutput {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn has_errors(&self) -> bool {
        self.error.is_some()
    }

    /// The tree on success, the error otherwise.
    pub fn into_result(self) -> Result<Ast, ParseError> {
        match self.error {
            None => Ok(self.ast),
            Some(err) => Err(err),
        }
    }
}

/// Parse a whole source buffer.
pub fn parse(buf: &SourceBuffer) -> ParseOutput {
    parse_with_options(buf, &ParseOptions::default())
}

pub fn parse_with_options(buf: &SourceBuffer, options: &ParseOptions) -> ParseOutput {
    parse_with_observer(buf, options, NoopObserver)
}

/// Parse with a rule observer attached.
#[tracing::instrument(level = "debug", skip_all, fields(len = buf.len()))]
pub fn parse_with_observer<O: ParseObserver>(
    buf: &SourceBuffer,
    options: &ParseOptions,
    observer: O,
) -> ParseOutput {
    let mut parser = Parser::new(buf, options, observer);
    let result = parser.program();
    let ast = parser.into_ast();
    match &result {
        Ok(()) => debug!(nodes = ast.len(), "parse succeeded"),
        Err(err) => debug!(nodes = ast.len(), error = %err, "parse failed"),
    }
    ParseOutput {
        ast,
        error: result.err(),
    }
}

/// A built subtree: where it starts and how many nodes it spans.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Subtree {
    pub start: NodeId,
    pub size: u32,
}

/// Parser state.
pub(crate) struct Parser<'a, O: ParseObserver = NoopObserver> {
    cursor: TokenCursor<'a>,
    ast: Ast,
    observer: O,
}

impl<'a, O: ParseObserver> Parser<'a, O> {
    pub(crate) fn new(buf: &'a SourceBuffer, options: &ParseOptions, observer: O) -> Self {
        Parser {
            cursor: TokenCursor::new(buf),
            ast: Ast::with_capacity(options.initial_capacity),
            observer,
        }
    }

    pub(crate) fn into_ast(self) -> Ast {
        self.ast
    }

    /// Run `f` as grammar rule `tag`, reporting it to the observer.
    #[inline]
    fn rule<T>(
        &mut self,
        tag: GrammarTag,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        self.observer.enter(tag, self.cursor.current().start);
        let result = ensure_sufficient_stack(|| f(self));
        self.observer.exit(tag, result.is_ok());
        result
    }

    /// Syntax error at the current token.
    fn error(&self, expected: &'static str) -> ParseError {
        ParseError::Syntax {
            found: self.cursor.current().into(),
            expected,
        }
    }

    /// Consume the symbol `sym` or fail with `expected`.
    fn expect_symbol(&mut self, sym: &[u8], expected: &'static str) -> ParseResult<()> {
        if self.cursor.is_symbol(sym) {
            self.cursor.advance();
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    /// Current size of `id`.
    #[inline]
    fn size_of(&self, id: NodeId) -> u32 {
        self.ast.get(id).map_or(0, |node| node.size)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
