//! Token cursor for the parser.
//!
//! Holds the current token plus the lexer cursor positioned just after it.
//! The whole thing is `Copy`: a snapshot is a plain copy and restoring is an
//! assignment. Peeking scans from a copy of the lexer cursor, so it never
//! changes parser state.

use tracing::trace;
use vx_ir::Span;
use vx_lexer_core::{next_token, Cursor, SourceBuffer, Token, TokenKind};

use crate::keyword::Keyword;

/// Copyable position in the token stream.
#[derive(Clone, Copy, Debug)]
pub struct TokenCursor<'a> {
    source: &'a [u8],
    token: Token,
    /// Lexer position just after `token`.
    rest: Cursor<'a>,
}

impl<'a> TokenCursor<'a> {
    /// Position on the first token of `buf`.
    pub fn new(buf: &'a SourceBuffer) -> Self {
        let (token, rest) = next_token(buf.cursor());
        TokenCursor {
            source: buf.as_bytes(),
            token,
            rest,
        }
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.token
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.token.kind
    }

    #[inline]
    pub fn span(&self) -> Span {
        Span::from_start_len(self.token.start, self.token.len)
    }

    /// Source text of the current token.
    #[inline]
    pub fn text(&self) -> &'a [u8] {
        self.token.text(self.source)
    }

    /// Consume the current token and return it.
    pub fn advance(&mut self) -> Token {
        let consumed = self.token;
        let (token, rest) = next_token(self.rest);
        trace!(kind = %token.kind, start = token.start, "advance");
        self.token = token;
        self.rest = rest;
        consumed
    }

    /// The token after the current one, without moving.
    pub fn peek(&self) -> Token {
        next_token(self.rest).0
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.token.is_eof()
    }

    /// Returns `true` if the current token is the symbol `sym`.
    #[inline]
    pub fn is_symbol(&self, sym: &[u8]) -> bool {
        self.token.is_symbol(self.source, sym)
    }

    /// Returns `true` if the token after the current one is the symbol `sym`.
    pub fn peek_is_symbol(&self, sym: &[u8]) -> bool {
        self.peek().is_symbol(self.source, sym)
    }

    #[inline]
    pub fn is_newline(&self) -> bool {
        self.is_symbol(b"\n")
    }

    /// `;` or newline.
    #[inline]
    pub fn is_separator(&self) -> bool {
        self.is_symbol(b";") || self.is_newline()
    }

    /// Separator, `}` or end of file: nothing more belongs to the statement.
    pub fn is_terminator(&self) -> bool {
        self.is_separator() || self.is_symbol(b"}") || self.is_eof()
    }

    pub fn skip_newlines(&mut self) {
        while self.is_newline() {
            self.advance();
        }
    }

    pub fn skip_separators(&mut self) {
        while self.is_separator() {
            self.advance();
        }
    }

    /// Keyword spelled by the current token, if any.
    pub fn keyword(&self) -> Option<Keyword> {
        if self.kind() == TokenKind::Identifier {
            Keyword::from_text(self.text())
        } else {
            None
        }
    }

    /// Returns `true` for an identifier that is not a keyword.
    pub fn is_plain_identifier(&self) -> bool {
        self.kind() == TokenKind::Identifier && self.keyword().is_none()
    }

    /// Save the current position.
    #[inline]
    pub fn snapshot(&self) -> Self {
        *self
    }

    /// Return to a saved position.
    #[inline]
    pub fn restore(&mut self, snapshot: Self) {
        *self = snapshot;
    }
}
