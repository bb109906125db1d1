//! Parse error types.
//!
//! The parser stops at the first violated rule. The error records the token
//! it was looking at and a short description of what the rule wanted there.

use std::fmt;

use thiserror::Error;
use vx_ir::{AstError, Span};
use vx_lexer_core::{Token, TokenKind};

/// The token at which recognition failed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ErrorToken {
    pub span: Span,
    pub kind: TokenKind,
}

impl From<Token> for ErrorToken {
    fn from(token: Token) -> Self {
        ErrorToken {
            span: Span::from_start_len(token.start, token.len),
            kind: token.kind,
        }
    }
}

impl fmt::Display for ErrorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}

/// Why a parse stopped.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    /// A grammar rule did not match the current token.
    #[error("expected {expected}, found {found}")]
    Syntax {
        found: ErrorToken,
        expected: &'static str,
    },
    /// The tree arena could not grow.
    #[error("syntax tree allocation failed")]
    OutOfMemory(#[from] AstError),
}

impl ParseError {
    /// The offending token, for syntax errors.
    pub fn found(&self) -> Option<ErrorToken> {
        match self {
            ParseError::Syntax { found, .. } => Some(*found),
            ParseError::OutOfMemory(_) => None,
        }
    }

    pub fn span(&self) -> Option<Span> {
        self.found().map(|t| t.span)
    }

    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, ParseError::OutOfMemory(_))
    }
}
