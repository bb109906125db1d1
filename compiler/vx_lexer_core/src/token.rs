//! Token type produced by the scanner.

use std::fmt;

/// Classification of a scanned token.
///
/// Keywords are not distinguished here; they scan as
/// [`Identifier`](TokenKind::Identifier) and the parser compares their text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    DecimalNumber,
    HexNumber,
    BinaryNumber,
    FloatNumber,
    /// Operator or punctuation, including newline.
    Symbol,
    CharLiteral,
    StringLiteral,
    EndOfFile,
}

impl TokenKind {
    /// Human-readable name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::DecimalNumber => "decimal number",
            Self::HexNumber => "hex number",
            Self::BinaryNumber => "binary number",
            Self::FloatNumber => "float number",
            Self::Symbol => "symbol",
            Self::CharLiteral => "char literal",
            Self::StringLiteral => "string literal",
            Self::EndOfFile => "end of file",
        }
    }

    /// Returns `true` for tokens that become a leaf node on their own.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::Identifier
                | Self::DecimalNumber
                | Self::HexNumber
                | Self::BinaryNumber
                | Self::FloatNumber
                | Self::CharLiteral
                | Self::StringLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token: byte span plus kind. Text is recovered from the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub start: u32,
    pub len: u32,
    pub kind: TokenKind,
}

const _: () = assert!(std::mem::size_of::<Token>() <= 12);

impl Token {
    #[inline]
    pub fn new(start: u32, len: u32, kind: TokenKind) -> Self {
        Token { start, len, kind }
    }

    /// One past the last byte.
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.len
    }

    /// Token text within `source` (the bytes the token was scanned from).
    pub fn text<'s>(&self, source: &'s [u8]) -> &'s [u8] {
        source
            .get(self.start as usize..self.end() as usize)
            .unwrap_or_default()
    }

    /// Returns `true` if this is the symbol `sym`.
    #[inline]
    pub fn is_symbol(&self, source: &[u8], sym: &[u8]) -> bool {
        self.kind == TokenKind::Symbol && self.text(source) == sym
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}
