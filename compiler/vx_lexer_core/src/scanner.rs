//! Token scanner: `(Cursor) -> (Token, Cursor)`.
//!
//! The scanner is a pure function of the cursor value. Callers that need
//! lookahead simply keep the old cursor; nothing is shared or mutated.
//!
//! # Design
//!
//! Insignificant whitespace is skipped a window at a time, then the first
//! byte dispatches to a focused routine. Identifier and digit runs are
//! consumed with the window classifier; comment and literal bodies jump to
//! the next delimiter with `memchr2`.
//!
//! Comments and unrecognised bytes produce no token: the scanner loops until
//! it has something to return, so every call yields exactly one token.

use crate::classify::{is_class, CharClass};
use crate::cursor::Cursor;
use crate::source_buffer::SourceBuffer;
use crate::token::{Token, TokenKind};

/// Scan the next token starting at `cursor`.
///
/// Returns the token and the cursor positioned just after it. At end of
/// input returns a zero-length [`TokenKind::EndOfFile`] token; calling again
/// with the returned cursor yields the same token.
pub fn next_token(cursor: Cursor<'_>) -> (Token, Cursor<'_>) {
    let mut cursor = cursor;
    loop {
        cursor.eat_class(CharClass::WHITESPACE);
        let start = cursor.pos();
        if cursor.is_eof() {
            let end = cursor.source_len();
            return (Token::new(end, 0, TokenKind::EndOfFile), cursor);
        }

        let byte = cursor.current();
        let kind = match byte {
            b'(' | b')' | b'{' | b'}' | b'[' | b']' | b'.' | b',' | b';' | b':' | b'~'
            | b'\n' => {
                cursor.advance();
                TokenKind::Symbol
            }
            b'=' | b'!' | b'*' | b'/' | b'%' | b'^' => {
                cursor.advance_n(if cursor.peek() == b'=' { 2 } else { 1 });
                TokenKind::Symbol
            }
            b'|' | b'&' | b'+' | b'-' | b'<' | b'>' => {
                let next = cursor.peek();
                cursor.advance_n(if next == byte || next == b'=' { 2 } else { 1 });
                TokenKind::Symbol
            }
            b'#' => {
                cursor.advance();
                cursor.skip_delimited(b'#');
                continue;
            }
            b'"' => {
                cursor.advance();
                cursor.skip_delimited(b'"');
                TokenKind::StringLiteral
            }
            b'\'' => {
                cursor.advance();
                cursor.skip_delimited(b'\'');
                TokenKind::CharLiteral
            }
            b'0'..=b'9' => number(&mut cursor),
            _ if is_class(byte, CharClass::IDENT_START) => {
                cursor.eat_class(CharClass::IDENT_CONTINUE);
                TokenKind::Identifier
            }
            _ => {
                tracing::trace!(pos = start, byte, "skipping unrecognised byte");
                cursor.advance();
                continue;
            }
        };

        let len = cursor.pos() - start;
        return (Token::new(start, len, kind), cursor);
    }
}

/// Numeric literal. The cursor is on the first digit.
fn number(cursor: &mut Cursor<'_>) -> TokenKind {
    if cursor.current() == b'0' {
        cursor.eat_class(CharClass::ZERO);
        match cursor.current() {
            b'x' | b'X' => {
                cursor.advance();
                cursor.eat_class(CharClass::HEX);
                return TokenKind::HexNumber;
            }
            b'b' | b'B' => {
                cursor.advance();
                cursor.eat_class(CharClass::BINARY);
                return TokenKind::BinaryNumber;
            }
            b'1'..=b'9' => {}
            // A zero run never takes a fraction.
            _ => return TokenKind::DecimalNumber,
        }
    }
    cursor.eat_class(CharClass::DECIMAL);
    fraction(cursor)
}

/// Optional `.digits` suffix. The dot is only taken when a digit follows.
fn fraction(cursor: &mut Cursor<'_>) -> TokenKind {
    if cursor.current() != b'.' {
        return TokenKind::DecimalNumber;
    }
    let mut ahead = *cursor;
    ahead.advance();
    if ahead.eat_class(CharClass::DECIMAL) == 0 {
        return TokenKind::DecimalNumber;
    }
    *cursor = ahead;
    TokenKind::FloatNumber
}

/// Iterator over the tokens of a buffer, excluding the final
/// [`TokenKind::EndOfFile`].
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    cursor: Cursor<'a>,
    done: bool,
}

impl<'a> Tokens<'a> {
    pub fn new(buf: &'a SourceBuffer) -> Self {
        Tokens {
            cursor: buf.cursor(),
            done: false,
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let (token, cursor) = next_token(self.cursor);
        if token.is_eof() {
            self.done = true;
            return None;
        }
        self.cursor = cursor;
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
