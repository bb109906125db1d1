//! Low-level scanner for vx source text.
//!
//! This crate turns a sentinel-padded byte buffer into a stream of
//! classified tokens. It knows nothing about keywords or grammar: keyword
//! recognition happens in the parser by exact text comparison.
//!
//! # Layers
//!
//! - [`SourceBuffer`]: owned source bytes + `0x00` sentinel + zero padding
//!   wide enough for one full scan window past the end.
//! - [`classify`]: byte class table and the 16-byte window classifier that
//!   turns a run of same-class bytes into a bitmask.
//! - [`Cursor`]: `Copy` position over the buffer. Copying it is the
//!   backtracking mechanism.
//! - [`next_token`]: `(Cursor) -> (Token, Cursor)`. Pure function of the
//!   cursor value; never mutates shared state.
//!
//! # Example
//!
//! ```
//! use vx_lexer_core::{SourceBuffer, TokenKind, Tokens};
//!
//! let buf = SourceBuffer::new("val x = 0x1F");
//! let kinds: Vec<TokenKind> = Tokens::new(&buf).map(|t| t.kind).collect();
//! assert_eq!(kinds.last(), Some(&TokenKind::HexNumber));
//! ```

pub mod classify;
mod cursor;
mod scanner;
mod source_buffer;
mod token;

pub use classify::{CharClass, SCAN_WINDOW};
pub use cursor::Cursor;
pub use scanner::{next_token, Tokens};
pub use source_buffer::SourceBuffer;
pub use token::{Token, TokenKind};
