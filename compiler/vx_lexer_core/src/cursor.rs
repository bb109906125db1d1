//! Copyable cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte by byte or a whole class run
//! at a time. EOF is detected when the current byte equals the sentinel
//! (`0x00`) and the position has reached the source length.
//!
//! # Interior Null Bytes
//!
//! A null at `pos < source_len` is an interior null; the scanner skips it.
//! A null at `pos >= source_len` is the sentinel (EOF).

use crate::classify::{self, CharClass};

/// Copyable cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// Copying the cursor is how callers save and restore scan positions.
///
/// # Invariant
///
/// `buf[source_len] == 0x00`, and at least [`SCAN_WINDOW`](crate::SCAN_WINDOW)
/// zero bytes follow it. Guaranteed by [`SourceBuffer`](crate::SourceBuffer).
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position, `0x00` at EOF.
    ///
    /// Positions past the padding also read as `0x00`.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(1))
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.buf.get(pos as usize).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos = self.pos.saturating_add(1);
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n);
    }

    /// Returns `true` once the cursor has reached the sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Advance past a run of bytes in `class`, a window at a time.
    ///
    /// Returns the number of bytes consumed. The sentinel belongs to no
    /// class, so the run never extends past the source.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "run ends at or before the sentinel, which is at a u32 offset"
    )]
    #[inline]
    pub fn eat_class(&mut self, class: CharClass) -> u32 {
        let rest = self.buf.get(self.pos as usize..).unwrap_or_default();
        let n = classify::run_length(rest, class) as u32;
        self.pos += n;
        n
    }

    /// Advance past the body of a delimited run (comment, string or char
    /// literal) and its closing `delim`.
    ///
    /// The cursor must sit just after the opening delimiter. A backslash
    /// consumes itself and the following byte, so `\<delim>` never closes
    /// the run. Returns `false` if the source ended before the closing
    /// delimiter; the cursor is then at EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len which fits in u32"
    )]
    pub fn skip_delimited(&mut self, delim: u8) -> bool {
        loop {
            let remaining = self
                .buf
                .get(self.pos as usize..self.source_len as usize)
                .unwrap_or_default();
            let Some(offset) = memchr::memchr2(delim, b'\\', remaining) else {
                self.pos = self.pos.max(self.source_len);
                return false;
            };
            self.pos += offset as u32;
            if self.current() == delim {
                self.pos += 1;
                return true;
            }
            // Backslash: skip it and the escaped byte.
            self.pos = (self.pos + 2).min(self.source_len);
        }
    }
}
