//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content
//! followed by at least [`SCAN_WINDOW`] more zero bytes. The window
//! classifier loads [`SCAN_WINDOW`] bytes at a time starting anywhere up to
//! and including the sentinel, so every such load stays inside the
//! allocation. The total size is rounded up to a 64-byte boundary.
//!
//! Interior null bytes are legal input for the scanner (they are skipped),
//! but they are recorded here so the outer layer can warn about them.

use crate::classify::SCAN_WINDOW;
use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     at least SCAN_WINDOW bytes, then rounded to 64
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Byte offsets of `0x00` bytes inside the source content.
    interior_nulls: Vec<u32>,
}

impl SourceBuffer {
    /// Create a buffer from UTF-8 source text.
    pub fn new(source: &str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Create a buffer from raw bytes.
    ///
    /// The scanner is byte-oriented, so the content does not have to be
    /// valid UTF-8. Sources larger than `u32::MAX` bytes are truncated to
    /// `u32::MAX`; the file loader rejects such inputs before they get here.
    pub fn from_bytes(source: &[u8]) -> Self {
        let source = &source[..source.len().min(u32::MAX as usize)];
        let source_len = source.len();

        // Sentinel + one full window, rounded up to the next cache line.
        let padded_len = (source_len + 1 + SCAN_WINDOW + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Zero-filled, so the sentinel and padding need no extra writes.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source);

        let interior_nulls = memchr::memchr_iter(0, source)
            .filter_map(|pos| u32::try_from(pos).ok())
            .collect();

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            interior_nulls,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Source text in `start..end`. Out-of-range requests yield an empty slice.
    pub fn slice(&self, start: u32, end: u32) -> &[u8] {
        self.as_bytes()
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Offsets of null bytes found inside the source content.
    pub fn interior_nulls(&self) -> &[u32] {
        &self.interior_nulls
    }
}
