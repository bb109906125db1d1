//! Byte classification over fixed-size windows.
//!
//! Runs of whitespace, identifier characters and digits are the bulk of any
//! source file. Instead of testing one byte per loop iteration, the cursor
//! loads [`SCAN_WINDOW`] bytes, maps every byte through a 256-entry class
//! table and packs the per-byte verdicts into a `u16`. The first byte that
//! leaves the run is `(!mask).trailing_zeros()`.
//!
//! The loop body has no data-dependent branches, so the compiler lowers it to
//! vector compares on targets that have them; the scalar path only handles
//! the first byte of each token.
//!
//! Termination relies on the [`SourceBuffer`](crate::SourceBuffer) layout:
//! the sentinel `0x00` belongs to no class, and at least one full window of
//! zero padding follows it.

use bitflags::bitflags;

/// Number of bytes classified per step. Matches a 128-bit vector register.
pub const SCAN_WINDOW: usize = 16;

bitflags! {
    /// Byte classes known to the window classifier.
    ///
    /// A byte may belong to several classes (`'0'` is `DECIMAL`, `HEX`,
    /// `BINARY` and `ZERO`).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CharClass: u8 {
        /// Insignificant whitespace: `0x01..=0x20` except newline.
        const WHITESPACE = 1 << 0;
        /// ASCII letter (either case) or underscore.
        const IDENT_START = 1 << 1;
        /// Letter, digit or underscore.
        const IDENT_CONTINUE = 1 << 2;
        /// `0-9`
        const DECIMAL = 1 << 3;
        /// `0-9`, `a-f`, `A-F`
        const HEX = 1 << 4;
        /// `0` or `1`
        const BINARY = 1 << 5;
        /// `0`
        const ZERO = 1 << 6;
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "index is always < 256"
)]
const fn build_class_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let b = i as u8;
        let mut bits = 0u8;

        if b != 0 && b <= b' ' && b != b'\n' {
            bits |= CharClass::WHITESPACE.bits();
        }

        // Folding bit 5 maps 'A'..='Z' onto 'a'..='z' and nothing else
        // onto that range.
        let folded = b | 0x20;
        let alpha = folded >= b'a' && folded <= b'z';
        let digit = b >= b'0' && b <= b'9';

        if alpha || b == b'_' {
            bits |= CharClass::IDENT_START.bits() | CharClass::IDENT_CONTINUE.bits();
        }
        if digit {
            bits |= CharClass::IDENT_CONTINUE.bits() | CharClass::DECIMAL.bits();
        }
        if digit || (folded >= b'a' && folded <= b'f') {
            bits |= CharClass::HEX.bits();
        }
        if b == b'0' || b == b'1' {
            bits |= CharClass::BINARY.bits();
        }
        if b == b'0' {
            bits |= CharClass::ZERO.bits();
        }

        table[i] = bits;
        i += 1;
    }
    table
}

static BYTE_CLASSES: [u8; 256] = build_class_table();

/// Returns `true` if `byte` belongs to any class in `class`.
#[inline]
pub fn is_class(byte: u8, class: CharClass) -> bool {
    BYTE_CLASSES[usize::from(byte)] & class.bits() != 0
}

/// Classify a whole window: bit `i` is set when `window[i]` is in `class`.
#[inline]
pub fn window_mask(window: &[u8; SCAN_WINDOW], class: CharClass) -> u16 {
    let bits = class.bits();
    let mut mask = 0u16;
    for (i, &byte) in window.iter().enumerate() {
        mask |= u16::from(BYTE_CLASSES[usize::from(byte)] & bits != 0) << i;
    }
    mask
}

/// Length of the run of `class` bytes at the start of `bytes`.
///
/// Consumes whole windows while every byte matches. A tail shorter than a
/// window (only possible when `bytes` is not sentinel padded) falls back to
/// the scalar loop.
#[inline]
pub fn run_length(bytes: &[u8], class: CharClass) -> usize {
    let mut offset = 0;
    while let Some(window) = bytes
        .get(offset..)
        .and_then(|rest| rest.first_chunk::<SCAN_WINDOW>())
    {
        let failing = !window_mask(window, class);
        if failing != 0 {
            return offset + failing.trailing_zeros() as usize;
        }
        offset += SCAN_WINDOW;
    }
    offset + scalar_run_length(bytes.get(offset..).unwrap_or_default(), class)
}

/// Byte-at-a-time run length. Reference for [`run_length`].
#[inline]
pub fn scalar_run_length(bytes: &[u8], class: CharClass) -> usize {
    bytes.iter().take_while(|&&b| is_class(b, class)).count()
}
