//! Terminal rendering of parse errors.
//!
//! ```text
//! error: expected identifier, found `{`
//!  --> main.vx:1:10
//!   |
//! 1 | def foo( { }
//!   |          ^
//! ```

use std::fmt::Write as _;
use std::path::Path;

use vx_ir::Span;
use vx_lexer_core::{SourceBuffer, TokenKind};
use vx_parse::{ErrorToken, ParseError};

/// 1-based line and byte column of `offset`.
///
/// Offsets past the end are clamped to the end of `source`.
pub fn line_col(source: &[u8], offset: u32) -> (usize, usize) {
    let offset = (offset as usize).min(source.len());
    let before = &source[..offset];
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
    (line, offset - line_start + 1)
}

/// Text of the line containing `offset`, without its line terminator.
fn line_text(source: &[u8], offset: u32) -> &[u8] {
    let offset = (offset as usize).min(source.len());
    let start = source[..offset]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    let end = source[offset..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(source.len(), |i| offset + i);
    let line = &source[start..end];
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// How the offending token reads in a message.
fn describe(source: &[u8], found: ErrorToken) -> String {
    let text = source.get(found.span.to_range()).unwrap_or_default();
    match found.kind {
        TokenKind::EndOfFile => "end of file".to_string(),
        TokenKind::Symbol if text == b"\n" => "newline".to_string(),
        _ => format!("`{}`", String::from_utf8_lossy(text)),
    }
}

/// Render `error` for `path` as a multi-line diagnostic.
pub fn render_diagnostic(path: &Path, source: &[u8], error: &ParseError) -> String {
    let (expected, found) = match error {
        ParseError::Syntax { found, expected } => (*expected, *found),
        ParseError::OutOfMemory(_) => {
            return format!("error: {error}\n --> {}\n", path.display());
        }
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "error: expected {expected}, found {}",
        describe(source, found)
    );

    let (line, col) = line_col(source, found.span.start);
    let _ = writeln!(out, " --> {}:{line}:{col}", path.display());

    let text = String::from_utf8_lossy(line_text(source, found.span.start));
    let gutter = " ".repeat(line.to_string().len());
    let _ = writeln!(out, "{gutter} |");
    let _ = writeln!(out, "{line} | {text}");
    let _ = writeln!(
        out,
        "{gutter} | {}{}",
        " ".repeat(col - 1),
        "^".repeat(caret_width(source, found.span, col, text.len()))
    );
    out
}

/// Caret count: the token's width, cut at the end of its line, at least 1.
fn caret_width(source: &[u8], span: Span, col: usize, line_len: usize) -> usize {
    let newline = source
        .get(span.to_range())
        .and_then(|t| t.iter().position(|&b| b == b'\n'));
    let width = newline.unwrap_or(span.len() as usize);
    let room = (line_len + 1).saturating_sub(col);
    width.min(room).max(1)
}

/// One warning line per null byte in the source.
pub fn null_byte_warnings<'a>(
    path: &'a Path,
    buf: &'a SourceBuffer,
) -> impl Iterator<Item = String> + 'a {
    buf.interior_nulls().iter().map(move |&offset| {
        let (line, col) = line_col(buf.as_bytes(), offset);
        format!(
            "warning: {}:{line}:{col}: null byte ignored",
            path.display()
        )
    })
}
