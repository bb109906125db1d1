//! Command handlers for the `vx` binary.
//!
//! File commands return `Ok(true)` when the source is well formed,
//! `Ok(false)` after printing a diagnostic, and `Err` for problems outside
//! the language (unreadable files, closed output).

use std::io::{self, Write};
use std::path::Path;

use vx_ir::visitor::walk;
use vx_ir::{Ast, AstNode, NodeId};
use vx_lexer_core::{SourceBuffer, Tokens};
use vx_parse::{parse, parse_with_observer, ParseOptions, ParseOutput, TracingObserver};

use crate::{null_byte_warnings, read_source, render_diagnostic, CliError};

/// Write one line per token: kind, byte range and quoted text.
pub fn write_tokens(buf: &SourceBuffer, out: &mut impl Write) -> io::Result<()> {
    for token in Tokens::new(buf) {
        let text = String::from_utf8_lossy(buf.slice(token.start, token.end()));
        writeln!(
            out,
            "{:<15} {:>5}..{:<5} {text:?}",
            token.kind.name(),
            token.start,
            token.end()
        )?;
    }
    Ok(())
}

/// Write the tree as an outline, two spaces of indent per level.
///
/// Terminals show their source text and span.
pub fn write_outline(ast: &Ast, source: &[u8], out: &mut impl Write) -> io::Result<()> {
    let mut result = Ok(());
    walk(ast, &mut |_id: NodeId, node: &AstNode, depth: usize| {
        if result.is_err() {
            return;
        }
        let indent = "  ".repeat(depth);
        result = if node.is_terminal() {
            let text = source.get(node.span.to_range()).unwrap_or_default();
            writeln!(
                out,
                "{indent}{} {:?} {}",
                node.tag,
                String::from_utf8_lossy(text),
                node.span
            )
        } else {
            writeln!(out, "{indent}{}", node.tag)
        };
    });
    result
}

/// Load `path` and print its null-byte warnings.
fn load(path: &Path) -> Result<SourceBuffer, CliError> {
    let buf = read_source(path)?;
    for warning in null_byte_warnings(path, &buf) {
        eprintln!("{warning}");
    }
    Ok(buf)
}

/// Print the diagnostic for a failed parse. Returns `true` on success.
fn report(path: &Path, buf: &SourceBuffer, output: &ParseOutput) -> bool {
    match &output.error {
        None => true,
        Some(err) => {
            eprint!("{}", render_diagnostic(path, buf.as_bytes(), err));
            false
        }
    }
}

/// `vx lex <file>`
pub fn lex_file(path: &Path) -> Result<bool, CliError> {
    let buf = load(path)?;
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_tokens(&buf, &mut out)?;
    out.flush()?;
    Ok(true)
}

/// `vx parse <file> [--trace]`
pub fn parse_file(path: &Path, trace: bool) -> Result<bool, CliError> {
    let buf = load(path)?;
    let output = if trace {
        parse_with_observer(&buf, &ParseOptions::default(), TracingObserver::new())
    } else {
        parse(&buf)
    };
    if !report(path, &buf, &output) {
        return Ok(false);
    }
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_outline(&output.ast, buf.as_bytes(), &mut out)?;
    out.flush()?;
    Ok(true)
}

/// `vx check <file>`: parse and report, print nothing on success.
pub fn check_file(path: &Path) -> Result<bool, CliError> {
    let buf = load(path)?;
    let output = parse(&buf);
    Ok(report(path, &buf, &output))
}

#[cfg(test)]
mod tests;
