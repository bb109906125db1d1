//! Parser tests.
//!
//! - `expr`: operators, precedence, postfix chains, assignment forms
//! - `stmt`: statements, blocks, declarations, control flow
//! - `driver`: error reporting, options, observers and property tests
//!
//! Trees are compared through their S-expression rendering.

mod driver;

use vx_ir::visitor::to_sexpr;
use vx_ir::{validate, Ast};
use vx_lexer_core::{SourceBuffer, Tokens};

use crate::{parse, ParseError};

/// Parse `source`, requiring success and a well-formed tree.
fn parse_ok(source: &str) -> (SourceBuffer, Ast) {
    let buf = SourceBuffer::new(source);
    let output = parse(&buf);
    if let Some(err) = &output.error {
        panic!("{source:?} failed to parse: {err}");
    }
    validate(&output.ast).unwrap();
    assert_spans_are_tokens(&buf, &output.ast);
    (buf, output.ast)
}

/// Full S-expression of a successful parse.
fn sexpr(source: &str) -> String {
    let (buf, ast) = parse_ok(source);
    to_sexpr(&ast, buf.as_bytes())
}

/// S-expression of a single expression statement, without the
/// `Statements` / `Statement` / `Expression` wrappers.
fn expr_sexpr(source: &str) -> String {
    let full = sexpr(source);
    full.strip_prefix("(Statements (Statement (Expression ")
        .and_then(|s| s.strip_suffix(")))"))
        .unwrap_or_else(|| panic!("{source:?} is not one expression statement: {full}"))
        .to_string()
}

/// Parse `source`, requiring failure.
fn parse_err(source: &str) -> ParseError {
    let buf = SourceBuffer::new(source);
    match parse(&buf).error {
        Some(err) => err,
        None => panic!("{source:?} parsed without error"),
    }
}

/// Every terminal span covers exactly one scanned token.
fn assert_spans_are_tokens(buf: &SourceBuffer, ast: &Ast) {
    for node in ast.nodes().iter().filter(|n| n.is_terminal()) {
        let matches_token = Tokens::new(buf)
            .any(|t| t.start == node.span.start && t.len == node.span.len());
        assert!(
            matches_token,
            "{} span {} is not a token of {:?}",
            node.tag,
            node.span,
            String::from_utf8_lossy(buf.as_bytes())
        );
    }
}
