//! Parse driver: outputs, options, observers and properties over generated
//! input.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use vx_ir::{validate, GrammarTag, Span};
use vx_lexer_core::{SourceBuffer, TokenKind};

use super::{assert_spans_are_tokens, parse_ok};
use crate::{
    parse, parse_with_observer, parse_with_options, Keyword, ParseError, ParseObserver,
    ParseOptions, TracingObserver,
};

#[test]
fn output_on_success() {
    let buf = SourceBuffer::new("val x = 1\n");
    let output = parse(&buf);
    assert!(output.is_ok());
    assert!(!output.has_errors());
    let ast = output.into_result().unwrap();
    assert_eq!(ast.nodes()[0].tag, GrammarTag::Statements);
    assert_eq!(ast.nodes()[0].size as usize, ast.len());
}

#[test]
fn output_on_failure_keeps_partial_tree() {
    let buf = SourceBuffer::new("val x = \n");
    let output = parse(&buf);
    assert!(output.has_errors());
    assert!(!output.ast.is_empty());
    let err = output.into_result().unwrap_err();
    assert_eq!(
        err,
        ParseError::Syntax {
            found: crate::ErrorToken {
                span: Span::new(8, 9),
                kind: TokenKind::Symbol,
            },
            expected: "expression",
        }
    );
}

#[test]
fn error_message_names_token() {
    let buf = SourceBuffer::new("def foo( { }");
    let err = parse(&buf).error.unwrap();
    assert_eq!(err.to_string(), "expected identifier, found symbol at 9..10");
    assert!(!err.is_out_of_memory());
}

#[test]
fn tiny_initial_capacity_still_grows() {
    let source = "val x = a + b * c - d\nxs[0].z += f(x, y)\n";
    let buf = SourceBuffer::new(source);
    let small = parse_with_options(&buf, &ParseOptions { initial_capacity: 0 });
    let default = parse(&buf);
    assert!(small.is_ok());
    assert_eq!(small.ast, default.ast);
}

#[test]
fn default_options() {
    assert_eq!(
        ParseOptions::default().initial_capacity,
        vx_ir::Ast::DEFAULT_CAPACITY
    );
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 2_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let (_, ast) = parse_ok(&source);
    assert_eq!(ast.len(), depth + 4);
}

#[test]
fn interior_nul_is_skipped() {
    let buf = SourceBuffer::from_bytes(b"a \0+ b");
    let output = parse(&buf);
    assert!(output.is_ok());
    assert_eq!(buf.interior_nulls(), &[2]);
}

#[derive(Debug, Default)]
struct Recorder {
    events: Vec<(GrammarTag, Option<bool>)>,
}

impl ParseObserver for Recorder {
    fn enter(&mut self, rule: GrammarTag, _pos: u32) {
        self.events.push((rule, None));
    }

    fn exit(&mut self, rule: GrammarTag, ok: bool) {
        self.events.push((rule, Some(ok)));
    }
}

#[test]
fn observer_sees_balanced_rules() {
    let buf = SourceBuffer::new("val x = 1 + 2");
    let mut recorder = Recorder::default();
    let output = parse_with_observer(&buf, &ParseOptions::default(), &mut recorder);
    assert!(output.is_ok());

    let enters = recorder.events.iter().filter(|(_, ok)| ok.is_none()).count();
    let exits = recorder.events.iter().filter(|(_, ok)| *ok == Some(true)).count();
    assert_eq!(enters, exits);
    assert_eq!(recorder.events.first(), Some(&(GrammarTag::Statements, None)));
    assert_eq!(recorder.events.last(), Some(&(GrammarTag::Statements, Some(true))));
    assert!(recorder.events.contains(&(GrammarTag::Operator, Some(true))));
}

#[test]
fn nothing_runs_after_first_failure() {
    let buf = SourceBuffer::new("def f(Int a, { }\nval y = 2");
    let mut recorder = Recorder::default();
    let output = parse_with_observer(&buf, &ParseOptions::default(), &mut recorder);
    assert!(output.has_errors());

    let first_failure = recorder
        .events
        .iter()
        .position(|(_, ok)| *ok == Some(false))
        .unwrap();
    let after = &recorder.events[first_failure..];
    assert!(after.iter().all(|(_, ok)| *ok == Some(false)));
    assert_eq!(after.last(), Some(&(GrammarTag::Statements, Some(false))));
}

#[test]
fn tracing_observer_produces_same_tree() {
    let buf = SourceBuffer::new("if a { b } else { c }");
    let traced = parse_with_observer(&buf, &ParseOptions::default(), TracingObserver::new());
    assert_eq!(traced.ast, parse(&buf).ast);
}

const BINARY_OPS: &[&str] = &[
    "||", "&&", "|", "^", "&", "==", "!=", "<", ">", "<=", ">=", "<<", ">>", "+", "-", "*", "/",
    "%",
];

const PREFIX_OPS: &[&str] = &["-", "+", "!", "~"];

fn arb_identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}".prop_filter("keywords are not identifiers", |s| {
        Keyword::from_text(s.as_bytes()).is_none()
    })
}

fn arb_expr() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        arb_identifier(),
        (0u32..100_000).prop_map(|n| n.to_string()),
        Just("0x1F".to_string()),
        Just("0b1010".to_string()),
        Just("2.25".to_string()),
        Just("'c'".to_string()),
        Just("\"text\"".to_string()),
    ];
    leaf.prop_recursive(5, 48, 3, |inner| {
        prop_oneof![
            (inner.clone(), proptest::sample::select(BINARY_OPS), inner.clone())
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            (proptest::sample::select(PREFIX_OPS), inner.clone())
                .prop_map(|(op, e)| format!("{op} {e}")),
            inner.clone().prop_map(|e| format!("({e})")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("f({a},\n {b})")),
            (inner.clone(), arb_identifier()).prop_map(|(e, m)| format!("({e}).{m}")),
            (inner.clone(), inner).prop_map(|(e, i)| format!("({e})[{i}]")),
        ]
    })
}

proptest! {
    #[test]
    fn generated_expressions_keep_tree_invariants(expr in arb_expr()) {
        let source = format!("val x = {expr}\nx += 1\n");
        let buf = SourceBuffer::new(&source);
        let output = parse(&buf);
        prop_assert!(output.error.is_none(), "{:?}: {:?}", source, output.error);
        prop_assert_eq!(validate(&output.ast), Ok(()));
        assert_spans_are_tokens(&buf, &output.ast);
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let buf = SourceBuffer::from_bytes(&bytes);
        let output = parse(&buf);
        if output.is_ok() {
            prop_assert_eq!(validate(&output.ast), Ok(()));
        }
    }
}
