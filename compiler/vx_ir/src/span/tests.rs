use super::*;

#[test]
fn basic_span() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
}

#[test]
fn from_start_len() {
    assert_eq!(Span::from_start_len(4, 3), Span::new(4, 7));
    assert_eq!(Span::from_start_len(u32::MAX - 1, 5).end, u32::MAX);
}

#[test]
fn dummy_is_empty() {
    assert!(Span::DUMMY.is_empty());
    assert_eq!(Span::DUMMY.len(), 0);
}

#[test]
fn inverted_span_has_zero_len() {
    let span = Span::new(9, 3);
    assert_eq!(span.len(), 0);
    assert!(span.is_empty());
}

#[test]
fn range_conversion() {
    let text = b"val answer = 42";
    assert_eq!(&text[Span::new(4, 10).to_range()], b"answer");
}

#[test]
fn debug_and_display() {
    let span = Span::new(3, 8);
    assert_eq!(format!("{span:?}"), "3..8");
    assert_eq!(format!("{span}"), "3..8");
}
