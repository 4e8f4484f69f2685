use super::*;

#[test]
fn span_len_and_empty() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(Span::point(4).is_empty());
}

#[test]
fn merge_covers_both_spans() {
    let a = Span::new(3, 7);
    let b = Span::new(12, 15);
    assert_eq!(a.merge(b), Span::new(3, 15));
    assert_eq!(b.merge(a), Span::new(3, 15));
}

#[test]
fn from_range_round_trips_small_offsets() {
    let span = Span::from_range(5..9);
    assert_eq!(span, Span::new(5, 9));
    assert_eq!(span.to_range(), 5..9);
}

#[test]
fn from_range_saturates_huge_offsets() {
    let span = Span::from_range(0..usize::MAX);
    assert_eq!(span.end, u32::MAX);
}

#[test]
fn debug_and_display_show_range() {
    let span = Span::new(1, 4);
    assert_eq!(format!("{span:?}"), "1..4");
    assert_eq!(span.to_string(), "1..4");
}
