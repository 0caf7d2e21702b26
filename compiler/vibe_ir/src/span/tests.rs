use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(15));
    assert!(!span.contains(20));
}

#[test]
fn test_contains_span() {
    let outer = Span::new(0, 10);
    assert!(outer.contains_span(Span::new(0, 10)));
    assert!(outer.contains_span(Span::new(3, 3)));
    assert!(!outer.contains_span(Span::new(5, 11)));
}

#[test]
fn test_point_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert_eq!(span.to_range(), 7..7);
}

#[test]
fn test_try_from_range() {
    assert_eq!(Span::try_from_range(50..100), Ok(Span::new(50, 100)));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_try_from_range_overflow() {
    let too_big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(0..too_big),
        Err(SpanError::EndTooLarge(too_big))
    );
    assert_eq!(
        Span::try_from_range(too_big..too_big),
        Err(SpanError::StartTooLarge(too_big))
    );
}

#[test]
fn test_debug_format() {
    assert_eq!(format!("{:?}", Span::new(3, 9)), "3..9");
}
