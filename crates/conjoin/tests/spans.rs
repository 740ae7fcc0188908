//! Integration tests for span extraction.

use conjoin::{FormatError, JoinResult, PatternTable, Span, extract_spans, join};

fn english() -> PatternTable {
    PatternTable::new("{0} and {1}", "{0}, {1}", "{0}, {1}", "{0}, and {1}").unwrap()
}

fn render(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| format!("{}: {:?}", span.kind(), span.text()))
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Well-formed results
// =============================================================================

#[test]
fn three_items_alternate_elements_and_literals() {
    let items = ["A", "B", "C"];
    let spans = extract_spans(&join(&items, &english()), &items).unwrap();
    insta::assert_snapshot!(render(&spans), @r#"
    element: "A"
    literal: ", "
    element: "B"
    literal: ", and "
    element: "C"
    "#);
}

#[test]
fn two_items() {
    let items = ["A", "B"];
    let spans = extract_spans(&join(&items, &english()), &items).unwrap();
    assert_eq!(
        spans,
        vec![
            Span::Element("A".into()),
            Span::Literal(" and ".into()),
            Span::Element("B".into()),
        ]
    );
}

#[test]
fn empty_list_has_no_spans() {
    let items: [&str; 0] = [];
    let spans = extract_spans(&join(&items, &english()), &items).unwrap();
    assert!(spans.is_empty());
}

#[test]
fn single_item_is_one_element() {
    let items = ["Only"];
    let spans = extract_spans(&join(&items, &english()), &items).unwrap();
    assert_eq!(spans, vec![Span::Element("Only".into())]);
}

#[test]
fn leading_and_trailing_literals() {
    let table = PatternTable::uniform("«{0}» · «{1}»").unwrap();
    let items = ["a", "b", "c"];
    let spans = extract_spans(&join(&items, &table), &items).unwrap();
    insta::assert_snapshot!(render(&spans), @r#"
    literal: "««"
    element: "a"
    literal: "» · «"
    element: "b"
    literal: "»» · «"
    element: "c"
    literal: "»"
    "#);
}

#[test]
fn empty_items_become_empty_elements() {
    let items = ["", "x", ""];
    let spans = extract_spans(&join(&items, &english()), &items).unwrap();
    assert_eq!(spans.iter().filter(|span| span.is_element()).count(), 3);
    assert_eq!(spans.iter().filter(|span| span.is_literal()).count(), 2);
    let rebuilt: String = spans.iter().map(Span::text).collect();
    assert_eq!(rebuilt, ", x, and ");
}

#[test]
fn spans_serialize_as_parts() {
    let spans = vec![Span::Element("A".into()), Span::Literal(" or ".into())];
    assert_eq!(
        serde_json::to_string(&spans).unwrap(),
        r#"[{"type":"element","value":"A"},{"type":"literal","value":" or "}]"#
    );
}

// =============================================================================
// Malformed results
// =============================================================================

#[test]
fn offset_count_must_match_items() {
    let result = JoinResult::new("A and B", vec![0]);
    let err = extract_spans(&result, &["A", "B"]).unwrap_err();
    assert_eq!(
        err,
        FormatError::MalformedJoinResult {
            message: "1 offsets for 2 items".into(),
        }
    );
}

#[test]
fn overlapping_spans_are_rejected() {
    let result = JoinResult::new("AB", vec![0, 0]);
    let err = extract_spans(&result, &["A", "B"]).unwrap_err();
    assert!(matches!(err, FormatError::MalformedJoinResult { .. }));
}

#[test]
fn out_of_bounds_span_is_rejected() {
    let result = JoinResult::new("A and B", vec![0, 6]);
    let err = extract_spans(&result, &["A", "Bee"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed join result: item 1 span 6..9 is not within the 7 byte output"
    );
}

#[test]
fn span_inside_a_character_is_rejected() {
    let result = JoinResult::new("é and B", vec![1, 7]);
    let err = extract_spans(&result, &["x", "B"]).unwrap_err();
    assert!(matches!(err, FormatError::MalformedJoinResult { .. }));
}

#[test]
fn mismatched_text_is_rejected() {
    let result = JoinResult::new("A and B", vec![0, 6]);
    let err = extract_spans(&result, &["A", "C"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed join result: item 1 does not match the output text at byte 6"
    );
}

#[test]
fn reversed_patterns_cannot_be_split_in_item_order() {
    let table = PatternTable::uniform("{1} before {0}").unwrap();
    let items = ["A", "B"];
    let result = join(&items, &table);
    assert_eq!(result.text(), "B before A");
    assert!(extract_spans(&result, &items).is_err());
}
