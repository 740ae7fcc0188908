//! Property tests for the join and span extraction laws.

use conjoin::{PatternKey, PatternStore, Span, extract_spans, join};
use proptest::prelude::*;

fn item() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,8}",
        "[,{}01 ]{0,6}",
        "\\PC{0,4}",
    ]
}

fn key() -> impl Strategy<Value = PatternKey> {
    prop::sample::select(PatternKey::ALL.to_vec())
}

proptest! {
    #[test]
    fn spans_rebuild_the_joined_text(items in prop::collection::vec(item(), 0..8), key in key()) {
        let store = PatternStore::with_english();
        let table = store.get("en", key).unwrap();
        let joined = join(&items, table);
        let spans = extract_spans(&joined, &items).unwrap();
        let rebuilt: String = spans.iter().map(Span::text).collect();
        prop_assert_eq!(rebuilt, joined.text());
    }

    #[test]
    fn elements_are_the_items_in_order(items in prop::collection::vec(item(), 0..8), key in key()) {
        let store = PatternStore::with_english();
        let table = store.get("en", key).unwrap();
        let spans = extract_spans(&join(&items, table), &items).unwrap();
        let elements: Vec<&str> = spans
            .iter()
            .filter(|span| span.is_element())
            .map(Span::text)
            .collect();
        prop_assert_eq!(elements, items.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn offsets_are_ordered_and_in_bounds(items in prop::collection::vec(item(), 0..8), key in key()) {
        let store = PatternStore::with_english();
        let joined = join(&items, store.get("en", key).unwrap());
        prop_assert_eq!(joined.offsets().len(), items.len());
        let mut previous_end = 0;
        for (item, &offset) in items.iter().zip(joined.offsets()) {
            prop_assert!(offset >= previous_end);
            prop_assert_eq!(joined.text().get(offset..offset + item.len()), Some(item.as_str()));
            previous_end = offset + item.len();
        }
    }

    #[test]
    fn joining_is_deterministic(items in prop::collection::vec(item(), 0..8), key in key()) {
        let store = PatternStore::with_english();
        let table = store.get("en", key).unwrap();
        let first = join(&items, table);
        let second = join(&items, table);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            extract_spans(&first, &items).unwrap(),
            extract_spans(&second, &items).unwrap()
        );
    }

    #[test]
    fn single_item_is_identity(item in item()) {
        let store = PatternStore::with_english();
        let items = [item.clone()];
        let joined = join(&items, store.get("en", PatternKey::Standard).unwrap());
        prop_assert_eq!(joined.text(), item.as_str());
        let spans = extract_spans(&joined, &items).unwrap();
        prop_assert_eq!(spans, vec![Span::Element(item)]);
    }
}
