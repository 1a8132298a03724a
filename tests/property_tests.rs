//! Property-based tests for the decoder.
//!
//! Inputs are generated as literal text from small value models, so the
//! properties check decoding against a known expected tree.

use proptest::prelude::*;
use serde_luatable::{load, Value};

/// A scalar together with its literal spelling.
fn arb_scalar() -> impl Strategy<Value = (String, Value)> {
    prop_oneof![
        any::<i64>().prop_map(|n| (n.to_string(), Value::Int(n))),
        any::<bool>().prop_map(|b| (b.to_string(), Value::Bool(b))),
        "[a-zA-Z0-9 _.,=-]{0,16}".prop_map(|s| (format!("\"{}\"", s), Value::String(s))),
        "[a-zA-Z0-9 \"_.=-]{0,16}".prop_map(|s| (format!("[[{}]]", s), Value::String(s))),
        (0u32..1_000_000, 1u32..1000)
            .prop_map(|(whole, frac)| {
                let text = format!("{}.{}", whole, frac);
                let value = text.parse::<f64>().unwrap();
                (text, Value::Float(value))
            }),
    ]
}

/// A bare-word key that is not a keyword.
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,12}")
        .unwrap()
        .prop_filter("keywords are not bare keys", |s| {
            !matches!(s.as_str(), "true" | "false" | "nil")
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_sequential_tables_are_arrays(items in prop::collection::vec(arb_scalar(), 1..20)) {
        let text = format!(
            "{{ {} }}",
            items.iter().map(|(t, _)| t.as_str()).collect::<Vec<_>>().join(", ")
        );
        let expected = Value::Array(items.into_iter().map(|(_, v)| v).collect());
        prop_assert_eq!(load(&text).unwrap(), expected);
    }

    #[test]
    fn prop_keyed_tables_keep_first_insertion_order(
        entries in prop::collection::vec((arb_key(), arb_scalar()), 1..12)
    ) {
        let text = format!(
            "{{\n{}\n}}",
            entries
                .iter()
                .map(|(k, (t, _))| format!("  {} = {},", k, t))
                .collect::<Vec<_>>()
                .join("\n")
        );

        let mut expected_keys: Vec<&str> = Vec::new();
        for (k, _) in &entries {
            if !expected_keys.contains(&k.as_str()) {
                expected_keys.push(k);
            }
        }

        let value = load(&text).unwrap();
        let table = value.as_table().unwrap();
        let keys: Vec<&str> = table.keys().filter_map(Value::as_str).collect();
        prop_assert_eq!(keys, expected_keys);

        // Last write wins
        for (k, _) in &entries {
            let last = entries.iter().rev().find(|(k2, _)| k2 == k).map(|(_, (_, v))| v);
            prop_assert_eq!(table.get(&Value::from(k.as_str())), last);
        }
    }

    #[test]
    fn prop_decoding_is_deterministic(items in prop::collection::vec(arb_scalar(), 0..10)) {
        let list = items.iter().map(|(t, _)| t.as_str()).collect::<Vec<_>>().join(", ");
        let text = format!("{{ {}, nested = {{ {} }} }}", list, list);
        prop_assert_eq!(load(&text), load(&text));
    }

    #[test]
    fn prop_boolean_first_key_never_coerces(first in any::<bool>(), n in 1usize..8) {
        let rest: String = (2..=n + 1).map(|i| format!(", [{}] = {}", i, i)).collect();
        let text = format!("{{ [{}] = 1{} }}", first, rest);
        let value = load(&text).unwrap();
        prop_assert!(value.is_table());
        prop_assert_eq!(value.get(first), Some(&Value::Int(1)));
    }

    #[test]
    fn prop_hex_literals(n in any::<u64>()) {
        prop_assert_eq!(load(&format!("0x{:x}", n)).unwrap(), Value::Int(n as i64));
        prop_assert_eq!(load(&format!("0X{:X}", n)).unwrap(), Value::Int(n as i64));
    }

    #[test]
    fn prop_comments_contribute_nothing(
        items in prop::collection::vec(any::<i32>(), 1..10),
        comment in "[ -~]{0,30}"
    ) {
        let text = format!(
            "{{ {} }}",
            items
                .iter()
                .map(|n| format!("{}, -- {}\n", n, comment))
                .collect::<String>()
        );
        let expected = Value::Array(items.into_iter().map(Value::from).collect());
        prop_assert_eq!(load(&text).unwrap(), expected);
    }

    #[test]
    fn prop_arbitrary_input_terminates(input in "[ -~\n]{0,64}") {
        // Either outcome is fine; it must return.
        let _ = load(&input);
    }
}
