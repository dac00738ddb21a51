//! Property-based tests for option parsing.

use proptest::prelude::*;
use serde_json::{Value, json};
use xmlpack_config::parse_option;

proptest! {
    #[test]
    fn integer_values_become_numbers(key in "[a-z_]{1,12}", n in any::<i32>()) {
        let (k, v) = parse_option(&format!("{key}={n}")).unwrap();
        prop_assert_eq!(k, key);
        prop_assert_eq!(v, json!(n));
    }

    #[test]
    fn word_values_stay_strings(key in "[a-z]{1,12}", word in "[a-z]{1,12}") {
        prop_assume!(!["true", "false", "null"].contains(&word.as_str()));
        let (_, v) = parse_option(&format!("{key}={word}")).unwrap();
        prop_assert_eq!(v, Value::String(word));
    }

    #[test]
    fn parse_never_panics(raw in "\\PC{0,40}") {
        let _ = parse_option(&raw);
    }
}
