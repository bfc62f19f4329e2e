//! Property tests for the bounded-output and reflexivity invariants.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use proxim::{CompareConfig, ObjectComparer, Value};
use uuid::Uuid;

fn engine() -> ObjectComparer {
    ObjectComparer::new(CompareConfig::default()).expect("valid config")
}

fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e12f64..1.0e12).prop_map(Value::Float),
        "[a-z ]{0,16}".prop_map(Value::Str),
        (0i64..4_000_000_000).prop_map(|secs| {
            Value::DateTime(Utc.timestamp_opt(secs, 0).single().expect("valid timestamp"))
        }),
        any::<u128>().prop_map(|n| Value::Uuid(Uuid::from_u128(n))),
    ]
}

fn structured_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        scalar_value(),
        prop::collection::vec(scalar_value(), 0..4).prop_map(Value::Seq),
        prop::collection::btree_map("[a-z]{1,4}", scalar_value(), 0..4).prop_map(|entries| {
            Value::Map(entries.into_iter().collect())
        }),
    ]
}

proptest! {
    #[test]
    fn confidence_is_always_bounded(a in structured_value(), b in structured_value()) {
        let score = engine().compare_values(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score), "score {score} out of bounds");
        prop_assert!(!score.is_nan());
    }

    #[test]
    fn comparison_is_reflexive(a in structured_value()) {
        let score = engine().compare_values(&a, &a);
        prop_assert_eq!(score, 1.0);
    }

    #[test]
    fn cross_kind_pairs_score_zero(n in any::<i64>(), s in "[a-z]{0,8}") {
        let score = engine().compare_values(&Value::Int(n), &Value::Str(s));
        prop_assert_eq!(score, 0.0);
    }

    #[test]
    fn map_size_mismatch_scores_exact_credit(small in 1usize..5, extra in 1usize..5) {
        let large = small + extra;
        let entry = |i: usize| (format!("k{i}"), Value::Int(i as i64));
        let a = Value::Map((0..small).map(entry).collect());
        let b = Value::Map((0..large).map(entry).collect());

        let score = engine().compare_values(&a, &b);
        let expected = small as f64 / large as f64 * 0.5;
        prop_assert!((score - expected).abs() < 1e-12);
    }
}
