//! Map strategy: key/value mappings, insertion order irrelevant.

use std::collections::HashMap;

use crate::engine::ObjectComparer;
use crate::strategy::{clamp_confidence, size_mismatch_credit, Strategy};
use crate::value::{Kind, Value};

/// Compares mappings by key intersection.
///
/// Differing sizes score exactly `min/max * 0.5` — partial credit for the
/// structural difference, not zero. Equal sizes score the mean over the
/// left map's keys, where an absent key contributes 0.0 and a present key
/// contributes the recursive comparison of the two values.
#[derive(Debug, Default)]
pub struct MapStrategy;

impl Strategy for MapStrategy {
    fn name(&self) -> &'static str {
        "map"
    }

    fn can_compare(&self, kind: Kind) -> bool {
        kind == Kind::Map
    }

    fn compare(&self, a: &Value, b: &Value, depth: usize, engine: &ObjectComparer) -> f64 {
        let (Value::Map(left), Value::Map(right)) = (a, b) else {
            return 0.0;
        };
        if left.is_empty() && right.is_empty() {
            return 1.0;
        }
        if left.len() != right.len() {
            return size_mismatch_credit(left.len(), right.len());
        }

        // O(1) membership over the right map's keys.
        let lookup: HashMap<&str, &Value> = right
            .iter()
            .map(|(key, value)| (key.as_str(), value))
            .collect();

        let mut total = 0.0;
        for (key, left_value) in left {
            if let Some(right_value) = lookup.get(key.as_str()) {
                total += engine.compare_values_at(left_value, right_value, depth + 1);
            }
        }
        clamp_confidence(total / left.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompareConfig;

    fn engine() -> ObjectComparer {
        ObjectComparer::new(CompareConfig::default()).expect("valid config")
    }

    fn map(entries: Vec<(&str, Value)>) -> Value {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v))
                .collect(),
        )
    }

    #[test]
    fn identical_maps_score_one() {
        let a = map(vec![("x", Value::Int(1)), ("y", Value::Int(2))]);
        let b = map(vec![("y", Value::Int(2)), ("x", Value::Int(1))]);
        assert_eq!(MapStrategy.compare(&a, &b, 0, &engine()), 1.0);
    }

    #[test]
    fn size_mismatch_scores_exact_partial_credit() {
        let a = map(vec![("x", Value::Int(1)), ("y", Value::Int(2))]);
        let b = map(vec![
            ("x", Value::Int(1)),
            ("y", Value::Int(2)),
            ("z", Value::Int(3)),
            ("w", Value::Int(4)),
        ]);
        assert_eq!(MapStrategy.compare(&a, &b, 0, &engine()), 0.25);
    }

    #[test]
    fn absent_key_contributes_zero() {
        let a = map(vec![("x", Value::Int(1)), ("y", Value::Int(2))]);
        let b = map(vec![("x", Value::Int(1)), ("q", Value::Int(2))]);
        assert_eq!(MapStrategy.compare(&a, &b, 0, &engine()), 0.5);
    }

    #[test]
    fn empty_maps_are_identical() {
        let a = map(vec![]);
        let b = map(vec![]);
        assert_eq!(MapStrategy.compare(&a, &b, 0, &engine()), 1.0);
    }
}
