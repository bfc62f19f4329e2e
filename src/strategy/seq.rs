//! Sequence strategy: ordered collections compared index-wise.

use crate::engine::ObjectComparer;
use crate::strategy::{clamp_confidence, size_mismatch_credit, Strategy};
use crate::value::{Kind, Value};

/// Compares ordered sequences element by element.
///
/// Differing lengths score `min/max * 0.5`, the same partial-credit penalty
/// maps use; equal lengths score the mean of index-wise recursive
/// comparisons.
#[derive(Debug, Default)]
pub struct SeqStrategy;

impl Strategy for SeqStrategy {
    fn name(&self) -> &'static str {
        "seq"
    }

    fn can_compare(&self, kind: Kind) -> bool {
        kind == Kind::Seq
    }

    fn compare(&self, a: &Value, b: &Value, depth: usize, engine: &ObjectComparer) -> f64 {
        let (Value::Seq(left), Value::Seq(right)) = (a, b) else {
            return 0.0;
        };
        if left.is_empty() && right.is_empty() {
            return 1.0;
        }
        if left.len() != right.len() {
            return size_mismatch_credit(left.len(), right.len());
        }

        let total: f64 = left
            .iter()
            .zip(right)
            .map(|(lv, rv)| engine.compare_values_at(lv, rv, depth + 1))
            .sum();
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

    #[test]
    fn identical_sequences_score_one() {
        let a = Value::Seq(vec![Value::Int(1), Value::Int(2)]);
        let b = Value::Seq(vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(SeqStrategy.compare(&a, &b, 0, &engine()), 1.0);
    }

    #[test]
    fn length_mismatch_scores_partial_credit() {
        let a = Value::Seq(vec![Value::Int(1)]);
        let b = Value::Seq(vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(SeqStrategy.compare(&a, &b, 0, &engine()), 0.25);
    }

    #[test]
    fn order_matters() {
        let a = Value::Seq(vec![Value::Bool(true), Value::Bool(false)]);
        let b = Value::Seq(vec![Value::Bool(false), Value::Bool(true)]);
        assert_eq!(SeqStrategy.compare(&a, &b, 0, &engine()), 0.0);
    }

    #[test]
    fn empty_sequences_are_identical() {
        let a = Value::Seq(vec![]);
        let b = Value::Seq(vec![]);
        assert_eq!(SeqStrategy.compare(&a, &b, 0, &engine()), 1.0);
    }
}
