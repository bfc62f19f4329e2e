//! Record strategy: named aggregates compared field by field.

use tracing::debug;

use crate::engine::ObjectComparer;
use crate::report::{FieldOutcome, FieldResult, SkipReason};
use crate::strategy::{clamp_confidence, Strategy};
use crate::value::{Kind, Value};

/// Compares records of the same declared type by walking the union of both
/// field sets, in the engine's cache-stabilized order, and averaging the
/// per-field scores.
///
/// A field missing on either side is skipped — reported in the outcome list
/// and logged, never failing the comparison. Records with no scorable
/// fields fall back to direct structural equality.
#[derive(Debug, Default)]
pub struct RecordStrategy;

impl Strategy for RecordStrategy {
    fn name(&self) -> &'static str {
        "record"
    }

    fn can_compare(&self, kind: Kind) -> bool {
        kind == Kind::Record
    }

    fn compare(&self, a: &Value, b: &Value, depth: usize, engine: &ObjectComparer) -> f64 {
        let (
            Value::Record {
                type_name: left_type,
                fields: left_fields,
            },
            Value::Record {
                type_name: right_type,
                fields: right_fields,
            },
        ) = (a, b)
        else {
            return 0.0;
        };
        if left_type != right_type {
            return 0.0;
        }

        let outcomes = walk_fields(engine, left_type.as_ref(), left_fields, right_fields, depth + 1);
        match mean_scored(&outcomes) {
            Some(mean) => clamp_confidence(mean),
            // No comparable fields: fall back to structural equality.
            None => {
                if a == b {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// Mean over scored outcomes, or `None` when every field was skipped.
pub(crate) fn mean_scored(outcomes: &[FieldResult]) -> Option<f64> {
    let scored: Vec<f64> = outcomes.iter().filter_map(FieldResult::confidence).collect();
    if scored.is_empty() {
        return None;
    }
    Some(scored.iter().sum::<f64>() / scored.len() as f64)
}

/// Walk the union of two field lists in the cache-stabilized order for
/// `type_name`, comparing matched fields at `child_depth` and reporting
/// one-sided fields as skipped. Every walked name comes from one of the two
/// records, so the result depends only on the inputs.
pub(crate) fn walk_fields(
    engine: &ObjectComparer,
    type_name: &str,
    left: &[(String, Value)],
    right: &[(String, Value)],
    child_depth: usize,
) -> Vec<FieldResult> {
    let order = engine.layout_cache().walk_order(type_name, left, right);

    order
        .into_iter()
        .filter_map(|name| {
            let outcome = match (lookup(left, &name), lookup(right, &name)) {
                (Some(lv), Some(rv)) => FieldOutcome::Scored {
                    confidence: engine.compare_values_at(lv, rv, child_depth),
                },
                (None, Some(_)) => skipped(type_name, &name, SkipReason::MissingLeft),
                (Some(_), None) => skipped(type_name, &name, SkipReason::MissingRight),
                // The walk order is the union of both field sets.
                (None, None) => return None,
            };
            Some(FieldResult { name, outcome })
        })
        .collect()
}

fn skipped(type_name: &str, field: &str, reason: SkipReason) -> FieldOutcome {
    debug!(record_type = type_name, field, ?reason, "skipping field");
    FieldOutcome::Skipped { reason }
}

fn lookup<'v>(fields: &'v [(String, Value)], name: &str) -> Option<&'v Value> {
    fields
        .iter()
        .find_map(|(n, v)| if n == name { Some(v) } else { None })
}
