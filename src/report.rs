//! Object-level comparison results.

use serde::{Deserialize, Serialize};

/// Why a field was excluded from the confidence average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Present on the right-hand value only.
    MissingLeft,
    /// Present on the left-hand value only.
    MissingRight,
}

/// Outcome for one field of a compared record pair.
///
/// Skipped fields are first-class results rather than log lines, so callers
/// can observe exactly which fields degraded instead of failing the whole
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FieldOutcome {
    Scored { confidence: f64 },
    Skipped { reason: SkipReason },
}

/// A named confidence score for one field of a compared record pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldResult {
    pub name: String,
    pub outcome: FieldOutcome,
}

impl FieldResult {
    /// The field's confidence, or `None` if the field was skipped.
    pub fn confidence(&self) -> Option<f64> {
        match self.outcome {
            FieldOutcome::Scored { confidence } => Some(confidence),
            FieldOutcome::Skipped { .. } => None,
        }
    }
}

/// The object-level comparison result: overall confidence plus per-field
/// detail, in the record's declared field order. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareReport {
    /// Declared type name of the compared records.
    pub type_name: String,
    /// Mean of the scored field confidences, in [0.0, 1.0].
    pub overall: f64,
    /// Per-field outcomes in layout order.
    pub fields: Vec<FieldResult>,
}

impl CompareReport {
    /// Look up a field result by name.
    pub fn field(&self, name: &str) -> Option<&FieldResult> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Number of fields that were skipped rather than scored.
    pub fn skipped_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| matches!(f.outcome, FieldOutcome::Skipped { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_round_trips_through_json() {
        let report = CompareReport {
            type_name: "Point".into(),
            overall: 0.75,
            fields: vec![
                FieldResult {
                    name: "x".into(),
                    outcome: FieldOutcome::Scored { confidence: 1.0 },
                },
                FieldResult {
                    name: "y".into(),
                    outcome: FieldOutcome::Skipped {
                        reason: SkipReason::MissingRight,
                    },
                },
            ],
        };
        let json = serde_json::to_string(&report).expect("serialize");
        let back: CompareReport = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, report);
        assert_eq!(back.skipped_count(), 1);
        assert_eq!(back.field("x").and_then(FieldResult::confidence), Some(1.0));
    }
}
