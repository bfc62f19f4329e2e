//! Scalar strategy: primitives, strings, enums, timestamps, durations, UUIDs.

use chrono::Duration;

use crate::engine::ObjectComparer;
use crate::similarity::{levenshtein_similarity, ratcliff_obershelp};
use crate::strategy::{clamp_confidence, Strategy};
use crate::value::{Kind, Value};

/// Handles every scalar kind with a type-specific similarity formula.
///
/// Exact equality always short-circuits to 1.0. Beyond that:
/// - numerics use a relative-difference formula with a near-zero guard;
/// - strings use Levenshtein below the configured length threshold and the
///   Ratcliff-Obershelp ratio above it, with empty-string and length-ratio
///   fast paths;
/// - timestamps use banded similarity by absolute delta;
/// - durations use the numeric formula over fractional seconds;
/// - bools, UUIDs, and enum variants match exactly or not at all.
#[derive(Debug, Default)]
pub struct ScalarStrategy;

impl Strategy for ScalarStrategy {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn can_compare(&self, kind: Kind) -> bool {
        matches!(
            kind,
            Kind::Bool
                | Kind::Int
                | Kind::Float
                | Kind::Str
                | Kind::DateTime
                | Kind::Duration
                | Kind::Uuid
                | Kind::Enum
        )
    }

    fn compare(&self, a: &Value, b: &Value, _depth: usize, engine: &ObjectComparer) -> f64 {
        if a == b {
            return 1.0;
        }
        let cfg = engine.config();
        let score = match (a, b) {
            (Value::Int(x), Value::Int(y)) => {
                relative_similarity(*x as f64, *y as f64, cfg.zero_epsilon)
            }
            (Value::Float(x), Value::Float(y)) => relative_similarity(*x, *y, cfg.zero_epsilon),
            (Value::Str(x), Value::Str(y)) => string_similarity(
                x,
                y,
                cfg.fuzzy_length_threshold,
                cfg.min_length_ratio,
            ),
            (Value::DateTime(x), Value::DateTime(y)) => {
                let delta = if x >= y { *x - *y } else { *y - *x };
                datetime_similarity(delta)
            }
            (Value::Duration(x), Value::Duration(y)) => relative_similarity(
                duration_seconds(*x),
                duration_seconds(*y),
                cfg.zero_epsilon,
            ),
            // Bool, Uuid, Enum: equality already handled above.
            _ => 0.0,
        };
        clamp_confidence(score)
    }
}

fn duration_seconds(d: Duration) -> f64 {
    d.num_milliseconds() as f64 / 1_000.0
}

/// Relative-difference similarity: `1 - |a-b| / avg(|a|,|b|)`, clamped.
///
/// Both values within `epsilon` of zero count as identical; exactly one
/// near-zero value scores 0.0, avoiding the division blow-up.
pub(crate) fn relative_similarity(a: f64, b: f64, epsilon: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return 0.0;
    }
    let (abs_a, abs_b) = (a.abs(), b.abs());
    if abs_a < epsilon && abs_b < epsilon {
        return 1.0;
    }
    if abs_a < epsilon || abs_b < epsilon {
        return 0.0;
    }
    let avg = (abs_a + abs_b) / 2.0;
    clamp_confidence(1.0 - (a - b).abs() / avg)
}

/// String similarity with the fast paths applied before any edit-distance
/// work: empty-vs-nonempty is 0.0, and a length ratio below the floor is
/// 0.0 without further comparison.
pub(crate) fn string_similarity(
    a: &str,
    b: &str,
    fuzzy_length_threshold: usize,
    min_length_ratio: f64,
) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let (min_len, max_len) = if len_a < len_b {
        (len_a, len_b)
    } else {
        (len_b, len_a)
    };
    if (min_len as f64 / max_len as f64) < min_length_ratio {
        return 0.0;
    }
    if max_len < fuzzy_length_threshold {
        levenshtein_similarity(a, b)
    } else {
        ratcliff_obershelp(a, b)
    }
}

/// Banded timestamp similarity; monotonically non-increasing with the delta.
fn datetime_similarity(delta: Duration) -> f64 {
    if delta < Duration::seconds(1) {
        0.95
    } else if delta < Duration::minutes(1) {
        0.9
    } else if delta < Duration::hours(1) {
        0.8
    } else if delta < Duration::days(1) {
        0.6
    } else if delta < Duration::weeks(1) {
        0.4
    } else if delta < Duration::days(30) {
        0.2
    } else {
        0.0
    }
}
