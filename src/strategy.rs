//! Comparison strategies.
//!
//! Each strategy is a type-scoped policy: [`Strategy::can_compare`] claims a
//! set of [`Kind`]s, and the engine dispatches to the first claiming strategy
//! in a fixed priority order (scalar, map, seq, record, fallback). Strategies
//! are stateless, constructed once, and shared across threads for the life
//! of the engine.

mod fallback;
mod map;
mod record;
mod scalar;
mod seq;

pub use fallback::FallbackStrategy;
pub use map::MapStrategy;
pub use record::RecordStrategy;
pub use scalar::ScalarStrategy;
pub use seq::SeqStrategy;

pub(crate) use record::{mean_scored, walk_fields};

use crate::engine::ObjectComparer;
use crate::value::{Kind, Value};

/// A type-scoped comparison policy.
///
/// Implementations must be defensive: `compare` returns 0.0 for kind
/// mismatches or nulls rather than panicking, even though the engine guards
/// those cases before dispatch. `can_compare` is a pure, total predicate.
pub trait Strategy: Send + Sync {
    /// Strategy name, for diagnostics only.
    fn name(&self) -> &'static str;

    /// Whether this strategy handles values of the given kind.
    fn can_compare(&self, kind: Kind) -> bool;

    /// Confidence in [0.0, 1.0] for two values of a claimed kind.
    ///
    /// `depth` is the current recursion depth; strategies that descend into
    /// child values must recurse through
    /// [`ObjectComparer::compare_values_at`] with `depth + 1` so the
    /// engine's depth bound applies.
    fn compare(&self, a: &Value, b: &Value, depth: usize, engine: &ObjectComparer) -> f64;
}

/// Clamp a confidence into [0.0, 1.0], mapping NaN to 0.0.
pub(crate) fn clamp_confidence(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

/// Partial credit for two collections of differing sizes: `min/max * 0.5`.
pub(crate) fn size_mismatch_credit(a: usize, b: usize) -> f64 {
    let (min, max) = if a < b { (a, b) } else { (b, a) };
    if max == 0 {
        return 1.0;
    }
    (min as f64 / max as f64) * 0.5
}
