//! Last-resort strategy: claims everything, scores nothing.

use crate::engine::ObjectComparer;
use crate::strategy::Strategy;
use crate::value::{Kind, Value};

/// Registered last in the priority order; matches any kind and always
/// returns zero confidence, so an unhandled kind degrades to "no
/// similarity" instead of panicking or erroring.
#[derive(Debug, Default)]
pub struct FallbackStrategy;

impl Strategy for FallbackStrategy {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn can_compare(&self, _kind: Kind) -> bool {
        true
    }

    fn compare(&self, _a: &Value, _b: &Value, _depth: usize, _engine: &ObjectComparer) -> f64 {
        0.0
    }
}
