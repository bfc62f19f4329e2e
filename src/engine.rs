//! The dispatcher: strategy selection, recursion bounds, and the
//! object-level comparison entry points.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Instant;

use tracing::trace;

use crate::config::CompareConfig;
use crate::error::CompareError;
use crate::metrics::metrics_recorder;
use crate::report::CompareReport;
use crate::strategy::{
    clamp_confidence, walk_fields, FallbackStrategy, MapStrategy, RecordStrategy, ScalarStrategy,
    SeqStrategy, Strategy,
};
use crate::value::{ToValue, Value};


/// Value-level and object-level comparison, as a seam.
///
/// [`ObjectComparer`] is the production implementation; the trait exists so
/// callers can substitute a stub in tests or wrap the engine with caching or
/// instrumentation.
pub trait Comparer: Send + Sync {
    /// Confidence in [0.0, 1.0] for any two values.
    fn compare_values(&self, a: &Value, b: &Value) -> f64;

    /// Object-level comparison of two record values, with per-field detail.
    fn compare_report(&self, a: &Value, b: &Value) -> Result<CompareReport, CompareError>;
}

/// Per-type field ordering, accumulated as field names are seen.
///
/// Owned by the engine instance rather than living in a process-wide static,
/// so independent engines (and tests) never share state. The cache only
/// stabilizes *ordering*: the set of fields walked for a record pair is
/// always the union of the two records' own field names, so scores are a
/// pure function of the inputs regardless of what the engine compared
/// earlier. Lookups use the double-checked pattern: optimistic read, then
/// write-lock, re-check, and append — readers never block once the names
/// are warm.
pub(crate) struct FieldLayoutCache {
    inner: RwLock<HashMap<String, Vec<String>>>,
}

impl FieldLayoutCache {
    fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Walk order for a record pair: the union of both field-name sets,
    /// ordered by the cached first-seen layout for `type_name`. Names not
    /// yet in the layout are appended to it under the write lock.
    pub(crate) fn walk_order(
        &self,
        type_name: &str,
        left: &[(String, Value)],
        right: &[(String, Value)],
    ) -> Vec<String> {
        let mut union: Vec<&str> = Vec::with_capacity(left.len() + right.len());
        for (name, _) in left.iter().chain(right) {
            if !union.contains(&name.as_str()) {
                union.push(name.as_str());
            }
        }

        {
            let guard = self
                .inner
                .read()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(layout) = guard.get(type_name) {
                if union.iter().all(|name| layout.iter().any(|l| l == name)) {
                    return layout
                        .iter()
                        .filter(|l| union.contains(&l.as_str()))
                        .cloned()
                        .collect();
                }
            }
        }

        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let layout = guard.entry(type_name.to_owned()).or_default();
        for name in &union {
            if !layout.iter().any(|l| l == name) {
                layout.push((*name).to_owned());
            }
        }
        layout
            .iter()
            .filter(|l| union.contains(&l.as_str()))
            .cloned()
            .collect()
    }
}

/// The comparison engine.
///
/// Holds the immutable, ordered strategy list, the validated configuration,
/// and the per-type field-layout cache. Construction validates the config;
/// after that every operation is infallible at the value level and reports
/// failures as values at the object level. The engine is `Send + Sync`; the
/// layout cache is its only shared mutable state.
pub struct ObjectComparer {
    config: CompareConfig,
    strategies: Vec<Box<dyn Strategy>>,
    layout_cache: FieldLayoutCache,
}

impl ObjectComparer {
    /// Build an engine with the default strategy order: scalar, map, seq,
    /// record, fallback.
    pub fn new(config: CompareConfig) -> Result<Self, CompareError> {
        Self::with_strategies(
            config,
            vec![
                Box::new(ScalarStrategy),
                Box::new(MapStrategy),
                Box::new(SeqStrategy),
                Box::new(RecordStrategy),
            ],
        )
    }

    /// Build an engine with a caller-supplied strategy list.
    ///
    /// Strategies are consulted in order; the fallback strategy is always
    /// appended last so dispatch is total.
    pub fn with_strategies(
        config: CompareConfig,
        mut strategies: Vec<Box<dyn Strategy>>,
    ) -> Result<Self, CompareError> {
        config.validate()?;
        strategies.push(Box::new(FallbackStrategy));
        Ok(Self {
            config,
            strategies,
            layout_cache: FieldLayoutCache::new(),
        })
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    pub(crate) fn layout_cache(&self) -> &FieldLayoutCache {
        &self.layout_cache
    }

    /// Confidence in [0.0, 1.0] for any two values, starting at depth 0.
    pub fn compare_values(&self, a: &Value, b: &Value) -> f64 {
        self.compare_values_at(a, b, 0)
    }

    /// Depth-aware value comparison; strategies recurse through this with
    /// `depth + 1`.
    ///
    /// Ordering of the guards matters: nulls and kind mismatches resolve
    /// before the depth bound, and the bound resolves before any strategy
    /// runs, so recursion terminates regardless of strategy behavior.
    pub fn compare_values_at(&self, a: &Value, b: &Value, depth: usize) -> f64 {
        match (a.is_null(), b.is_null()) {
            (true, true) => return 1.0,
            (true, false) | (false, true) => return 0.0,
            _ => {}
        }
        if a.kind() != b.kind() {
            return 0.0;
        }
        if depth >= self.config.max_depth {
            return self.config.depth_sentinel;
        }

        let kind = a.kind();
        for strategy in &self.strategies {
            if strategy.can_compare(kind) {
                trace!(strategy = strategy.name(), ?kind, depth, "dispatching");
                return clamp_confidence(strategy.compare(a, b, depth, self));
            }
        }
        // Unreachable while the fallback is registered; stay defensive.
        0.0
    }

    /// Object-level comparison of two values implementing [`ToValue`].
    ///
    /// Fails with [`CompareError::NullInput`] when either side converts to
    /// null, and with [`CompareError::NotARecord`] for non-record shapes.
    pub fn compare<T: ToValue>(&self, a: &T, b: &T) -> Result<CompareReport, CompareError> {
        self.compare_report(&a.to_value(), &b.to_value())
    }

    /// Object-level comparison of two `Serialize` values via the JSON
    /// bridge.
    pub fn compare_serialized<T: serde::Serialize>(
        &self,
        a: &T,
        b: &T,
    ) -> Result<CompareReport, CompareError> {
        let left = Value::from_serialize(a)?;
        let right = Value::from_serialize(b)?;
        self.compare_report(&left, &right)
    }

    /// Object-level comparison of two record values.
    ///
    /// Walks the union of both records' fields in cache-stabilized order,
    /// scoring each matched field pair and reporting one-sided fields as
    /// skipped. Field values are compared at depth 1, exactly as the
    /// value-level record dispatch does, so both entry points spend the
    /// same depth budget. The overall confidence is the mean of the scored
    /// fields; a record pair with no scorable fields degrades to
    /// structural equality.
    pub fn compare_report(&self, a: &Value, b: &Value) -> Result<CompareReport, CompareError> {
        if a.is_null() || b.is_null() {
            return Err(CompareError::NullInput);
        }
        let Value::Record {
            type_name: left_type,
            fields: left_fields,
        } = a
        else {
            return Err(CompareError::NotARecord(a.kind()));
        };
        let Value::Record {
            type_name: right_type,
            fields: right_fields,
        } = b
        else {
            return Err(CompareError::NotARecord(b.kind()));
        };
        if left_type != right_type {
            return Err(CompareError::TypeMismatch {
                left: left_type.to_string(),
                right: right_type.to_string(),
            });
        }

        let started = Instant::now();
        let fields = walk_fields(self, left_type.as_ref(), left_fields, right_fields, 1);
        let overall = match crate::strategy::mean_scored(&fields) {
            Some(mean) => clamp_confidence(mean),
            None => {
                if a == b {
                    1.0
                } else {
                    0.0
                }
            }
        };

        if let Some(recorder) = metrics_recorder() {
            recorder.record_compare(left_type.as_ref(), started.elapsed(), fields.len(), overall);
        }

        Ok(CompareReport {
            type_name: left_type.to_string(),
            overall,
            fields,
        })
    }
}

impl std::fmt::Debug for ObjectComparer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let strategies: Vec<&'static str> =
            self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("ObjectComparer")
            .field("config", &self.config)
            .field("strategies", &strategies)
            .finish_non_exhaustive()
    }
}

impl Comparer for ObjectComparer {
    fn compare_values(&self, a: &Value, b: &Value) -> f64 {
        ObjectComparer::compare_values(self, a, b)
    }

    fn compare_report(&self, a: &Value, b: &Value) -> Result<CompareReport, CompareError> {
        ObjectComparer::compare_report(self, a, b)
    }
}
