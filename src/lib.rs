//! # proxim
//!
//! ## Purpose
//!
//! `proxim` computes a confidence score in [0.0, 1.0] between two structured
//! runtime values of the same declared type. Comparison is dispatched to one
//! of several type-scoped strategies (scalars, maps, sequences, records) and
//! recurses into nested structures up to a configured depth bound; at the
//! bound the engine returns a fixed partial-confidence sentinel rather than
//! descending further, so comparison always terminates.
//!
//! There is no runtime reflection: callers convert their data into the
//! [`Value`] model, either by implementing [`ToValue`] by hand or by going
//! through the serde bridge ([`ObjectComparer::compare_serialized`]) for any
//! `Serialize` type.
//!
//! ## Core Types
//!
//! - [`Value`] / [`Kind`]: the dynamic value model and its type-family
//!   discriminant.
//! - [`ToValue`]: conversion into the model, the seam that replaces
//!   reflection.
//! - [`CompareConfig`]: tuning knobs — recursion bound, depth sentinel,
//!   numeric epsilon, string thresholds.
//! - [`Strategy`]: a type-scoped comparison policy; [`ScalarStrategy`],
//!   [`MapStrategy`], [`SeqStrategy`], [`RecordStrategy`], and
//!   [`FallbackStrategy`] cover the built-in kinds.
//! - [`ObjectComparer`]: the dispatcher, implementing the [`Comparer`]
//!   trait; `compare_values` for single values, `compare` /
//!   `compare_report` for per-field object-level results.
//! - [`CompareReport`] / [`FieldResult`]: overall confidence plus ordered
//!   per-field outcomes, including observably-skipped fields.
//!
//! ## Example
//!
//! ```
//! use proxim::{CompareConfig, ObjectComparer, ToValue, Value};
//!
//! struct User {
//!     name: String,
//!     age: i64,
//! }
//!
//! impl ToValue for User {
//!     fn to_value(&self) -> Value {
//!         Value::record("User", vec![
//!             ("name", self.name.to_value()),
//!             ("age", self.age.to_value()),
//!         ])
//!     }
//! }
//!
//! let engine = ObjectComparer::new(CompareConfig::default()).expect("valid config");
//! let a = User { name: "ada".into(), age: 36 };
//! let b = User { name: "ada".into(), age: 37 };
//!
//! let report = engine.compare(&a, &b).expect("comparable");
//! assert_eq!(report.fields.len(), 2);
//! assert!(report.overall > 0.9 && report.overall < 1.0);
//! ```
//!
//! ## Observability
//!
//! Install a [`CompareMetrics`] implementation via [`set_compare_metrics`]
//! to record per-comparison latency, field counts, and overall confidence.
//! Skipped fields are additionally logged through `tracing` at debug level.

pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod report;
pub mod similarity;
pub mod strategy;
pub mod value;

pub use crate::config::CompareConfig;
pub use crate::engine::{Comparer, ObjectComparer};
pub use crate::error::CompareError;
pub use crate::metrics::{set_compare_metrics, CompareMetrics};
pub use crate::report::{CompareReport, FieldOutcome, FieldResult, SkipReason};
pub use crate::strategy::{
    FallbackStrategy, MapStrategy, RecordStrategy, ScalarStrategy, SeqStrategy, Strategy,
};
pub use crate::value::{Kind, ToValue, Value};
