//! Dynamic value model shared by every comparison strategy.
//!
//! The engine never looks at caller types directly. Callers convert their
//! data into [`Value`] — either by implementing [`ToValue`] by hand, or by
//! going through the [`Value::from_serialize`] bridge for any `Serialize`
//! type — and the strategies dispatch on the resulting [`Kind`]. This keeps
//! the engine fully generic without any runtime reflection.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use uuid::Uuid;

/// A runtime value in the shape the comparison strategies understand.
///
/// Scalar variants carry their native representation so the scalar strategy
/// can apply type-specific similarity formulas (banded time deltas, relative
/// numeric difference, edit-distance text similarity). Structured variants
/// (`Seq`, `Map`, `Record`) are recursed into by their own strategies.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value. Two nulls compare as identical; a null against anything
    /// else scores zero.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    DateTime(DateTime<Utc>),
    Duration(chrono::Duration),
    Uuid(Uuid),
    /// A unit enum variant. Compared by exact variant equality only.
    Enum {
        type_name: &'static str,
        variant: &'static str,
    },
    /// Ordered sequence; compared index-wise.
    Seq(Vec<Value>),
    /// Key/value mapping with string keys; compared by key intersection,
    /// insertion order irrelevant.
    Map(Vec<(String, Value)>),
    /// A named aggregate with ordered fields — the reflection-free stand-in
    /// for "an object of type `type_name`".
    Record {
        type_name: Cow<'static, str>,
        fields: Vec<(String, Value)>,
    },
}

/// Type-family discriminant used by `Strategy::can_compare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    DateTime,
    Duration,
    Uuid,
    Enum,
    Seq,
    Map,
    Record,
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
            Value::DateTime(_) => Kind::DateTime,
            Value::Duration(_) => Kind::Duration,
            Value::Uuid(_) => Kind::Uuid,
            Value::Enum { .. } => Kind::Enum,
            Value::Seq(_) => Kind::Seq,
            Value::Map(_) => Kind::Map,
            Value::Record { .. } => Kind::Record,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Build a record value with a declared type name and ordered fields.
    pub fn record<T, N>(type_name: T, fields: Vec<(N, Value)>) -> Value
    where
        T: Into<Cow<'static, str>>,
        N: Into<String>,
    {
        Value::Record {
            type_name: type_name.into(),
            fields: fields.into_iter().map(|(n, v)| (n.into(), v)).collect(),
        }
    }

    /// Build a unit enum variant value.
    pub fn enum_variant(type_name: &'static str, variant: &'static str) -> Value {
        Value::Enum { type_name, variant }
    }

    /// Convert a `serde_json::Value` into the engine's value model.
    ///
    /// JSON objects become anonymous records (type name `"json"`); the JSON
    /// layer cannot distinguish a map from a struct, so callers that need
    /// map semantics should implement [`ToValue`] instead.
    pub fn from_json(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Seq(items.into_iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => Value::Record {
                type_name: Cow::Borrowed("json"),
                fields: map
                    .into_iter()
                    .map(|(k, v)| (k, Value::from_json(v)))
                    .collect(),
            },
        }
    }

    /// Convert any `Serialize` type via JSON, stamping the top-level record
    /// with the Rust type name so cross-type comparisons score zero.
    pub fn from_serialize<T: serde::Serialize>(value: &T) -> Result<Value, serde_json::Error> {
        let json = serde_json::to_value(value)?;
        let mut converted = Value::from_json(json);
        if let Value::Record { type_name, .. } = &mut converted {
            *type_name = Cow::Borrowed(std::any::type_name::<T>());
        }
        Ok(converted)
    }
}

/// Conversion into the engine's value model.
///
/// Implement this for your own types by listing fields explicitly:
///
/// ```
/// use proxim::{ToValue, Value};
///
/// struct Point { x: i64, y: i64 }
///
/// impl ToValue for Point {
///     fn to_value(&self) -> Value {
///         Value::record("Point", vec![
///             ("x", self.x.to_value()),
///             ("y", self.y.to_value()),
///         ])
///     }
/// }
/// ```
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToValue for i64 {
    fn to_value(&self) -> Value {
        Value::Int(*self)
    }
}

macro_rules! impl_to_value_int {
    ($($ty:ty),*) => {
        $(impl ToValue for $ty {
            fn to_value(&self) -> Value {
                Value::Int(i64::from(*self))
            }
        })*
    };
}

impl_to_value_int!(i8, i16, i32, u8, u16, u32);

impl ToValue for u64 {
    fn to_value(&self) -> Value {
        match i64::try_from(*self) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::Float(*self as f64),
        }
    }
}

impl ToValue for usize {
    fn to_value(&self) -> Value {
        (*self as u64).to_value()
    }
}

impl ToValue for isize {
    fn to_value(&self) -> Value {
        Value::Int(*self as i64)
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Str(self.to_string())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Str(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Value {
        Value::Str(self.clone().into_owned())
    }
}

impl<Tz: TimeZone> ToValue for DateTime<Tz> {
    fn to_value(&self) -> Value {
        Value::DateTime(self.with_timezone(&Utc))
    }
}

impl ToValue for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::DateTime(self.and_utc())
    }
}

impl ToValue for chrono::Duration {
    fn to_value(&self) -> Value {
        Value::Duration(*self)
    }
}

impl ToValue for std::time::Duration {
    fn to_value(&self) -> Value {
        // Saturate on out-of-range rather than failing conversion.
        let delta = chrono::Duration::from_std(*self)
            .unwrap_or_else(|_| chrono::Duration::seconds(i64::MAX / 1_000));
        Value::Duration(delta)
    }
}

impl ToValue for Uuid {
    fn to_value(&self) -> Value {
        Value::Uuid(*self)
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<K: AsRef<str>, V: ToValue, S> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        let mut entries: Vec<(String, Value)> = self
            .iter()
            .map(|(k, v)| (k.as_ref().to_owned(), v.to_value()))
            .collect();
        // HashMap iteration order is nondeterministic; sort so equal maps
        // produce equal values.
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Value::Map(entries)
    }
}

impl<K: AsRef<str>, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.as_ref().to_owned(), v.to_value()))
                .collect(),
        )
    }
}
