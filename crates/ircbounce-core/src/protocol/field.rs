//! Best-effort field extraction from dynamic JSON values.
//!
//! Rules:
//! - Extraction never fails: an absent key or a value of the wrong JSON type
//!   yields `T::default()`.
//! - The input is only borrowed; decoders never mutate it.
//! - Numbers must be integral and in range for the target type. `6667.0`
//!   or `70000` for a `u16` port both fall back to zero.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Total conversion from a dynamic value into a typed record.
///
/// Implementations must not fail and must not panic: anything that does not
/// match the expected shape degrades to the zero value of the field involved.
pub trait Decode: Sized {
    fn decode(value: &Value) -> Self;
}

/// A field type that can be pulled out of a dynamic value.
///
/// `from_value` returns `None` on a type mismatch; [`Fields::get`] turns that
/// into `Self::default()`.
pub trait FieldValue: Default {
    fn from_value(value: &Value) -> Option<Self>;
}

impl FieldValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FieldValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FieldValue for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FieldValue for u64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_u64()
    }
}

impl FieldValue for u16 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_u64().and_then(|n| u16::try_from(n).ok())
    }
}

/// A list of strings. One non-string element makes the whole field mistyped.
impl FieldValue for Vec<String> {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(String::from_value).collect()
    }
}

/// A string-to-string mapping. Unlike lists, entries default individually:
/// a non-string value keeps its key and maps to `""`.
impl FieldValue for BTreeMap<String, String> {
    fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        Some(
            map.iter()
                .map(|(k, v)| (k.clone(), String::from_value(v).unwrap_or_default()))
                .collect(),
        )
    }
}

/// Read-only view over a value expected to be a string-keyed mapping.
///
/// When the value is not a mapping every lookup behaves as "absent", so a
/// decoder built on `Fields` returns the zero record without special-casing.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Fields<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            map: value.as_object(),
        }
    }

    /// True when the underlying value is a mapping.
    pub fn is_mapping(&self) -> bool {
        self.map.is_some()
    }

    /// Extract `key` as `T`, or `T::default()` if absent or mistyped.
    pub fn get<T: FieldValue>(&self, key: &str) -> T {
        self.raw(key).and_then(T::from_value).unwrap_or_default()
    }

    /// Decode a nested record only when `key` is present and not null.
    ///
    /// Absence stays `None` rather than becoming a zero record.
    pub fn nested<T: Decode>(&self, key: &str) -> Option<T> {
        self.raw(key).filter(|v| !v.is_null()).map(T::decode)
    }

    fn raw(&self, key: &str) -> Option<&'a Value> {
        self.map?.get(key)
    }
}
