//! Per-field record filtering.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Record, Value};

/// Field name → match value.
///
/// - `Null` and empty-string values place no constraint on their field.
/// - String values match case-insensitively as a substring of the field's text form; a null or
///   absent field reads as `""`.
/// - Any other value requires strict equality. Integers and floats compare numerically. A record
///   without the field never matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterCriteria {
    criteria: BTreeMap<String, Value>,
}

impl FilterCriteria {
    /// Create an empty criteria set (matches everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a criterion.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Insert or replace the criterion for `field`.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.criteria.insert(field.into(), value.into());
    }

    /// Remove the criterion for `field`.
    pub fn clear(&mut self, field: &str) {
        self.criteria.remove(field);
    }

    /// Iterate the criteria that actually constrain records.
    pub fn active(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.criteria
            .iter()
            .filter(|(_, v)| !places_no_constraint(v))
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Returns `true` if no criterion constrains records.
    pub fn is_unconstrained(&self) -> bool {
        self.active().next().is_none()
    }

    /// Returns `true` if `record` satisfies every active criterion.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.active()
            .all(|(field, expected)| criterion_matches(record.field(field), expected))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FilterCriteria {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            criteria: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn places_no_constraint(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Utf8(s) => s.is_empty(),
        _ => false,
    }
}

fn criterion_matches(actual: Option<&Value>, expected: &Value) -> bool {
    match expected {
        Value::Utf8(needle) => {
            let haystack = actual.map(Value::to_text).unwrap_or_default();
            haystack.to_lowercase().contains(&needle.to_lowercase())
        }
        _ => match actual {
            Some(actual) => strict_eq(actual, expected),
            None => false,
        },
    }
}

/// Numbers are equal when their exact values are: an integer only equals a whole float of the
/// same value.
fn strict_eq(a: &Value, b: &Value) -> bool {
    match a.numeric_cmp(b) {
        Some(ord) => ord.is_eq(),
        None => a == b,
    }
}

/// Returns references to the records matching `criteria`, in input order.
///
/// The input slice is never modified.
pub fn filter_records<'a, R: Record>(records: &'a [R], criteria: &FilterCriteria) -> Vec<&'a R> {
    if criteria.is_unconstrained() {
        return records.iter().collect();
    }
    records.iter().filter(|r| criteria.matches(*r)).collect()
}
