//! Core data model types.
//!
//! Records are schema-free: the pipeline only needs to look a field up by name, which is what the
//! [`Record`] capability provides. [`Row`] is the owned, map-backed record produced by the loaders
//! in [`crate::ingestion`]; any caller type can take part by implementing [`Record`].

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single scalar value held by a record field.
///
/// Serializes untagged, so JSON `null`, numbers, booleans and strings map directly onto variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the numeric value for `Int64`/`Float64`, `None` otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Exact numeric ordering between two numbers, `None` unless both are numeric.
    ///
    /// Integer pairs compare as integers and mixed pairs by their mathematical value, so no
    /// precision is lost above 2^53. `-0.0` equals `0.0`; NaNs sort outside the reals as in
    /// [`f64::total_cmp`].
    pub fn numeric_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int64(a), Value::Int64(b)) => Some(a.cmp(b)),
            (Value::Int64(a), Value::Float64(b)) => Some(cmp_int_float(*a, *b)),
            (Value::Float64(a), Value::Int64(b)) => Some(cmp_int_float(*b, *a).reverse()),
            (Value::Float64(a), Value::Float64(b)) => Some(cmp_floats(*a, *b)),
            _ => None,
        }
    }

    /// Returns the string slice for `Utf8`, `None` otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// String coercion used by filtering and mixed-type sorting. `Null` coerces to `""`.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Value::Utf8(s) => Cow::Borrowed(s.as_str()),
            Value::Null => Cow::Borrowed(""),
            other => Cow::Owned(other.to_string()),
        }
    }
}

/// 2^63, the first float above every `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn cmp_floats(a: f64, b: f64) -> Ordering {
    if a.is_nan() || b.is_nan() {
        a.total_cmp(&b)
    } else {
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}

fn cmp_int_float(i: i64, f: f64) -> Ordering {
    if f.is_nan() {
        return (i as f64).total_cmp(&f);
    }
    if f >= I64_BOUND {
        return Ordering::Less;
    }
    if f < -I64_BOUND {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    i.cmp(&(whole as i64)).then_with(|| cmp_floats(0.0, f - whole))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float64(v) if v.is_infinite() => {
                f.write_str(if *v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Value::Float64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Utf8(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int64(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Utf8(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Utf8(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Field lookup capability required by the table pipeline.
///
/// Returning `None` and returning `Some(&Value::Null)` are treated identically.
pub trait Record {
    /// Look up a field by name.
    fn field(&self, name: &str) -> Option<&Value>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<&Value> {
        (**self).field(name)
    }
}

impl Record for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Record for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Owned, schema-free record.
pub type Row = BTreeMap<String, Value>;

/// Build a [`Row`] from `(name, value)` pairs.
///
/// ```rust
/// use table_processing::types::{row, Record, Value};
///
/// let r = row([("id", Value::from(1)), ("name", Value::from("Ada"))]);
/// assert_eq!(r.field("name"), Some(&Value::Utf8("Ada".to_string())));
/// ```
pub fn row<K, V, I>(pairs: I) -> Row
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Logical data type for a typed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
}

/// A single named, typed column in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Column name.
    pub name: String,
    /// Column data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Column types for tabular sources whose cells arrive as text (CSV).
///
/// Columns not listed in a schema are still loaded, with their type inferred per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the declared field for `name`, if present.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::{row, Record, Value};
    use std::cmp::Ordering;
    use std::collections::HashMap;

    #[test]
    fn numeric_cmp_is_exact_above_f64_precision() {
        let big = Value::Int64(9_007_199_254_740_993);
        let below = Value::Int64(9_007_199_254_740_992);
        let below_f = Value::Float64(9_007_199_254_740_992.0);
        assert_eq!(big.numeric_cmp(&below), Some(Ordering::Greater));
        assert_eq!(big.numeric_cmp(&below_f), Some(Ordering::Greater));
        assert_eq!(below.numeric_cmp(&below_f), Some(Ordering::Equal));
    }

    #[test]
    fn numeric_cmp_mixes_ints_and_floats() {
        let cmp = |a: Value, b: Value| a.numeric_cmp(&b);
        assert_eq!(cmp(Value::Int64(2), Value::Float64(2.5)), Some(Ordering::Less));
        assert_eq!(cmp(Value::Int64(-2), Value::Float64(-2.5)), Some(Ordering::Greater));
        assert_eq!(cmp(Value::Float64(-0.0), Value::Int64(0)), Some(Ordering::Equal));
        let inf = Value::Float64(f64::INFINITY);
        assert_eq!(cmp(Value::Int64(i64::MAX), inf), Some(Ordering::Less));
        assert_eq!(cmp(Value::Int64(1), Value::from("1")), None);
    }

    #[test]
    fn text_coercion_matches_display() {
        assert_eq!(Value::Null.to_text(), "");
        assert_eq!(Value::Int64(-3).to_text(), "-3");
        assert_eq!(Value::Float64(1.0).to_text(), "1");
        assert_eq!(Value::Float64(2.5).to_text(), "2.5");
        assert_eq!(Value::Float64(f64::INFINITY).to_text(), "Infinity");
        assert_eq!(Value::Bool(true).to_text(), "true");
        assert_eq!(Value::from("Ada").to_text(), "Ada");
    }

    #[test]
    fn value_deserializes_untagged() {
        let vals: Vec<Value> = serde_json::from_str(r#"[null, 1, 1.5, true, "x"]"#).unwrap();
        assert_eq!(
            vals,
            vec![
                Value::Null,
                Value::Int64(1),
                Value::Float64(1.5),
                Value::Bool(true),
                Value::Utf8("x".to_string()),
            ]
        );
    }

    #[test]
    fn record_lookup_through_references_and_maps() {
        let r = row([("id", 7)]);
        let by_ref = &r;
        assert_eq!(by_ref.field("id"), Some(&Value::Int64(7)));
        assert_eq!(by_ref.field("missing"), None);

        let mut h: HashMap<String, Value> = HashMap::new();
        h.insert("name".to_string(), Value::from("Bob"));
        assert_eq!(h.field("name").and_then(Value::as_str), Some("Bob"));
    }

    #[test]
    fn option_converts_to_null() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::Utf8("a".to_string()));
    }
}
