//! Single-field record sorting.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::{Record, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[serde(alias = "asc")]
    Ascending,
    /// Largest first.
    #[serde(alias = "desc")]
    Descending,
}

/// Optional sort field plus optional direction.
///
/// If either part is missing the pipeline keeps the filtered order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub direction: Option<SortDirection>,
}

impl SortDirective {
    /// No sorting.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            direction: Some(SortDirection::Ascending),
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            direction: Some(SortDirection::Descending),
        }
    }

    /// Returns the field and direction when both are present.
    pub fn resolved(&self) -> Option<(&str, SortDirection)> {
        match (&self.field, self.direction) {
            (Some(field), Some(direction)) => Some((field.as_str(), direction)),
            _ => None,
        }
    }
}

/// Compare two field values for sorting in `direction`.
///
/// Nulls (including absent fields) always trail, whatever the direction. Strings use
/// [`locale_cmp`], numbers compare numerically, and mixed types compare by their text form.
///
/// This pairwise rule is not transitive once a column mixes numbers with other types, so
/// [`sort_records`] does not apply it value by value there: in such a column two numbers are
/// ordered by their text form (`10` before `9`), while this function orders them numerically.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>, direction: SortDirection) -> Ordering {
    compare_nulls_last(a, b, direction, compare_present)
}

fn compare_nulls_last(
    a: Option<&Value>,
    b: Option<&Value>,
    direction: SortDirection,
    cmp: impl Fn(&Value, &Value) -> Ordering,
) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    let ord = match (a, b) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Greater,
        (Some(_), None) => return Ordering::Less,
        (Some(a), Some(b)) => cmp(a, b),
    };
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

fn compare_present(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Utf8(a), Value::Utf8(b)) => locale_cmp(a, b),
        _ => a.numeric_cmp(b).unwrap_or_else(|| compare_text(a, b)),
    }
}

fn compare_numeric(a: &Value, b: &Value) -> Ordering {
    a.numeric_cmp(b).unwrap_or(Ordering::Equal)
}

fn compare_text(a: &Value, b: &Value) -> Ordering {
    locale_cmp(&a.to_text(), &b.to_text())
}

/// Human-oriented string ordering.
///
/// Letters compare case-insensitively first; on a tie lowercase sorts before uppercase, and any
/// remaining tie falls back to byte order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if folded != Ordering::Equal {
        return folded;
    }
    let case = a
        .chars()
        .map(|c| c.is_uppercase())
        .cmp(b.chars().map(|c| c.is_uppercase()));
    case.then_with(|| a.cmp(b))
}

/// Stable in-place sort of `records` by `directive`. A no-op when the directive is incomplete.
///
/// The collation is chosen once per column so the comparison is a total order: if every present
/// value is a number the column sorts numerically (integers exactly), otherwise every value sorts
/// by its text form through [`locale_cmp`]. For columns holding only numbers, or only one
/// non-numeric type, this agrees with [`compare_values`].
pub fn sort_records<R: Record>(records: &mut [R], directive: &SortDirective) {
    let Some((field, direction)) = directive.resolved() else {
        return;
    };
    let numeric = records
        .iter()
        .filter_map(|r| r.field(field))
        .filter(|v| !v.is_null())
        .all(|v| v.as_f64().is_some());

    let cmp: fn(&Value, &Value) -> Ordering = if numeric {
        compare_numeric
    } else {
        compare_text
    };
    records.sort_by(|a, b| compare_nulls_last(a.field(field), b.field(field), direction, cmp));
}
