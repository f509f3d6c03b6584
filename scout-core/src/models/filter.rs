use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::Document;

/// A single metadata filter predicate.
///
/// Untagged: a `{min, max}` map is a range test, a list is set membership,
/// anything else is an exact match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Range {
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
    },
    OneOf(Vec<Value>),
    Exact(Value),
}

impl FilterValue {
    /// Whether a document field value satisfies this predicate.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FilterValue::Exact(expected) => value == expected,
            FilterValue::OneOf(allowed) => allowed.contains(value),
            FilterValue::Range { min, max } => {
                let Some(n) = value.as_f64() else {
                    return false;
                };
                if let Some(lo) = min {
                    if n < *lo {
                        return false;
                    }
                }
                if let Some(hi) = max {
                    if n > *hi {
                        return false;
                    }
                }
                true
            }
        }
    }
}

/// Named filters over document metadata. BTreeMap keeps evaluation order
/// deterministic.
pub type FilterMap = BTreeMap<String, FilterValue>;

/// Whether a document passes every filter.
///
/// A document missing a filtered field is excluded. An empty map is a no-op.
pub fn matches_filters(document: &Document, filters: &FilterMap) -> bool {
    filters.iter().all(|(key, predicate)| {
        document
            .field_value(key)
            .is_some_and(|value| predicate.matches(&value))
    })
}
