//! Predicate parameters that modify how the server evaluates a leaf.

use serde_json::{Map, Value};

/// Optional leaf parameters, emitted next to the operator key.
///
/// Unset values are left off the wire so the server applies its own
/// defaults (case-insensitive matching, nothing stripped).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateOptions {
    /// Whether the server compares values case-sensitively.
    pub case_sensitive: Option<bool>,
    /// Regex stripped from the request value before matching.
    pub except: Option<String>,
}

impl PredicateOptions {
    pub fn is_empty(&self) -> bool {
        self.case_sensitive.is_none() && self.except.is_none()
    }

    pub(crate) fn write_to(&self, predicate: &mut Map<String, Value>) {
        if let Some(case_sensitive) = self.case_sensitive {
            predicate.insert("caseSensitive".to_string(), Value::Bool(case_sensitive));
        }
        if let Some(except) = &self.except {
            predicate.insert("except".to_string(), Value::String(except.clone()));
        }
    }
}
