//! Request field selectors targeted by leaf predicates.

use serde_json::{Map, Value};
use std::fmt;

/// The part of an incoming request a leaf predicate looks at.
///
/// `Query` and `Header` are keyed; the server nests them one level deeper on
/// the wire (`{"query": {"q": ...}}`, `{"headers": {"Accept": ...}}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Path,
    Method,
    Query(String),
    Header(String),
    Body,
}

impl Field {
    /// Wire name of the selector.
    pub fn wire_key(&self) -> &'static str {
        match self {
            Field::Path => "path",
            Field::Method => "method",
            Field::Query(_) => "query",
            Field::Header(_) => "headers",
            Field::Body => "body",
        }
    }

    fn nested_key(&self) -> Option<&str> {
        match self {
            Field::Query(key) | Field::Header(key) => Some(key),
            Field::Path | Field::Method | Field::Body => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.nested_key() {
            Some(key) => write!(f, "{}.{}", self.wire_key(), key),
            None => f.write_str(self.wire_key()),
        }
    }
}

/// Render `(selector, value)` pairs as the operator's field object,
/// grouping keyed selectors under their shared wire key.
pub(crate) fn fields_to_wire<V>(fields: &[(Field, V)]) -> Map<String, Value>
where
    V: Clone + Into<Value>,
{
    let mut out = Map::new();
    for (field, value) in fields {
        let value: Value = value.clone().into();
        match field.nested_key() {
            Some(key) => {
                let slot = out
                    .entry(field.wire_key())
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Value::Object(nested) = slot {
                    nested.insert(key.to_string(), value);
                }
            }
            None => {
                out.insert(field.wire_key().to_string(), value);
            }
        }
    }
    out
}
