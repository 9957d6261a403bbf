//! Mountebank-compatible predicates for stub matching.
//!
//! A [`Predicate`] is a tree: leaves compare one part of the request
//! (`equals`, `contains`, `startsWith`, `endsWith`, `matches`) or check for
//! presence (`exists`), and the logical operators (`not`, `or`, `and`)
//! combine other predicates. Matching itself happens on the server; this
//! module only describes and serializes the tree.
//!
//! Predicates are produced by the builders returned from the functions in
//! this module, which validate shape before anything is sent:
//!
//! ```
//! use mb_client::predicate;
//!
//! let equals = predicate::equals().path("/test-path").build()?;
//! let contains = predicate::contains().header("Accept", "application/json").build()?;
//! let either = predicate::or().predicates([equals, contains]).build()?;
//!
//! assert_eq!(either.operator().as_str(), "or");
//! # Ok::<(), mb_client::ConfigurationError>(())
//! ```
//!
//! # Module Structure
//!
//! - `field` - Request field selectors and their wire layout
//! - `options` - Leaf parameters (caseSensitive, except)
//! - `builder` - Leaf builders (value operators and exists)
//! - `logical` - Logical operator builders (NOT, OR, AND)

mod builder;
mod field;
mod logical;
mod options;

pub use builder::{ExistsBuilder, ValueBuilder, ValueOperator};
pub use field::Field;
pub use logical::{LogicalBuilder, LogicalOperator, NotBuilder};
pub use options::PredicateOptions;

use field::fields_to_wire;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Operator kind of a predicate, named as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equals,
    Contains,
    StartsWith,
    EndsWith,
    Matches,
    Exists,
    Not,
    Or,
    And,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::Contains => "contains",
            Operator::StartsWith => "startsWith",
            Operator::EndsWith => "endsWith",
            Operator::Matches => "matches",
            Operator::Exists => "exists",
            Operator::Not => "not",
            Operator::Or => "or",
            Operator::And => "and",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value comparison against exactly one request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueMatch {
    field: Field,
    value: String,
    options: PredicateOptions,
}

impl ValueMatch {
    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn options(&self) -> &PredicateOptions {
        &self.options
    }
}

/// Presence checks for one or more request fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceMatch {
    fields: Vec<(Field, bool)>,
    options: PredicateOptions,
}

impl PresenceMatch {
    /// `(field, should_exist)` pairs in the order they were set.
    pub fn fields(&self) -> &[(Field, bool)] {
        &self.fields
    }

    pub fn options(&self) -> &PredicateOptions {
        &self.options
    }
}

/// A request-matching rule.
///
/// Children of `or`/`and` keep their insertion order so the serialized form
/// is deterministic; the server does not give that order any meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Equals(ValueMatch),
    Contains(ValueMatch),
    StartsWith(ValueMatch),
    EndsWith(ValueMatch),
    Matches(ValueMatch),
    Exists(PresenceMatch),
    Not(Box<Predicate>),
    Or(Vec<Predicate>),
    And(Vec<Predicate>),
}

impl Predicate {
    pub fn operator(&self) -> Operator {
        match self {
            Predicate::Equals(_) => Operator::Equals,
            Predicate::Contains(_) => Operator::Contains,
            Predicate::StartsWith(_) => Operator::StartsWith,
            Predicate::EndsWith(_) => Operator::EndsWith,
            Predicate::Matches(_) => Operator::Matches,
            Predicate::Exists(_) => Operator::Exists,
            Predicate::Not(_) => Operator::Not,
            Predicate::Or(_) => Operator::Or,
            Predicate::And(_) => Operator::And,
        }
    }

    /// Child predicates of a logical operator; empty for leaves.
    pub fn children(&self) -> &[Predicate] {
        match self {
            Predicate::Not(inner) => std::slice::from_ref(inner.as_ref()),
            Predicate::Or(children) | Predicate::And(children) => children,
            _ => &[],
        }
    }

    /// Render the predicate in the server's JSON schema.
    pub fn to_json(&self) -> Value {
        let operator = self.operator().as_str().to_string();
        let mut out = Map::new();
        match self {
            Predicate::Equals(m)
            | Predicate::Contains(m)
            | Predicate::StartsWith(m)
            | Predicate::EndsWith(m)
            | Predicate::Matches(m) => {
                let fields = [(m.field.clone(), m.value.clone())];
                out.insert(operator, Value::Object(fields_to_wire(&fields)));
                m.options.write_to(&mut out);
            }
            Predicate::Exists(p) => {
                out.insert(operator, Value::Object(fields_to_wire(&p.fields)));
                p.options.write_to(&mut out);
            }
            Predicate::Not(inner) => {
                out.insert(operator, inner.to_json());
            }
            Predicate::Or(children) | Predicate::And(children) => {
                let children = children.iter().map(Predicate::to_json).collect();
                out.insert(operator, Value::Array(children));
            }
        }
        Value::Object(out)
    }
}

impl Serialize for Predicate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

/// Start an `equals` predicate.
pub fn equals() -> ValueBuilder {
    ValueBuilder::new(ValueOperator::Equals)
}

/// Start a `contains` predicate.
pub fn contains() -> ValueBuilder {
    ValueBuilder::new(ValueOperator::Contains)
}

/// Start a `startsWith` predicate.
pub fn starts_with() -> ValueBuilder {
    ValueBuilder::new(ValueOperator::StartsWith)
}

/// Start an `endsWith` predicate.
pub fn ends_with() -> ValueBuilder {
    ValueBuilder::new(ValueOperator::EndsWith)
}

/// Start a `matches` (regex) predicate.
pub fn matches() -> ValueBuilder {
    ValueBuilder::new(ValueOperator::Matches)
}

/// Start an `exists` predicate.
pub fn exists() -> ExistsBuilder {
    ExistsBuilder::new()
}

/// Start a `not` predicate.
pub fn not() -> NotBuilder {
    NotBuilder::new()
}

/// Start an `or` predicate.
pub fn or() -> LogicalBuilder {
    LogicalBuilder::new(LogicalOperator::Or)
}

/// Start an `and` predicate.
pub fn and() -> LogicalBuilder {
    LogicalBuilder::new(LogicalOperator::And)
}
