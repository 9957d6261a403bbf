//! Builders for leaf predicates.

use super::{Field, Operator, Predicate, PredicateOptions, PresenceMatch, ValueMatch};
use crate::error::ConfigurationError;
use fancy_regex::Regex;
use std::collections::HashSet;

/// Value-comparing leaf operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOperator {
    Equals,
    Contains,
    StartsWith,
    EndsWith,
    Matches,
}

impl ValueOperator {
    pub fn operator(self) -> Operator {
        match self {
            ValueOperator::Equals => Operator::Equals,
            ValueOperator::Contains => Operator::Contains,
            ValueOperator::StartsWith => Operator::StartsWith,
            ValueOperator::EndsWith => Operator::EndsWith,
            ValueOperator::Matches => Operator::Matches,
        }
    }

    fn wrap(self, m: ValueMatch) -> Predicate {
        match self {
            ValueOperator::Equals => Predicate::Equals(m),
            ValueOperator::Contains => Predicate::Contains(m),
            ValueOperator::StartsWith => Predicate::StartsWith(m),
            ValueOperator::EndsWith => Predicate::EndsWith(m),
            ValueOperator::Matches => Predicate::Matches(m),
        }
    }
}

/// Builder for `equals`, `contains`, `startsWith`, `endsWith` and `matches`.
///
/// Exactly one field selector must be set before [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct ValueBuilder {
    operator: ValueOperator,
    fields: Vec<(Field, String)>,
    options: PredicateOptions,
}

impl ValueBuilder {
    pub fn new(operator: ValueOperator) -> Self {
        Self {
            operator,
            fields: Vec::new(),
            options: PredicateOptions::default(),
        }
    }

    pub fn path(self, value: impl Into<String>) -> Self {
        self.field(Field::Path, value)
    }

    pub fn method(self, value: impl Into<String>) -> Self {
        self.field(Field::Method, value)
    }

    pub fn query(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.field(Field::Query(key.into()), value)
    }

    pub fn header(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.field(Field::Header(name.into()), value)
    }

    pub fn body(self, value: impl Into<String>) -> Self {
        self.field(Field::Body, value)
    }

    pub fn field(mut self, field: Field, value: impl Into<String>) -> Self {
        self.fields.push((field, value.into()));
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.options.case_sensitive = Some(case_sensitive);
        self
    }

    /// Regex the server strips from the request value before comparing.
    pub fn except(mut self, pattern: impl Into<String>) -> Self {
        self.options.except = Some(pattern.into());
        self
    }

    pub fn build(self) -> Result<Predicate, ConfigurationError> {
        let operator = self.operator.operator().as_str();
        let count = self.fields.len();
        let Some((field, value)) = self.fields.into_iter().next() else {
            return Err(ConfigurationError::MissingSelector { operator });
        };
        if count > 1 {
            return Err(ConfigurationError::MultipleSelectors { operator, count });
        }

        if self.operator == ValueOperator::Matches {
            validate_pattern(&value)?;
        }
        if let Some(except) = &self.options.except {
            validate_pattern(except)?;
        }

        Ok(self.operator.wrap(ValueMatch {
            field,
            value,
            options: self.options,
        }))
    }
}

/// Builder for `exists`.
///
/// Accepts several selectors, each naming a distinct field, mirroring the
/// server's `{"exists": {"method": true, "query": {"q": false}}}` form.
#[derive(Debug, Clone, Default)]
pub struct ExistsBuilder {
    fields: Vec<(Field, bool)>,
    options: PredicateOptions,
}

impl ExistsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(self, exists: bool) -> Self {
        self.field(Field::Path, exists)
    }

    pub fn method(self, exists: bool) -> Self {
        self.field(Field::Method, exists)
    }

    pub fn query(self, key: impl Into<String>, exists: bool) -> Self {
        self.field(Field::Query(key.into()), exists)
    }

    pub fn header(self, name: impl Into<String>, exists: bool) -> Self {
        self.field(Field::Header(name.into()), exists)
    }

    pub fn body(self, exists: bool) -> Self {
        self.field(Field::Body, exists)
    }

    pub fn field(mut self, field: Field, exists: bool) -> Self {
        self.fields.push((field, exists));
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.options.case_sensitive = Some(case_sensitive);
        self
    }

    pub fn build(self) -> Result<Predicate, ConfigurationError> {
        let operator = Operator::Exists.as_str();
        if self.fields.is_empty() {
            return Err(ConfigurationError::MissingSelector { operator });
        }

        let mut seen = HashSet::new();
        for (field, _) in &self.fields {
            if !seen.insert(field) {
                return Err(ConfigurationError::DuplicateSelector {
                    operator,
                    field: field.to_string(),
                });
            }
        }

        Ok(Predicate::Exists(PresenceMatch {
            fields: self.fields,
            options: self.options,
        }))
    }
}

fn validate_pattern(pattern: &str) -> Result<(), ConfigurationError> {
    Regex::new(pattern)
        .map(|_| ())
        .map_err(|e| ConfigurationError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}
