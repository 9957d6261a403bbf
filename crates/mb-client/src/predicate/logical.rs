//! Logical operators for combining predicates.
//!
//! Supports Mountebank's logical operators: NOT, OR, AND.

use super::{Operator, Predicate};
use crate::error::ConfigurationError;

/// Builder for `not`. Takes exactly one child.
#[derive(Debug, Clone, Default)]
pub struct NotBuilder {
    children: Vec<Predicate>,
}

impl NotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn predicate(mut self, predicate: Predicate) -> Self {
        self.children.push(predicate);
        self
    }

    pub fn build(self) -> Result<Predicate, ConfigurationError> {
        let actual = self.children.len();
        let mut children = self.children.into_iter();
        match (children.next(), actual) {
            (Some(inner), 1) => Ok(Predicate::Not(Box::new(inner))),
            _ => Err(ConfigurationError::ChildCount {
                operator: Operator::Not.as_str(),
                expected: "exactly one",
                actual,
            }),
        }
    }
}

/// Which n-ary combinator a [`LogicalBuilder`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    Or,
    And,
}

impl LogicalOperator {
    pub fn operator(self) -> Operator {
        match self {
            LogicalOperator::Or => Operator::Or,
            LogicalOperator::And => Operator::And,
        }
    }
}

/// Builder for `or` and `and`. Takes two or more children; order is kept.
#[derive(Debug, Clone)]
pub struct LogicalBuilder {
    operator: LogicalOperator,
    children: Vec<Predicate>,
}

impl LogicalBuilder {
    pub fn new(operator: LogicalOperator) -> Self {
        Self {
            operator,
            children: Vec::new(),
        }
    }

    pub fn predicate(mut self, predicate: Predicate) -> Self {
        self.children.push(predicate);
        self
    }

    pub fn predicates(mut self, predicates: impl IntoIterator<Item = Predicate>) -> Self {
        self.children.extend(predicates);
        self
    }

    pub fn build(self) -> Result<Predicate, ConfigurationError> {
        if self.children.len() < 2 {
            return Err(ConfigurationError::ChildCount {
                operator: self.operator.operator().as_str(),
                expected: "at least two",
                actual: self.children.len(),
            });
        }

        Ok(match self.operator {
            LogicalOperator::Or => Predicate::Or(self.children),
            LogicalOperator::And => Predicate::And(self.children),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{and, equals, not, or};

    fn leaf(path: &str) -> Predicate {
        equals().path(path).build().unwrap()
    }

    #[test]
    fn test_not_requires_exactly_one_child() {
        let err = not().build().unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::ChildCount {
                operator: "not",
                expected: "exactly one",
                actual: 0
            }
        );

        let err = not()
            .predicate(leaf("/a"))
            .predicate(leaf("/b"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::ChildCount {
                operator: "not",
                expected: "exactly one",
                actual: 2
            }
        );

        let built = not().predicate(leaf("/a")).build().unwrap();
        assert_eq!(built, Predicate::Not(Box::new(leaf("/a"))));
    }

    #[test]
    fn test_or_and_require_two_children() {
        for (builder, name) in [(or(), "or"), (and(), "and")] {
            let err = builder.clone().build().unwrap_err();
            assert_eq!(
                err,
                ConfigurationError::ChildCount {
                    operator: name,
                    expected: "at least two",
                    actual: 0
                }
            );

            let err = builder.predicate(leaf("/only")).build().unwrap_err();
            assert!(matches!(
                err,
                ConfigurationError::ChildCount { actual: 1, .. }
            ));
        }
    }

    #[test]
    fn test_or_preserves_child_order() {
        let children = vec![leaf("/c"), leaf("/a"), leaf("/b")];
        let built = or().predicates(children.clone()).build().unwrap();
        assert_eq!(built, Predicate::Or(children));
    }

    #[test]
    fn test_and_does_not_flatten_nested_and() {
        let inner = and()
            .predicate(leaf("/a"))
            .predicate(leaf("/b"))
            .build()
            .unwrap();
        let outer = and()
            .predicate(inner.clone())
            .predicate(leaf("/c"))
            .build()
            .unwrap();

        assert_eq!(outer.children().len(), 2);
        assert_eq!(outer.children()[0], inner);
    }
}
