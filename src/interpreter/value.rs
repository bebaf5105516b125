use std::fmt::Display;

use crate::ast::LiteralValue;

/// A runtime value produced by evaluation.
///
/// Equality follows the derived implementation: two values are equal when
/// they have the same variant and the same payload, so values of different
/// types are never equal and `nil` equals only `nil`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Str(String),
    Bool(bool),
    Nil,
}

impl Value {
    /// Returns the truthiness of the value.
    ///
    /// Only `nil` and `false` are falsy; every other value, including `0`
    /// and the empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use tarn::interpreter::value::Value;
    ///
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::Str(String::new()).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(!Value::Nil.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Value::Number(*n),
            LiteralValue::Str(s) => Value::Str(s.clone()),
            LiteralValue::Bool(b) => Value::Bool(*b),
            LiteralValue::Nil => Value::Nil,
        }
    }
}

impl Display for Value {
    /// Renders the value the way `print` shows it.
    ///
    /// Whole numbers print without a fractional part, strings print without
    /// quotes, and the nil value prints as `nil`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Nil => write!(f, "nil"),
        }
    }
}
