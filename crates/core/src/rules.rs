//! Validation rules attached to entity field descriptors.
//!
//! A rule is a predicate over a field value plus the whole materialized
//! instance (so rules may look at sibling fields), yielding at most one
//! violation message. Rules are declared directly on field descriptors via
//! [`patchable!`](crate::patchable) — an explicit registry, no attribute
//! scanning.
//!
//! Stock combinators cover the common cases; `Rule::new` accepts any custom
//! closure.

use serde_json::Value;

/// A single validation rule for one entity field.
///
/// The closure receives the field's materialized value and the whole
/// instance as context, and returns `Some(message)` on violation.
pub struct Rule<T> {
    check: Box<dyn Fn(&Value, &T) -> Option<String> + Send + Sync>,
}

impl<T> Rule<T> {
    /// Wrap a custom predicate as a rule.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&Value, &T) -> Option<String> + Send + Sync + 'static,
    {
        Rule {
            check: Box::new(check),
        }
    }

    /// Evaluate the rule, returning a violation message if any.
    pub fn check(&self, value: &Value, instance: &T) -> Option<String> {
        (self.check)(value, instance)
    }
}

/// Violation when the value is null or an empty string.
pub fn required<T>() -> Rule<T> {
    Rule::new(|value, _| match value {
        Value::Null => Some("required".to_string()),
        Value::String(s) if s.is_empty() => Some("required".to_string()),
        _ => None,
    })
}

/// Violation when a string value is longer than `limit` characters.
///
/// Non-string values pass; type mismatches are the deserializer's concern.
pub fn max_len<T>(limit: usize) -> Rule<T> {
    Rule::new(move |value, _| match value {
        Value::String(s) if s.chars().count() > limit => {
            Some(format!("length must be at most {limit}"))
        }
        _ => None,
    })
}

/// Violation when a string value is shorter than `limit` characters.
pub fn min_len<T>(limit: usize) -> Rule<T> {
    Rule::new(move |value, _| match value {
        Value::String(s) if s.chars().count() < limit => {
            Some(format!("length must be at least {limit}"))
        }
        _ => None,
    })
}

/// Violation when a numeric value falls outside `[min, max]`.
pub fn range<T>(min: i64, max: i64) -> Rule<T> {
    Rule::new(move |value, _| match value.as_i64() {
        Some(n) if n < min || n > max => Some(format!("must be between {min} and {max}")),
        _ => None,
    })
}

/// Violation when a string value is not one of the allowed variants.
pub fn one_of<T>(allowed: &'static [&'static str]) -> Rule<T> {
    Rule::new(move |value, _| match value {
        Value::String(s) if !allowed.contains(&s.as_str()) => {
            Some(format!("must be one of: {}", allowed.join(", ")))
        }
        _ => None,
    })
}
