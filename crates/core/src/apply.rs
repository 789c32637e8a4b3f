//! Named field writes on arbitrary target objects.
//!
//! The patch engine copies validated values onto caller-owned targets
//! through this trait. Implementations are deliberately narrow: a write is
//! matched by field name and deserialized into the target field's exact
//! type — no silent coercion, and a structural mismatch is a fatal
//! [`ApplyError`], not a skipped write.
//!
//! Use [`apply_target!`](crate::apply_target) to generate an implementation
//! for a plain struct.

use crate::error::ApplyError;
use serde_json::Value;

/// A type that accepts field-by-field writes from a patch object.
pub trait ApplyTarget {
    /// Write `value` into the field named `name`.
    ///
    /// Returns [`ApplyError::NoSuchField`] when the target has no such
    /// field, and [`ApplyError::IncompatibleValue`] when the value cannot
    /// be deserialized into the field's type.
    fn write_field(&mut self, name: &str, value: Value) -> Result<(), ApplyError>;
}
