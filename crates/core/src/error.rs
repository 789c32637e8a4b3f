//! Error types for patch construction and selective apply.
//!
//! All `PatchError` variants are construction-time and fatal: no partial
//! patch object is ever produced. Per-field rule violations are NOT errors —
//! they are data, recorded in the patch object's validation-error map.

use thiserror::Error;

/// Fatal errors raised while constructing a patch object.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The raw input is not well-formed JSON.
    #[error("invalid patch document: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// The raw input parsed, but its root is not a JSON object.
    #[error("patch document root must be a JSON object, found {found}")]
    NotAnObject {
        /// JSON type name of the actual root value
        found: &'static str,
    },

    /// A present field's value cannot be coerced to the entity's declared
    /// type for that field.
    #[error("cannot deserialize patch into entity: {source}")]
    Deserialize {
        #[source]
        source: serde_json::Error,
    },

    /// A document key matches no entity field, even case-insensitively.
    ///
    /// This is a caller/schema defect, not a validation failure of the data,
    /// so it aborts construction instead of landing in the error map.
    #[error("unknown field `{name}` in patch document")]
    UnknownField {
        /// The offending key as it appeared in the document
        name: String,
    },
}

/// Fatal errors raised while applying patch values to a target.
///
/// Invalid incoming values never reach the target (apply skips them), so
/// these variants only cover structural defects between the entity and the
/// target type.
#[derive(Debug, Error)]
pub enum ApplyError {
    /// The target type has no field with the entity field's name.
    #[error("target has no field named `{field}`")]
    NoSuchField {
        /// Canonical entity field name that failed to resolve on the target
        field: String,
    },

    /// The target has a same-named field, but the value cannot be coerced
    /// to the target field's type.
    #[error("value for field `{field}` is incompatible with the target: {source}")]
    IncompatibleValue {
        /// Canonical entity field name being written
        field: String,
        #[source]
        source: serde_json::Error,
    },
}
