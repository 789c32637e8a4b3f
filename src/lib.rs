//! Patchdoc: selective JSON patch objects with field-level validation.
//!
//! Build a [`Patch`] from a raw JSON document describing a partial update,
//! inspect which fields it intends to change and which of those failed
//! validation, then copy the valid ones onto a live target under caller
//! control.
//!
//! This crate re-exports the public surface of the member crates with a
//! clean unified interface.
//!
//! # Example
//!
//! ```
//! use patchdoc::{rules, Patch};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize)]
//! #[serde(default)]
//! struct User {
//!     name: String,
//!     age: i64,
//! }
//!
//! patchdoc::patchable! {
//!     User {
//!         name => NAME [rules::required(), rules::max_len(5)],
//!         age => AGE [rules::range(0, 130)],
//!     }
//! }
//!
//! #[derive(Debug, Default)]
//! struct UserRow {
//!     name: String,
//!     age: i64,
//! }
//!
//! patchdoc::apply_target! {
//!     UserRow { name, age }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let patch = Patch::<User>::from_json(r#"{"name": "", "age": 30}"#)?;
//! assert!(patch.has_errors());
//!
//! let mut row = UserRow { name: "keep".into(), age: 0 };
//! patch.apply(&mut row, &[User::NAME, User::AGE])?;
//! assert_eq!(row.name, "keep"); // invalid value never written
//! assert_eq!(row.age, 30);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Public API types
// ============================================================================

// Field metadata and selector tokens
pub use patchdoc_core::{Entity, Field, FieldDescriptor, FieldTable};

// Validation rules
pub use patchdoc_core::rules;
pub use patchdoc_core::Rule;

// Target write shim
pub use patchdoc_core::ApplyTarget;

// Errors
pub use patchdoc_core::{ApplyError, PatchError};

// The patch object and its document view
pub use patchdoc_engine::{Document, Patch};

// Generator macros (exported from patchdoc-core's crate root)
pub use patchdoc_core::{apply_target, patchable};
