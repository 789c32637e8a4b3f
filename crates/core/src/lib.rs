//! Core types for the patchdoc selective-patch engine.
//!
//! This crate owns everything the engine shares with application code:
//! - Field metadata: [`Entity`], [`FieldDescriptor`], [`FieldTable`], and
//!   the typed [`Field`] selector tokens
//! - The [`rules`] registry attached to field descriptors
//! - The [`ApplyTarget`] write shim for caller-owned targets
//! - [`PatchError`] / [`ApplyError`]
//! - The [`patchable!`] and [`apply_target!`] generator macros

pub mod apply;
pub mod error;
pub mod field;
pub mod rules;

#[macro_use]
mod macros;

pub use apply::ApplyTarget;
pub use error::{ApplyError, PatchError};
pub use field::{Entity, Field, FieldDescriptor, FieldTable};
pub use rules::Rule;

// Re-exported for the generator macros; not part of the public API.
#[doc(hidden)]
pub use once_cell;
#[doc(hidden)]
pub use serde_json;
