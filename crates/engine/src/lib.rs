//! The patchdoc engine: document ingestion, field-level validation, and
//! selective apply.
//!
//! Entry point is [`Patch::from_json`]: it parses the raw input into a
//! [`Document`], materializes the entity instance, and validates every
//! mentioned field — eagerly, before returning. The resulting object is
//! read-only; [`Patch::apply`] and [`Patch::patch_for`] may be called any
//! number of times afterwards.

pub mod document;
pub mod patch;

pub use document::Document;
pub use patch::Patch;
