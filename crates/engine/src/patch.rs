//! The selective-patch object.
//!
//! A [`Patch`] is built once from raw JSON and is read-only afterwards. It
//! holds three things: the parsed [`Document`] (which fields the input
//! mentions, under their original casing), the materialized entity instance
//! (what each mentioned field would become), and the validation-error map
//! (which mentioned fields failed their rules). Construction is eager: by
//! the time `from_json` returns, parsing, materialization, and every field
//! rule have run.
//!
//! Applying is caller-controlled and per-field: only fields that are both
//! present in the document and free of violations are copied onto the
//! target; everything else is left untouched.

use crate::document::Document;
use patchdoc_core::{ApplyError, ApplyTarget, Entity, Field, PatchError};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// A validated partial update for entity type `T`.
///
/// Logically immutable after construction; safe to share across threads
/// (`apply` mutates only the caller's target).
#[derive(Debug)]
pub struct Patch<T: Entity> {
    document: Document,
    instance: T,
    errors: BTreeMap<String, Vec<String>>,
}

impl<T: Entity + 'static> Patch<T> {
    /// Parse, materialize, and validate a raw JSON patch document.
    ///
    /// Fails fast on malformed input, a non-object root, a document key
    /// matching no entity field, or a value that cannot be coerced to its
    /// field's declared type. Rule violations do not fail construction;
    /// they are recorded in [`validation_errors`](Self::validation_errors).
    pub fn from_json(raw: &str) -> Result<Self, PatchError> {
        let document = Document::parse(raw)?;
        let table = T::field_table();

        // Resolve every document key up front. An unmatched key is a
        // caller/schema defect, never a soft validation failure.
        let mut canonical = Map::new();
        for (key, value) in document.entries() {
            let descriptor = table
                .resolve(key)
                .ok_or_else(|| PatchError::UnknownField { name: key.clone() })?;
            canonical.insert(descriptor.name.to_string(), value.clone());
        }

        // Materialize under canonical field names; unmentioned fields take
        // the entity's defaults via #[serde(default)].
        let instance: T = serde_json::from_value(Value::Object(canonical))
            .map_err(|source| PatchError::Deserialize { source })?;

        // Validate only the mentioned fields, keyed by the document's
        // original casing.
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, _) in document.entries() {
            let descriptor = match table.resolve(key) {
                Some(descriptor) => descriptor,
                None => continue, // resolved above
            };
            let value = (descriptor.read)(&instance);
            for rule in &descriptor.rules {
                if let Some(message) = rule.check(&value, &instance) {
                    errors.entry(key.clone()).or_default().push(message);
                }
            }
        }

        debug!(
            fields = document.len(),
            fields_with_violations = errors.len(),
            "patch constructed"
        );

        Ok(Patch {
            document,
            instance,
            errors,
        })
    }

    /// Validation violations, keyed by the document's original field names.
    ///
    /// A key is present iff at least one rule failed for that field. An
    /// absent key means the field was either not mentioned or mentioned and
    /// valid — distinguish the two via [`document`](Self::document).
    pub fn validation_errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    /// Whether any mentioned field failed validation.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The parsed document (read-only).
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Copy present-and-valid fields onto `target`, in the given order.
    ///
    /// Per field, independently: absent from the document → skip; recorded
    /// in the validation-error map → skip; otherwise the materialized value
    /// is written to the target's same-named field. A structural mismatch
    /// on the target is fatal and propagates; fields already written stay
    /// written (no transaction across fields).
    pub fn apply<A: ApplyTarget>(
        &self,
        target: &mut A,
        fields: &[Field<T>],
    ) -> Result<(), ApplyError> {
        let table = T::field_table();
        for field in fields {
            let descriptor =
                table
                    .get(field.name())
                    .ok_or_else(|| ApplyError::NoSuchField {
                        field: field.name().to_string(),
                    })?;

            let Some(original) = self.document.original_key(descriptor.name) else {
                continue;
            };
            if self.errors.contains_key(original) {
                trace!(field = descriptor.name, "skipping invalid field");
                continue;
            }

            let value = (descriptor.read)(&self.instance);
            target.write_field(descriptor.name, value)?;
            trace!(field = descriptor.name, "field applied");
        }
        Ok(())
    }

    /// The value this patch intends for one field, if the document mentions
    /// it at all.
    ///
    /// Returns `None` when the field is absent from the document. A key set
    /// to explicit JSON null still counts as mentioned and yields the
    /// materialized value (typically the field's default). Validity is
    /// deliberately not consulted here — callers implementing custom patch
    /// logic check [`has_errors`](Self::has_errors) /
    /// [`validation_errors`](Self::validation_errors) themselves.
    pub fn patch_for(&self, field: Field<T>) -> Option<Value> {
        let descriptor = T::field_table().get(field.name())?;
        self.document.original_key(descriptor.name)?;
        Some((descriptor.read)(&self.instance))
    }
}
