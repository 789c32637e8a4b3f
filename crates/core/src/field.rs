//! Field metadata for patchable entities.
//!
//! This module replaces runtime reflection with an explicit descriptor
//! table: each entity type carries a `FieldTable` mapping lower-cased field
//! names to a typed reader plus the field's attached validation rules. The
//! table is built once (init time, behind a `Lazy` in the generated
//! `Entity::field_table`) and reused for every patch object.

use crate::rules::Rule;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// An entity type that can be the subject of a patch document.
///
/// Implementations are generated by the [`patchable!`](crate::patchable)
/// macro. Entity structs must derive `Deserialize` and `Default` and carry
/// `#[serde(default)]`, so fields absent from a document take the type's
/// default values during materialization.
pub trait Entity: DeserializeOwned {
    /// The entity's field descriptor table, built once and reused.
    fn field_table() -> &'static FieldTable<Self>;
}

/// Metadata binding one entity field to its reader and validation rules.
pub struct FieldDescriptor<T> {
    /// Canonical field name (the Rust field identifier).
    pub name: &'static str,
    /// Reads the field's current value off a materialized instance.
    pub read: fn(&T) -> Value,
    /// Validation rules attached to this field.
    pub rules: Vec<Rule<T>>,
}

/// Per-entity descriptor table with a case-insensitive name index.
pub struct FieldTable<T> {
    fields: Vec<FieldDescriptor<T>>,
    by_lower: HashMap<String, usize>,
}

impl<T> FieldTable<T> {
    /// Build a table from a descriptor list.
    ///
    /// # Panics
    ///
    /// Panics if two field names collide case-insensitively. Document keys
    /// resolve case-insensitively, so such a table could not resolve them
    /// unambiguously; this is a schema defect caught at init time.
    pub fn new(fields: Vec<FieldDescriptor<T>>) -> Self {
        let mut by_lower = HashMap::with_capacity(fields.len());
        for (index, field) in fields.iter().enumerate() {
            let lower = field.name.to_lowercase();
            assert!(
                by_lower.insert(lower, index).is_none(),
                "field table for entity has case-insensitive name collision on `{}`",
                field.name
            );
        }
        FieldTable { fields, by_lower }
    }

    /// Resolve a field by name, case-insensitively.
    pub fn resolve(&self, name: &str) -> Option<&FieldDescriptor<T>> {
        self.by_lower
            .get(&name.to_lowercase())
            .map(|&index| &self.fields[index])
    }

    /// Look up a field by its exact canonical name.
    pub fn get(&self, canonical: &str) -> Option<&FieldDescriptor<T>> {
        self.fields.iter().find(|field| field.name == canonical)
    }

    /// All descriptors, in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the entity declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A typed token naming one field of entity `T`.
///
/// Tokens are generated as associated constants by
/// [`patchable!`](crate::patchable), so selecting a field is checked at
/// compile time — a renamed or misspelled field is a build error, not a
/// runtime lookup failure.
pub struct Field<T> {
    name: &'static str,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Field<T> {
    /// Construct a token for a canonical field name.
    #[doc(hidden)]
    pub const fn new(name: &'static str) -> Self {
        Field {
            name,
            _entity: PhantomData,
        }
    }

    /// The canonical field name this token resolves to.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

// Manual impls: the phantom marker must not impose bounds on T.
impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> PartialEq for Field<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.name).finish()
    }
}
