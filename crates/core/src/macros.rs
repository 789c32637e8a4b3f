//! Macros generating entity field tables and apply-target impls.
//!
//! `patchable!` turns a plain struct into an [`Entity`](crate::Entity):
//! it builds the field descriptor table (readers + rules) behind a `Lazy`
//! static and emits one typed [`Field`](crate::Field) constant per declared
//! field. `apply_target!` generates the same-named-field
//! [`ApplyTarget`](crate::ApplyTarget) shim for a target struct.

/// Declare a struct as a patchable entity.
///
/// The struct must derive `Deserialize` and `Default` and carry
/// `#[serde(default)]` so unmentioned fields materialize to their defaults.
/// Each declared field names a token constant and lists its validation
/// rules (any expressions evaluating to `Rule<Entity>`).
///
/// ```
/// use patchdoc_core::{patchable, rules};
/// use serde::Deserialize;
///
/// #[derive(Debug, Default, Deserialize)]
/// #[serde(default)]
/// struct User {
///     name: String,
///     age: i64,
/// }
///
/// patchable! {
///     User {
///         name => NAME [rules::required(), rules::max_len(5)],
///         age => AGE [],
///     }
/// }
///
/// use patchdoc_core::Entity;
/// assert_eq!(User::field_table().len(), 2);
/// assert_eq!(User::NAME.name(), "name");
/// ```
#[macro_export]
macro_rules! patchable {
    (
        $entity:ty {
            $( $field:ident => $token:ident [ $( $rule:expr ),* $(,)? ] ),* $(,)?
        }
    ) => {
        impl $crate::Entity for $entity {
            fn field_table() -> &'static $crate::FieldTable<Self> {
                static TABLE: $crate::once_cell::sync::Lazy<$crate::FieldTable<$entity>> =
                    $crate::once_cell::sync::Lazy::new(|| {
                        $crate::FieldTable::new(vec![
                            $(
                                $crate::FieldDescriptor {
                                    name: stringify!($field),
                                    read: |entity: &$entity| {
                                        $crate::serde_json::to_value(&entity.$field)
                                            .unwrap_or($crate::serde_json::Value::Null)
                                    },
                                    rules: vec![ $( $rule ),* ],
                                },
                            )*
                        ])
                    });
                &TABLE
            }
        }

        impl $entity {
            $(
                pub const $token: $crate::Field<$entity> =
                    $crate::Field::new(stringify!($field));
            )*
        }
    };
}

/// Implement [`ApplyTarget`](crate::ApplyTarget) for a struct, restricted
/// to the listed fields.
///
/// Writes resolve by exact field name and deserialize into the field's
/// declared type; anything else fails fast.
///
/// ```
/// use patchdoc_core::{apply_target, ApplyTarget};
///
/// #[derive(Default)]
/// struct Account {
///     name: String,
///     age: i64,
/// }
///
/// apply_target! {
///     Account { name, age }
/// }
///
/// let mut account = Account::default();
/// account.write_field("age", serde_json::json!(30)).unwrap();
/// assert_eq!(account.age, 30);
/// ```
#[macro_export]
macro_rules! apply_target {
    (
        $target:ty {
            $( $field:ident ),* $(,)?
        }
    ) => {
        impl $crate::ApplyTarget for $target {
            fn write_field(
                &mut self,
                name: &str,
                value: $crate::serde_json::Value,
            ) -> Result<(), $crate::ApplyError> {
                match name {
                    $(
                        stringify!($field) => {
                            self.$field = $crate::serde_json::from_value(value).map_err(
                                |source| $crate::ApplyError::IncompatibleValue {
                                    field: name.to_string(),
                                    source,
                                },
                            )?;
                            Ok(())
                        }
                    )*
                    _ => Err($crate::ApplyError::NoSuchField {
                        field: name.to_string(),
                    }),
                }
            }
        }
    };
}
