//! End-to-end scenario tests for the public patchdoc API.
//!
//! These exercise the full flow through the facade crate: declare an
//! entity with rules, parse a raw patch document, inspect validation
//! results, and selectively apply onto a live target.

use patchdoc::{rules, ApplyError, Patch, PatchError, Rule};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct User {
    name: String,
    age: i64,
    email: Option<String>,
}

patchdoc::patchable! {
    User {
        name => NAME [rules::required(), rules::max_len(5)],
        age => AGE [rules::range(0, 130)],
        email => EMAIL [Rule::new(|value, _user: &User| {
            match value.as_str() {
                Some(s) if !s.contains('@') => Some("must contain '@'".to_string()),
                _ => None,
            }
        })],
    }
}

/// A live domain object, structurally coupled to `User` by field name.
#[derive(Debug, Default, PartialEq)]
struct UserAccount {
    name: String,
    age: i64,
    email: Option<String>,
}

patchdoc::apply_target! {
    UserAccount { name, age, email }
}

/// Scenario: `{"name": "", "age": 30}` → construction succeeds, the empty
/// name is recorded as invalid, and apply writes only the age.
#[test]
fn test_invalid_field_is_recorded_and_never_applied() {
    let patch = Patch::<User>::from_json(r#"{"name": "", "age": 30}"#).unwrap();

    assert!(patch.has_errors());
    assert_eq!(patch.validation_errors().len(), 1);
    assert_eq!(
        patch.validation_errors().get("name"),
        Some(&vec!["required".to_string()])
    );

    let mut account = UserAccount {
        name: "before".to_string(),
        age: 0,
        email: None,
    };
    patch
        .apply(&mut account, &[User::NAME, User::AGE])
        .unwrap();

    assert_eq!(account.name, "before");
    assert_eq!(account.age, 30);
}

/// Scenario: `{"Age": 30}` — Name omitted is simply absent, not invalid.
#[test]
fn test_omitted_field_is_absent_not_invalid() {
    let patch = Patch::<User>::from_json(r#"{"Age": 30}"#).unwrap();

    assert!(!patch.has_errors());
    assert_eq!(patch.patch_for(User::NAME), None);

    let mut account = UserAccount {
        name: "before".to_string(),
        ..Default::default()
    };
    patch.apply(&mut account, &[User::NAME]).unwrap();
    assert_eq!(account.name, "before");
}

/// Scenario: an unrecognized field name fails construction outright.
#[test]
fn test_unrecognized_field_fails_construction() {
    let err = Patch::<User>::from_json(r#"{"Nmae": "x"}"#).unwrap_err();
    assert!(matches!(err, PatchError::UnknownField { name } if name == "Nmae"));
}

/// Document casing never matters: "Name" and "name" resolve to the same
/// entity field with identical validation and apply behavior.
#[test]
fn test_casing_of_document_keys_is_irrelevant() {
    for raw in [r#"{"name": "anna"}"#, r#"{"Name": "anna"}"#, r#"{"NAME": "anna"}"#] {
        let patch = Patch::<User>::from_json(raw).unwrap();
        assert!(!patch.has_errors());
        assert_eq!(patch.patch_for(User::NAME), Some(json!("anna")));

        let mut account = UserAccount::default();
        patch.apply(&mut account, &[User::NAME]).unwrap();
        assert_eq!(account.name, "anna");
    }
}

/// Custom patch logic via the targeted query: callers decide validity
/// themselves and consume the intended value directly.
#[test]
fn test_custom_patch_logic_via_targeted_query() {
    let patch = Patch::<User>::from_json(r#"{"email": "a@b.example", "age": 52}"#).unwrap();
    assert!(!patch.has_errors());

    // Field with custom handling: consume the value, don't auto-apply.
    let intended = patch.patch_for(User::EMAIL).unwrap();
    assert_eq!(intended, json!("a@b.example"));

    // The rest goes through apply as usual.
    let mut account = UserAccount::default();
    patch.apply(&mut account, &[User::AGE]).unwrap();
    assert_eq!(account.age, 52);
    assert_eq!(account.email, None);
}

/// The query reports intent even for fields that failed validation.
#[test]
fn test_query_ignores_validity() {
    let patch = Patch::<User>::from_json(r#"{"email": "not-an-address"}"#).unwrap();
    assert!(patch.has_errors());
    assert_eq!(patch.patch_for(User::EMAIL), Some(json!("not-an-address")));
}

/// Apply has no cross-field transaction: a structural failure midway
/// leaves earlier writes in place.
#[test]
fn test_apply_failure_midway_keeps_earlier_writes() {
    #[derive(Debug, Default)]
    struct AgeOnly {
        age: i64,
    }

    patchdoc::apply_target! {
        AgeOnly { age }
    }

    let patch = Patch::<User>::from_json(r#"{"age": 30, "name": "anna"}"#).unwrap();
    let mut row = AgeOnly::default();
    let err = patch.apply(&mut row, &[User::AGE, User::NAME]).unwrap_err();

    assert!(matches!(err, ApplyError::NoSuchField { field } if field == "name"));
    assert_eq!(row.age, 30);
}

/// A fresh input requires a fresh patch object; existing objects are fixed.
#[test]
fn test_patch_object_is_read_only_across_uses() {
    let patch = Patch::<User>::from_json(r#"{"age": 30}"#).unwrap();

    let mut first = UserAccount::default();
    patch.apply(&mut first, &[User::AGE]).unwrap();

    // Same observations on every subsequent read.
    assert_eq!(patch.patch_for(User::AGE), Some(json!(30)));
    assert!(!patch.has_errors());

    let mut second = UserAccount::default();
    patch.apply(&mut second, &[User::AGE]).unwrap();
    assert_eq!(first, second);
}

/// Shared reads from multiple threads need no locking.
#[test]
fn test_concurrent_reads_from_shared_patch() {
    use std::sync::Arc;

    let patch = Arc::new(Patch::<User>::from_json(r#"{"name": "anna", "age": 30}"#).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let patch = Arc::clone(&patch);
            std::thread::spawn(move || {
                let mut account = UserAccount::default();
                patch
                    .apply(&mut account, &[User::NAME, User::AGE])
                    .unwrap();
                assert_eq!(account.name, "anna");
                assert_eq!(account.age, 30);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
