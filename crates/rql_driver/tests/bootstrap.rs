//! Runs in its own process: no test here registers `Term` by hand.

#![cfg(feature = "auto_register")]

use rql_driver::{Term, TermType, r};
use rql_encoding::encoder::{GlobalEncoder, Traversal};
use rql_encoding::opaque::{global_registry, is_opaque};

#[test]
fn term_is_opaque_before_first_use() {
    assert!(is_opaque::<Term>());
    assert!(!is_opaque::<TermType>());
    assert_eq!(GlobalEncoder.traversal::<Term>(), Traversal::Opaque);
}

#[test]
fn structural_check_rejects_term() {
    let query = r::db("test").table("users");

    let err = GlobalEncoder.check_structural::<Term>().unwrap_err();
    assert!(err.ty().is::<Term>());

    // The self-describing path still works.
    assert_eq!(query.to_json().unwrap(), r#"[15,[[14,["test"]],"users"]]"#);
}

#[test]
fn registry_lists_term_once() {
    let count = global_registry()
        .read()
        .iter()
        .filter(|ty| ty.is::<Term>())
        .count();
    assert_eq!(count, 1);
}
