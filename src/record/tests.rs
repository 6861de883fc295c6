//! Tests for record registration.

use super::{FieldMut, FieldRef, FieldValue, Record, duplicate_keys};
use crate::kind::Kind;

#[derive(Debug, Default, PartialEq)]
struct Service {
    name: String,
    port: u16,
    url: String,
    token: String,
}

crate::record!(Service {
    name,
    port: "-",
    url: "SERVICE_URL,omitempty",
    token: "-",
});

#[derive(Debug, Default)]
struct Aliased {
    primary: String,
    fallback: String,
    other: String,
}

crate::record!(Aliased {
    primary: "HOST",
    fallback: "HOST",
    other,
});

#[test]
fn test_fields_follow_declaration_order() {
    let names: Vec<&str> = Service::fields().iter().map(|f| f.name).collect();

    assert_eq!(names, vec!["name", "port", "url", "token"]);
}

#[test]
fn test_missing_config_is_empty_string() {
    let fields = Service::fields();

    assert_eq!(fields[0].config, "");
    assert_eq!(fields[2].config, "SERVICE_URL,omitempty");
}

#[test]
fn test_field_resolve_applies_naming_policy() {
    let fields = Service::fields();

    assert_eq!(fields[0].resolve().key_name, "NAME");
    assert!(fields[1].resolve().skip);
    assert_eq!(fields[2].resolve().key_name, "SERVICE_URL");
    assert!(fields[2].resolve().omit_empty);
}

#[test]
fn test_accessors_expose_strings() {
    let mut service = Service {
        name: "api".to_string(),
        ..Default::default()
    };
    let name = &Service::fields()[0];

    assert_eq!((name.get)(&service), FieldRef::Str("api"));

    if let FieldMut::Str(value) = (name.get_mut)(&mut service) {
        value.push_str("-v2");
    }
    assert_eq!(service.name, "api-v2");
}

#[test]
fn test_accessors_report_other_kinds() {
    let mut service = Service::default();
    let port = &Service::fields()[1];

    assert_eq!((port.get)(&service), FieldRef::Other(Kind::U16));
    assert_eq!((port.get_mut)(&mut service), FieldMut::Other(Kind::U16));
}

#[test]
fn test_collection_kinds() {
    assert_eq!(Vec::<String>::new().field_ref(), FieldRef::Other(Kind::Sequence));
    assert_eq!(None::<String>.field_ref(), FieldRef::Other(Kind::Option));
    assert_eq!(
        std::collections::HashMap::<String, String>::new().field_ref(),
        FieldRef::Other(Kind::Map)
    );
    assert_eq!(true.field_ref(), FieldRef::Other(Kind::Bool));
    assert_eq!(1.5f64.field_ref(), FieldRef::Other(Kind::F64));
}

#[test]
fn test_registered_record_is_a_struct_field() {
    assert_eq!(Service::default().field_ref(), FieldRef::Other(Kind::Struct));
}

#[test]
fn test_duplicate_keys_none_when_unique() {
    assert!(duplicate_keys::<Service>().is_empty());
}

#[test]
fn test_duplicate_keys_reported_once() {
    assert_eq!(duplicate_keys::<Aliased>(), vec!["HOST".to_string()]);
}
