//! Types that declare their properties with `#[derive(Schema)]` instead of accessor methods.

#![allow(dead_code)]

use beanprobe::{
    Introspect, IntrospectionError, Introspector, IntrospectorConfig, PropertyOrder, PropertySchema, Schema, TypeInfo,
    property_descriptors, property_names,
};

#[derive(Schema)]
struct EmployeeRecord {
    start_date: u32,
    first_name: String,
    #[property(name = "surname")]
    last_name: String,
    #[property(skip)]
    internal_id: u64,
    #[property(read_only)]
    badge: &'static str,
}

#[test]
fn schema_properties_keep_declaration_order() {
    assert_eq!(
        property_names::<EmployeeRecord>().unwrap(),
        ["startDate", "firstName", "surname", "badge"]
    );

    // Ordering applies to discovered accessors only.
    let by_declaration = Introspector::new(IntrospectorConfig::new().with_order(PropertyOrder::Declaration));
    assert_eq!(
        by_declaration.property_names::<EmployeeRecord>().unwrap(),
        property_names::<EmployeeRecord>().unwrap()
    );
}

#[test]
fn schema_descriptors_use_field_access() {
    let descriptors = property_descriptors::<EmployeeRecord>().unwrap();
    let badge = &descriptors[3];
    assert_eq!(badge.property_type, "String");
    assert_eq!(badge.read_method.as_deref(), Some("field:badge"));
    assert!(!badge.is_writable());

    let surname = &descriptors[2];
    assert_eq!(surname.write_method.as_deref(), Some("field:surname"));
}

#[derive(Schema)]
struct Empty {}

#[test]
fn empty_schema_has_no_properties() {
    assert!(property_names::<Empty>().unwrap().is_empty());
}

#[derive(Schema)]
struct Tagged<T: 'static> {
    #[property(name = "tag")]
    value: Option<T>,
}

#[test]
fn generic_schema() {
    let descriptors = property_descriptors::<Tagged<u8>>().unwrap();
    assert_eq!(descriptors[0].name, "tag");
    assert_eq!(descriptors[0].property_type, "Option<T>");
}

/// Hand-written implementation; the macros cannot produce a duplicate.
struct Handwritten;

impl Introspect for Handwritten {
    fn type_info() -> TypeInfo {
        TypeInfo::from_schema(
            "Handwritten",
            vec![PropertySchema::new("start", "u32"), PropertySchema::new("start", "u64")],
        )
    }
}

#[test]
fn duplicate_schema_property_is_an_error() {
    assert_eq!(
        property_names::<Handwritten>().unwrap_err(),
        IntrospectionError::DuplicateProperty {
            type_name: "Handwritten".into(),
            property: "start".into(),
        }
    );
}

#[derive(Schema)]
struct BadName {
    #[property(name = "start date")]
    start_date: u32,
}

#[test]
fn invalid_renamed_property_is_an_error() {
    let err = property_names::<BadName>().unwrap_err();
    assert!(matches!(err, IntrospectionError::InvalidPropertyName { .. }));
    assert_eq!(err.to_string(), "`BadName`: `start date` is not a valid property name");
}

#[derive(Schema)]
struct WithClass {
    class: String,
    name: String,
}

#[test]
fn suppression_applies_to_schemas() {
    assert_eq!(property_names::<WithClass>().unwrap(), ["name"]);
    let keep_all = Introspector::new(IntrospectorConfig::new().without_default_suppressions());
    assert_eq!(keep_all.property_names::<WithClass>().unwrap(), ["class", "name"]);
}
