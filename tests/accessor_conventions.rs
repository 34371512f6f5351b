//! Accessor discovery through `#[accessors]` on compiled types.

#![allow(dead_code)]

use beanprobe::{
    AccessorRole, IntrospectionError, Introspector, IntrospectorConfig, PropertyOrder, accessors, property_descriptors,
    property_names,
};

struct Flags {
    active: bool,
    verified: bool,
}

#[accessors]
impl Flags {
    pub fn get_active(&self) -> bool {
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn set_verified(&mut self, verified: bool) {
        self.verified = verified;
    }
}

#[test]
fn boolean_reader_prefers_is_prefix() {
    let descriptors = property_descriptors::<Flags>().unwrap();
    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[0].name, "active");
    assert_eq!(descriptors[0].read_method.as_deref(), Some("is_active"));
    assert_eq!(descriptors[1].name, "verified");
    assert!(descriptors[1].is_writable());
}

struct Endpoint {
    url: String,
    retries: u8,
    cache: Vec<u8>,
}

#[accessors]
impl Endpoint {
    #[property(name = "URL")]
    pub fn get_url(&self) -> &str {
        &self.url
    }

    #[property(name = "URL")]
    pub fn set_url(&mut self, url: &str) {
        self.url = url.to_string();
    }

    #[property(skip)]
    pub fn get_cache(&self) -> &[u8] {
        &self.cache
    }

    pub fn set_retries(&mut self, retries: u8) {
        self.retries = retries;
    }
}

#[test]
fn rename_and_skip_attributes() {
    let descriptors = property_descriptors::<Endpoint>().unwrap();
    let names: Vec<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();
    // Byte-wise order puts uppercase first.
    assert_eq!(names, vec!["URL", "retries"]);
    assert_eq!(descriptors[0].property_type, "String");
    assert!(!descriptors[1].is_readable(), "write-only property");
}

#[test]
fn helper_attributes_are_stripped_from_the_impl() {
    let mut endpoint = Endpoint {
        url: String::new(),
        retries: 0,
        cache: vec![1, 2],
    };
    endpoint.set_url("https://example.invalid");
    endpoint.set_retries(3);
    assert_eq!(endpoint.get_url(), "https://example.invalid");
    assert_eq!(endpoint.get_cache(), &[1, 2]);
}

struct Inventory {
    count: u32,
}

#[accessors]
impl Inventory {
    pub fn get_class(&self) -> &'static str {
        "Inventory"
    }

    pub fn get_count(&self) -> u32 {
        self.count
    }

    pub(crate) fn get_hidden(&self) -> u32 {
        0
    }

    pub fn get_shape(self) -> u32 {
        self.count
    }

    pub fn get_default() -> u32 {
        0
    }

    pub fn get_(&self) -> u32 {
        0
    }
}

#[test]
fn class_is_suppressed_by_default() {
    assert_eq!(property_names::<Inventory>().unwrap(), ["count"]);
}

#[test]
fn suppression_is_configurable() {
    let keep_class = Introspector::new(IntrospectorConfig::new().without_default_suppressions());
    assert_eq!(keep_class.property_names::<Inventory>().unwrap(), ["class", "count"]);

    let hide_count = Introspector::new(IntrospectorConfig::new().with_suppressed("count"));
    assert!(hide_count.property_names::<Inventory>().unwrap().is_empty());
}

struct Timeline {
    zeta: u8,
    alpha: u8,
}

#[accessors]
impl Timeline {
    pub fn set_zeta(&mut self, zeta: u8) {
        self.zeta = zeta;
    }

    pub fn get_alpha(&self) -> u8 {
        self.alpha
    }

    pub fn get_zeta(&self) -> u8 {
        self.zeta
    }
}

#[test]
fn declaration_order_is_optional() {
    assert_eq!(property_names::<Timeline>().unwrap(), ["alpha", "zeta"]);

    let declared = Introspector::new(IntrospectorConfig::new().with_order(PropertyOrder::Declaration));
    assert_eq!(declared.property_names::<Timeline>().unwrap(), ["zeta", "alpha"]);
}

struct Wrapper<T> {
    inner: T,
}

#[accessors]
impl<T: Clone + 'static> Wrapper<T> {
    pub fn get_inner(&self) -> T {
        self.inner.clone()
    }

    pub fn set_inner(&mut self, inner: T) {
        self.inner = inner;
    }
}

#[test]
fn generic_types_are_supported() {
    let descriptors = property_descriptors::<Wrapper<u8>>().unwrap();
    assert_eq!(descriptors[0].name, "inner");
    assert_eq!(descriptors[0].property_type, "T");
    assert!(descriptors[0].is_readable() && descriptors[0].is_writable());

    // Each instantiation is its own cache entry.
    let introspector = Introspector::default();
    introspector.property_names::<Wrapper<u8>>().unwrap();
    introspector.property_names::<Wrapper<String>>().unwrap();
    assert_eq!(introspector.cached_type_count(), 2);
}

struct Doubled {
    id: u64,
}

#[accessors]
impl Doubled {
    pub fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    #[property(name = "id")]
    pub fn set_identifier(&mut self, id: u64) {
        self.id = id;
    }
}

#[test]
fn two_writers_for_one_property_is_an_error() {
    let err = property_names::<Doubled>().unwrap_err();
    assert_eq!(
        err,
        IntrospectionError::DuplicateAccessor {
            type_name: "Doubled".into(),
            property: "id".into(),
            role: AccessorRole::Writer,
            first: "set_id".into(),
            second: "set_identifier".into(),
        }
    );
}

struct Status {
    label: String,
}

#[accessors]
impl Status {
    pub fn get_ready(&self) -> String {
        self.label.clone()
    }

    pub fn is_ready(&self) -> bool {
        !self.label.is_empty()
    }
}

#[test]
fn non_boolean_getter_next_to_is_getter_is_ambiguous() {
    let err = property_names::<Status>().unwrap_err();
    assert!(matches!(err, IntrospectionError::AmbiguousReader { .. }));
    assert!(err.to_string().contains("`get_ready` does not return `bool`"));
}

struct Device {
    name: String,
    position: u8,
}

#[accessors]
impl Device {
    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_3d_position(&self) -> u8 {
        self.position
    }
}

#[test]
fn derived_names_may_start_with_a_digit() {
    // Byte-wise order puts digits before letters.
    assert_eq!(property_names::<Device>().unwrap(), ["3dPosition", "name"]);
}

struct Relabelled {
    start: u8,
}

#[accessors]
impl Relabelled {
    #[property(name = "3d")]
    pub fn get_start(&self) -> u8 {
        self.start
    }
}

#[test]
fn invalid_explicit_name_is_rejected() {
    let err = property_names::<Relabelled>().unwrap_err();
    assert_eq!(
        err,
        IntrospectionError::InvalidPropertyName {
            type_name: "Relabelled".into(),
            property: "3d".into(),
        }
    );
}
