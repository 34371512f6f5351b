//! Structural metadata model: what a type declares, and what an introspector reports about it.
//!
//! `TypeInfo` plays the role of a class descriptor. It is produced either by the `beanprobe_derive` macros at
//! compile time or by the source scanner, and consumed by the introspector.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The `self` form a method takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Receiver {
    /// Associated function (no `self`).
    None,
    /// `&self`
    Ref,
    /// `&mut self`
    RefMut,
    /// `self` / `mut self`
    Value,
}

/// Declared signature of one method in an inherent impl block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MethodSignature {
    /// Method identifier (`get_first_name`).
    pub name: String,
    pub receiver: Receiver,
    /// Normalised parameter types, excluding the receiver.
    pub params: Vec<String>,
    /// Normalised return type; `None` for unit.
    pub output: Option<String>,
    pub is_public: bool,
    /// Explicit property name from `#[property(name = "...")]`.
    pub property_name: Option<String>,
    /// Set by `#[property(skip)]`.
    pub skip: bool,
}

impl MethodSignature {
    /// Create a public method signature with no helper-attribute overrides.
    pub fn new(name: impl Into<String>, receiver: Receiver) -> Self {
        Self {
            name: name.into(),
            receiver,
            params: Vec::new(),
            output: None,
            is_public: true,
            property_name: None,
            skip: false,
        }
    }

    /// Append a parameter type.
    pub fn with_param(mut self, ty: impl Into<String>) -> Self {
        self.params.push(ty.into());
        self
    }

    /// Set the return type.
    pub fn with_output(mut self, ty: impl Into<String>) -> Self {
        self.output = Some(ty.into());
        self
    }

    /// Set visibility.
    pub fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Override the derived property name.
    pub fn with_property_name(mut self, name: impl Into<String>) -> Self {
        self.property_name = Some(name.into());
        self
    }

    /// Exclude this method from accessor discovery.
    pub fn skipped(mut self) -> Self {
        self.skip = true;
        self
    }
}

/// One explicitly declared property (from `#[derive(Schema)]`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertySchema {
    pub name: String,
    pub property_type: String,
    pub read_only: bool,
}

impl PropertySchema {
    pub fn new(name: impl Into<String>, property_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            property_type: property_type.into(),
            read_only: false,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

/// Structural metadata of one type.
///
/// When `schema` is `Some`, the type declared its properties explicitly and method signatures are not consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeInfo {
    pub name: String,
    pub methods: Vec<MethodSignature>,
    pub schema: Option<Vec<PropertySchema>>,
}

impl TypeInfo {
    /// Metadata for a type discovered through its accessor methods.
    pub fn from_methods(name: impl Into<String>, methods: Vec<MethodSignature>) -> Self {
        Self {
            name: name.into(),
            methods,
            schema: None,
        }
    }

    /// Metadata for a type with an explicit property schema.
    pub fn from_schema(name: impl Into<String>, schema: Vec<PropertySchema>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            schema: Some(schema),
        }
    }
}

/// What an introspector reports about one property.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyDescriptor {
    /// Programmatic name (`firstName`).
    pub name: String,
    /// Human-facing name; equal to `name` unless a future source supplies one.
    pub display_name: String,
    /// Owned-form property type.
    pub property_type: String,
    pub read_method: Option<String>,
    pub write_method: Option<String>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, property_type: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            property_type: property_type.into(),
            read_method: None,
            write_method: None,
        }
    }

    pub fn is_readable(&self) -> bool {
        self.read_method.is_some()
    }

    pub fn is_writable(&self) -> bool {
        self.write_method.is_some()
    }
}
