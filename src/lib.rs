#![forbid(unsafe_code)]
//! Bean-style property introspection for Rust types and source files.
//!
//! A property is discovered the way a bean introspector discovers one: from a public reader
//! (`get_first_name(&self) -> T`, `is_active(&self) -> bool`) and/or writer (`set_first_name(&mut self, T)`),
//! named in lowerCamelCase (`firstName`). Types can instead declare their properties explicitly.
//!
//! Rust has no runtime reflection, so the structural metadata is captured at compile time:
//! - `#[beanprobe::accessors]` on an inherent impl block records its method signatures;
//! - `#[derive(beanprobe::Schema)]` declares one property per named field.
//!
//! Both implement [`Introspect`]; [`property_names`] and [`Introspector`] turn that into descriptors. The same
//! discovery runs over unparsed source through [`scan`] (and the `beanprobe` CLI).
//!
//! ## Panic Policy
//!
//! - **Library code**: returns `Result`; introspection never panics on a malformed type. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

// Lets the macros' `::beanprobe::...` paths resolve in this crate's unit tests (`introspector::tests`).
extern crate self as beanprobe;

pub mod cli;
pub mod config;
pub mod errors;
pub mod expect;
pub mod introspect;
pub mod introspector;

pub use beanprobe_core::conventions;
pub use beanprobe_core::{MethodSignature, PropertyDescriptor, PropertySchema, Receiver, TypeInfo};
pub use beanprobe_derive::{Schema, accessors};
pub use beanprobe_syntax::scan;

pub use config::{IntrospectorConfig, PropertyOrder};
pub use errors::{AccessorRole, IntrospectionError};
pub use introspect::Introspect;
pub use introspector::{Introspector, property_descriptors, property_names};
