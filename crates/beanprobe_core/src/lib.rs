//! Shared, pure building blocks for beanprobe: accessor naming conventions and the metadata model.
//!
//! This crate is intentionally small and dependency-light (`serde` is optional). It holds deterministic helpers
//! that both:
//! - the macros and source scanner use to describe a type, and
//! - the runtime introspector uses to turn that description into property descriptors.
//!
//! ## Notes
//!
//! - No IO, no global state, no `syn` types.

pub mod conventions;
pub mod model;

pub use model::{MethodSignature, PropertyDescriptor, PropertySchema, Receiver, TypeInfo};
