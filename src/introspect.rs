//! The `Introspect` trait: how a compiled type hands its structural metadata to an introspector.

use beanprobe_core::TypeInfo;

/// Provides a type's structural metadata.
///
/// This trait is normally generated, either by `#[beanprobe::accessors]` on an inherent impl block (accessor
/// discovery) or by `#[derive(beanprobe::Schema)]` (explicit schema). Implementing it by hand is how a type
/// supplies a schema the macros cannot express.
///
/// # Examples
///
/// ```rust
/// use beanprobe::{Introspect, PropertySchema, TypeInfo};
///
/// struct Handwritten;
///
/// impl Introspect for Handwritten {
///     fn type_info() -> TypeInfo {
///         TypeInfo::from_schema("Handwritten", vec![PropertySchema::new("start", "u32")])
///     }
/// }
///
/// assert_eq!(beanprobe::property_names::<Handwritten>().unwrap(), vec!["start"]);
/// ```
pub trait Introspect {
    /// Returns the declared methods or explicit schema of this type.
    fn type_info() -> TypeInfo;
}
