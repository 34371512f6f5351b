//! The `#[property(...)]` helper attribute.
//!
//! Accepted keys:
//! - `name = "..."`: override the derived property name
//! - `skip`: leave the method or field out of introspection
//! - `read_only`: (schema fields only) expose a reader but no writer
//!
//! A bare `#[property]` is accepted and means "no overrides".

use syn::{Attribute, ImplItem, ItemImpl, LitStr, Meta};

/// Helper attribute name.
pub const PROPERTY_ATTR: &str = "property";

/// Parsed `#[property(...)]` overrides for one method or field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyAttr {
    pub name: Option<String>,
    pub skip: bool,
    pub read_only: bool,
}

/// Collect every `#[property(...)]` attribute in `attrs` into one set of overrides.
///
/// ## Errors
///
/// Returns an error for unknown keys, a non-string `name`, or an empty `name`.
pub fn parse_property_attrs(attrs: &[Attribute]) -> syn::Result<PropertyAttr> {
    let mut out = PropertyAttr::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident(PROPERTY_ATTR)) {
        if matches!(attr.meta, Meta::Path(_)) {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new(lit.span(), "property name must not be empty"));
                }
                out.name = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                out.skip = true;
                Ok(())
            } else if meta.path.is_ident("read_only") {
                out.read_only = true;
                Ok(())
            } else {
                Err(meta.error("unsupported property attribute; expected `name`, `skip` or `read_only`"))
            }
        })?;
    }
    Ok(out)
}

/// Remove `#[property]` helper attributes from the methods of an impl block.
///
/// Attribute macros receive helper attributes verbatim, so they have to be stripped before the block is
/// re-emitted.
pub fn strip_property_attrs(item: &mut ItemImpl) {
    for impl_item in &mut item.items {
        if let ImplItem::Fn(method) = impl_item {
            method.attrs.retain(|a| !a.path().is_ident(PROPERTY_ATTR));
        }
    }
}
