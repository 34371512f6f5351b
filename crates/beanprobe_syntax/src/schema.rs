//! Explicit property schemas declared with `#[derive(Schema)]`.

use beanprobe_core::PropertySchema;
use beanprobe_core::conventions::to_property_name;
use syn::punctuated::Punctuated;
use syn::{Attribute, FieldsNamed, Path, Token};

use crate::attrs::parse_property_attrs;
use crate::signature::type_name;

/// Derive name recognised by the scanner.
pub const SCHEMA_DERIVE: &str = "Schema";

/// Check whether an item's attributes include `#[derive(Schema)]` (or any path ending in `Schema`).
pub fn derives_schema(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|a| a.path().is_ident("derive"))
        .filter_map(|a| a.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated).ok())
        .flatten()
        .any(|path| path.segments.last().is_some_and(|seg| seg.ident == SCHEMA_DERIVE))
}

/// Build the explicit schema for a struct's named fields, in declaration order.
///
/// Every field is a property unless it carries `#[property(skip)]`. The property name is the lowerCamelCase
/// form of the field name unless `#[property(name = "...")]` overrides it.
///
/// ## Errors
///
/// Propagates malformed `#[property]` attributes.
pub fn schema_properties(fields: &FieldsNamed) -> syn::Result<Vec<PropertySchema>> {
    let mut out = Vec::with_capacity(fields.named.len());
    for field in &fields.named {
        let attr = parse_property_attrs(&field.attrs)?;
        if attr.skip {
            continue;
        }
        let Some(ident) = &field.ident else {
            continue;
        };
        let name = match attr.name {
            Some(name) => name,
            None => {
                let raw = ident.to_string();
                to_property_name(raw.strip_prefix("r#").unwrap_or(&raw))
            }
        };
        out.push(PropertySchema {
            name,
            property_type: type_name(&field.ty),
            read_only: attr.read_only,
        });
    }
    Ok(out)
}
