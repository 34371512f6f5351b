//! Method signatures of inherent impl blocks.

use beanprobe_core::conventions::normalize_type_name;
use beanprobe_core::{MethodSignature, Receiver};
use quote::ToTokens;
use syn::{FnArg, ImplItem, ImplItemFn, ItemImpl, ReturnType, Type, Visibility};

use crate::attrs::parse_property_attrs;

/// Render a type as its normalised spelling (`Option<String>`, `&'a str`).
pub fn type_name(ty: &Type) -> String {
    normalize_type_name(&ty.to_token_stream().to_string())
}

/// Name of the type an impl block is for: the last path segment, without generics.
///
/// Returns `None` for self types that are not paths (`impl [u8]`, `impl &Foo`).
pub fn self_type_name(item: &ItemImpl) -> Option<String> {
    match &*item.self_ty {
        Type::Path(path) => path.path.segments.last().map(|seg| seg.ident.to_string()),
        _ => None,
    }
}

fn receiver_of(method: &ImplItemFn) -> Receiver {
    let Some(receiver) = method.sig.receiver() else {
        return Receiver::None;
    };
    match &*receiver.ty {
        Type::Reference(r) if r.mutability.is_some() => Receiver::RefMut,
        Type::Reference(_) => Receiver::Ref,
        _ => Receiver::Value,
    }
}

fn output_of(method: &ImplItemFn) -> Option<String> {
    match &method.sig.output {
        ReturnType::Default => None,
        ReturnType::Type(_, ty) => match &**ty {
            Type::Tuple(tuple) if tuple.elems.is_empty() => None,
            ty => Some(type_name(ty)),
        },
    }
}

/// Describe one method.
///
/// ## Errors
///
/// Returns an error when the method's `#[property]` attribute is malformed or uses `read_only`, which only
/// applies to schema fields.
pub fn method_signature(method: &ImplItemFn) -> syn::Result<MethodSignature> {
    let attr = parse_property_attrs(&method.attrs)?;
    if attr.read_only {
        return Err(syn::Error::new_spanned(
            &method.sig.ident,
            "`read_only` applies to schema fields; omit the `set_` method instead",
        ));
    }

    let params = method
        .sig
        .inputs
        .iter()
        .filter_map(|arg| match arg {
            FnArg::Typed(pat) => Some(type_name(&pat.ty)),
            FnArg::Receiver(_) => None,
        })
        .collect();

    Ok(MethodSignature {
        name: method.sig.ident.to_string(),
        receiver: receiver_of(method),
        params,
        output: output_of(method),
        is_public: matches!(method.vis, Visibility::Public(_)),
        property_name: attr.name,
        skip: attr.skip,
    })
}

/// Describe every method of an impl block, in declaration order.
///
/// ## Errors
///
/// Propagates the first malformed `#[property]` attribute.
pub fn method_signatures(item: &ItemImpl) -> syn::Result<Vec<MethodSignature>> {
    item.items
        .iter()
        .filter_map(|impl_item| match impl_item {
            ImplItem::Fn(method) => Some(method_signature(method)),
            _ => None,
        })
        .collect()
}
