//! Macros that expose a type's structure to the beanprobe introspector.
//!
//! Rust has no runtime reflection, so the metadata the introspector needs is captured at compile time:
//! - `#[accessors]`: on an inherent impl block; records its method signatures for accessor discovery
//! - `Schema`: derive on a struct; declares its properties explicitly, one per named field
//!
//! Both generate an `impl ::beanprobe::Introspect`.

use beanprobe_core::{MethodSignature, PropertySchema, Receiver};
use beanprobe_syntax::attrs::strip_property_attrs;
use beanprobe_syntax::schema::schema_properties;
use beanprobe_syntax::signature::{method_signatures, self_type_name};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, ItemImpl, parse_macro_input};

fn option_string(value: Option<&str>) -> TokenStream2 {
    match value {
        Some(v) => quote!(::std::option::Option::Some(::std::string::String::from(#v))),
        None => quote!(::std::option::Option::None),
    }
}

fn method_tokens(sig: &MethodSignature) -> TokenStream2 {
    let name = &sig.name;
    let receiver = match sig.receiver {
        Receiver::None => quote!(None),
        Receiver::Ref => quote!(Ref),
        Receiver::RefMut => quote!(RefMut),
        Receiver::Value => quote!(Value),
    };
    let params = &sig.params;
    let output = option_string(sig.output.as_deref());
    let is_public = sig.is_public;
    let property_name = option_string(sig.property_name.as_deref());
    let skip = sig.skip;

    quote! {
        ::beanprobe::MethodSignature {
            name: ::std::string::String::from(#name),
            receiver: ::beanprobe::Receiver::#receiver,
            params: ::std::vec![#(::std::string::String::from(#params)),*],
            output: #output,
            is_public: #is_public,
            property_name: #property_name,
            skip: #skip,
        }
    }
}

fn schema_tokens(prop: &PropertySchema) -> TokenStream2 {
    let name = &prop.name;
    let property_type = &prop.property_type;
    let read_only = prop.read_only;

    quote! {
        ::beanprobe::PropertySchema {
            name: ::std::string::String::from(#name),
            property_type: ::std::string::String::from(#property_type),
            read_only: #read_only,
        }
    }
}

fn expand_accessors(item: &mut ItemImpl) -> syn::Result<TokenStream2> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "`#[accessors]` must be placed on an inherent impl block, not a trait impl",
        ));
    }
    let type_name = self_type_name(item)
        .ok_or_else(|| syn::Error::new_spanned(&item.self_ty, "`#[accessors]` requires a named self type"))?;
    let methods = method_signatures(item)?;
    strip_property_attrs(item);

    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();
    let methods = methods.iter().map(method_tokens);

    Ok(quote! {
        #item

        impl #impl_generics ::beanprobe::Introspect for #self_ty #where_clause {
            fn type_info() -> ::beanprobe::TypeInfo {
                ::beanprobe::TypeInfo::from_methods(#type_name, ::std::vec![#(#methods),*])
            }
        }
    })
}

/// Record the method signatures of an inherent impl block so the introspector can discover its accessors.
///
/// Methods may carry `#[property(name = "...")]` to override the derived property name, or `#[property(skip)]`
/// to be ignored.
///
/// # Example
/// ```ignore
/// #[beanprobe::accessors]
/// impl EmployeePojo {
///     pub fn get_start(&self) -> &CalendarDate { &self.start_date }
/// }
///
/// // Generates (alongside the unchanged impl block):
/// impl beanprobe::Introspect for EmployeePojo {
///     fn type_info() -> beanprobe::TypeInfo { /* one MethodSignature per method */ }
/// }
/// ```
#[proc_macro_attribute]
pub fn accessors(args: TokenStream, input: TokenStream) -> TokenStream {
    if !args.is_empty() {
        let args = TokenStream2::from(args);
        return syn::Error::new_spanned(args, "`#[accessors]` takes no arguments")
            .to_compile_error()
            .into();
    }
    let mut item = parse_macro_input!(input as ItemImpl);
    expand_accessors(&mut item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_schema(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "`Schema` can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "`Schema` can only be derived for structs",
            ));
        }
    };

    let name = &input.ident;
    let name_str = name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let properties = schema_properties(fields)?;
    let properties = properties.iter().map(schema_tokens);

    Ok(quote! {
        impl #impl_generics ::beanprobe::Introspect for #name #ty_generics #where_clause {
            fn type_info() -> ::beanprobe::TypeInfo {
                ::beanprobe::TypeInfo::from_schema(#name_str, ::std::vec![#(#properties),*])
            }
        }
    })
}

/// Declare a struct's properties explicitly, one per named field, in declaration order.
///
/// Field attributes:
/// - `#[property(name = "...")]`: use this name instead of the lowerCamelCase field name
/// - `#[property(skip)]`: not a property
/// - `#[property(read_only)]`: readable but not writable
///
/// # Example
/// ```ignore
/// #[derive(beanprobe::Schema)]
/// struct EmployeeRecord {
///     #[property(name = "start")]
///     start_date: CalendarDate,
///     #[property(skip)]
///     first_name: String,
/// }
///
/// // Generates:
/// impl beanprobe::Introspect for EmployeeRecord {
///     fn type_info() -> beanprobe::TypeInfo { /* TypeInfo::from_schema("EmployeeRecord", [start]) */ }
/// }
/// ```
#[proc_macro_derive(Schema, attributes(property))]
pub fn derive_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_schema(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
