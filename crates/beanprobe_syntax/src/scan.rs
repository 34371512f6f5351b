//! Source-level introspection: describe the types declared in a Rust file without compiling it.
//!
//! The scanner sees the same declarations the macros see, so `scan_source` on a file and the `Introspect`
//! impls generated for that file describe the same types.
//!
//! When a type has an impl block marked `#[accessors]`, only marked blocks are read for it, since those are the
//! blocks its compiled `Introspect` impl records. Types without a marked block have all inherent impls merged.

use std::collections::{HashMap, HashSet};

use beanprobe_core::{MethodSignature, TypeInfo};
use miette::{Diagnostic, NamedSource, SourceSpan};
use syn::{Attribute, Fields, Item, ItemImpl, ItemStruct};
use thiserror::Error;

use crate::schema::{derives_schema, schema_properties};
use crate::signature::{method_signatures, self_type_name};

/// Errors produced while scanning a source file.
#[derive(Debug, Error, Diagnostic)]
pub enum ScanError {
    #[error("failed to parse Rust source at {line}:{column}: {message}")]
    #[diagnostic(code(beanprobe::scan::parse))]
    Parse {
        message: String,
        line: usize,
        column: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("invalid declaration at {line}:{column}: {message}")]
    #[diagnostic(code(beanprobe::scan::declaration))]
    Declaration {
        message: String,
        line: usize,
        column: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },
}

impl ScanError {
    /// 1-based line of the error.
    pub fn line(&self) -> usize {
        match self {
            ScanError::Parse { line, .. } | ScanError::Declaration { line, .. } => *line,
        }
    }

    fn located(name: &str, source: &str, err: &syn::Error) -> (String, usize, usize, NamedSource<String>, SourceSpan) {
        let start = err.span().start();
        let offset = byte_offset(source, start.line, start.column);
        (
            err.to_string(),
            start.line,
            start.column + 1,
            NamedSource::new(name, source.to_string()),
            SourceSpan::from((offset, 1)),
        )
    }

    fn parse(name: &str, source: &str, err: &syn::Error) -> Self {
        let (message, line, column, src, span) = Self::located(name, source, err);
        ScanError::Parse {
            message,
            line,
            column,
            src,
            span,
        }
    }

    fn declaration(name: &str, source: &str, err: &syn::Error) -> Self {
        let (message, line, column, src, span) = Self::located(name, source, err);
        ScanError::Declaration {
            message,
            line,
            column,
            src,
            span,
        }
    }
}

/// Convert a 1-based line and 0-based character column into a byte offset, clamped to the source length.
fn byte_offset(source: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (idx, text) in source.split_inclusive('\n').enumerate() {
        if idx + 1 == line {
            let within: usize = text.chars().take(column).map(char::len_utf8).sum();
            return offset + within.min(text.len());
        }
        offset += text.len();
    }
    source.len()
}

/// Attribute macro whose blocks are authoritative for a type.
const ACCESSORS_ATTR: &str = "accessors";

fn marks_accessors(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .any(|a| a.path().segments.last().is_some_and(|seg| seg.ident == ACCESSORS_ATTR))
}

/// Accumulates type metadata in order of first appearance.
#[derive(Default)]
struct Collector {
    types: Vec<TypeInfo>,
    index: HashMap<String, usize>,
    /// Types with at least one `#[accessors]` block seen so far.
    marked: HashSet<String>,
}

impl Collector {
    fn entry(&mut self, name: String) -> &mut TypeInfo {
        let idx = match self.index.get(&name) {
            Some(&idx) => idx,
            None => {
                self.types.push(TypeInfo::from_methods(name.clone(), Vec::new()));
                self.index.insert(name, self.types.len() - 1);
                self.types.len() - 1
            }
        };
        &mut self.types[idx]
    }

    fn visit_items(&mut self, items: &[Item]) -> syn::Result<()> {
        for item in items {
            match item {
                Item::Struct(item) => self.visit_struct(item)?,
                Item::Impl(item) => self.visit_impl(item)?,
                Item::Mod(module) => {
                    if let Some((_, nested)) = &module.content {
                        self.visit_items(nested)?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn visit_struct(&mut self, item: &ItemStruct) -> syn::Result<()> {
        let schema = if derives_schema(&item.attrs) {
            match &item.fields {
                Fields::Named(fields) => Some(schema_properties(fields)?),
                _ => {
                    return Err(syn::Error::new_spanned(
                        &item.ident,
                        "`Schema` can only be derived for structs with named fields",
                    ));
                }
            }
        } else {
            None
        };
        let entry = self.entry(item.ident.to_string());
        if schema.is_some() {
            entry.schema = schema;
        }
        Ok(())
    }

    fn visit_impl(&mut self, item: &ItemImpl) -> syn::Result<()> {
        // Trait methods are not part of a type's own accessor surface.
        if item.trait_.is_some() {
            return Ok(());
        }
        let Some(name) = self_type_name(item) else {
            return Ok(());
        };
        let methods: Vec<MethodSignature> = method_signatures(item)?;
        let is_marked = marks_accessors(&item.attrs);
        let already_marked = self.marked.contains(&name);
        if already_marked && !is_marked {
            return Ok(());
        }
        if is_marked && !already_marked {
            self.marked.insert(name.clone());
            // Unmarked blocks read so far are not part of the compiled description.
            self.entry(name).methods = methods;
            return Ok(());
        }
        self.entry(name).methods.extend(methods);
        Ok(())
    }
}

/// Scan a named source file (the name is used in diagnostics).
///
/// ## Returns
/// - Every struct and every inherent-impl self type in the file (nested inline modules included), in order of
///   first appearance. Impl blocks for the same type are merged.
///
/// ## Errors
///
/// - [`ScanError::Parse`] when the file is not valid Rust.
/// - [`ScanError::Declaration`] for malformed `#[property]` attributes or a `Schema` derive on a tuple struct.
#[tracing::instrument(skip_all, fields(source_name = name, source_len = source.len()))]
pub fn scan_named(name: &str, source: &str) -> Result<Vec<TypeInfo>, ScanError> {
    let file = syn::parse_file(source).map_err(|err| ScanError::parse(name, source, &err))?;

    let mut collector = Collector::default();
    collector
        .visit_items(&file.items)
        .map_err(|err| ScanError::declaration(name, source, &err))?;

    tracing::debug!(type_count = collector.types.len(), "scanned source");
    Ok(collector.types)
}

/// Scan an anonymous source string.
///
/// ## Errors
///
/// See [`scan_named`].
pub fn scan_source(source: &str) -> Result<Vec<TypeInfo>, ScanError> {
    scan_named("<source>", source)
}
