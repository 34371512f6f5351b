//! Property discovery.
//!
//! `Introspector` turns a [`TypeInfo`] into an ordered list of [`PropertyDescriptor`]s:
//! - types with an explicit schema report it as declared;
//! - all other types have their accessor methods matched against the `get_`/`is_`/`set_` convention.
//!
//! Results for compiled types are cached per `TypeId`; `describe` is the uncached form used for scanned source.

use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use beanprobe_core::conventions::{
    AccessorPrefix, BOOL_TYPE, is_valid_property_name, owned_form, split_accessor, to_property_name,
};
use beanprobe_core::{MethodSignature, PropertyDescriptor, PropertySchema, Receiver, TypeInfo};

use crate::config::{IntrospectorConfig, PropertyOrder};
use crate::errors::{AccessorRole, IntrospectionError};
use crate::introspect::Introspect;

/// Prefix of the synthetic read/write method recorded for schema properties.
pub const FIELD_ACCESS_PREFIX: &str = "field:";

/// A method recognised as a reader or writer.
#[derive(Debug, Clone, Copy)]
struct Accessor<'a> {
    method: &'a MethodSignature,
    prefix: AccessorPrefix,
}

#[derive(Debug, Default)]
struct Candidate<'a> {
    reader: Option<Accessor<'a>>,
    writer: Option<Accessor<'a>>,
}

/// Classify a method as an accessor and derive its property name.
///
/// Readers take `&self` and no arguments and return a value (`bool` for `is_`); writers take `&mut self` and
/// exactly one argument and return unit. Non-public methods, associated functions and `#[property(skip)]`
/// methods are never accessors.
fn classify(method: &MethodSignature) -> Option<(String, Accessor<'_>)> {
    if !method.is_public || method.skip || method.receiver == Receiver::None {
        return None;
    }
    let (prefix, suffix) = split_accessor(&method.name)?;
    let shape_ok = match prefix {
        AccessorPrefix::Get => method.receiver == Receiver::Ref && method.params.is_empty() && method.output.is_some(),
        AccessorPrefix::Is => {
            method.receiver == Receiver::Ref && method.params.is_empty() && method.output.as_deref() == Some(BOOL_TYPE)
        }
        AccessorPrefix::Set => method.receiver == Receiver::RefMut && method.params.len() == 1 && method.output.is_none(),
    };
    if !shape_ok {
        return None;
    }
    let name = method.property_name.clone().unwrap_or_else(|| to_property_name(suffix));
    Some((name, Accessor { method, prefix }))
}

fn merge_reader<'a>(
    type_name: &str,
    property: &str,
    existing: Accessor<'a>,
    incoming: Accessor<'a>,
) -> Result<Accessor<'a>, IntrospectionError> {
    let (getter, boolean_getter) = match (existing.prefix, incoming.prefix) {
        (AccessorPrefix::Get, AccessorPrefix::Is) => (existing, incoming),
        (AccessorPrefix::Is, AccessorPrefix::Get) => (incoming, existing),
        _ => {
            return Err(IntrospectionError::DuplicateAccessor {
                type_name: type_name.to_string(),
                property: property.to_string(),
                role: AccessorRole::Reader,
                first: existing.method.name.clone(),
                second: incoming.method.name.clone(),
            });
        }
    };
    if getter.method.output.as_deref() == Some(BOOL_TYPE) {
        Ok(boolean_getter)
    } else {
        Err(IntrospectionError::AmbiguousReader {
            type_name: type_name.to_string(),
            property: property.to_string(),
            getter: getter.method.name.clone(),
            boolean_getter: boolean_getter.method.name.clone(),
        })
    }
}

fn build_descriptor(
    type_name: &str,
    property: String,
    candidate: Candidate<'_>,
) -> Result<PropertyDescriptor, IntrospectionError> {
    let reader_type = candidate
        .reader
        .and_then(|r| r.method.output.as_deref())
        .map(owned_form);
    let writer_type = candidate.writer.and_then(|w| w.method.params.first()).map(|p| owned_form(p));

    let property_type = match (reader_type, writer_type, candidate.reader, candidate.writer) {
        (Some(rt), Some(wt), Some(reader), Some(writer)) if rt != wt => {
            return Err(IntrospectionError::ConflictingAccessors {
                type_name: type_name.to_string(),
                property,
                reader: reader.method.name.clone(),
                reader_type: rt,
                writer: writer.method.name.clone(),
                writer_type: wt,
            });
        }
        (_, Some(wt), _, _) => wt,
        (Some(rt), None, _, _) => rt,
        (None, None, _, _) => String::new(),
    };

    let mut descriptor = PropertyDescriptor::new(property, property_type);
    descriptor.read_method = candidate.reader.map(|r| r.method.name.clone());
    descriptor.write_method = candidate.writer.map(|w| w.method.name.clone());
    Ok(descriptor)
}

fn check_name(type_name: &str, property: &str) -> Result<(), IntrospectionError> {
    if is_valid_property_name(property) {
        Ok(())
    } else {
        Err(IntrospectionError::InvalidPropertyName {
            type_name: type_name.to_string(),
            property: property.to_string(),
        })
    }
}

/// Discovers properties according to an [`IntrospectorConfig`].
#[derive(Debug, Default)]
pub struct Introspector {
    config: IntrospectorConfig,
    cache: RwLock<HashMap<TypeId, Arc<[PropertyDescriptor]>>>,
}

impl Introspector {
    pub fn new(config: IntrospectorConfig) -> Self {
        Self {
            config,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &IntrospectorConfig {
        &self.config
    }

    /// Describe a type's properties without consulting the cache.
    ///
    /// ## Errors
    ///
    /// Returns the first [`IntrospectionError`] found; no partial result is returned.
    #[tracing::instrument(level = "debug", skip_all, fields(type_name = %info.name, schema = info.schema.is_some()))]
    pub fn describe(&self, info: &TypeInfo) -> Result<Vec<PropertyDescriptor>, IntrospectionError> {
        let descriptors = match &info.schema {
            Some(schema) => self.describe_schema(&info.name, schema)?,
            None => self.describe_accessors(&info.name, &info.methods)?,
        };
        tracing::debug!(property_count = descriptors.len(), "described type");
        Ok(descriptors)
    }

    fn describe_accessors(
        &self,
        type_name: &str,
        methods: &[MethodSignature],
    ) -> Result<Vec<PropertyDescriptor>, IntrospectionError> {
        let mut order: Vec<String> = Vec::new();
        let mut candidates: HashMap<String, Candidate<'_>> = HashMap::new();

        for (property, accessor) in methods.iter().filter_map(classify) {
            if self.config.is_suppressed(&property) {
                continue;
            }
            // Derived names come from a Rust identifier suffix and may start with a digit (`get_3d_position`).
            if accessor.method.property_name.is_some() {
                check_name(type_name, &property)?;
            }
            let candidate = candidates.entry(property.clone()).or_insert_with(|| {
                order.push(property.clone());
                Candidate::default()
            });
            match accessor.prefix {
                AccessorPrefix::Get | AccessorPrefix::Is => {
                    candidate.reader = Some(match candidate.reader {
                        Some(existing) => merge_reader(type_name, &property, existing, accessor)?,
                        None => accessor,
                    });
                }
                AccessorPrefix::Set => {
                    if let Some(existing) = candidate.writer {
                        return Err(IntrospectionError::DuplicateAccessor {
                            type_name: type_name.to_string(),
                            property,
                            role: AccessorRole::Writer,
                            first: existing.method.name.clone(),
                            second: accessor.method.name.clone(),
                        });
                    }
                    candidate.writer = Some(accessor);
                }
            }
        }

        if self.config.order == PropertyOrder::ByName {
            order.sort();
        }

        order
            .into_iter()
            .map(|property| {
                let candidate = candidates.remove(&property).unwrap_or_default();
                build_descriptor(type_name, property, candidate)
            })
            .collect()
    }

    fn describe_schema(
        &self,
        type_name: &str,
        schema: &[PropertySchema],
    ) -> Result<Vec<PropertyDescriptor>, IntrospectionError> {
        let mut seen = HashSet::new();
        let mut out = Vec::with_capacity(schema.len());
        for prop in schema {
            if self.config.is_suppressed(&prop.name) {
                continue;
            }
            check_name(type_name, &prop.name)?;
            if !seen.insert(prop.name.as_str()) {
                return Err(IntrospectionError::DuplicateProperty {
                    type_name: type_name.to_string(),
                    property: prop.name.clone(),
                });
            }
            let access = format!("{FIELD_ACCESS_PREFIX}{}", prop.name);
            let mut descriptor = PropertyDescriptor::new(prop.name.clone(), owned_form(&prop.property_type));
            descriptor.write_method = (!prop.read_only).then(|| access.clone());
            descriptor.read_method = Some(access);
            out.push(descriptor);
        }
        Ok(out)
    }

    /// Describe a compiled type, caching the result.
    ///
    /// Repeated calls return the same shared slice. Failures are not cached.
    ///
    /// ## Errors
    ///
    /// See [`Introspector::describe`].
    pub fn property_descriptors<T: Introspect + 'static>(&self) -> Result<Arc<[PropertyDescriptor]>, IntrospectionError> {
        let key = TypeId::of::<T>();
        if let Some(hit) = self.cache.read().unwrap_or_else(PoisonError::into_inner).get(&key) {
            tracing::trace!(type_name = std::any::type_name::<T>(), "descriptor cache hit");
            return Ok(Arc::clone(hit));
        }

        tracing::debug!(type_name = std::any::type_name::<T>(), "descriptor cache miss");
        let described: Arc<[PropertyDescriptor]> = self.describe(&T::type_info())?.into();
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(cache.entry(key).or_insert(described)))
    }

    /// Property names of a compiled type, in the introspector's order.
    ///
    /// ## Errors
    ///
    /// See [`Introspector::describe`].
    pub fn property_names<T: Introspect + 'static>(&self) -> Result<Vec<String>, IntrospectionError> {
        Ok(self
            .property_descriptors::<T>()?
            .iter()
            .map(|d| d.name.clone())
            .collect())
    }

    /// Forget every cached result.
    pub fn clear_cache(&self) {
        self.cache.write().unwrap_or_else(PoisonError::into_inner).clear();
    }

    /// Number of types with a cached result.
    pub fn cached_type_count(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

/// The process-wide default-configured introspector.
pub fn global() -> &'static Introspector {
    static GLOBAL: OnceLock<Introspector> = OnceLock::new();
    GLOBAL.get_or_init(Introspector::default)
}

/// Describe a compiled type with the default introspector.
///
/// ## Errors
///
/// See [`Introspector::describe`].
pub fn property_descriptors<T: Introspect + 'static>() -> Result<Arc<[PropertyDescriptor]>, IntrospectionError> {
    global().property_descriptors::<T>()
}

/// Property names of a compiled type, using the default introspector.
///
/// ## Examples
/// ```rust
/// #[derive(beanprobe::Schema)]
/// struct EmployeeRecord {
///     start_date: u32,
/// }
///
/// assert_eq!(beanprobe::property_names::<EmployeeRecord>().unwrap(), vec!["startDate"]);
/// ```
///
/// ## Errors
///
/// See [`Introspector::describe`].
pub fn property_names<T: Introspect + 'static>() -> Result<Vec<String>, IntrospectionError> {
    global().property_names::<T>()
}
