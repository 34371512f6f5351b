//! Introspector configuration.

use std::collections::BTreeSet;

use beanprobe_core::conventions::DEFAULT_SUPPRESSED_PROPERTIES;

/// Order of properties discovered through accessors.
///
/// Explicit schemas always keep their declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyOrder {
    /// Sorted by property name (byte-wise), the bean introspector convention.
    #[default]
    ByName,
    /// Order in which each property's first accessor is declared.
    Declaration,
}

/// Introspector configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntrospectorConfig {
    /// Property names dropped from every result
    pub suppressed_properties: BTreeSet<String>,
    /// Ordering of accessor-discovered properties
    pub order: PropertyOrder,
}

impl Default for IntrospectorConfig {
    fn default() -> Self {
        Self {
            suppressed_properties: DEFAULT_SUPPRESSED_PROPERTIES.iter().map(|s| s.to_string()).collect(),
            order: PropertyOrder::ByName,
        }
    }
}

impl IntrospectorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress an additional property name
    pub fn with_suppressed(mut self, name: impl Into<String>) -> Self {
        self.suppressed_properties.insert(name.into());
        self
    }

    /// Drop the default suppressions (`class`)
    pub fn without_default_suppressions(mut self) -> Self {
        for name in DEFAULT_SUPPRESSED_PROPERTIES {
            self.suppressed_properties.remove(*name);
        }
        self
    }

    /// Set the property order
    pub fn with_order(mut self, order: PropertyOrder) -> Self {
        self.order = order;
        self
    }

    /// Check whether a property name is suppressed
    pub fn is_suppressed(&self, name: &str) -> bool {
        self.suppressed_properties.contains(name)
    }
}
