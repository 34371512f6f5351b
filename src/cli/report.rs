//! Rendering of scan results.

use std::fmt::Write as _;

use beanprobe_core::{PropertyDescriptor, TypeInfo};
use serde::Serialize;

use crate::introspector::Introspector;

/// Introspection outcome for one scanned type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeReport {
    #[serde(rename = "type")]
    pub type_name: String,
    pub properties: Vec<PropertyDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TypeReport {
    /// Introspect one scanned type; a failure becomes the report's `error`.
    pub fn describe(introspector: &Introspector, info: &TypeInfo) -> Self {
        match introspector.describe(info) {
            Ok(properties) => Self {
                type_name: info.name.clone(),
                properties,
                error: None,
            },
            Err(err) => Self {
                type_name: info.name.clone(),
                properties: Vec::new(),
                error: Some(err.to_string()),
            },
        }
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }
}

fn access(desc: &PropertyDescriptor) -> String {
    match (&desc.read_method, &desc.write_method) {
        (Some(r), Some(w)) => format!("read: {r}, write: {w}"),
        (Some(r), None) => format!("read: {r}"),
        (None, Some(w)) => format!("write: {w}"),
        (None, None) => String::new(),
    }
}

/// Render reports as indented text, one type per block.
pub fn render_text(reports: &[TypeReport], names_only: bool) -> String {
    let mut out = String::new();
    // Writing to String cannot fail.
    for report in reports {
        if let Some(err) = &report.error {
            let _ = writeln!(out, "{}: error: {}", report.type_name, err);
            continue;
        }
        let count = report.properties.len();
        let noun = if count == 1 { "property" } else { "properties" };
        let _ = writeln!(out, "{} ({count} {noun})", report.type_name);
        for desc in &report.properties {
            if names_only {
                let _ = writeln!(out, "  {}", desc.name);
            } else {
                let _ = writeln!(out, "  {}: {} ({})", desc.name, desc.property_type, access(desc));
            }
        }
    }
    out
}

/// Render reports as a pretty-printed JSON array.
///
/// ## Errors
///
/// Returns the serializer error (not expected for these types).
pub fn render_json(reports: &[TypeReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}
