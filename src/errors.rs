//! Introspection errors.
//!
//! An introspector either returns every property of a type or fails with one of these; it never returns a
//! partial list.

use std::fmt;

use thiserror::Error;

/// Which side of a property an accessor serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorRole {
    Reader,
    Writer,
}

impl fmt::Display for AccessorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessorRole::Reader => write!(f, "reader"),
            AccessorRole::Writer => write!(f, "writer"),
        }
    }
}

/// Errors raised when a type's declared structure does not describe a consistent set of properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntrospectionError {
    #[error(
        "`{type_name}.{property}`: reader `{reader}` yields `{reader_type}` but writer `{writer}` takes `{writer_type}`"
    )]
    ConflictingAccessors {
        type_name: String,
        property: String,
        reader: String,
        reader_type: String,
        writer: String,
        writer_type: String,
    },

    #[error("`{type_name}.{property}`: `{getter}` does not return `bool`, so it conflicts with `{boolean_getter}`")]
    AmbiguousReader {
        type_name: String,
        property: String,
        getter: String,
        boolean_getter: String,
    },

    #[error("`{type_name}.{property}`: `{first}` and `{second}` are both {role}s of the same property")]
    DuplicateAccessor {
        type_name: String,
        property: String,
        role: AccessorRole,
        first: String,
        second: String,
    },

    #[error("`{type_name}`: property `{property}` is declared more than once")]
    DuplicateProperty { type_name: String, property: String },

    #[error("`{type_name}`: `{property}` is not a valid property name")]
    InvalidPropertyName { type_name: String, property: String },
}

impl IntrospectionError {
    /// Name of the type whose introspection failed.
    pub fn type_name(&self) -> &str {
        match self {
            IntrospectionError::ConflictingAccessors { type_name, .. }
            | IntrospectionError::AmbiguousReader { type_name, .. }
            | IntrospectionError::DuplicateAccessor { type_name, .. }
            | IntrospectionError::DuplicateProperty { type_name, .. }
            | IntrospectionError::InvalidPropertyName { type_name, .. } => type_name,
        }
    }

    /// Property the error is about.
    pub fn property(&self) -> &str {
        match self {
            IntrospectionError::ConflictingAccessors { property, .. }
            | IntrospectionError::AmbiguousReader { property, .. }
            | IntrospectionError::DuplicateAccessor { property, .. }
            | IntrospectionError::DuplicateProperty { property, .. }
            | IntrospectionError::InvalidPropertyName { property, .. } => property,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicting_accessors_message_names_both_sides() {
        let err = IntrospectionError::ConflictingAccessors {
            type_name: "EmployeeBean".into(),
            property: "startDate".into(),
            reader: "get_start_date".into(),
            reader_type: "CalendarDate".into(),
            writer: "set_start_date".into(),
            writer_type: "String".into(),
        };
        assert_eq!(
            err.to_string(),
            "`EmployeeBean.startDate`: reader `get_start_date` yields `CalendarDate` but writer `set_start_date` takes `String`"
        );
        assert_eq!(err.type_name(), "EmployeeBean");
        assert_eq!(err.property(), "startDate");
    }

    #[test]
    fn test_duplicate_accessor_message_uses_role() {
        let err = IntrospectionError::DuplicateAccessor {
            type_name: "T".into(),
            property: "x".into(),
            role: AccessorRole::Writer,
            first: "set_x".into(),
            second: "set_X".into(),
        };
        assert_eq!(err.to_string(), "`T.x`: `set_x` and `set_X` are both writers of the same property");
    }
}
