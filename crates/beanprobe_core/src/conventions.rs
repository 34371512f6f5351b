//! Accessor naming conventions (well-known prefixes and property-name derivation).
//!
//! Rust accessors are spelled in snake_case (`get_first_name`), while property names follow the bean
//! convention of lowerCamelCase (`firstName`). Everything here is pure string manipulation so the macros,
//! the source scanner and the runtime introspector agree on the same spelling.

/// Prefix of a plain reader (`get_first_name(&self) -> T`).
pub const GETTER_PREFIX: &str = "get_";

/// Prefix of a boolean reader (`is_active(&self) -> bool`).
pub const BOOLEAN_GETTER_PREFIX: &str = "is_";

/// Prefix of a writer (`set_first_name(&mut self, value: T)`).
pub const SETTER_PREFIX: &str = "set_";

/// Type name a boolean reader must return.
pub const BOOL_TYPE: &str = "bool";

/// Property names dropped by a default-configured introspector.
pub const DEFAULT_SUPPRESSED_PROPERTIES: &[&str] = &["class"];

/// Identify which accessor convention a method name follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorPrefix {
    /// `get_*`
    Get,
    /// `is_*`
    Is,
    /// `set_*`
    Set,
}

impl AccessorPrefix {
    /// Return the canonical prefix spelling, including the trailing underscore.
    pub fn as_str(self) -> &'static str {
        match self {
            AccessorPrefix::Get => GETTER_PREFIX,
            AccessorPrefix::Is => BOOLEAN_GETTER_PREFIX,
            AccessorPrefix::Set => SETTER_PREFIX,
        }
    }
}

/// Split a method name into its accessor prefix and the remaining suffix.
///
/// ## Returns
/// - `Some((prefix, suffix))` when `name` starts with a known prefix and the suffix is non-empty.
/// - `None` otherwise (`get_` alone is not an accessor).
///
/// ## Examples
/// ```rust
/// use beanprobe_core::conventions::{split_accessor, AccessorPrefix};
///
/// assert_eq!(split_accessor("get_first_name"), Some((AccessorPrefix::Get, "first_name")));
/// assert_eq!(split_accessor("is_"), None);
/// assert_eq!(split_accessor("getter"), None);
/// ```
pub fn split_accessor(name: &str) -> Option<(AccessorPrefix, &str)> {
    [AccessorPrefix::Get, AccessorPrefix::Is, AccessorPrefix::Set]
        .into_iter()
        .find_map(|prefix| {
            name.strip_prefix(prefix.as_str())
                .filter(|suffix| !suffix.trim_matches('_').is_empty())
                .map(|suffix| (prefix, suffix))
        })
}

/// Apply the bean `decapitalize` rule to a name.
///
/// The first character is lowercased, except when the first two characters are both uppercase, in which case
/// the name is returned unchanged (`URL` stays `URL`, `Name` becomes `name`).
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if first.is_uppercase() && chars.next().is_some_and(char::is_uppercase) {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len());
    out.extend(first.to_lowercase());
    out.push_str(&name[first.len_utf8()..]);
    out
}

/// Derive a property name from the snake_case suffix of an accessor or a field name.
///
/// Empty segments (leading, trailing or doubled underscores) are dropped. The first segment goes through
/// [`decapitalize`]; later segments have their first character uppercased.
///
/// ## Examples
/// ```rust
/// use beanprobe_core::conventions::to_property_name;
///
/// assert_eq!(to_property_name("first_name"), "firstName");
/// assert_eq!(to_property_name("start"), "start");
/// assert_eq!(to_property_name("URL"), "URL");
/// ```
pub fn to_property_name(suffix: &str) -> String {
    let mut out = String::with_capacity(suffix.len());
    for segment in suffix.split('_').filter(|s| !s.is_empty()) {
        if out.is_empty() {
            out.push_str(&decapitalize(segment));
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Check whether a string is usable as a property name (an identifier: letter or `_`, then alphanumerics).
pub fn is_valid_property_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Normalise a token-stream rendering of a type (`"& 'a Option < String >"`) to a compact spelling
/// (`"&'a Option<String>"`).
///
/// A single space is kept only where it separates two word characters (`dyn Trait`, `'a str`).
pub fn normalize_type_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for c in raw.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && is_word_char(c) && out.chars().last().is_some_and(is_word_char) {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }
    out
}

/// Reduce a normalised type name to the owned form used to compare readers and writers.
///
/// One leading reference is stripped (with its lifetime and `mut`), and `str` maps to `String`, so a
/// `get_name(&self) -> &str` reader pairs with a `set_name(&mut self, name: String)` writer.
///
/// ## Examples
/// ```rust
/// use beanprobe_core::conventions::owned_form;
///
/// assert_eq!(owned_form("&'a str"), "String");
/// assert_eq!(owned_form("&CalendarDate"), "CalendarDate");
/// assert_eq!(owned_form("Option<String>"), "Option<String>");
/// ```
pub fn owned_form(ty: &str) -> String {
    let ty = ty.trim();
    let Some(mut rest) = ty.strip_prefix('&') else {
        return ty.to_string();
    };
    if let Some(after_tick) = rest.strip_prefix('\'') {
        let lifetime_len = after_tick.find(|c: char| !is_word_char(c)).unwrap_or(after_tick.len());
        rest = after_tick[lifetime_len..].trim_start();
    }
    if let Some(after_mut) = rest.strip_prefix("mut ") {
        rest = after_mut;
    }
    match rest {
        "str" => "String".to_string(),
        other => other.to_string(),
    }
}
