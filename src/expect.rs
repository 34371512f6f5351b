//! Exact-match expectations over ordered property lists.
//!
//! `contains_exactly` passes only when both lists have the same names in the same order. On failure the
//! [`Mismatch`] shows both sequences, what is missing or unexpected, which names are repeated a different number of
//! times, and where the sequences first diverge.

use std::fmt;

use crate::errors::IntrospectionError;
use crate::introspect::Introspect;
use crate::introspector;

/// Report of an exact-match failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub expected: Vec<String>,
    pub actual: Vec<String>,
    /// Expected names that do not appear in `actual`.
    pub missing: Vec<String>,
    /// Actual names that do not appear in `expected`.
    pub unexpected: Vec<String>,
    /// Names present in both lists but a different number of times.
    pub miscounted: Vec<String>,
    /// First index at which the two sequences differ.
    pub first_difference: usize,
}

fn quoted(names: &[String]) -> String {
    let inner: Vec<String> = names.iter().map(|n| format!("{n:?}")).collect();
    format!("[{}]", inner.join(", "))
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "property names differ")?;
        writeln!(f, "  expected:   {}", quoted(&self.expected))?;
        write!(f, "  actual:     {}", quoted(&self.actual))?;
        if !self.missing.is_empty() {
            write!(f, "\n  missing:    {}", quoted(&self.missing))?;
        }
        if !self.unexpected.is_empty() {
            write!(f, "\n  unexpected: {}", quoted(&self.unexpected))?;
        }
        if self.expected.len() != self.actual.len() {
            write!(
                f,
                "\n  count:      expected {}, actual {}",
                self.expected.len(),
                self.actual.len()
            )?;
        }
        if !self.miscounted.is_empty() {
            write!(f, "\n  repeated:   {}", quoted(&self.miscounted))?;
        }
        if self.missing.is_empty() && self.unexpected.is_empty() && self.miscounted.is_empty() {
            write!(f, "\n  misordered from index {}", self.first_difference)?;
        }
        Ok(())
    }
}

impl std::error::Error for Mismatch {}

/// Compare an actual property list against the expected one.
///
/// ## Errors
///
/// Returns a [`Mismatch`] unless `actual` equals `expected` element for element.
///
/// ## Examples
/// ```rust
/// use beanprobe::expect::contains_exactly;
///
/// assert!(contains_exactly(&["start"], &["start"]).is_ok());
///
/// let mismatch = contains_exactly(&["lastName", "firstName"], &["firstName", "lastName"]).unwrap_err();
/// assert_eq!(mismatch.first_difference, 0);
/// assert!(mismatch.missing.is_empty());
/// ```
pub fn contains_exactly<A: AsRef<str>, E: AsRef<str>>(actual: &[A], expected: &[E]) -> Result<(), Mismatch> {
    let actual: Vec<String> = actual.iter().map(|s| s.as_ref().to_string()).collect();
    let expected: Vec<String> = expected.iter().map(|s| s.as_ref().to_string()).collect();

    let Some(first_difference) = (0..actual.len().max(expected.len())).find(|&i| actual.get(i) != expected.get(i))
    else {
        return Ok(());
    };

    let missing = expected.iter().filter(|n| !actual.contains(*n)).cloned().collect();
    let unexpected = actual.iter().filter(|n| !expected.contains(*n)).cloned().collect();
    let occurrences = |names: &[String], name: &String| names.iter().filter(|n| *n == name).count();
    let mut miscounted: Vec<String> = Vec::new();
    for name in expected.iter().filter(|n| actual.contains(*n)) {
        if occurrences(&expected, name) != occurrences(&actual, name) && !miscounted.contains(name) {
            miscounted.push(name.clone());
        }
    }
    Err(Mismatch {
        expected,
        actual,
        missing,
        unexpected,
        miscounted,
        first_difference,
    })
}

/// Failure of [`expect_properties`]: the type could not be introspected, or its names did not match.
#[derive(Debug, thiserror::Error)]
pub enum ExpectError {
    #[error(transparent)]
    Introspection(#[from] IntrospectionError),
    #[error("{0}")]
    Mismatch(#[from] Mismatch),
}

/// Introspect `T` with the default introspector and require exactly `expected`, in order.
///
/// ## Errors
///
/// - [`ExpectError::Introspection`] when `T` is malformed.
/// - [`ExpectError::Mismatch`] when the names differ.
pub fn expect_properties<T: Introspect + 'static>(expected: &[&str]) -> Result<(), ExpectError> {
    let names = introspector::property_names::<T>()?;
    contains_exactly(&names, expected)?;
    Ok(())
}
