//! Extract beanprobe type metadata from Rust syntax trees.
//!
//! This crate is shared by the proc macros (which see one item at a time) and the source scanner (which sees a
//! whole file), so both describe a type the same way.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it records what is declared and leaves accessor matching to the
//!   introspector.
//!
//! ## Examples
//! ```rust
//! use beanprobe_syntax::scan::scan_source;
//!
//! let types = scan_source("pub struct Pojo;\nimpl Pojo { pub fn get_start(&self) -> u32 { 0 } }\n").unwrap();
//! assert_eq!(types[0].name, "Pojo");
//! assert_eq!(types[0].methods[0].name, "get_start");
//! ```

pub mod attrs;
pub mod scan;
pub mod schema;
pub mod signature;

pub use scan::{ScanError, scan_named, scan_source};
