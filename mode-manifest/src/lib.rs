//! Mode descriptor loading for the gen-mode source generator.
//!
//! A descriptor is built from one or more JSON or TOML documents. Every
//! document may carry a `data` list of mode entries; the lists are
//! concatenated in document order while all other top-level keys follow
//! last-write-wins.
//!
//! ```
//! use std::str::FromStr;
//!
//! use modegen_manifest::Descriptor;
//!
//! let descriptor = Descriptor::from_str(r#"{"data":[{"value":"dev"}]}"#).unwrap();
//! assert_eq!(descriptor.entries().map(|e| e.len()), Some(1));
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod descriptor;
mod error;
mod validate;

pub use descriptor::{Data, Descriptor, Document, Entry, Format, value_kind};
pub use error::{Error, Result, SourceContext};
pub use validate::{find_literal_span, is_rust_keyword, validate_literal, validate_package_name};
