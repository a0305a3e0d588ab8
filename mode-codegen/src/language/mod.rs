//! Language-specific abstractions.
//!
//! This module provides traits and types for language-specific code generation:
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`Header`] - Package and provenance of a generated file
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview

mod header;
mod naming;
mod traits;

pub use header::{DEFAULT_PACKAGE, Header};
pub use naming::NamingConvention;
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile};
