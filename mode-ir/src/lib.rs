//! Intermediate representation types for the gen-mode source generator.
//!
//! # Architecture
//!
//! ```text
//! modes.json → modegen-manifest (loading) → modegen-ir (ModeModel) → codegen
//! ```
//!
//! The IR types are language-agnostic: names are kept in their canonical
//! `UpperCamel` form and each language generator applies its own naming
//! convention.

mod mode;

pub use mode::{MODE_SUFFIX, Mode, ModeModel};
