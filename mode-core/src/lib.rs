//! Core utilities and types for the gen-mode source generator.
//!
//! This crate provides the file writing primitives and string case
//! conversions shared by the rest of the workspace.

mod file;
mod utils;

// File operations
pub use file::{File, GENERATED_HEADER, GeneratedFile, WriteResult};
// String utilities
pub use utils::{to_pascal_case, to_screaming_snake_case, to_snake_case};
