//! Rust code generator for the gen-mode source generator.
//!
//! Renders a [`ModeModel`](modegen_ir::ModeModel) into a self-contained Rust
//! module holding the mode constants, a `ModeContext` carrying the current
//! mode, and one predicate per mode.

mod format;
mod generator;
mod naming;
mod rust_file;

pub mod ast;
pub mod files;

pub use ast::{Arm, Const, Field, Fn, Impl, Match, Param, Struct, Trait};
pub use format::format_source;
pub use generator::Generator;
pub use modegen_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use naming::RUST_NAMING;
pub use rust_file::{RustFile, Use};
