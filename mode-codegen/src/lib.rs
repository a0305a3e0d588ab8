//! Shared code generation utilities for the gen-mode source generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific generator (`modegen-codegen-rust`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention)
//! - [`pipeline`] - Descriptor → ModeModel phases (validate, lower)

pub mod builder;
pub mod language;
pub mod pipeline;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use language::{
    DEFAULT_PACKAGE, GenerateResult, Header, LanguageCodegen, NamingConvention, PreviewFile,
};
