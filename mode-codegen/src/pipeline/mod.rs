//! Compilation pipeline from descriptor to mode model.
//!
//! This module provides a [`Pipeline`] orchestrator that runs the phases
//! turning a merged [`Descriptor`](modegen_manifest::Descriptor) into a
//! [`ModeModel`](modegen_ir::ModeModel):
//!
//! - Explicit phase boundaries (validate → lower)
//! - Unified diagnostics collection
//! - Shared state via [`CompilationContext`]
//!
//! # Example
//!
//! ```
//! use std::str::FromStr;
//!
//! use modegen_codegen::pipeline::Pipeline;
//! use modegen_manifest::Descriptor;
//!
//! let descriptor =
//!     Descriptor::from_str(r#"{"data":[{"value":"dev"},{"value":"prod","default":true}]}"#)
//!         .unwrap();
//! let mut ctx = Pipeline::new().run(descriptor).unwrap();
//! let model = ctx.take_model().unwrap();
//!
//! assert_eq!(model.default_constant(), "ProdMode");
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
