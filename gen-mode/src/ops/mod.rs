//! Core operations.
//!
//! This module contains the business logic of gen-mode, separated from CLI
//! argument parsing and output rendering.

pub mod generate;

pub use generate::{GenerateOptions, OutputTarget, generate};
