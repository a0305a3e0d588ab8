//! Rust AST builders for generating items, impls, and functions.
//!
//! These provide a high-level API for constructing Rust syntax,
//! which can then be rendered via CodeBuilder.

mod consts;
mod fns;
mod impls;
mod structs;
mod traits;

pub use consts::Const;
pub use fns::{Arm, Fn, Match, Param};
pub use impls::Impl;
pub use structs::{Field, Struct};
pub use traits::Trait;
