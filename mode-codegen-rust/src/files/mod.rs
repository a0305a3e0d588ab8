//! Files produced by the Rust generator.

mod mode_rs;

pub use mode_rs::ModeRs;
