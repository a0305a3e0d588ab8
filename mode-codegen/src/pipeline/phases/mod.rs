//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - checks the descriptor and collects diagnostics
//! - [`LowerPhase`] - transforms the descriptor into a mode model

mod lower;
mod validate;

pub use lower::LowerPhase;
pub use validate::ValidatePhase;

use modegen_core::to_pascal_case;
use modegen_ir::Mode;
use modegen_manifest::{Data, Descriptor, Entry, Result};

/// The merged entries of a descriptor, or the error explaining why there are
/// none to work with.
fn data_entries(descriptor: &Descriptor) -> Result<&[Entry]> {
    let last = descriptor.documents().len().saturating_sub(1);
    match descriptor.data() {
        Data::Missing => Err(descriptor
            .source_context(last)
            .validation_error("no modes defined: the input has no `data` list")),
        Data::Invalid { document, found } => {
            Err(descriptor.source_context(*document).validation_error_near(
                format!("`data` must be a sequence of modes, found {}", found),
                "data",
            ))
        }
        Data::Entries(entries) if entries.is_empty() => Err(descriptor
            .source_context(last)
            .validation_error_near("no modes defined: `data` is empty", "data")),
        Data::Entries(entries) => Ok(entries),
    }
}

/// Derive the mode a literal stands for.
fn derive_mode(literal: &str) -> Mode {
    Mode::new(literal, to_pascal_case(literal))
}
