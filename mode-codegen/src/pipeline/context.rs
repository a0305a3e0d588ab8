//! Compilation context passed through pipeline phases.

use modegen_ir::ModeModel;
use modegen_manifest::Descriptor;

use super::diagnostic::{Diagnostic, Severity};

/// Context passed through all pipeline phases.
///
/// This struct carries the state of compilation through each phase,
/// accumulating results and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The merged descriptor being compiled.
    pub descriptor: Descriptor,
    /// The lowered mode model (populated by LowerPhase).
    pub model: Option<ModeModel>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from a descriptor.
    pub fn new(descriptor: Descriptor) -> Self {
        Self {
            descriptor,
            model: None,
            diagnostics: Vec::new(),
        }
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
    }

    /// Get all info diagnostics.
    pub fn infos(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Info)
    }

    /// Take the model out of the context.
    ///
    /// Returns `None` if LowerPhase has not run.
    pub fn take_model(&mut self) -> Option<ModeModel> {
        self.model.take()
    }
}
