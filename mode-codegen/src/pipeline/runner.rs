//! Pipeline orchestrator.

use modegen_manifest::{Descriptor, Result};
use tracing::debug;

use super::{
    CompilationContext, Phase,
    phases::{LowerPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// The pipeline runs the built-in phases (validate, lower) followed by any
/// user phases, in the order they were added.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().phase(MyCustomPhase);
///
/// let ctx = pipeline.run(descriptor)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with only the built-in phases.
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on a descriptor.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - checks the descriptor, collects diagnostics
    /// 2. LowerPhase - builds the mode model
    /// 3. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns the first fatal error raised by a phase.
    pub fn run(&self, descriptor: Descriptor) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(descriptor);

        let builtin_phases: [Box<dyn Phase>; 2] = [Box::new(ValidatePhase), Box::new(LowerPhase)];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            debug!(phase = phase.name(), "{}", phase.description());
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        str::FromStr,
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use super::*;

    struct CountingPhase {
        modes_seen: Arc<AtomicUsize>,
    }

    impl Phase for CountingPhase {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn description(&self) -> &'static str {
            "Counts lowered modes"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            let count = ctx.model.as_ref().map_or(0, |m| m.len());
            self.modes_seen.store(count, Ordering::SeqCst);
            Ok(())
        }
    }

    fn descriptor(content: &str) -> Descriptor {
        Descriptor::from_str(content).unwrap()
    }

    #[test]
    fn test_pipeline_builds_model() {
        let mut ctx = Pipeline::new()
            .run(descriptor(r#"{"data":[{"value":"dev"},{"value":"prod"}]}"#))
            .unwrap();

        let model = ctx.take_model().unwrap();
        assert_eq!(model.len(), 2);
        assert_eq!(model.default_constant(), "DevMode");
    }

    #[test]
    fn test_user_phases_run_after_lowering() {
        let seen = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::new().phase(CountingPhase {
            modes_seen: seen.clone(),
        });

        pipeline
            .run(descriptor(
                r#"{"data":[{"value":"dev"},{"value":"qa"},{"value":"prod"}]}"#,
            ))
            .unwrap();

        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_validation_failure_stops_pipeline() {
        let seen = Arc::new(AtomicUsize::new(usize::MAX));
        let pipeline = Pipeline::new().phase(CountingPhase {
            modes_seen: seen.clone(),
        });

        assert!(pipeline.run(descriptor(r#"{"data":[]}"#)).is_err());
        assert_eq!(seen.load(Ordering::SeqCst), usize::MAX);
    }
}
