//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Modes in declaration order.
    pub modes: Vec<ModeSummary>,
    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// One generated mode.
#[derive(Debug)]
pub struct ModeSummary {
    pub literal: String,
    pub is_default: bool,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written (or already up to date).
    Written(WrittenResult),
    /// Dry-run preview holding the module source.
    Preview(String),
}

/// Result when the module was written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Path of the generated file.
    pub path: PathBuf,
    /// Whether the file content changed.
    pub changed: bool,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            // Only the module itself goes to stdout so it can be redirected
            GenerationResult::Preview(content) => out.preformatted(content.trim_end()),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.section(&format!("Modes ({})", self.modes.len()));
        for mode in &self.modes {
            if mode.is_default {
                out.list_item(&format!("{} (default)", mode.literal));
            } else {
                out.list_item(&mode.literal);
            }
        }
        out.newline();

        let key = if written.changed {
            "Generated"
        } else {
            "Up to date"
        };
        out.key_value(key, &written.path.display().to_string());
    }
}
