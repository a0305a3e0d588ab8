//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;
use modegen_core::WriteResult;

/// Trait for language-specific code generators.
///
/// Implement this trait to emit the mode module in a new language.
pub trait LanguageCodegen {
    /// File extension for generated source files (e.g., "rs")
    fn file_extension(&self) -> &'static str;

    /// File name used when only an output directory is given
    fn default_file_name(&self) -> String {
        format!("mode_gen.{}", self.file_extension())
    }

    /// Render the generated file without writing to disk
    fn preview(&self) -> Result<PreviewFile>;

    /// Generate the file at the given path
    fn generate(&self, output: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug)]
pub struct GenerateResult {
    /// Path of the generated file
    pub path: PathBuf,
    /// Whether the file was rewritten
    pub write: WriteResult,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// File name of the generated file
    pub path: String,
    /// File content
    pub content: String,
}
