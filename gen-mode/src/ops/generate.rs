//! Generate operation - renders and writes the mode module.

use std::path::{Path, PathBuf};

use eyre::{Context, Result, eyre};
use modegen_codegen::{
    Header, LanguageCodegen,
    pipeline::{CompilationContext, Diagnostic},
};
use modegen_codegen_rust::Generator;
use modegen_core::WriteResult;
use tracing::info;

use crate::reports::{GenerateReport, GenerationResult, ModeSummary, WrittenResult};

/// Where the generated module goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Exact file path
    File(PathBuf),
    /// Directory receiving the default file name
    Directory(PathBuf),
}

impl OutputTarget {
    /// Target an absolute form of `dir`.
    pub fn directory(dir: &Path) -> Result<Self> {
        let dir = std::path::absolute(dir)
            .wrap_err_with(|| format!("failed to resolve '{}'", dir.display()))?;
        Ok(Self::Directory(dir))
    }

    /// Target the directory holding the running binary.
    pub fn binary_directory() -> Result<Self> {
        let exe = std::env::current_exe().wrap_err("failed to locate the gen-mode binary")?;
        let dir = exe
            .parent()
            .ok_or_else(|| eyre!("'{}' has no parent directory", exe.display()))?;
        Ok(Self::Directory(dir.to_path_buf()))
    }

    /// Path of the file to write.
    pub fn resolve(&self, file_name: &str) -> PathBuf {
        match self {
            Self::File(path) => path.clone(),
            Self::Directory(dir) => dir.join(file_name),
        }
    }
}

/// Options for the generate operation.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Input documents, in merge order.
    pub inputs: Vec<PathBuf>,
    /// Module the generated items are placed in.
    pub package: String,
    /// Destination of the generated module.
    pub output: OutputTarget,
    /// Whether to print instead of writing.
    pub dry_run: bool,
}

/// Execute the generate operation on a compiled descriptor.
pub fn generate(mut ctx: CompilationContext, opts: &GenerateOptions) -> Result<GenerateReport> {
    for note in ctx.infos() {
        info!(phase = %note.phase, "{}", note.message);
    }
    let warnings = ctx.warnings().map(format_warning).collect();
    let sources: Vec<String> = ctx
        .descriptor
        .sources()
        .into_iter()
        .map(str::to_string)
        .collect();
    let model = ctx
        .take_model()
        .ok_or_else(|| eyre!("pipeline produced no mode model"))?;

    let modes = model
        .modes()
        .iter()
        .map(|mode| ModeSummary {
            literal: mode.literal.clone(),
            is_default: mode.constant_name == model.default_constant(),
        })
        .collect();

    let header = Header::new(&opts.package).with_sources(sources);
    let generator = Generator::new(&model, &header);

    let result = if opts.dry_run {
        let preview = generator.preview().wrap_err("Failed to generate code")?;
        GenerationResult::Preview(preview.content)
    } else {
        let path = opts.output.resolve(&generator.default_file_name());
        let generated = generator
            .generate(&path)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            path: generated.path,
            changed: generated.write == WriteResult::Written,
        })
    };

    Ok(GenerateReport {
        warnings,
        modes,
        result,
    })
}

fn format_warning(diagnostic: &Diagnostic) -> String {
    match &diagnostic.location {
        Some(location) => format!("{}: {}", location, diagnostic.message),
        None => diagnostic.message.clone(),
    }
}
