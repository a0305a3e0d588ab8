use std::path::Path;

use eyre::Result;
use modegen_codegen::{GenerateResult, Header, LanguageCodegen, PreviewFile};
use modegen_core::GeneratedFile;
use modegen_ir::ModeModel;
use tracing::info;

use crate::files::ModeRs;

/// Rust code generator that produces the mode module
pub struct Generator<'a> {
    model: &'a ModeModel,
    header: &'a Header,
}

impl LanguageCodegen for Generator<'_> {
    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn preview(&self) -> Result<PreviewFile> {
        let path = self.default_file_name();
        let content = ModeRs::new(self.model, self.header, &path).render()?;
        Ok(PreviewFile { path, content })
    }

    fn generate(&self, output: &Path) -> Result<GenerateResult> {
        let write = ModeRs::new(self.model, self.header, output).write()?;
        info!(path = %output.display(), ?write, "generated mode module");
        Ok(GenerateResult {
            path: output.to_path_buf(),
            write,
        })
    }
}

impl<'a> Generator<'a> {
    pub fn new(model: &'a ModeModel, header: &'a Header) -> Self {
        Self { model, header }
    }
}
