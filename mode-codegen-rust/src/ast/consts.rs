//! Rust constant builder.

use modegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for Rust `const` items.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    ty: String,
    value: String,
    doc: Option<String>,
    is_public: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value: value.into(),
            doc: None,
            is_public: true,
        }
    }

    /// A `&str` constant bound to a string literal.
    pub fn str(name: impl Into<String>, literal: &str) -> Self {
        Self::new(name, "&str", format!("{:?}", literal))
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Build the constant as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let vis = if self.is_public { "pub " } else { "" };
        let mut fragments: Vec<CodeFragment> = self
            .doc
            .iter()
            .flat_map(|doc| doc.lines().map(CodeFragment::doc))
            .collect();
        fragments.push(CodeFragment::Line(format!(
            "{}const {}: {} = {};",
            vis, self.name, self.ty, self.value
        )));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_const_quotes_literal() {
        assert_eq!(
            Const::str("DEV_MODE", "dev").build(),
            "pub const DEV_MODE: &str = \"dev\";\n"
        );
    }

    #[test]
    fn test_const_with_doc() {
        let c = Const::new("MODES", "[&str; 2]", "[DEV_MODE, PROD_MODE]")
            .doc("Every known mode.")
            .private()
            .build();
        assert_eq!(
            c,
            "/// Every known mode.\nconst MODES: [&str; 2] = [DEV_MODE, PROD_MODE];\n"
        );
    }
}
