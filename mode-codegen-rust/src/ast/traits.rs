//! Rust trait builder.

use modegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::Fn;

/// Builder for Rust trait definitions.
///
/// Methods are rendered as given; use [`Fn::declaration`] for required
/// methods and a body for provided ones. Trait methods should be built with
/// [`Fn::private`] since they carry no visibility of their own.
#[derive(Debug, Clone)]
pub struct Trait {
    name: String,
    doc: Option<String>,
    methods: Vec<Fn>,
}

impl Trait {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            methods: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }

    /// Build the trait as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Trait {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .doc
            .iter()
            .flat_map(|doc| doc.lines().map(CodeFragment::doc))
            .collect();

        let body = self
            .methods
            .iter()
            .enumerate()
            .flat_map(|(i, method)| {
                let mut fragments = Vec::new();
                if i > 0 {
                    fragments.push(CodeFragment::Blank);
                }
                fragments.extend(method.to_fragments());
                fragments
            })
            .collect();

        fragments.push(CodeFragment::braced(
            format!("pub trait {} {{", self.name),
            body,
        ));
        fragments
    }
}
