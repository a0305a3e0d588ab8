//! Rust impl block builder.

use modegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::Fn;

/// Builder for Rust impl blocks.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    trait_name: Option<String>,
    methods: Vec<Fn>,
}

impl Impl {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            trait_name: None,
            methods: Vec::new(),
        }
    }

    /// Create an impl block for a trait.
    pub fn for_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.trait_name = Some(trait_name.into());
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }

    pub fn methods(mut self, methods: impl IntoIterator<Item = Fn>) -> Self {
        self.methods.extend(methods);
        self
    }

    /// Build the impl block as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    fn format_header(&self) -> String {
        match &self.trait_name {
            Some(trait_name) => format!("impl {} for {}", trait_name, self.type_name),
            None => format!("impl {}", self.type_name),
        }
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.methods.is_empty() {
            return vec![CodeFragment::Line(format!("{} {{}}", self.format_header()))];
        }

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

        vec![CodeFragment::braced(
            format!("{} {{", self.format_header()),
            body,
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Param;

    #[test]
    fn test_empty_impl() {
        assert_eq!(
            Impl::new("UnknownMode")
                .for_trait("std::error::Error")
                .build(),
            "impl std::error::Error for UnknownMode {}\n"
        );
    }

    #[test]
    fn test_impl_with_method() {
        let i = Impl::new("Counter")
            .method(
                Fn::new("increment")
                    .param(Param::self_mut())
                    .body_line("self.count += 1;"),
            )
            .build();
        assert!(i.contains("impl Counter {"));
        assert!(i.contains("    pub fn increment(&mut self) {"));
    }

    #[test]
    fn test_impl_with_multiple_methods() {
        let i = Impl::new("Foo")
            .method(Fn::new("bar"))
            .method(Fn::new("baz"))
            .build();
        assert_eq!(i, "impl Foo {\n    pub fn bar() {}\n\n    pub fn baz() {}\n}\n");
    }
}
