//! RustFile abstraction for structured Rust file generation.
//!
//! Provides a high-level API for generating Rust files with
//! organized imports and body content.

use modegen_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A Rust use statement.
#[derive(Debug, Clone)]
pub struct Use {
    module: String,
    symbols: Vec<String>,
}

impl Use {
    /// Create a use statement for a module.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbols: Vec::new(),
        }
    }

    /// Add a symbol to import from the module.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    /// Add multiple symbols to import.
    pub fn symbols(mut self, symbols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Format the use statement as a string.
    fn format(&self) -> String {
        match self.symbols.as_slice() {
            [] => format!("use {};", self.module),
            [symbol] => format!("use {}::{};", self.module, symbol),
            symbols => format!("use {}::{{{}}};", self.module, symbols.join(", ")),
        }
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.format())]
    }
}

/// A structured representation of a Rust file.
///
/// Organizes code into a comment banner, imports and body sections,
/// optionally wrapped in an inline module.
///
/// # Example
///
/// ```
/// use modegen_codegen_rust::{Const, RustFile, Use};
///
/// let file = RustFile::new()
///     .banner(["DO NOT EDIT"])
///     .use_stmt(Use::new("std").symbol("env"))
///     .add(Const::str("ENV_MODE", "MODE"))
///     .render();
///
/// assert_eq!(
///     file,
///     "// DO NOT EDIT\n\nuse std::env;\n\npub const ENV_MODE: &str = \"MODE\";\n"
/// );
/// ```
#[derive(Default)]
pub struct RustFile {
    banner: Vec<String>,
    module: Option<String>,
    uses: Vec<Use>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    /// Create a new empty RustFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text of the `//` comment lines opening the file.
    pub fn banner(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.banner = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Wrap imports and body in `pub mod <name> { ... }`.
    pub fn in_module(mut self, name: impl Into<String>) -> Self {
        self.module = Some(name.into());
        self
    }

    /// Add a use statement.
    pub fn use_stmt(mut self, use_stmt: Use) -> Self {
        self.uses.push(use_stmt);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with Rust indentation (4 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::rust();

        for line in &self.banner {
            builder.apply_fragment(&CodeFragment::comment(line.as_str()));
        }
        if !self.banner.is_empty() && !self.is_empty() {
            builder.push_blank();
        }

        let items = self.items();
        match &self.module {
            Some(name) => {
                builder.apply_fragment(&CodeFragment::braced(format!("pub mod {} {{", name), items));
            }
            None => {
                for fragment in &items {
                    builder.apply_fragment(fragment);
                }
            }
        }

        builder.build()
    }

    /// Check if the file has neither imports nor body.
    pub fn is_empty(&self) -> bool {
        self.uses.is_empty() && self.body.is_empty()
    }

    /// Imports followed by the body, separated by blank lines.
    fn items(&self) -> Vec<CodeFragment> {
        let mut items: Vec<CodeFragment> = self.uses.iter().flat_map(Use::to_fragments).collect();

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 || !self.uses.is_empty() {
                items.push(CodeFragment::Blank);
            }
            items.extend(fragments.iter().cloned());
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Const, Struct};

    #[test]
    fn test_empty_file() {
        let file = RustFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_use_formats() {
        assert_eq!(Use::new("std::env").format(), "use std::env;");
        assert_eq!(Use::new("std").symbol("env").format(), "use std::env;");
        assert_eq!(
            Use::new("std").symbols(["env", "fmt"]).format(),
            "use std::{env, fmt};"
        );
    }

    #[test]
    fn test_items_separated_by_blank_lines() {
        let file = RustFile::new()
            .add(Const::str("DEV_MODE", "dev"))
            .add(Struct::new("NoHooks"))
            .render();
        assert_eq!(
            file,
            "pub const DEV_MODE: &str = \"dev\";\n\npub struct NoHooks;\n"
        );
    }

    #[test]
    fn test_module_wrapping() {
        let file = RustFile::new()
            .banner(["Code generated by gen-mode.", "DO NOT EDIT"])
            .in_module("modes")
            .use_stmt(Use::new("std").symbol("env"))
            .add(Const::str("ENV_MODE", "MODE"))
            .render();

        insta::assert_snapshot!(file, @r#"
        // Code generated by gen-mode.
        // DO NOT EDIT

        pub mod modes {
            use std::env;

            pub const ENV_MODE: &str = "MODE";
        }
        "#);
    }
}
