//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Builds code line by line while tracking the indentation level.
///
/// # Example
///
/// ```
/// use modegen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::rust();
/// builder
///     .push_line("fn main() {")
///     .push_indent()
///     .push_line("println!(\"Hello\");")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "fn main() {\n    println!(\"Hello\");\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a line prefixed with a comment marker (e.g. `///` or `//`).
    ///
    /// An empty `text` produces the bare marker without trailing space.
    pub fn push_comment(&mut self, marker: &str, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(marker);
        if !text.is_empty() {
            self.buffer.push(' ');
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(&fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: &CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::Doc(text) => {
                self.push_comment("///", text);
            }
            CodeFragment::Comment(text) => {
                self.push_comment("//", text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        let width = self.indent.width(self.indent_level);
        self.buffer.extend(std::iter::repeat_n(' ', width));
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::rust()
    }
}
