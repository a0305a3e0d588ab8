//! Indentation configuration for code generation.

/// Number of spaces per indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(usize);

impl Indent {
    /// 4-space indentation (rustfmt default).
    pub const RUST: Self = Self(4);

    /// Spaces written for `level` indentation levels.
    pub fn width(&self, level: usize) -> usize {
        self.0 * level
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::RUST
    }
}
