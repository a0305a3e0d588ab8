use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::validate::find_literal_span;

/// Result type for descriptor operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the content and name of one input document, reducing
/// parameter passing in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "modes.json");
/// ctx.validation_error("data must not be empty");
/// ctx.validation_error_near("duplicate mode", "dev");
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error labelled at the first quoted occurrence of
    /// `literal` in the source, if any.
    pub fn validation_error_near(&self, message: impl Into<String>, literal: &str) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: find_literal_span(&self.src, literal),
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(gen_mode::io),
        help("pass the path of an existing JSON or TOML mode descriptor")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{filename}'")]
    #[diagnostic(code(gen_mode::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        filename: String,
        message: String,
    },

    #[error("{message}")]
    #[diagnostic(code(gen_mode::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a parse error from a JSON error with source context
    pub fn json(source: &serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = offset_of(src, source.line(), source.column()).map(|offset| {
            let len = usize::from(offset < src.len());
            SourceSpan::from((offset, len))
        });
        Self::parse(source.to_string(), span, src, filename)
    }

    /// Create a parse error from a TOML error with source context
    pub fn toml(source: &toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Self::parse(source.message().to_string(), span, src, filename)
    }

    fn parse(
        message: String,
        span: Option<SourceSpan>,
        src: &str,
        filename: &str,
    ) -> Box<Self> {
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            filename: filename.to_string(),
            message,
        })
    }
}

/// Convert a 1-based line/column pair into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "{\n  \"data\": x\n}";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 2, 11), Some(12));
        assert_eq!(offset_of(src, 0, 0), None);
    }

    #[test]
    fn test_offset_of_clamps_to_source() {
        assert_eq!(offset_of("{}", 9, 9), Some(2));
    }

    #[test]
    fn test_json_error_points_at_failure() {
        let src = "{\"data\": [}";
        let source = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let err = Error::json(&source, src, "modes.json");

        match *err {
            Error::Parse { span, filename, .. } => {
                assert_eq!(filename, "modes.json");
                let offset = span.map(|s| s.offset()).unwrap();
                assert!((9..=src.len()).contains(&offset));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_error_near_finds_literal() {
        let ctx = SourceContext::new(r#"{"data":[{"value":"dev"}]}"#, "modes.json");
        let err = ctx.validation_error_near("duplicate mode 'dev'", "dev");

        match *err {
            Error::Validation { span, message, .. } => {
                assert_eq!(message, "duplicate mode 'dev'");
                assert_eq!(span.map(|s| s.offset()), Some(19));
                assert_eq!(span.map(|s| s.len()), Some(3));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
