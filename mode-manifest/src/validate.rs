//! Validation utilities for mode literals and generated names

use miette::{NamedSource, SourceSpan};

use crate::{Error, Result};

/// Rust reserved keywords that cannot be used as identifiers
/// Source: https://doc.rust-lang.org/reference/keywords.html
const RUST_KEYWORDS: &[&str] = &[
    // Strict keywords (2024 edition)
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
    // Reserved keywords (may be used in future)
    "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try", "typeof",
    "unsized", "virtual", "yield",
    // Weak keywords (context-sensitive, but best to avoid)
    "union",
];

/// Check if a name is a Rust reserved keyword
pub fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Find the span of a quoted literal in JSON or TOML source.
///
/// The span covers the literal itself, without the surrounding quotes.
pub fn find_literal_span(src: &str, literal: &str) -> Option<SourceSpan> {
    if literal.is_empty() {
        return None;
    }
    let patterns = [format!("\"{}\"", literal), format!("'{}'", literal)];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, literal.len())));
        }
    }

    None
}

/// Validate that a mode literal can be turned into generated identifiers.
/// Returns None if valid, Some(reason) if invalid
///
/// Literals are snake_case or kebab-case words; dashes and underscores both
/// separate words when the literal is converted to an identifier.
pub fn validate_literal(literal: &str) -> Option<&'static str> {
    let mut chars = literal.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("a mode value must start with a letter or underscore"),
        None => return Some("a mode value cannot be empty"),
    }

    let mut prev_was_dash = false;

    for c in chars {
        if c == '-' {
            if prev_was_dash {
                return Some("a mode value cannot contain consecutive dashes");
            }
            prev_was_dash = true;
        } else if c.is_ascii_alphanumeric() || c == '_' {
            prev_was_dash = false;
        } else {
            return Some(
                "a mode value must contain only letters, numbers, underscores, and dashes",
            );
        }
    }

    if prev_was_dash {
        return Some("a mode value cannot end with a dash");
    }

    // Separators are dropped from identifiers, so the first word decides
    // what the identifier starts with
    match literal.split(['_', '-']).find(|word| !word.is_empty()) {
        None => return Some("a mode value must contain at least one letter or number"),
        Some(word) if word.starts_with(|c: char| c.is_ascii_digit()) => {
            return Some("the first word of a mode value must start with a letter");
        }
        Some(_) => {}
    }

    None
}

/// Validate the package name that the generated items are placed in.
///
/// The name becomes a Rust module name, so it must be a plain identifier.
pub fn validate_package_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("package name cannot be empty")
    } else if is_rust_keyword(name) {
        Some("package name is a Rust reserved keyword")
    } else if name == "_" {
        Some("package name cannot be a lone underscore")
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        Some("package name must start with a letter or underscore")
    } else if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Some("package name must contain only letters, numbers, and underscores")
    } else {
        None
    };

    match reason {
        None => Ok(()),
        Some(reason) => Err(Box::new(Error::Validation {
            src: NamedSource::new("--pkg", name.to_string()),
            span: Some(SourceSpan::from((0, name.len()))),
            message: reason.to_string(),
        })),
    }
}
