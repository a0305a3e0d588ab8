//! Rust-specific naming conventions.

use modegen_codegen::NamingConvention;
use modegen_core::{to_screaming_snake_case, to_snake_case};

fn escape_rust_reserved(name: &str) -> String {
    format!("r#{}", name)
}

fn identifier_to_predicate(identifier: &str) -> String {
    format!("is_{}", to_snake_case(identifier))
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    constant_to_name: to_screaming_snake_case,
    identifier_to_predicate,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
        "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
        "trait", "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
        "yield",
    ],
    escape_reserved: escape_rust_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_constant_names() {
        assert_eq!(RUST_NAMING.constant_name("DevMode"), "DEV_MODE");
        assert_eq!(RUST_NAMING.constant_name("BlueGreenMode"), "BLUE_GREEN_MODE");
    }

    #[test]
    fn test_rust_predicate_names() {
        assert_eq!(RUST_NAMING.predicate_name("Dev"), "is_dev");
        assert_eq!(RUST_NAMING.predicate_name("BlueGreen"), "is_blue_green");
        assert_eq!(RUST_NAMING.predicate_name("V2"), "is_v2");
    }

    #[test]
    fn test_rust_reserved_words() {
        assert!(RUST_NAMING.is_reserved("type"));
        assert!(RUST_NAMING.is_reserved("match"));
        assert!(!RUST_NAMING.is_reserved("is_dev"));
        assert_eq!(RUST_NAMING.safe_name("type"), "r#type");
    }
}
