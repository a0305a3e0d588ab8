//! Naming conventions for generated code.

/// Language-specific naming conventions.
///
/// Defines how mode names are spelled in the target language and how reserved
/// words are handled.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a constant name to a constant identifier (e.g., "DevMode" -> "DEV_MODE")
    pub constant_to_name: fn(&str) -> String,
    /// Transform a mode identifier to a predicate name (e.g., "BlueGreen" -> "is_blue_green")
    pub identifier_to_predicate: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Name of the constant bound to a mode literal.
    pub fn constant_name(&self, constant: &str) -> String {
        self.safe_name(&(self.constant_to_name)(constant))
    }

    /// Name of the predicate testing for a mode.
    pub fn predicate_name(&self, identifier: &str) -> String {
        self.safe_name(&(self.identifier_to_predicate)(identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predicate(identifier: &str) -> String {
        format!("is{}", identifier)
    }

    fn escape(name: &str) -> String {
        format!("{}_", name)
    }

    const TEST_NAMING: NamingConvention = NamingConvention {
        constant_to_name: str::to_uppercase,
        identifier_to_predicate: predicate,
        reserved_words: &["isType"],
        escape_reserved: escape,
    };

    #[test]
    fn test_constant_name() {
        assert_eq!(TEST_NAMING.constant_name("DevMode"), "DEVMODE");
    }

    #[test]
    fn test_predicate_name_escapes_reserved() {
        assert_eq!(TEST_NAMING.predicate_name("Dev"), "isDev");
        assert_eq!(TEST_NAMING.predicate_name("Type"), "isType_");
    }
}
