use modegen_core::GENERATED_HEADER;

/// Package that places generated items at the top level of the file.
pub const DEFAULT_PACKAGE: &str = "main";

/// Where the generated items live and which inputs produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Target package (module) name
    pub package: String,
    /// Input document names, in merge order
    pub sources: Vec<String>,
}

impl Header {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            sources: Vec::new(),
        }
    }

    /// Record the input documents the file is generated from.
    pub fn with_sources<S: Into<String>>(mut self, sources: impl IntoIterator<Item = S>) -> Self {
        self.sources = sources.into_iter().map(Into::into).collect();
        self
    }

    /// Whether items are emitted without an enclosing module.
    pub fn is_top_level(&self) -> bool {
        self.package == DEFAULT_PACKAGE
    }

    /// Text of the comment lines opening the generated file.
    ///
    /// The banner names every input source and ends with `DO NOT EDIT`.
    /// Source names are escaped so that each stays on a single comment line.
    pub fn banner(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.sources.len() + 2);
        lines.push(GENERATED_HEADER.to_string());
        lines.extend(self.sources.iter().map(|source| escape_comment(source)));
        lines.push("DO NOT EDIT".to_string());
        lines
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE)
    }
}

/// Escape characters that would end a line comment or reorder its text.
fn escape_comment(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() || is_bidi_control(c) {
                c.escape_unicode().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

fn is_bidi_control(c: char) -> bool {
    matches!(c, '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_top_level() {
        assert!(Header::default().is_top_level());
        assert!(!Header::new("modes").is_top_level());
    }

    #[test]
    fn test_banner_lists_sources() {
        let header = Header::default().with_sources(["modes.json", "local.toml"]);
        assert_eq!(
            header.banner(),
            [
                "Code generated by gen-mode.",
                "modes.json",
                "local.toml",
                "DO NOT EDIT",
            ]
        );
    }

    #[test]
    fn test_banner_escapes_line_breaks_in_sources() {
        let header = Header::default().with_sources(["m.json\npub fn injected() {}", "a\rb.toml"]);
        let banner = header.banner();

        assert_eq!(banner[1], "m.json\\u{a}pub fn injected() {}");
        assert_eq!(banner[2], "a\\u{d}b.toml");
        assert_eq!(banner.last().map(String::as_str), Some("DO NOT EDIT"));
        assert!(banner.iter().all(|line| !line.contains(['\n', '\r'])));
    }

    #[test]
    fn test_banner_escapes_bidi_overrides() {
        let header = Header::default().with_sources(["evil\u{202E}nosj.m"]);
        assert_eq!(header.banner()[1], "evil\\u{202e}nosj.m");
    }
}
