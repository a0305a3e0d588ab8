//! Canonical formatting of generated Rust source.

use eyre::{Result, WrapErr};

/// Format generated source with `prettyplease`.
///
/// The leading `//` comment banner is not part of the syntax tree, so it is
/// split off before parsing and put back in front of the formatted code.
///
/// # Errors
///
/// Returns an error if the source is not a valid Rust file.
pub fn format_source(source: &str) -> Result<String> {
    let (banner, code) = split_banner(source);
    let file = syn::parse_file(code).wrap_err("generated code is not valid Rust")?;
    let formatted = prettyplease::unparse(&file);

    if banner.is_empty() {
        Ok(formatted)
    } else {
        Ok(format!("{}\n\n{}", banner.trim_end(), formatted))
    }
}

/// Split `source` into its leading plain-comment lines (including the blank
/// line that ends them) and the remaining code.
fn split_banner(source: &str) -> (&str, &str) {
    let mut end = 0;
    for line in source.split_inclusive('\n') {
        let trimmed = line.trim_end();
        let is_banner = trimmed.starts_with("//")
            && !trimmed.starts_with("///")
            && !trimmed.starts_with("//!");
        if is_banner || (trimmed.is_empty() && end > 0) {
            end += line.len();
            if trimmed.is_empty() {
                break;
            }
        } else {
            break;
        }
    }
    source.split_at(end)
}
