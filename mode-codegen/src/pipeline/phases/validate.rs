//! Validate phase - checks mode entries before lowering.

use std::collections::HashMap;

use modegen_manifest::{Descriptor, Entry, Result, validate_literal, value_kind};
use serde_json::Value;

use super::{data_entries, derive_mode};
use crate::pipeline::{CompilationContext, Diagnostic, Phase};

const PHASE: &str = "validate";

/// Keys a mode entry may carry.
const KNOWN_KEYS: &[&str] = &["value", "meta", "default"];

/// Phase that validates the descriptor.
///
/// Malformed entries and identifier collisions are fatal. Duplicate literals
/// and unknown keys are recorded as warnings.
pub struct ValidatePhase;

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        PHASE
    }

    fn description(&self) -> &'static str {
        "Validate mode entries"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let descriptor = &ctx.descriptor;
        let entries = data_entries(descriptor)?;

        let mut literals: HashMap<&str, &Entry> = HashMap::new();
        let mut constants: HashMap<String, &str> = HashMap::new();

        for entry in entries {
            let literal = check_entry(descriptor, entry, &mut ctx.diagnostics)?;

            if let Some(first) = literals.get(literal) {
                ctx.diagnostics.push(
                    Diagnostic::warning(
                        PHASE,
                        format!(
                            "duplicate mode '{}' ignored, first defined at {}",
                            literal,
                            descriptor.location(first)
                        ),
                    )
                    .at(descriptor.location(entry)),
                );
                continue;
            }
            literals.insert(literal, entry);

            let constant = derive_mode(literal).constant_name;
            if let Some(other) = constants.get(&constant) {
                return Err(descriptor.source_context(entry.document).validation_error_near(
                    format!(
                        "{}: modes '{}' and '{}' both generate the constant {}",
                        descriptor.location(entry),
                        other,
                        literal,
                        constant
                    ),
                    literal,
                ));
            }
            constants.insert(constant, literal);
        }

        Ok(())
    }
}

/// Check the shape of one entry and return its literal.
fn check_entry<'a>(
    descriptor: &Descriptor,
    entry: &'a Entry,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<&'a str> {
    let location = descriptor.location(entry);
    let source = descriptor.source_context(entry.document);

    let Some(fields) = entry.value.as_object() else {
        return Err(source.validation_error(format!(
            "{}: mode entry must be a mapping, found {}",
            location,
            value_kind(&entry.value)
        )));
    };

    let literal = match fields.get("value") {
        None => {
            return Err(source.validation_error(format!("{}: mode entry has no `value`", location)));
        }
        Some(Value::String(s)) if s.is_empty() => {
            return Err(source.validation_error(format!("{}: `value` cannot be empty", location)));
        }
        Some(Value::String(s)) => s.as_str(),
        Some(other) => {
            return Err(source.validation_error(format!(
                "{}: `value` must be a string, found {}",
                location,
                value_kind(other)
            )));
        }
    };

    if let Some(reason) = validate_literal(literal) {
        return Err(source.validation_error_near(
            format!("{}: invalid mode value '{}': {}", location, literal, reason),
            literal,
        ));
    }

    match fields.get("meta") {
        None | Some(Value::String(_)) => {}
        Some(other) => {
            return Err(source.validation_error_near(
                format!(
                    "{}: `meta` of mode '{}' must be a string, found {}",
                    location,
                    literal,
                    value_kind(other)
                ),
                literal,
            ));
        }
    }

    match fields.get("default") {
        None | Some(Value::Bool(_)) => {}
        Some(other) => {
            return Err(source.validation_error_near(
                format!(
                    "{}: `default` of mode '{}' must be a boolean, found {}",
                    location,
                    literal,
                    value_kind(other)
                ),
                literal,
            ));
        }
    }

    for key in fields.keys().filter(|k| !KNOWN_KEYS.contains(&k.as_str())) {
        diagnostics.push(
            Diagnostic::warning(
                PHASE,
                format!("unknown key `{}` in mode '{}' ignored", key, literal),
            )
            .at(location.clone()),
        );
    }

    Ok(literal)
}
