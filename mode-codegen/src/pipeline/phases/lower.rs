//! Lower phase - transforms the descriptor into a mode model.

use modegen_ir::{Mode, ModeModel};
use modegen_manifest::Result;
use serde_json::Value;
use tracing::debug;

use super::{data_entries, derive_mode};
use crate::pipeline::{CompilationContext, Phase};

/// Phase that builds the [`ModeModel`] from validated entries.
///
/// Duplicate literals keep their first definition. The last entry claiming
/// `default: true` becomes the default; without any claim the first mode is
/// the default.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Build the mode model from descriptor entries"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let descriptor = &ctx.descriptor;
        let entries = data_entries(descriptor)?;

        let mut modes: Vec<Mode> = Vec::with_capacity(entries.len());
        let mut default: Option<String> = None;

        for entry in entries {
            let Some(literal) = entry.field("value").and_then(Value::as_str) else {
                continue;
            };
            let mode = derive_mode(literal);

            if entry.field("default").and_then(Value::as_bool) == Some(true) {
                default = Some(mode.constant_name.clone());
            }
            if modes.iter().any(|m| m.literal == mode.literal) {
                continue;
            }

            modes.push(match entry.field("meta").and_then(Value::as_str) {
                Some(meta) => mode.with_meta(meta),
                None => mode,
            });
        }

        let model = ModeModel::new(modes, default.as_deref()).ok_or_else(|| {
            let last = descriptor.documents().len().saturating_sub(1);
            descriptor
                .source_context(last)
                .validation_error("no valid modes defined")
        })?;

        debug!(
            modes = model.len(),
            default = model.default_constant(),
            "lowered mode model"
        );
        if default.is_none() {
            ctx.add_info(
                self.name(),
                format!(
                    "no mode claims `default`, using '{}'",
                    model.default_mode().literal
                ),
            );
        }
        ctx.model = Some(model);
        Ok(())
    }
}
