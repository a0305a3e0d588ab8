use std::{collections::HashSet, path::PathBuf};

use eyre::{Result, bail};
use modegen_codegen::{CodeFragment, Header, Renderable};
use modegen_core::GeneratedFile;
use modegen_ir::{Mode, ModeModel};

use crate::{
    Arm, Const, Field, Fn, Impl, Match, Param, RUST_NAMING, RustFile, Struct, Trait, Use,
    format::format_source,
};

/// Environment variable read by `ModeContext::from_env`.
const ENV_VAR: &str = "MODE";

/// Item names the generated module defines besides the per-mode constants.
const FIXED_CONSTANTS: &[&str] = &["ENV_MODE", "MODES", "DEFAULT_MODE"];

/// Result type of the generated setter.
const SET_RESULT: &str = "Result<(), UnknownMode>";

/// The generated mode module (`mode_gen.rs`)
pub struct ModeRs<'a> {
    model: &'a ModeModel,
    header: &'a Header,
    path: PathBuf,
}

impl<'a> ModeRs<'a> {
    pub fn new(model: &'a ModeModel, header: &'a Header, path: impl Into<PathBuf>) -> Self {
        Self {
            model,
            header,
            path: path.into(),
        }
    }

    /// Unformatted source of the module.
    pub fn source(&self) -> String {
        let mut file = RustFile::new()
            .banner(self.header.banner())
            .use_stmt(Use::new("std").symbols(["env", "fmt"]))
            .add(
                Const::str("ENV_MODE", ENV_VAR)
                    .doc("Environment variable that overrides the default mode at startup."),
            )
            .add(self.mode_constants())
            .add(self.modes_constant())
            .add(
                Const::new(
                    "DEFAULT_MODE",
                    "&str",
                    RUST_NAMING.constant_name(self.model.default_constant()),
                )
                .doc("Mode selected when `MODE` is unset or empty."),
            )
            .add_all(unknown_mode())
            .add(hooks_trait())
            .add(
                Struct::new("NoHooks")
                    .doc("Hooks that ignore every action.")
                    .derives(["Debug", "Clone", "Copy", "Default"]),
            )
            .add(Impl::new("NoHooks").for_trait("ModeHooks"))
            .add(state_trait())
            .add(
                Struct::new("ModeContext")
                    .doc("Holds the current mode of the application.")
                    .derives(["Debug", "Clone", "Copy", "PartialEq", "Eq"])
                    .field(Field::new("current", "&'static str").private()),
            )
            .add(
                Impl::new("ModeContext").for_trait("Default").method(
                    Fn::new("default")
                        .private()
                        .returns("Self")
                        .body_line("Self { current: DEFAULT_MODE }"),
                ),
            )
            .add(self.context_impl())
            .add(state_impl());

        if !self.header.is_top_level() {
            file = file.in_module(&self.header.package);
        }
        file.render()
    }

    /// Reject models whose generated names would clash.
    fn check_names(&self) -> Result<()> {
        let mut seen: HashSet<String> = FIXED_CONSTANTS.iter().map(|c| c.to_string()).collect();
        for mode in self.model.modes() {
            let name = RUST_NAMING.constant_name(&mode.constant_name);
            if !seen.insert(name.clone()) {
                bail!(
                    "mode '{}' generates the constant {}, which is already defined",
                    mode.literal,
                    name
                );
            }
        }
        Ok(())
    }

    fn mode_constants(&self) -> Vec<CodeFragment> {
        self.model
            .modes()
            .iter()
            .flat_map(|mode| {
                Const::str(RUST_NAMING.constant_name(&mode.constant_name), &mode.literal)
                    .to_fragments()
            })
            .collect()
    }

    fn modes_constant(&self) -> Const {
        let names: Vec<String> = self
            .model
            .modes()
            .iter()
            .map(|mode| RUST_NAMING.constant_name(&mode.constant_name))
            .collect();
        Const::new(
            "MODES",
            format!("[&str; {}]", names.len()),
            format!("[{}]", names.join(", ")),
        )
        .doc("Every known mode, in declaration order.")
    }

    fn context_impl(&self) -> Impl {
        let arms = self.model.modes().iter().map(setter_arm);
        let setter = Match::new("value")
            .bind("mode")
            .arms(arms)
            .arm(Arm::new("_").line("return Err(UnknownMode(value.to_string()))"));

        Impl::new("ModeContext")
            .method(
                Fn::new("from_env")
                    .doc("Create a context from the `MODE` environment variable.")
                    .returns("Result<Self, UnknownMode>")
                    .body_line("Self::from_env_with(&mut NoHooks)"),
            )
            .method(
                Fn::new("from_env_with")
                    .doc("Like [`ModeContext::from_env`], running the hook of the selected mode.")
                    .generics("H: ModeHooks + ?Sized")
                    .param(Param::new("hooks", "&mut H"))
                    .returns("Result<Self, UnknownMode>")
                    .body(FROM_ENV_BODY),
            )
            .method(
                Fn::new("mode")
                    .doc("The current mode.")
                    .param(Param::self_ref())
                    .returns("&'static str")
                    .body_line("self.current"),
            )
            .method(
                Fn::new("set_mode")
                    .doc("Change the current mode.")
                    .param(Param::self_mut())
                    .param(Param::new("value", "&str"))
                    .returns(SET_RESULT)
                    .body_line("self.set_mode_with(value, &mut NoHooks)"),
            )
            .method(
                Fn::new("set_mode_with")
                    .doc(
                        "Change the current mode, handing its hook action to `hooks`.\n\n\
                         Unknown values leave the context unchanged.",
                    )
                    .generics("H: ModeHooks + ?Sized")
                    .param(Param::self_mut())
                    .param(Param::new("value", "&str"))
                    .param(Param::new("hooks", "&mut H"))
                    .returns(SET_RESULT)
                    .body_node(setter)
                    .body_line("self.current = mode;")
                    .body_line("Ok(())"),
            )
            .methods(self.model.modes().iter().map(predicate))
    }
}

impl GeneratedFile for ModeRs<'_> {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn render(&self) -> Result<String> {
        self.check_names()?;
        format_source(&self.source())
    }
}

const FROM_ENV_BODY: &str = r#"let mut context = Self::default();
match env::var(ENV_MODE) {
    Ok(value) if !value.is_empty() => context.set_mode_with(&value, hooks)?,
    Err(env::VarError::NotUnicode(value)) => {
        return Err(UnknownMode(value.to_string_lossy().into_owned()));
    }
    _ => context.set_mode_with(DEFAULT_MODE, hooks)?,
}
Ok(context)"#;

fn setter_arm(mode: &Mode) -> Arm {
    let name = RUST_NAMING.constant_name(&mode.constant_name);
    let arm = Arm::new(&name);
    match &mode.meta {
        Some(action) => arm
            .line(format!("hooks.on_enter({}, {:?});", name, action))
            .line(name),
        None => arm.line(name),
    }
}

fn predicate(mode: &Mode) -> Fn {
    Fn::new(RUST_NAMING.predicate_name(&mode.identifier))
        .doc(format!("Whether the current mode is `{}`.", mode.literal))
        .param(Param::self_ref())
        .returns("bool")
        .body_line(format!(
            "self.current == {}",
            RUST_NAMING.constant_name(&mode.constant_name)
        ))
}

fn unknown_mode() -> [Box<dyn Renderable>; 3] {
    [
        Box::new(
            Struct::new("UnknownMode")
                .doc("Error returned when a value does not name a known mode.")
                .derives(["Debug", "Clone", "PartialEq", "Eq"])
                .tuple_field(Field::new("0", "String")),
        ),
        Box::new(
            Impl::new("UnknownMode").for_trait("fmt::Display").method(
                Fn::new("fmt")
                    .private()
                    .param(Param::self_ref())
                    .param(Param::new("f", "&mut fmt::Formatter<'_>"))
                    .returns("fmt::Result")
                    .body_line("write!(f, \"mode unknown: {}\", self.0)"),
            ),
        ),
        Box::new(Impl::new("UnknownMode").for_trait("std::error::Error")),
    ]
}

fn hooks_trait() -> Trait {
    Trait::new("ModeHooks")
        .doc("Receives the hook action of a mode when it becomes current.")
        .method(
            Fn::new("on_enter")
                .private()
                .param(Param::self_mut())
                .param(Param::new("mode", "&'static str"))
                .param(Param::new("action", "&'static str"))
                .body_line("let _ = (mode, action);"),
        )
}

fn state_trait() -> Trait {
    Trait::new("ModeState")
        .doc("Read and change the current mode.")
        .method(
            Fn::new("mode")
                .private()
                .param(Param::self_ref())
                .returns("&'static str")
                .declaration(),
        )
        .method(
            Fn::new("set_mode")
                .private()
                .param(Param::self_mut())
                .param(Param::new("value", "&str"))
                .returns(SET_RESULT)
                .declaration(),
        )
}

fn state_impl() -> Impl {
    Impl::new("ModeContext")
        .for_trait("ModeState")
        .method(
            Fn::new("mode")
                .private()
                .param(Param::self_ref())
                .returns("&'static str")
                .body_line("ModeContext::mode(self)"),
        )
        .method(
            Fn::new("set_mode")
                .private()
                .param(Param::self_mut())
                .param(Param::new("value", "&str"))
                .returns(SET_RESULT)
                .body_line("ModeContext::set_mode(self, value)"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ModeModel {
        ModeModel::new(
            vec![
                Mode::new("dev", "Dev"),
                Mode::new("blue-green", "BlueGreen").with_meta("warm_caches"),
            ],
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_setter_arm_without_hook() {
        let fragments = setter_arm(&Mode::new("dev", "Dev")).to_fragments();
        assert_eq!(fragments, [CodeFragment::line("DEV_MODE => DEV_MODE,")]);
    }

    #[test]
    fn test_setter_arm_quotes_hook_action() {
        let mode = Mode::new("prod", "Prod").with_meta("say \"hi\"");
        let mut builder = modegen_codegen::CodeBuilder::rust();
        builder.emit(&setter_arm(&mode));

        insta::assert_snapshot!(builder.build(), @r#"
        PROD_MODE => {
            hooks.on_enter(PROD_MODE, "say \"hi\"");
            PROD_MODE
        }
        "#);
    }

    #[test]
    fn test_predicate() {
        let f = predicate(&Mode::new("blue-green", "BlueGreen")).build();
        assert!(f.contains("pub fn is_blue_green(&self) -> bool {"));
        assert!(f.contains("self.current == BLUE_GREEN_MODE"));
    }

    #[test]
    fn test_source_is_top_level_for_main() {
        let model = model();
        let header = Header::default().with_sources(["modes.json"]);
        let source = ModeRs::new(&model, &header, "mode_gen.rs").source();

        assert!(source.starts_with("// Code generated by gen-mode.\n// modes.json\n// DO NOT EDIT\n\nuse std::{env, fmt};\n"));
        assert!(!source.contains("pub mod"));
        assert!(source.contains("pub const MODES: [&str; 2] = [DEV_MODE, BLUE_GREEN_MODE];"));
        assert!(source.contains("pub const DEFAULT_MODE: &str = DEV_MODE;"));
    }

    #[test]
    fn test_unknown_mode_is_an_error_type() {
        let model = model();
        let source = ModeRs::new(&model, &Header::default(), "mode_gen.rs").source();

        assert!(source.contains("pub struct UnknownMode(pub String);"));
        assert!(source.contains("impl std::error::Error for UnknownMode {}\n"));
    }

    #[test]
    fn test_source_wraps_package() {
        let model = model();
        let header = Header::new("modes");
        let source = ModeRs::new(&model, &header, "mode_gen.rs").source();

        assert!(source.contains("pub mod modes {\n    use std::{env, fmt};\n"));
        assert!(source.ends_with("}\n"));
    }

    #[test]
    fn test_render_rejects_clashing_constant() {
        let model = ModeModel::new(vec![Mode::new("env", "Env")], None).unwrap();
        let header = Header::default();

        let err = ModeRs::new(&model, &header, "mode_gen.rs")
            .render()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "mode 'env' generates the constant ENV_MODE, which is already defined"
        );
    }
}
