use std::{ffi::OsString, path::PathBuf};

use clap::{CommandFactory, Parser};
use eyre::Result;
use modegen_codegen::{DEFAULT_PACKAGE, pipeline::Pipeline};
use modegen_manifest::{Descriptor, validate_package_name};
use tracing::debug;

use crate::{
    ops::{self, GenerateOptions, OutputTarget},
    reports::{Report, TerminalOutput},
};

/// Exit code used when no input documents are given.
const EXIT_USAGE: i32 = 3;

/// Flags that are also accepted with a single leading dash.
const LEGACY_FLAGS: &[&str] = &["pkg", "path", "output"];

/// Extension trait for exiting on descriptor errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for modegen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gen-mode")]
#[command(version)]
#[command(about = "Generate a Rust mode module from JSON or TOML mode descriptors")]
pub(crate) struct Cli {
    /// Mode descriptor files, merged in order (`.toml` files are read as TOML, others as JSON)
    pub inputs: Vec<PathBuf>,

    /// Module the generated items are placed in (`main` keeps them at the top level)
    #[arg(long, default_value = DEFAULT_PACKAGE)]
    pub pkg: String,

    /// Output directory (defaults to the directory of the gen-mode binary)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Output file (overrides --path)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print the generated module instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn run(&self) -> Result<()> {
        if self.inputs.is_empty() {
            eprintln!("{}", Self::command().render_usage());
            std::process::exit(EXIT_USAGE);
        }

        validate_package_name(self.package()).unwrap_or_exit();
        let options = self.options()?;
        debug!(?options, "resolved options");

        let descriptor = Descriptor::from_files(&options.inputs).unwrap_or_exit();
        let ctx = Pipeline::new().run(descriptor).unwrap_or_exit();

        let report = ops::generate(ctx, &options)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Target package; an empty `--pkg` selects the default.
    fn package(&self) -> &str {
        if self.pkg.is_empty() {
            DEFAULT_PACKAGE
        } else {
            &self.pkg
        }
    }

    /// Resolve the flags into generation options.
    fn options(&self) -> Result<GenerateOptions> {
        let output = match (&self.output, &self.path) {
            (Some(file), _) => OutputTarget::File(file.clone()),
            (None, Some(dir)) => OutputTarget::directory(dir)?,
            (None, None) => OutputTarget::binary_directory()?,
        };

        Ok(GenerateOptions {
            inputs: self.inputs.clone(),
            package: self.package().to_string(),
            output,
            dry_run: self.dry_run,
        })
    }
}

/// Rewrite `-pkg`, `-path` and `-output` (also in `-flag=value` form) to
/// their double-dash spelling.
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(flag) = text.strip_prefix('-').filter(|rest| !rest.starts_with('-')) else {
                return arg;
            };
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            if LEGACY_FLAGS.contains(&name) {
                OsString::from(format!("-{}", text))
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(args: &[&str]) -> Vec<String> {
        normalize_args(args.iter().map(OsString::from))
            .into_iter()
            .map(|arg| arg.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_normalize_legacy_flags() {
        assert_eq!(
            normalize(&["gen-mode", "-pkg", "modes", "-path=out", "-output", "m.rs", "a.json"]),
            ["gen-mode", "--pkg", "modes", "--path=out", "--output", "m.rs", "a.json"]
        );
    }

    #[test]
    fn test_normalize_leaves_other_args() {
        assert_eq!(
            normalize(&["gen-mode", "--pkg", "x", "-h", "-", "-pkgs", "--dry-run"]),
            ["gen-mode", "--pkg", "x", "-h", "-", "-pkgs", "--dry-run"]
        );
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["gen-mode", "modes.json"]);
        assert_eq!(cli.pkg, "main");
        assert_eq!(cli.inputs, [PathBuf::from("modes.json")]);
        assert!(cli.path.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_parse_legacy_flags() {
        let cli = Cli::parse_from(normalize_args(
            ["gen-mode", "-pkg=modes", "-path", "out", "a.json", "b.toml"].map(OsString::from),
        ));
        assert_eq!(cli.pkg, "modes");
        assert_eq!(cli.path, Some(PathBuf::from("out")));
        assert_eq!(cli.inputs.len(), 2);
    }

    #[test]
    fn test_empty_pkg_selects_default() {
        let cli = Cli::parse_from(normalize_args(
            ["gen-mode", "-pkg", "", "a.json"].map(OsString::from),
        ));
        assert_eq!(cli.pkg, "");
        assert_eq!(cli.package(), DEFAULT_PACKAGE);
        assert_eq!(cli.options().unwrap().package, "main");
    }

    #[test]
    fn test_output_overrides_path() {
        let cli = Cli::parse_from(["gen-mode", "--path", "out", "--output", "x/m.rs", "a.json"]);
        let options = cli.options().unwrap();
        assert_eq!(options.output.resolve("mode_gen.rs"), PathBuf::from("x/m.rs"));
    }

    #[test]
    fn test_path_is_made_absolute() {
        let cli = Cli::parse_from(["gen-mode", "--path", "out", "a.json"]);
        let path = cli.options().unwrap().output.resolve("mode_gen.rs");
        assert!(path.is_absolute());
        assert!(path.ends_with("out/mode_gen.rs"));
    }

    #[test]
    fn test_default_output_is_binary_directory() {
        let cli = Cli::parse_from(["gen-mode", "a.json"]);
        let path = cli.options().unwrap().output.resolve("mode_gen.rs");
        let exe = std::env::current_exe().unwrap();
        assert_eq!(path, exe.parent().unwrap().join("mode_gen.rs"));
    }
}
