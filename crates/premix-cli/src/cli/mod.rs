//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use premix_core::domain::Preset;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "premix",
    bin_name = "premix",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Frontend asset scaffolding",
    long_about = "Premix drops a preset frontend build into your project: \
                  a package.json with the right devDependencies, a \
                  webpack.mix.js wired to your asset directory, and a \
                  starter asset tree.",
    after_help = "EXAMPLES:\n\
        \x20 premix generate                          # vue preset into ./assets\n\
        \x20 premix generate react\n\
        \x20 premix generate bootstrap --dir frontend\n\
        \x20 premix list --format json\n\
        \x20 premix completions bash > /usr/share/bash-completion/completions/premix",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate scaffolding for a preset.
    #[command(
        visible_alias = "g",
        about = "Generate scaffolding for a preset",
        after_help = "EXAMPLES:\n\
            \x20 premix generate                  # defaults: vue preset, ./assets\n\
            \x20 premix generate react\n\
            \x20 premix generate vue --dir frontend\n\
            \x20 premix generate bootstrap --root path/to/project\n\
            \x20 premix generate --dry-run"
    )]
    Generate(GenerateArgs),

    /// List available presets.
    #[command(
        visible_alias = "ls",
        about = "List available presets",
        after_help = "EXAMPLES:\n\
            \x20 premix list\n\
            \x20 premix list --format list\n\
            \x20 premix list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 premix completions bash > ~/.local/share/bash-completion/completions/premix\n\
            \x20 premix completions zsh  > ~/.zfunc/_premix\n\
            \x20 premix completions fish > ~/.config/fish/completions/premix.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `premix generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Preset to scaffold. Falls back to the configured default, then vue.
    #[arg(value_name = "PRESET", value_enum, help = "Preset to scaffold")]
    pub preset: Option<PresetArg>,

    /// Asset directory name, created under the project root.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "NAME",
        help = "Asset directory name (default: assets)"
    )]
    pub dir: Option<String>,

    /// Project root the artifacts are written under.
    #[arg(
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Project root to write into"
    )]
    pub root: PathBuf,

    /// Preview what would be written without writing any files.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

/// Preset choices as exposed on the command line.
///
/// Mirrors `premix_core::domain::Preset`; kept separate so clap attribute
/// concerns stay out of the domain enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PresetArg {
    Vue,
    React,
    Bootstrap,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Vue => Preset::Vue,
            PresetArg::React => Preset::React,
            PresetArg::Bootstrap => Preset::Bootstrap,
        }
    }
}

impl std::fmt::Display for PresetArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Preset::from(*self))
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `premix list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `premix completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn preset_arg_display_matches_core() {
        assert_eq!(PresetArg::Vue.to_string(), "vue");
        assert_eq!(PresetArg::React.to_string(), "react");
        assert_eq!(PresetArg::Bootstrap.to_string(), "bootstrap");
    }

    #[test]
    fn parse_generate_with_all_flags() {
        let cli = Cli::parse_from([
            "premix", "generate", "react", "--dir", "frontend", "--root", "proj", "--dry-run",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.preset, Some(PresetArg::React));
        assert_eq!(args.dir.as_deref(), Some("frontend"));
        assert_eq!(args.root, PathBuf::from("proj"));
        assert!(args.dry_run);
    }

    #[test]
    fn generate_preset_is_optional() {
        let cli = Cli::parse_from(["premix", "generate"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.preset, None);
        assert_eq!(args.dir, None);
        assert_eq!(args.root, PathBuf::from("."));
    }

    #[test]
    fn generate_alias_g() {
        let cli = Cli::parse_from(["premix", "g", "bootstrap"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn list_alias_ls() {
        let cli = Cli::parse_from(["premix", "ls"]);
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn unknown_preset_is_a_parse_error() {
        let result = Cli::try_parse_from(["premix", "generate", "angular"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["premix", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
