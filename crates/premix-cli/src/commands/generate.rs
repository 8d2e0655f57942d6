//! Implementation of the `premix generate` command.
//!
//! Responsibility: translate CLI arguments and config defaults into a
//! preset and a validated target directory, call the core generator, and
//! display results. No business logic lives here.

use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info, instrument};

use premix_adapters::{LocalFilesystem, default_source};
use premix_core::{
    application::{Generator, ports::Filesystem},
    domain::{BUILD_CONFIG_FILE, DEFAULT_ASSETS_DIR, MANIFEST_FILE, Preset, TargetDir},
};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::{ConsoleReporter, OutputManager},
};

/// Execute the `premix generate` command.
///
/// Dispatch sequence:
/// 1. Resolve the preset (argument, then config default, then vue)
/// 2. Resolve and validate the target directory name
/// 3. Early-exit if `--dry-run`
/// 4. Execute the three scaffolding steps via the core `Generator`
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(root = %args.root.display()))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve preset and target directory from args + config.
    let preset = resolve_preset(&args, &config)?;
    let dir = resolve_target_dir(&args, &config)?;

    debug!(preset = %preset, dir = %dir, "Generation target resolved");

    // 2. The scaffold root must be usable as a directory.
    if args.root.is_file() {
        return Err(CliError::InvalidInput {
            message: format!("--root '{}' is a file, not a directory", args.root.display()),
            source: None,
        });
    }

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        return describe_dry_run(&args.root, preset, &dir, &output);
    }

    // 4. Wire adapters and run the three steps.
    output.header(&format!("Scaffolding {preset} preset..."))?;
    info!(preset = %preset, root = %args.root.display(), "Generation started");

    let generator = Generator::new(
        args.root,
        default_source(),
        Box::new(LocalFilesystem::new()),
        Box::new(ConsoleReporter::new(output.clone())),
    );

    if let Err(e) = generator.generate(preset, &dir) {
        // The three steps are not transactional: whatever the completed
        // steps wrote stays on disk. Say so rather than leave the user
        // guessing at the state of their project.
        output.error("Scaffolding aborted; files written by completed steps are kept.")?;
        return Err(e.into());
    }

    info!(preset = %preset, "Generation completed");

    // 5. Success + next steps
    output.success(&format!("{preset} scaffolding generated!"))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  npm install")?;
        output.print("  npm run dev")?;
    }

    Ok(())
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// CLI argument, then config default, then the registry default (vue).
fn resolve_preset(args: &GenerateArgs, config: &AppConfig) -> CliResult<Preset> {
    if let Some(arg) = args.preset {
        return Ok(arg.into());
    }
    match config.defaults.preset.as_deref() {
        Some(name) => Preset::from_str(name).map_err(|e| CliError::ConfigError {
            message: format!("defaults.preset '{name}' is not a known preset"),
            source: Some(Box::new(e)),
        }),
        None => Ok(Preset::default()),
    }
}

/// `--dir`, then config default, then `assets`.
///
/// The domain validates whichever one wins. A bad flag is the user's
/// mistake (exit 2); a bad config value is a configuration error (exit 4).
fn resolve_target_dir(args: &GenerateArgs, config: &AppConfig) -> CliResult<TargetDir> {
    if let Some(name) = &args.dir {
        return TargetDir::new(name).map_err(|e| CliError::Core(e.into()));
    }
    if let Some(name) = &config.defaults.dir {
        return TargetDir::new(name).map_err(|e| CliError::ConfigError {
            message: format!("defaults.dir '{name}' is not usable: {e}"),
            source: Some(Box::new(e)),
        });
    }
    TargetDir::new(DEFAULT_ASSETS_DIR).map_err(|e| CliError::Core(e.into()))
}

// ── Dry run ───────────────────────────────────────────────────────────────────

/// Print what `generate` would touch, flagging paths that already exist.
///
/// Reads nothing from the templates and writes nothing to disk; the
/// existence probes are the only filesystem access.
fn describe_dry_run(
    root: &Path,
    preset: Preset,
    dir: &TargetDir,
    output: &OutputManager,
) -> CliResult<()> {
    let fs = LocalFilesystem::new();

    output.info(&format!(
        "Dry run: would scaffold the {preset} preset at {}",
        root.display()
    ))?;

    for file in [MANIFEST_FILE, BUILD_CONFIG_FILE] {
        let path = root.join(file);
        if fs.exists(&path) {
            output.warning(&format!("{} exists and would be overwritten", path.display()))?;
        } else {
            output.info(&format!("  would write {}", path.display()))?;
        }
    }

    let asset_root = root.join(dir.as_str());
    if fs.exists(&asset_root) {
        output.warning(&format!(
            "{}/ exists; starter files with matching names would be overwritten",
            asset_root.display()
        ))?;
    } else {
        output.info(&format!("  would copy starter files into {}/", asset_root.display()))?;
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
