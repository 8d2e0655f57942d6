//! Implementation of the `premix list` command.

use premix_core::application::preset_listing;

use crate::{
    cli::{ListArgs, ListFormat},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let listing = preset_listing();

    match args.format {
        ListFormat::Table => {
            // Everything below goes through the quiet-suppressed printer;
            // skip the formatting work entirely when nothing will show.
            if output.is_quiet() {
                return Ok(());
            }

            output
                .header("Available Presets:")
                .with_cli_context(|| "writing preset table")?;
            for preset in &listing {
                output.print(&format!("  {:<10} {}", preset.name, preset.summary))?;
                let extras = if preset.extra_dev_dependencies.is_empty() {
                    "(none)".to_string()
                } else {
                    preset.extra_dev_dependencies.join(", ")
                };
                output.print(&format!("  {:<10} adds: {extras}", ""))?;
            }
        }

        ListFormat::List => {
            // Bare names, one per line. Suited to shell loops.
            for preset in &listing {
                println!("{}", preset.name);
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout, bypassing OutputManager
            // because JSON output must be parseable even in non-TTY pipes.
            let json = serde_json::to_string_pretty(&listing).map_err(|e| CliError::IoError {
                message: "failed to encode the preset listing as JSON".into(),
                source: std::io::Error::other(e),
            })?;
            println!("{json}");
        }
    }

    Ok(())
}
