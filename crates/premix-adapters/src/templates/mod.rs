//! Template sources for the bundled presets.
//!
//! Two implementations of the `TemplateSource` port live here:
//!
//! - [`EmbeddedTemplates`] - the preset files compiled into the binary
//!   with `include_str!`. Production default; the binary scaffolds
//!   without any companion files on disk.
//! - [`DirTemplates`] - preset files read from a directory tree at call
//!   time. Used for template development and by tests.
//!
//! # Source resolution order
//!
//! [`default_source`] picks the implementation:
//!
//! 1. **`$PREMIX_TEMPLATES_DIR`** - environment variable override. Point
//!    it at a directory with the `<preset>/package.json` layout to serve
//!    modified templates without rebuilding.
//! 2. **Embedded** - otherwise the compiled-in presets are used.
//!
//! A set-but-blank variable counts as unset.

mod directory;
mod embedded;

use premix_core::application::ports::TemplateSource;
use tracing::{debug, info};

pub use directory::DirTemplates;
pub use embedded::EmbeddedTemplates;

/// Environment variable that overrides the embedded templates.
pub const TEMPLATES_DIR_ENV: &str = "PREMIX_TEMPLATES_DIR";

/// Pick the template source per the resolution order in the module docs.
pub fn default_source() -> Box<dyn TemplateSource> {
    match std::env::var(TEMPLATES_DIR_ENV) {
        Ok(dir) if !dir.trim().is_empty() => {
            info!(path = %dir, "using template directory from $PREMIX_TEMPLATES_DIR");
            Box::new(DirTemplates::new(dir))
        }
        _ => {
            debug!("using embedded templates");
            Box::new(EmbeddedTemplates::new())
        }
    }
}
