//! Build-config template rewriting.
//!
//! The shipped `webpack.mix.js` templates are written against the
//! conventional `assets` source directory. When the user picks another
//! directory name, every whole-word occurrence of the token is rewritten
//! and everything else passes through byte-identical.

use regex::{NoExpand, Regex};

use crate::domain::error::DomainError;
use crate::domain::paths::TargetDir;

/// Name of the build-config artifact written to the project root.
pub const BUILD_CONFIG_FILE: &str = "webpack.mix.js";

/// Directory-name token the shipped templates are written against.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Rewrite every whole-word occurrence of the default assets token.
///
/// Word boundaries keep longer identifiers such as `myassets` or
/// `assets_cache` intact, while occurrences inside path literals
/// (`'assets/js/app.js'`) are whole words and are rewritten. The
/// replacement is inserted literally (no capture-group expansion), so
/// directory names containing `$` are safe. Rewriting to the default name
/// is the identity transformation.
pub fn rewrite_asset_references(source: &str, dir: &TargetDir) -> Result<String, DomainError> {
    // Compiled per call; generate runs this once per invocation.
    let pattern = format!(r"\b{}\b", regex::escape(DEFAULT_ASSETS_DIR));
    let token = Regex::new(&pattern).map_err(|e| DomainError::SubstitutionFailed {
        reason: e.to_string(),
    })?;
    Ok(token.replace_all(source, NoExpand(dir.as_str())).into_owned())
}

// ── tests ────────────────────────────────────────────────────────────────────
