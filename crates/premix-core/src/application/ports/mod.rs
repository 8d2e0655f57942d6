//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `premix-adapters` crate provides implementations; the CLI provides
//! the console-backed [`Reporter`].

use std::path::Path;

use crate::domain::{AssetFile, Preset};
use crate::error::ScaffoldResult;

/// Port for reading a preset's bundled templates.
///
/// Implemented by:
/// - `premix_adapters::templates::EmbeddedTemplates` (compiled-in, production)
/// - `premix_adapters::templates::DirTemplates` (on-disk override directory)
pub trait TemplateSource: Send + Sync {
    /// Raw text of the preset's `package.json` template.
    fn manifest(&self, preset: Preset) -> ScaffoldResult<String>;

    /// Raw text of the preset's `webpack.mix.js` template.
    fn build_config(&self, preset: Preset) -> ScaffoldResult<String>;

    /// Every file in the preset's starter asset tree, paths relative to
    /// the tree root.
    ///
    /// Ordering is source-defined; the copy step does not depend on it.
    fn asset_files(&self, preset: Preset) -> ScaffoldResult<Vec<AssetFile>>;
}

/// Port for filesystem writes.
///
/// Implemented by:
/// - `premix_adapters::filesystem::LocalFilesystem` (production)
/// - `premix_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parents. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Check whether a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for step-completion notifications.
///
/// The generator reports each completed step through this, which is what
/// keeps partial completion observable: messages for finished steps have
/// already been delivered when a later step fails.
///
/// Delivery is advisory and infallible by contract - implementations
/// swallow their own console errors rather than failing a scaffold over a
/// progress line.
pub trait Reporter: Send + Sync {
    /// Deliver a human-readable success message for one completed step.
    fn step_completed(&self, message: &str);
}
