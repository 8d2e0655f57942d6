//! Generator - the application's scaffolding orchestrator.
//!
//! Materializing a preset is three steps against the project root, run
//! strictly in order:
//!
//! 1. Manifest merge: preset devDependencies folded into `package.json`
//! 2. Build-config rewrite: `webpack.mix.js` retargeted at the asset dir
//! 3. Asset copy: the preset's starter tree placed under the asset dir
//!
//! A failing step aborts the ones after it but never rolls back the ones
//! before it. Partial completion is an observable end state: whatever a
//! finished step wrote stays on disk, and its success message has already
//! been delivered.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, Reporter, TemplateSource},
    domain::{
        BUILD_CONFIG_FILE, MANIFEST_FILE, PRESET_REGISTRY, PackageManifest, Preset, TargetDir,
        rewrite_asset_references,
    },
    error::ScaffoldResult,
};

/// Registry information about one preset, shaped for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetInfo {
    /// Registry name, as accepted on the command line.
    pub name: String,
    /// One-line description.
    pub summary: String,
    /// Extra devDependencies as `name@range` entries. Empty for presets
    /// whose base manifest already carries everything they need.
    pub extra_dev_dependencies: Vec<String>,
}

/// Every preset with its registry data, in registry order.
pub fn preset_listing() -> Vec<PresetInfo> {
    PRESET_REGISTRY
        .iter()
        .map(|def| PresetInfo {
            name: def.preset.to_string(),
            summary: def.summary.to_string(),
            extra_dev_dependencies: def
                .dev_dependencies
                .iter()
                .map(|dep| format!("{}@{}", dep.name, dep.range))
                .collect(),
        })
        .collect()
}

/// Main scaffolding service.
///
/// Holds the project root as explicit construction state rather than
/// ambient process-wide configuration, so callers (and tests) decide
/// where artifacts land.
pub struct Generator {
    root: PathBuf,
    templates: Box<dyn TemplateSource>,
    filesystem: Box<dyn Filesystem>,
    reporter: Box<dyn Reporter>,
}

impl Generator {
    /// Create a generator that writes under `root`.
    pub fn new(
        root: impl Into<PathBuf>,
        templates: Box<dyn TemplateSource>,
        filesystem: Box<dyn Filesystem>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            root: root.into(),
            templates,
            filesystem,
            reporter,
        }
    }

    /// Materialize `preset` into the project root, with starter assets
    /// under `dir`.
    #[instrument(skip(self), fields(preset = %preset, dir = %dir, root = %self.root.display()))]
    pub fn generate(&self, preset: Preset, dir: &TargetDir) -> ScaffoldResult<()> {
        info!("Generating {preset} scaffolding");

        // The root may not exist yet when the caller points it at a fresh
        // directory. Every step writes beneath it, so establish it once.
        self.filesystem.create_dir_all(&self.root)?;

        self.write_manifest(preset)?;
        self.write_build_config(preset, dir)?;
        self.copy_asset_tree(preset, dir)?;

        info!("Scaffolding complete");
        Ok(())
    }

    /// Step 1: merge the preset's devDependencies into its base manifest
    /// and write the result as `<root>/package.json`.
    fn write_manifest(&self, preset: Preset) -> ScaffoldResult<()> {
        let raw = self.templates.manifest(preset)?;
        let mut manifest = PackageManifest::parse(&raw)?;
        manifest.merge_dev_dependencies(preset.definition().dev_dependencies)?;
        let rendered = manifest.render()?;

        let path = self.root.join(MANIFEST_FILE);
        self.filesystem.write_file(&path, &rendered)?;

        debug!(path = %path.display(), "Manifest written");
        self.reporter
            .step_completed(&format!("{MANIFEST_FILE} written with merged devDependencies"));
        Ok(())
    }

    /// Step 2: retarget the preset's build config at `dir` and write it
    /// as `<root>/webpack.mix.js`.
    fn write_build_config(&self, preset: Preset, dir: &TargetDir) -> ScaffoldResult<()> {
        let template = self.templates.build_config(preset)?;
        let rewritten = rewrite_asset_references(&template, dir)?;

        let path = self.root.join(BUILD_CONFIG_FILE);
        self.filesystem.write_file(&path, &rewritten)?;

        debug!(path = %path.display(), "Build config written");
        self.reporter
            .step_completed(&format!("{BUILD_CONFIG_FILE} written for '{dir}'"));
        Ok(())
    }

    /// Step 3: copy the preset's starter tree under `<root>/<dir>`.
    ///
    /// The directory is created if missing and reused if present.
    /// Same-named files are overwritten; anything else already in the
    /// tree is left alone.
    fn copy_asset_tree(&self, preset: Preset, dir: &TargetDir) -> ScaffoldResult<()> {
        let destination = self.root.join(dir);
        self.filesystem.create_dir_all(&destination)?;

        let files = self.templates.asset_files(preset)?;
        for file in &files {
            let target = destination.join(file.path.as_path());
            if let Some(parent) = target.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&target, &file.content)?;
        }

        debug!(files = files.len(), path = %destination.display(), "Assets copied");
        self.reporter
            .step_completed(&format!("Starter assets copied to '{dir}/'"));
        Ok(())
    }
}
