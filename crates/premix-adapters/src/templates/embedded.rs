//! Presets compiled into the binary.
//!
//! The files under `crates/premix-adapters/templates/` are baked in with
//! `include_str!`, so a release binary scaffolds without any companion
//! files on disk. The table below is the only place that knows which
//! files each preset ships.

use premix_core::{
    application::ports::TemplateSource,
    domain::{AssetFile, Preset, RelativePath},
    error::ScaffoldResult,
};

/// One preset's compiled-in files.
struct EmbeddedPreset {
    preset: Preset,
    manifest: &'static str,
    build_config: &'static str,
    /// `(path relative to the asset tree root, content)` pairs.
    assets: &'static [(&'static str, &'static str)],
}

/// Indexed by `Preset` discriminant; keep the order aligned with the enum.
static EMBEDDED: [EmbeddedPreset; 3] = [
    EmbeddedPreset {
        preset: Preset::Vue,
        manifest: include_str!("../../templates/vue/package.json"),
        build_config: include_str!("../../templates/vue/webpack.mix.js"),
        assets: &[
            (
                "js/app.js",
                include_str!("../../templates/vue/assets/js/app.js"),
            ),
            (
                "js/components/App.vue",
                include_str!("../../templates/vue/assets/js/components/App.vue"),
            ),
            (
                "sass/app.scss",
                include_str!("../../templates/vue/assets/sass/app.scss"),
            ),
            (
                "sass/_variables.scss",
                include_str!("../../templates/vue/assets/sass/_variables.scss"),
            ),
        ],
    },
    EmbeddedPreset {
        preset: Preset::React,
        manifest: include_str!("../../templates/react/package.json"),
        build_config: include_str!("../../templates/react/webpack.mix.js"),
        assets: &[
            (
                "js/app.js",
                include_str!("../../templates/react/assets/js/app.js"),
            ),
            (
                "js/components/App.jsx",
                include_str!("../../templates/react/assets/js/components/App.jsx"),
            ),
            (
                "sass/app.scss",
                include_str!("../../templates/react/assets/sass/app.scss"),
            ),
            (
                "sass/_variables.scss",
                include_str!("../../templates/react/assets/sass/_variables.scss"),
            ),
        ],
    },
    EmbeddedPreset {
        preset: Preset::Bootstrap,
        manifest: include_str!("../../templates/bootstrap/package.json"),
        build_config: include_str!("../../templates/bootstrap/webpack.mix.js"),
        assets: &[
            (
                "js/app.js",
                include_str!("../../templates/bootstrap/assets/js/app.js"),
            ),
            (
                "js/bootstrap.js",
                include_str!("../../templates/bootstrap/assets/js/bootstrap.js"),
            ),
            (
                "sass/app.scss",
                include_str!("../../templates/bootstrap/assets/sass/app.scss"),
            ),
            (
                "sass/_variables.scss",
                include_str!("../../templates/bootstrap/assets/sass/_variables.scss"),
            ),
        ],
    },
];

/// Template source serving the compiled-in presets.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    /// Create a new embedded template source.
    pub fn new() -> Self {
        Self
    }

    fn entry(preset: Preset) -> &'static EmbeddedPreset {
        &EMBEDDED[preset as usize]
    }
}

impl Default for EmbeddedTemplates {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn manifest(&self, preset: Preset) -> ScaffoldResult<String> {
        Ok(Self::entry(preset).manifest.to_string())
    }

    fn build_config(&self, preset: Preset) -> ScaffoldResult<String> {
        Ok(Self::entry(preset).build_config.to_string())
    }

    fn asset_files(&self, preset: Preset) -> ScaffoldResult<Vec<AssetFile>> {
        Self::entry(preset)
            .assets
            .iter()
            .map(|(path, content)| Ok(AssetFile::new(RelativePath::new(*path)?, *content)))
            .collect()
    }
}
