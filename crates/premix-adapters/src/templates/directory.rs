//! Templates read from a directory tree at call time.

use std::path::PathBuf;

use walkdir::WalkDir;

use premix_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::{
        AssetFile, BUILD_CONFIG_FILE, DEFAULT_ASSETS_DIR, MANIFEST_FILE, Preset, RelativePath,
    },
    error::ScaffoldResult,
};

/// Template source reading preset files from `<root>/<preset>/` on disk.
///
/// Expected layout per preset:
///
/// ```text
/// <root>/vue/package.json
/// <root>/vue/webpack.mix.js
/// <root>/vue/assets/...
/// ```
///
/// Files are read lazily, so edits to the directory are picked up on the
/// next call without restarting anything.
#[derive(Debug, Clone)]
pub struct DirTemplates {
    root: PathBuf,
}

impl DirTemplates {
    /// Serve templates from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read(&self, path: PathBuf) -> ScaffoldResult<String> {
        std::fs::read_to_string(&path).map_err(|e| {
            ApplicationError::TemplateRead {
                path,
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl TemplateSource for DirTemplates {
    fn manifest(&self, preset: Preset) -> ScaffoldResult<String> {
        self.read(self.root.join(preset.as_str()).join(MANIFEST_FILE))
    }

    fn build_config(&self, preset: Preset) -> ScaffoldResult<String> {
        self.read(self.root.join(preset.as_str()).join(BUILD_CONFIG_FILE))
    }

    fn asset_files(&self, preset: Preset) -> ScaffoldResult<Vec<AssetFile>> {
        let tree = self.root.join(preset.as_str()).join(DEFAULT_ASSETS_DIR);

        let mut files = Vec::new();
        for entry in WalkDir::new(&tree) {
            let entry = entry.map_err(|e| ApplicationError::TemplateRead {
                path: tree.clone(),
                reason: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let content = self.read(entry.path().to_path_buf())?;
            let relative =
                entry
                    .path()
                    .strip_prefix(&tree)
                    .map_err(|e| ApplicationError::TemplateRead {
                        path: entry.path().to_path_buf(),
                        reason: e.to_string(),
                    })?;
            files.push(AssetFile::new(RelativePath::new(relative)?, content));
        }

        // WalkDir order is platform-dependent; pin it down for callers.
        files.sort_by(|a, b| a.path.as_path().cmp(b.path.as_path()));
        Ok(files)
    }
}
