//! End-to-end scaffolding through the real adapters.
//!
//! These tests run the core `Generator` with the adapter implementations
//! of every port: embedded and directory template sources, the local and
//! in-memory filesystems, and the collecting reporter.

use std::fs;
use std::path::{Path, PathBuf};

use premix_adapters::{
    CollectingReporter, DirTemplates, EmbeddedTemplates, LocalFilesystem, MemoryFilesystem,
};
use premix_core::application::Generator;
use premix_core::domain::{Preset, TargetDir};
use tempfile::TempDir;

fn embedded_generator(root: &Path) -> (Generator, MemoryFilesystem, CollectingReporter) {
    let filesystem = MemoryFilesystem::new();
    let reporter = CollectingReporter::new();
    let generator = Generator::new(
        root,
        Box::new(EmbeddedTemplates::new()),
        Box::new(filesystem.clone()),
        Box::new(reporter.clone()),
    );
    (generator, filesystem, reporter)
}

#[test]
fn vue_scaffold_lands_in_memory_with_merged_pins() {
    let (generator, filesystem, reporter) = embedded_generator(Path::new("/app"));

    generator
        .generate(Preset::Vue, &TargetDir::default())
        .unwrap();

    let manifest = filesystem
        .read_file(Path::new("/app/package.json"))
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    let dev = parsed["devDependencies"].as_object().unwrap();

    // Registry pins land, overriding the base manifest where names clash.
    assert_eq!(dev["vue"], "^2.5.18");
    assert_eq!(dev["vue-template-compiler"], "^2.6.10");
    assert_eq!(dev["resolve-url-loader"], "^2.3.1");
    assert_eq!(dev["sass"], "^1.20.1");
    assert_eq!(dev["sass-loader"], "^8.0.0");
    // Base entries survive.
    assert_eq!(dev["laravel-mix"], "^4.0.7");

    // Keys come back sorted ascending (preserve_order keeps map order).
    let keys: Vec<&String> = dev.keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    assert!(
        filesystem
            .read_file(Path::new("/app/assets/js/app.js"))
            .unwrap()
            .starts_with("import Vue from 'vue';")
    );

    // Nothing beyond the two root artifacts and the starter tree.
    let written = filesystem.list_files();
    let expected = [
        "/app/assets/js/app.js",
        "/app/assets/js/components/App.vue",
        "/app/assets/sass/_variables.scss",
        "/app/assets/sass/app.scss",
        "/app/package.json",
        "/app/webpack.mix.js",
    ]
    .map(PathBuf::from);
    assert_eq!(written, expected);

    assert_eq!(reporter.messages().len(), 3);
}

#[test]
fn bootstrap_scaffold_adds_its_registry_pins() {
    let (generator, filesystem, _) = embedded_generator(Path::new("/app"));

    generator
        .generate(Preset::Bootstrap, &TargetDir::default())
        .unwrap();

    let manifest = filesystem
        .read_file(Path::new("/app/package.json"))
        .unwrap();
    assert!(manifest.contains(r#""bootstrap": "^4.0.0""#));
    assert!(manifest.contains(r#""jquery": "^3.2""#));
    assert!(manifest.contains(r#""popper.js": "^1.12""#));
}

#[test]
fn react_scaffold_relies_on_its_base_manifest_alone() {
    let (generator, filesystem, _) = embedded_generator(Path::new("/app"));

    generator
        .generate(Preset::React, &TargetDir::default())
        .unwrap();

    let manifest = filesystem
        .read_file(Path::new("/app/package.json"))
        .unwrap();
    // No pins are added at merge time; react comes from the base manifest.
    assert!(manifest.contains(r#""react": "^16.2""#));
    assert!(filesystem
        .read_file(Path::new("/app/assets/js/components/App.jsx"))
        .is_some());
}

#[test]
fn custom_dir_rewrites_build_config_and_relocates_assets() {
    let (generator, filesystem, _) = embedded_generator(Path::new("/app"));
    let dir = TargetDir::new("frontend").unwrap();

    generator.generate(Preset::Vue, &dir).unwrap();

    let config = filesystem
        .read_file(Path::new("/app/webpack.mix.js"))
        .unwrap();
    assert!(config.contains("mix.js('frontend/js/app.js', 'webroot/js')"));
    assert!(config.contains(".sass('frontend/sass/app.scss', 'webroot/css')"));

    assert!(filesystem
        .read_file(Path::new("/app/frontend/sass/_variables.scss"))
        .is_some());
    assert!(
        !filesystem
            .list_files()
            .iter()
            .any(|p| p.starts_with("/app/assets")),
        "nothing may land under the default directory name"
    );
}

#[test]
fn directory_source_scaffolds_onto_the_local_filesystem() {
    let templates = TempDir::new().unwrap();
    let vue = templates.path().join("vue");
    fs::create_dir_all(vue.join("assets/js")).unwrap();
    fs::write(
        vue.join("package.json"),
        r#"{ "devDependencies": { "sass-loader": "^7.1.0" } }"#,
    )
    .unwrap();
    fs::write(
        vue.join("webpack.mix.js"),
        "mix.js('assets/js/app.js', 'webroot/js');\n",
    )
    .unwrap();
    fs::write(vue.join("assets/js/app.js"), "// entry\n").unwrap();

    let project = TempDir::new().unwrap();
    let generator = Generator::new(
        project.path(),
        Box::new(DirTemplates::new(templates.path())),
        Box::new(LocalFilesystem::new()),
        Box::new(CollectingReporter::new()),
    );

    generator
        .generate(Preset::Vue, &TargetDir::default())
        .unwrap();

    let manifest = fs::read_to_string(project.path().join("package.json")).unwrap();
    assert!(manifest.contains(r#""sass-loader": "^8.0.0""#));
    assert!(manifest.contains(r#""vue": "^2.5.18""#));
    assert_eq!(
        fs::read_to_string(project.path().join("assets/js/app.js")).unwrap(),
        "// entry\n"
    );
}

#[test]
fn rerunning_produces_byte_identical_artifacts() {
    let project = TempDir::new().unwrap();
    let make = || {
        Generator::new(
            project.path(),
            Box::new(EmbeddedTemplates::new()),
            Box::new(LocalFilesystem::new()),
            Box::new(CollectingReporter::new()),
        )
    };

    make()
        .generate(Preset::Vue, &TargetDir::default())
        .unwrap();
    let first = fs::read_to_string(project.path().join("package.json")).unwrap();
    let first_config = fs::read_to_string(project.path().join("webpack.mix.js")).unwrap();

    make()
        .generate(Preset::Vue, &TargetDir::default())
        .unwrap();
    let second = fs::read_to_string(project.path().join("package.json")).unwrap();
    let second_config = fs::read_to_string(project.path().join("webpack.mix.js")).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_config, second_config);
}
