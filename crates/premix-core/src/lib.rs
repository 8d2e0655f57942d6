//! Premix Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Premix
//! asset scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           premix-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │              (Generator)                │
//! │     Orchestrates the Three Steps        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: TemplateSource, Filesystem,   │
//! │            Reporter)                    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    premix-adapters (Infrastructure)     │
//! │ (EmbeddedTemplates, LocalFilesystem, …) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Preset registry, PackageManifest,     │
//! │   build-config rewrite, TargetDir)      │
//! │        No I/O, No Side Effects          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! The domain layer is directly usable on its own:
//!
//! ```rust
//! use premix_core::domain::{PackageManifest, Preset, TargetDir};
//!
//! // 1. Validate the asset directory name
//! let dir = TargetDir::new("frontend").unwrap();
//! assert_eq!(dir.to_string(), "frontend");
//!
//! // 2. Merge a preset's devDependencies into a base manifest
//! let mut manifest = PackageManifest::parse(r#"{ "private": true }"#).unwrap();
//! manifest
//!     .merge_dev_dependencies(Preset::Vue.definition().dev_dependencies)
//!     .unwrap();
//! assert!(manifest.render().unwrap().contains(r#""vue": "^2.5.18""#));
//! ```
//!
//! The [`application::Generator`] service runs the full three-step
//! scaffold against injected [`application::ports`] implementations;
//! `premix-adapters` supplies the production template source and
//! filesystem, and the CLI supplies the console reporter.

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Generator, PresetInfo, preset_listing,
        ports::{Filesystem, Reporter, TemplateSource},
    };
    pub use crate::domain::{
        BUILD_CONFIG_FILE, DEFAULT_ASSETS_DIR, MANIFEST_FILE, PackageManifest, Preset, PresetDef,
        RelativePath, TargetDir,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
