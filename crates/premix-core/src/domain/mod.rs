// ============================================================================
//  PURE DOMAIN - NO I/O CROSSES THIS BOUNDARY
// ============================================================================

//! Core domain layer for Premix.
//!
//! This module contains pure business logic. All filesystem and console
//! concerns are handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or environment access
//! - **Immutable value objects**: everything here is `Clone + PartialEq`
//! - **Single-source registries**: preset behaviour lives in one table

// Public API - what the world sees
pub mod build_config;
pub mod error;
pub mod manifest;
pub mod paths;
pub mod preset;

// Re-exports for convenience
pub use build_config::{BUILD_CONFIG_FILE, DEFAULT_ASSETS_DIR, rewrite_asset_references};
pub use error::DomainError;
pub use manifest::{MANIFEST_FILE, PackageManifest};
pub use paths::{AssetFile, RelativePath, TargetDir};
pub use preset::{Dependency, PRESET_REGISTRY, Preset, PresetDef, find_preset};
