//! Infrastructure adapters for Premix.
//!
//! This crate implements the ports defined in `premix-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod reporter;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use reporter::CollectingReporter;
pub use templates::{DirTemplates, EmbeddedTemplates, TEMPLATES_DIR_ENV, default_source};
