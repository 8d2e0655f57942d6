//! Application layer for Premix.
//!
//! This layer contains:
//! - **Service**: use case orchestration ([`Generator`])
//! - **Ports**: trait seams for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain but contains no business
//! rules itself. Merge semantics, path validation, and the substitution
//! rules all live in `crate::domain`.

pub mod error;
pub mod generator;
pub mod ports;

pub use error::ApplicationError;
pub use generator::{Generator, PresetInfo, preset_listing};
pub use ports::{Filesystem, Reporter, TemplateSource};
