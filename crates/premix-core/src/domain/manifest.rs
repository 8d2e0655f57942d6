//! Package manifest model.
//!
//! [`PackageManifest`] wraps the JSON object form of a `package.json`
//! template. The only mutation the domain allows is the preset dependency
//! merge: everything else in the document passes through byte-for-byte
//! modulo re-encoding.
//!
//! ## Ordering contract
//!
//! Top-level keys keep the order they were authored in (`serde_json` is
//! built with `preserve_order`); only the `devDependencies` object is
//! rebuilt, sorted lexicographically ascending by key. The merge is
//! deterministic, so re-running it over its own output is a no-op.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::domain::error::DomainError;
use crate::domain::preset::Dependency;

/// Name of the manifest artifact written to the project root.
pub const MANIFEST_FILE: &str = "package.json";

const DEV_DEPENDENCIES_KEY: &str = "devDependencies";

/// A parsed `package.json` document.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    root: Map<String, Value>,
}

impl PackageManifest {
    /// Parse a manifest template.
    ///
    /// Fails with [`DomainError::ManifestDecode`] on malformed JSON and
    /// [`DomainError::ManifestShape`] when the document is not an object.
    /// Neither should happen with shipped templates; both indicate a
    /// corrupted installation or a broken template override directory.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| DomainError::ManifestDecode {
                reason: e.to_string(),
            })?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(DomainError::ManifestShape {
                reason: format!(
                    "expected a JSON object at the top level, found {}",
                    json_kind(&other)
                ),
            }),
        }
    }

    /// Merge a preset's dependency table into `devDependencies`.
    ///
    /// Pure data transformation:
    /// - entries from `extra` overwrite identically-named template entries,
    /// - the resulting object is sorted ascending by key,
    /// - every other part of the manifest is untouched, including the
    ///   position of the `devDependencies` key itself.
    ///
    /// Merging an empty table still sorts any existing entries, so presets
    /// that contribute nothing produce the same deterministic shape.
    pub fn merge_dev_dependencies(&mut self, extra: &[Dependency]) -> Result<(), DomainError> {
        if extra.is_empty() && !self.root.contains_key(DEV_DEPENDENCIES_KEY) {
            // Nothing to merge and nothing to sort; don't invent the key.
            return Ok(());
        }

        let slot = self
            .root
            .entry(DEV_DEPENDENCIES_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        let object = slot
            .as_object_mut()
            .ok_or_else(|| DomainError::ManifestShape {
                reason: format!("'{DEV_DEPENDENCIES_KEY}' is not an object"),
            })?;

        let mut merged: BTreeMap<String, Value> = std::mem::take(object).into_iter().collect();
        for dep in extra {
            merged.insert(dep.name.to_owned(), Value::String(dep.range.to_owned()));
        }

        // BTreeMap iterates key-ascending; re-inserting in that order leaves
        // the (insertion-ordered) object sorted.
        object.extend(merged);
        Ok(())
    }

    /// Version range recorded for one devDependency, if present.
    pub fn dev_dependency(&self, name: &str) -> Option<&str> {
        self.root
            .get(DEV_DEPENDENCIES_KEY)?
            .as_object()?
            .get(name)?
            .as_str()
    }

    /// `devDependencies` keys in stored order.
    pub fn dev_dependency_names(&self) -> Vec<&str> {
        self.root
            .get(DEV_DEPENDENCIES_KEY)
            .and_then(Value::as_object)
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Re-encode with human-readable indentation and a trailing newline.
    ///
    /// `serde_json` never escapes forward slashes, so scoped package names
    /// and scripts containing paths survive verbatim.
    pub fn render(&self) -> Result<String, DomainError> {
        let mut out = serde_json::to_string_pretty(&self.root).map_err(|e| {
            DomainError::ManifestEncode {
                reason: e.to_string(),
            }
        })?;
        out.push('\n');
        Ok(out)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── tests ────────────────────────────────────────────────────────────────────
