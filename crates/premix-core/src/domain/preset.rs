//! Preset registry.
//!
//! # Design Rationale
//!
//! Preset behaviour used to be the kind of thing that ends up scattered
//! across per-preset methods looked up by name at runtime. This module
//! replaces that with a single static registry: each preset is described
//! exactly once by its [`PresetDef`]. Template paths derive from
//! [`Preset::as_str`] by naming convention (`<preset>/package.json`,
//! `<preset>/webpack.mix.js`, `<preset>/assets/`), and the manifest merge
//! reads `dev_dependencies` straight from the entry.
//!
//! # Adding a New Preset
//!
//! 1. Add a variant to [`Preset`]
//! 2. Add one [`PresetDef`] entry to [`PRESET_REGISTRY`] (same order)
//! 3. Ship its template files
//! 4. That's it; no `match` arms elsewhere

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── Preset tag ───────────────────────────────────────────────────────────────

/// Scaffolding preset: selects which template files and which extra
/// devDependencies apply for one `generate` invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Vue,
    React,
    Bootstrap,
}

impl Preset {
    /// All presets, in registry order.
    pub const ALL: [Preset; 3] = [Preset::Vue, Preset::React, Preset::Bootstrap];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vue => "vue",
            Self::React => "react",
            Self::Bootstrap => "bootstrap",
        }
    }

    /// The registry entry for this preset.
    pub fn definition(self) -> &'static PresetDef {
        // Discriminants mirror PRESET_REGISTRY declaration order; the
        // registry_covers_every_preset test keeps them aligned.
        &PRESET_REGISTRY[self as usize]
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vue" => Ok(Self::Vue),
            "react" => Ok(Self::React),
            "bootstrap" => Ok(Self::Bootstrap),
            _ => Err(DomainError::UnknownPreset { name: s.into() }),
        }
    }
}

// ── Preset definitions ───────────────────────────────────────────────────────

/// One pinned devDependency contributed by a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    /// npm package name.
    pub name: &'static str,
    /// npm version-range string, e.g. `^2.5.18`.
    pub range: &'static str,
}

/// Describes everything the generator needs to know about one preset.
#[derive(Debug, Clone, Copy)]
pub struct PresetDef {
    /// The preset this entry describes.
    pub preset: Preset,

    /// One-line description shown by `premix list`.
    pub summary: &'static str,

    /// Extra devDependencies merged into the preset's base manifest.
    ///
    /// These win over identically-named entries already in the template.
    pub dev_dependencies: &'static [Dependency],
}

/// Single source of truth for preset behaviour.
///
/// To add a preset: add one entry here (order must match the [`Preset`]
/// discriminant order) and ship its template files. No `match` arms
/// elsewhere.
pub static PRESET_REGISTRY: &[PresetDef] = &[
    PresetDef {
        preset: Preset::Vue,
        summary: "Vue 2 with single-file components and Sass",
        dev_dependencies: &[
            Dependency {
                name: "resolve-url-loader",
                range: "^2.3.1",
            },
            Dependency {
                name: "sass",
                range: "^1.20.1",
            },
            Dependency {
                name: "sass-loader",
                range: "^8.0.0",
            },
            Dependency {
                name: "vue",
                range: "^2.5.18",
            },
            Dependency {
                name: "vue-template-compiler",
                range: "^2.6.10",
            },
        ],
    },
    PresetDef {
        preset: Preset::React,
        summary: "React with a JSX entry point and Sass",
        // React contributes nothing here: its base manifest template
        // already pins react and react-dom. Keep this slice empty rather
        // than duplicating those entries.
        dev_dependencies: &[],
    },
    PresetDef {
        preset: Preset::Bootstrap,
        summary: "Bootstrap 4 with jQuery and Popper",
        dev_dependencies: &[
            Dependency {
                name: "bootstrap",
                range: "^4.0.0",
            },
            Dependency {
                name: "jquery",
                range: "^3.2",
            },
            Dependency {
                name: "popper.js",
                range: "^1.12",
            },
        ],
    },
];

/// Look up a preset definition by (case-insensitive) name.
pub fn find_preset(name: &str) -> Option<&'static PresetDef> {
    PRESET_REGISTRY
        .iter()
        .find(|def| def.preset.as_str().eq_ignore_ascii_case(name.trim()))
}

// ── tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_preset() {
        assert_eq!(PRESET_REGISTRY.len(), Preset::ALL.len());
        for preset in Preset::ALL {
            assert_eq!(preset.definition().preset, preset);
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Preset::from_str("vue").unwrap(), Preset::Vue);
        assert_eq!(Preset::from_str("Vue").unwrap(), Preset::Vue);
        assert_eq!(Preset::from_str("BOOTSTRAP").unwrap(), Preset::Bootstrap);
        assert_eq!(Preset::from_str(" react ").unwrap(), Preset::React);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = Preset::from_str("angular").unwrap_err();
        assert!(matches!(err, DomainError::UnknownPreset { .. }));
    }

    #[test]
    fn default_preset_is_vue() {
        assert_eq!(Preset::default(), Preset::Vue);
    }

    #[test]
    fn vue_pins_expected_packages() {
        let deps = Preset::Vue.definition().dev_dependencies;
        let find = |name: &str| deps.iter().find(|d| d.name == name).map(|d| d.range);
        assert_eq!(find("vue"), Some("^2.5.18"));
        assert_eq!(find("vue-template-compiler"), Some("^2.6.10"));
        assert_eq!(find("sass"), Some("^1.20.1"));
        assert_eq!(find("sass-loader"), Some("^8.0.0"));
        assert_eq!(find("resolve-url-loader"), Some("^2.3.1"));
        assert_eq!(deps.len(), 5);
    }

    #[test]
    fn bootstrap_pins_expected_packages() {
        let deps = Preset::Bootstrap.definition().dev_dependencies;
        let find = |name: &str| deps.iter().find(|d| d.name == name).map(|d| d.range);
        assert_eq!(find("bootstrap"), Some("^4.0.0"));
        assert_eq!(find("jquery"), Some("^3.2"));
        assert_eq!(find("popper.js"), Some("^1.12"));
        assert_eq!(deps.len(), 3);
    }

    // The react preset deliberately has no extra-dependency table. If this
    // test starts failing someone added entries; that is a behaviour change,
    // not a cleanup.
    #[test]
    fn react_adds_no_dev_dependencies() {
        assert!(Preset::React.definition().dev_dependencies.is_empty());
    }

    #[test]
    fn find_preset_matches_registry() {
        assert_eq!(find_preset("vue").map(|d| d.preset), Some(Preset::Vue));
        assert_eq!(
            find_preset("Bootstrap").map(|d| d.preset),
            Some(Preset::Bootstrap)
        );
        assert!(find_preset("svelte").is_none());
    }

    #[test]
    fn dependency_names_are_unique_per_preset() {
        for def in PRESET_REGISTRY {
            for (i, dep) in def.dev_dependencies.iter().enumerate() {
                assert!(
                    !def.dev_dependencies[i + 1..]
                        .iter()
                        .any(|other| other.name == dep.name),
                    "duplicate dependency '{}' in preset '{}'",
                    dep.name,
                    def.preset
                );
            }
        }
    }
}
