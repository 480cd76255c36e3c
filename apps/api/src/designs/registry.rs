//! Immutable design-id → (render function, metadata) registry.
//!
//! Built once at startup and injected through `AppState` — no ambient global.
//! Lookup never fails: unknown ids resolve to [`DEFAULT_DESIGN`], and the
//! constructor refuses a registry in which the default id is missing, so the
//! fallback itself can never dangle.

use anyhow::{ensure, Result};
use serde::Serialize;
use tracing::debug;

use crate::designs::{creative, elegant, minimal, professional, studio};
use crate::models::profile::Profile;
use crate::models::settings::PortfolioSettings;
use crate::sections::SectionList;

/// The id every unknown design identifier resolves to.
pub const DEFAULT_DESIGN: &str = "professional";

/// Everything a design needs to render one portfolio page. The section list
/// is seeded (and possibly edited) by the caller; designs render its sections
/// in list order.
pub struct RenderContext<'a> {
    pub profile: &'a Profile,
    pub settings: &'a PortfolioSettings,
    pub sections: &'a SectionList,
    /// When true, editing affordances are suppressed and only visible
    /// sections render, regardless of the design's own edit surface.
    pub preview: bool,
}

/// A design's render capability. Pure: same inputs, same HTML.
pub type RenderFn = fn(&RenderContext) -> String;

/// Descriptive metadata shown in the design picker.
#[derive(Debug, Clone, Serialize)]
pub struct DesignMetadata {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub features: Vec<&'static str>,
    pub palette: Vec<&'static str>,
    pub icon: &'static str,
}

struct DesignEntry {
    render: RenderFn,
    metadata: DesignMetadata,
}

/// Registration-ordered design table. Read-only after construction.
pub struct DesignRegistry {
    entries: Vec<DesignEntry>,
}

impl DesignRegistry {
    /// Builds the full registry. Fails if ids collide or the default design
    /// is not registered (the fallback must never recurse).
    pub fn new() -> Result<Self> {
        let entries = vec![
            DesignEntry {
                render: professional::render,
                metadata: professional::metadata(),
            },
            DesignEntry {
                render: creative::render,
                metadata: creative::metadata(),
            },
            DesignEntry {
                render: minimal::render,
                metadata: minimal::metadata(),
            },
            DesignEntry {
                render: elegant::render,
                metadata: elegant::metadata(),
            },
            DesignEntry {
                render: studio::render,
                metadata: studio::metadata(),
            },
        ];

        for (i, entry) in entries.iter().enumerate() {
            ensure!(
                !entries[..i].iter().any(|e| e.metadata.id == entry.metadata.id),
                "duplicate design id '{}'",
                entry.metadata.id
            );
        }
        ensure!(
            entries.iter().any(|e| e.metadata.id == DEFAULT_DESIGN),
            "default design '{DEFAULT_DESIGN}' is not registered"
        );

        Ok(DesignRegistry { entries })
    }

    fn entry(&self, id: &str) -> &DesignEntry {
        if let Some(entry) = self.entries.iter().find(|e| e.metadata.id == id) {
            return entry;
        }
        debug!("unknown design '{id}', falling back to '{DEFAULT_DESIGN}'");
        self.entries
            .iter()
            .find(|e| e.metadata.id == DEFAULT_DESIGN)
            .expect("default design validated at construction")
    }

    /// Render capability for `id`, falling back to the default design.
    pub fn resolve_component(&self, id: &str) -> RenderFn {
        self.entry(id).render
    }

    /// Metadata for `id`, same fallback contract as `resolve_component`.
    pub fn resolve_metadata(&self, id: &str) -> &DesignMetadata {
        &self.entry(id).metadata
    }

    /// All design metadata in registration order, for the picker listing.
    pub fn all_metadata(&self) -> Vec<&DesignMetadata> {
        self.entries.iter().map(|e| &e.metadata).collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::CvContent;

    fn registry() -> DesignRegistry {
        DesignRegistry::new().expect("registry construction")
    }

    #[test]
    fn test_default_design_is_registered() {
        let reg = registry();
        assert_eq!(reg.resolve_metadata(DEFAULT_DESIGN).id, DEFAULT_DESIGN);
    }

    #[test]
    fn test_unknown_id_falls_back_to_default_metadata() {
        let reg = registry();
        assert_eq!(
            reg.resolve_metadata("nonexistent-id").id,
            reg.resolve_metadata(DEFAULT_DESIGN).id
        );
    }

    #[test]
    fn test_unknown_id_falls_back_to_default_component() {
        let reg = registry();
        let profile = Profile {
            display_name: "Ada Lovelace".to_string(),
            ..Profile::default()
        };
        let settings = PortfolioSettings::default();
        let sections = SectionList::seed(&profile, &CvContent::default(), &settings);
        let ctx = RenderContext {
            profile: &profile,
            settings: &settings,
            sections: &sections,
            preview: false,
        };
        let fallback = (reg.resolve_component("nonexistent-id"))(&ctx);
        let default = (reg.resolve_component(DEFAULT_DESIGN))(&ctx);
        assert_eq!(fallback, default, "fallback must render the default design");
    }

    #[test]
    fn test_every_id_resolves_to_itself() {
        let reg = registry();
        for metadata in reg.all_metadata() {
            assert_eq!(reg.resolve_metadata(metadata.id).id, metadata.id);
        }
    }

    #[test]
    fn test_metadata_is_complete_for_every_design() {
        let reg = registry();
        for metadata in reg.all_metadata() {
            assert!(!metadata.label.is_empty());
            assert!(!metadata.description.is_empty());
            assert!(!metadata.features.is_empty());
            assert!(!metadata.palette.is_empty());
            assert!(!metadata.icon.is_empty());
        }
    }

    #[test]
    fn test_resolved_component_renders() {
        let reg = registry();
        let profile = Profile {
            display_name: "Ada Lovelace".to_string(),
            ..Profile::default()
        };
        let settings = PortfolioSettings::default();
        let sections = SectionList::seed(&profile, &CvContent::default(), &settings);
        let ctx = RenderContext {
            profile: &profile,
            settings: &settings,
            sections: &sections,
            preview: true,
        };
        for metadata in reg.all_metadata() {
            let html = (reg.resolve_component(metadata.id))(&ctx);
            assert!(
                html.contains("Ada Lovelace"),
                "design '{}' must render the profile name",
                metadata.id
            );
        }
    }
}
