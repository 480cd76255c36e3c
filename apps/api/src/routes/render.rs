use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::designs::registry::{RenderContext, DEFAULT_DESIGN};
use crate::errors::AppError;
use crate::models::content::CvContent;
use crate::models::profile::Profile;
use crate::models::settings::PortfolioSettings;
use crate::sections::{SectionEdit, SectionList};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RenderQuery {
    /// Design identifier; unknown values fall back to the default design.
    pub design: Option<String>,
    /// When true, editing affordances are suppressed and only visible
    /// sections render, regardless of the design.
    #[serde(default)]
    pub preview: bool,
}

/// Full render input: the three external data inputs plus the ordered edit
/// actions to apply to the freshly seeded section list.
#[derive(Deserialize)]
pub struct RenderRequest {
    pub profile: Profile,
    #[serde(default)]
    pub content: CvContent,
    #[serde(default)]
    pub settings: PortfolioSettings,
    #[serde(default)]
    pub edits: Vec<SectionEdit>,
}

/// POST /api/v1/portfolio/render?design=<id>&preview=<bool>
///
/// Seeds the section list from the request settings, applies the edit actions
/// in order (each a whole-list copy-on-write step), resolves the design with
/// registry fallback, and returns the rendered page.
pub async fn handle_render(
    State(state): State<AppState>,
    Query(query): Query<RenderQuery>,
    Json(req): Json<RenderRequest>,
) -> Result<Html<String>, AppError> {
    let seeded = SectionList::seed(&req.profile, &req.content, &req.settings);
    let sections = req
        .edits
        .iter()
        .fold(seeded, |list, edit| list.apply(edit));

    let design_id = query.design.as_deref().unwrap_or(DEFAULT_DESIGN);
    debug!(design = design_id, preview = query.preview, edits = req.edits.len(), "rendering portfolio");
    let render = state.registry.resolve_component(design_id);

    let ctx = RenderContext {
        profile: &req.profile,
        settings: &req.settings,
        sections: &sections,
        preview: query.preview,
    };
    Ok(Html(render(&ctx)))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::Config;
    use crate::designs::DesignRegistry;
    use crate::sections::{MoveDirection, SectionKey};

    fn test_state() -> AppState {
        AppState {
            config: Config {
                port: 8080,
                rust_log: "info".to_string(),
            },
            registry: Arc::new(DesignRegistry::new().expect("registry")),
        }
    }

    fn base_request(edits: Vec<SectionEdit>) -> RenderRequest {
        RenderRequest {
            profile: Profile {
                display_name: "Ada Lovelace".to_string(),
                ..Profile::default()
            },
            content: CvContent::default(),
            settings: PortfolioSettings::default(),
            edits,
        }
    }

    async fn render_html(design: Option<&str>, preview: bool, edits: Vec<SectionEdit>) -> String {
        let query = RenderQuery {
            design: design.map(str::to_string),
            preview,
        };
        let result = handle_render(
            State(test_state()),
            Query(query),
            Json(base_request(edits)),
        )
        .await
        .expect("render never fails");
        result.0
    }

    #[tokio::test]
    async fn test_render_default_design_shows_visible_sections_only() {
        let html = render_html(None, false, vec![]).await;
        assert!(html.contains("design--professional"));
        assert!(html.contains("Ada Lovelace"));
        // services is hidden by default
        assert!(!html.contains("section--services"));
    }

    #[tokio::test]
    async fn test_unknown_design_falls_back_to_default() {
        let unknown = render_html(Some("nonexistent-id"), false, vec![]).await;
        let default = render_html(Some("professional"), false, vec![]).await;
        assert_eq!(unknown, default);
    }

    #[tokio::test]
    async fn test_edits_are_applied_before_rendering() {
        let edits = vec![
            SectionEdit::Toggle {
                key: SectionKey::Services,
            },
            SectionEdit::Move {
                key: SectionKey::Hobbies,
                direction: MoveDirection::Up,
            },
        ];
        let html = render_html(Some("professional"), false, edits).await;
        assert!(
            html.contains("section--services"),
            "toggled-on section must render"
        );
        let hobbies_at = html.find("section--hobbies").unwrap();
        let competences_at = html.find("section--competences").unwrap();
        assert!(hobbies_at < competences_at, "hobbies moved above skills");
    }

    #[tokio::test]
    async fn test_preview_flag_reaches_the_design() {
        let editing = render_html(Some("studio"), false, vec![]).await;
        let preview = render_html(Some("studio"), true, vec![]).await;
        assert!(editing.contains(r#"data-op="toggle""#));
        assert!(!preview.contains(r#"data-op="toggle""#));
    }
}
