//! "Studio" design — the editable one. Outside preview it renders an editing
//! surface: every section appears (hidden ones muted and dashed) with
//! show/hide and move-up/move-down controls. The controls carry the section
//! key and the edit op as data attributes; the consuming page turns clicks
//! into the `edits` array of the next render request. In preview the controls
//! are suppressed and only visible sections render, like any public design.

use crate::designs::html::{css_vars, escape, page_shell, section_body};
use crate::designs::registry::{DesignMetadata, RenderContext};
use crate::sections::Section;

pub fn metadata() -> DesignMetadata {
    DesignMetadata {
        id: "studio",
        label: "Studio",
        description: "Customizable layout: reorder sections and show or hide each block.",
        features: vec!["Reorder sections", "Show/hide blocks", "Live preview"],
        palette: vec!["#0d9488", "#134e4a", "#f0fdfa"],
        icon: "sliders",
    }
}

pub fn render(ctx: &RenderContext) -> String {
    let edit_mode = !ctx.preview;

    let sections: String = ctx
        .sections
        .visible_sections(edit_mode)
        .map(|section| render_section(section, edit_mode))
        .collect();

    let mode_badge = if edit_mode {
        r#"<span class="badge">Editing</span>"#
    } else {
        ""
    };

    let body = format!(
        r#"<main class="board">
<header class="board__header">
<h1>{name}</h1>
{mode_badge}
</header>
{sections}
</main>"#,
        name = escape(&ctx.profile.display_name),
    );

    let styles = format!(
        "{vars}\n{layout}",
        vars = css_vars(ctx.settings),
        layout = r#"body { font-family: system-ui, sans-serif; background: #f0fdfa; color: #134e4a; margin: 0; }
.board { max-width: 760px; margin: 0 auto; padding: 2rem 1rem; }
.badge { background: var(--primary); color: #fff; border-radius: 999px; padding: .2rem .8rem; font-size: .8rem; }
.section { background: #fff; border-radius: 8px; padding: 1.25rem; margin-bottom: 1rem; }
.section--hidden { opacity: .45; border: 1px dashed var(--primary); background: transparent; }
.section--empty .section__body { opacity: .5; }
.section__toolbar { float: right; display: flex; gap: .25rem; }
.section__toolbar button { border: 1px solid #99f6e4; background: #fff; border-radius: 4px; cursor: pointer; }
.section h2 { margin-top: 0; color: var(--primary); }"#,
    );

    page_shell(&ctx.profile.display_name, "studio", &styles, &body)
}

fn render_section(section: &Section, edit_mode: bool) -> String {
    let key = section.key.as_str();
    let mut classes = format!("section section--{key}");
    if edit_mode && !section.visible {
        classes.push_str(" section--hidden");
    }
    if section.data.is_empty() {
        classes.push_str(" section--empty");
    }

    let toolbar = if edit_mode {
        let toggle_label = if section.visible { "Hide" } else { "Show" };
        format!(
            r#"<div class="section__toolbar">
<button data-op="move" data-key="{key}" data-direction="up" aria-label="Move up">&#8593;</button>
<button data-op="move" data-key="{key}" data-direction="down" aria-label="Move down">&#8595;</button>
<button data-op="toggle" data-key="{key}">{toggle_label}</button>
</div>"#
        )
    } else {
        String::new()
    };

    format!(
        r#"<section class="{classes}">
{toolbar}<h2>{title}</h2>
<div class="section__body">
{body}
</div>
</section>"#,
        title = section.title,
        body = section_body(section),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::CvContent;
    use crate::models::profile::Profile;
    use crate::models::settings::PortfolioSettings;
    use crate::sections::SectionList;

    fn render_with(preview: bool) -> String {
        let profile = Profile {
            display_name: "Ada Lovelace".to_string(),
            ..Profile::default()
        };
        let settings = PortfolioSettings::default();
        let sections = SectionList::seed(&profile, &CvContent::default(), &settings);
        render(&RenderContext {
            profile: &profile,
            settings: &settings,
            sections: &sections,
            preview,
        })
    }

    #[test]
    fn test_edit_mode_shows_hidden_sections_muted() {
        let html = render_with(false);
        // services is hidden by default but must still appear, dashed
        assert!(html.contains("section--services"));
        assert!(html.contains("section--hidden"));
    }

    #[test]
    fn test_edit_mode_renders_controls() {
        let html = render_with(false);
        assert!(html.contains(r#"data-op="toggle""#));
        assert!(html.contains(r#"data-direction="up""#));
        assert!(html.contains(r#"data-direction="down""#));
    }

    #[test]
    fn test_preview_suppresses_controls_and_hidden_sections() {
        let html = render_with(true);
        assert!(!html.contains(r#"data-op="toggle""#), "no controls in preview");
        assert!(
            !html.contains("section--services"),
            "hidden section must not render in preview"
        );
    }
}
