//! "Professional" design — the default. Classic two-column layout: identity
//! and contact in a sidebar, content sections in the main column.

use crate::designs::html::{css_vars, escape, page_shell, section_body};
use crate::designs::registry::{DesignMetadata, RenderContext};
use crate::sections::SectionKey;

pub fn metadata() -> DesignMetadata {
    DesignMetadata {
        id: "professional",
        label: "Professional",
        description: "Clean two-column layout with a structured sidebar. The safe default.",
        features: vec!["Two-column layout", "Contact sidebar", "Print friendly"],
        palette: vec!["#2563eb", "#1e293b", "#f8fafc"],
        icon: "briefcase",
    }
}

pub fn render(ctx: &RenderContext) -> String {
    let headline = ctx
        .profile
        .headline
        .as_deref()
        .map(|h| format!(r#"<p class="header__headline">{}</p>"#, escape(h)))
        .unwrap_or_default();
    let tagline = if ctx.settings.tagline.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="header__tagline">{}</p>"#, escape(&ctx.settings.tagline))
    };
    let photo = ctx
        .profile
        .photo_url
        .as_deref()
        .map(|url| format!(r#"<img class="header__photo" src="{}" alt="">"#, escape(url)))
        .unwrap_or_default();

    // Contact lives in the sidebar; everything else flows down the main column.
    let mut sidebar_sections = String::new();
    let mut main_sections = String::new();
    for section in ctx.sections.visible_sections(false) {
        let empty_class = if section.data.is_empty() { " section--empty" } else { "" };
        let block = format!(
            r#"<section class="section section--{key}{empty_class}">
<h2>{title}</h2>
{body}
</section>"#,
            key = section.key.as_str(),
            title = section.title,
            body = section_body(section),
        );
        if section.key == SectionKey::ContactInfo {
            sidebar_sections.push_str(&block);
        } else {
            main_sections.push_str(&block);
        }
    }

    let body = format!(
        r#"<div class="layout">
<aside class="layout__sidebar">
{photo}
<h1>{name}</h1>
{headline}{tagline}
{sidebar_sections}
</aside>
<main class="layout__main">
{main_sections}
</main>
</div>"#,
        name = escape(&ctx.profile.display_name),
    );

    let styles = format!(
        "{vars}\n{layout}",
        vars = css_vars(ctx.settings),
        layout = r#"body { font-family: system-ui, sans-serif; margin: 0; color: #1e293b; }
.layout { display: flex; max-width: 960px; margin: 0 auto; }
.layout__sidebar { width: 280px; padding: 2rem; background: #f8fafc; border-right: 3px solid var(--primary); }
.layout__main { flex: 1; padding: 2rem; }
.section h2 { color: var(--primary); border-bottom: 1px solid #e2e8f0; padding-bottom: .25rem; }
.section--empty { opacity: .5; }
.header__photo { width: 96px; border-radius: 50%; }"#,
    );

    page_shell(&ctx.profile.display_name, "professional", &styles, &body)
}
