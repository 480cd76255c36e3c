//! "Creative" design — color-forward single column with a gradient hero
//! banner built from the portfolio's primary color.

use crate::designs::html::{css_vars, escape, page_shell, section_body};
use crate::designs::registry::{DesignMetadata, RenderContext};

pub fn metadata() -> DesignMetadata {
    DesignMetadata {
        id: "creative",
        label: "Creative",
        description: "Bold gradient hero and card-style sections for visual portfolios.",
        features: vec!["Gradient hero", "Card sections", "Color forward"],
        palette: vec!["#7c3aed", "#db2777", "#fdf4ff"],
        icon: "palette",
    }
}

pub fn render(ctx: &RenderContext) -> String {
    let bio = if ctx.settings.bio.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="hero__bio">{}</p>"#, escape(&ctx.settings.bio))
    };
    let tagline = if ctx.settings.tagline.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="hero__tagline">{}</p>"#, escape(&ctx.settings.tagline))
    };

    let cards: String = ctx
        .sections
        .visible_sections(false)
        .map(|section| {
            let empty_class = if section.data.is_empty() { " card--empty" } else { "" };
            format!(
                r#"<section class="card card--{key}{empty_class}">
<h2>{title}</h2>
{body}
</section>"#,
                key = section.key.as_str(),
                title = section.title,
                body = section_body(section),
            )
        })
        .collect();

    let body = format!(
        r#"<header class="hero">
<h1>{name}</h1>
{tagline}{bio}
</header>
<main class="cards">
{cards}
</main>"#,
        name = escape(&ctx.profile.display_name),
    );

    let styles = format!(
        "{vars}\n{layout}",
        vars = css_vars(ctx.settings),
        layout = r#"body { font-family: system-ui, sans-serif; margin: 0; background: #fdf4ff; }
.hero { padding: 4rem 2rem; color: #fff; text-align: center; background: linear-gradient(135deg, var(--primary), #db2777); }
.cards { max-width: 720px; margin: -2rem auto 2rem; padding: 0 1rem; }
.card { background: #fff; border-radius: 12px; padding: 1.5rem; margin-bottom: 1.5rem; box-shadow: 0 4px 12px rgba(0,0,0,.08); }
.card h2 { margin-top: 0; color: var(--primary); }
.card--empty { opacity: .5; }"#,
    );

    page_shell(&ctx.profile.display_name, "creative", &styles, &body)
}
