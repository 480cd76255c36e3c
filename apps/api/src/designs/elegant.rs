//! "Elegant" design — serif typography, centered header, hairline dividers.

use crate::designs::html::{css_vars, escape, page_shell, section_body};
use crate::designs::registry::{DesignMetadata, RenderContext};

pub fn metadata() -> DesignMetadata {
    DesignMetadata {
        id: "elegant",
        label: "Elegant",
        description: "Serif typography with a centered header and hairline dividers.",
        features: vec!["Serif type", "Centered header", "Hairline dividers"],
        palette: vec!["#92702a", "#2b2b2b", "#faf8f3"],
        icon: "feather",
    }
}

pub fn render(ctx: &RenderContext) -> String {
    let tagline = if ctx.settings.tagline.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="header__tagline">{}</p>"#,
            escape(&ctx.settings.tagline)
        )
    };

    let sections: String = ctx
        .sections
        .visible_sections(false)
        .map(|section| {
            let empty_class = if section.data.is_empty() { " section--empty" } else { "" };
            format!(
                r#"<section class="section{empty_class}">
<h2>{title}</h2>
<hr class="divider">
{body}
</section>"#,
                title = section.title,
                body = section_body(section),
            )
        })
        .collect();

    let body = format!(
        r#"<main class="sheet">
<header class="header">
<h1>{name}</h1>
{tagline}
</header>
{sections}
</main>"#,
        name = escape(&ctx.profile.display_name),
    );

    let styles = format!(
        "{vars}\n{layout}",
        vars = css_vars(ctx.settings),
        layout = r#"body { font-family: 'Playfair Display', Georgia, serif; background: #faf8f3; color: #2b2b2b; margin: 0; }
.sheet { max-width: 680px; margin: 2rem auto; padding: 3rem; background: #fff; }
.header { text-align: center; margin-bottom: 2rem; }
.header h1 { letter-spacing: .08em; }
.header__tagline { font-style: italic; color: var(--primary); }
.divider { border: none; border-top: 1px solid var(--primary); width: 48px; margin: .5rem 0 1rem; }
.section--empty { opacity: .5; }"#,
    );

    page_shell(&ctx.profile.display_name, "elegant", &styles, &body)
}
