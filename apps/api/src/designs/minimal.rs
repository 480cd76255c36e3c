//! "Minimal" design — sparse typographic single column, almost no chrome.

use crate::designs::html::{css_vars, escape, page_shell, section_body};
use crate::designs::registry::{DesignMetadata, RenderContext};

pub fn metadata() -> DesignMetadata {
    DesignMetadata {
        id: "minimal",
        label: "Minimal",
        description: "Just type on a page. Content first, nothing else.",
        features: vec!["Single column", "No decoration", "Fast to scan"],
        palette: vec!["#111111", "#555555", "#ffffff"],
        icon: "type",
    }
}

pub fn render(ctx: &RenderContext) -> String {
    let headline = ctx
        .profile
        .headline
        .as_deref()
        .map(|h| format!(r#"<p class="masthead__headline">{}</p>"#, escape(h)))
        .unwrap_or_default();

    let sections: String = ctx
        .sections
        .visible_sections(false)
        .map(|section| {
            let empty_class = if section.data.is_empty() { " section--empty" } else { "" };
            format!(
                "<section class=\"section{empty_class}\">\n<h2>{title}</h2>\n{body}\n</section>",
                title = section.title,
                body = section_body(section),
            )
        })
        .collect();

    let body = format!(
        r#"<main class="page">
<header class="masthead">
<h1>{name}</h1>
{headline}
</header>
{sections}
</main>"#,
        name = escape(&ctx.profile.display_name),
    );

    let styles = format!(
        "{vars}\n{layout}",
        vars = css_vars(ctx.settings),
        layout = r#"body { font-family: Georgia, serif; color: #111; margin: 0; }
.page { max-width: 620px; margin: 0 auto; padding: 3rem 1rem; }
.masthead h1 { font-weight: normal; letter-spacing: .02em; }
.section h2 { font-size: 1rem; text-transform: uppercase; letter-spacing: .1em; color: #555; }
.section--empty { opacity: .45; }
ul { padding-left: 1.1rem; }"#,
    );

    page_shell(&ctx.profile.display_name, "minimal", &styles, &body)
}
