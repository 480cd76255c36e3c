//! Shared HTML building blocks used by every design.
//!
//! Designs assemble pages with `format!` templates; this module owns escaping,
//! the per-kind section bodies, and the common page shell so each design only
//! decides layout and styling.

use chrono::NaiveDate;

use crate::models::profile::ContactDetails;
use crate::models::settings::PortfolioSettings;
use crate::sections::{Section, SectionData};

/// Minimal HTML escaping for user-supplied text.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// CSS custom properties derived from settings. `primary_color` is passed
/// through untouched; it is cosmetic input, not interpreted.
pub fn css_vars(settings: &PortfolioSettings) -> String {
    format!(
        ":root {{ --primary: {}; }}",
        escape(&settings.primary_color)
    )
}

/// Common page shell: doctype, head with inline styles, body content.
pub fn page_shell(title: &str, design_class: &str, styles: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
{styles}
</style>
</head>
<body class="design design--{design_class}">
{body}
</body>
</html>"#,
        title = escape(title),
        design_class = design_class,
        styles = styles,
        body = body,
    )
}

fn format_date(date: &NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

fn date_range(start: &NaiveDate, end: &Option<NaiveDate>) -> String {
    match end {
        Some(end) => format!("{} – {}", format_date(start), format_date(end)),
        None => format!("{} – Present", format_date(start)),
    }
}

/// Inner HTML for one section's payload. An empty payload yields a
/// de-emphasized placeholder — the section keeps its slot on the page.
pub fn section_body(section: &Section) -> String {
    if section.data.is_empty() {
        return r#"<p class="section__placeholder">Nothing here yet.</p>"#.to_string();
    }
    match &section.data {
        SectionData::Experiences(entries) => {
            let items: String = entries
                .iter()
                .map(|e| {
                    let highlights: String = e
                        .highlights
                        .iter()
                        .map(|h| format!("<li>{}</li>", escape(h)))
                        .collect();
                    let highlights = if highlights.is_empty() {
                        String::new()
                    } else {
                        format!(r#"<ul class="experience__highlights">{highlights}</ul>"#)
                    };
                    let description = e
                        .description
                        .as_deref()
                        .map(|d| format!(r#"<p class="experience__description">{}</p>"#, escape(d)))
                        .unwrap_or_default();
                    format!(
                        r#"<article class="experience">
<h3>{role} · {company}</h3>
<span class="experience__dates">{dates}</span>
{description}{highlights}
</article>"#,
                        role = escape(&e.role),
                        company = escape(&e.company),
                        dates = date_range(&e.date_start, &e.date_end),
                    )
                })
                .collect();
            format!(r#"<div class="experiences">{items}</div>"#)
        }
        SectionData::Competences(entries) => {
            let items: String = entries
                .iter()
                .map(|c| {
                    let category = c
                        .category
                        .as_deref()
                        .map(|cat| format!(r#" <span class="competence__category">{}</span>"#, escape(cat)))
                        .unwrap_or_default();
                    let level = c
                        .level
                        .map(|l| {
                            let l = l.min(100);
                            format!(
                                r#"<span class="competence__bar"><span style="width:{l}%"></span></span>"#
                            )
                        })
                        .unwrap_or_default();
                    format!(
                        r#"<li class="competence">{name}{category}{level}</li>"#,
                        name = escape(&c.name),
                    )
                })
                .collect();
            format!(r#"<ul class="competences">{items}</ul>"#)
        }
        SectionData::Hobbies(entries) => {
            let items: String = entries
                .iter()
                .map(|h| {
                    let note = h
                        .note
                        .as_deref()
                        .map(|n| format!(r#" <span class="hobby__note">{}</span>"#, escape(n)))
                        .unwrap_or_default();
                    format!("<li>{}{note}</li>", escape(&h.name))
                })
                .collect();
            format!(r#"<ul class="hobbies">{items}</ul>"#)
        }
        SectionData::Languages(entries) => {
            let items: String = entries
                .iter()
                .map(|l| {
                    format!(
                        r#"<li>{name} <span class="language__level">{level}</span></li>"#,
                        name = escape(&l.name),
                        level = l.proficiency.label(),
                    )
                })
                .collect();
            format!(r#"<ul class="languages">{items}</ul>"#)
        }
        SectionData::Summary(text) => {
            let text = text.as_deref().unwrap_or_default();
            format!(r#"<p class="summary">{}</p>"#, escape(text))
        }
        SectionData::ContactInfo(details) => contact_body(details),
        SectionData::Services(entries) => {
            let items: String = entries
                .iter()
                .map(|s| {
                    let description = s
                        .description
                        .as_deref()
                        .map(|d| format!("<p>{}</p>", escape(d)))
                        .unwrap_or_default();
                    format!(
                        r#"<div class="service"><h3>{title}</h3>{description}</div>"#,
                        title = escape(&s.title),
                    )
                })
                .collect();
            format!(r#"<div class="services">{items}</div>"#)
        }
    }
}

fn contact_body(details: &ContactDetails) -> String {
    let mut rows = Vec::new();
    if let Some(email) = &details.email {
        rows.push(format!(
            r#"<li><a href="mailto:{0}">{0}</a></li>"#,
            escape(email)
        ));
    }
    if let Some(phone) = &details.phone {
        rows.push(format!("<li>{}</li>", escape(phone)));
    }
    if let Some(location) = &details.location {
        rows.push(format!("<li>{}</li>", escape(location)));
    }
    if let Some(website) = &details.website {
        rows.push(format!(
            r#"<li><a href="{0}">{0}</a></li>"#,
            escape(website)
        ));
    }
    for link in &details.social_links {
        rows.push(format!(
            r#"<li><a href="{url}">{label}</a></li>"#,
            url = escape(&link.url),
            label = escape(&link.label),
        ));
    }
    format!(r#"<ul class="contact">{}</ul>"#, rows.concat())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SectionKey;

    #[test]
    fn test_escape_replaces_html_metacharacters() {
        assert_eq!(
            escape(r#"<b>"A & B"</b>"#),
            "&lt;b&gt;&quot;A &amp; B&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_empty_section_renders_placeholder() {
        let section = Section {
            key: SectionKey::Hobbies,
            title: SectionKey::Hobbies.title(),
            data: SectionData::Hobbies(vec![]),
            visible: true,
        };
        let body = section_body(&section);
        assert!(body.contains("section__placeholder"));
    }

    #[test]
    fn test_primary_color_passed_through_as_css_var() {
        let settings = PortfolioSettings {
            primary_color: "#ff8800".to_string(),
            ..PortfolioSettings::default()
        };
        assert!(css_vars(&settings).contains("#ff8800"));
    }
}
