use serde::{Deserialize, Serialize};

/// Per-portfolio display configuration. Each `show_*` flag seeds the initial
/// visibility of the matching section; `primary_color` is passed through to
/// the designs untouched.
///
/// Defaults mirror the observed behavior: every section starts visible except
/// `services`, which starts hidden.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioSettings {
    pub show_experiences: bool,
    pub show_competences: bool,
    pub show_hobbies: bool,
    pub show_languages: bool,
    pub show_summary: bool,
    pub show_contact_info: bool,
    pub show_services: bool,
    pub primary_color: String,
    pub tagline: String,
    pub bio: String,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        PortfolioSettings {
            show_experiences: true,
            show_competences: true,
            show_hobbies: true,
            show_languages: true,
            show_summary: true,
            show_contact_info: true,
            show_services: false,
            primary_color: "#2563eb".to_string(),
            tagline: String::new(),
            bio: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_hidden_by_default() {
        let settings = PortfolioSettings::default();
        assert!(!settings.show_services, "services starts hidden");
        assert!(settings.show_experiences);
        assert!(settings.show_competences);
        assert!(settings.show_hobbies);
        assert!(settings.show_languages);
        assert!(settings.show_summary);
        assert!(settings.show_contact_info);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: PortfolioSettings =
            serde_json::from_str(r#"{"show_summary": false, "tagline": "hello"}"#)
                .expect("partial settings deserialize");
        assert!(!settings.show_summary);
        assert_eq!(settings.tagline, "hello");
        assert!(settings.show_experiences, "unspecified flags keep defaults");
        assert!(!settings.show_services);
    }
}
