use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// CV content payloads, one collection per section kind. Read-only input;
/// the section list model only inspects these for existence/emptiness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CvContent {
    #[serde(default)]
    pub experiences: Vec<ExperienceEntry>,
    #[serde(default)]
    pub competences: Vec<CompetenceEntry>,
    #[serde(default)]
    pub hobbies: Vec<HobbyEntry>,
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub date_start: NaiveDate,
    pub date_end: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetenceEntry {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Self-assessed level, 0–100. Rendered as a bar where a design wants one.
    #[serde(default)]
    pub level: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HobbyEntry {
    pub name: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub name: String,
    #[serde(default)]
    pub proficiency: Proficiency,
}

/// Spoken-language proficiency. Unknown wire values fall back to Intermediate
/// rather than failing the whole request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Proficiency {
    Native,
    Fluent,
    Professional,
    #[default]
    Intermediate,
    Basic,
}

impl Proficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Native => "Native",
            Proficiency::Fluent => "Fluent",
            Proficiency::Professional => "Professional",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Basic => "Basic",
        }
    }

    fn from_wire(s: &str) -> Self {
        match s {
            "native" => Proficiency::Native,
            "fluent" => Proficiency::Fluent,
            "professional" => Proficiency::Professional,
            "basic" => Proficiency::Basic,
            // "intermediate" and anything unrecognized
            _ => Proficiency::Intermediate,
        }
    }
}

impl<'de> Deserialize<'de> for Proficiency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Proficiency::from_wire(&raw))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}
