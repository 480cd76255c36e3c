use serde::{Deserialize, Serialize};

use crate::models::content::{
    CompetenceEntry, ExperienceEntry, HobbyEntry, LanguageEntry, ServiceEntry,
};
use crate::models::profile::ContactDetails;

/// The closed set of known section kinds. The wire form is the snake_case
/// name; unknown keys are rejected at the deserialization boundary instead of
/// flowing through the model as open-ended strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Experiences,
    Competences,
    Hobbies,
    Languages,
    Summary,
    ContactInfo,
    Services,
}

impl SectionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Experiences => "experiences",
            SectionKey::Competences => "competences",
            SectionKey::Hobbies => "hobbies",
            SectionKey::Languages => "languages",
            SectionKey::Summary => "summary",
            SectionKey::ContactInfo => "contact_info",
            SectionKey::Services => "services",
        }
    }

    /// Fixed display label for the section heading.
    pub fn title(&self) -> &'static str {
        match self {
            SectionKey::Experiences => "Experience",
            SectionKey::Competences => "Skills",
            SectionKey::Hobbies => "Hobbies",
            SectionKey::Languages => "Languages",
            SectionKey::Summary => "Summary",
            SectionKey::ContactInfo => "Contact",
            SectionKey::Services => "Services",
        }
    }
}

/// Per-kind section payload — a tagged union rather than an open `any` blob.
/// The model never interprets payloads beyond the emptiness check below.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionData {
    Experiences(Vec<ExperienceEntry>),
    Competences(Vec<CompetenceEntry>),
    Hobbies(Vec<HobbyEntry>),
    Languages(Vec<LanguageEntry>),
    Summary(Option<String>),
    ContactInfo(ContactDetails),
    Services(Vec<ServiceEntry>),
}

impl SectionData {
    /// Display-only condition: an empty section still renders, de-emphasized.
    /// It is never dropped from the list.
    pub fn is_empty(&self) -> bool {
        match self {
            SectionData::Experiences(entries) => entries.is_empty(),
            SectionData::Competences(entries) => entries.is_empty(),
            SectionData::Hobbies(entries) => entries.is_empty(),
            SectionData::Languages(entries) => entries.is_empty(),
            SectionData::Summary(text) => {
                text.as_deref().map(|t| t.trim().is_empty()).unwrap_or(true)
            }
            SectionData::ContactInfo(details) => details.is_empty(),
            SectionData::Services(entries) => entries.is_empty(),
        }
    }
}

/// One named, show/hide-able, reorderable block of CV content.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub key: SectionKey,
    pub title: &'static str,
    pub data: SectionData,
    /// Whether the section renders in non-edit contexts. Independent of
    /// position: hiding a section never moves it.
    pub visible: bool,
}
