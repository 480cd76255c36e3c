//! The ordered section list and its two mutation operations.
//!
//! Every operation is copy-on-write: it returns a new list and never mutates
//! in place, so a rendering pass holding the previous value can never observe
//! a half-applied edit. Every documented edge case (key not present, move out
//! of range) is a defined no-op, not an error.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::models::content::CvContent;
use crate::models::profile::Profile;
use crate::models::settings::PortfolioSettings;
use crate::sections::model::{Section, SectionData, SectionKey};

// ────────────────────────────────────────────────────────────────────────────
// Edit actions
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    Up,
    Down,
}

/// A single user edit action over the list. Applied in request order, each
/// one an atomic whole-list transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SectionEdit {
    Toggle { key: SectionKey },
    Move { key: SectionKey, direction: MoveDirection },
}

// ────────────────────────────────────────────────────────────────────────────
// Section list
// ────────────────────────────────────────────────────────────────────────────

/// Ordered, uniquely-keyed list of sections. Order defines render order and
/// is independent of visibility: hidden sections keep their position.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionList {
    sections: Vec<Section>,
}

impl SectionList {
    /// Builds the list for one render session from the three external inputs.
    ///
    /// The seed order is fixed (experiences, competences, hobbies, languages,
    /// summary, contact_info, services) and each section's initial visibility
    /// comes from the matching `show_*` settings flag.
    pub fn seed(profile: &Profile, content: &CvContent, settings: &PortfolioSettings) -> Self {
        let sections = vec![
            Section {
                key: SectionKey::Experiences,
                title: SectionKey::Experiences.title(),
                data: SectionData::Experiences(content.experiences.clone()),
                visible: settings.show_experiences,
            },
            Section {
                key: SectionKey::Competences,
                title: SectionKey::Competences.title(),
                data: SectionData::Competences(content.competences.clone()),
                visible: settings.show_competences,
            },
            Section {
                key: SectionKey::Hobbies,
                title: SectionKey::Hobbies.title(),
                data: SectionData::Hobbies(content.hobbies.clone()),
                visible: settings.show_hobbies,
            },
            Section {
                key: SectionKey::Languages,
                title: SectionKey::Languages.title(),
                data: SectionData::Languages(content.languages.clone()),
                visible: settings.show_languages,
            },
            Section {
                key: SectionKey::Summary,
                title: SectionKey::Summary.title(),
                data: SectionData::Summary(content.summary.clone()),
                visible: settings.show_summary,
            },
            Section {
                key: SectionKey::ContactInfo,
                title: SectionKey::ContactInfo.title(),
                data: SectionData::ContactInfo(profile.contact.clone()),
                visible: settings.show_contact_info,
            },
            Section {
                key: SectionKey::Services,
                title: SectionKey::Services.title(),
                data: SectionData::Services(content.services.clone()),
                visible: settings.show_services,
            },
        ];
        SectionList { sections }
    }

    pub fn get(&self, key: SectionKey) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }

    fn index_of(&self, key: SectionKey) -> Option<usize> {
        self.sections.iter().position(|s| s.key == key)
    }

    /// Flips the `visible` flag of the section with the given key. Silent
    /// no-op when the key is not present in this list; order is unchanged.
    pub fn toggled(&self, key: SectionKey) -> Self {
        let mut next = self.clone();
        if let Some(section) = next.sections.iter_mut().find(|s| s.key == key) {
            section.visible = !section.visible;
        }
        next
    }

    /// Moves the section with the given key by exactly one position. Moving
    /// up from index 0 or down from the last index is a no-op; the displaced
    /// neighbor shifts one position the opposite way and everything else
    /// keeps its relative order.
    pub fn moved(&self, key: SectionKey, direction: MoveDirection) -> Self {
        let Some(index) = self.index_of(key) else {
            return self.clone();
        };
        let target = match direction {
            MoveDirection::Up => {
                if index == 0 {
                    return self.clone();
                }
                index - 1
            }
            MoveDirection::Down => {
                if index + 1 >= self.sections.len() {
                    return self.clone();
                }
                index + 1
            }
        };
        let mut next = self.clone();
        next.sections.swap(index, target);
        next
    }

    /// Dispatches one wire-level edit action.
    pub fn apply(&self, edit: &SectionEdit) -> Self {
        match edit {
            SectionEdit::Toggle { key } => self.toggled(*key),
            SectionEdit::Move { key, direction } => self.moved(*key, *direction),
        }
    }

    /// Order-preserving render sequence, recomputed from current state on
    /// every call. Outside edit mode, hidden sections are excluded entirely;
    /// in edit mode all sections are yielded so the editing surface can show
    /// hidden ones de-emphasized. A content filter, not a permission check.
    pub fn visible_sections(&self, edit_mode: bool) -> impl Iterator<Item = &Section> {
        self.sections
            .iter()
            .filter(move |s| edit_mode || s.visible)
    }

    /// All sections in order, regardless of visibility.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
