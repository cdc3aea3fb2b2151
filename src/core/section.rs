//! Page sections and their anchor ids.
//!
//! The five section ids are the only navigation surface of the page: they are
//! rendered as `id` attributes on the sections and as nav item labels.

use std::fmt;

use serde::Serialize;

/// One full-width anchored region of the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Home,
    AboutUs,
    Team,
    Features,
    Contact,
}

impl SectionId {
    /// Navigation order, top of the page first.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::AboutUs,
        SectionId::Team,
        SectionId::Features,
        SectionId::Contact,
    ];

    /// The DOM id of the section element.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::AboutUs => "about-us",
            SectionId::Team => "team",
            SectionId::Features => "features",
            SectionId::Contact => "contact",
        }
    }

    /// Display label: hyphens become spaces and every word is capitalized.
    pub fn label(&self) -> String {
        self.anchor()
            .split('-')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_capitalize_each_word() {
        let labels: Vec<String> = SectionId::ALL.iter().map(SectionId::label).collect();
        assert_eq!(labels, vec!["Home", "About Us", "Team", "Features", "Contact"]);
    }

    #[test]
    fn test_anchors_are_unique_and_lowercase() {
        let anchors: std::collections::HashSet<_> = SectionId::ALL.iter().map(SectionId::anchor).collect();
        assert_eq!(anchors.len(), SectionId::ALL.len());
        assert!(anchors.iter().all(|a| a.chars().all(|c| c.is_ascii_lowercase() || c == '-')));
    }

    #[test]
    fn test_display_matches_anchor() {
        assert_eq!(SectionId::AboutUs.to_string(), "about-us");
    }

    #[test]
    fn test_serializes_as_anchor() {
        let json = serde_json::to_string(&SectionId::AboutUs).unwrap();
        assert_eq!(json, "\"about-us\"");
    }
}
