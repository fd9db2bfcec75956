// ABOUTME: Store profile record and its field types as held by the dashboard cache

use serde::{Deserialize, Serialize};

/// A suggested customer query shown in the chat widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cue {
    pub title: String,
    pub value: String,
}

impl Cue {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// An assistant persona selected from the fixed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personality {
    /// Catalog key, e.g. "MUSK".
    pub name: String,
    pub display_name: String,
    /// Avatar image reference served alongside the chat widget.
    pub image: String,
}

/// The server-owned store record, fetched once per dashboard session and
/// mutated field-by-field through dedicated endpoints.
///
/// `id` is assigned server-side at onboarding completion and never changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreProfile {
    pub id: String,
    /// Display title, non-empty and at most 50 characters.
    pub name: String,
    /// Produced by the separate upload endpoint; the profile-update path
    /// never carries image bytes.
    pub logo_url: Option<String>,
    /// `#`-prefixed 3- or 6-digit hex color.
    pub theme_color: String,
    pub cues: Vec<Cue>,
    pub loader_texts: Vec<String>,
    /// 0–3 entries drawn from the personality catalog.
    pub personalities: Vec<Personality>,
    /// Contact address captured during onboarding, shown in the seller strip.
    pub email: Option<String>,
    pub has_completed_onboarding: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_equality_is_structural() {
        let a = Cue::new("gift cards", "Do you have any gift cards available?");
        let b = Cue::new("gift cards", "Do you have any gift cards available?");
        assert_eq!(a, b);
    }

    #[test]
    fn personality_serializes_camel_case() {
        let p = Personality {
            name: "MUSK".to_string(),
            display_name: "Elon Musk".to_string(),
            image: "avatars/musk.webp".to_string(),
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["displayName"], "Elon Musk");
        assert!(json.get("display_name").is_none());
    }
}
