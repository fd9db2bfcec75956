// ABOUTME: Wire-format types for the storefront aggregator API
// Response envelopes vary per endpoint; `Envelope` and its helpers fold them
// all into `Result<T, ApiError>` at this boundary.

use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::models::{Cue, Personality, StoreProfile};

/// `error` flag as the aggregator emits it: `false` on success, `true` or a
/// message string on failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorFlag {
    Flag(bool),
    Message(String),
}

impl ErrorFlag {
    /// The failure message, if this flag signals failure.
    fn failure(&self) -> Option<String> {
        match self {
            Self::Flag(false) => None,
            Self::Flag(true) => Some("Unknown error".to_string()),
            Self::Message(msg) => Some(msg.clone()),
        }
    }
}

/// The `{error, result}` envelope most endpoints use. The suggestion
/// endpoints nest a second envelope inside `result`, which composes here as
/// `Envelope<Envelope<T>>`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub error: Option<ErrorFlag>,
    pub result: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, converting a set error flag or a missing
    /// `result` into the appropriate `ApiError`.
    pub fn into_result(self) -> Result<T, ApiError> {
        if let Some(msg) = self.error.as_ref().and_then(ErrorFlag::failure) {
            return Err(ApiError::Application(msg));
        }
        self.result
            .ok_or_else(|| ApiError::Shape("missing result".to_string()))
    }

    /// Acknowledge-only endpoints: check the flag, discard any payload.
    pub fn into_ack(self) -> Result<(), ApiError> {
        match self.error.as_ref().and_then(ErrorFlag::failure) {
            Some(msg) => Err(ApiError::Application(msg)),
            None => Ok(()),
        }
    }
}

/// The `{success, error}` envelope the cue-update endpoint uses instead of
/// `{error:false}`. Treated as drift and normalized here.
#[derive(Debug, Clone, Deserialize)]
pub struct SuccessEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<ErrorFlag>,
}

impl SuccessEnvelope {
    pub fn into_ack(self) -> Result<(), ApiError> {
        if self.success {
            return Ok(());
        }
        let msg = self
            .error
            .as_ref()
            .and_then(ErrorFlag::failure)
            .unwrap_or_else(|| "Unknown error".to_string());
        Err(ApiError::Application(msg))
    }
}

/// Response of the multipart logo upload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub error: Option<ErrorFlag>,
}

impl UploadReceipt {
    pub fn into_result(self) -> Result<String, ApiError> {
        if !self.success {
            let msg = self
                .error
                .as_ref()
                .and_then(ErrorFlag::failure)
                .unwrap_or_else(|| "Upload failed".to_string());
            return Err(ApiError::Application(msg));
        }
        self.file_url
            .ok_or_else(|| ApiError::Shape("missing fileUrl".to_string()))
    }
}

/// Store record as returned by `getSellerData`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub bot_title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub cues: Vec<Cue>,
    #[serde(default)]
    pub loader_texts: Vec<String>,
    #[serde(default)]
    pub personalities: Vec<Personality>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub has_completed_onboarding: bool,
}

impl From<SellerRecord> for StoreProfile {
    fn from(record: SellerRecord) -> Self {
        Self {
            id: record.id,
            name: record.bot_title.unwrap_or_default(),
            logo_url: record.image,
            theme_color: record.theme.unwrap_or_default(),
            cues: record.cues,
            loader_texts: record.loader_texts,
            personalities: record.personalities,
            email: record.email,
            has_completed_onboarding: record.has_completed_onboarding,
        }
    }
}

/// Aggregate payload submitted exactly once at the end of the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingSubmission {
    pub access_token: String,
    pub store_url: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub monthly_visitors: String,
    pub primary_goal: String,
    pub product_types: Vec<String>,
}

/// Payload of a successful onboarding submit.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingReceipt {
    pub seller_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn envelope_success_unwraps_result() {
        let env: Envelope<OnboardingReceipt> =
            serde_json::from_str(r#"{"error":false,"result":{"sellerId":"s1"}}"#).unwrap();
        assert_eq!(env.into_result().unwrap().seller_id, "s1");
    }

    #[test]
    fn envelope_error_flag_true() {
        let env: Envelope<OnboardingReceipt> = serde_json::from_str(r#"{"error":true}"#).unwrap();
        match env.into_result() {
            Err(ApiError::Application(msg)) => assert_eq!(msg, "Unknown error"),
            other => panic!("expected application error, got {other:?}"),
        }
    }

    #[test]
    fn envelope_error_message_passes_through() {
        let env: Envelope<SellerRecord> =
            serde_json::from_str(r#"{"error":"seller not found"}"#).unwrap();
        match env.into_result() {
            Err(ApiError::Application(msg)) => assert_eq!(msg, "seller not found"),
            other => panic!("expected application error, got {other:?}"),
        }
    }

    #[test]
    fn nested_suggestion_envelope_composes() {
        let raw = r#"{"error":false,"result":{"error":false,"result":[{"title":"a","value":"b"}]}}"#;
        let env: Envelope<Envelope<Vec<Cue>>> = serde_json::from_str(raw).unwrap();
        let cues = env.into_result().unwrap().into_result().unwrap();
        assert_eq!(cues, vec![Cue::new("a", "b")]);
    }

    #[test]
    fn bare_nested_envelope_without_outer_flag() {
        // generateCues omits the outer error flag entirely
        let raw = r#"{"result":{"result":[{"title":"a","value":"b"}]}}"#;
        let env: Envelope<Envelope<Vec<Cue>>> = serde_json::from_str(raw).unwrap();
        let cues = env.into_result().unwrap().into_result().unwrap();
        assert_eq!(cues.len(), 1);
    }

    #[test]
    fn success_envelope_drift_normalizes() {
        let ok: SuccessEnvelope = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(ok.into_ack().is_ok());

        let failed: SuccessEnvelope =
            serde_json::from_str(r#"{"success":false,"error":"cue limit"}"#).unwrap();
        match failed.into_ack() {
            Err(ApiError::Application(msg)) => assert_eq!(msg, "cue limit"),
            other => panic!("expected application error, got {other:?}"),
        }
    }

    #[test]
    fn seller_record_maps_to_profile() {
        let raw = r##"{
            "_id": "s1",
            "botTitle": "Shop",
            "theme": "#FF6B00",
            "cues": [],
            "loaderTexts": ["Thinking..."],
            "personalities": [{"name":"MUSK","displayName":"Elon Musk","image":"avatars/musk.webp"}]
        }"##;
        let record: SellerRecord = serde_json::from_str(raw).unwrap();
        let profile = StoreProfile::from(record);
        assert_eq!(profile.id, "s1");
        assert_eq!(profile.name, "Shop");
        assert_eq!(profile.theme_color, "#FF6B00");
        assert_eq!(profile.loader_texts, vec!["Thinking...".to_string()]);
        assert_eq!(profile.personalities[0].name, "MUSK");
        assert!(profile.logo_url.is_none());
    }

    #[test]
    fn submission_serializes_camel_case() {
        let submission = OnboardingSubmission {
            access_token: "tok".to_string(),
            store_url: "example.myshop.com".to_string(),
            email: "a@b.co".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            company_name: "Analytical".to_string(),
            monthly_visitors: "Below 10,000".to_string(),
            primary_goal: "Increase sales".to_string(),
            product_types: vec!["books".to_string()],
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["accessToken"], "tok");
        assert_eq!(json["storeUrl"], "example.myshop.com");
        assert_eq!(json["productTypes"][0], "books");
    }
}
