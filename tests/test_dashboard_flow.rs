// ABOUTME: End-to-end dashboard flows against a scripted in-memory API

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use shoptalk::api::types::{OnboardingSubmission, SellerRecord};
use shoptalk::api::{ApiError, StoreApi};
use shoptalk::app::state::DashboardPhase;
use shoptalk::app::App;
use shoptalk::models::{personality_by_key, Cue, Personality};

/// Scripted API double that records every outbound payload.
#[derive(Default)]
struct FakeApi {
    calls: Mutex<Vec<(String, serde_json::Value)>>,
    fail_updates: bool,
}

impl FakeApi {
    fn record(&self, endpoint: &str, payload: serde_json::Value) {
        self.calls.lock().unwrap().push((endpoint.to_string(), payload));
    }

    fn calls(&self) -> Vec<(String, serde_json::Value)> {
        self.calls.lock().unwrap().clone()
    }

    fn ack(&self) -> Result<(), ApiError> {
        if self.fail_updates {
            Err(ApiError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: String::new(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl StoreApi for FakeApi {
    async fn fetch_seller(&self, seller_id: &str) -> Result<SellerRecord, ApiError> {
        self.record("getSellerData", serde_json::json!({ "sellerId": seller_id }));
        Ok(serde_json::from_value(serde_json::json!({
            "_id": "s1",
            "botTitle": "Shop",
            "theme": "#FF6B00",
            "cues": [],
            "loaderTexts": [],
            "personalities": []
        }))
        .unwrap())
    }

    async fn update_title(&self, seller_id: &str, title: &str) -> Result<(), ApiError> {
        self.record(
            "updateBotTitle",
            serde_json::json!({ "sellerId": seller_id, "title": title }),
        );
        self.ack()
    }

    async fn update_theme(&self, seller_id: &str, theme: &str) -> Result<(), ApiError> {
        self.record(
            "updateTheme",
            serde_json::json!({ "sellerId": seller_id, "theme": theme }),
        );
        self.ack()
    }

    async fn update_cues(&self, seller_id: &str, cues: &[Cue]) -> Result<(), ApiError> {
        self.record(
            "updateCues",
            serde_json::json!({ "sellerId": seller_id, "cues": cues }),
        );
        self.ack()
    }

    async fn generate_cues(&self, seller_id: &str) -> Result<Vec<Cue>, ApiError> {
        self.record("generateCues", serde_json::json!({ "sellerId": seller_id }));
        Ok(vec![Cue::new("a", "b")])
    }

    async fn update_loader_texts(&self, seller_id: &str, texts: &[String]) -> Result<(), ApiError> {
        self.record(
            "updateLoaderTexts",
            serde_json::json!({ "sellerId": seller_id, "loaderTexts": texts }),
        );
        self.ack()
    }

    async fn generate_loader_texts(&self, seller_id: &str) -> Result<Vec<String>, ApiError> {
        self.record("generateLoaderTexts", serde_json::json!({ "sellerId": seller_id }));
        Ok(vec!["Warming up the assistant…".to_string()])
    }

    async fn update_personalities(
        &self,
        seller_id: &str,
        personalities: &[Personality],
    ) -> Result<(), ApiError> {
        self.record(
            "updatePersonalities",
            serde_json::json!({ "sellerId": seller_id, "personalities": personalities }),
        );
        self.ack()
    }

    async fn upload_logo(&self, seller_id: &str, file: &Path) -> Result<String, ApiError> {
        self.record(
            "uploadImage",
            serde_json::json!({ "sellerId": seller_id, "file": file.display().to_string() }),
        );
        Ok("https://cdn.example/logo.png".to_string())
    }

    async fn submit_onboarding(
        &self,
        submission: &OnboardingSubmission,
    ) -> Result<String, ApiError> {
        self.record("updateStore", serde_json::to_value(submission).unwrap());
        Ok("seller-9".to_string())
    }
}

async fn ready_app(api: Arc<FakeApi>) -> App {
    let mut app = App::new(api);
    app.state.start_dashboard(Some("s1".to_string()));
    app.drain_async_action().await;
    assert_eq!(app.state.dashboard_phase, DashboardPhase::Ready);
    app
}

#[tokio::test]
async fn scenario_title_edit_save_round_trip() {
    let api = Arc::new(FakeApi::default());
    let mut app = ready_app(Arc::clone(&api)).await;

    assert_eq!(app.state.title.original(), "Shop");

    app.state.title_start_edit();
    app.state.title_edit_input(|input| input.set("New Shop"));
    app.state.title_save();
    app.drain_async_action().await;

    let calls = api.calls();
    let (endpoint, payload) = &calls[1];
    assert_eq!(endpoint, "updateBotTitle");
    assert_eq!(
        payload,
        &serde_json::json!({ "sellerId": "s1", "title": "New Shop" })
    );

    assert_eq!(app.state.title.original(), "New Shop");
    assert!(app.state.title.show_saved());
    assert_eq!(app.state.profile.as_ref().unwrap().name, "New Shop");
}

#[tokio::test]
async fn scenario_promoted_cue_saved_as_full_array() {
    let api = Arc::new(FakeApi::default());
    let mut app = ready_app(Arc::clone(&api)).await;

    app.state.cue_generate();
    app.drain_async_action().await;
    assert_eq!(app.state.cues.suggestions(), [Cue::new("a", "b")]);

    app.state.cue_promote_selected();
    assert!(app.state.cues.suggestions().is_empty());
    assert_eq!(app.state.cues.draft(), [Cue::new("a", "b")]);

    app.state.cue_save();
    app.drain_async_action().await;

    let calls = api.calls();
    let (endpoint, payload) = calls.last().unwrap();
    assert_eq!(endpoint, "updateCues");
    assert_eq!(
        payload,
        &serde_json::json!({
            "sellerId": "s1",
            "cues": [{ "title": "a", "value": "b" }]
        })
    );
    assert!(app.state.cues.show_saved());
}

#[tokio::test]
async fn scenario_failed_update_preserves_draft() {
    let api = Arc::new(FakeApi {
        fail_updates: true,
        ..FakeApi::default()
    });
    let mut app = ready_app(Arc::clone(&api)).await;

    app.state.theme_start_edit();
    app.state.theme_edit_input(|input| input.set("#00AA00"));
    app.state.theme_save();
    app.drain_async_action().await;

    assert_eq!(app.state.theme.draft(), "#00AA00");
    assert_eq!(app.state.profile.as_ref().unwrap().theme_color, "#FF6B00");
    assert_eq!(
        app.state.theme.error_message(),
        Some("Request failed. Please try again.")
    );

    // Each panel's error is scoped to that panel.
    assert!(app.state.title.error_message().is_none());
}

#[tokio::test]
async fn scenario_personality_selection_round_trip() {
    let api = Arc::new(FakeApi::default());
    let mut app = ready_app(Arc::clone(&api)).await;

    app.state.personality_start_edit();
    app.state.personality_cursor = 1; // MUSK
    app.state.personality_toggle();
    app.state.personality_save();
    app.drain_async_action().await;

    let musk = personality_by_key("MUSK").unwrap().to_personality();
    assert_eq!(app.state.personalities.original(), &vec![musk]);

    let calls = api.calls();
    let (endpoint, payload) = calls.last().unwrap();
    assert_eq!(endpoint, "updatePersonalities");
    assert_eq!(payload["personalities"][0]["name"], "MUSK");
    assert_eq!(payload["personalities"][0]["displayName"], "Elon Musk");
}

#[tokio::test]
async fn scenario_loader_texts_generate_and_save() {
    let api = Arc::new(FakeApi::default());
    let mut app = ready_app(Arc::clone(&api)).await;

    app.state.loader_generate();
    app.drain_async_action().await;
    assert_eq!(app.state.loaders.suggestions().len(), 1);

    app.state.loader_promote_selected();
    app.state.loader_save();
    app.drain_async_action().await;

    let calls = api.calls();
    let (endpoint, payload) = calls.last().unwrap();
    assert_eq!(endpoint, "updateLoaderTexts");
    assert_eq!(
        payload["loaderTexts"],
        serde_json::json!(["Warming up the assistant…"])
    );
}
