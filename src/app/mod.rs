// ABOUTME: Application core: state container plus the async action dispatcher

pub mod events;
pub mod input;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use state::{AppState, AsyncAction};

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::StoreApi;
use crate::config::session::StoredSession;

/// The running application: UI state plus the API the panels save through.
pub struct App {
    pub state: AppState,
    api: Arc<dyn StoreApi>,
}

impl App {
    pub fn new(api: Arc<dyn StoreApi>) -> Self {
        Self {
            state: AppState::new(),
            api,
        }
    }

    /// Execute the queued network action, if any, and feed the outcome back
    /// into the state. The UI thread only suspends here, at the awaits; each
    /// action is a single attempt with no retry.
    pub async fn drain_async_action(&mut self) {
        let Some(action) = self.state.pending_async_action.take() else {
            return;
        };

        let seller_id = self.state.seller_id.clone().unwrap_or_default();

        match action {
            AsyncAction::FetchProfile => {
                let result = self.api.fetch_seller(&seller_id).await;
                self.state.apply_profile(result);
            }
            AsyncAction::SaveTitle { seq, title } => {
                let result = self.api.update_title(&seller_id, &title).await;
                self.state.apply_title_saved(seq, result);
            }
            AsyncAction::SaveTheme { seq, theme } => {
                let result = self.api.update_theme(&seller_id, &theme).await;
                self.state.apply_theme_saved(seq, result);
            }
            AsyncAction::SaveCues { seq, cues } => {
                let result = self.api.update_cues(&seller_id, &cues).await;
                self.state.apply_cues_saved(seq, result);
            }
            AsyncAction::SaveLoaderTexts { seq, texts } => {
                let result = self.api.update_loader_texts(&seller_id, &texts).await;
                self.state.apply_loaders_saved(seq, result);
            }
            AsyncAction::SavePersonalities { seq, personalities } => {
                let result = self.api.update_personalities(&seller_id, &personalities).await;
                self.state.apply_personalities_saved(seq, result);
            }
            AsyncAction::UploadLogo { seq, file } => {
                let result = self.api.upload_logo(&seller_id, &file).await;
                self.state.apply_logo_saved(seq, result);
            }
            AsyncAction::GenerateCues { seq } => {
                let result = self.api.generate_cues(&seller_id).await;
                self.state.apply_cues_generated(seq, result);
            }
            AsyncAction::GenerateLoaderTexts { seq } => {
                let result = self.api.generate_loader_texts(&seller_id).await;
                self.state.apply_loaders_generated(seq, result);
            }
            AsyncAction::SubmitOnboarding { submission } => {
                let result = self.api.submit_onboarding(&submission).await;
                self.state.apply_onboarding_submitted(result);

                // Persist the assigned seller id so the dashboard can pick
                // it up in later sessions.
                if let Some(seller_id) = self.state.seller_id.clone() {
                    match StoredSession::new(seller_id.clone()).save() {
                        Ok(()) => info!(seller = %seller_id, "seller session stored"),
                        Err(err) => warn!("could not store seller session: {err}"),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::MockStoreApi;
    use crate::api::types::SellerRecord;
    use crate::app::state::{AsyncAction, DashboardPhase};

    fn seller_record() -> SellerRecord {
        serde_json::from_value(serde_json::json!({
            "_id": "s1",
            "botTitle": "Shop",
            "theme": "#FF6B00"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn fetch_then_title_save_posts_expected_payload() {
        let mut api = MockStoreApi::new();
        api.expect_fetch_seller()
            .withf(|id| id == "s1")
            .returning(|_| Ok(seller_record()));
        api.expect_update_title()
            .withf(|id, title| id == "s1" && title == "New Shop")
            .times(1)
            .returning(|_, _| Ok(()));

        let mut app = App::new(Arc::new(api));
        app.state.start_dashboard(Some("s1".to_string()));
        app.drain_async_action().await;
        assert_eq!(app.state.dashboard_phase, DashboardPhase::Ready);

        app.state.title_start_edit();
        app.state.title_edit_input(|input| input.set("New Shop"));
        app.state.title_save();
        assert!(matches!(
            app.state.pending_async_action,
            Some(AsyncAction::SaveTitle { .. })
        ));

        app.drain_async_action().await;
        assert!(app.state.title.show_saved());
        assert_eq!(app.state.profile.as_ref().unwrap().name, "New Shop");
    }

    #[tokio::test]
    async fn save_failure_lands_in_panel_error_slot() {
        let mut api = MockStoreApi::new();
        api.expect_fetch_seller().returning(|_| Ok(seller_record()));
        api.expect_update_theme()
            .returning(|_, _| Err(crate::api::ApiError::Application("bad color".to_string())));

        let mut app = App::new(Arc::new(api));
        app.state.start_dashboard(Some("s1".to_string()));
        app.drain_async_action().await;

        app.state.theme_start_edit();
        app.state.theme_edit_input(|input| input.set("#00FF00"));
        app.state.theme_save();
        app.drain_async_action().await;

        assert_eq!(app.state.theme.error_message(), Some("bad color"));
        assert_eq!(app.state.theme.draft(), "#00FF00");
        assert_eq!(app.state.profile.as_ref().unwrap().theme_color, "#FF6B00");
    }
}
