// ABOUTME: Central application state: active view, dashboard cache, panels, wizard
// State transitions happen here; network calls are queued as AsyncActions and
// executed by the app loop, which feeds results back through the apply_* methods.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{error, info};

use crate::api::types::{OnboardingSubmission, SellerRecord};
use crate::api::ApiError;
use crate::app::input::TextInput;
use crate::components::onboarding::{WizardPhase, WizardState};
use crate::models::{Cue, Personality, StoreProfile, PERSONALITY_CATALOG};
use crate::panels::{validate, FieldEditor, ListEditor, LogoPanel};

/// Which of the two top-level surfaces is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Onboarding,
}

/// Dashboard tabs. Selection is pure UI state with no persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    StoreInfo,
    Theme,
    Content,
    Personalities,
}

impl DashboardTab {
    pub fn all() -> &'static [DashboardTab] {
        &[Self::StoreInfo, Self::Theme, Self::Content, Self::Personalities]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::StoreInfo => "Store Information",
            Self::Theme => "Theme Settings",
            Self::Content => "Content Generation",
            Self::Personalities => "Personalities",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::StoreInfo => Self::Theme,
            Self::Theme => Self::Content,
            Self::Content => Self::Personalities,
            Self::Personalities => Self::StoreInfo,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::StoreInfo => Self::Personalities,
            Self::Theme => Self::StoreInfo,
            Self::Content => Self::Theme,
            Self::Personalities => Self::Content,
        }
    }
}

/// Lifecycle of the one-time profile fetch that seeds the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardPhase {
    /// No seller identifier could be resolved; panels are unavailable.
    NoSeller,
    Loading,
    Ready,
    /// Fetch failed; a retry affordance is offered.
    Failed(String),
}

/// Focused card on the Store Information tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFocus {
    Title,
    Logo,
}

/// Focused sub-panel on the Content Generation tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFocus {
    Cues,
    Loaders,
}

/// Network work queued by a state transition, executed by the app loop.
/// Sequence numbers tie each completion back to the request that issued it
/// so stale responses are dropped instead of applied.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncAction {
    FetchProfile,
    SaveTitle { seq: u64, title: String },
    SaveTheme { seq: u64, theme: String },
    SaveCues { seq: u64, cues: Vec<Cue> },
    SaveLoaderTexts { seq: u64, texts: Vec<String> },
    SavePersonalities { seq: u64, personalities: Vec<Personality> },
    UploadLogo { seq: u64, file: PathBuf },
    GenerateCues { seq: u64 },
    GenerateLoaderTexts { seq: u64 },
    SubmitOnboarding { submission: OnboardingSubmission },
}

/// Top-level mutable state for the whole console.
pub struct AppState {
    pub view: View,
    pub should_quit: bool,
    pub help_visible: bool,

    // Dashboard
    pub seller_id: Option<String>,
    pub dashboard_phase: DashboardPhase,
    pub profile: Option<StoreProfile>,
    pub active_tab: DashboardTab,

    // Panels (one edit-save unit per store field)
    pub title: FieldEditor<String>,
    pub theme: FieldEditor<String>,
    pub logo: LogoPanel,
    pub cues: ListEditor<Cue>,
    pub loaders: ListEditor<String>,
    pub personalities: FieldEditor<Vec<Personality>>,

    // Panel input buffers and cursors
    pub title_input: TextInput,
    pub theme_input: TextInput,
    pub logo_input: TextInput,
    pub logo_inserting: bool,
    pub store_focus: StoreFocus,
    pub content_focus: ContentFocus,
    pub cue_title_input: TextInput,
    pub cue_value_input: TextInput,
    pub cue_focus_value: bool,
    pub cue_inserting: bool,
    pub cue_selected: usize,
    pub cue_suggestion_selected: usize,
    pub cue_editing: Option<usize>,
    pub loader_input: TextInput,
    pub loader_inserting: bool,
    pub loader_selected: usize,
    pub loader_suggestion_selected: usize,
    pub loader_editing: Option<usize>,
    pub personality_cursor: usize,

    // Onboarding
    pub wizard: Option<WizardState>,

    pub pending_async_action: Option<AsyncAction>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            view: View::Dashboard,
            should_quit: false,
            help_visible: false,
            seller_id: None,
            dashboard_phase: DashboardPhase::NoSeller,
            profile: None,
            active_tab: DashboardTab::StoreInfo,
            title: FieldEditor::gated(String::new(), validate::store_name),
            theme: FieldEditor::gated(String::new(), validate::theme_color),
            logo: LogoPanel::new(),
            cues: ListEditor::new(Vec::new(), validate::cue_list, validate::cue, true),
            loaders: ListEditor::new(Vec::new(), validate::loader_list, validate::loader_text, false),
            personalities: FieldEditor::gated(Vec::new(), validate::personality_set),
            title_input: TextInput::new(),
            theme_input: TextInput::new(),
            logo_input: TextInput::new(),
            logo_inserting: false,
            store_focus: StoreFocus::Title,
            content_focus: ContentFocus::Cues,
            cue_title_input: TextInput::new(),
            cue_value_input: TextInput::new(),
            cue_focus_value: false,
            cue_inserting: false,
            cue_selected: 0,
            cue_suggestion_selected: 0,
            cue_editing: None,
            loader_input: TextInput::new(),
            loader_inserting: false,
            loader_selected: 0,
            loader_suggestion_selected: 0,
            loader_editing: None,
            personality_cursor: 0,
            wizard: None,
            pending_async_action: None,
        }
    }

    /// Enter the dashboard for the given seller, scheduling the one-time
    /// profile fetch. Without a seller the dashboard renders its guidance
    /// screen instead.
    pub fn start_dashboard(&mut self, seller_id: Option<String>) {
        self.view = View::Dashboard;
        self.seller_id = seller_id;
        if self.seller_id.is_some() {
            self.dashboard_phase = DashboardPhase::Loading;
            self.pending_async_action = Some(AsyncAction::FetchProfile);
        } else {
            self.dashboard_phase = DashboardPhase::NoSeller;
        }
    }

    /// Enter the onboarding wizard with the storefront launch context.
    pub fn start_onboarding(&mut self, shop: impl Into<String>, access_token: impl Into<String>) {
        self.view = View::Onboarding;
        self.wizard = Some(WizardState::new(shop, access_token));
    }

    /// Schedule a re-fetch after a failed initial load.
    pub fn retry_fetch(&mut self) {
        if matches!(self.dashboard_phase, DashboardPhase::Failed(_)) {
            self.dashboard_phase = DashboardPhase::Loading;
            self.pending_async_action = Some(AsyncAction::FetchProfile);
        }
    }

    /// Periodic housekeeping driven by the UI tick: expires transient
    /// "Saved" indicators.
    pub fn tick(&mut self, now: Instant) {
        self.title.tick(now);
        self.theme.tick(now);
        self.logo.tick(now);
        self.cues.tick(now);
        self.loaders.tick(now);
        self.personalities.tick(now);
    }

    // ---- fetch ----

    /// Seed every panel from the fetched record. The record becomes the
    /// single source of truth the panels diff against.
    pub fn apply_profile(&mut self, result: Result<SellerRecord, ApiError>) {
        match result {
            Ok(record) => {
                let profile = StoreProfile::from(record);
                info!(seller = %profile.id, "store profile loaded");
                self.title.seed(profile.name.clone());
                self.theme.seed(profile.theme_color.clone());
                self.logo.seed(profile.logo_url.clone());
                self.cues.seed(profile.cues.clone());
                self.loaders.seed(profile.loader_texts.clone());
                self.personalities.seed(profile.personalities.clone());
                self.profile = Some(profile);
                self.dashboard_phase = DashboardPhase::Ready;
            }
            Err(err) => {
                error!("failed to fetch store profile: {err}");
                self.dashboard_phase = DashboardPhase::Failed(err.panel_message());
            }
        }
    }

    // ---- title panel ----

    pub fn title_start_edit(&mut self) {
        self.title.start_edit();
        self.title_input.set(self.title.draft().clone());
    }

    pub fn title_edit_input(&mut self, edit: impl FnOnce(&mut TextInput)) {
        if !self.title.is_editing() {
            return;
        }
        edit(&mut self.title_input);
        let value = self.title_input.value().to_string();
        self.title.mutate(|draft| *draft = value);
    }

    pub fn title_cancel(&mut self) {
        self.title.cancel();
        self.title_input.set(self.title.draft().clone());
    }

    pub fn title_save(&mut self) {
        if let Some(seq) = self.title.begin_save() {
            self.pending_async_action = Some(AsyncAction::SaveTitle {
                seq,
                title: self.title.draft().clone(),
            });
        }
    }

    pub fn apply_title_saved(&mut self, seq: u64, result: Result<(), ApiError>) {
        let outcome = result.map_err(|e| e.panel_message());
        if self.title.complete_save(seq, outcome, Instant::now()) && !self.title.is_dirty() {
            if let Some(profile) = &mut self.profile {
                profile.name = self.title.original().clone();
            }
        }
    }

    // ---- theme panel ----

    pub fn theme_start_edit(&mut self) {
        self.theme.start_edit();
        self.theme_input.set(self.theme.draft().clone());
    }

    pub fn theme_edit_input(&mut self, edit: impl FnOnce(&mut TextInput)) {
        if !self.theme.is_editing() {
            return;
        }
        edit(&mut self.theme_input);
        let value = self.theme_input.value().to_string();
        self.theme.mutate(|draft| *draft = value);
    }

    pub fn theme_cancel(&mut self) {
        self.theme.cancel();
        self.theme_input.set(self.theme.draft().clone());
    }

    pub fn theme_save(&mut self) {
        if let Some(seq) = self.theme.begin_save() {
            self.pending_async_action = Some(AsyncAction::SaveTheme {
                seq,
                theme: self.theme.draft().clone(),
            });
        }
    }

    pub fn apply_theme_saved(&mut self, seq: u64, result: Result<(), ApiError>) {
        let outcome = result.map_err(|e| e.panel_message());
        if self.theme.complete_save(seq, outcome, Instant::now()) && !self.theme.is_dirty() {
            if let Some(profile) = &mut self.profile {
                profile.theme_color = self.theme.original().clone();
            }
        }
    }

    // ---- logo panel ----

    pub fn logo_edit_input(&mut self, edit: impl FnOnce(&mut TextInput)) {
        if self.logo.is_saving() {
            return;
        }
        edit(&mut self.logo_input);
    }

    /// Open the file-path entry row.
    pub fn logo_start_entry(&mut self) {
        if !self.logo.is_saving() {
            self.logo_inserting = true;
        }
    }

    pub fn logo_cancel_entry(&mut self) {
        self.logo_inserting = false;
        self.logo_input.clear();
    }

    /// Validate and stage the file path currently in the input buffer. The
    /// buffer is cleared on success so the panel returns to command mode.
    pub fn logo_stage(&mut self) {
        let path = self.logo_input.value().trim().to_string();
        if path.is_empty() {
            return;
        }
        if self.logo.stage(PathBuf::from(path)) {
            self.logo_inserting = false;
            self.logo_input.clear();
        }
    }

    pub fn logo_clear(&mut self) {
        self.logo.clear_staged();
        self.logo_input.clear();
    }

    pub fn logo_save(&mut self) {
        if let Some((seq, file)) = self.logo.begin_save() {
            self.pending_async_action = Some(AsyncAction::UploadLogo { seq, file });
        }
    }

    pub fn apply_logo_saved(&mut self, seq: u64, result: Result<String, ApiError>) {
        let outcome = result.map_err(|e| e.panel_message());
        if self.logo.complete_save(seq, outcome, Instant::now()) {
            if let Some(url) = self.logo.current_url() {
                if let Some(profile) = &mut self.profile {
                    profile.logo_url = Some(url.to_string());
                }
                self.logo_input.clear();
            }
        }
    }

    // ---- cue panel ----

    /// Open the entry row for a new cue.
    pub fn cue_start_entry(&mut self) {
        self.cue_inserting = true;
        self.cue_focus_value = false;
    }

    /// Commit the add/edit row: an in-place edit when one is active, a new
    /// cue otherwise. Duplicate (title, value) pairs are not re-added.
    pub fn cue_commit_entry(&mut self) {
        let cue = Cue::new(
            self.cue_title_input.value().trim(),
            self.cue_value_input.value().trim(),
        );
        let committed = match self.cue_editing {
            Some(index) => self.cues.edit_at(index, cue),
            None => self.cues.add(cue),
        };
        if committed.is_ok() {
            self.cue_editing = None;
            self.cue_inserting = false;
            self.cue_title_input.clear();
            self.cue_value_input.clear();
            self.cue_focus_value = false;
        }
    }

    /// Load the selected cue into the entry row for editing.
    pub fn cue_edit_selected(&mut self) {
        if let Some(cue) = self.cues.draft().get(self.cue_selected) {
            self.cue_title_input.set(cue.title.clone());
            self.cue_value_input.set(cue.value.clone());
            self.cue_editing = Some(self.cue_selected);
            self.cue_inserting = true;
            self.cue_focus_value = false;
        }
    }

    pub fn cue_cancel_entry(&mut self) {
        self.cue_editing = None;
        self.cue_inserting = false;
        self.cue_title_input.clear();
        self.cue_value_input.clear();
        self.cue_focus_value = false;
    }

    pub fn cue_delete_selected(&mut self) {
        self.cues.remove_at(self.cue_selected);
        self.cue_selected = self.cue_selected.min(self.cues.draft().len().saturating_sub(1));
    }

    pub fn cue_promote_selected(&mut self) {
        self.cues.promote(self.cue_suggestion_selected);
        self.cue_suggestion_selected = self
            .cue_suggestion_selected
            .min(self.cues.suggestions().len().saturating_sub(1));
    }

    pub fn cue_generate(&mut self) {
        if let Some(seq) = self.cues.begin_generate() {
            self.pending_async_action = Some(AsyncAction::GenerateCues { seq });
        }
    }

    pub fn cue_save(&mut self) {
        if let Some(seq) = self.cues.begin_save() {
            self.pending_async_action = Some(AsyncAction::SaveCues {
                seq,
                cues: self.cues.draft().to_vec(),
            });
        }
    }

    pub fn apply_cues_generated(&mut self, seq: u64, result: Result<Vec<Cue>, ApiError>) {
        let outcome = result.map_err(|e| e.panel_message());
        if self.cues.complete_generate(seq, outcome) {
            self.cue_suggestion_selected = 0;
        }
    }

    pub fn apply_cues_saved(&mut self, seq: u64, result: Result<(), ApiError>) {
        let outcome = result.map_err(|e| e.panel_message());
        if self.cues.complete_save(seq, outcome, Instant::now()) && !self.cues.is_dirty() {
            if let Some(profile) = &mut self.profile {
                profile.cues = self.cues.original().to_vec();
            }
        }
    }

    // ---- loader text panel ----

    /// Open the entry row for a new loader text.
    pub fn loader_start_entry(&mut self) {
        self.loader_inserting = true;
    }

    pub fn loader_cancel_entry(&mut self) {
        self.loader_editing = None;
        self.loader_inserting = false;
        self.loader_input.clear();
    }

    pub fn loader_commit_entry(&mut self) {
        let text = self.loader_input.value().trim().to_string();
        let committed = match self.loader_editing {
            Some(index) => self.loaders.edit_at(index, text),
            None => self.loaders.add(text),
        };
        if committed.is_ok() {
            self.loader_editing = None;
            self.loader_inserting = false;
            self.loader_input.clear();
        }
    }

    pub fn loader_edit_selected(&mut self) {
        if let Some(text) = self.loaders.draft().get(self.loader_selected) {
            self.loader_input.set(text.clone());
            self.loader_editing = Some(self.loader_selected);
            self.loader_inserting = true;
        }
    }

    pub fn loader_delete_selected(&mut self) {
        self.loaders.remove_at(self.loader_selected);
        self.loader_selected = self
            .loader_selected
            .min(self.loaders.draft().len().saturating_sub(1));
    }

    pub fn loader_promote_selected(&mut self) {
        self.loaders.promote(self.loader_suggestion_selected);
        self.loader_suggestion_selected = self
            .loader_suggestion_selected
            .min(self.loaders.suggestions().len().saturating_sub(1));
    }

    pub fn loader_generate(&mut self) {
        if let Some(seq) = self.loaders.begin_generate() {
            self.pending_async_action = Some(AsyncAction::GenerateLoaderTexts { seq });
        }
    }

    pub fn loader_save(&mut self) {
        if let Some(seq) = self.loaders.begin_save() {
            self.pending_async_action = Some(AsyncAction::SaveLoaderTexts {
                seq,
                texts: self.loaders.draft().to_vec(),
            });
        }
    }

    pub fn apply_loaders_generated(&mut self, seq: u64, result: Result<Vec<String>, ApiError>) {
        let outcome = result.map_err(|e| e.panel_message());
        if self.loaders.complete_generate(seq, outcome) {
            self.loader_suggestion_selected = 0;
        }
    }

    pub fn apply_loaders_saved(&mut self, seq: u64, result: Result<(), ApiError>) {
        let outcome = result.map_err(|e| e.panel_message());
        if self.loaders.complete_save(seq, outcome, Instant::now()) && !self.loaders.is_dirty() {
            if let Some(profile) = &mut self.profile {
                profile.loader_texts = self.loaders.original().to_vec();
            }
        }
    }

    // ---- personality panel ----

    pub fn personality_start_edit(&mut self) {
        self.personalities.start_edit();
    }

    pub fn personality_cancel(&mut self) {
        self.personalities.cancel();
    }

    pub fn personality_move_cursor(&mut self, delta: isize) {
        let last = PERSONALITY_CATALOG.len().saturating_sub(1);
        self.personality_cursor = if delta.is_negative() {
            self.personality_cursor.saturating_sub(delta.unsigned_abs())
        } else {
            (self.personality_cursor + delta.unsigned_abs()).min(last)
        };
    }

    /// Toggle the catalog entry under the cursor: remove it if selected,
    /// otherwise add it — unless three are already selected, in which case
    /// the draft stays unchanged and the limit error is surfaced.
    pub fn personality_toggle(&mut self) {
        if !self.personalities.is_editing() {
            return;
        }
        let Some(entry) = PERSONALITY_CATALOG.get(self.personality_cursor) else {
            return;
        };
        let selected = self.personalities.draft().iter().any(|p| p.name == entry.key);
        if selected {
            let key = entry.key;
            self.personalities.mutate(|draft| draft.retain(|p| p.name != key));
        } else if self.personalities.draft().len() >= validate::MAX_PERSONALITIES {
            self.personalities.set_error(format!(
                "Maximum of {} personalities allowed",
                validate::MAX_PERSONALITIES
            ));
        } else {
            let personality = entry.to_personality();
            self.personalities.mutate(|draft| draft.push(personality));
        }
    }

    pub fn personality_save(&mut self) {
        if let Some(seq) = self.personalities.begin_save() {
            self.pending_async_action = Some(AsyncAction::SavePersonalities {
                seq,
                personalities: self.personalities.draft().clone(),
            });
        }
    }

    pub fn apply_personalities_saved(&mut self, seq: u64, result: Result<(), ApiError>) {
        let outcome = result.map_err(|e| e.panel_message());
        if self.personalities.complete_save(seq, outcome, Instant::now())
            && !self.personalities.is_dirty()
        {
            if let Some(profile) = &mut self.profile {
                profile.personalities = self.personalities.original().clone();
            }
        }
    }

    // ---- onboarding ----

    pub fn wizard_submit(&mut self) {
        if let Some(submission) = self.wizard.as_mut().and_then(WizardState::begin_submit) {
            self.pending_async_action = Some(AsyncAction::SubmitOnboarding { submission });
        }
    }

    /// Apply the submit outcome. On success the returned seller id becomes
    /// the dashboard key for this session.
    pub fn apply_onboarding_submitted(&mut self, result: Result<String, ApiError>) {
        let outcome = result.map_err(|e| match e {
            ApiError::Application(msg) => msg,
            _ => "Submission failed. Please try again.".to_string(),
        });
        if let Some(wizard) = &mut self.wizard {
            if wizard.complete_submit(outcome) {
                if let Some(seller_id) = wizard.seller_id.clone() {
                    self.seller_id = Some(seller_id);
                }
            }
        }
    }

    /// From the wizard's terminal success screen, switch into the dashboard
    /// keyed by the freshly assigned seller id.
    pub fn wizard_open_dashboard(&mut self) {
        let completed = self
            .wizard
            .as_ref()
            .is_some_and(|w| w.phase == WizardPhase::Completed);
        if completed {
            let seller_id = self.seller_id.clone();
            self.wizard = None;
            self.start_dashboard(seller_id);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record() -> SellerRecord {
        serde_json::from_value(serde_json::json!({
            "_id": "s1",
            "botTitle": "Shop",
            "theme": "#FF6B00",
            "cues": [],
            "loaderTexts": [],
            "personalities": []
        }))
        .unwrap()
    }

    fn ready_state() -> AppState {
        let mut state = AppState::new();
        state.start_dashboard(Some("s1".to_string()));
        assert_eq!(state.pending_async_action, Some(AsyncAction::FetchProfile));
        state.pending_async_action = None;
        state.apply_profile(Ok(record()));
        state
    }

    #[test]
    fn fetch_seeds_panels() {
        let state = ready_state();
        assert_eq!(state.dashboard_phase, DashboardPhase::Ready);
        assert_eq!(state.title.original(), "Shop");
        assert_eq!(state.theme.original(), "#FF6B00");
    }

    #[test]
    fn fetch_failure_offers_retry() {
        let mut state = AppState::new();
        state.start_dashboard(Some("s1".to_string()));
        state.pending_async_action = None;
        state.apply_profile(Err(ApiError::Application("seller not found".to_string())));
        assert!(matches!(state.dashboard_phase, DashboardPhase::Failed(_)));

        state.retry_fetch();
        assert_eq!(state.dashboard_phase, DashboardPhase::Loading);
        assert_eq!(state.pending_async_action, Some(AsyncAction::FetchProfile));
    }

    #[test]
    fn title_save_round_trip_updates_cache() {
        let mut state = ready_state();
        state.title_start_edit();
        state.title_edit_input(|input| input.set("New Shop"));
        state.title_save();

        let Some(AsyncAction::SaveTitle { seq, title }) = state.pending_async_action.take() else {
            panic!("expected queued title save");
        };
        assert_eq!(title, "New Shop");
        assert!(state.title.is_saving());

        state.apply_title_saved(seq, Ok(()));
        assert!(state.title.show_saved());
        assert_eq!(state.profile.as_ref().unwrap().name, "New Shop");
    }

    #[test]
    fn unchanged_title_does_not_queue_a_save() {
        let mut state = ready_state();
        state.title_start_edit();
        state.title_save();
        assert_eq!(state.pending_async_action, None);
    }

    #[test]
    fn failed_save_keeps_draft_and_cache() {
        let mut state = ready_state();
        state.title_start_edit();
        state.title_edit_input(|input| input.set("New Shop"));
        state.title_save();
        let Some(AsyncAction::SaveTitle { seq, .. }) = state.pending_async_action.take() else {
            panic!("expected queued title save");
        };

        state.apply_title_saved(
            seq,
            Err(ApiError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: String::new(),
            }),
        );
        assert_eq!(state.title.draft(), "New Shop");
        assert_eq!(state.profile.as_ref().unwrap().name, "Shop");
        assert!(state.title.error_message().is_some());
    }

    #[test]
    fn fourth_personality_rejected_with_error() {
        let mut state = ready_state();
        state.personality_start_edit();
        for i in 0..3 {
            state.personality_cursor = i;
            state.personality_toggle();
        }
        assert_eq!(state.personalities.draft().len(), 3);

        state.personality_cursor = 3;
        state.personality_toggle();
        assert_eq!(state.personalities.draft().len(), 3);
        assert_eq!(
            state.personalities.error_message(),
            Some("Maximum of 3 personalities allowed")
        );

        // Removing one then re-adding succeeds.
        state.personality_cursor = 0;
        state.personality_toggle();
        assert_eq!(state.personalities.draft().len(), 2);
        state.personality_cursor = 3;
        state.personality_toggle();
        assert_eq!(state.personalities.draft().len(), 3);
    }

    #[test]
    fn promoted_cue_is_saved_as_full_array() {
        let mut state = ready_state();
        state.cue_generate();
        let Some(AsyncAction::GenerateCues { seq }) = state.pending_async_action.take() else {
            panic!("expected queued generation");
        };
        state.apply_cues_generated(seq, Ok(vec![Cue::new("a", "b")]));
        assert_eq!(state.cues.suggestions().len(), 1);

        state.cue_promote_selected();
        assert!(state.cues.suggestions().is_empty());
        assert_eq!(state.cues.draft(), [Cue::new("a", "b")]);

        state.cue_save();
        let Some(AsyncAction::SaveCues { cues, .. }) = state.pending_async_action.take() else {
            panic!("expected queued cue save");
        };
        assert_eq!(cues, vec![Cue::new("a", "b")]);
    }

    #[test]
    fn onboarding_success_switches_to_dashboard() {
        let mut state = AppState::new();
        state.start_onboarding("example.myshop.com", "tok");
        {
            let wizard = state.wizard.as_mut().unwrap();
            wizard.form.email.set("a@b.co");
            wizard.form.first_name.set("A");
            wizard.form.last_name.set("B");
            wizard.form.company_name.set("Co");
            wizard.form.monthly_visitors = "Below 10,000".to_string();
            wizard.form.primary_goal = "Increase sales".to_string();
            wizard.form.product_types.insert("books".to_string());
            wizard.step = crate::components::onboarding::WizardStep::ProductTypes;
        }

        state.wizard_submit();
        assert!(matches!(
            state.pending_async_action,
            Some(AsyncAction::SubmitOnboarding { .. })
        ));
        state.pending_async_action = None;

        state.apply_onboarding_submitted(Ok("seller-9".to_string()));
        assert_eq!(state.seller_id.as_deref(), Some("seller-9"));

        state.wizard_open_dashboard();
        assert_eq!(state.view, View::Dashboard);
        assert!(state.wizard.is_none());
        assert_eq!(state.pending_async_action, Some(AsyncAction::FetchProfile));
    }
}
