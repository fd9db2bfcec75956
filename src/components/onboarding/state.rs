// ABOUTME: State management for the onboarding wizard
// Tracks current step, collected form values, per-step completeness, and submit outcome.

use std::collections::HashSet;

use crate::api::types::OnboardingSubmission;
use crate::app::input::TextInput;
use crate::models::{all_product_categories, PRIMARY_GOALS, VISITOR_BUCKETS};

/// Steps of the wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Personal,
    Company,
    Goal,
    ProductTypes,
}

impl WizardStep {
    /// Get all steps in order.
    pub fn all() -> &'static [WizardStep] {
        &[Self::Personal, Self::Company, Self::Goal, Self::ProductTypes]
    }

    /// Step number, 1-indexed for display.
    pub fn number(&self) -> usize {
        match self {
            Self::Personal => 1,
            Self::Company => 2,
            Self::Goal => 3,
            Self::ProductTypes => 4,
        }
    }

    pub fn total() -> usize {
        4
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Company => "Company Information",
            Self::Goal => "Primary Goal",
            Self::ProductTypes => "Product Types",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Personal => "Tell us about yourself so we can personalize your experience.",
            Self::Company => "Let's gather some information about your business.",
            Self::Goal => "Help us understand what you're trying to achieve.",
            Self::ProductTypes => "Select the product categories you offer in your store.",
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Company),
            Self::Company => Some(Self::Goal),
            Self::Goal => Some(Self::ProductTypes),
            Self::ProductTypes => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Personal => None,
            Self::Company => Some(Self::Personal),
            Self::Goal => Some(Self::Company),
            Self::ProductTypes => Some(Self::Goal),
        }
    }
}

/// Collected form values across the four steps.
#[derive(Debug, Clone, Default)]
pub struct OnboardingForm {
    pub email: TextInput,
    pub first_name: TextInput,
    pub last_name: TextInput,
    pub company_name: TextInput,
    /// Selected bucket label from [`VISITOR_BUCKETS`], empty if unselected.
    pub monthly_visitors: String,
    /// Selected goal from [`PRIMARY_GOALS`], empty if unselected.
    pub primary_goal: String,
    /// Selected category keys.
    pub product_types: HashSet<String>,
}

impl OnboardingForm {
    /// The Next/submit gate for one step.
    pub fn step_complete(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Personal => {
                !self.email.is_empty() && !self.first_name.is_empty() && !self.last_name.is_empty()
            }
            WizardStep::Company => {
                !self.company_name.is_empty() && !self.monthly_visitors.is_empty()
            }
            WizardStep::Goal => !self.primary_goal.is_empty(),
            WizardStep::ProductTypes => !self.product_types.is_empty(),
        }
    }

    /// Selected category keys flattened in catalog order.
    pub fn selected_product_types(&self) -> Vec<String> {
        all_product_categories()
            .filter(|c| self.product_types.contains(c.key))
            .map(|c| c.key.to_string())
            .collect()
    }

    /// Build the single aggregate payload for the submit endpoint.
    pub fn to_submission(&self, shop: &str, access_token: &str) -> OnboardingSubmission {
        OnboardingSubmission {
            access_token: access_token.to_string(),
            store_url: shop.to_string(),
            email: self.email.value().to_string(),
            first_name: self.first_name.value().to_string(),
            last_name: self.last_name.value().to_string(),
            company_name: self.company_name.value().to_string(),
            monthly_visitors: self.monthly_visitors.clone(),
            primary_goal: self.primary_goal.clone(),
            product_types: self.selected_product_types(),
        }
    }
}

/// Wizard lifecycle after the last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    /// Collecting form values.
    Form,
    /// The single submit round trip is in flight.
    Submitting,
    /// Terminal success screen; there is no path back to editing.
    Completed,
}

/// Full onboarding wizard state.
#[derive(Debug, Clone)]
pub struct WizardState {
    pub step: WizardStep,
    pub phase: WizardPhase,
    pub form: OnboardingForm,
    /// Storefront context carried through from the launch link, opaque here.
    pub shop: String,
    pub access_token: String,
    /// Focused field within the current step (text fields).
    pub focus: usize,
    /// Cursor within the visitor-bucket list.
    pub bucket_cursor: usize,
    /// Cursor within the goal list.
    pub goal_cursor: usize,
    /// Cursor within the flattened category grid.
    pub category_cursor: usize,
    /// Blocking banner shown after a failed submit.
    pub error_banner: Option<String>,
    /// Identifier returned by a successful submit.
    pub seller_id: Option<String>,
}

impl WizardState {
    pub fn new(shop: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            step: WizardStep::Personal,
            phase: WizardPhase::Form,
            form: OnboardingForm::default(),
            shop: shop.into(),
            access_token: access_token.into(),
            focus: 0,
            bucket_cursor: 0,
            goal_cursor: 0,
            category_cursor: 0,
            error_banner: None,
            seller_id: None,
        }
    }

    /// Number of focusable text fields on the current step.
    fn field_count(&self) -> usize {
        match self.step {
            WizardStep::Personal => 3,
            WizardStep::Company => 1,
            WizardStep::Goal | WizardStep::ProductTypes => 0,
        }
    }

    /// The text field currently focused, if the step has one.
    pub fn focused_field_mut(&mut self) -> Option<&mut TextInput> {
        match (self.step, self.focus) {
            (WizardStep::Personal, 0) => Some(&mut self.form.email),
            (WizardStep::Personal, 1) => Some(&mut self.form.first_name),
            (WizardStep::Personal, 2) => Some(&mut self.form.last_name),
            (WizardStep::Company, 0) => Some(&mut self.form.company_name),
            _ => None,
        }
    }

    pub fn focus_next_field(&mut self) {
        let count = self.field_count();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn can_advance(&self) -> bool {
        self.phase == WizardPhase::Form && self.form.step_complete(self.step)
    }

    /// Move to the next step if the current one is complete. No forward
    /// skipping; the final step submits instead.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        if let Some(next) = self.step.next() {
            self.step = next;
            self.focus = 0;
            return true;
        }
        false
    }

    /// Back is legal from any step after the first; form values survive.
    pub fn go_back(&mut self) -> bool {
        if self.phase != WizardPhase::Form {
            return false;
        }
        if let Some(prev) = self.step.previous() {
            self.step = prev;
            self.focus = 0;
            return true;
        }
        false
    }

    pub fn can_go_back(&self) -> bool {
        self.phase == WizardPhase::Form && self.step.previous().is_some()
    }

    pub fn is_final_step(&self) -> bool {
        self.step.next().is_none()
    }

    pub fn move_bucket_cursor(&mut self, delta: isize) {
        self.bucket_cursor = step_cursor(self.bucket_cursor, delta, VISITOR_BUCKETS.len());
    }

    pub fn select_bucket(&mut self) {
        if let Some(bucket) = VISITOR_BUCKETS.get(self.bucket_cursor) {
            self.form.monthly_visitors = (*bucket).to_string();
        }
    }

    pub fn move_goal_cursor(&mut self, delta: isize) {
        self.goal_cursor = step_cursor(self.goal_cursor, delta, PRIMARY_GOALS.len());
    }

    pub fn select_goal(&mut self) {
        if let Some(goal) = PRIMARY_GOALS.get(self.goal_cursor) {
            self.form.primary_goal = goal.value.to_string();
        }
    }

    pub fn move_category_cursor(&mut self, delta: isize) {
        let count = all_product_categories().count();
        self.category_cursor = step_cursor(self.category_cursor, delta, count);
    }

    /// Toggle the category under the cursor.
    pub fn toggle_category(&mut self) {
        if let Some(category) = all_product_categories().nth(self.category_cursor) {
            if !self.form.product_types.remove(category.key) {
                self.form.product_types.insert(category.key.to_string());
            }
        }
    }

    /// Begin the single submit, if the final step gate holds and no submit
    /// is already in flight. Returns the payload to POST.
    pub fn begin_submit(&mut self) -> Option<OnboardingSubmission> {
        if self.phase != WizardPhase::Form
            || !self.is_final_step()
            || !self.form.step_complete(self.step)
        {
            return None;
        }
        self.phase = WizardPhase::Submitting;
        self.error_banner = None;
        Some(self.form.to_submission(&self.shop, &self.access_token))
    }

    /// Apply the submit outcome. Success is terminal; failure returns to the
    /// form with values untouched so the user can resubmit.
    pub fn complete_submit(&mut self, outcome: Result<String, String>) -> bool {
        if self.phase != WizardPhase::Submitting {
            return false;
        }
        match outcome {
            Ok(seller_id) => {
                self.seller_id = Some(seller_id);
                self.phase = WizardPhase::Completed;
            }
            Err(message) => {
                self.phase = WizardPhase::Form;
                self.error_banner = Some(message);
            }
        }
        true
    }

    pub fn dismiss_error(&mut self) {
        self.error_banner = None;
    }
}

fn step_cursor(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let last = len - 1;
    if delta.is_negative() {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        (current + delta.unsigned_abs()).min(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> WizardState {
        let mut state = WizardState::new("example.myshop.com", "tok");
        state.form.email.set("ada@example.com");
        state.form.first_name.set("Ada");
        state.form.last_name.set("Lovelace");
        state.form.company_name.set("Analytical Engines");
        state.form.monthly_visitors = VISITOR_BUCKETS[0].to_string();
        state.form.primary_goal = PRIMARY_GOALS[0].value.to_string();
        state.form.product_types.insert("books".to_string());
        state
    }

    #[test]
    fn step_navigation() {
        assert_eq!(WizardStep::Personal.next(), Some(WizardStep::Company));
        assert_eq!(WizardStep::Personal.previous(), None);
        assert_eq!(WizardStep::ProductTypes.next(), None);
        assert_eq!(WizardStep::ProductTypes.previous(), Some(WizardStep::Goal));
        assert_eq!(WizardStep::total(), 4);
    }

    #[test]
    fn next_gated_per_step() {
        let mut state = WizardState::new("shop", "tok");
        assert!(!state.advance());

        state.form.email.set("a@b.co");
        state.form.first_name.set("A");
        assert!(!state.advance());
        state.form.last_name.set("B");
        assert!(state.advance());
        assert_eq!(state.step, WizardStep::Company);

        assert!(!state.advance());
        state.form.company_name.set("Co");
        assert!(!state.advance());
        state.form.monthly_visitors = VISITOR_BUCKETS[2].to_string();
        assert!(state.advance());
        assert_eq!(state.step, WizardStep::Goal);
    }

    #[test]
    fn product_step_gate_tracks_toggles() {
        let mut state = filled_state();
        state.step = WizardStep::ProductTypes;
        state.form.product_types.clear();
        assert!(!state.can_advance());

        state.toggle_category();
        assert!(state.can_advance());

        state.toggle_category();
        assert!(!state.can_advance());
    }

    #[test]
    fn back_preserves_values() {
        let mut state = filled_state();
        state.step = WizardStep::Goal;
        assert!(state.go_back());
        assert_eq!(state.step, WizardStep::Company);
        assert_eq!(state.form.company_name.value(), "Analytical Engines");

        state.step = WizardStep::Personal;
        assert!(!state.go_back());
    }

    #[test]
    fn submit_only_from_complete_final_step() {
        let mut state = filled_state();
        assert!(state.begin_submit().is_none(), "not on final step");

        state.step = WizardStep::ProductTypes;
        let submission = state.begin_submit().unwrap();
        assert_eq!(state.phase, WizardPhase::Submitting);
        assert_eq!(submission.store_url, "example.myshop.com");
        assert_eq!(submission.access_token, "tok");
        assert_eq!(submission.product_types, vec!["books".to_string()]);

        // No concurrent resubmit while in flight.
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn failed_submit_is_resubmittable() {
        let mut state = filled_state();
        state.step = WizardStep::ProductTypes;
        state.begin_submit().unwrap();

        assert!(state.complete_submit(Err("Submission failed. Please try again.".to_string())));
        assert_eq!(state.phase, WizardPhase::Form);
        assert_eq!(state.step, WizardStep::ProductTypes);
        assert!(state.error_banner.is_some());
        assert!(state.seller_id.is_none());
        // Values untouched, resubmission possible.
        assert_eq!(state.form.email.value(), "ada@example.com");
        assert!(state.begin_submit().is_some());
    }

    #[test]
    fn successful_submit_is_terminal() {
        let mut state = filled_state();
        state.step = WizardStep::ProductTypes;
        state.begin_submit().unwrap();
        assert!(state.complete_submit(Ok("seller-1".to_string())));

        assert_eq!(state.phase, WizardPhase::Completed);
        assert_eq!(state.seller_id.as_deref(), Some("seller-1"));
        // Terminal: no navigation or resubmission from the success screen.
        assert!(!state.advance());
        assert!(!state.go_back());
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn selected_product_types_in_catalog_order() {
        let mut state = WizardState::new("shop", "tok");
        state.form.product_types.insert("books".to_string());
        state.form.product_types.insert("electronics".to_string());
        state.form.product_types.insert("auto".to_string());
        assert_eq!(
            state.form.selected_product_types(),
            vec!["electronics".to_string(), "auto".to_string(), "books".to_string()]
        );
    }
}
