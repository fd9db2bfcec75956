// ABOUTME: Behavioral tests for the onboarding wizard sequencing and submit handling

use shoptalk::components::onboarding::{WizardPhase, WizardState, WizardStep};

fn complete_wizard() -> WizardState {
    let mut state = WizardState::new("demo.myshop.com", "tok");
    state.form.email.set("ada@example.com");
    state.form.first_name.set("Ada");
    state.form.last_name.set("Lovelace");
    state.form.company_name.set("Analytical Engines");
    state.form.monthly_visitors = "10,000 - 25,000".to_string();
    state.form.primary_goal = "Reduce support tickets".to_string();
    state.form.product_types.insert("electronics".to_string());
    state
}

#[test]
fn no_forward_skipping() {
    let mut state = WizardState::new("shop", "tok");
    assert_eq!(state.step, WizardStep::Personal);
    assert!(!state.advance());
    assert_eq!(state.step, WizardStep::Personal);
}

#[test]
fn final_step_gate_tracks_category_toggles() {
    let mut state = complete_wizard();
    state.step = WizardStep::ProductTypes;
    state.form.product_types.clear();
    assert!(!state.can_advance());

    state.toggle_category();
    assert!(state.can_advance());

    state.toggle_category();
    assert!(!state.can_advance());
}

#[test]
fn http_failure_leaves_wizard_resubmittable() {
    let mut state = complete_wizard();
    state.step = WizardStep::ProductTypes;

    let submission = state.begin_submit().expect("submit should start");
    assert_eq!(submission.email, "ada@example.com");
    assert_eq!(state.phase, WizardPhase::Submitting);

    // Server returned HTTP 500.
    assert!(state.complete_submit(Err("Submission failed. Please try again.".to_string())));

    assert_eq!(state.phase, WizardPhase::Form, "Completed must never be reached");
    assert_eq!(state.step, WizardStep::ProductTypes);
    assert!(state.error_banner.is_some());

    // Form values untouched; resubmission possible after dismissing.
    state.dismiss_error();
    let retry = state.begin_submit().expect("resubmission should be possible");
    assert_eq!(retry.company_name, "Analytical Engines");
}

#[test]
fn submission_flattens_product_types_to_selected_keys() {
    let mut state = complete_wizard();
    state.form.product_types.insert("books".to_string());
    state.step = WizardStep::ProductTypes;

    let submission = state.begin_submit().unwrap();
    assert_eq!(
        submission.product_types,
        vec!["electronics".to_string(), "books".to_string()]
    );
    assert_eq!(submission.store_url, "demo.myshop.com");
    assert_eq!(submission.access_token, "tok");
}

#[test]
fn completed_is_terminal() {
    let mut state = complete_wizard();
    state.step = WizardStep::ProductTypes;
    state.begin_submit().unwrap();
    state.complete_submit(Ok("seller-1".to_string()));

    assert_eq!(state.phase, WizardPhase::Completed);
    assert!(!state.go_back());
    assert!(state.begin_submit().is_none());
}
