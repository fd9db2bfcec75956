// ABOUTME: Onboarding wizard: state machine, form aggregate, and TUI renderer

pub mod component;
pub mod state;

pub use component::OnboardingComponent;
pub use state::{OnboardingForm, WizardPhase, WizardState, WizardStep};
