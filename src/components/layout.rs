// ABOUTME: Top-level layout: dispatches to the active view and overlays help

use ratatui::{layout::Rect, Frame};

use crate::app::state::{AppState, View};
use crate::components::dashboard::DashboardComponent;
use crate::components::help::HelpComponent;
use crate::components::onboarding::OnboardingComponent;

/// Root renderer owning the per-view components.
pub struct LayoutComponent {
    dashboard: DashboardComponent,
    onboarding: OnboardingComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            dashboard: DashboardComponent::new(),
            onboarding: OnboardingComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area: Rect = frame.size();

        match state.view {
            View::Dashboard => self.dashboard.render(frame, area, state),
            View::Onboarding => {
                if let Some(wizard) = &state.wizard {
                    self.onboarding.render(frame, area, wizard);
                }
            }
        }

        if state.help_visible {
            self.help.render(frame, area, state);
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
