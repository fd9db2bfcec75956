// ABOUTME: TUI components: layout dispatch, dashboard tabs and panels, onboarding wizard

pub mod dashboard;
pub mod help;
pub mod layout;
pub mod onboarding;

pub use dashboard::DashboardComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use onboarding::OnboardingComponent;
