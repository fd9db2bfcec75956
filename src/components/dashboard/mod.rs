// ABOUTME: Store settings dashboard: tab bar, seller strip, and panel dispatch

pub mod cues_panel;
pub mod loader_panel;
pub mod logo_panel;
pub mod personality_panel;
pub mod theme_panel;
pub mod title_panel;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::state::{AppState, DashboardPhase, DashboardTab};

// Color palette shared by the dashboard panels (brand orange family)
pub(crate) const BRAND_ORANGE: Color = Color::Rgb(255, 107, 0);
pub(crate) const BRAND_ORANGE_DARK: Color = Color::Rgb(230, 81, 0);
pub(crate) const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
pub(crate) const DARK_BG: Color = Color::Rgb(25, 25, 35);
pub(crate) const PANEL_BG: Color = Color::Rgb(30, 30, 40);
pub(crate) const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
pub(crate) const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
pub(crate) const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
pub(crate) const ERROR_RED: Color = Color::Rgb(220, 80, 80);

/// Bordered card for one panel; brand border when focused.
pub(crate) fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { BRAND_ORANGE } else { SUBDUED_BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(PANEL_BG))
        .title(format!(" {title} "))
        .title_style(Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD))
}

/// Shared status footer: saving spinner, transient Saved chip, or the
/// panel-scoped error message.
pub(crate) fn status_line(
    is_saving: bool,
    show_saved: bool,
    error: Option<&str>,
    hint: &str,
) -> Line<'static> {
    if is_saving {
        return Line::from(Span::styled(
            "Saving…",
            Style::default().fg(BRAND_ORANGE),
        ));
    }
    if let Some(message) = error {
        return Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(ERROR_RED),
        ));
    }
    if show_saved {
        return Line::from(Span::styled(
            "✓ Saved",
            Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(Span::styled(hint.to_string(), Style::default().fg(MUTED_GRAY)))
}

/// The store settings dashboard.
pub struct DashboardComponent;

impl DashboardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let container = Block::default().style(Style::default().bg(DARK_BG));
        frame.render_widget(container, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(2), // Tab bar
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Footer
            ])
            .split(area);

        self.render_header(frame, layout[0], state);
        self.render_tabs(frame, layout[1], state);
        self.render_content(frame, layout[2], state);
        self.render_footer(frame, layout[3], state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let seller = state
            .seller_id
            .as_deref()
            .map(|id| format!("  ({id})"))
            .unwrap_or_default();

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "Store Settings",
                Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD),
            ),
            Span::styled(seller, Style::default().fg(MUTED_GRAY)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, inner);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut spans = vec![Span::styled("  ", Style::default())];
        for (idx, tab) in DashboardTab::all().iter().enumerate() {
            let style = if *tab == state.active_tab {
                Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_GRAY)
            };
            spans.push(Span::styled(tab.title(), style));
            if idx < DashboardTab::all().len() - 1 {
                spans.push(Span::styled("  │  ", Style::default().fg(SUBDUED_BORDER)));
            }
        }
        let tabs = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(tabs, area);
    }

    fn render_content(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        match &state.dashboard_phase {
            DashboardPhase::NoSeller => self.render_no_seller(frame, area),
            DashboardPhase::Loading => self.render_loading(frame, area),
            DashboardPhase::Failed(message) => self.render_failed(frame, area, message),
            DashboardPhase::Ready => match state.active_tab {
                DashboardTab::StoreInfo => {
                    let halves = Layout::default()
                        .direction(Direction::Horizontal)
                        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                        .split(area);
                    title_panel::render(frame, halves[0], state);
                    logo_panel::render(frame, halves[1], state);
                }
                DashboardTab::Theme => theme_panel::render(frame, area, state),
                DashboardTab::Content => {
                    let halves = Layout::default()
                        .direction(Direction::Horizontal)
                        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                        .split(area);
                    cues_panel::render(frame, halves[0], state);
                    loader_panel::render(frame, halves[1], state);
                }
                DashboardTab::Personalities => personality_panel::render(frame, area, state),
            },
        }
    }

    fn render_no_seller(&self, frame: &mut Frame, area: Rect) {
        let message = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No store connected",
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Pass --seller-id, a --launch-url, or run `shoptalk onboard` first.",
                Style::default().fg(MUTED_GRAY),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(message, area);
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let message = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Loading store information…",
                Style::default().fg(BRAND_ORANGE),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(message, area);
    }

    fn render_failed(&self, frame: &mut Frame, area: Rect, message: &str) {
        let text = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Could not load store information",
                Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(message.to_string(), Style::default().fg(MUTED_GRAY))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(MUTED_GRAY)),
                Span::styled("r", Style::default().fg(BRAND_ORANGE)),
                Span::styled(" to retry", Style::default().fg(MUTED_GRAY)),
            ]),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(text, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let email = state
            .profile
            .as_ref()
            .and_then(|p| p.email.as_deref())
            .unwrap_or("—");
        let onboarded = state
            .profile
            .as_ref()
            .map(|p| {
                if p.has_completed_onboarding {
                    "onboarding complete"
                } else {
                    "onboarding incomplete"
                }
            })
            .unwrap_or("");

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("  ←/→ tabs  │  ? help  │  q quit", Style::default().fg(MUTED_GRAY)),
            Span::styled(
                format!("    {email}  {onboarded}"),
                Style::default().fg(SUBDUED_BORDER),
            ),
        ]));
        frame.render_widget(footer, area);
    }
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}
