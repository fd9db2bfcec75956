// ABOUTME: Onboarding wizard renderer
// Step-based layout with progress header, per-step forms, and navigation footer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::state::{WizardPhase, WizardState, WizardStep};
use crate::models::{PRIMARY_GOALS, PRODUCT_CATEGORY_GROUPS, VISITOR_BUCKETS};

// Color palette (brand orange family)
const BRAND_ORANGE: Color = Color::Rgb(255, 107, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);

/// The onboarding wizard component.
pub struct OnboardingComponent;

impl OnboardingComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        frame.render_widget(Clear, area);
        let container = Block::default().style(Style::default().bg(DARK_BG));
        frame.render_widget(container, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header with progress
                Constraint::Min(12),   // Step content
                Constraint::Length(3), // Navigation footer
            ])
            .split(area);

        self.render_header(frame, layout[0], state);

        match state.phase {
            WizardPhase::Completed => self.render_completed(frame, layout[1], state),
            WizardPhase::Submitting => self.render_submitting(frame, layout[1]),
            WizardPhase::Form => self.render_step_content(frame, layout[1], state),
        }

        self.render_navigation(frame, layout[2], state);

        if let Some(message) = &state.error_banner {
            self.render_error_banner(frame, area, message);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let title = Paragraph::new(Line::from(Span::styled(
            "Store Onboarding",
            Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        // Progress dots
        let current = state.step.number() - 1;
        let mut spans = Vec::new();
        for (idx, step) in WizardStep::all().iter().enumerate() {
            let (icon, style) = if idx < current || state.phase == WizardPhase::Completed {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == current {
                ("◉", Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };
            spans.push(Span::styled(icon, style));
            spans.push(Span::styled(" ", Style::default()));
            spans.push(Span::styled(
                step.title(),
                if idx == current {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));
            if idx < WizardStep::all().len() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }
        let progress = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(progress, header_layout[1]);
    }

    fn render_step_content(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {} ", state.step.title()))
            .title_style(Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(2), Constraint::Min(8)])
            .split(inner);

        let description = Paragraph::new(Span::styled(
            state.step.description(),
            Style::default().fg(MUTED_GRAY),
        ));
        frame.render_widget(description, layout[0]);

        match state.step {
            WizardStep::Personal => self.render_personal(frame, layout[1], state),
            WizardStep::Company => self.render_company(frame, layout[1], state),
            WizardStep::Goal => self.render_goal(frame, layout[1], state),
            WizardStep::ProductTypes => self.render_product_types(frame, layout[1], state),
        }
    }

    fn render_personal(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let fields = [
            ("Email", &state.form.email),
            ("First Name", &state.form.first_name),
            ("Last Name", &state.form.last_name),
        ];
        for (idx, (label, input)) in fields.iter().enumerate() {
            let focused = state.focus == idx;
            let shown = if focused {
                input.display_with_cursor()
            } else {
                input.value().to_string()
            };
            let field = Paragraph::new(shown)
                .style(Style::default().fg(SOFT_WHITE))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(if focused {
                            BRAND_ORANGE
                        } else {
                            SUBDUED_BORDER
                        }))
                        .style(Style::default().bg(DARK_BG))
                        .title(format!(" {label} ")),
                );
            frame.render_widget(field, rows[idx]);
        }
    }

    fn render_company(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(6)])
            .split(area);

        let focused = state.focus == 0;
        let name = Paragraph::new(if focused {
            state.form.company_name.display_with_cursor()
        } else {
            state.form.company_name.value().to_string()
        })
        .style(Style::default().fg(SOFT_WHITE))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { BRAND_ORANGE } else { SUBDUED_BORDER }))
                .style(Style::default().bg(DARK_BG))
                .title(" Company Name "),
        );
        frame.render_widget(name, rows[0]);

        let label = Paragraph::new(Span::styled(
            "Monthly Website Visitors (↑/↓ then Space)",
            Style::default().fg(MUTED_GRAY),
        ));
        frame.render_widget(label, rows[1]);

        let items: Vec<ListItem> = VISITOR_BUCKETS
            .iter()
            .enumerate()
            .map(|(idx, bucket)| {
                let chosen = state.form.monthly_visitors == *bucket;
                let under_cursor = idx == state.bucket_cursor;
                let icon = if chosen { "◉" } else { "○" };
                ListItem::new(Line::from(vec![
                    Span::styled(if under_cursor { "▶ " } else { "  " }, Style::default().fg(BRAND_ORANGE)),
                    Span::styled(
                        icon,
                        if chosen {
                            Style::default().fg(SELECTION_GREEN)
                        } else {
                            Style::default().fg(MUTED_GRAY)
                        },
                    ),
                    Span::styled(format!(" {bucket}"), Style::default().fg(SOFT_WHITE)),
                ]))
            })
            .collect();
        frame.render_widget(List::new(items).style(Style::default().bg(PANEL_BG)), rows[2]);
    }

    fn render_goal(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let items: Vec<ListItem> = PRIMARY_GOALS
            .iter()
            .enumerate()
            .map(|(idx, goal)| {
                let chosen = state.form.primary_goal == goal.value;
                let under_cursor = idx == state.goal_cursor;
                let icon = if chosen { "◉" } else { "○" };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            if under_cursor { "▶ " } else { "  " },
                            Style::default().fg(BRAND_ORANGE),
                        ),
                        Span::styled(
                            icon,
                            if chosen {
                                Style::default().fg(SELECTION_GREEN)
                            } else {
                                Style::default().fg(MUTED_GRAY)
                            },
                        ),
                        Span::styled(
                            format!(" {}", goal.value),
                            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("      {}", goal.description),
                        Style::default().fg(MUTED_GRAY),
                    )),
                    Line::from(""),
                ])
            })
            .collect();
        frame.render_widget(List::new(items).style(Style::default().bg(PANEL_BG)), area);
    }

    fn render_product_types(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let mut items: Vec<ListItem> = Vec::new();
        let mut flat_index = 0usize;

        for group in PRODUCT_CATEGORY_GROUPS {
            items.push(ListItem::new(Line::from(vec![
                Span::styled("─── ", Style::default().fg(SUBDUED_BORDER)),
                Span::styled(
                    group.name,
                    Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ───", Style::default().fg(SUBDUED_BORDER)),
            ])));

            for category in group.items {
                let chosen = state.form.product_types.contains(category.key);
                let under_cursor = flat_index == state.category_cursor;
                let icon = if chosen { "☑" } else { "☐" };
                items.push(ListItem::new(Line::from(vec![
                    Span::styled(
                        if under_cursor { "▶ " } else { "  " },
                        Style::default().fg(BRAND_ORANGE),
                    ),
                    Span::styled(
                        icon,
                        if chosen {
                            Style::default().fg(SELECTION_GREEN)
                        } else {
                            Style::default().fg(MUTED_GRAY)
                        },
                    ),
                    Span::styled(
                        format!(" {}", category.label),
                        if under_cursor {
                            Style::default().fg(BRAND_ORANGE)
                        } else {
                            Style::default().fg(SOFT_WHITE)
                        },
                    ),
                ])));
                flat_index += 1;
            }
        }

        frame.render_widget(List::new(items).style(Style::default().bg(PANEL_BG)), area);
    }

    fn render_submitting(&self, frame: &mut Frame, area: Rect) {
        let text = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Submitting your details…",
                Style::default().fg(BRAND_ORANGE),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(text, area);
    }

    fn render_completed(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let seller = state.seller_id.as_deref().unwrap_or("unknown");
        let text = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "🎉 You're all set!",
                Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Seller ID: ", Style::default().fg(MUTED_GRAY)),
                Span::styled(seller.to_string(), Style::default().fg(SOFT_WHITE)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(MUTED_GRAY)),
                Span::styled("Enter", Style::default().fg(BRAND_ORANGE)),
                Span::styled(" to open the dashboard", Style::default().fg(MUTED_GRAY)),
            ]),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(text, area);
    }

    fn render_navigation(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = vec![Span::styled("  ", Style::default())];

        if state.can_go_back() {
            spans.push(Span::styled("[←]", Style::default().fg(BRAND_ORANGE)));
            spans.push(Span::styled(" Back  │  ", Style::default().fg(MUTED_GRAY)));
        }

        let can_advance = state.can_advance();
        let button = if state.is_final_step() { "Submit" } else { "Next" };
        spans.push(Span::styled(
            "[Enter]",
            if can_advance {
                Style::default().fg(BRAND_ORANGE)
            } else {
                Style::default().fg(MUTED_GRAY)
            },
        ));
        spans.push(Span::styled(
            format!(" {button}"),
            if can_advance {
                Style::default().fg(SOFT_WHITE)
            } else {
                Style::default().fg(MUTED_GRAY)
            },
        ));

        spans.push(Span::styled("  │  [Tab] Field  │  [Esc] Quit", Style::default().fg(MUTED_GRAY)));

        let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(nav, inner);
    }

    fn render_error_banner(&self, frame: &mut Frame, area: Rect, message: &str) {
        let width = area.width.saturating_sub(10).min(60);
        let banner = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + area.height / 2 - 3,
            width,
            height: 6,
        };
        frame.render_widget(Clear, banner);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ERROR_RED))
            .style(Style::default().bg(PANEL_BG))
            .title(" Submission Failed ")
            .title_style(Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD));
        let inner = block.inner(banner);
        frame.render_widget(block, banner);

        let text = Paragraph::new(vec![
            Line::from(Span::styled(message.to_string(), Style::default().fg(SOFT_WHITE))),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to dismiss and try again",
                Style::default().fg(MUTED_GRAY),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(text, inner);
    }
}

impl Default for OnboardingComponent {
    fn default() -> Self {
        Self::new()
    }
}
