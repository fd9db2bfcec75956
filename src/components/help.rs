// ABOUTME: Help overlay listing the key bindings for the active tab

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::state::{AppState, DashboardTab};

const GOLD: Color = Color::Rgb(255, 215, 0);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let popup = centered_rect(60, 60, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(GOLD))
            .style(Style::default().bg(PANEL_BG))
            .title(" Keys ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let mut lines = vec![
            keybinding("←/→", "switch tab"),
            keybinding("Tab", "switch card within a tab"),
            keybinding("q", "quit"),
        ];

        match state.active_tab {
            DashboardTab::StoreInfo => {
                lines.push(keybinding("e", "edit store name"));
                lines.push(keybinding("a", "enter a logo file path"));
                lines.push(keybinding("s", "upload staged logo"));
            }
            DashboardTab::Theme => {
                lines.push(keybinding("e", "edit theme color"));
                lines.push(keybinding("Enter", "save"));
            }
            DashboardTab::Content => {
                lines.push(keybinding("a", "add an entry"));
                lines.push(keybinding("g", "generate suggestions"));
                lines.push(keybinding("p", "add selected suggestion"));
                lines.push(keybinding("e/d", "edit / delete selected entry"));
                lines.push(keybinding("s", "save list"));
            }
            DashboardTab::Personalities => {
                lines.push(keybinding("e", "edit selection"));
                lines.push(keybinding("Space", "toggle persona"));
                lines.push(keybinding("s", "save"));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press ? to close",
            Style::default().fg(MUTED_GRAY),
        )));

        let text = Paragraph::new(lines).alignment(Alignment::Left);
        frame.render_widget(text, inner);
    }
}

fn keybinding(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<8}"), Style::default().fg(GOLD)),
        Span::styled(action, Style::default().fg(SOFT_WHITE)),
    ])
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
