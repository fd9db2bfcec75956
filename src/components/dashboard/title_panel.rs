// ABOUTME: Store name panel: view card with edit mode, character counter, save state

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::{panel_block, status_line, BRAND_ORANGE, DARK_BG, MUTED_GRAY, SOFT_WHITE};
use crate::app::state::{AppState, StoreFocus};
use crate::panels::validate::MAX_NAME_LENGTH;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.store_focus == StoreFocus::Title;
    let block = panel_block("Store Name", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Length(3), // Value / input
            Constraint::Length(1), // Counter
            Constraint::Min(1),    // Status
        ])
        .split(inner);

    let description = Paragraph::new(Span::styled(
        "Set the name of your store as it will appear to customers",
        Style::default().fg(MUTED_GRAY),
    ));
    frame.render_widget(description, layout[0]);

    if state.title.is_editing() || state.title.is_saving() {
        let input = Paragraph::new(state.title_input.display_with_cursor())
            .style(Style::default().fg(SOFT_WHITE))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(BRAND_ORANGE))
                    .style(Style::default().bg(DARK_BG)),
            );
        frame.render_widget(input, layout[1]);

        let count = state.title.draft().chars().count();
        let counter = Paragraph::new(Span::styled(
            format!("{count}/{MAX_NAME_LENGTH} characters"),
            Style::default().fg(MUTED_GRAY),
        ));
        frame.render_widget(counter, layout[2]);
    } else {
        let name = if state.title.original().is_empty() {
            "No store name set".to_string()
        } else {
            state.title.original().clone()
        };
        let value = Paragraph::new(Line::from(Span::styled(
            name,
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(value, layout[1]);
    }

    let hint = if state.title.is_editing() {
        "Enter save  │  Esc cancel"
    } else {
        "e edit"
    };
    let status = Paragraph::new(status_line(
        state.title.is_saving(),
        state.title.show_saved(),
        state.title.error_message(),
        hint,
    ));
    frame.render_widget(status, layout[3]);
}
