// ABOUTME: Store logo panel: current URL, staged file path entry, upload state

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::{panel_block, status_line, BRAND_ORANGE, DARK_BG, MUTED_GRAY, SOFT_WHITE};
use crate::app::state::{AppState, StoreFocus};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.store_focus == StoreFocus::Logo;
    let block = panel_block("Store Logo", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Length(1), // Current logo
            Constraint::Length(3), // Path input
            Constraint::Length(1), // Staged file
            Constraint::Min(1),    // Status
        ])
        .split(inner);

    let description = Paragraph::new(Span::styled(
        "Upload your store logo for brand recognition (JPEG, PNG, GIF, SVG, WebP; max 2MB)",
        Style::default().fg(MUTED_GRAY),
    ));
    frame.render_widget(description, layout[0]);

    let current = Paragraph::new(Line::from(vec![
        Span::styled("Current: ", Style::default().fg(MUTED_GRAY)),
        Span::styled(
            state.logo.current_url().unwrap_or("none").to_string(),
            Style::default().fg(SOFT_WHITE),
        ),
    ]));
    frame.render_widget(current, layout[1]);

    let input = Paragraph::new(if focused {
        state.logo_input.display_with_cursor()
    } else {
        state.logo_input.value().to_string()
    })
    .style(Style::default().fg(SOFT_WHITE))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { BRAND_ORANGE } else { MUTED_GRAY }))
            .style(Style::default().bg(DARK_BG))
            .title(" file path "),
    );
    frame.render_widget(input, layout[2]);

    if let Some(staged) = state.logo.staged() {
        let staged_line = Paragraph::new(Line::from(vec![
            Span::styled("Staged: ", Style::default().fg(MUTED_GRAY)),
            Span::styled(staged.display().to_string(), Style::default().fg(BRAND_ORANGE)),
        ]));
        frame.render_widget(staged_line, layout[3]);
    }

    let hint = if state.logo_inserting {
        "Enter stage file  │  Esc cancel"
    } else {
        "a enter path  │  s upload staged  │  x clear"
    };
    let status = Paragraph::new(status_line(
        state.logo.is_saving(),
        state.logo.show_saved(),
        state.logo.error_message(),
        hint,
    ));
    frame.render_widget(status, layout[4]);
}
