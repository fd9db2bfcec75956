// ABOUTME: Personality panel: catalog picker with the three-persona limit

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::{
    panel_block, status_line, BRAND_ORANGE, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE,
};
use crate::app::state::AppState;
use crate::models::PERSONALITY_CATALOG;
use crate::panels::validate::MAX_PERSONALITIES;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = panel_block("Assistant Personalities", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Min(7),    // Catalog list
            Constraint::Length(1), // Count
            Constraint::Length(1), // Status
        ])
        .split(inner);

    let description = Paragraph::new(Span::styled(
        format!("Give your assistant a voice. Pick up to {MAX_PERSONALITIES} personas."),
        Style::default().fg(MUTED_GRAY),
    ));
    frame.render_widget(description, layout[0]);

    let editing = state.personalities.is_editing();
    let items: Vec<ListItem> = PERSONALITY_CATALOG
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let selected = state.personalities.draft().iter().any(|p| p.name == entry.key);
            let under_cursor = editing && idx == state.personality_cursor;

            let (icon, icon_style) = if selected {
                ("✓", Style::default().fg(SELECTION_GREEN))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };
            let marker = if under_cursor { "▶ " } else { "  " };

            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(BRAND_ORANGE)),
                Span::styled(icon, icon_style),
                Span::styled(" ", Style::default()),
                Span::styled(
                    entry.display_name,
                    if under_cursor {
                        Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(SOFT_WHITE)
                    },
                ),
                Span::styled(
                    format!("  — {}", entry.description),
                    Style::default().fg(MUTED_GRAY),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().bg(PANEL_BG));
    frame.render_widget(list, layout[1]);

    let count = Paragraph::new(Span::styled(
        format!(
            "{}/{} selected",
            state.personalities.draft().len(),
            MAX_PERSONALITIES
        ),
        Style::default().fg(MUTED_GRAY),
    ));
    frame.render_widget(count, layout[2]);

    let hint = if editing {
        "Space toggle  │  s save  │  Esc cancel"
    } else {
        "e edit selection"
    };
    let status = Paragraph::new(status_line(
        state.personalities.is_saving(),
        state.personalities.show_saved(),
        state.personalities.error_message(),
        hint,
    ));
    frame.render_widget(status, layout[3]);
}
