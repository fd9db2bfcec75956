// ABOUTME: Loading-screen text panel: cycled messages list, entry row, suggestions

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::{panel_block, status_line, BRAND_ORANGE, DARK_BG, MUTED_GRAY, PANEL_BG, SOFT_WHITE};
use crate::app::state::{AppState, ContentFocus};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.content_focus == ContentFocus::Loaders;
    let block = panel_block("Loader Texts", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(5),    // Current texts
            Constraint::Length(3), // Entry row
            Constraint::Min(4),    // Suggestions
            Constraint::Length(1), // Status
        ])
        .split(inner);

    render_current(frame, layout[0], state, focused);

    let editing = state.loader_editing.is_some();
    let input = Paragraph::new(if focused {
        state.loader_input.display_with_cursor()
    } else {
        state.loader_input.value().to_string()
    })
    .style(Style::default().fg(SOFT_WHITE))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { BRAND_ORANGE } else { MUTED_GRAY }))
            .style(Style::default().bg(DARK_BG))
            .title(if editing { " edit text " } else { " new text " }),
    );
    frame.render_widget(input, layout[1]);

    render_suggestions(frame, layout[2], state);

    let hint = if state.loader_inserting {
        "Enter commit  │  Esc cancel"
    } else if state.loaders.is_dirty() {
        "s save  │  a add  │  g generate  │  e edit  d delete"
    } else {
        "a add  │  g generate"
    };
    let status = Paragraph::new(status_line(
        state.loaders.is_saving(),
        state.loaders.show_saved(),
        state.loaders.error_message(),
        hint,
    ));
    frame.render_widget(status, layout[3]);
}

fn render_current(frame: &mut Frame, area: Rect, state: &AppState, focused: bool) {
    let items: Vec<ListItem> = if state.loaders.draft().is_empty() {
        vec![ListItem::new(Span::styled(
            "  No loader texts yet. These cycle while the assistant thinks.",
            Style::default().fg(MUTED_GRAY),
        ))]
    } else {
        state
            .loaders
            .draft()
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let selected = focused && idx == state.loader_selected;
                let marker = if selected { "▶ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(BRAND_ORANGE)),
                    Span::styled(
                        text.clone(),
                        if selected {
                            Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(SOFT_WHITE)
                        },
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items).style(Style::default().bg(PANEL_BG));
    frame.render_widget(list, area);
}

fn render_suggestions(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.loaders.is_generating() {
        let loading = Paragraph::new(Span::styled(
            "  Generating loader texts…",
            Style::default().fg(BRAND_ORANGE),
        ));
        frame.render_widget(loading, area);
        return;
    }
    if state.loaders.suggestions().is_empty() {
        return;
    }

    let mut items = vec![ListItem::new(Span::styled(
        "  Generated suggestions (p to add):",
        Style::default().fg(MUTED_GRAY),
    ))];
    items.extend(
        state
            .loaders
            .suggestions()
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let selected = idx == state.loader_suggestion_selected;
                let marker = if selected { "▶ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(BRAND_ORANGE)),
                    Span::styled(text.clone(), Style::default().fg(SOFT_WHITE)),
                ]))
            }),
    );

    let list = List::new(items).style(Style::default().bg(PANEL_BG));
    frame.render_widget(list, area);
}
