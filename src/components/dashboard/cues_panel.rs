// ABOUTME: Conversation cue panel: current list, entry row, and generated suggestions

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
    let focused = state.content_focus == ContentFocus::Cues;
    let block = panel_block("Conversation Cues", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(5),    // Current cues
            Constraint::Length(3), // Entry row
            Constraint::Min(4),    // Suggestions
            Constraint::Length(1), // Status
        ])
        .split(inner);

    render_current(frame, layout[0], state, focused);
    render_entry_row(frame, layout[1], state, focused);
    render_suggestions(frame, layout[2], state);

    let hint = if state.cue_inserting {
        "Enter next field / commit  │  Esc cancel"
    } else if state.cues.is_dirty() {
        "s save  │  a add  │  g generate  │  e edit  d delete"
    } else {
        "a add  │  g generate"
    };
    let status = Paragraph::new(status_line(
        state.cues.is_saving(),
        state.cues.show_saved(),
        state.cues.error_message(),
        hint,
    ));
    frame.render_widget(status, layout[3]);
}

fn render_current(frame: &mut Frame, area: Rect, state: &AppState, focused: bool) {
    let items: Vec<ListItem> = if state.cues.draft().is_empty() {
        vec![ListItem::new(Span::styled(
            "  No cues yet. Generate some or add your own.",
            Style::default().fg(MUTED_GRAY),
        ))]
    } else {
        state
            .cues
            .draft()
            .iter()
            .enumerate()
            .map(|(idx, cue)| {
                let selected = focused && idx == state.cue_selected;
                let marker = if selected { "▶ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(BRAND_ORANGE)),
                    Span::styled(
                        cue.title.clone(),
                        if selected {
                            Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(SOFT_WHITE)
                        },
                    ),
                    Span::styled(format!("  {}", cue.value), Style::default().fg(MUTED_GRAY)),
                ]))
            })
            .collect()
    };

    let list = List::new(items).style(Style::default().bg(PANEL_BG));
    frame.render_widget(list, area);
}

fn render_entry_row(frame: &mut Frame, area: Rect, state: &AppState, focused: bool) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let editing = state.cue_editing.is_some();
    let row_title = if editing { " edit cue " } else { " new cue " };

    let title_active = focused && !state.cue_focus_value;
    let title_input = Paragraph::new(if title_active {
        state.cue_title_input.display_with_cursor()
    } else {
        state.cue_title_input.value().to_string()
    })
    .style(Style::default().fg(SOFT_WHITE))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if title_active { BRAND_ORANGE } else { MUTED_GRAY }))
            .style(Style::default().bg(DARK_BG))
            .title(row_title),
    );
    frame.render_widget(title_input, halves[0]);

    let value_active = focused && state.cue_focus_value;
    let value_input = Paragraph::new(if value_active {
        state.cue_value_input.display_with_cursor()
    } else {
        state.cue_value_input.value().to_string()
    })
    .style(Style::default().fg(SOFT_WHITE))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if value_active { BRAND_ORANGE } else { MUTED_GRAY }))
            .style(Style::default().bg(DARK_BG))
            .title(" message "),
    );
    frame.render_widget(value_input, halves[1]);
}

fn render_suggestions(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.cues.is_generating() {
        let loading = Paragraph::new(Span::styled(
            "  Generating cues…",
            Style::default().fg(BRAND_ORANGE),
        ));
        frame.render_widget(loading, area);
        return;
    }
    if state.cues.suggestions().is_empty() {
        return;
    }

    let mut items = vec![ListItem::new(Span::styled(
        "  Generated suggestions (p to add):",
        Style::default().fg(MUTED_GRAY),
    ))];
    items.extend(state.cues.suggestions().iter().enumerate().map(|(idx, cue)| {
        let selected = idx == state.cue_suggestion_selected;
        let marker = if selected { "▶ " } else { "  " };
        ListItem::new(Line::from(vec![
            Span::styled(marker, Style::default().fg(BRAND_ORANGE)),
            Span::styled(cue.title.clone(), Style::default().fg(SOFT_WHITE)),
            Span::styled(format!("  {}", cue.value), Style::default().fg(MUTED_GRAY)),
        ]))
    }));

    let list = List::new(items).style(Style::default().bg(PANEL_BG));
    frame.render_widget(list, area);
}
