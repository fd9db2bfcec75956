// ABOUTME: Theme color panel: hex entry with live validity feedback and a swatch

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::{panel_block, status_line, BRAND_ORANGE, DARK_BG, MUTED_GRAY, SOFT_WHITE};
use crate::app::state::AppState;

/// Parse a `#`-prefixed 3- or 6-digit hex color into an RGB swatch color.
fn swatch_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    let value = u32::from_str_radix(&expanded, 16).ok()?;
    Some(Color::Rgb(
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ))
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = panel_block("Theme Color", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Length(3), // Value / input
            Constraint::Length(1), // Swatch
            Constraint::Min(1),    // Status
        ])
        .split(inner);

    let description = Paragraph::new(Span::styled(
        "Select a primary color for your store's theme (e.g. #FF6B00)",
        Style::default().fg(MUTED_GRAY),
    ));
    frame.render_widget(description, layout[0]);

    let shown = if state.theme.is_editing() || state.theme.is_saving() {
        state.theme_input.display_with_cursor()
    } else {
        state.theme.original().clone()
    };
    let input = Paragraph::new(shown)
        .style(Style::default().fg(SOFT_WHITE))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if state.theme.is_editing() {
                    BRAND_ORANGE
                } else {
                    MUTED_GRAY
                }))
                .style(Style::default().bg(DARK_BG)),
        );
    frame.render_widget(input, layout[1]);

    if let Some(color) = swatch_color(state.theme.draft()) {
        let swatch = Paragraph::new(Line::from(vec![
            Span::styled("Preview ", Style::default().fg(MUTED_GRAY)),
            Span::styled("████████", Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ]));
        frame.render_widget(swatch, layout[2]);
    }

    let hint = if state.theme.is_editing() {
        "Enter save  │  Esc cancel"
    } else {
        "e edit"
    };
    let status = Paragraph::new(status_line(
        state.theme.is_saving(),
        state.theme.show_saved(),
        state.theme.error_message(),
        hint,
    ));
    frame.render_widget(status, layout[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_parses_both_hex_widths() {
        assert_eq!(swatch_color("#FF6B00"), Some(Color::Rgb(255, 107, 0)));
        assert_eq!(swatch_color("#f80"), Some(Color::Rgb(255, 136, 0)));
        assert_eq!(swatch_color("FF6B00"), None);
        assert_eq!(swatch_color("#FF6B0"), None);
    }
}
