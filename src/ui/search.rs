//! Search Input UI
//!
//! Renders the search input box with query, match count, and blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render search input box
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `query`: Current search query
/// - `active`: Whether input is actively receiving keystrokes
/// - `match_count`: Number of emoji matching the query
/// - `vim_mode`: Whether vim keybindings are enabled
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    match_count: usize,
    vim_mode: bool,
) {
    let title = if active {
        format!(" Search ({} matches) - Enter to accept, Esc to cancel ", match_count)
    } else if !query.is_empty() {
        format!(" Search ({} matches) - Esc to clear ", match_count)
    } else {
        let search_key = if vim_mode { "/" } else { "/ or Ctrl-F" };
        format!(" Search ({}) ", search_key)
    };

    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![
            Span::raw(query),
            Span::styled("█", cursor_style),
        ])
    } else if query.is_empty() {
        Line::from(vec![Span::styled(
            "Search emojis by name or keyword...",
            Style::default().fg(Color::DarkGray),
        )])
    } else {
        Line::from(vec![Span::styled(query, Style::default().fg(Color::Gray))])
    };

    let paragraph = Paragraph::new(vec![input_line]).block(block);

    f.render_widget(paragraph, area);
}
