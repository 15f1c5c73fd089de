use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::path::Path;

use emojifav::catalog::EmojiRecord;

/// Build the status line text (extracted for testability)
fn build_status_line(
    catalog_len: usize,
    match_count: usize,
    page: usize,
    total_pages: usize,
    selected: Option<&EmojiRecord>,
    output_dir: &Path,
) -> String {
    let mut metrics = vec![
        format!("Emoji: {}", catalog_len),
        format!("Matches: {}", match_count),
        format!("Page: {}/{}", page, total_pages),
    ];

    if let Some(record) = selected {
        metrics.push(format!("Selected: {} {}", record.symbol, record.name));
        if !record.keywords.is_empty() {
            metrics.push(format!("Keywords: {}", record.keywords.join(", ")));
        }
    }

    metrics.push(format!("Output: {}", output_dir.display()));

    metrics.join(" | ")
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    catalog_len: usize,
    match_count: usize,
    page: usize,
    total_pages: usize,
    selected: Option<&EmojiRecord>,
    output_dir: &Path,
) {
    let status_line = build_status_line(
        catalog_len,
        match_count,
        page,
        total_pages,
        selected,
        output_dir,
    );

    // Color the labels (before colons)
    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        if let Some(colon_pos) = part.find(':') {
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            spans.push(Span::styled(label.to_string(), Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(value.to_string()));
        } else {
            spans.push(Span::raw(part.to_string()));
        }
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
