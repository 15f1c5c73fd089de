use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the previous/next controls with the page indicator
///
/// Controls at the first/last page are drawn dimmed since they do nothing.
pub fn render_pager(
    f: &mut Frame,
    area: Rect,
    page: usize,
    total_pages: usize,
    has_previous: bool,
    has_next: bool,
) {
    let enabled = Style::default().fg(Color::Yellow);
    let disabled = Style::default().fg(Color::DarkGray);

    let line = Line::from(vec![
        Span::styled("◀ Previous", if has_previous { enabled } else { disabled }),
        Span::raw("    "),
        Span::styled(
            format!("Page {} of {}", page, total_pages),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("    "),
        Span::styled("Next ▶", if has_next { enabled } else { disabled }),
    ]);

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
