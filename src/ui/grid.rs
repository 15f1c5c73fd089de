//! Emoji grid
//!
//! Renders the current page as a grid of cells, each showing the glyph and
//! its (truncated) name. Scrolls vertically to keep the selection visible
//! when the page has more rows than fit on screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use emojifav::catalog::EmojiRecord;
use emojifav::logic::layout::{grid_columns, scroll_offset, truncate_to_width, CELL_HEIGHT};

/// Render the grid and return the number of columns used
pub fn render_grid(
    f: &mut Frame,
    area: Rect,
    items: &[&EmojiRecord],
    selected: Option<usize>,
) -> usize {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Emoji ")
        .style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = grid_columns(inner.width);

    if items.is_empty() {
        let empty = Paragraph::new("No emojis found matching your search.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        let y = inner.y + inner.height / 2;
        f.render_widget(empty, Rect { y, height: 1.min(inner.height), ..inner });
        return columns;
    }

    let cell_width = inner.width / columns as u16;
    let visible_rows = (inner.height / CELL_HEIGHT) as usize;
    let selected_row = selected.unwrap_or(0) / columns;
    let first_row = scroll_offset(selected_row, visible_rows);

    for row in 0..visible_rows {
        for col in 0..columns {
            let index = (first_row + row) * columns + col;
            let Some(record) = items.get(index) else {
                break;
            };

            let cell = Rect {
                x: inner.x + col as u16 * cell_width,
                y: inner.y + row as u16 * CELL_HEIGHT,
                width: cell_width,
                height: CELL_HEIGHT,
            };
            render_cell(f, cell, record, selected == Some(index));
        }
    }

    columns
}

fn render_cell(f: &mut Frame, area: Rect, record: &EmojiRecord, is_selected: bool) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let name_width = area.width.saturating_sub(2) as usize;
    let name_style = if is_selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let lines = vec![
        Line::from(record.symbol.as_str()),
        Line::styled(truncate_to_width(&record.name, name_width), name_style),
    ];

    let cell = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));

    f.render_widget(cell, area);
}
