//! Layout calculation logic
//!
//! Pure functions for sizing the emoji grid.

use unicode_width::UnicodeWidthStr;

/// Minimum width of one grid cell, borders included
pub const MIN_CELL_WIDTH: u16 = 16;

/// Height of one grid cell: border, glyph, name, border
pub const CELL_HEIGHT: u16 = 4;

/// Number of grid columns that fit in `content_width`
///
/// Always at least one column.
///
/// # Examples
/// ```
/// use emojifav::logic::layout::grid_columns;
///
/// assert_eq!(grid_columns(80), 5);
/// assert_eq!(grid_columns(10), 1);
/// ```
pub fn grid_columns(content_width: u16) -> usize {
    (content_width / MIN_CELL_WIDTH).max(1) as usize
}

/// Number of rows needed for `items` cells
pub fn grid_rows(items: usize, columns: usize) -> usize {
    items.div_ceil(columns.max(1))
}

/// First row to draw so that `selected_row` stays on screen
pub fn scroll_offset(selected_row: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return selected_row;
    }
    selected_row.saturating_sub(visible_rows - 1)
}

/// Truncate `text` to at most `max_width` terminal columns, adding an
/// ellipsis when anything was cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(16), 1);
        assert_eq!(grid_columns(32), 2);
        assert_eq!(grid_columns(200), 12);
    }

    #[test]
    fn test_grid_rows() {
        assert_eq!(grid_rows(30, 6), 5);
        assert_eq!(grid_rows(31, 6), 6);
        assert_eq!(grid_rows(0, 6), 0);
        assert_eq!(grid_rows(3, 0), 3);
    }

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(0, 3), 0);
        assert_eq!(scroll_offset(2, 3), 0);
        assert_eq!(scroll_offset(3, 3), 1);
        assert_eq!(scroll_offset(9, 3), 7);
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_to_width("dog face", 10), "dog face");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_to_width("grinning face", 8), "grinnin…");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // each emoji is two columns wide
        assert_eq!(truncate_to_width("😀😀😀", 4), "😀…");
    }
}
