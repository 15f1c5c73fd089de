use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Title bar area
    pub title_area: Rect,
    /// Search input area
    pub search_area: Rect,
    /// Emoji grid area
    pub grid_area: Rect,
    /// Previous/next controls (None when everything fits on one page)
    pub pager_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, show_pager: bool) -> LayoutInfo {
    let pager_height = if show_pager { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Title
            Constraint::Length(3),            // Search input (top border, text, bottom border)
            Constraint::Min(3),               // Grid
            Constraint::Length(pager_height), // Pager (hidden when everything fits)
            Constraint::Length(1),            // Legend
            Constraint::Length(3),            // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        title_area: chunks[0],
        search_area: chunks[1],
        grid_area: chunks[2],
        pager_area: if show_pager { Some(chunks[3]) } else { None },
        legend_area: chunks[4],
        status_area: chunks[5],
    }
}
