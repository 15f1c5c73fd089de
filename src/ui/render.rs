use crate::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use super::{grid, layout, legend, pager, search, status_bar, toast};

const TITLE: &str = "Unicode Emoji Favicon Library";

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let browser = &app.model.browser;
    let page = browser.current_page();
    let layout_info = layout::calculate_layout(size, page.show_controls);

    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(title, layout_info.title_area);

    search::render_search_input(
        f,
        layout_info.search_area,
        browser.query(),
        app.model.ui.search_mode,
        page.total_items,
        app.model.ui.vim_mode,
    );

    let columns = grid::render_grid(f, layout_info.grid_area, &page.items, browser.selected());

    if let Some(pager_area) = layout_info.pager_area {
        pager::render_pager(
            f,
            pager_area,
            page.page,
            page.display_total_pages(),
            page.has_previous(),
            page.has_next(),
        );
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        app.model.ui.vim_mode,
        app.model.ui.search_mode,
        !browser.query().is_empty(),
        page.show_controls,
    );

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        browser.catalog().len(),
        page.total_items,
        page.page,
        page.display_total_pages(),
        browser.selected_record(),
        &app.output_dir,
    );

    if let Some((message, _)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }

    // Keyboard navigation needs the column count of the grid as drawn
    app.model.ui.grid_columns = columns;
}
