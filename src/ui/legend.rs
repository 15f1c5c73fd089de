use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    vim_mode: bool,
    search_mode: bool,
    has_search_query: bool,
    show_pager: bool,
) -> Vec<Span<'static>> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let mut hotkey_spans = vec![];

    if search_mode {
        hotkey_spans.extend(vec![
            Span::raw("Type to filter  "),
            key("Enter"),
            Span::raw(":Accept  "),
            key("Esc"),
            Span::raw(":Cancel  "),
            key("↑↓←→"),
            Span::raw(":Nav  "),
        ]);
        return hotkey_spans;
    }

    if vim_mode {
        hotkey_spans.extend(vec![
            key("hjkl"),
            Span::raw(":Nav  "),
            key("gg/G"),
            Span::raw(":First/Last  "),
        ]);
    } else {
        hotkey_spans.extend(vec![key("↑↓←→"), Span::raw(":Nav  ")]);
    }

    if show_pager {
        hotkey_spans.extend(vec![key("[ ]"), Span::raw(":Prev/Next page  ")]);
    }

    hotkey_spans.extend(vec![
        key("Enter"),
        Span::raw(":Export SVG  "),
        key("y"),
        Span::raw(":Copy  "),
        key("/"),
        Span::raw(":Search  "),
    ]);

    if has_search_query {
        hotkey_spans.extend(vec![key("Esc"), Span::raw(":Clear search  ")]);
    }

    hotkey_spans.extend(vec![key("q"), Span::raw(":Quit")]);
    hotkey_spans
}

/// Render hotkey legend
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    vim_mode: bool,
    search_mode: bool,
    has_search_query: bool,
    show_pager: bool,
) {
    let spans = build_hotkey_spans(vim_mode, search_mode, has_search_query, show_pager);
    let legend = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    f.render_widget(legend, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_search_mode_legend() {
        let legend = text(&build_hotkey_spans(false, true, false, true));
        assert!(legend.contains("Accept"));
        assert!(!legend.contains("Export"));
    }

    #[test]
    fn test_pager_keys_only_when_paging() {
        assert!(text(&build_hotkey_spans(false, false, false, true)).contains("Prev/Next"));
        assert!(!text(&build_hotkey_spans(false, false, false, false)).contains("Prev/Next"));
    }

    #[test]
    fn test_vim_keys() {
        assert!(text(&build_hotkey_spans(true, false, false, false)).contains("hjkl"));
    }

    #[test]
    fn test_clear_search_hint() {
        assert!(text(&build_hotkey_spans(false, false, true, false)).contains("Clear search"));
    }
}
