// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (title, search, grid, pager, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - search: Renders search input box with query and match count
// - grid: Renders the current page of emoji as a grid of cells
// - pager: Renders previous/next controls and the page indicator
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar with metrics
// - toast: Renders toast notifications (brief pop-up messages)

pub mod grid;
pub mod layout;
pub mod legend;
pub mod pager;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
