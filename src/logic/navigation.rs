//! Grid selection logic
//!
//! Pure functions for moving the selection around the emoji grid of the
//! current page. Selection never wraps and never leaves the page; paging is
//! a separate, explicit action.

/// Direction of a selection move in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
}

/// Move `current` within a grid of `len` cells laid out in `columns` columns
///
/// Returns `None` for an empty page. A missing selection starts at the first
/// cell. Moves that would leave the grid keep the current cell.
///
/// # Examples
/// ```
/// use emojifav::logic::navigation::{move_selection, GridMove};
///
/// // 7 cells in 3 columns:
/// //   0 1 2
/// //   3 4 5
/// //   6
/// assert_eq!(move_selection(Some(1), 7, 3, GridMove::Down), Some(4));
/// assert_eq!(move_selection(Some(4), 7, 3, GridMove::Down), Some(4));
/// assert_eq!(move_selection(Some(3), 7, 3, GridMove::Down), Some(6));
/// assert_eq!(move_selection(Some(0), 7, 3, GridMove::Left), Some(0));
/// ```
pub fn move_selection(
    current: Option<usize>,
    len: usize,
    columns: usize,
    direction: GridMove,
) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let columns = columns.max(1);
    let current = match current {
        Some(i) => i.min(len - 1),
        None => return Some(0),
    };

    Some(match direction {
        GridMove::Left => current.saturating_sub(1),
        GridMove::Right => (current + 1).min(len - 1),
        GridMove::Up => current.checked_sub(columns).unwrap_or(current),
        GridMove::Down if current + columns < len => current + columns,
        GridMove::Down => current,
        GridMove::First => 0,
        GridMove::Last => len - 1,
    })
}

/// Keep a selection valid after the page contents change
pub fn clamp_selection(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(len - 1))
}
