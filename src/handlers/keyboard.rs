//! Keyboard Input Handler
//!
//! Handles all keyboard input. While the search input is active, printable
//! keys edit the query; otherwise they are commands.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use emojifav::logic::navigation::GridMove;
use emojifav::model::VimCommandState;

use crate::App;

/// Handle keyboard input
///
/// Processes all keyboard events and dispatches to appropriate actions.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    if app.model.ui.search_mode {
        handle_search_key(app, key);
        return Ok(());
    }

    // Resolve the pending 'g' of a vim 'gg' first
    if app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG {
        app.model.ui.vim_command_state = VimCommandState::None;
        if key.code == KeyCode::Char('g') {
            move_selection(app, GridMove::First);
            return Ok(());
        }
    }

    let vim_mode = app.model.ui.vim_mode;

    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Char('f') if ctrl => {
            app.model.ui.search_mode = true;
        }
        KeyCode::Char('/') => {
            app.model.ui.search_mode = true;
        }
        KeyCode::Esc => {
            if !app.model.browser.query().is_empty() {
                app.model.browser.clear_query();
            }
        }

        // Grid navigation
        KeyCode::Left => move_selection(app, GridMove::Left),
        KeyCode::Right => move_selection(app, GridMove::Right),
        KeyCode::Up => move_selection(app, GridMove::Up),
        KeyCode::Down => move_selection(app, GridMove::Down),
        KeyCode::Home => move_selection(app, GridMove::First),
        KeyCode::End => move_selection(app, GridMove::Last),
        KeyCode::Char('h') if vim_mode => move_selection(app, GridMove::Left),
        KeyCode::Char('l') if vim_mode => move_selection(app, GridMove::Right),
        KeyCode::Char('k') if vim_mode => move_selection(app, GridMove::Up),
        KeyCode::Char('j') if vim_mode => move_selection(app, GridMove::Down),
        KeyCode::Char('g') if vim_mode => {
            app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
        }
        KeyCode::Char('G') if vim_mode => move_selection(app, GridMove::Last),

        // Paging
        KeyCode::PageDown | KeyCode::Char(']') | KeyCode::Char('n') => {
            app.model.browser.next_page();
        }
        KeyCode::PageUp | KeyCode::Char('[') | KeyCode::Char('p') => {
            app.model.browser.previous_page();
        }

        // Export
        KeyCode::Enter | KeyCode::Char('d') => app.export_selected(),
        KeyCode::Char('y') => app.copy_selected_to_clipboard(),

        _ => {}
    }

    Ok(())
}

/// Keys while the search input has focus
fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            // Cancel: drop the query and leave the input
            app.model.browser.clear_query();
            app.model.ui.search_mode = false;
        }
        KeyCode::Enter => {
            // Accept: keep the query, give keys back to the grid
            app.model.ui.search_mode = false;
        }
        KeyCode::Backspace => {
            app.model.browser.pop_query_char();
        }
        KeyCode::Left => move_selection(app, GridMove::Left),
        KeyCode::Right => move_selection(app, GridMove::Right),
        KeyCode::Up => move_selection(app, GridMove::Up),
        KeyCode::Down => move_selection(app, GridMove::Down),
        KeyCode::PageDown => {
            app.model.browser.next_page();
        }
        KeyCode::PageUp => {
            app.model.browser.previous_page();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.browser.push_query_char(c);
        }
        _ => {}
    }
}

fn move_selection(app: &mut App, direction: GridMove) {
    let columns = app.model.ui.grid_columns;
    app.model.browser.move_selection(direction, columns);
}
