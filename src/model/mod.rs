//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application:
//!
//! - **BrowserModel**: Catalog, search query, page, grid selection
//! - **UiModel**: Preferences, search input focus, toasts
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state
//! - No services: All I/O lives in the binary's `App`
//! - Pure accessors: Helper methods are side-effect free

pub mod browser;
pub mod ui;

use std::sync::Arc;

pub use browser::{BrowserModel, SearchState};
pub use ui::{UiModel, VimCommandState};

use crate::catalog::Catalog;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Search and pagination state over the catalog
    pub browser: BrowserModel,

    /// UI preferences and popups
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(catalog: Arc<Catalog>, page_size: usize, vim_mode: bool) -> Self {
        Self {
            browser: BrowserModel::new(catalog, page_size),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmojiRecord;

    fn model() -> Model {
        let catalog = Catalog::from_records(vec![EmojiRecord::new("🐶", "dog face", &[])]);
        Model::new(Arc::new(catalog), 30, false)
    }

    #[test]
    fn test_model_creation() {
        let model = model();
        assert_eq!(model.browser.catalog().len(), 1);
        assert_eq!(model.browser.page(), 1);
        assert!(!model.ui.vim_mode);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = model();
        let cloned = model.clone();
        assert_eq!(cloned.browser.search(), model.browser.search());
    }

    #[test]
    fn test_toast() {
        let mut model = model();
        model.show_toast("Test".to_string());
        assert!(model.ui.toast_message.is_some());
        model.dismiss_toast();
        assert!(model.ui.toast_message.is_none());
    }
}
