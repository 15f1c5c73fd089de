//! Browser Model
//!
//! Holds the search query, the current page, and the grid selection, and
//! derives the filtered view and page slice from them on demand. Filtering
//! and paging stay pure functions of (catalog, state); this struct only owns
//! the state and applies the transitions.

use std::sync::Arc;

use crate::catalog::{Catalog, EmojiRecord};
use crate::logic::navigation::{clamp_selection, move_selection, GridMove};
use crate::logic::pagination::{self, PageSlice};
use crate::logic::search::{self, FilteredView};

/// Query text and 1-based page number
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub page: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BrowserModel {
    catalog: Arc<Catalog>,
    search: SearchState,
    page_size: usize,
    /// Index into the current page's items
    selected: Option<usize>,
}

impl BrowserModel {
    pub fn new(catalog: Arc<Catalog>, page_size: usize) -> Self {
        let mut model = Self {
            catalog,
            search: SearchState::default(),
            page_size: page_size.max(1),
            selected: None,
        };
        model.reset_selection();
        model
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn query(&self) -> &str {
        &self.search.query
    }

    pub fn page(&self) -> usize {
        self.search.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Catalog records matching the current query
    pub fn view(&self) -> FilteredView<'_> {
        search::filter(self.catalog.records(), &self.search.query)
    }

    /// The page currently on screen
    pub fn current_page(&self) -> PageSlice<'_> {
        pagination::paginate(&self.view(), self.search.page, self.page_size)
    }

    /// Replace the query. A changed query always goes back to page 1.
    pub fn set_query(&mut self, query: &str) -> PageSlice<'_> {
        if query != self.search.query {
            self.search.query = query.to_string();
            self.search.page = 1;
            self.reset_selection();
            log::debug!(
                "Query changed to {:?}: {} matches",
                self.search.query,
                self.view().len()
            );
        }
        self.current_page()
    }

    pub fn push_query_char(&mut self, c: char) -> PageSlice<'_> {
        let mut query = self.search.query.clone();
        query.push(c);
        self.set_query(&query)
    }

    pub fn pop_query_char(&mut self) -> PageSlice<'_> {
        let mut query = self.search.query.clone();
        query.pop();
        self.set_query(&query)
    }

    pub fn clear_query(&mut self) -> PageSlice<'_> {
        self.set_query("")
    }

    /// Move to the next page, stopping at the last one
    pub fn next_page(&mut self) -> PageSlice<'_> {
        let total = pagination::total_pages(self.view().len(), self.page_size);
        self.set_page(pagination::next_page(self.search.page, total))
    }

    /// Move to the previous page, stopping at the first one
    pub fn previous_page(&mut self) -> PageSlice<'_> {
        self.set_page(pagination::previous_page(self.search.page))
    }

    fn set_page(&mut self, page: usize) -> PageSlice<'_> {
        if page != self.search.page {
            self.search.page = page;
            self.reset_selection();
        }
        self.current_page()
    }

    fn reset_selection(&mut self) {
        let len = self.current_page().items.len();
        self.selected = clamp_selection(None, len);
    }

    /// Move the grid selection within the current page
    pub fn move_selection(&mut self, direction: GridMove, columns: usize) {
        let len = self.current_page().items.len();
        self.selected = move_selection(self.selected, len, columns, direction);
    }

    /// Record under the grid selection
    pub fn selected_record(&self) -> Option<&EmojiRecord> {
        let index = self.selected?;
        self.current_page().items.get(index).copied()
    }
}
