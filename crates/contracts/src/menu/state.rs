use std::sync::Arc;

use super::filter::{filter_menu, FilteredCategory, ALL_CATEGORIES};
use super::model::MenuDocument;
use crate::shared::text::normalize;

/// Where the menu document is in its one-shot lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded(Arc<MenuDocument>),
    /// Terminal: no retry, the menu region shows the apology message
    Failed,
}

/// Page-session UI state. The only mutable state of the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Normalized query; empty means "no search"
    pub query: String,
    /// Category name or [`ALL_CATEGORIES`]
    pub active_cat: String,
    pub data: LoadState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            query: String::new(),
            active_cat: ALL_CATEGORIES.to_string(),
            data: LoadState::Pending,
        }
    }
}

impl UiState {
    /// Store raw input as the query. Whitespace-only input clears it.
    /// Input is ignored until the document has loaded.
    /// Returns whether the effective query changed.
    pub fn set_query(&mut self, raw: &str) -> bool {
        if !self.is_loaded() {
            return false;
        }
        let query = normalize(raw.trim());
        if query == self.query {
            return false;
        }
        self.query = query;
        true
    }

    pub fn clear_query(&mut self) -> bool {
        self.set_query("")
    }

    pub fn select_category(&mut self, value: &str) {
        self.active_cat = value.to_string();
    }

    /// Accept the document. Later loads are ignored; the document is loaded once.
    pub fn set_loaded(&mut self, doc: MenuDocument) {
        if matches!(self.data, LoadState::Pending) {
            self.data = LoadState::Loaded(Arc::new(doc));
        }
    }

    pub fn set_failed(&mut self) {
        if matches!(self.data, LoadState::Pending) {
            self.data = LoadState::Failed;
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.data, LoadState::Loaded(_))
    }

    pub fn document(&self) -> Option<&MenuDocument> {
        match &self.data {
            LoadState::Loaded(doc) => Some(&**doc),
            _ => None,
        }
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Filter result for the current state; empty until the document is loaded.
    pub fn filtered(&self) -> Vec<FilteredCategory<'_>> {
        match self.document() {
            Some(doc) => filter_menu(doc, &self.query, &self.active_cat),
            None => Vec::new(),
        }
    }
}
