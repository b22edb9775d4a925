//! Category tab bar model.

use super::filter::ALL_CATEGORIES;
use super::model::MenuDocument;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTab {
    pub label: String,
    /// Value written to `active_cat` when the tab is activated
    pub value: String,
}

impl CategoryTab {
    pub fn is_all(&self) -> bool {
        self.value == ALL_CATEGORIES
    }

    /// Case-insensitive against the label; the sentinel always selects the "all" tab.
    pub fn is_active(&self, active_cat: &str) -> bool {
        let active = active_cat.to_lowercase();
        (self.is_all() && active == ALL_CATEGORIES) || self.label.to_lowercase() == active
    }
}

/// Leading "all" tab, then one tab per category in document order.
pub fn category_tabs(doc: &MenuDocument, all_label: &str) -> Vec<CategoryTab> {
    std::iter::once(CategoryTab {
        label: all_label.to_string(),
        value: ALL_CATEGORIES.to_string(),
    })
    .chain(doc.categories.iter().map(|c| CategoryTab {
        label: c.name.clone(),
        value: c.name.clone(),
    }))
    .collect()
}
