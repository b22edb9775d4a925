//! Two-axis menu filter: category tab or free-text query.
//!
//! A non-empty query overrides the tab selection. A category whose name
//! matches the query keeps all of its items.

use super::model::{Category, Item, MenuDocument};
use crate::shared::text::normalize;

/// Sentinel for "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// One category of the filter result, borrowing from the document.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredCategory<'a> {
    pub category: &'a Category,
    pub items: Vec<&'a Item>,
}

/// Filter `doc` by `query` and `active_cat`, preserving document order.
///
/// `query` is expected trimmed; it is normalized here so raw user text is
/// accepted as well. Categories with no remaining items are dropped.
pub fn filter_menu<'a>(
    doc: &'a MenuDocument,
    query: &str,
    active_cat: &str,
) -> Vec<FilteredCategory<'a>> {
    let q = normalize(query);
    let has_query = !q.is_empty();

    doc.categories
        .iter()
        .filter(|cat| has_query || active_cat == ALL_CATEGORIES || active_cat == cat.name)
        .filter_map(|cat| {
            let cat_matches_query = has_query && normalize(&cat.name).contains(&q);
            let items: Vec<&Item> = cat
                .items
                .iter()
                .filter(|item| !has_query || cat_matches_query || item_matches(item, &q))
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(FilteredCategory {
                    category: cat,
                    items,
                })
            }
        })
        .collect()
}

fn item_matches(item: &Item, q: &str) -> bool {
    normalize(&item.name).contains(q) || normalize(item.desc.as_deref().unwrap_or("")).contains(q)
}

/// Total number of items across a filter result.
pub fn visible_item_count(result: &[FilteredCategory<'_>]) -> usize {
    result.iter().map(|c| c.items.len()).sum()
}
