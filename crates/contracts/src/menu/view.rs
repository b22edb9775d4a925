//! Display tree for the menu region.
//!
//! `MenuView::build` is a pure function of the UI state and configuration.
//! The frontend renders the whole value in one swap, so the region is never
//! partially updated.

use super::badge::BadgeView;
use super::filter::{visible_item_count, FilteredCategory};
use super::model::Item;
use super::price::format_price;
use super::state::{LoadState, UiState};
use crate::shared::config::MenuConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum MenuView {
    Loading,
    LoadFailed { message: String },
    /// No item matched; one placeholder, no sections
    Empty { title: String, hint: String },
    Sections(Vec<SectionView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub name: String,
    pub note: Option<String>,
    pub items: Vec<ItemRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub name: String,
    pub desc: Option<String>,
    pub badges: Vec<BadgeView>,
    pub price: String,
}

impl ItemRow {
    fn from_item(item: &Item, currency: &str) -> Self {
        Self {
            name: item.name.clone(),
            desc: non_empty(item.desc.as_deref()),
            badges: item
                .badges
                .iter()
                .map(|b| BadgeView::from_label(b))
                .collect(),
            price: format_price(&item.price, currency),
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|v| !v.is_empty()).map(String::from)
}

impl MenuView {
    pub fn build(state: &UiState, config: &MenuConfig) -> Self {
        match &state.data {
            LoadState::Pending => MenuView::Loading,
            LoadState::Failed => MenuView::LoadFailed {
                message: config.messages.load_error.clone(),
            },
            LoadState::Loaded(_) => Self::from_filtered(&state.filtered(), config),
        }
    }

    pub fn from_filtered(result: &[FilteredCategory<'_>], config: &MenuConfig) -> Self {
        if visible_item_count(result) == 0 {
            return MenuView::Empty {
                title: config.messages.empty_title.clone(),
                hint: config.messages.empty_hint.clone(),
            };
        }

        let currency = config.format.currency.as_str();
        let sections = result
            .iter()
            .map(|filtered| SectionView {
                name: filtered.category.name.clone(),
                note: non_empty(filtered.category.note.as_deref()),
                items: filtered
                    .items
                    .iter()
                    .map(|item| ItemRow::from_item(item, currency))
                    .collect(),
            })
            .collect();
        MenuView::Sections(sections)
    }

    /// Number of rendered items; `None` while no document is available.
    pub fn visible_count(&self) -> Option<usize> {
        match self {
            MenuView::Loading | MenuView::LoadFailed { .. } => None,
            MenuView::Empty { .. } => Some(0),
            MenuView::Sections(sections) => Some(sections.iter().map(|s| s.items.len()).sum()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::badge::BadgeKind;
    use crate::menu::filter::tests::{category, item, sample_doc};
    use crate::menu::model::{MenuDocument, Price};

    fn loaded(doc: MenuDocument) -> UiState {
        let mut state = UiState::default();
        state.set_loaded(doc);
        state
    }

    fn section_names(view: &MenuView) -> Vec<&str> {
        match view {
            MenuView::Sections(sections) => sections.iter().map(|s| s.name.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn test_lifecycle_views() {
        let config = MenuConfig::default();
        let mut state = UiState::default();
        assert_eq!(MenuView::build(&state, &config), MenuView::Loading);

        state.set_failed();
        let view = MenuView::build(&state, &config);
        assert_eq!(
            view,
            MenuView::LoadFailed {
                message: config.messages.load_error.clone()
            }
        );
        assert_eq!(view.visible_count(), None);
    }

    #[test]
    fn test_search_end_to_end() {
        let config = MenuConfig::default();
        let mut state = loaded(sample_doc());
        state.set_query("hähnchen");

        let view = MenuView::build(&state, &config);
        assert_eq!(section_names(&view), vec!["Salate"]);
        let MenuView::Sections(sections) = &view else {
            panic!("expected sections");
        };
        assert_eq!(sections[0].items.len(), 1);
        assert_eq!(sections[0].items[0].name, "Caesar Salat");
        assert_eq!(sections[0].items[0].desc.as_deref(), Some("mit Hähnchen"));
        assert_eq!(sections[0].items[0].price, "8,00 €");
        assert_eq!(view.visible_count(), Some(1));
    }

    #[test]
    fn test_tab_selection_shows_only_that_category() {
        let config = MenuConfig::default();
        let mut state = loaded(sample_doc());
        state.select_category("Salate");
        assert_eq!(section_names(&MenuView::build(&state, &config)), vec!["Salate"]);
    }

    #[test]
    fn test_zero_matches_single_placeholder() {
        let config = MenuConfig::default();
        let mut state = loaded(sample_doc());
        state.set_query("pizza");

        let view = MenuView::build(&state, &config);
        assert_eq!(
            view,
            MenuView::Empty {
                title: "Keine Treffer.".into(),
                hint: config.messages.empty_hint.clone(),
            }
        );
        assert!(section_names(&view).is_empty());
        assert_eq!(view.visible_count(), Some(0));
    }

    #[test]
    fn test_empty_document_renders_placeholder() {
        let view = MenuView::build(&loaded(MenuDocument::default()), &MenuConfig::default());
        assert!(matches!(view, MenuView::Empty { .. }));
    }

    #[test]
    fn test_rows_carry_note_badges_and_prices() {
        let mut soup = item("Gulaschsuppe", Some(""), 5.9);
        soup.badges = vec!["Scharf".into(), "hausgemacht".into()];
        let mut special = item("Tagessuppe", None, 0.0);
        special.price = Price::Label("ab 4,50 €".into());
        let mut cat = category("Suppen", vec![soup, special]);
        cat.note = Some("Mit Brot serviert".into());

        let view = MenuView::build(
            &loaded(MenuDocument {
                categories: vec![cat],
            }),
            &MenuConfig::default(),
        );
        let MenuView::Sections(sections) = view else {
            panic!("expected sections");
        };
        let section = &sections[0];
        assert_eq!(section.note.as_deref(), Some("Mit Brot serviert"));

        let row = &section.items[0];
        assert_eq!(row.desc, None);
        assert_eq!(row.price, "5,90 €");
        let kinds: Vec<BadgeKind> = row.badges.iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![BadgeKind::Hot, BadgeKind::Plain]);
        assert_eq!(section.items[1].price, "ab 4,50 €");
    }

    #[test]
    fn test_bundled_sample_menu() {
        let doc = MenuDocument::from_json(include_str!("../../../frontend/data/menu.json"))
            .expect("sample menu must parse");
        let config = MenuConfig::default();
        let mut state = loaded(doc);
        assert_eq!(
            section_names(&MenuView::build(&state, &config)),
            vec!["Suppen", "Salate", "Hauptgerichte", "Desserts"]
        );

        state.set_query("kase");
        let view = MenuView::build(&state, &config);
        assert_eq!(section_names(&view), vec!["Hauptgerichte"]);
        assert_eq!(view.visible_count(), Some(1));

        state.set_query("desserts");
        assert_eq!(MenuView::build(&state, &config).visible_count(), Some(2));
    }
}
