use contracts::menu::view::MenuView;
use contracts::shared::config::MenuConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use super::list::MenuList;
use super::search::MenuSearch;
use super::tabs::CategoryTabs;
use crate::menu::api::fetch_menu;
use crate::menu::state::MenuController;

/// The whole menu widget: search, result counter, tabs and the menu region.
///
/// Owns the page-session [`MenuController`]; nothing else mutates the UI state.
#[component]
pub fn MenuPage() -> impl IntoView {
    let config = use_context::<MenuConfig>().unwrap_or_default();
    let controller = MenuController::new(config.search.debounce_ms);
    let state = controller.state;

    let path = config.data.path.clone();
    spawn_local(async move {
        match fetch_menu(&path).await {
            Ok(doc) => {
                log::info!(
                    "Speisekarte geladen: {} Kategorien, {} Gerichte",
                    doc.categories.len(),
                    doc.item_count()
                );
                state.update(|s| s.set_loaded(doc));
            }
            Err(e) => {
                log::error!("Fehler beim Laden der Speisekarte: {}", e);
                state.update(|s| s.set_failed());
            }
        }
    });

    register_shortcuts(controller);

    let render_config = config.clone();
    let menu = Memo::new(move |_| state.with(|s| MenuView::build(s, &render_config)));

    let labels = config.labels.clone();
    let result_count = move || {
        menu.with(|m| {
            m.visible_count()
                .map(|n| labels.result_count(n))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="speisekarte">
            <div class="menu-toolbar">
                <MenuSearch
                    controller=controller
                    placeholder=config.labels.search_placeholder.clone()
                    clear_title=config.labels.clear_title.clone()
                />
                <span id="menu-result-count" class="menu-result-count" aria-live="polite">
                    {result_count}
                </span>
            </div>
            <CategoryTabs controller=controller all_label=config.labels.all_tab.clone() />
            <MenuList menu=menu />
        </div>
    }
}

/// `/` focuses the search box unless an input already has focus;
/// Escape inside the search box clears it.
fn register_shortcuts(controller: MenuController) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let active_doc = document.clone();
    let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        match event.key().as_str() {
            "/" => {
                let typing = active_doc
                    .active_element()
                    .map(|el| el.tag_name() == "INPUT")
                    .unwrap_or(false);
                if !typing {
                    event.prevent_default();
                    controller.focus_search();
                }
            }
            "Escape" if controller.search_has_focus() => controller.clear_and_blur(),
            _ => {}
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);

    let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
