use contracts::menu::tabs::{category_tabs, CategoryTab};
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::menu::state::MenuController;

/// Tab bar: "all" plus one tab per category. Empty until the menu is loaded.
#[component]
pub fn CategoryTabs(controller: MenuController, #[prop(into)] all_label: String) -> impl IntoView {
    let stuck = RwSignal::new(false);
    let sentinel_ref = NodeRef::<html::Div>::new();

    let observer_initialized = StoredValue::new(false);
    Effect::new(move |_| {
        if observer_initialized.get_value() {
            return;
        }
        if let Some(sentinel) = sentinel_ref.get() {
            observer_initialized.set_value(true);
            observe_sentinel(&sentinel, stuck);
        }
    });

    let tabs = Memo::new(move |_| {
        controller.state.with(|s| {
            s.document()
                .map(|doc| category_tabs(doc, &all_label))
                .unwrap_or_default()
        })
    });

    view! {
        <div id="cats-sentinel" class="cats-sentinel" aria-hidden="true" node_ref=sentinel_ref></div>
        <nav id="menu-cats" class="menu-cats" class:stuck=move || stuck.get() role="tablist">
            <For each=move || tabs.get() key=|tab| tab.value.clone() let:tab>
                <CategoryTabLink controller=controller tab=tab />
            </For>
        </nav>
    }
}

#[component]
fn CategoryTabLink(controller: MenuController, tab: CategoryTab) -> impl IntoView {
    let tab_for_active = tab.clone();
    let is_active =
        Memo::new(move |_| controller.state.with(|s| tab_for_active.is_active(&s.active_cat)));

    let value = tab.value.clone();
    let on_click = move |_| controller.select_category(&value);

    view! {
        <a
            href="#speisekarte"
            role="tab"
            class:active=is_active
            aria-selected=move || if is_active.get() { "true" } else { "false" }
            tabindex=move || if is_active.get() { "0" } else { "-1" }
            on:click=on_click
        >
            {tab.label}
        </a>
    }
}

/// Toggle `stuck` once the sentinel has scrolled completely out of view.
fn observe_sentinel(sentinel: &web_sys::Element, stuck: RwSignal<bool>) {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                stuck.set(entry.intersection_ratio() == 0.0);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin("-64px 0px 0px 0px");
    options.set_threshold(&js_sys::Array::of2(&JsValue::from(0.0), &JsValue::from(1.0)));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(sentinel);
            callback.forget();
        }
        // Sticky shadow is cosmetic; carry on without it
        Err(e) => log::debug!("IntersectionObserver unavailable: {:?}", e),
    }
}
