use leptos::prelude::*;

use crate::menu::state::MenuController;
use crate::shared::icons::icon;

/// Search box with clear button. Keystrokes go through the controller's
/// debouncer; the clear button applies immediately.
#[component]
pub fn MenuSearch(
    controller: MenuController,
    #[prop(into)] placeholder: String,
    #[prop(into)] clear_title: String,
) -> impl IntoView {
    let aria_label = placeholder.clone();
    let clear_label = clear_title.clone();

    view! {
        <div class="menu-search" role="search">
            {icon("search")}
            <input
                id="menu-search"
                type="search"
                autocomplete="off"
                node_ref=controller.input
                placeholder=placeholder
                aria-label=aria_label
                on:input=move |ev| controller.on_input(event_target_value(&ev))
            />
            <button
                id="menu-search-clear"
                type="button"
                class="menu-search__clear"
                title=clear_title
                aria-label=clear_label
                on:click=move |_| controller.clear_and_focus()
            >
                {icon("x")}
            </button>
        </div>
    }
}
