use crate::layout::{ImagePopup, ImagePopupService};
use crate::menu::ui::MenuPage;
use contracts::shared::config::MenuConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: MenuConfig) -> impl IntoView {
    // Configuration is read once at start-up and shared via context.
    provide_context(config);

    // The lightbox is page-wide and independent of the menu.
    provide_context(ImagePopupService::new());

    view! {
        <MenuPage />
        <ImagePopup />
    }
}
