//! Lightbox for figure, feature and gallery images on the host page.
//!
//! Independent of the menu: it only listens to document-level clicks and
//! keydowns and keeps a single image slot.

use contracts::shared::popup::{PopupState, PopupTrigger, ANCHOR_SELECTOR, IMAGE_SELECTOR};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};

pub const POPUP_ELEMENT_ID: &str = "imagePopup";

#[derive(Clone, Copy)]
pub struct ImagePopupService {
    state: RwSignal<PopupState>,
}

impl ImagePopupService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(PopupState::default()),
        }
    }

    pub fn show(&self, src: String) {
        self.state.update(|s| s.show(src));
    }

    pub fn hide(&self) {
        self.state.update(|s| s.hide());
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }

    fn open_for(&self, trigger: &PopupTrigger) {
        self.state.maybe_update(|s| s.open_for(trigger));
    }
}

impl Default for ImagePopupService {
    fn default() -> Self {
        Self::new()
    }
}

/// Overlay element. Clicking the backdrop or the image closes it.
#[component]
pub fn ImagePopup() -> impl IntoView {
    let popup = use_context::<ImagePopupService>().unwrap_or_default();

    Effect::new(move |_| {
        register_listeners(popup);
    });

    let src = move || popup.state.with(|s| s.src().unwrap_or_default().to_string());

    view! {
        <div
            id=POPUP_ELEMENT_ID
            class="image-popup"
            style:display=move || if popup.is_open() { "flex" } else { "none" }
            on:click=move |_| popup.hide()
        >
            <img src=src alt="" />
        </div>
    }
}

/// Escape closes; clicks on figure/feature links and images open.
fn register_listeners(popup: ImagePopupService) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if event.key() == "Escape" {
            popup.hide();
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    let _ = document
        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();

    let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if let Some(trigger) = resolve_trigger(&target) {
            event.prevent_default();
            popup.open_for(&trigger);
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

/// Anchors take priority over images.
fn resolve_trigger(target: &Element) -> Option<PopupTrigger> {
    if let Ok(Some(anchor)) = target.closest(ANCHOR_SELECTOR) {
        let nested_img_src = anchor
            .query_selector("img")
            .ok()
            .flatten()
            .and_then(|img| img.get_attribute("src"));
        return Some(PopupTrigger::Anchor {
            href: anchor.get_attribute("href"),
            nested_img_src,
        });
    }
    if let Ok(Some(img)) = target.closest(IMAGE_SELECTOR) {
        return Some(PopupTrigger::Image {
            src: img.get_attribute("src"),
        });
    }
    None
}
