pub mod app;
pub mod layout;
pub mod menu;
pub mod shared;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

/// Host element the widget mounts into; `<body>` when absent
pub const HOST_ELEMENT_ID: &str = "speisekarte-app";

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = shared::config::load_page_config();

    let host = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(HOST_ELEMENT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match host {
        Some(host) => {
            log::debug!("Mounting into #{}", HOST_ELEMENT_ID);
            leptos::mount::mount_to(host, move || view! { <App config=config /> })
                .forget();
        }
        None => {
            log::debug!("#{} not found, mounting into <body>", HOST_ELEMENT_ID);
            leptos::mount::mount_to_body(move || view! { <App config=config /> });
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
