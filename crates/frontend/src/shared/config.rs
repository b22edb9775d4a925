use contracts::shared::config::{parse_config, MenuConfig};

/// Id of the optional `<script type="application/toml">` block on the host page
pub const CONFIG_ELEMENT_ID: &str = "menu-config";

/// Read the host page's override block, falling back to the built-in defaults.
pub fn load_page_config() -> MenuConfig {
    let contents = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(contents) = contents else {
        log::debug!("No #{} block, using default configuration", CONFIG_ELEMENT_ID);
        return MenuConfig::default();
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::info!("Loaded configuration from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            log::error!("Invalid #{} block, using defaults: {}", CONFIG_ELEMENT_ID, e);
            MenuConfig::default()
        }
    }
}
