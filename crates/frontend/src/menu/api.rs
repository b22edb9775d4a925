use contracts::menu::MenuDocument;
use contracts::shared::error::LoadError;
use gloo_net::http::Request;

use crate::shared::api_utils::{no_store_url, NO_STORE_HEADERS};

/// Fetch the menu document once, bypassing caches. No retry.
pub async fn fetch_menu(path: &str) -> Result<MenuDocument, LoadError> {
    let mut request = Request::get(&no_store_url(path));
    for (name, value) in NO_STORE_HEADERS {
        request = request.header(name, value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    response
        .json::<MenuDocument>()
        .await
        .map_err(|e| LoadError::Parse(e.to_string()))
}
