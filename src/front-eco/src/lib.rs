pub mod api;
pub mod render;

use data_model_eco::{ConnectionResult, StatusPage};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, console};

/// Where this page is served from.
pub const FRONTEND_LABEL: &str = "Deployed on Firebase";

const APP_ID: &str = "app";

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console::log_1(&"WASM module initialized!".into());

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    let mut page = StatusPage::new(FRONTEND_LABEL, api::configured_api_url());
    mount(&document, &page)?;

    // Probe exactly once. If the fetch never settles the page stays in "Checking...".
    spawn_local(async move {
        let result = api::probe_backend().await;
        if !result.success {
            console::warn_1(&format!("Backend check failed: {}", result.message_or_default()).into());
        }
        page.apply(&result);
        if let Err(e) = redraw(&document, &page) {
            console::error_1(&e);
        }
    });

    Ok(())
}

/// Fetches the user list for callers on the JS side, as a plain `{success, data|message}` object.
#[wasm_bindgen(js_name = getUsers)]
pub async fn get_users() -> Result<JsValue, JsValue> {
    let result: ConnectionResult = api::fetch_users().await;
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

fn mount(document: &Document, page: &StatusPage) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document should have a body"))?;

    let container = document.create_element("div")?;
    container.set_id(APP_ID);
    container.set_class_name("App");
    body.append_child(&container)?;

    redraw(document, page)
}

fn redraw(document: &Document, page: &StatusPage) -> Result<(), JsValue> {
    let container = document
        .get_element_by_id(APP_ID)
        .ok_or_else(|| JsValue::from_str("app container should exist"))?;
    container.set_inner_html(&render::status_page_html(page));
    Ok(())
}
