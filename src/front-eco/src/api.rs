use data_model_eco::{ApiBaseUrl, ConnectionResult};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

// ============================================================================
// Configuration
// ============================================================================

/// Backend URL baked in at build time from `API_URL`, if one was given.
pub fn configured_api_url() -> Option<&'static str> {
    option_env!("ECO_API_URL")
}

fn api_base_url() -> ApiBaseUrl {
    ApiBaseUrl::resolve(configured_api_url())
}

// ============================================================================
// Errors
// ============================================================================

enum FetchError {
    /// Response arrived with a non-2xx status.
    Status(u16),
    /// Anything the browser threw: network failure, CORS, unparseable JSON.
    Js(JsValue),
}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        Self::Js(value)
    }
}

impl From<serde_wasm_bindgen::Error> for FetchError {
    fn from(error: serde_wasm_bindgen::Error) -> Self {
        Self::Js(error.into())
    }
}

impl From<FetchError> for ConnectionResult {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::Status(status) => ConnectionResult::status_failure(status),
            FetchError::Js(value) => ConnectionResult::failure(js_error_message(&value)),
        }
    }
}

/// The `message` of a thrown JS `Error`, or the best string form of any other value.
fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

// ============================================================================
// API Functions
// ============================================================================

async fn get(url: &str) -> Result<Response, FetchError> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;

    let opts = &mut RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;
    Ok(resp)
}

/// Liveness probe against `{base}/admin/`. Never fails: errors become a failed result.
pub async fn probe_backend() -> ConnectionResult {
    let url = api_base_url().admin_url();
    match get(&url).await {
        Ok(resp) if resp.ok() => ConnectionResult::connected(),
        Ok(resp) => FetchError::Status(resp.status()).into(),
        Err(error) => error.into(),
    }
}

async fn try_fetch_users() -> Result<serde_json::Value, FetchError> {
    let resp = get(&api_base_url().users_url()).await?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let data: serde_json::Value = serde_wasm_bindgen::from_value(json)?;

    Ok(data)
}

/// User list from `{base}/user/`. Never fails: errors become a failed result.
pub async fn fetch_users() -> ConnectionResult {
    match try_fetch_users().await {
        Ok(users) => ConnectionResult::with_data(users),
        Err(error) => error.into(),
    }
}
