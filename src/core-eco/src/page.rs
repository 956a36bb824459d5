//! Terminal rendition of the status page.

use data_model_eco::{StatusColor, StatusPage};
use tracing::info;

use crate::client::BackendClient;

/// Frontend label shown when the page is rendered by the CLI.
pub const TERMINAL_FRONTEND: &str = "Terminal client";

/// Probes the backend once and records the outcome on the page.
/// Returns true if the backend is connected.
pub async fn check_backend(client: &BackendClient, page: &mut StatusPage) -> bool {
    info!("Checking backend at {}", client.api_base_url());
    let result = client.probe_backend().await;
    page.apply(&result);
    page.backend.is_connected()
}

fn tag(color: Option<StatusColor>) -> String {
    match color {
        Some(color) => format!("[{}] ", color.css_name()),
        None => String::new(),
    }
}

pub fn render_text(page: &StatusPage) -> String {
    let mut out = String::new();
    out.push_str(page.heading());
    out.push_str("\n\n");
    out.push_str(&tag(Some(page.backend.color)));
    out.push_str(&page.backend.text);
    out.push_str("\n\nSystem Status:\n");
    for item in page.items() {
        out.push_str("  - ");
        out.push_str(&tag(item.color));
        out.push_str(&item.text);
        out.push('\n');
    }
    out
}
