use data_model_eco::{StatusItem, StatusPage};

/// Markup for the whole page. The backend line and the status paragraph take the backend color.
pub fn status_page_html(page: &StatusPage) -> String {
    let mut html = String::from(r#"<header class="App-header">"#);
    html.push_str(&format!("<h1>{}</h1>", escape_html(page.heading())));
    html.push_str(&format!(
        r#"<p id="backend-status" style="color: {}; font-size: 1.2em; font-weight: bold;">{}</p>"#,
        page.backend.color.css_name(),
        escape_html(&page.backend.text)
    ));
    html.push_str(r#"<div style="margin-top: 20px; text-align: left; max-width: 600px;">"#);
    html.push_str("<h3>System Status:</h3>");
    html.push_str("<ul>");
    for item in page.items() {
        html.push_str(&item_html(&item));
    }
    html.push_str("</ul>");
    html.push_str("</div>");
    html.push_str("</header>");
    html
}

fn item_html(item: &StatusItem) -> String {
    match item.color {
        Some(color) => format!(r#"<li style="color: {};">{}</li>"#, color.css_name(), escape_html(&item.text)),
        None => format!("<li>{}</li>", escape_html(&item.text)),
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
