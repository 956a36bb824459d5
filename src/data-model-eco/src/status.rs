use serde::{Deserialize, Serialize};

use crate::connection::ConnectionResult;

pub const HEADING: &str = "🚁 EcoDrone - Drone Management System";
pub const CHECKING_TEXT: &str = "Checking...";
pub const CONNECTED_TEXT: &str = "✅ Backend Connected!";
pub const BACKEND_LABEL: &str = "Backend: Django on Cloud Run";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    /// Probe still in flight.
    Orange,
    Green,
    Red,
}

impl StatusColor {
    /// CSS color keyword.
    pub fn css_name(&self) -> &'static str {
        match self {
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Red => "red",
        }
    }
}

/// What the page says about the backend. Green iff the last probe succeeded,
/// red iff it failed, orange while it is pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendStatus {
    pub text: String,
    pub color: StatusColor,
}

impl BackendStatus {
    pub fn checking() -> Self {
        Self {
            text: CHECKING_TEXT.to_string(),
            color: StatusColor::Orange,
        }
    }

    pub fn from_result(result: &ConnectionResult) -> Self {
        if result.success {
            Self {
                text: CONNECTED_TEXT.to_string(),
                color: StatusColor::Green,
            }
        } else {
            Self {
                text: format!("❌ Backend Error: {}", result.message_or_default()),
                color: StatusColor::Red,
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        self.color == StatusColor::Green
    }
}

impl Default for BackendStatus {
    fn default() -> Self {
        Self::checking()
    }
}

/// One line of the "System Status" list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusItem {
    pub text: String,
    /// `None` renders in the page's default color.
    pub color: Option<StatusColor>,
}

/// Everything the status page shows. The frontend label names where the page is served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPage {
    pub backend: BackendStatus,
    pub frontend_label: String,
    /// Raw configured API URL; the fallback is not shown here.
    pub api_url: Option<String>,
}

impl StatusPage {
    pub fn new(frontend_label: impl Into<String>, api_url: Option<&str>) -> Self {
        Self {
            backend: BackendStatus::checking(),
            frontend_label: frontend_label.into(),
            api_url: api_url.map(str::trim).filter(|url| !url.is_empty()).map(str::to_string),
        }
    }

    pub fn heading(&self) -> &'static str {
        HEADING
    }

    /// Records a resolved probe.
    pub fn apply(&mut self, result: &ConnectionResult) {
        self.backend = BackendStatus::from_result(result);
    }

    pub fn items(&self) -> Vec<StatusItem> {
        let backend_mark = if self.backend.is_connected() { "✅" } else { "❌" };
        vec![
            StatusItem {
                text: format!("✅ Frontend: {}", self.frontend_label),
                color: None,
            },
            StatusItem {
                text: format!("{} {}", backend_mark, BACKEND_LABEL),
                color: Some(self.backend.color),
            },
            StatusItem {
                text: format!("🔗 API URL: {}", self.api_url.as_deref().unwrap_or("Not set")),
                color: None,
            },
        ]
    }
}
