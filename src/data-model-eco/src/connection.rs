use serde::{Deserialize, Serialize};

/// Message carried by a successful liveness probe.
pub const CONNECTED_MESSAGE: &str = "Backend connected!";

/// Uniform outcome of a backend call: `{success, message}` or `{success, data}`.
/// Absent fields are left out of the JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ConnectionResult {
    pub fn connected() -> Self {
        Self {
            success: true,
            message: Some(CONNECTED_MESSAGE.to_string()),
            data: None,
        }
    }

    pub fn with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Failure for a response that arrived with a non-2xx status code.
    pub fn status_failure(status: u16) -> Self {
        Self::failure(format!("Status: {}", status))
    }

    pub fn message_or_default(&self) -> &str {
        self.message.as_deref().unwrap_or("Unknown error")
    }
}
