use std::fmt;

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "API_URL";

/// Used when `API_URL` is unset or empty.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Liveness probe endpoint, relative to the base URL.
pub const ADMIN_PATH: &str = "/admin/";

/// User collection endpoint, relative to the base URL.
pub const USERS_PATH: &str = "/user/";

#[derive(Debug, thiserror::Error)]
pub enum ApiUrlError {
    #[error("Not a valid API URL '{url}': {source}")]
    Invalid {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),
}

/// Root address that relative API paths are joined onto. Never ends with a `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    /// Uses the configured value when it is set and non-empty, `DEFAULT_API_URL` otherwise.
    /// No validation happens here: a malformed value surfaces as a request failure.
    pub fn resolve(configured: Option<&str>) -> Self {
        match configured.map(str::trim) {
            Some(value) if !value.is_empty() => Self(value.trim_end_matches('/').to_string()),
            _ => Self(DEFAULT_API_URL.to_string()),
        }
    }

    /// Resolves from the `API_URL` environment variable.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(API_URL_ENV).ok().as_deref())
    }

    /// Strict variant of `resolve` for user-supplied values (e.g. command line flags).
    pub fn parse(value: &str) -> Result<Self, ApiUrlError> {
        let parsed = url::Url::parse(value.trim()).map_err(|source| ApiUrlError::Invalid {
            url: value.to_string(),
            source,
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(Self::resolve(Some(value))),
            other => Err(ApiUrlError::UnsupportedScheme(other.to_string())),
        }
    }

    /// `path` is expected to start with a `/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }

    pub fn admin_url(&self) -> String {
        self.endpoint(ADMIN_PATH)
    }

    pub fn users_url(&self) -> String {
        self.endpoint(USERS_PATH)
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
