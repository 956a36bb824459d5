use data_model_eco::ConnectionResult;
use reqwest::StatusCode;

/// Failures of a single backend call.
#[derive(Debug)]
pub enum Error {
    /// The configured base URL does not produce a valid endpoint URL.
    InvalidUrl(url::ParseError),

    /// Network-level failure: DNS, connection refused, timeout, ...
    HttpError(reqwest::Error),

    /// The backend answered with a non-2xx status.
    UnexpectedStatus(StatusCode),

    /// The response body is not valid JSON.
    InvalidBody(reqwest::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUrl(e) => write!(f, "Invalid URL: {}", e),
            Self::HttpError(e) => write!(f, "HTTP error: {}", e),
            Self::UnexpectedStatus(status) => write!(f, "Status: {}", status.as_u16()),
            Self::InvalidBody(e) => write!(f, "Invalid response body: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<url::ParseError> for Error {
    fn from(error: url::ParseError) -> Self {
        Self::InvalidUrl(error)
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::HttpError(error)
    }
}

/// Failed calls carry the underlying error's own message, unprefixed.
impl From<Error> for ConnectionResult {
    fn from(error: Error) -> Self {
        match error {
            Error::UnexpectedStatus(status) => ConnectionResult::status_failure(status.as_u16()),
            Error::InvalidUrl(e) => ConnectionResult::failure(e.to_string()),
            Error::HttpError(e) | Error::InvalidBody(e) => ConnectionResult::failure(e.to_string()),
        }
    }
}
