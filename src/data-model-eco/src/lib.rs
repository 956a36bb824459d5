pub mod api_url;
pub mod connection;
pub mod status;

pub use api_url::{API_URL_ENV, ApiBaseUrl, ApiUrlError, DEFAULT_API_URL};
pub use connection::ConnectionResult;
pub use status::{BackendStatus, StatusColor, StatusItem, StatusPage};
