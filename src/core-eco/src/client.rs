use data_model_eco::{ApiBaseUrl, ConnectionResult};
use reqwest::{Client, Response, header::CONTENT_TYPE};
use tracing::{debug, warn};

use crate::errors::Error;

/// HTTP client for the EcoDrone backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    api_base_url: ApiBaseUrl,
}

impl BackendClient {
    pub fn new(client: Client, api_base_url: ApiBaseUrl) -> Self {
        Self { client, api_base_url }
    }

    /// Default `reqwest` client against the base URL from `API_URL`.
    pub fn from_env() -> Self {
        Self::new(Client::new(), ApiBaseUrl::from_env())
    }

    pub fn api_base_url(&self) -> &ApiBaseUrl {
        &self.api_base_url
    }

    async fn get(&self, endpoint: &str) -> Result<Response, Error> {
        let url = url::Url::parse(endpoint)?;
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        debug!("GET {} -> {}", endpoint, response.status());
        Ok(response)
    }

    /// Liveness probe: `GET {base}/admin/`. Any 2xx counts as alive; the body is ignored.
    pub async fn try_probe_backend(&self) -> Result<(), Error> {
        let response = self.get(&self.api_base_url.admin_url()).await?;
        if !response.status().is_success() {
            return Err(Error::UnexpectedStatus(response.status()));
        }
        Ok(())
    }

    /// `GET {base}/user/`, parsed as unvalidated JSON. Non-2xx responses are errors.
    pub async fn try_fetch_users(&self) -> Result<serde_json::Value, Error> {
        let response = self.get(&self.api_base_url.users_url()).await?;
        if !response.status().is_success() {
            return Err(Error::UnexpectedStatus(response.status()));
        }
        response.json::<serde_json::Value>().await.map_err(Error::InvalidBody)
    }

    /// Same as `try_probe_backend`, folded into a `ConnectionResult`. Never fails.
    pub async fn probe_backend(&self) -> ConnectionResult {
        match self.try_probe_backend().await {
            Ok(()) => ConnectionResult::connected(),
            Err(error) => {
                warn!("Backend probe against {} failed: {}", self.api_base_url, error);
                error.into()
            }
        }
    }

    /// Same as `try_fetch_users`, folded into a `ConnectionResult`. Never fails.
    pub async fn fetch_users(&self) -> ConnectionResult {
        match self.try_fetch_users().await {
            Ok(users) => ConnectionResult::with_data(users),
            Err(error) => {
                warn!("Fetching users from {} failed: {}", self.api_base_url, error);
                error.into()
            }
        }
    }
}
