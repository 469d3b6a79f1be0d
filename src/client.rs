// Passenger API client
//
// Thin wrapper over reqwest for the three passenger endpoints:
// - GET  /passengers/?search_value=<text>  (name filter, applied server-side)
// - GET  /passengers/{id}
// - POST /passengers/
//
// Every failure is returned as a typed FetchError; nothing is swallowed here.
// Callers decide whether to keep stale data or surface the error.

use crate::error::FetchError;
use crate::model::{NewPassenger, Passenger};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Longest piece of an error body kept for display
const ERROR_BODY_LIMIT: usize = 200;

/// Connection settings for the passenger API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

/// Cheap to clone - the underlying reqwest client is reference counted
#[derive(Debug, Clone)]
pub struct PassengerClient {
    http: reqwest::Client,
    base_url: String,
}

impl PassengerClient {
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).map_err(|e| FetchError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("titanic-viewer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn passengers_url(&self) -> String {
        format!("{}/passengers/", self.base_url)
    }

    /// Fetch passengers whose name matches `search`
    ///
    /// The search text is sent verbatim as the `search_value` query parameter.
    /// An empty string returns every passenger. Order is the server's.
    pub async fn fetch_passengers(&self, search: &str) -> Result<Vec<Passenger>, FetchError> {
        tracing::debug!(search, "GET {}", self.passengers_url());

        let response = self
            .http
            .get(self.passengers_url())
            .query(&[("search_value", search)])
            .send()
            .await?;

        let passengers: Vec<Passenger> = read_json(response).await?;
        tracing::info!(search, count = passengers.len(), "Fetched passengers");
        Ok(passengers)
    }

    /// Fetch a single passenger by id
    pub async fn fetch_passenger(&self, id: i64) -> Result<Passenger, FetchError> {
        let url = format!("{}{}", self.passengers_url(), id);
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(id));
        }
        read_json(response).await
    }

    /// Create a passenger, returning the record as stored by the server
    pub async fn create_passenger(
        &self,
        passenger: &NewPassenger,
    ) -> Result<Passenger, FetchError> {
        tracing::debug!(name = %passenger.name, "POST {}", self.passengers_url());

        let response = self
            .http
            .post(self.passengers_url())
            .json(passenger)
            .send()
            .await?;

        let created: Passenger = read_json(response).await?;
        tracing::info!(passenger_id = created.passenger_id, "Created passenger");
        Ok(created)
    }
}

/// Check the status, then decode the body
///
/// Error responses are not parsed as JSON; a short snippet of the body is kept
/// for the error message instead.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FetchError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let body = String::from_utf8_lossy(&bytes);
        let body = match body.char_indices().nth(ERROR_BODY_LIMIT) {
            Some((cut, _)) => format!("{}…", &body[..cut]),
            None => body.into_owned(),
        };
        tracing::warn!(%status, "Passenger API returned an error");
        return Err(FetchError::Status { status, body });
    }

    Ok(serde_json::from_slice(&bytes)?)
}
