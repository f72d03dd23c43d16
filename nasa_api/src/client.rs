//! HTTP client for the NASA open-data API.

use std::time::Duration;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{ApodQuery, MarsPhotosQuery, NeoFeedQuery, Query},
    types::{Apod, EpicImageRecord, MarsPhotosResponse, NeoFeed},
    Error,
};

const DEFAULT_BASE_URL: &str = "https://api.nasa.gov";

/// HTTP client for the NASA open-data API.
///
/// Appends the `api_key` credential to every request URL. Each request
/// builds a fresh `reqwest::Client` with a 30-second timeout.
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.nasa.gov`.
    base_api_url: String,
    /// API key sent as the `api_key` query parameter.
    api_key: String,
}

impl Client {
    /// Creates a new client pointing at the production NASA API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_api_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            api_key: api_key.into(),
        }
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        let mut url = match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        };
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        let client = reqwest::Client::builder()
            .user_agent(concat!("nasa_api/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches the astronomy picture of the day.
    pub async fn get_apod(&self, query: &ApodQuery) -> Result<Apod, Error> {
        self.get::<Apod, ApodQuery>("/planetary/apod", Some(query))
            .await
    }

    /// Fetches the near-earth-object feed for a date range.
    ///
    /// The upstream feed accepts at most 7 days per request; callers that
    /// need a wider range must issue one request per sub-range.
    pub async fn get_neo_feed(&self, query: &NeoFeedQuery) -> Result<NeoFeed, Error> {
        self.get::<NeoFeed, NeoFeedQuery>("/neo/rest/v1/feed", Some(query))
            .await
    }

    /// Fetches photos taken by the named rover.
    pub async fn get_mars_photos(
        &self,
        rover: &str,
        query: &MarsPhotosQuery,
    ) -> Result<MarsPhotosResponse, Error> {
        self.get::<MarsPhotosResponse, MarsPhotosQuery>(
            format!("/mars-photos/api/v1/rovers/{}/photos", rover).as_str(),
            Some(query),
        )
        .await
    }

    /// Fetches the EPIC natural-color image listing for a single date.
    pub async fn get_epic_natural(&self, date: NaiveDate) -> Result<Vec<EpicImageRecord>, Error> {
        self.get::<Vec<EpicImageRecord>, ApodQuery>(
            format!("/EPIC/api/natural/date/{}", date.format("%Y-%m-%d")).as_str(),
            None,
        )
        .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
