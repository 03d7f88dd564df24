use std::time::Duration;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;
use crate::config::PlacesApiConfig;
use crate::error::PlacesApiError;
use crate::models::place::{DetailsResponse, PlaceDetails, SearchResponse};

const TEXT_SEARCH: &str = "textsearch";
const DETAILS: &str = "details";

/// Envelope statuses that carry usable data.
const USABLE_STATUSES: [&str; 2] = ["OK", "ZERO_RESULTS"];

/// Which page of a text search to request.
#[derive(Clone, Copy, Debug)]
pub enum SearchPage<'a> {
    Query(&'a str),
    Token(&'a str),
}

pub struct PlacesApiRepo {
    client: Client,
    config: PlacesApiConfig,
    base_url: Url,
}

impl PlacesApiRepo {
    pub fn new(
        config: PlacesApiConfig,
    ) -> Result<Self, PlacesApiError> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| PlacesApiError::InvalidBaseUrl(config.base_url.clone()))?;
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    pub fn page_token_delay(&self) -> Duration {
        self.config.page_token_delay
    }

    pub async fn search_page(
        &self,
        page: SearchPage<'_>,
    ) -> Result<SearchResponse, PlacesApiError> {
        let url = self.endpoint(&[TEXT_SEARCH, "json"]);
        let params = match page {
            SearchPage::Query(query) => [("query", query), ("key", self.config.api_key.as_str())],
            SearchPage::Token(token) => [("pagetoken", token), ("key", self.config.api_key.as_str())],
        };

        self.get_json(TEXT_SEARCH, url, &params).await
    }

    pub async fn place_details(
        &self,
        place_id: &str,
    ) -> Result<PlaceDetails, PlacesApiError> {
        let url = self.endpoint(&[DETAILS, "json"]);
        let params = [("place_id", place_id), ("key", self.config.api_key.as_str())];

        let response: DetailsResponse = self.get_json(DETAILS, url, &params).await?;
        response.result.ok_or_else(|| PlacesApiError::ApiStatus {
            endpoint: DETAILS,
            status: response.status,
            message: format!("no result for place {}", place_id),
        })
    }

    /// URL that serves the photo behind `photo_reference`. Nothing is fetched.
    pub fn photo_url(
        &self,
        photo_reference: &str,
    ) -> String {
        let mut url = self.endpoint(&["photo"]);
        url.query_pairs_mut()
            .append_pair("maxwidth", &self.config.photo_max_width.to_string())
            .append_pair("photoreference", photo_reference)
            .append_pair("key", &self.config.api_key);
        url.into()
    }

    fn endpoint(
        &self,
        segments: &[&str],
    ) -> Url {
        let mut url = self.base_url.clone();
        // base_url was checked to be a base in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: Url,
        params: &[(&str, &str)],
    ) -> Result<T, PlacesApiError> {
        debug!("Requesting {} from {}", endpoint, url);
        let response = self.client
            .get(url)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlacesApiError::Status { endpoint, status });
        }

        let body: serde_json::Value = response.json().await?;
        check_envelope_status(endpoint, &body)?;

        serde_json::from_value(body).map_err(|e| PlacesApiError::Deserialize {
            context: endpoint.to_string(),
            source: e,
        })
    }
}

fn check_envelope_status(
    endpoint: &'static str,
    body: &serde_json::Value,
) -> Result<(), PlacesApiError> {
    let status = body
        .get("status")
        .and_then(|s| s.as_str())
        .unwrap_or("OK");
    if USABLE_STATUSES.contains(&status) {
        return Ok(());
    }

    let message = body
        .get("error_message")
        .and_then(|m| m.as_str())
        .unwrap_or_default()
        .to_string();
    Err(PlacesApiError::ApiStatus {
        endpoint,
        status: status.to_string(),
        message,
    })
}
