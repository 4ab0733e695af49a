//! Trello REST adapter for the card store port.
//!
//! Issues `GET {base}/cards/{id}` and `GET {base}/lists/{id}` requests with
//! the API key and token passed as query parameters, and maps HTTP status
//! codes onto the [`CardStoreError`] taxonomy:
//!
//! - `400` and `404` become [`CardStoreError::NotFound`] (Trello answers
//!   `400 invalid id` for malformed short links)
//! - `401` and `403` become [`CardStoreError::Auth`]
//! - everything else, including connection and decoding failures, becomes
//!   [`CardStoreError::Transport`]

use crate::tracker::{
    domain::{CardId, CardRecord, ListId, ListRecord},
    ports::{CardStore, CardStoreError, CardStoreResult},
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Public Trello API root.
pub const DEFAULT_TRELLO_BASE_URL: &str = "https://api.trello.com/1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`TrelloRestCardStore`].
#[derive(Clone, PartialEq, Eq)]
pub struct RestCardStoreConfig {
    base_url: String,
    api_key: Option<String>,
    api_token: Option<String>,
    timeout: Duration,
}

impl RestCardStoreConfig {
    /// Creates settings pointing at the public Trello API.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_TRELLO_BASE_URL.to_owned(),
            api_key: None,
            api_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the API root, e.g. for a local test server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the API token.
    #[must_use]
    pub fn with_api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for RestCardStoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RestCardStoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestCardStoreConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Failures raised inside the REST adapter before they are classified.
#[derive(Debug, Error)]
pub enum RestAdapterError {
    /// The configured base URL cannot carry path segments.
    #[error("invalid Trello base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The server answered with a status outside the mapped set.
    #[error("unexpected HTTP status {status} fetching {resource}")]
    UnexpectedStatus {
        /// Returned HTTP status.
        status: StatusCode,
        /// Human-readable resource description.
        resource: String,
    },
}

#[derive(Debug, Deserialize)]
struct CardPayload {
    id: String,
    name: String,
    #[serde(rename = "idList")]
    id_list: String,
}

#[derive(Debug, Deserialize)]
struct ListPayload {
    id: String,
    name: String,
}

/// Card store backed by the Trello REST API.
#[derive(Debug, Clone)]
pub struct TrelloRestCardStore {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    api_token: Option<String>,
}

impl TrelloRestCardStore {
    /// Creates a REST card store.
    ///
    /// # Errors
    ///
    /// Returns [`CardStoreError::Transport`] when the base URL is invalid or
    /// the HTTP client cannot be built.
    pub fn new(config: RestCardStoreConfig) -> CardStoreResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                CardStoreError::transport(RestAdapterError::InvalidBaseUrl(config.base_url.clone()))
            })?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(CardStoreError::transport)?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
            api_token: config.api_token,
        })
    }

    fn endpoint(&self, collection: &str, id: &str, fields: &str) -> CardStoreResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                CardStoreError::transport(RestAdapterError::InvalidBaseUrl(
                    self.base_url.to_string(),
                ))
            })?
            .pop_if_empty()
            .push(collection)
            .push(id);
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("fields", fields);
            if let Some(key) = &self.api_key {
                query.append_pair("key", key);
            }
            if let Some(token) = &self.api_token {
                query.append_pair("token", token);
            }
        }
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url, resource: String) -> CardStoreResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(CardStoreError::transport)?;

        match response.status() {
            status if status.is_success() => response
                .json::<T>()
                .await
                .map_err(CardStoreError::transport),
            StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST => {
                Err(CardStoreError::NotFound(resource))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(CardStoreError::Auth(
                format!("{} fetching {resource}", response.status()),
            )),
            status => Err(CardStoreError::transport(
                RestAdapterError::UnexpectedStatus { status, resource },
            )),
        }
    }
}

#[async_trait]
impl CardStore for TrelloRestCardStore {
    async fn get_card(&self, card_id: &CardId) -> CardStoreResult<CardRecord> {
        let url = self.endpoint("cards", card_id.as_str(), "name,idList")?;
        let payload: CardPayload = self.fetch(url, format!("card {card_id}")).await?;

        let id = CardId::new(payload.id).map_err(CardStoreError::transport)?;
        let list_id = ListId::new(payload.id_list).map_err(CardStoreError::transport)?;
        Ok(CardRecord::new(id, payload.name, list_id))
    }

    async fn get_list(&self, list_id: &ListId) -> CardStoreResult<ListRecord> {
        let url = self.endpoint("lists", list_id.as_str(), "name")?;
        let payload: ListPayload = self.fetch(url, format!("list {list_id}")).await?;

        let id = ListId::new(payload.id).map_err(CardStoreError::transport)?;
        Ok(ListRecord::new(id, payload.name))
    }
}
