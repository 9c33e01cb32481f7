// File: src/client/core.rs
//! Data fetchers: one network or file read per call, envelope extraction,
//! and nothing else. No caching, no retries, no timeouts.
use async_trait::async_trait;
use camino::Utf8PathBuf;

use crate::error::{Error, Result};
use crate::model::item::{RawEvent, RawRecord, SearchEnvelope};

/// Seam between the widget and its data origin. Object-safe so the widget
/// holds an `Arc<dyn RecordSource>` and tests can substitute scripted sources.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Perform one fetch and return raw records in response order.
    /// `term` is the current search term; fixed-listing sources ignore it.
    async fn fetch(&self, term: &str) -> Result<Vec<RawRecord>>;
}

/// Reads a bundled JSON listing of dated events from disk.
#[derive(Debug, Clone)]
pub struct LocalSource {
    path: Utf8PathBuf,
}

impl LocalSource {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8PathBuf {
        &self.path
    }
}

#[async_trait]
impl RecordSource for LocalSource {
    async fn fetch(&self, _term: &str) -> Result<Vec<RawRecord>> {
        let body = tokio::fs::read_to_string(self.path.as_std_path())
            .await
            .map_err(|e| Error::Io {
                path: self.path.to_string(),
                reason: e.to_string(),
            })?;

        // Local listings are trusted: the body is parsed unconditionally,
        // there is no success indicator to check.
        let events: Vec<RawEvent> =
            serde_json::from_str(&body).map_err(|e| Error::InvalidShape {
                context: format!("event listing: {}", e),
            })?;

        log::debug!("loaded {} event records from {}", events.len(), self.path);
        Ok(events.into_iter().map(RawRecord::Event).collect())
    }
}

/// Queries the image-search API. One GET per call, no auth, no request body.
#[derive(Debug, Clone)]
pub struct HttpSource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Network {
                reason: format!("client init: {}", e),
            })?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// The term is interpolated verbatim, no escaping; the raw URL shape is
    /// part of the contract.
    fn search_url(&self, term: &str) -> String {
        format!(
            "{}/search?q={}&media_type=image",
            self.endpoint.trim_end_matches('/'),
            term
        )
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    async fn fetch(&self, term: &str) -> Result<Vec<RawRecord>> {
        let url = self.search_url(term);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network {
                reason: e.to_string(),
            })?;

        // Check the success indicator before touching the body.
        let status = response.status();
        if !status.is_success() {
            log::warn!("search request to {} returned {}", url, status);
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }

        let envelope: SearchEnvelope =
            response.json().await.map_err(|e| Error::InvalidShape {
                context: format!("search envelope: {}", e),
            })?;

        let items = envelope.collection.items;
        log::debug!("search for '{}' returned {} items", term, items.len());
        Ok(items.into_iter().map(RawRecord::Image).collect())
    }
}
