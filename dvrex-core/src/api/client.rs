//! Reqwest-backed adapter for a remote Dvrex DVR server.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

use dvrex_model::prelude::{
    Recording, RecordingID, UpdateRecordingProgressRequest, WatchSessionStart,
};

use crate::api::routes::{utils, v1};
use crate::error::{PlaybackError, Result};
use crate::ports::{RecordingService, WatchStatsService};

/// HTTP client for the DVR server with bearer-token support.
///
/// Implements both collaborator ports; one instance is typically shared
/// (`Arc`) between the session manager and whatever else talks to the
/// server.
#[derive(Clone)]
pub struct RemoteDvrService {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl std::fmt::Debug for RemoteDvrService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteDvrService")
            .field("base_url", &self.base_url)
            .field(
                "has_token",
                &self
                    .token
                    .try_read()
                    .map(|t| t.is_some())
                    .unwrap_or(false),
            )
            .finish()
    }
}

/// Stream issuance response body.
#[derive(Debug, Deserialize)]
struct StreamUrlResponse {
    url: String,
}

impl RemoteDvrService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into();
        debug!("creating DVR client with base URL: {base_url}");

        Self {
            client,
            base_url,
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set or clear the bearer token used on every request.
    pub async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token.read().await.as_ref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and map non-2xx statuses to upstream errors.
    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let response = self.authorize(builder).await.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PlaybackError::Upstream(format!(
                "{} returned {}",
                response.url().path(),
                status
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl RecordingService for RemoteDvrService {
    async fn list_recordings(&self) -> Result<Vec<Recording>> {
        let url = self.build_url(v1::dvr::RECORDINGS);
        let response = self.execute(self.client.get(url)).await?;
        Ok(response.json().await?)
    }

    async fn recording_stream_url(
        &self,
        recording_id: RecordingID,
    ) -> Result<Url> {
        let path = utils::replace_param(
            v1::dvr::RECORDING_STREAM,
            "{id}",
            recording_id.to_string(),
        );
        let response = self.execute(self.client.get(self.build_url(&path))).await?;
        let body: StreamUrlResponse = response.json().await?;
        Ok(Url::parse(&body.url)?)
    }

    async fn update_recording_progress(
        &self,
        recording_id: RecordingID,
        position_ms: u64,
    ) -> Result<()> {
        let path = utils::replace_param(
            v1::dvr::RECORDING_PROGRESS,
            "{id}",
            recording_id.to_string(),
        );
        let request = UpdateRecordingProgressRequest {
            recording_id,
            position_ms,
        };
        self.execute(self.client.put(self.build_url(&path)).json(&request))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl WatchStatsService for RemoteDvrService {
    async fn start_watch_session(
        &self,
        start: WatchSessionStart,
    ) -> Result<()> {
        let url = self.build_url(v1::watch::SESSION_START);
        self.execute(self.client.post(url).json(&start)).await?;
        Ok(())
    }

    async fn end_watch_session(&self) -> Result<()> {
        let url = self.build_url(v1::watch::SESSION_END);
        self.execute(self.client.post(url)).await?;
        Ok(())
    }
}
