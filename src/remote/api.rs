use std::time::Duration;

use reqwest::{
    Client,
    Response,
    StatusCode,
};

use super::types::StoredVerb;
use crate::{
    core::VerbarioError,
    persistence::SettingsData,
};

/// The whole collection lives under one logical key in the remote store.
pub const COLLECTION_KEY: &str = "verbs";

/// Client for a whole-document JSON store (Firebase-REST shaped): the
/// document URL is `{base_url}/{key}.json`, written with wholesale PUT and
/// read with a one-shot GET. No partial updates, no subscriptions.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    base_url: String,
    client: Client,
}

impl RemoteClient {
    /// Returns None when no base URL is configured; callers treat that as
    /// `RemoteUnavailable` rather than an error.
    pub fn from_settings(settings: &SettingsData) -> Option<Self> {
        let base_url = settings.remote_url()?.to_string();
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Some(Self { base_url, client })
    }

    pub(crate) fn document_url(&self) -> String {
        format!("{}/{}.json", self.base_url.trim_end_matches('/'), COLLECTION_KEY)
    }

    /// Reachability probe for the status indicator. A 404 still counts as
    /// reachable; the document just does not exist yet.
    pub async fn ping(&self) -> bool {
        match self.client.get(self.document_url()).send().await {
            Ok(resp) => resp.status().is_success() || resp.status() == StatusCode::NOT_FOUND,
            Err(_) => false,
        }
    }

    /// Overwrites the remote document with the full collection snapshot.
    pub async fn push_all(&self, verbs: &[StoredVerb]) -> Result<(), VerbarioError> {
        let resp = self.client.put(self.document_url()).json(&verbs).send().await?;
        ensure_success(&resp)?;
        Ok(())
    }

    /// One-shot fetch of the remote document. A missing document (404 or a
    /// JSON `null` body) yields an empty list, not an error.
    pub async fn pull_all(&self) -> Result<Vec<StoredVerb>, VerbarioError> {
        let resp = self.client.get(self.document_url()).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        ensure_success(&resp)?;

        let document: Option<Vec<StoredVerb>> = resp.json().await?;
        Ok(document.unwrap_or_default())
    }
}

fn ensure_success(resp: &Response) -> Result<(), VerbarioError> {
    if !resp.status().is_success() {
        return Err(VerbarioError::RemoteCall(format!(
            "HTTP {} from {}",
            resp.status(),
            resp.url()
        )));
    }
    Ok(())
}
