//! Candidate ids from the realtime-database REST endpoint.

use reqwest::Client;

use super::config::FinderConfig;
use crate::Error;
use crate::sources::CandidateStore;

/// Reads the candidate id list from a realtime-database `.json` endpoint.
#[derive(Debug, Clone)]
pub struct FirebaseCandidateStore {
    http: Client,
    url: String,
}

impl FirebaseCandidateStore {
    pub fn new(config: &FinderConfig) -> Self {
        let base = config.database_url.trim_end_matches('/');
        Self {
            http: Client::new(),
            url: format!("{base}/{path}.json", path = config.database_path),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CandidateStore for FirebaseCandidateStore {
    async fn candidate_ids(&self) -> Result<Vec<String>, Error> {
        let response = self.http.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(Error::ServiceError(format!(
                "candidate store returned {}",
                response.status()
            )));
        }

        // Realtime-database arrays come back with null holes where keys
        // were deleted; skip them.
        let ids: Vec<Option<String>> = response.json().await?;
        Ok(ids.into_iter().flatten().collect())
    }
}
