use std::collections::HashMap;

use log::{debug, warn};
use serde::Serialize;

use crate::clients::errors::Result;

const API_ROOT: &str = "https://api.github.com/gists";
// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!("scrobblebox/", env!("CARGO_PKG_VERSION"));

/// One file in a gist PATCH body.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GistFile {
    pub content: String,
    pub filename: String,
}

#[derive(Serialize, Debug)]
struct GistPatch<'a> {
    description: &'a str,
    files: &'a HashMap<String, GistFile>,
}

/// Gist API client used as the publish target.
pub struct GistClient {
    http: reqwest::Client,
    token: String,
}

impl GistClient {
    #[must_use]
    pub fn new(token: String) -> Self {
        GistClient {
            http: reqwest::Client::new(),
            token,
        }
    }

    /// Replace the gist's description and named files.
    ///
    /// A non-success response is logged and swallowed: a failed publish
    /// is visible in the logs but does not fail the run.
    pub async fn update(
        &self,
        gist_id: &str,
        description: &str,
        files: &HashMap<String, GistFile>,
    ) -> Result<()> {
        let url = format!("{API_ROOT}/{gist_id}");
        let response = self
            .http
            .patch(&url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .json(&GistPatch { description, files })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            debug!("Gist update response: {body}");
        } else {
            warn!("Gist update finished without success: {status}, response: {body}");
        }
        Ok(())
    }
}
