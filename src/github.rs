//! GitHub releases API client
//!
//! Fetches the release list of a single repository in one request. The
//! response model keeps the authorship/asset metadata the API returns even
//! though filtering only looks at the tag name and the prerelease flag.

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RegistryError;

/// Media type pinning the versioned GitHub REST API
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// One published release of a repository
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Release {
    pub url: String,
    pub html_url: String,
    pub assets_url: String,
    pub upload_url: String,
    pub tarball_url: Option<String>,
    pub zipball_url: Option<String>,
    pub id: i64,
    pub node_id: String,
    pub tag_name: String,
    pub target_commitish: String,
    /// Display name; the API allows null here
    pub name: Option<String>,
    pub body: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
    pub created_at: Option<String>,
    pub published_at: Option<String>,
    pub author: Option<ReleaseAuthor>,
    pub assets: Vec<ReleaseAsset>,
}

/// A file attached to a release
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct ReleaseAsset {
    pub url: String,
    pub browser_download_url: String,
    pub id: i64,
    pub node_id: String,
    pub name: String,
    pub label: Option<String>,
    pub state: String,
    pub content_type: String,
    pub size: i64,
    pub download_count: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub uploader: Option<ReleaseAuthor>,
}

/// Account that published a release or uploaded an asset
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct ReleaseAuthor {
    pub login: String,
    pub id: i64,
    pub node_id: String,
    pub avatar_url: String,
    pub gravatar_id: String,
    pub url: String,
    pub html_url: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub site_admin: bool,
}

/// Client for one configured GitHub-compatible provider
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    /// Create a client for the given API base URL.
    ///
    /// An empty token is treated the same as no token at all: the request
    /// goes out unauthenticated.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, token: Option<&str>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token: token.filter(|t| !t.is_empty()).map(str::to_string),
        }
    }

    /// Fetch all releases of `owner/project` (one page, full body decode)
    pub async fn releases(&self, owner: &str, project: &str) -> Result<Vec<Release>, RegistryError> {
        let url = format!("{}/repos/{}/{}/releases", self.base_url, owner, project);
        debug!(%url, "fetching releases");

        let mut request = self.http.get(&url).header(header::ACCEPT, GITHUB_ACCEPT);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| RegistryError::Transport {
            url: url.clone(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::Status { url, status });
        }

        response
            .json::<Vec<Release>>()
            .await
            .map_err(|e| RegistryError::Decode { url, source: e })
    }
}
