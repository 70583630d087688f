//! Docker Hub tags API client
//!
//! Fetches a single page of tags for an image in the `library` namespace.
//! The page cursor fields (`next`/`previous`) are decoded and kept but
//! never followed; full tag history is out of scope.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RegistryError;

/// One page of the tags listing
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct TagPage {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Tag>,
}

/// One image tag
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Tag {
    pub id: i64,
    pub images: Vec<TagImage>,
    pub creator: i64,
    pub last_updated: Option<String>,
    pub last_updater: i64,
    pub last_updater_username: String,
    pub name: String,
    pub repository: i64,
    pub full_size: i64,
    pub v2: bool,
    pub status: String,
    pub tag_last_pulled: Option<String>,
    pub tag_last_pushed: Option<String>,
}

/// One architecture-specific image behind a tag
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct TagImage {
    pub architecture: String,
    pub features: String,
    pub variant: Option<String>,
    pub digest: String,
    pub layers: Vec<ImageLayer>,
    pub os: String,
    pub os_features: String,
    pub os_version: Option<String>,
    pub size: i64,
    pub status: String,
    pub last_pulled: Option<String>,
    pub last_pushed: Option<String>,
}

/// One layer of an image
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct ImageLayer {
    pub digest: String,
    pub size: i64,
    pub instruction: String,
}

/// Client for one configured Docker Hub-compatible provider.
///
/// Tag reads are anonymous; no credential is ever attached.
pub struct DockerhubClient {
    http: reqwest::Client,
    base_url: String,
}

impl DockerhubClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetch the first tags page of `library/{project}`
    pub async fn tags(&self, project: &str) -> Result<TagPage, RegistryError> {
        let url = format!("{}/v2/repositories/library/{}/tags", self.base_url, project);
        debug!(%url, "fetching tags");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| RegistryError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::Status { url, status });
        }

        response
            .json::<TagPage>()
            .await
            .map_err(|e| RegistryError::Decode { url, source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_tags_decodes_single_page() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/repositories/library/redis/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 120,
                "next": "https://hub.docker.com/v2/repositories/library/redis/tags?page=2",
                "previous": null,
                "results": [
                    {
                        "name": "7.2.4",
                        "full_size": 41234567,
                        "images": [
                            {
                                "architecture": "amd64",
                                "digest": "sha256:abc",
                                "os": "linux",
                                "size": 41234567
                            }
                        ]
                    },
                    {"name": "latest"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = DockerhubClient::new(reqwest::Client::new(), server.uri());
        let page = client.tags("redis").await.unwrap();

        assert_eq!(page.count, 120);
        // The cursor is retained but never followed: exactly one request
        // was issued (enforced by the mock's expect above).
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "7.2.4");
        assert_eq!(page.results[0].images[0].architecture, "amd64");
        assert_eq!(page.results[1].name, "latest");
    }

    #[tokio::test]
    async fn test_tags_non_success_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/repositories/library/missing/tags"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = DockerhubClient::new(reqwest::Client::new(), server.uri());
        let result = client.tags("missing").await;

        assert!(matches!(result, Err(RegistryError::Status { .. })));
    }

    #[tokio::test]
    async fn test_tags_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/repositories/library/redis/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[not a page]"))
            .mount(&server)
            .await;

        let client = DockerhubClient::new(reqwest::Client::new(), server.uri());
        let result = client.tags("redis").await;

        assert!(matches!(result, Err(RegistryError::Decode { .. })));
    }
}
