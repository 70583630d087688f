//! Release aggregation across configured providers
//!
//! Walks the configured projects and fetches their release/tag listings
//! from every matching provider, keeping what passes the per-project
//! inclusion predicates. Fetches are sequential and fail-fast; a single
//! failing project aborts the whole run with nothing returned.

use std::collections::HashSet;
use tracing::{debug, info};

use crate::config::{Config, DockerhubProject, GithubProject, Provider, ProviderKind};
use crate::dockerhub::{DockerhubClient, Tag};
use crate::error::AggregateError;
use crate::github::{GithubClient, Release};

const USER_AGENT: &str = concat!("tagwatch/", env!("CARGO_PKG_VERSION"));

/// Set of project names a run is restricted to.
///
/// An empty set, or a set containing the empty string, permits every
/// project. Membership is checked once per project, so a name listed
/// twice (or alongside the wildcard) never causes a second fetch.
#[derive(Debug, Clone, Default)]
pub struct AllowList(HashSet<String>);

impl AllowList {
    /// Allow-list permitting every project
    pub fn all() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list of project names (e.g. "redis,rancher").
    ///
    /// Splitting the empty string yields a single empty entry, which acts
    /// as the wildcard, so an unset CLI flag still matches everything.
    pub fn from_csv(list: &str) -> Self {
        Self(list.split(',').map(|name| name.trim().to_string()).collect())
    }

    /// Whether a project with this name should be processed
    pub fn permits(&self, project: &str) -> bool {
        self.0.is_empty() || self.0.contains("") || self.0.contains(project)
    }
}

/// Combined result of one aggregation run
#[derive(Debug, Clone, Default)]
pub struct ReleaseSet {
    /// Matched GitHub releases, in project × provider × response order
    pub github: Vec<Release>,

    /// Matched Docker Hub tags, same ordering
    pub dockerhub: Vec<Tag>,
}

impl ReleaseSet {
    pub fn is_empty(&self) -> bool {
        self.github.is_empty() && self.dockerhub.is_empty()
    }

    /// All matched tag names, GitHub releases first
    pub fn tag_names(&self) -> Vec<String> {
        self.github
            .iter()
            .map(|release| release.tag_name.clone())
            .chain(self.dockerhub.iter().map(|tag| tag.name.clone()))
            .collect()
    }
}

/// Fetch and filter releases for every configured project.
///
/// `github_token` takes precedence over a token configured on a provider
/// entry; Docker Hub reads are always anonymous. Provider names are
/// resolved before any request goes out, so a typo in the config fails
/// the run immediately instead of being skipped silently.
pub async fn aggregate(
    config: &Config,
    allow: &AllowList,
    github_token: Option<&str>,
) -> Result<ReleaseSet, AggregateError> {
    let mut github_providers: Vec<&Provider> = Vec::new();
    let mut dockerhub_providers: Vec<&Provider> = Vec::new();
    for provider in &config.providers {
        match provider.kind()? {
            ProviderKind::Github => github_providers.push(provider),
            ProviderKind::Dockerhub => dockerhub_providers.push(provider),
        }
    }

    let http = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(AggregateError::Client)?;

    let mut set = ReleaseSet::default();

    if github_providers.is_empty() && !config.projects.github.is_empty() {
        debug!(
            count = config.projects.github.len(),
            "no github provider configured, skipping github projects"
        );
    }

    for project in &config.projects.github {
        if !allow.permits(&project.project) {
            debug!(project = %project.project, "skipped by allow-list");
            continue;
        }

        for provider in &github_providers {
            let token = github_token.or(provider.token.as_deref());
            let client = GithubClient::new(http.clone(), provider.url.as_str(), token);

            info!(
                repo = %format!("{}/{}", project.owner, project.project),
                provider = %provider.url,
                "fetching releases"
            );

            let releases = client.releases(&project.owner, &project.project).await?;
            let before = set.github.len();
            set.github.extend(
                releases
                    .into_iter()
                    .filter(|release| release_included(release, project)),
            );
            debug!(
                project = %project.project,
                matched = set.github.len() - before,
                "filtered releases"
            );
        }
    }

    if dockerhub_providers.is_empty() && !config.projects.dockerhub.is_empty() {
        debug!(
            count = config.projects.dockerhub.len(),
            "no dockerhub provider configured, skipping dockerhub projects"
        );
    }

    for project in &config.projects.dockerhub {
        if !allow.permits(&project.project) {
            debug!(project = %project.project, "skipped by allow-list");
            continue;
        }

        for provider in &dockerhub_providers {
            let client = DockerhubClient::new(http.clone(), provider.url.as_str());

            info!(
                image = %project.project,
                provider = %provider.url,
                "fetching tags"
            );

            // First page only; the page cursor is not followed.
            let page = client.tags(&project.project).await?;
            let before = set.dockerhub.len();
            set.dockerhub
                .extend(page.results.into_iter().filter(|tag| tag_included(tag, project)));
            debug!(
                project = %project.project,
                matched = set.dockerhub.len() - before,
                "filtered tags"
            );
        }
    }

    Ok(set)
}

/// Inclusion predicate for a GitHub release
fn release_included(release: &Release, project: &GithubProject) -> bool {
    let prerelease_ok = !release.prerelease || project.allow_prerelease;
    let filter_ok =
        project.filter_must.is_empty() || release.tag_name.contains(&project.filter_must);
    prerelease_ok && filter_ok
}

/// Inclusion predicate for a Docker Hub tag
fn tag_included(tag: &Tag, project: &DockerhubProject) -> bool {
    project.filter_must.is_empty() || tag.name.contains(&project.filter_must)
}
