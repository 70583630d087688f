//! Tagwatch - Release and Tag Watcher
//!
//! Tagwatch polls release and tag metadata for a configured set of projects
//! from GitHub and Docker Hub, filters the results per project (substring
//! match, prerelease policy), and presents them on stdout or through an
//! interactive list.
//!
//! ## Core Features
//!
//! - **Multi-Provider Fetching**: GitHub releases and Docker Hub tags
//!   through user-configured API endpoints
//! - **Per-Project Filtering**: required-substring and prerelease rules
//! - **Allow-List Restriction**: limit a run to named projects
//! - **Configuration Management**: JSON config with template generation
//!
//! ## Modules
//!
//! - [`config`]: Configuration model, loading, and template generation
//! - [`aggregate`]: The fetch/filter/aggregate loop
//! - [`github`]: GitHub releases API client
//! - [`dockerhub`]: Docker Hub tags API client

pub mod aggregate;
pub mod config;
pub mod dockerhub;
pub mod error;
pub mod github;
pub mod tui;

pub use aggregate::{aggregate, AllowList, ReleaseSet};
pub use config::Config;
pub use dockerhub::{DockerhubClient, Tag, TagPage};
pub use github::{GithubClient, Release};
