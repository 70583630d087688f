use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::ConfigError;

/// Default configuration file location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Main configuration structure for tagwatch
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    /// Configured registry providers
    #[serde(default)]
    pub providers: Vec<Provider>,

    /// Tracked projects, split by provider kind
    #[serde(default)]
    pub projects: Projects,
}

/// A configured remote registry endpoint
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Provider {
    /// Provider name, matched against the known kinds ("github", "dockerhub")
    #[serde(default)]
    pub name: String,

    /// Base URL of the provider's API (e.g. "https://api.github.com")
    #[serde(default)]
    pub url: String,

    /// Optional static bearer token for this provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Tracked projects, one list per provider kind
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Projects {
    #[serde(default)]
    pub github: Vec<GithubProject>,

    #[serde(default)]
    pub dockerhub: Vec<DockerhubProject>,
}

/// A tracked GitHub repository
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GithubProject {
    /// Repository owner (user or organisation)
    pub owner: String,

    /// Repository name
    pub project: String,

    /// Substring a release tag must contain to be kept ("" keeps everything)
    #[serde(default)]
    pub filter_must: String,

    /// Include releases marked as prereleases
    #[serde(default)]
    pub allow_prerelease: bool,
}

/// A tracked Docker Hub image (library namespace)
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DockerhubProject {
    /// Image name
    pub project: String,

    /// Substring a tag name must contain to be kept ("" keeps everything)
    #[serde(default)]
    pub filter_must: String,
}

/// The closed set of provider kinds tagwatch can talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Github,
    Dockerhub,
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(Self::Github),
            "dockerhub" => Ok(Self::Dockerhub),
            other => Err(ConfigError::UnknownProvider {
                name: other.to_string(),
            }),
        }
    }
}

impl Provider {
    /// Resolve this provider's kind from its configured name
    pub fn kind(&self) -> Result<ProviderKind, ConfigError> {
        self.name.parse()
    }
}

impl Config {
    /// Load configuration from a specific file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let config: Config = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Save configuration to a file as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        std::fs::write(path, content).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// Starter configuration written when no config file exists yet.
    ///
    /// One blank provider entry plus one placeholder project of each kind,
    /// meant to be edited before the first real run.
    pub fn template() -> Self {
        Self {
            providers: vec![Provider {
                name: String::new(),
                url: String::new(),
                token: None,
            }],
            projects: Projects {
                github: vec![GithubProject {
                    owner: "organisation".to_string(),
                    project: "project".to_string(),
                    filter_must: String::new(),
                    allow_prerelease: false,
                }],
                dockerhub: vec![DockerhubProject {
                    project: "project".to_string(),
                    filter_must: String::new(),
                }],
            },
        }
    }
}
