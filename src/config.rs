use crate::cli::Cli;
use std::time::Duration;

pub const API_BASE_URL: &str = "https://api.github.com";

// Number of repositories listed under the search box
pub const REPOS_PER_VIEW: u8 = 5;

pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

// Appended to every query. Kept for parity with the widget's existing requests.
pub const DEFAULT_QUERY_SUFFIX: &str = "-";

/// Connection settings for the GitHub API
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub api_base_url: String,
    pub token: Option<String>,
    /// `None` leaves the transport default in place
    pub request_timeout: Option<Duration>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            token: None,
            request_timeout: None,
        }
    }
}

/// How the search box text is turned into a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub per_page: u8,
    pub query_suffix: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            per_page: REPOS_PER_VIEW,
            query_suffix: DEFAULT_QUERY_SUFFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub github: GitHubConfig,
    pub search: SearchConfig,
    /// Quiet period after the last keystroke before a search fires
    pub debounce: Duration,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            github: GitHubConfig::default(),
            search: SearchConfig::default(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl From<&Cli> for WidgetConfig {
    fn from(cli: &Cli) -> Self {
        let query_suffix = if cli.no_query_suffix {
            String::new()
        } else {
            cli.query_suffix.clone()
        };

        Self {
            github: GitHubConfig {
                api_base_url: cli.api_url.clone(),
                token: cli.token.clone().filter(|t| !t.is_empty()),
                request_timeout: cli.request_timeout_secs.map(Duration::from_secs),
            },
            search: SearchConfig {
                per_page: cli.per_page,
                query_suffix,
            },
            debounce: Duration::from_millis(cli.debounce_ms),
        }
    }
}
