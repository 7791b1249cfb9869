use crate::config::GitHubConfig;
use crate::error::{RepoFavoritesError, Result};
use crate::models::{RepositoryRecord, SearchQuery};
use crate::types::SearchRepositoriesResponse;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = "Repo Favorites/0.1.0";
const SEARCH_REPOSITORIES_PATH: &str = "search/repositories";

/// Looks up repositories matching a query.
#[async_trait]
pub trait RepoSearch: Send + Sync {
    async fn search_repositories(&self, query: &SearchQuery) -> Result<Vec<RepositoryRecord>>;
}

pub struct GitHubClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        // A base without a trailing slash would lose its last path segment on join
        let mut base = config.api_base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        Ok(GitHubClient {
            client,
            base_url,
            token: config.token.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the search endpoint URL for a query
    pub fn search_url(&self, query: &SearchQuery) -> Result<Url> {
        let mut url = self.base_url.join(SEARCH_REPOSITORIES_PATH)?;
        url.query_pairs_mut()
            .append_pair("q", &query.q)
            .append_pair("per_page", &query.per_page.to_string());
        Ok(url)
    }
}

#[async_trait]
impl RepoSearch for GitHubClient {
    async fn search_repositories(&self, query: &SearchQuery) -> Result<Vec<RepositoryRecord>> {
        let url = self.search_url(query)?;
        debug!(%url, "Searching repositories");

        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(status = status.as_u16(), q = %query.q, "Repository search rejected");
            return Err(RepoFavoritesError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let payload: SearchRepositoriesResponse = serde_json::from_str(&body)?;

        debug!(
            total_count = payload.total_count,
            incomplete_results = payload.incomplete_results,
            returned = payload.items.len(),
            "Repository search succeeded"
        );

        Ok(payload.items.into_iter().map(RepositoryRecord::from).collect())
    }
}
