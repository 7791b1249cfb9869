use serde::Deserialize;

// GitHub search API response structures
#[derive(Debug, Deserialize)]
pub struct SearchRepositoriesResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<GitHubRepo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub owner: GitHubOwner,
    pub stargazers_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubOwner {
    pub login: String,
}
