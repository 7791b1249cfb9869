use crate::config::SearchConfig;
use crate::types::GitHubRepo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Repository as returned by the search collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub id: u64,
    pub name: String,
    pub owner_name: String,
    pub star_count: u32,
}

impl From<GitHubRepo> for RepositoryRecord {
    fn from(repo: GitHubRepo) -> Self {
        Self {
            id: repo.id,
            name: repo.name,
            owner_name: repo.owner.login,
            star_count: repo.stargazers_count,
        }
    }
}

/// Identifies one rendered entry. Two entries for the same repository
/// never share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry-{}", self.0)
    }
}

/// Clickable parts of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryRegion {
    Preview,
    Name,
    Owner,
    Stars,
    RemoveControl,
    Container,
}

/// Display entry for one repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoEntry {
    pub id: EntryId,
    pub record: RepositoryRecord,
    pub expanded: bool,
    pub created_at: DateTime<Utc>,
}

impl RepoEntry {
    pub fn new(id: EntryId, record: RepositoryRecord) -> Self {
        Self {
            id,
            record,
            expanded: false,
            created_at: Utc::now(),
        }
    }

    /// Flips every toggling part: preview on one side, details and the
    /// removal control on the other.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn preview_visible(&self) -> bool {
        !self.expanded
    }

    pub fn details_visible(&self) -> bool {
        self.expanded
    }

    pub fn remove_control_visible(&self) -> bool {
        self.expanded
    }

    pub fn is_visible(&self, region: EntryRegion) -> bool {
        match region {
            EntryRegion::Preview => self.preview_visible(),
            EntryRegion::Name | EntryRegion::Owner | EntryRegion::Stars => self.details_visible(),
            EntryRegion::RemoveControl => self.remove_control_visible(),
            EntryRegion::Container => true,
        }
    }

    pub fn visible_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.preview_visible() {
            lines.push(self.record.name.clone());
        }
        if self.details_visible() {
            lines.push(format!("Name: {}", self.record.name));
            lines.push(format!("Owner: {}", self.record.owner_name));
            lines.push(format!("Stars: {}", self.record.star_count));
        }
        lines
    }
}

/// One lookup request derived from the search box text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Text as typed
    pub input: String,
    /// Value sent as the `q` parameter
    pub q: String,
    pub per_page: u8,
}

impl SearchQuery {
    pub fn new(input: &str, config: &SearchConfig) -> Self {
        Self {
            input: input.to_string(),
            q: format!("{}{}", input, config.query_suffix),
            per_page: config.per_page,
        }
    }
}

/// What a fired search decided to do with the current input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPlan {
    /// Leading space: nothing is requested and nothing is cleared
    Ignored,
    /// Empty input: results were cleared
    Cleared { removed: usize },
    /// Results were cleared and this lookup should be issued
    Fetch(SearchQuery),
}

/// Result of applying a finished lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Populated(usize),
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSnapshot {
    pub search_input: String,
    pub results: Vec<RepoEntry>,
    pub favorites: Vec<RepoEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetStats {
    pub keystrokes: u64,
    pub searches_fired: u64,
    pub requests_issued: u64,
    pub requests_failed: u64,
    pub favorites_added: u64,
    pub favorites_removed: u64,
    pub last_search_at: Option<DateTime<Utc>>,
}
