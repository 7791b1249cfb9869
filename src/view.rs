//! Element handles of the widget: the search box text and the two lists.
//!
//! The view only knows how to create, move and drop entries. When those
//! operations happen is decided by [`crate::controller::WidgetController`].

use crate::models::{EntryId, RepoEntry, RepositoryRecord, WidgetSnapshot};

#[derive(Debug, Default)]
pub struct WidgetView {
    search_input: String,
    results: Vec<RepoEntry>,
    favorites: Vec<RepoEntry>,
    next_entry_id: u64,
}

impl WidgetView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    pub fn clear_search_input(&mut self) {
        self.search_input.clear();
    }

    pub fn results(&self) -> &[RepoEntry] {
        &self.results
    }

    pub fn favorites(&self) -> &[RepoEntry] {
        &self.favorites
    }

    /// Renders a collapsed entry at the end of the results list
    pub fn create_repo_entry(&mut self, record: RepositoryRecord) -> EntryId {
        self.next_entry_id += 1;
        let id = EntryId(self.next_entry_id);
        self.results.push(RepoEntry::new(id, record));
        id
    }

    /// Drops every result entry, returning how many there were
    pub fn clear_results(&mut self) -> usize {
        let removed = self.results.len();
        self.results.clear();
        removed
    }

    /// Detaches one entry from the results list
    pub fn take_result(&mut self, id: EntryId) -> Option<RepoEntry> {
        let position = self.results.iter().position(|entry| entry.id == id)?;
        Some(self.results.remove(position))
    }

    pub fn append_favorite(&mut self, entry: RepoEntry) {
        self.favorites.push(entry);
    }

    pub fn favorite(&self, id: EntryId) -> Option<&RepoEntry> {
        self.favorites.iter().find(|entry| entry.id == id)
    }

    pub fn remove_favorite(&mut self, id: EntryId) -> Option<RepoEntry> {
        let position = self.favorites.iter().position(|entry| entry.id == id)?;
        Some(self.favorites.remove(position))
    }

    pub fn snapshot(&self) -> WidgetSnapshot {
        WidgetSnapshot {
            search_input: self.search_input.clone(),
            results: self.results.clone(),
            favorites: self.favorites.clone(),
        }
    }
}
