use crate::config::SearchConfig;
use crate::error::Result;
use crate::models::{
    EntryId, EntryRegion, RepositoryRecord, SearchOutcome, SearchPlan, SearchQuery,
    WidgetSnapshot,
};
use crate::notify::Notifier;
use crate::view::WidgetView;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Rules for the results and favorites lists.
///
/// Holds the view rather than extending it; every mutation of the two lists
/// goes through here.
pub struct WidgetController {
    view: WidgetView,
    config: SearchConfig,
    notifier: Arc<dyn Notifier>,
}

impl WidgetController {
    pub fn new(config: SearchConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            view: WidgetView::new(),
            config,
            notifier,
        }
    }

    pub fn view(&self) -> &WidgetView {
        &self.view
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn snapshot(&self) -> WidgetSnapshot {
        self.view.snapshot()
    }

    /// Key released in the search box; `text` is its full current contents
    pub fn key_up(&mut self, text: impl Into<String>) {
        self.view.set_search_input(text);
    }

    /// Decides what a fired search does, reading the input as it is now.
    pub fn begin_search(&mut self) -> SearchPlan {
        let input = self.view.search_input();

        if input.starts_with(' ') {
            debug!("Search input starts with a space, skipping");
            return SearchPlan::Ignored;
        }

        if input.is_empty() {
            let removed = self.view.clear_results();
            debug!(removed, "Search input emptied, results cleared");
            return SearchPlan::Cleared { removed };
        }

        let query = SearchQuery::new(input, &self.config);
        let removed = self.view.clear_results();
        debug!(q = %query.q, removed, "Cleared previous results before search");
        SearchPlan::Fetch(query)
    }

    /// Applies a finished lookup. Failures alert the user and leave the
    /// results list as it is.
    pub fn finish_search(&mut self, outcome: Result<Vec<RepositoryRecord>>) -> SearchOutcome {
        match outcome {
            Ok(records) => {
                let count = records.len();
                for record in records {
                    self.view.create_repo_entry(record);
                }
                info!(count, "Search results listed");
                SearchOutcome::Populated(count)
            }
            Err(e) => {
                let message = e.alert_message();
                warn!(kind = ?e.kind(), "Search attempt failed: {}", e);
                self.notifier.alert(&message);
                SearchOutcome::Failed(message)
            }
        }
    }

    /// A click anywhere inside a result entry moves it to favorites.
    ///
    /// The other results are discarded and the search box is emptied.
    /// Returns false if no result has that id.
    pub fn select_result(&mut self, id: EntryId) -> bool {
        let Some(mut entry) = self.view.take_result(id) else {
            debug!(%id, "Click outside any result entry");
            return false;
        };

        entry.toggle();
        info!(%id, repo = %entry.record.name, "Repository added to favorites");
        self.view.append_favorite(entry);
        self.view.clear_search_input();
        self.view.clear_results();
        true
    }

    /// A click inside the favorites list. Only a hit on the removal control
    /// of an entry removes that entry.
    pub fn click_favorite(&mut self, id: EntryId, region: EntryRegion) -> bool {
        let hit_remove = self
            .view
            .favorite(id)
            .map(|entry| region == EntryRegion::RemoveControl && entry.is_visible(region))
            .unwrap_or(false);

        if !hit_remove {
            return false;
        }

        match self.view.remove_favorite(id) {
            Some(entry) => {
                info!(%id, repo = %entry.record.name, "Repository removed from favorites");
                true
            }
            None => false,
        }
    }
}
