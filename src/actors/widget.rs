use crate::config::WidgetConfig;
use crate::controller::WidgetController;
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::github::RepoSearch;
use crate::models::{
    EntryId, EntryRegion, RepositoryRecord, SearchOutcome, SearchPlan, SearchQuery,
    WidgetSnapshot, WidgetStats,
};
use crate::notify::Notifier;
use chrono::Utc;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort, SpawnErr};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// Event loop of the widget. Every input, timer and response arrives as a
/// message and is handled one at a time.
pub struct WidgetActor;

/// State for the widget actor
pub struct WidgetState {
    controller: WidgetController,
    search: Arc<dyn RepoSearch>,
    debouncer: Debouncer<u64>,
    // Bumped on every keystroke; a fire armed by an older keystroke is stale
    generation: u64,
    snapshots: watch::Sender<WidgetSnapshot>,
    stats: WidgetStats,
}

/// Messages the widget can handle
#[derive(Debug)]
pub enum WidgetMessage {
    /// Key released in the search box, carrying its full current text
    KeyUp(String),
    /// Quiet period elapsed since the keystroke of the given generation
    FireSearch(u64),
    /// Lookup issued by a fired search has finished
    SearchCompleted {
        query: SearchQuery,
        outcome: Result<Vec<RepositoryRecord>>,
    },
    /// Click inside a result entry
    ResultClicked { entry: EntryId, region: EntryRegion },
    /// Click inside a favorite entry
    FavoritesClicked { entry: EntryId, region: EntryRegion },
    GetSnapshot(RpcReplyPort<WidgetSnapshot>),
    GetStats(RpcReplyPort<WidgetStats>),
}

/// Arguments for starting the widget
pub struct WidgetArgs {
    pub search: Arc<dyn RepoSearch>,
    pub notifier: Arc<dyn Notifier>,
    pub config: WidgetConfig,
    pub snapshots: watch::Sender<WidgetSnapshot>,
}

impl WidgetActor {
    /// Spawns a widget wired to the given search collaborator and alert sink.
    ///
    /// The returned receiver sees a fresh snapshot after every change to the
    /// input or either list.
    pub async fn spawn_widget(
        search: Arc<dyn RepoSearch>,
        notifier: Arc<dyn Notifier>,
        config: WidgetConfig,
    ) -> std::result::Result<(ActorRef<WidgetMessage>, watch::Receiver<WidgetSnapshot>), SpawnErr>
    {
        let (snapshots, receiver) = watch::channel(WidgetSnapshot::default());

        let args = WidgetArgs {
            search,
            notifier,
            config,
            snapshots,
        };

        let (actor_ref, _handle) = Actor::spawn(None, WidgetActor, args).await?;

        info!("Repository widget started");
        Ok((actor_ref, receiver))
    }
}

impl WidgetState {
    fn publish(&self) {
        // No receivers left only means nobody is rendering
        let _ = self.snapshots.send(self.controller.snapshot());
    }
}

#[ractor::async_trait]
impl Actor for WidgetActor {
    type Msg = WidgetMessage;
    type State = WidgetState;
    type Arguments = WidgetArgs;

    async fn pre_start(
        &self,
        myself: ActorRef<Self::Msg>,
        args: Self::Arguments,
    ) -> std::result::Result<Self::State, ActorProcessingErr> {
        info!(
            debounce_ms = (args.config.debounce.as_millis() as u64),
            per_page = args.config.search.per_page,
            query_suffix = %args.config.search.query_suffix,
            "Starting repository widget"
        );

        let fire_target = myself.clone();
        let debouncer = Debouncer::new(args.config.debounce, move |generation| {
            if let Err(e) = fire_target.send_message(WidgetMessage::FireSearch(generation)) {
                warn!("Failed to deliver debounced search: {}", e);
            }
        });

        Ok(WidgetState {
            controller: WidgetController::new(args.config.search, args.notifier),
            search: args.search,
            debouncer,
            generation: 0,
            snapshots: args.snapshots,
            stats: WidgetStats::default(),
        })
    }

    async fn handle(
        &self,
        myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> std::result::Result<(), ActorProcessingErr> {
        match message {
            WidgetMessage::KeyUp(text) => {
                state.stats.keystrokes += 1;
                state.controller.key_up(text);
                state.generation += 1;
                state.debouncer.trigger(state.generation);
                state.publish();
            }

            WidgetMessage::FireSearch(generation) if generation != state.generation => {
                // Posted before a newer keystroke re-armed the timer
                debug!(generation, current = state.generation, "Dropping stale search fire");
            }

            WidgetMessage::FireSearch(_) => {
                state.stats.searches_fired += 1;
                state.stats.last_search_at = Some(Utc::now());

                match state.controller.begin_search() {
                    SearchPlan::Ignored => {}
                    SearchPlan::Cleared { removed } => {
                        debug!(removed, "Results cleared for empty input");
                    }
                    SearchPlan::Fetch(query) => {
                        state.stats.requests_issued += 1;
                        debug!(
                            q = %query.q,
                            per_page = query.per_page,
                            "Issuing repository lookup"
                        );

                        // The loop keeps handling clicks and keystrokes while the lookup runs
                        let search = state.search.clone();
                        let reply_to = myself.clone();
                        tokio::spawn(async move {
                            let outcome = search.search_repositories(&query).await;
                            if let Err(e) = reply_to
                                .send_message(WidgetMessage::SearchCompleted { query, outcome })
                            {
                                error!("Failed to deliver search results: {}", e);
                            }
                        });
                    }
                }
                state.publish();
            }

            WidgetMessage::SearchCompleted { query, outcome } => {
                match state.controller.finish_search(outcome) {
                    SearchOutcome::Populated(count) => {
                        debug!(q = %query.q, count, "Lookup applied");
                    }
                    SearchOutcome::Failed(_) => {
                        state.stats.requests_failed += 1;
                    }
                }
                state.publish();
            }

            WidgetMessage::ResultClicked { entry, region } => {
                debug!(%entry, ?region, "Result clicked");
                if state.controller.select_result(entry) {
                    state.stats.favorites_added += 1;
                    state.publish();
                }
            }

            WidgetMessage::FavoritesClicked { entry, region } => {
                debug!(%entry, ?region, "Favorites clicked");
                if state.controller.click_favorite(entry, region) {
                    state.stats.favorites_removed += 1;
                    state.publish();
                }
            }

            WidgetMessage::GetSnapshot(reply) => {
                if !reply.is_closed() {
                    let _ = reply.send(state.controller.snapshot());
                }
            }

            WidgetMessage::GetStats(reply) => {
                if !reply.is_closed() {
                    let _ = reply.send(state.stats.clone());
                }
            }
        }

        Ok(())
    }

    async fn post_stop(
        &self,
        _myself: ActorRef<Self::Msg>,
        state: &mut Self::State,
    ) -> std::result::Result<(), ActorProcessingErr> {
        state.debouncer.cancel();
        info!(
            searches_fired = state.stats.searches_fired,
            favorites = state.controller.view().favorites().len(),
            "Repository widget stopped"
        );
        Ok(())
    }
}
