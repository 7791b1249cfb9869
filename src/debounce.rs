//! Trailing-edge debounce on the tokio runtime.
//!
//! Every [`Debouncer::trigger`] cancels the call scheduled by the previous one,
//! so the callback only ever sees the arguments of the latest trigger.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::trace;

pub struct Debouncer<T> {
    quiet_period: Duration,
    callback: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(quiet_period: Duration, callback: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            quiet_period,
            callback: Arc::new(callback),
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Schedules `callback(args)` one quiet period from now, replacing any
    /// call that has not fired yet. Must be called from within a tokio runtime.
    pub fn trigger(&mut self, args: T) {
        self.cancel();

        let deadline = Instant::now() + self.quiet_period;
        let callback = self.callback.clone();

        self.pending = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            callback(args);
        }));
    }

    /// Drops the scheduled call. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                trace!("Cancelled pending debounced call");
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
