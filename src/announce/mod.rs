//! Live-region accessibility announcements
//!
//! Assistive technology only voices a live region when its content changes,
//! so announcing the same text twice in a row does nothing if the text is
//! written directly. Every announcement therefore clears the target channel
//! first and writes the message after a short fixed delay, forcing a content
//! change each time.
//!
//! The host supplies both seams: a [`LiveRegion`] sink for the page's
//! polite/assertive output elements and a [`Scheduler`] for the delayed
//! write. Scheduled callbacks are fire-and-forget; they observe whatever
//! state exists when they run, with no cancellation and no ordering
//! guarantee relative to other scheduled work.

use std::sync::Arc;
use std::time::Duration;

use strum::{Display, EnumString};

use crate::query::{TaskFilter, TaskSort};
use crate::search::summarize_results;

/// Delay between clearing a channel and writing the next message
pub const ANNOUNCE_DELAY: Duration = Duration::from_millis(100);

/// Interruption severity of an announcement channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Politeness {
    /// Read when the user is idle
    Polite,
    /// Interrupts current speech
    Assertive,
}

/// Host-side live-region sink
pub trait LiveRegion: Send + Sync {
    fn set_text(&self, channel: Politeness, text: &str);
}

/// Fire-and-forget delayed execution
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce() + Send>);
}

/// Scheduler backed by the tokio timer.
///
/// `schedule` spawns onto the ambient runtime, so it must be called from
/// within a runtime context.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce() + Send>) {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
    }
}

/// Emits live-region updates for search, filter, and sort operations
pub struct AccessibilityAnnouncer {
    region: Arc<dyn LiveRegion>,
    scheduler: Arc<dyn Scheduler>,
}

impl AccessibilityAnnouncer {
    pub fn new(region: Arc<dyn LiveRegion>, scheduler: Arc<dyn Scheduler>) -> Self {
        Self { region, scheduler }
    }

    /// Clear the channel, then write `message` after [`ANNOUNCE_DELAY`].
    ///
    /// The two-step forces a content change so identical consecutive
    /// messages are still voiced.
    pub fn announce(&self, message: impl Into<String>, politeness: Politeness) {
        let message = message.into();
        tracing::debug!(channel = %politeness, message = %message, "Announcing");

        self.region.set_text(politeness, "");

        let region = Arc::clone(&self.region);
        self.scheduler.schedule(
            ANNOUNCE_DELAY,
            Box::new(move || {
                region.set_text(politeness, &message);
            }),
        );
    }

    /// Announce the current result count with the shared summary phrasing.
    pub fn announce_result_count(&self, count: usize, query: &str, filter: Option<TaskFilter>) {
        self.announce(summarize_results(count, query, filter), Politeness::Polite);
    }

    /// Announce a filter change along with the resulting count.
    pub fn announce_filter_change(&self, filter: TaskFilter, count: usize) {
        let summary = summarize_results(count, "", None);
        self.announce(
            format!("Filter changed to {}. {}", filter, summary),
            Politeness::Polite,
        );
    }

    /// Announce a sort change.
    pub fn announce_sort_change(&self, sort: TaskSort) {
        self.announce(
            format!("Tasks sorted by {}", sort.description()),
            Politeness::Polite,
        );
    }
}
