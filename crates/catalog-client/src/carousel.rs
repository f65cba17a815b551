//! Auto-advancing display index over the fetched collection.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// Position of the featured movie.
///
/// Shared between the session, which updates the collection length after each
/// fetch, and the timer task driving [`run_carousel`].
#[derive(Debug, Default)]
pub struct Carousel {
    index: AtomicUsize,
    len: AtomicUsize,
}

const fn next_index(index: usize, len: usize) -> usize {
    let next = index.saturating_add(1);
    if next >= len { 0 } else { next }
}

impl Carousel {
    /// Index of the featured movie; always 0 for an empty collection.
    #[must_use]
    pub fn current(&self) -> usize {
        let index = self.index.load(Ordering::Relaxed);
        if index < self.len.load(Ordering::Relaxed) {
            index
        } else {
            0
        }
    }

    /// Record a new collection length, rewinding when the index falls off
    /// the end.
    pub fn set_len(&self, len: usize) {
        self.len.store(len, Ordering::Relaxed);
        let _previous = self
            .index
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |index| {
                (index >= len).then_some(0)
            });
    }

    /// Move to the next movie, wrapping to the first after the last.
    pub fn advance(&self) {
        let len = self.len.load(Ordering::Relaxed);
        let _previous = self
            .index
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |index| {
                Some(next_index(index, len))
            });
    }
}

/// Advance `carousel` every `period` until the task is aborted.
///
/// The first step happens one full period after the call.
pub async fn run_carousel(carousel: Arc<Carousel>, period: Duration) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        ticker.tick().await;
        carousel.advance();
    }
}
