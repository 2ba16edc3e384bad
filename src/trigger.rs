//! Pagination trigger.
//!
//! A sentinel sits at the bottom of the rendered listing; every time it
//! becomes visible the trigger computes the next page request, gated on the
//! accumulator not already loading and not being exhausted. Duplicate
//! suppression for rapid repeated visibility events is the accumulator's
//! in-flight guard, not the trigger's job.

use log::debug;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::accumulator::CatalogAccumulator;

/// How many entries each sentinel visit asks for beyond what is held.
pub const DEFAULT_PAGE_INCREMENT: usize = 20;

/// Computes page request targets for sentinel visibility events.
#[derive(Debug, Clone)]
pub struct PaginationTrigger {
    page_increment: usize,
}

impl Default for PaginationTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationTrigger {
    pub fn new() -> Self {
        Self::with_increment(DEFAULT_PAGE_INCREMENT)
    }

    pub fn with_increment(page_increment: usize) -> Self {
        Self { page_increment }
    }

    pub fn page_increment(&self) -> usize {
        self.page_increment
    }

    /// Target size for one visibility event, or `None` while a request is
    /// outstanding or the catalog is exhausted.
    pub fn next_target(&self, accumulator: &CatalogAccumulator) -> Option<usize> {
        if accumulator.is_loading() {
            debug!("sentinel visible while loading; no request issued");
            return None;
        }
        if accumulator.is_exhausted() {
            debug!("sentinel visible on exhausted catalog; no request issued");
            return None;
        }
        Some(accumulator.len() + self.page_increment)
    }
}

/// Producer half of the sentinel visibility stream: the view marks the
/// sentinel visible, the session observes.
pub struct SentinelHandle {
    tx: UnboundedSender<()>,
}

impl SentinelHandle {
    /// Report that the sentinel entered the viewport.
    pub fn mark_visible(&self) {
        let _ = self.tx.send(());
    }

    /// False once the observing side has been dropped.
    pub fn is_observed(&self) -> bool {
        !self.tx.is_closed()
    }
}

/// Consumer half of the sentinel visibility stream. Dropping it releases the
/// observation: the handle's events go nowhere and `is_observed` turns false,
/// so a torn-down view leaves no forward references behind.
pub struct SentinelObserver {
    rx: UnboundedReceiver<()>,
}

impl SentinelObserver {
    /// Wait for the next visibility event. Returns `false` when the handle
    /// side is gone and no events remain.
    pub async fn visible(&mut self) -> bool {
        self.rx.recv().await.is_some()
    }
}

/// A fresh sentinel visibility channel.
pub fn sentinel_channel() -> (SentinelHandle, SentinelObserver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SentinelHandle { tx }, SentinelObserver { rx })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::CatalogEntry;

    fn entry(number: u32) -> CatalogEntry {
        CatalogEntry {
            id: format!("Pokemon:{:03}", number),
            number: format!("{:03}", number),
            name: format!("Entry{}", number),
            image: String::new(),
            types: vec![],
        }
    }

    #[test]
    fn one_request_per_visibility_event_while_idle() {
        let trigger = PaginationTrigger::new();
        let mut acc = CatalogAccumulator::new();

        let target = trigger.next_target(&acc).expect("idle accumulator");
        assert_eq!(target, DEFAULT_PAGE_INCREMENT);
        assert!(acc.begin_request(target));

        // A second visibility event before the first request resolves.
        assert_eq!(trigger.next_target(&acc), None);
    }

    #[test]
    fn reentry_after_a_page_resolves_requests_the_next_increment() {
        let trigger = PaginationTrigger::with_increment(2);
        let mut acc = CatalogAccumulator::new();

        let first = trigger.next_target(&acc).unwrap();
        assert!(acc.begin_request(first));
        acc.merge_page(first, vec![entry(1), entry(2)]);

        let second = trigger.next_target(&acc).unwrap();
        assert_eq!(second, 4);
    }

    #[test]
    fn exhausted_catalog_stops_triggering() {
        let trigger = PaginationTrigger::with_increment(2);
        let mut acc = CatalogAccumulator::new();

        assert!(acc.begin_request(2));
        acc.merge_page(2, vec![entry(1)]);
        assert!(acc.begin_request(4));
        acc.merge_page(4, vec![entry(1)]);
        assert!(acc.is_exhausted());

        assert_eq!(trigger.next_target(&acc), None);
    }

    #[tokio::test]
    async fn dropping_the_observer_releases_the_observation() {
        let (handle, observer) = sentinel_channel();
        assert!(handle.is_observed());

        drop(observer);

        assert!(!handle.is_observed());
        // Late events from a torn-down view go nowhere and do not panic.
        handle.mark_visible();
    }

    #[tokio::test]
    async fn observer_sees_events_in_order_then_ends_with_the_handle() {
        let (handle, mut observer) = sentinel_channel();

        handle.mark_visible();
        handle.mark_visible();
        drop(handle);

        assert!(observer.visible().await);
        assert!(observer.visible().await);
        assert!(!observer.visible().await);
    }
}
