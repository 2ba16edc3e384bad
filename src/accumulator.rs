//! The locally materialized view of the paginated remote catalog.
//!
//! The query service returns the *entire* prefix for every page request, not
//! a delta. Replacing the local collection wholesale would drop entries that
//! appeared out of band and would break identity for already-rendered rows,
//! so results are merged by id: unseen entries append in arrival order and
//! existing entries are never touched.

use std::collections::HashSet;

use log::{debug, warn};
use schema::CatalogEntry;

/// Read-only view of the accumulated catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub entries: Vec<CatalogEntry>,
    pub exhausted: bool,
}

/// Deduplicated, order-stable accumulation of paginated page results.
///
/// One exists per browsing session. It is the only place page results are
/// applied; every other component reads [`snapshot`](Self::snapshot)s.
#[derive(Debug, Default)]
pub struct CatalogAccumulator {
    entries: Vec<CatalogEntry>,
    seen: HashSet<String>,
    /// Largest size ever requested; only grows.
    requested: usize,
    /// Largest request size whose result has been applied (stale guard).
    applied: usize,
    in_flight: Option<usize>,
    exhausted: bool,
}

impl CatalogAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True while a page request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// True once the server has stopped growing the prefix. Never reverts.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Largest size ever passed to [`begin_request`](Self::begin_request).
    pub fn requested_size(&self) -> usize {
        self.requested
    }

    /// The accumulated entries in first-seen order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Register intent to fetch the first `target_size` entries.
    ///
    /// Returns `false` (a silent no-op) when the catalog is exhausted, when a
    /// request for an equal-or-larger size is already outstanding, or when a
    /// result of equal-or-larger size has already been applied. At most one
    /// request is in flight, keyed by monotonic target size: a strictly
    /// larger target supersedes a smaller outstanding one.
    pub fn begin_request(&mut self, target_size: usize) -> bool {
        if self.exhausted {
            debug!(
                "suppressing page request for {}: catalog is exhausted",
                target_size
            );
            return false;
        }
        if let Some(pending) = self.in_flight {
            if pending >= target_size {
                debug!(
                    "suppressing page request for {}: request for {} already in flight",
                    target_size, pending
                );
                return false;
            }
        }
        if target_size <= self.applied {
            debug!(
                "suppressing page request for {}: a result for {} was already applied",
                target_size, self.applied
            );
            return false;
        }
        self.in_flight = Some(target_size);
        self.requested = self.requested.max(target_size);
        true
    }

    /// Forget the in-flight marker after a failed fetch so a later attempt
    /// may retry the same size.
    pub fn abort_request(&mut self, for_size: usize) {
        if let Some(pending) = self.in_flight {
            if pending <= for_size {
                self.in_flight = None;
            }
        }
    }

    /// Merge the full prefix collection returned for a request of `for_size`.
    ///
    /// Results must be applied in arrival order; a result for a size no
    /// larger than one already applied is discarded whole, so a response for
    /// 40 arriving after 60 has merged cannot shrink or reorder anything.
    /// A strictly larger request that produced no growth latches `exhausted`.
    pub fn merge_page(&mut self, for_size: usize, page: Vec<CatalogEntry>) {
        if let Some(pending) = self.in_flight {
            if pending <= for_size {
                self.in_flight = None;
            }
        }
        if self.exhausted {
            debug!("discarding page result for size {}: catalog is exhausted", for_size);
            return;
        }
        if for_size <= self.applied {
            warn!(
                "discarding stale page result for size {} ({} already applied)",
                for_size, self.applied
            );
            return;
        }
        self.applied = for_size;

        let held = self.entries.len();
        if for_size > held && page.len() <= held {
            debug!("catalog exhausted at {} entries", held);
            self.exhausted = true;
            return;
        }
        for entry in page {
            if self.seen.insert(entry.id.clone()) {
                self.entries.push(entry);
            }
        }
    }

    /// Current ordered sequence and exhaustion flag. No side effects.
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            entries: self.entries.clone(),
            exhausted: self.exhausted,
        }
    }
}
