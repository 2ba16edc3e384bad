//! The browsing session: one source, one accumulator, the current filter
//! criteria, and the pagination trigger, wired together the way the two
//! binaries consume them. Also carries the lookup channel that hands the
//! settled search key from the Search role to the Result role.

use log::debug;
use schema::CatalogEntry;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::accumulator::{CatalogAccumulator, CatalogSnapshot};
use crate::errors::SourceResult;
use crate::filter::FilterCriteria;
use crate::source::CatalogSource;
use crate::trigger::{PaginationTrigger, SentinelObserver};

/// Sends the settled lookup key from the Search role to the Result role.
///
/// An explicit channel with a single payload (the new lookup key), rather
/// than an ambient broadcast: the receiving view drives its
/// [`DetailView`](crate::detail::DetailView) from these events.
#[derive(Clone)]
pub struct LookupSender {
    tx: UnboundedSender<String>,
}

impl LookupSender {
    /// Announce a completed search. Dropped silently if the result role is
    /// torn down.
    pub fn announce(&self, name: impl Into<String>) {
        let _ = self.tx.send(name.into());
    }
}

/// Receiving half of the lookup channel.
pub type LookupReceiver = UnboundedReceiver<String>;

/// A fresh search-to-result lookup channel.
pub fn lookup_channel() -> (LookupSender, LookupReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (LookupSender { tx }, rx)
}

/// One browsing session over a remote catalog.
///
/// Created empty, grows as pages merge, and is simply dropped at teardown;
/// nothing persists. Only this session mutates its accumulator, and only
/// through page results.
pub struct BrowseSession<S> {
    source: S,
    accumulator: CatalogAccumulator,
    criteria: FilterCriteria,
    trigger: PaginationTrigger,
}

impl<S: CatalogSource> BrowseSession<S> {
    pub fn new(source: S) -> Self {
        Self::with_trigger(source, PaginationTrigger::new())
    }

    pub fn with_trigger(source: S, trigger: PaginationTrigger) -> Self {
        Self {
            source,
            accumulator: CatalogAccumulator::new(),
            criteria: FilterCriteria::new(),
            trigger,
        }
    }

    pub fn accumulator(&self) -> &CatalogAccumulator {
        &self.accumulator
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Load the first page (one increment's worth of entries).
    pub async fn load_initial(&mut self) -> SourceResult<()> {
        self.request_page(self.trigger.page_increment()).await
    }

    /// Handle one sentinel visibility event.
    pub async fn on_sentinel_visible(&mut self) -> SourceResult<()> {
        match self.trigger.next_target(&self.accumulator) {
            Some(target) => self.request_page(target).await,
            None => Ok(()),
        }
    }

    /// Ask the source for the first `target_size` entries and merge the
    /// result. A suppressed request (in flight, exhausted, already applied)
    /// is a silent no-op; a transport failure clears the in-flight marker
    /// and propagates for display.
    pub async fn request_page(&mut self, target_size: usize) -> SourceResult<()> {
        if !self.accumulator.begin_request(target_size) {
            return Ok(());
        }
        match self.source.fetch_catalog_page(target_size).await {
            Ok(page) => {
                debug!("page result for {}: {} entries", target_size, page.len());
                self.accumulator.merge_page(target_size, page);
                Ok(())
            }
            Err(err) => {
                self.accumulator.abort_request(target_size);
                Err(err)
            }
        }
    }

    /// Keep loading pages as sentinel events arrive, until the producing
    /// view detaches or the catalog is exhausted.
    pub async fn drive_autoload(&mut self, observer: &mut SentinelObserver) -> SourceResult<()> {
        while !self.accumulator.is_exhausted() && observer.visible().await {
            self.on_sentinel_visible().await?;
        }
        Ok(())
    }

    /// Replace the settled name term.
    pub fn set_query_term(&mut self, term: impl Into<String>) {
        self.criteria.set_term(term);
    }

    pub fn select_type(&mut self, tag: impl Into<String>) {
        self.criteria.select_type(tag);
    }

    pub fn deselect_type(&mut self, tag: &str) {
        self.criteria.deselect_type(tag);
    }

    pub fn clear_types(&mut self) {
        self.criteria.clear_types();
    }

    /// Read-only snapshot of the accumulated catalog.
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.accumulator.snapshot()
    }

    /// The filtered view of the accumulated catalog, in accumulator order.
    pub fn visible_entries(&self) -> Vec<CatalogEntry> {
        self.criteria
            .apply(self.accumulator.entries())
            .into_iter()
            .cloned()
            .collect()
    }
}
