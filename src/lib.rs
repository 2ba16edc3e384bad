// In: src/lib.rs

//! Pokemon Catalog Engine
//!
//! The retrieval, merge, pagination, and filtering engine behind a browsable
//! Pokemon catalog, plus the evolution-chain resolver for the single-record
//! detail view. Query transport and presentation are collaborators consumed
//! at trait boundaries; the bundled fixture source stands in for the remote
//! service in the binaries and tests.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod accumulator;
pub mod browse;
pub mod debounce;
pub mod detail;
pub mod display;
pub mod errors;
pub mod evolution;
pub mod filter;
pub mod fixture;
pub mod source;
pub mod trigger;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pokemon-catalog` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export all core data definitions.
pub use schema::{
    Attack, AttackRoster, CatalogEntry, Evolution, EvolutionRequirement, MeasuredRange,
    PokemonDetail,
};

// --- From this crate's modules (`src/`) ---

// Core engine state and the session facade.
pub use accumulator::{CatalogAccumulator, CatalogSnapshot};
pub use browse::{lookup_channel, BrowseSession, LookupReceiver, LookupSender};
pub use filter::FilterCriteria;

// Input, pagination, and the source boundary.
pub use debounce::{DebouncedInput, DEFAULT_QUIET_INTERVAL};
pub use fixture::FixtureSource;
pub use source::{CatalogSource, QueryExecutor, RemoteCatalogSource};
pub use trigger::{
    sentinel_channel, PaginationTrigger, SentinelHandle, SentinelObserver, DEFAULT_PAGE_INCREMENT,
};

// The single-record view and its chain resolver.
pub use detail::{DetailState, DetailView};
pub use evolution::{resolve_evolution_chain, EvolutionStage};

// Crate-specific error and result types.
pub use errors::{FixtureDataError, FixtureResult, SourceError, SourceResult};
