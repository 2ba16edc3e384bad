//! Single-record detail view.
//!
//! Lifecycle per lookup key: `Idle -> Loading -> {Success | NotFound |
//! Errored}`, and back to `Loading` only via a new lookup. Every lookup
//! issues a fresh source request, even for a key that was just looked up;
//! whatever caching exists belongs to the source.

use log::debug;
use schema::PokemonDetail;

use crate::errors::SourceError;
use crate::evolution::{resolve_evolution_chain, EvolutionStage};
use crate::source::CatalogSource;

/// State of the record view.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Idle,
    Loading {
        name: String,
    },
    /// The record plus its resolved evolution sequence.
    Success {
        detail: PokemonDetail,
        chain: Vec<EvolutionStage>,
    },
    /// The source answered without error but holds no such record.
    NotFound {
        name: String,
    },
    /// The source transport failed; a later lookup is a fresh attempt.
    Errored {
        name: String,
        error: SourceError,
    },
}

/// Drives detail lookups against a catalog source.
pub struct DetailView<S> {
    source: S,
    state: DetailState,
}

impl<S: CatalogSource> DetailView<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: DetailState::Idle,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Look up `name` and settle in one of the terminal states.
    pub async fn lookup(&mut self, name: &str) -> &DetailState {
        debug!("looking up detail record for {:?}", name);
        self.state = DetailState::Loading {
            name: name.to_string(),
        };

        self.state = match self.source.fetch_detail(name).await {
            Ok(Some(detail)) => {
                let chain = resolve_evolution_chain(&detail);
                DetailState::Success { detail, chain }
            }
            Ok(None) => DetailState::NotFound {
                name: name.to_string(),
            },
            Err(error) => DetailState::Errored {
                name: name.to_string(),
                error,
            },
        };
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use schema::{AttackRoster, CatalogEntry, MeasuredRange};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::errors::SourceResult;

    fn record(name: &str) -> PokemonDetail {
        PokemonDetail {
            id: format!("id-{}", name),
            number: "025".to_string(),
            name: name.to_string(),
            image: String::new(),
            types: vec!["Electric".to_string()],
            classification: "Mouse Pokemon".to_string(),
            height: MeasuredRange {
                minimum: "0.35m".to_string(),
                maximum: "0.45m".to_string(),
            },
            weight: MeasuredRange {
                minimum: "5.25kg".to_string(),
                maximum: "6.75kg".to_string(),
            },
            attacks: AttackRoster::default(),
            evolution: None,
        }
    }

    /// Source double scripted per lookup; counts every detail request.
    struct ScriptedSource {
        record: Option<PokemonDetail>,
        fail: bool,
        lookups: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CatalogSource for ScriptedSource {
        async fn fetch_catalog_page(&self, _count: usize) -> SourceResult<Vec<CatalogEntry>> {
            Ok(Vec::new())
        }

        async fn fetch_detail(&self, _name: &str) -> SourceResult<Option<PokemonDetail>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SourceError::Transport("service unavailable".to_string()));
            }
            Ok(self.record.clone())
        }
    }

    #[tokio::test]
    async fn starts_idle_and_reaches_success_with_a_resolved_chain() {
        let lookups = Arc::new(AtomicUsize::new(0));
        let mut view = DetailView::new(ScriptedSource {
            record: Some(record("Pikachu")),
            fail: false,
            lookups: lookups.clone(),
        });
        assert_eq!(*view.state(), DetailState::Idle);

        match view.lookup("Pikachu").await {
            DetailState::Success { detail, chain } => {
                assert_eq!(detail.name, "Pikachu");
                assert_eq!(chain.len(), 1);
                assert!(chain[0].is_current);
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn absent_record_is_not_found_not_an_error() {
        let mut view = DetailView::new(ScriptedSource {
            record: None,
            fail: false,
            lookups: Arc::new(AtomicUsize::new(0)),
        });

        let state = view.lookup("MissingNo").await;

        assert_eq!(
            *state,
            DetailState::NotFound {
                name: "MissingNo".to_string()
            }
        );
    }

    #[tokio::test]
    async fn transport_failure_reaches_errored_with_the_source_error() {
        let mut view = DetailView::new(ScriptedSource {
            record: None,
            fail: true,
            lookups: Arc::new(AtomicUsize::new(0)),
        });

        let state = view.lookup("Pikachu").await;

        assert_eq!(
            *state,
            DetailState::Errored {
                name: "Pikachu".to_string(),
                error: SourceError::Transport("service unavailable".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn resubmitting_the_same_key_issues_a_fresh_request() {
        let lookups = Arc::new(AtomicUsize::new(0));
        let mut view = DetailView::new(ScriptedSource {
            record: Some(record("Pikachu")),
            fail: false,
            lookups: lookups.clone(),
        });

        view.lookup("Pikachu").await;
        view.lookup("Pikachu").await;

        assert_eq!(lookups.load(Ordering::SeqCst), 2);
    }
}
