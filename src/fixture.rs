//! Fixture catalog source.
//!
//! An in-process stand-in for the remote query service, backed by one RON
//! record per file under `data/pokemon/` (`NNN-name.ron`). It honors the
//! same contract: page requests return the first `count` records in pokedex
//! order, idempotently, and detail lookup matches the name without regard
//! to ASCII case.

use std::fs;
use std::path::Path;

use async_trait::async_trait;
use schema::{CatalogEntry, PokemonDetail};

use crate::errors::{FixtureDataError, FixtureResult, SourceResult};
use crate::source::CatalogSource;

#[derive(Clone)]
pub struct FixtureSource {
    records: Vec<PokemonDetail>,
}

impl FixtureSource {
    /// Load every `.ron` record under `data_path/pokemon`, ordered by file
    /// name (the `NNN-name.ron` convention keeps pokedex order).
    pub fn load(data_path: &Path) -> FixtureResult<Self> {
        let pokemon_dir = data_path.join("pokemon");
        if !pokemon_dir.exists() {
            return Err(FixtureDataError::MissingDataDir(
                pokemon_dir.display().to_string(),
            ));
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(&pokemon_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut records = Vec::with_capacity(paths.len());
        for path in paths {
            let content = fs::read_to_string(&path)?;
            let record: PokemonDetail =
                ron::from_str(&content).map_err(|e| FixtureDataError::Malformed {
                    file: path.display().to_string(),
                    details: e.to_string(),
                })?;
            records.push(record);
        }

        Ok(Self { records })
    }

    /// Build a source directly from records, for tests and embedding.
    pub fn from_records(records: Vec<PokemonDetail>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl CatalogSource for FixtureSource {
    async fn fetch_catalog_page(&self, count: usize) -> SourceResult<Vec<CatalogEntry>> {
        Ok(self
            .records
            .iter()
            .take(count)
            .map(PokemonDetail::as_catalog_entry)
            .collect())
    }

    async fn fetch_detail(&self, name: &str) -> SourceResult<Option<PokemonDetail>> {
        Ok(self
            .records
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
            .cloned())
    }
}
