//! The Remote Catalog Source boundary.
//!
//! The catalog lives behind a query service that executes named queries with
//! parameters. This module carries the query texts, the typed decode of their
//! results, and the two traits that keep the transport itself out of the
//! engine: a [`QueryExecutor`] runs a query and hands back the raw `data`
//! payload, and a [`CatalogSource`] serves typed pages and detail records.

use async_trait::async_trait;
use schema::{CatalogEntry, PokemonDetail};
use serde_json::{json, Value};

use crate::errors::{SourceError, SourceResult};

/// Listing query: the first `$first` entries of the catalog.
pub const POKEMONS_QUERY: &str = "\
query pokemons($first: Int!) {
  pokemons(first: $first) {
    id
    number
    name
    image
    types
  }
}";

/// Detail query: one record by name, including the evolution chain.
pub const POKEMON_QUERY: &str = "\
query pokemon($name: String!) {
  pokemon(name: $name) {
    id
    number
    name
    image
    types
    classification
    height {
      minimum
      maximum
    }
    weight {
      minimum
      maximum
    }
    attacks {
      fast {
        name
        type
        damage
      }
      special {
        name
        type
        damage
      }
    }
    evolution {
      ...evolutionFields
      next {
        ...evolutionFields
        next {
          ...evolutionFields
        }
      }
    }
  }
}
fragment evolutionFields on Evolution {
  id
  number
  name
  image
  requirement {
    amount
    name
  }
}";

/// Executes a named query with its variables and returns the `data` payload.
///
/// Implementations own the transport (HTTP client, cache, whatever); the
/// engine only sees typed results or a [`SourceError`].
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, query: &str, variables: Value) -> SourceResult<Value>;
}

/// The remote collaborator the engine consumes.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// The first `count` entries of the catalog, in catalog order.
    ///
    /// Idempotent in content: the same `count` against an unchanged backing
    /// catalog returns the same prefix.
    async fn fetch_catalog_page(&self, count: usize) -> SourceResult<Vec<CatalogEntry>>;

    /// The full record for `name`, or `None` when the service has no such
    /// record. Matching semantics (case folding etc.) belong to the source.
    async fn fetch_detail(&self, name: &str) -> SourceResult<Option<PokemonDetail>>;
}

/// Adapts any [`QueryExecutor`] into a typed [`CatalogSource`].
pub struct RemoteCatalogSource<E> {
    executor: E,
}

impl<E> RemoteCatalogSource<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl<E: QueryExecutor> CatalogSource for RemoteCatalogSource<E> {
    async fn fetch_catalog_page(&self, count: usize) -> SourceResult<Vec<CatalogEntry>> {
        let data = self
            .executor
            .execute(POKEMONS_QUERY, json!({ "first": count }))
            .await?;
        decode_catalog_page(data)
    }

    async fn fetch_detail(&self, name: &str) -> SourceResult<Option<PokemonDetail>> {
        let data = self
            .executor
            .execute(POKEMON_QUERY, json!({ "name": name }))
            .await?;
        decode_detail(data)
    }
}

fn decode_catalog_page(mut data: Value) -> SourceResult<Vec<CatalogEntry>> {
    match data.get_mut("pokemons") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(list) => serde_json::from_value(list.take())
            .map_err(|e| SourceError::Decode(format!("pokemons payload: {}", e))),
    }
}

fn decode_detail(mut data: Value) -> SourceResult<Option<PokemonDetail>> {
    match data.get_mut("pokemon") {
        None | Some(Value::Null) => Ok(None),
        Some(record) => serde_json::from_value(record.take())
            .map(Some)
            .map_err(|e| SourceError::Decode(format!("pokemon payload: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct CannedExecutor {
        payload: Value,
    }

    #[async_trait]
    impl QueryExecutor for CannedExecutor {
        async fn execute(&self, _query: &str, _variables: Value) -> SourceResult<Value> {
            Ok(self.payload.clone())
        }
    }

    struct FailingExecutor;

    #[async_trait]
    impl QueryExecutor for FailingExecutor {
        async fn execute(&self, _query: &str, _variables: Value) -> SourceResult<Value> {
            Err(SourceError::Transport("connection refused".to_string()))
        }
    }

    #[test]
    fn decodes_catalog_page() {
        let data = json!({
            "pokemons": [
                {
                    "id": "UG9rZW1vbjowMjU=",
                    "number": "025",
                    "name": "Pikachu",
                    "image": "https://img.pokemondb.net/artwork/pikachu.jpg",
                    "types": ["Electric"]
                }
            ]
        });

        let page = decode_catalog_page(data).expect("page should decode");
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name, "Pikachu");
        assert_eq!(page[0].types, vec!["Electric".to_string()]);
    }

    #[test]
    fn missing_or_null_listing_decodes_to_empty_page() {
        assert_eq!(decode_catalog_page(json!({})).unwrap(), Vec::new());
        assert_eq!(decode_catalog_page(json!({ "pokemons": null })).unwrap(), Vec::new());
    }

    #[test]
    fn malformed_listing_is_a_decode_error() {
        let data = json!({ "pokemons": [{ "name": 42 }] });
        match decode_catalog_page(data) {
            Err(SourceError::Decode(_)) => {}
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn decodes_detail_with_nested_evolution_chain() {
        let data = json!({
            "pokemon": {
                "id": "UG9rZW1vbjowMDE=",
                "number": "001",
                "name": "Bulbasaur",
                "image": "https://img.pokemondb.net/artwork/bulbasaur.jpg",
                "types": ["Grass", "Poison"],
                "classification": "Seed Pokemon",
                "height": { "minimum": "0.61m", "maximum": "0.79m" },
                "weight": { "minimum": "6.04kg", "maximum": "7.76kg" },
                "attacks": {
                    "fast": [{ "name": "Tackle", "type": "Normal", "damage": 12 }],
                    "special": [{ "name": "Power Whip", "type": "Grass", "damage": 70 }]
                },
                "evolution": {
                    "id": "UG9rZW1vbjowMDI=",
                    "number": "002",
                    "name": "Ivysaur",
                    "image": "https://img.pokemondb.net/artwork/ivysaur.jpg",
                    "requirement": { "amount": 25, "name": "Bulbasaur candies" },
                    "next": null
                }
            }
        });

        let detail = decode_detail(data)
            .expect("detail should decode")
            .expect("record should be present");
        assert_eq!(detail.classification, "Seed Pokemon");
        assert_eq!(detail.attacks.fast[0].element_type, "Normal");
        let chain = detail.evolution.expect("evolution chain present");
        assert_eq!(chain.name, "Ivysaur");
        assert_eq!(chain.requirement.unwrap().amount, 25);
        assert_eq!(chain.next, None);
    }

    #[test]
    fn null_record_decodes_to_not_found() {
        let data = json!({ "pokemon": null });
        assert_eq!(decode_detail(data).unwrap(), None);
    }

    #[tokio::test]
    async fn remote_source_round_trips_through_an_executor() {
        let executor = CannedExecutor {
            payload: json!({
                "pokemons": [
                    {
                        "id": "UG9rZW1vbjowMDQ=",
                        "number": "004",
                        "name": "Charmander",
                        "image": "https://img.pokemondb.net/artwork/charmander.jpg",
                        "types": ["Fire"]
                    }
                ]
            }),
        };
        let source = RemoteCatalogSource::new(executor);

        let page = source.fetch_catalog_page(20).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].number, "004");
    }

    #[tokio::test]
    async fn transport_failure_propagates_unchanged() {
        let source = RemoteCatalogSource::new(FailingExecutor);

        let err = source.fetch_detail("Pikachu").await.unwrap_err();
        assert_eq!(err, SourceError::Transport("connection refused".to_string()));
    }
}
