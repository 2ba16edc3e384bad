//! Evolution chain resolution.
//!
//! The detail record carries its evolutions as a singly linked chain. The
//! renderer wants a flat ordered sequence instead, so this walks the links
//! iteratively, starting from the queried record itself.

use std::collections::HashSet;

use log::warn;
use schema::{EvolutionRequirement, PokemonDetail};

/// One renderable step of a resolved evolution chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionStage {
    pub id: String,
    pub number: String,
    pub name: String,
    pub image: String,
    /// True for the record the chain was resolved from.
    pub is_current: bool,
    /// Requirement of the step leading into this stage; `None` for the head.
    pub requirement: Option<EvolutionRequirement>,
}

/// Flattens the evolution chain of `detail` into an ordered sequence from
/// the queried record to its last known descendant.
///
/// Each node's own requirement labels the edge leading into it. The walk
/// keeps a visited-id set and ends silently on a repeated id, so malformed
/// cyclic data terminates instead of looping; an absent chain yields just
/// the queried record.
pub fn resolve_evolution_chain(detail: &PokemonDetail) -> Vec<EvolutionStage> {
    let mut stages = vec![EvolutionStage {
        id: detail.id.clone(),
        number: detail.number.clone(),
        name: detail.name.clone(),
        image: detail.image.clone(),
        is_current: true,
        requirement: None,
    }];

    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(detail.id.as_str());

    let mut cursor = detail.evolution.as_ref();
    while let Some(node) = cursor {
        if !visited.insert(node.id.as_str()) {
            warn!(
                "evolution chain of {} revisits id {}; treating the chain as ended",
                detail.name, node.id
            );
            break;
        }
        stages.push(EvolutionStage {
            id: node.id.clone(),
            number: node.number.clone(),
            name: node.name.clone(),
            image: node.image.clone(),
            is_current: false,
            requirement: node.requirement.clone(),
        });
        cursor = node.next.as_deref();
    }

    stages
}
