use serde::{Deserialize, Serialize};

/// What must be spent to take the evolution step leading into a node,
/// e.g. `25 Pikachu candies`. Field names follow the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionRequirement {
    pub amount: u32,
    pub name: String,
}

/// One node of a singly linked evolution chain.
///
/// Well-formed data is finite and acyclic; consumers walking `next` must
/// still bound themselves against malformed inputs (see the resolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evolution {
    pub id: String,
    pub number: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub requirement: Option<EvolutionRequirement>,
    #[serde(default)]
    pub next: Option<Box<Evolution>>,
}
