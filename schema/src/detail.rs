use crate::catalog::CatalogEntry;
use crate::evolution::Evolution;
use serde::{Deserialize, Serialize};

/// Inclusive display range as the service formats it, e.g. `"0.35m"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasuredRange {
    pub minimum: String,
    pub maximum: String,
}

/// A single attack known by a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    /// Element of the attack; named `type` on the wire.
    #[serde(rename = "type")]
    pub element_type: String,
    pub damage: u32,
}

/// The fast and special attack lists of a record, each in service order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRoster {
    pub fast: Vec<Attack>,
    pub special: Vec<Attack>,
}

/// The full single-record view: everything a `CatalogEntry` carries plus
/// classification, measured ranges, attacks, and the evolution chain head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: String,
    pub number: String,
    pub name: String,
    pub image: String,
    pub types: Vec<String>,
    pub classification: String,
    pub height: MeasuredRange,
    pub weight: MeasuredRange,
    #[serde(default)]
    pub attacks: AttackRoster,
    #[serde(default)]
    pub evolution: Option<Evolution>,
}

impl PokemonDetail {
    /// The catalog listing view of this record.
    pub fn as_catalog_entry(&self) -> CatalogEntry {
        CatalogEntry {
            id: self.id.clone(),
            number: self.number.clone(),
            name: self.name.clone(),
            image: self.image.clone(),
            types: self.types.clone(),
        }
    }
}
