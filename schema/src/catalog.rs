use serde::{Deserialize, Serialize};

/// One entry of the browsable catalog listing.
///
/// Identity is carried by `id`: two entries with the same id are the same
/// logical record regardless of when they were fetched. `number` is the
/// display pokedex number as the service formats it (e.g. `"025"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub number: String,
    pub name: String,
    pub image: String,
    pub types: Vec<String>,
}

impl CatalogEntry {
    /// True when `tag` appears in this entry's type set.
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}
