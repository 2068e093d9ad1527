use serde::{Deserialize, Serialize};

/// One entry of the immutable Pokédex catalog.
///
/// `id` is 1-based and coincides with the row's position in load order;
/// the loader rejects files where the two disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub poke_type: String,
    pub hp: i32,
    pub attack: i32,
    pub can_evolve: bool,
}
