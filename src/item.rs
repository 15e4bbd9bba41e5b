use serde::{Deserialize, Serialize};

use crate::errors::EngineResult;

/// A single wish-list entry.
///
/// Items are created and mutated by the data layer; the engine treats them as
/// immutable inputs for the duration of one computation and never writes to
/// them. Scoring state lives in side tables, so items returned from any engine
/// operation are structurally identical to the ones passed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub category_tags: Vec<String>,
    pub desire_score: u8,
    /// Identity of the user holding a dib on this item, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dibbed_by: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    /// `None` means uncategorized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
}

impl Item {
    pub fn is_dibbed(&self) -> bool {
        self.dibbed_by.is_some()
    }
}

/// A user-defined named grouping of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
}

/// Parse a JSON array of items as shipped by the data layer.
pub fn items_from_json(content: &str) -> EngineResult<Vec<Item>> {
    let items = serde_json::from_str(content)?;
    Ok(items)
}
