use log::debug;
use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Status predicate over an item's dib/visibility fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Not reserved by anyone.
    Available,
    Reserved,
    Private,
    Public,
}

impl StatusFilter {
    /// Parse a raw status string from the UI layer.
    ///
    /// Unrecognized values mean "no status filter applied": the pipeline
    /// passes everything through rather than erroring on stale UI state.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "available" => Some(Self::Available),
            "reserved" => Some(Self::Reserved),
            "private" => Some(Self::Private),
            "public" => Some(Self::Public),
            other => {
                debug!("unrecognized status filter '{}', passing through", other);
                None
            }
        }
    }

    fn matches(&self, item: &Item) -> bool {
        match self {
            Self::Available => !item.is_dibbed(),
            Self::Reserved => item.is_dibbed(),
            Self::Private => item.is_private,
            Self::Public => !item.is_private,
        }
    }
}

/// Collection scope for the pipeline. `All` is the "no grouping" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollectionFilter {
    #[default]
    All,
    Only(String),
}

impl CollectionFilter {
    /// "all" (any casing) maps to the sentinel; anything else is a collection id.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(raw.trim().to_string())
        }
    }
}

/// Filter parameters supplied by the UI layer. All fields optional; an unset
/// field skips its pipeline stage entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemFilters {
    pub status: Option<StatusFilter>,
    pub category: Option<String>,
    /// Inclusive lower bound.
    pub min_desire_score: Option<u8>,
}

/// Applies the filter stages in a fixed, most-selective-first order:
/// collection, status, category tag, minimum desire score. Each stage operates
/// on the previous stage's output. Original relative order is preserved and
/// the operation is idempotent.
pub fn apply_filters(
    items: &[Item],
    filters: &ItemFilters,
    collection: &CollectionFilter,
) -> Vec<Item> {
    let mut out: Vec<Item> = match collection {
        CollectionFilter::All => items.to_vec(),
        CollectionFilter::Only(id) => items
            .iter()
            .filter(|item| item.collection_id.as_deref() == Some(id.as_str()))
            .cloned()
            .collect(),
    };

    if let Some(status) = filters.status {
        out.retain(|item| status.matches(item));
    }

    if let Some(category) = &filters.category {
        out.retain(|item| item.category_tags.iter().any(|tag| tag == category));
    }

    if let Some(min) = filters.min_desire_score {
        out.retain(|item| item.desire_score >= min);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, collection: Option<&str>, dibbed: bool, score: u8) -> Item {
        Item {
            id: id.to_string(),
            name: format!("item {}", id),
            description: None,
            category_tags: vec!["tech".to_string()],
            desire_score: score,
            dibbed_by: dibbed.then(|| "someone".to_string()),
            is_private: false,
            collection_id: collection.map(str::to_string),
        }
    }

    #[test]
    fn unknown_status_string_is_pass_through() {
        assert_eq!(StatusFilter::parse("wishlisted"), None);
        assert_eq!(StatusFilter::parse(" Available "), Some(StatusFilter::Available));
    }

    #[test]
    fn collection_sentinel_is_case_insensitive() {
        assert_eq!(CollectionFilter::parse("ALL"), CollectionFilter::All);
        assert_eq!(
            CollectionFilter::parse("tech"),
            CollectionFilter::Only("tech".to_string())
        );
    }

    #[test]
    fn stages_compose_in_order() {
        let items = vec![
            item("1", Some("tech"), false, 9),
            item("2", Some("tech"), true, 9),
            item("3", Some("books"), false, 9),
            item("4", Some("tech"), false, 3),
        ];
        let filters = ItemFilters {
            status: Some(StatusFilter::Available),
            category: None,
            min_desire_score: Some(7),
        };
        let out = apply_filters(&items, &filters, &CollectionFilter::parse("tech"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "1");
    }

    #[test]
    fn uncategorized_items_never_match_a_collection_id() {
        let items = vec![item("1", None, false, 5)];
        let out = apply_filters(
            &items,
            &ItemFilters::default(),
            &CollectionFilter::Only("tech".to_string()),
        );
        assert!(out.is_empty());
    }
}
