#![allow(dead_code)]

use wishlist_engine::capability::{CapabilityProfile, PerformanceSettings};
use wishlist_engine::item::Item;

/// Builder-style item constructor so individual tests only spell out the
/// fields they care about.
pub fn item(id: &str, name: &str) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        category_tags: Vec::new(),
        desire_score: 5,
        dibbed_by: None,
        is_private: false,
        collection_id: None,
    }
}

pub fn with_description(mut item: Item, description: &str) -> Item {
    item.description = Some(description.to_string());
    item
}

pub fn with_tags(mut item: Item, tags: &[&str]) -> Item {
    item.category_tags = tags.iter().map(|t| t.to_string()).collect();
    item
}

pub fn with_collection(mut item: Item, collection: &str) -> Item {
    item.collection_id = Some(collection.to_string());
    item
}

pub fn with_score(mut item: Item, score: u8) -> Item {
    item.desire_score = score;
    item
}

pub fn dibbed(mut item: Item, by: &str) -> Item {
    item.dibbed_by = Some(by.to_string());
    item
}

/// A small fixed catalog covering names, descriptions, tags, and collections.
pub fn sample_catalog() -> Vec<Item> {
    vec![
        with_tags(
            with_collection(
                with_description(item("1", "Running shoes"), "lightweight trail shoes"),
                "sport",
            ),
            &["shoes", "outdoor"],
        ),
        with_tags(
            with_collection(item("2", "Noise cancelling headphones"), "tech"),
            &["audio", "tech"],
        ),
        with_tags(
            with_collection(
                with_description(item("3", "Wool scarf"), "hand knitted, grey"),
                "clothes",
            ),
            &["winter"],
        ),
        with_tags(
            with_collection(
                with_description(item("4", "Mechanical keyboard"), "tenkeyless, brown switches"),
                "tech",
            ),
            &["tech", "desk"],
        ),
        with_collection(item("5", "Shoe rack"), "home"),
    ]
}

/// `n` generated items with desire scores cycling 1..=10 and every third item
/// dibbed, spread across the "tech" and "books" collections.
pub fn generated_catalog(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| {
            let mut it = item(&format!("gen-{}", i), &format!("gift number {}", i));
            it.desire_score = (i % 10) as u8 + 1;
            it.collection_id = Some(if i % 2 == 0 { "tech" } else { "books" }.to_string());
            if i % 3 == 0 {
                it.dibbed_by = Some("friend".to_string());
            }
            it
        })
        .collect()
}

/// Settings with a small, predictable result cap and cache.
pub fn test_settings(max_visible: usize, cache_capacity: usize) -> PerformanceSettings {
    PerformanceSettings {
        max_visible_items: max_visible,
        cache_capacity,
        buffer_rows: 2,
        ..PerformanceSettings::derive(&CapabilityProfile::default())
    }
}
