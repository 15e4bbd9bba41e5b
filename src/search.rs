use std::borrow::Cow;
use std::collections::HashMap;

use log::{debug, trace};

use crate::capability::PerformanceSettings;
use crate::item::Item;

/// Queries shorter than this skip scoring entirely on large lists.
const SHORT_QUERY_LEN: usize = 2;
/// "Large" for the purpose of the short-query short-circuit.
const SHORT_QUERY_LIST_THRESHOLD: usize = 100;

// Score weights. Name matches dominate, tags barely nudge.
const NAME_FULL_MATCH: u32 = 10;
const NAME_TERM_MATCH: u32 = 5;
const DESCRIPTION_MATCH: u32 = 3;
const TAG_MATCH: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    query: String,
    item_count: usize,
}

/// Hit/miss/eviction counters for the memo cache.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Scores and filters an item collection against a free-text query, with
/// bounded-size memoization.
///
/// The cache is keyed on `(normalized query, item count)`. Two different
/// collections of the same length can therefore produce a false hit; this is
/// an inherited trade-off kept for speed. Hosts that mutate items in place
/// without changing the count must call [`SearchEngine::invalidate`].
#[derive(Debug)]
pub struct SearchEngine {
    cache: HashMap<CacheKey, Vec<Item>>,
    capacity: usize,
    max_results: usize,
    stats: CacheStats,
}

impl SearchEngine {
    pub fn new(settings: &PerformanceSettings) -> Self {
        Self::with_limits(settings.cache_capacity, settings.max_visible_items)
    }

    pub fn with_limits(capacity: usize, max_results: usize) -> Self {
        Self {
            cache: HashMap::new(),
            capacity: capacity.max(1),
            max_results: max_results.max(1),
            stats: CacheStats::default(),
        }
    }

    /// Ranked substring search.
    ///
    /// Empty or whitespace-only queries return the input slice as-is, as do
    /// sub-2-character queries against lists larger than 100 items (a
    /// 1-character scan is all cost and no selectivity). Otherwise returns
    /// matching items sorted by descending score, capped at
    /// `max_visible_items`. Never fails; items with missing fields simply
    /// don't match on those fields.
    pub fn search<'a>(&mut self, items: &'a [Item], query: &str) -> Cow<'a, [Item]> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return Cow::Borrowed(items);
        }
        if normalized.chars().count() < SHORT_QUERY_LEN && items.len() > SHORT_QUERY_LIST_THRESHOLD
        {
            trace!("short-query short-circuit for '{}'", normalized);
            return Cow::Borrowed(items);
        }

        let key = CacheKey {
            query: normalized.clone(),
            item_count: items.len(),
        };
        if let Some(cached) = self.cache.get(&key) {
            self.stats.hits += 1;
            trace!("cache hit for '{}' ({} items)", key.query, key.item_count);
            return Cow::Owned(cached.clone());
        }
        self.stats.misses += 1;

        let ranked = self.rank(items, &normalized);

        if self.cache.len() >= self.capacity {
            // Batch-clear eviction: drop the whole memo once full instead of
            // tracking recency per entry.
            debug!("search cache full ({} entries), clearing", self.cache.len());
            self.stats.evictions += self.cache.len() as u64;
            self.cache.clear();
        }
        self.cache.insert(key, ranked.clone());

        Cow::Owned(ranked)
    }

    /// Drop all cached results. Needed when the host mutates items in place
    /// without changing the collection's length.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.stats
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    fn rank(&self, items: &[Item], normalized: &str) -> Vec<Item> {
        let terms: Vec<&str> = normalized.split_whitespace().collect();

        let mut scored: Vec<(u32, &Item)> = Vec::new();
        for item in items {
            // Scan-time cap: accumulation stops once max_results matches are
            // found, so a later higher-scoring item can be left out. Inherited
            // speed/accuracy trade-off; do not move this below the sort.
            if scored.len() >= self.max_results {
                break;
            }
            let score = score_item(item, normalized, &terms);
            if score > 0 {
                scored.push((score, item));
            }
        }

        // sort_by is stable: ties keep original relative order.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, item)| item.clone()).collect()
    }
}

fn score_item(item: &Item, query: &str, terms: &[&str]) -> u32 {
    let name = item.name.to_lowercase();
    let mut score = 0;

    if name.contains(query) {
        score += NAME_FULL_MATCH;
    }
    for term in terms {
        if name.contains(term) {
            score += NAME_TERM_MATCH;
        }
    }
    if let Some(description) = &item.description {
        if description.to_lowercase().contains(query) {
            score += DESCRIPTION_MATCH;
        }
    }
    // Awarded at most once, however many tags match.
    if item
        .category_tags
        .iter()
        .any(|tag| tag.to_lowercase().contains(query))
    {
        score += TAG_MATCH;
    }

    score
}
