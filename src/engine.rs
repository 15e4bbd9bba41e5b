use std::borrow::Cow;
use std::time::Duration;

use log::debug;

use crate::capability::{CapabilityProfile, HostProbe, PerformanceSettings, SystemProbe};
use crate::config::Overrides;
use crate::filter::{apply_filters, CollectionFilter, ItemFilters};
use crate::item::Item;
use crate::scheduler::{Debouncer, Throttler};
use crate::search::{CacheStats, SearchEngine};
use crate::window::{compute_window, VirtualWindow};

/// Facade tying the profiler, search engine, filter pipeline, and window
/// calculator together behind one explicitly constructed service object.
///
/// The profile is computed once at construction and the settings flow into
/// every operation from here; there is no hidden process-wide state. Call
/// [`ListEngine::recompute`] if the host wants to react to environment
/// changes, or [`ListEngine::reset`] to drop cached search results.
pub struct ListEngine {
    profile: CapabilityProfile,
    settings: PerformanceSettings,
    search: SearchEngine,
}

impl ListEngine {
    /// Detect the environment with the built-in probe.
    pub fn detect() -> Self {
        Self::from_probe(&SystemProbe)
    }

    pub fn from_probe(probe: &impl HostProbe) -> Self {
        Self::with_profile(CapabilityProfile::detect(probe))
    }

    pub fn with_profile(profile: CapabilityProfile) -> Self {
        let settings = PerformanceSettings::derive(&profile);
        Self::with_settings(profile, settings)
    }

    /// Bypass derivation entirely; useful for tests and hosts with fully
    /// pinned settings.
    pub fn with_settings(profile: CapabilityProfile, settings: PerformanceSettings) -> Self {
        debug!(
            "list engine ready: max_visible={}, cache_capacity={}, virtualization={}",
            settings.max_visible_items, settings.cache_capacity, settings.virtualization_enabled
        );
        let search = SearchEngine::new(&settings);
        Self {
            profile,
            settings,
            search,
        }
    }

    /// Layer host overrides on top of the current settings. Rebuilds the
    /// search engine since its capacity and result cap may have changed.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        self.settings = overrides.apply(self.settings.clone());
        self.search = SearchEngine::new(&self.settings);
    }

    pub fn profile(&self) -> &CapabilityProfile {
        &self.profile
    }

    pub fn settings(&self) -> &PerformanceSettings {
        &self.settings
    }

    /// Re-detect the profile and re-derive settings, e.g. after a connection
    /// change. Drops the search cache.
    pub fn recompute(&mut self, probe: &impl HostProbe) {
        self.profile = CapabilityProfile::detect(probe);
        self.settings = PerformanceSettings::derive(&self.profile);
        self.search = SearchEngine::new(&self.settings);
    }

    /// Drop cached search results without touching the profile.
    pub fn reset(&mut self) {
        self.search.invalidate();
    }

    pub fn search<'a>(&mut self, items: &'a [Item], query: &str) -> Cow<'a, [Item]> {
        self.search.search(items, query)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.search.cache_stats()
    }

    pub fn filter(
        &self,
        items: &[Item],
        filters: &ItemFilters,
        collection: &CollectionFilter,
    ) -> Vec<Item> {
        apply_filters(items, filters, collection)
    }

    pub fn window<'a>(
        &self,
        items: &'a [Item],
        scroll_top: u64,
        item_height: u32,
        container_height: u32,
    ) -> VirtualWindow<'a> {
        compute_window(
            items,
            scroll_top,
            item_height,
            container_height,
            &self.settings,
        )
    }

    /// A debouncer tuned to the profiled keystroke delay.
    pub fn debouncer<T: Send + 'static>(
        &self,
        callback: impl FnMut(T) + Send + 'static,
    ) -> Debouncer<T> {
        Debouncer::new(Duration::from_millis(self.settings.debounce_ms), callback)
    }

    /// A throttler tuned to the profiled scroll-update interval.
    pub fn throttler(&self) -> Throttler {
        Throttler::new(Duration::from_millis(self.settings.throttle_ms))
    }
}

impl Default for ListEngine {
    fn default() -> Self {
        Self::detect()
    }
}
