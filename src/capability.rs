use log::debug;
use serde::{Deserialize, Serialize};

/// Conservative fallbacks used when a host signal is unavailable.
const DEFAULT_CORE_COUNT: usize = 4;
const DEFAULT_MEMORY_CLASS: u32 = 4;

const LOW_END_CORE_THRESHOLD: usize = 2;
const LOW_END_MEMORY_THRESHOLD: u32 = 2;

/// Raw hardware signals supplied by the host shell.
///
/// Every method defaults to "unknown"; the profiler substitutes a conservative
/// fallback for each missing signal rather than failing. Hosts with access to
/// real device information (a web view, a mobile shell) implement this with
/// their platform APIs.
pub trait HostProbe {
    fn logical_cores(&self) -> Option<usize> {
        None
    }

    /// Approximate device memory in whole gigabytes.
    fn device_memory_gb(&self) -> Option<u32> {
        None
    }

    fn connection(&self) -> Option<ConnectionClass> {
        None
    }

    fn prefers_reduced_motion(&self) -> Option<bool> {
        None
    }

    fn is_mobile(&self) -> Option<bool> {
        None
    }
}

/// Built-in probe: reports logical core count, leaves everything else to the
/// conservative defaults.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl HostProbe for SystemProbe {
    fn logical_cores(&self) -> Option<usize> {
        Some(num_cpus::get())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionClass {
    Slow,
    Moderate,
    Fast,
    /// Unknown connections are treated as not-slow.
    Unknown,
}

/// Static snapshot of the running device, computed once at startup.
///
/// Recompute explicitly through [`crate::engine::ListEngine::recompute`] if
/// the host wants to react to connection or display changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityProfile {
    pub core_count: usize,
    /// Rough memory bucket in gigabytes.
    pub memory_class: u32,
    pub connection: ConnectionClass,
    pub is_low_end_device: bool,
    pub is_mobile_device: bool,
    pub prefers_reduced_motion: bool,
}

impl CapabilityProfile {
    /// Best-effort detection. Never fails; missing signals degrade to
    /// conservative defaults.
    pub fn detect(probe: &impl HostProbe) -> Self {
        let core_count = probe.logical_cores().unwrap_or(DEFAULT_CORE_COUNT);
        let memory_class = probe.device_memory_gb().unwrap_or(DEFAULT_MEMORY_CLASS);
        let connection = probe.connection().unwrap_or(ConnectionClass::Unknown);
        let is_mobile_device = probe.is_mobile().unwrap_or(false);
        let prefers_reduced_motion = probe.prefers_reduced_motion().unwrap_or(false);

        let is_low_end_device = core_count <= LOW_END_CORE_THRESHOLD
            || memory_class <= LOW_END_MEMORY_THRESHOLD
            || connection == ConnectionClass::Slow;

        let profile = Self {
            core_count,
            memory_class,
            connection,
            is_low_end_device,
            is_mobile_device,
            prefers_reduced_motion,
        };
        debug!("detected capability profile: {:?}", profile);
        profile
    }
}

impl Default for CapabilityProfile {
    fn default() -> Self {
        Self {
            core_count: DEFAULT_CORE_COUNT,
            memory_class: DEFAULT_MEMORY_CLASS,
            connection: ConnectionClass::Unknown,
            is_low_end_device: false,
            is_mobile_device: false,
            prefers_reduced_motion: false,
        }
    }
}

/// Concrete thresholds derived from the capability profile.
///
/// The exact numbers are tunable constants, not behavioral contracts; the
/// contract is the monotonic relationship: worse hardware gets smaller limits,
/// longer delays, and fewer effects. Hosts may layer
/// [`crate::config::Overrides`] on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSettings {
    pub animations_enabled: bool,
    pub animation_duration_ms: u64,
    pub stagger_delay_ms: u64,
    pub max_visible_items: usize,
    pub virtualization_enabled: bool,
    pub debounce_ms: u64,
    pub throttle_ms: u64,
    pub cache_capacity: usize,
    /// Extra rows rendered past the viewport to avoid flicker at scroll
    /// boundaries. Always at least 1.
    pub buffer_rows: usize,
}

impl PerformanceSettings {
    /// Total function from profile to settings.
    pub fn derive(profile: &CapabilityProfile) -> Self {
        let animations_enabled = !profile.prefers_reduced_motion && !profile.is_low_end_device;

        if profile.is_low_end_device {
            Self {
                animations_enabled,
                animation_duration_ms: if animations_enabled { 120 } else { 0 },
                stagger_delay_ms: 0,
                max_visible_items: 20,
                virtualization_enabled: true,
                debounce_ms: 450,
                throttle_ms: 32,
                cache_capacity: 16,
                buffer_rows: 2,
            }
        } else if profile.is_mobile_device {
            Self {
                animations_enabled,
                animation_duration_ms: if animations_enabled { 150 } else { 0 },
                stagger_delay_ms: if animations_enabled { 25 } else { 0 },
                max_visible_items: 50,
                virtualization_enabled: true,
                debounce_ms: 350,
                throttle_ms: 24,
                cache_capacity: 32,
                buffer_rows: 2,
            }
        } else {
            Self {
                animations_enabled,
                animation_duration_ms: if animations_enabled { 200 } else { 0 },
                stagger_delay_ms: if animations_enabled { 40 } else { 0 },
                max_visible_items: 100,
                virtualization_enabled: true,
                debounce_ms: 250,
                throttle_ms: 16,
                cache_capacity: 64,
                buffer_rows: 3,
            }
        }
    }
}

impl Default for PerformanceSettings {
    fn default() -> Self {
        Self::derive(&CapabilityProfile::default())
    }
}
