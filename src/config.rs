use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::capability::PerformanceSettings;
use crate::errors::{EngineError, EngineResult};

/// Host-supplied overrides layered on top of derived settings.
///
/// Every tunable has a compiled-in default from
/// [`PerformanceSettings::derive`]; this struct exists for hosts that want to
/// pin a value regardless of the detected profile. All fields are optional and
/// unset fields leave the derived value alone.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animations_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger_delay_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_visible_items: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtualization_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debounce_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throttle_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_capacity: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_rows: Option<usize>,
}

impl Overrides {
    /// Parse overrides from a TOML string.
    pub fn from_toml_str(content: &str) -> EngineResult<Self> {
        toml::from_str(content).map_err(|e| EngineError::Configuration {
            message: format!("Failed to parse TOML overrides: {}", e),
        })
    }

    /// Load overrides from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let content = fs::read_to_string(&path).map_err(|e| EngineError::Configuration {
            message: format!(
                "Failed to read overrides file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    /// Save overrides to a TOML file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> EngineResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| EngineError::Configuration {
            message: format!("Failed to serialize overrides to TOML: {}", e),
        })?;
        fs::write(&path, content).map_err(|e| EngineError::Configuration {
            message: format!(
                "Failed to write overrides to file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Ok(())
    }

    /// Apply onto derived settings, returning the effective settings.
    pub fn apply(&self, base: PerformanceSettings) -> PerformanceSettings {
        PerformanceSettings {
            animations_enabled: self.animations_enabled.unwrap_or(base.animations_enabled),
            animation_duration_ms: self
                .animation_duration_ms
                .unwrap_or(base.animation_duration_ms),
            stagger_delay_ms: self.stagger_delay_ms.unwrap_or(base.stagger_delay_ms),
            max_visible_items: self.max_visible_items.unwrap_or(base.max_visible_items),
            virtualization_enabled: self
                .virtualization_enabled
                .unwrap_or(base.virtualization_enabled),
            debounce_ms: self.debounce_ms.unwrap_or(base.debounce_ms),
            throttle_ms: self.throttle_ms.unwrap_or(base.throttle_ms),
            cache_capacity: self.cache_capacity.unwrap_or(base.cache_capacity),
            buffer_rows: self.buffer_rows.unwrap_or(base.buffer_rows).max(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
