// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Processor configuration loaded from environment variables.

/// Processor configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Whether computed layouts are memoized.
    pub cache_enabled: bool,
    /// Maximum number of memoized layouts before the cache is flushed.
    pub cache_capacity: usize,
    /// Batches at least this large are evaluated in parallel.
    pub parallel_threshold: usize,
}

impl ProcessorConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            cache_enabled: lookup("WARDROBE_CACHE_ENABLED")
                .map(|v| !matches!(v.trim(), "0" | "false" | "off" | "no"))
                .unwrap_or(true),
            cache_capacity: lookup("WARDROBE_CACHE_CAPACITY")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(256),
            parallel_threshold: lookup("WARDROBE_PARALLEL_THRESHOLD")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(64),
        }
    }

    /// Configuration with memoization switched off.
    pub fn uncached() -> Self {
        Self {
            cache_enabled: false,
            ..Self::from_lookup(|_| None)
        }
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
