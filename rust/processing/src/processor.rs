// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Layout processing service with memoization and parallel batches.

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use wardrobe_lite_core::{LengthUnit, SpaceConfig};
use wardrobe_lite_geometry::{compute_layout, LayoutSummary, SlotAdjustment, SlotSubdivider};

use crate::cache::LayoutCache;
use crate::config::ProcessorConfig;
use crate::error::Result;

/// One reachable slot count for a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotCountOption {
    /// Smallest requested count that resolves to `count`.
    pub requested: u32,
    pub count: u32,
    pub width: f64,
    pub adjustment: SlotAdjustment,
}

/// Computes layouts for UI hosts.
///
/// Each call is independent; the processor can be shared across threads.
#[derive(Debug)]
pub struct LayoutProcessor {
    config: ProcessorConfig,
    cache: Option<LayoutCache>,
}

impl Default for LayoutProcessor {
    fn default() -> Self {
        Self::new(ProcessorConfig::default())
    }
}

impl LayoutProcessor {
    pub fn new(config: ProcessorConfig) -> Self {
        let cache = config
            .cache_enabled
            .then(|| LayoutCache::new(config.cache_capacity));
        Self { config, cache }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Number of memoized layouts.
    pub fn cached_layouts(&self) -> usize {
        self.cache.as_ref().map_or(0, LayoutCache::len)
    }

    /// Compute (or fetch) the layout for `config`.
    pub fn compute(&self, config: &SpaceConfig) -> Result<Arc<LayoutSummary>> {
        if let Some(hit) = self.cache.as_ref().and_then(|cache| cache.get(config)) {
            tracing::debug!(width = config.width, "Layout cache hit");
            return Ok(hit);
        }

        let layout = match compute_layout(config) {
            Ok(layout) => Arc::new(layout),
            Err(err) => {
                tracing::warn!(error = %err, "Rejected space configuration");
                return Err(err.into());
            }
        };

        if let Some(resolution) = layout.slot_count_adjusted() {
            tracing::debug!(
                requested = resolution.requested,
                resolved = resolution.count,
                width = resolution.width,
                adjustment = ?resolution.adjustment,
                "Slot count adjusted"
            );
        }

        if let Some(cache) = &self.cache {
            cache.insert(config, Arc::clone(&layout));
        }
        Ok(layout)
    }

    /// Compute layouts for many configurations.
    ///
    /// Results keep the input order. Large batches run on the rayon pool.
    pub fn compute_batch(&self, configs: &[SpaceConfig]) -> Vec<Result<Arc<LayoutSummary>>> {
        let start = std::time::Instant::now();
        let parallel = configs.len() >= self.config.parallel_threshold;

        let results: Vec<_> = if parallel {
            configs.par_iter().map(|config| self.compute(config)).collect()
        } else {
            configs.iter().map(|config| self.compute(config)).collect()
        };

        tracing::info!(
            count = configs.len(),
            parallel,
            failed = results.iter().filter(|r| r.is_err()).count(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Layout batch complete"
        );
        results
    }

    /// Preview the outcome of every requested count in `1..=max_requested`.
    ///
    /// Requests that resolve to the same count are merged, keeping the
    /// smallest request. Options are ordered by resolved count.
    ///
    /// The layout of `config` is computed once; every request past
    /// `floor(width / min) + 1` resolves like that one, so the scan stops
    /// there regardless of `max_requested`.
    pub fn slot_count_options(
        &self,
        config: &SpaceConfig,
        max_requested: u32,
    ) -> Result<Vec<SlotCountOption>> {
        let layout = self.compute(config)?;
        let region_width = layout.regular_region.width();
        let subdivider = SlotSubdivider::new(config.slot_width_bounds);

        let saturated = (region_width / config.slot_width_bounds.min).floor() + 1.0;
        let last = f64::from(max_requested.max(1)).min(saturated.max(1.0)) as u32;

        let mut options: Vec<SlotCountOption> = Vec::new();
        for requested in 1..=last {
            let resolution = subdivider.resolve(region_width, requested);
            if options.iter().all(|o| o.count != resolution.count) {
                options.push(SlotCountOption {
                    requested,
                    count: resolution.count,
                    width: resolution.width,
                    adjustment: resolution.adjustment,
                });
            }
        }

        options.sort_by_key(|o| o.count);
        Ok(options)
    }

    /// Layout as JSON, with lengths in `unit`.
    pub fn compute_json(&self, config: &SpaceConfig, unit: LengthUnit) -> Result<String> {
        let layout = self.compute(config)?;
        let json = if unit == layout.unit {
            serde_json::to_string(&*layout)?
        } else {
            serde_json::to_string(&layout.to_unit(unit))?
        };
        Ok(json)
    }

    /// Parse a JSON configuration and return its layout as JSON.
    ///
    /// Missing fields take their defaults.
    pub fn compute_json_str(&self, config_json: &str, unit: LengthUnit) -> Result<String> {
        let config: SpaceConfig = serde_json::from_str(config_json)?;
        self.compute_json(&config, unit)
    }
}
