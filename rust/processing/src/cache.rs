// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Memoization of computed layouts keyed by configuration.
//!
//! A layout is a deterministic function of its [`SpaceConfig`], so a hit can
//! be returned as-is.

use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use rustc_hash::{FxHashMap, FxHasher};
use wardrobe_lite_core::SpaceConfig;
use wardrobe_lite_geometry::LayoutSummary;

/// Compute a hash of every field of a configuration.
/// Uses FxHasher for speed - we don't need cryptographic hashing
pub fn config_hash(config: &SpaceConfig) -> u64 {
    let mut hasher = FxHasher::default();

    // Convert f64 to bits for reliable hashing
    for value in [
        config.width,
        config.height,
        config.depth,
        config.frame_thickness,
        config.end_panel_thickness,
        config.slot_width_bounds.min,
        config.slot_width_bounds.max,
    ] {
        value.to_bits().hash(&mut hasher);
    }

    config.installation_type.hash(&mut hasher);
    config.wall_side.hash(&mut hasher);
    config
        .soffit
        .map(|s| (s.side, s.width.to_bits(), s.height.to_bits()))
        .hash(&mut hasher);
    config.requested_slot_count.hash(&mut hasher);

    hasher.finish()
}

/// Thread-safe bounded layout cache.
#[derive(Debug)]
pub struct LayoutCache {
    capacity: usize,
    entries: RwLock<FxHashMap<u64, (SpaceConfig, Arc<LayoutSummary>)>>,
}

impl LayoutCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    /// Cached layout for `config`, if present.
    ///
    /// The stored configuration is compared in full, so a hash collision is
    /// a miss rather than a wrong layout.
    pub fn get(&self, config: &SpaceConfig) -> Option<Arc<LayoutSummary>> {
        let hash = config_hash(config);
        let entries = self.entries.read().ok()?;
        entries
            .get(&hash)
            .filter(|(stored, _)| stored == config)
            .map(|(_, layout)| Arc::clone(layout))
    }

    /// Store a layout; flushes the cache first when it is full.
    pub fn insert(&self, config: &SpaceConfig, layout: Arc<LayoutSummary>) {
        if self.capacity == 0 {
            return;
        }
        let hash = config_hash(config);
        let Ok(mut entries) = self.entries.write() else {
            return;
        };
        if entries.len() >= self.capacity && !entries.contains_key(&hash) {
            tracing::debug!(capacity = self.capacity, "Layout cache full, flushing");
            entries.clear();
        }
        entries.insert(hash, (config.clone(), layout));
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}
