// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Door slot subdivision.
//!
//! A region is tiled by equal-width slots. The requested count is kept when
//! it gives a width inside the allowed bounds; otherwise the count is
//! recomputed silently and the outcome says how.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use wardrobe_lite_core::SlotWidthBounds;

use crate::interval::HorizontalRegion;

/// Slack applied to width/bound quotients before rounding them to a count,
/// so that float noise on an exact multiple does not lose or add a slot.
const QUOTIENT_EPSILON: f64 = 1e-9;

/// How the resolved slot count relates to the requested one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SlotAdjustment {
    /// Requested count gave an in-bounds width.
    Unchanged,
    /// Too many slots requested; reduced to the most that stay at or above the minimum width.
    ReducedToMinimumWidth,
    /// Too few slots requested; increased to the fewest that stay at or below the maximum width.
    IncreasedToMaximumWidth,
    /// Region narrower than the minimum width; one slot spans all of it.
    SingleSlotFallback,
}

/// Resolved count and width for one region.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SlotResolution {
    pub requested: u32,
    pub count: u32,
    pub width: f64,
    pub adjustment: SlotAdjustment,
}

impl SlotResolution {
    /// Whether the resolved count differs from the requested one.
    #[inline]
    pub fn count_changed(&self) -> bool {
        self.requested != self.count
    }

    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            ..*self
        }
    }
}

/// One door position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slot {
    /// Position from the left, starting at 0.
    pub index: u32,
    pub center: f64,
    pub width: f64,
}

impl Slot {
    #[inline]
    pub fn left(&self) -> f64 {
        self.center - self.width / 2.0
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.center + self.width / 2.0
    }

    pub fn span(&self) -> HorizontalRegion {
        HorizontalRegion::new(self.left(), self.right())
    }

    /// Whether `x` falls in this slot (boundaries included).
    pub fn contains(&self, x: f64) -> bool {
        self.span().contains(x)
    }

    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self {
            center: self.center * factor,
            width: self.width * factor,
            ..*self
        }
    }
}

/// Subdivides regions into equal-width slots within width bounds.
#[derive(Debug, Clone, Copy)]
pub struct SlotSubdivider {
    bounds: SlotWidthBounds,
}

impl Default for SlotSubdivider {
    fn default() -> Self {
        Self::new(SlotWidthBounds::DEFAULT)
    }
}

impl SlotSubdivider {
    pub fn new(bounds: SlotWidthBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> SlotWidthBounds {
        self.bounds
    }

    /// Resolve the slot count and width for a region `width` wide.
    ///
    /// 1. `width / requested` within bounds: keep the requested count.
    /// 2. Too narrow: `floor(width / min)` slots, at least one.
    /// 3. Too wide: `ceil(width / max)` slots.
    pub fn resolve(&self, width: f64, requested: u32) -> SlotResolution {
        let naive = width / f64::from(requested);
        if self.bounds.contains(naive) {
            return SlotResolution {
                requested,
                count: requested,
                width: naive,
                adjustment: SlotAdjustment::Unchanged,
            };
        }

        let (count, adjustment) = if naive < self.bounds.min {
            let fitting = (width / self.bounds.min + QUOTIENT_EPSILON).floor();
            if fitting < 1.0 {
                (1, SlotAdjustment::SingleSlotFallback)
            } else {
                (fitting as u32, SlotAdjustment::ReducedToMinimumWidth)
            }
        } else {
            let needed = (width / self.bounds.max - QUOTIENT_EPSILON).ceil().max(1.0);
            (needed as u32, SlotAdjustment::IncreasedToMaximumWidth)
        };

        SlotResolution {
            requested,
            count,
            width: width / f64::from(count),
            adjustment,
        }
    }

    /// Tile `region` with slots, left to right, with no gap or overlap.
    pub fn subdivide(&self, region: &HorizontalRegion, requested: u32) -> (SlotResolution, Vec<Slot>) {
        let resolution = self.resolve(region.width(), requested);
        let slots = (0..resolution.count)
            .map(|index| Slot {
                index,
                center: region.left_boundary + (f64::from(index) + 0.5) * resolution.width,
                width: resolution.width,
            })
            .collect();
        (resolution, slots)
    }
}
