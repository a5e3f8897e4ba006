// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 1-D intervals along the width and vertical axes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use wardrobe_lite_core::LENGTH_EPSILON;

/// Closed interval on the width axis.
///
/// Regions produced by the engine always have `right_boundary > left_boundary`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HorizontalRegion {
    pub left_boundary: f64,
    pub right_boundary: f64,
}

impl HorizontalRegion {
    pub fn new(left_boundary: f64, right_boundary: f64) -> Self {
        Self {
            left_boundary,
            right_boundary,
        }
    }

    /// Interval spanning two positions given in either order.
    pub fn between(a: f64, b: f64) -> Self {
        Self::new(a.min(b), a.max(b))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right_boundary - self.left_boundary
    }

    #[inline]
    pub fn center(&self) -> f64 {
        (self.left_boundary + self.right_boundary) / 2.0
    }

    /// Whether `x` lies inside the interval (boundaries included).
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.left_boundary - LENGTH_EPSILON && x <= self.right_boundary + LENGTH_EPSILON
    }

    /// Whether the two intervals share more than a boundary point.
    pub fn overlaps(&self, other: &HorizontalRegion) -> bool {
        let start = self.left_boundary.max(other.left_boundary);
        let end = self.right_boundary.min(other.right_boundary);
        end - start > LENGTH_EPSILON
    }

    /// Reflect about the centre line of the space.
    pub fn mirrored(&self) -> Self {
        Self::new(-self.right_boundary, -self.left_boundary)
    }

    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self::new(self.left_boundary * factor, self.right_boundary * factor)
    }
}

/// Closed interval on the vertical axis, measured up from the floor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VerticalExtent {
    pub bottom: f64,
    pub top: f64,
}

impl VerticalExtent {
    pub fn new(bottom: f64, top: f64) -> Self {
        Self { bottom, top }
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self::new(self.bottom * factor, self.top * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn between_orders_boundaries() {
        let region = HorizontalRegion::between(2350.0, -1500.0);
        assert_eq!(region.left_boundary, -1500.0);
        assert_eq!(region.right_boundary, 2350.0);
        assert_relative_eq!(region.width(), 3850.0);
        assert_relative_eq!(region.center(), 425.0);
    }

    #[test]
    fn touching_regions_do_not_overlap() {
        let a = HorizontalRegion::new(-2350.0, -1500.0);
        let b = HorizontalRegion::new(-1500.0, 2350.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&HorizontalRegion::new(-1600.0, 0.0)));
    }

    #[test]
    fn mirrored_negates_and_swaps() {
        let region = HorizontalRegion::new(-2350.0, -1500.0).mirrored();
        assert_eq!(region, HorizontalRegion::new(1500.0, 2350.0));
        assert!(region.contains(1500.0));
        assert!(!region.contains(1400.0));
    }

    #[test]
    fn vertical_extent_height() {
        let extent = VerticalExtent::new(0.0, 2100.0);
        assert_relative_eq!(extent.height(), 2100.0);
        assert_relative_eq!(extent.scaled(0.001).top, 2.1);
    }
}
