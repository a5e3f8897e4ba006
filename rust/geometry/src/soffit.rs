// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Splitting the opening around a soffit.
//!
//! A soffit's width is measured from the enclosure's outer edge, so the side
//! member on that side stands inside the soffit footprint. The soffit region
//! is what is left of the footprint once that member is taken out; it never
//! hosts a door. The regular region runs from the soffit's inner edge to the
//! opposite side member.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use wardrobe_lite_core::{ConfigIssue, Side, SpaceConfig};

use crate::error::Result;
use crate::frame::FrameSet;
use crate::interval::{HorizontalRegion, VerticalExtent};

/// Sub-layout of the soffit-affected part of the opening.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SoffitLayout {
    pub side: Side,
    /// Full soffit footprint, from the outer edge inwards.
    pub footprint: HorizontalRegion,
    /// Footprint minus the side member standing inside it.
    pub region: HorizontalRegion,
    /// Vertical band the soffit occupies below the ceiling.
    pub drop: VerticalExtent,
    /// Height left between the floor base (if any) and the soffit.
    pub clear_height: f64,
}

impl SoffitLayout {
    /// Clear width under the soffit, as shown to the user.
    #[inline]
    pub fn inner_width(&self) -> f64 {
        self.region.width()
    }

    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self {
            footprint: self.footprint.scaled(factor),
            region: self.region.scaled(factor),
            drop: self.drop.scaled(factor),
            clear_height: self.clear_height * factor,
            ..*self
        }
    }

    pub(crate) fn mirrored(&self) -> Self {
        Self {
            side: self.side.opposite(),
            footprint: self.footprint.mirrored(),
            region: self.region.mirrored(),
            ..*self
        }
    }
}

/// The horizontal opening split into its active and soffit parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition {
    /// Region that gets subdivided into door slots.
    pub regular: HorizontalRegion,
    pub soffit: Option<SoffitLayout>,
}

impl Partition {
    /// All regions, left to right.
    pub fn regions(&self) -> SmallVec<[HorizontalRegion; 2]> {
        let mut regions: SmallVec<[HorizontalRegion; 2]> = SmallVec::new();
        regions.push(self.regular);
        if let Some(soffit) = &self.soffit {
            regions.push(soffit.region);
        }
        regions.sort_by(|a, b| a.left_boundary.total_cmp(&b.left_boundary));
        regions
    }
}

/// Rejects soffits that would not leave a usable opening.
///
/// The soffit must be narrower than the opening between two frames and wider
/// than the member standing inside its footprint.
pub(crate) fn check_soffit_fits(
    config: &SpaceConfig,
    left_thickness: f64,
    right_thickness: f64,
) -> Result<()> {
    let Some(soffit) = &config.soffit else {
        return Ok(());
    };

    let (own, opposite) = match soffit.side {
        Side::Left => (left_thickness, right_thickness),
        Side::Right => (right_thickness, left_thickness),
    };

    let limit = (config.width - config.frame_thickness * 2.0).min(config.width - opposite);
    if soffit.width >= limit {
        return Err(ConfigIssue::SoffitTooWide {
            soffit_width: soffit.width,
            limit,
        }
        .into());
    }

    if soffit.width <= own {
        return Err(ConfigIssue::SoffitTooNarrow {
            side: soffit.side,
            soffit_width: soffit.width,
            member_thickness: own,
        }
        .into());
    }

    Ok(())
}

/// Partitions the opening between resolved side members.
pub struct SoffitPartitioner<'a> {
    config: &'a SpaceConfig,
    frames: &'a FrameSet,
}

impl<'a> SoffitPartitioner<'a> {
    pub fn new(config: &'a SpaceConfig, frames: &'a FrameSet) -> Self {
        Self { config, frames }
    }

    /// Split the interior. Without a soffit the whole interior is regular.
    pub fn partition(&self) -> Result<Partition> {
        let interior = self.frames.interior();

        let Some(soffit) = self.config.soffit else {
            return Ok(Partition {
                regular: interior,
                soffit: None,
            });
        };

        check_soffit_fits(
            self.config,
            self.frames.thickness(Side::Left),
            self.frames.thickness(Side::Right),
        )?;

        let side = soffit.side;
        let outer = side.outer_edge(self.config.width);
        let member_face = side.inward(outer, self.frames.thickness(side));
        let soffit_face = side.inward(outer, soffit.width);
        let opposite = side.opposite();
        let opposite_face =
            opposite.inward(opposite.outer_edge(self.config.width), self.frames.thickness(opposite));

        let height = self.config.height;
        let drop = VerticalExtent::new(height - soffit.height, height);
        let floor = self.frames.base.map_or(0.0, |base| base.extent.top);
        let layout = SoffitLayout {
            side,
            footprint: HorizontalRegion::between(outer, soffit_face),
            region: HorizontalRegion::between(member_face, soffit_face),
            drop,
            clear_height: drop.bottom - floor,
        };

        Ok(Partition {
            regular: HorizontalRegion::between(soffit_face, opposite_face),
            soffit: Some(layout),
        })
    }
}
