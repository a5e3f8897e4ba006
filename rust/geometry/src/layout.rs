// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Full layout of an enclosure.
//!
//! [`compute_layout`] runs the whole pipeline once:
//! validation, member resolution, soffit partitioning, slot subdivision of
//! the regular region, and the dimension table. It is a pure function of its
//! input; callers re-run it on every edit and keep their previous layout when
//! it returns an error.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use wardrobe_lite_core::{InstallationType, LengthUnit, SpaceConfig};

use crate::dimensions::DimensionTable;
use crate::error::Result;
use crate::frame::{FrameResolver, FrameSet};
use crate::interval::HorizontalRegion;
use crate::slots::{Slot, SlotResolution, SlotSubdivider};
use crate::soffit::{Partition, SoffitLayout, SoffitPartitioner};

/// Complete decomposition of an enclosure's opening.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutSummary {
    /// Unit every length in the summary is expressed in.
    pub unit: LengthUnit,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub installation_type: InstallationType,
    pub members: FrameSet,
    /// Region subdivided into slots.
    pub regular_region: HorizontalRegion,
    /// Soffit sub-layout, never subdivided.
    pub soffit: Option<SoffitLayout>,
    pub slot_resolution: SlotResolution,
    /// Slots of the regular region, left to right.
    pub slots: Vec<Slot>,
    pub dimensions: DimensionTable,
}

/// Compute the layout for `config`.
///
/// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) when the
/// configuration is infeasible; no partial layout is ever produced.
pub fn compute_layout(config: &SpaceConfig) -> Result<LayoutSummary> {
    config.validate()?;

    let members = FrameResolver::new(config).resolve()?;
    let partition = SoffitPartitioner::new(config, &members).partition()?;
    let (slot_resolution, slots) = SlotSubdivider::new(config.slot_width_bounds)
        .subdivide(&partition.regular, config.requested_slot_count);
    let dimensions =
        DimensionTable::from_geometry(&members, &partition, &slot_resolution, config.height);

    let Partition { regular, soffit } = partition;

    Ok(LayoutSummary {
        unit: LengthUnit::Millimeter,
        width: config.width,
        height: config.height,
        depth: config.depth,
        installation_type: config.installation_type,
        members,
        regular_region: regular,
        soffit,
        slot_resolution,
        slots,
        dimensions,
    })
}

impl LayoutSummary {
    /// Regions of the opening, left to right.
    pub fn regions(&self) -> SmallVec<[HorizontalRegion; 2]> {
        Partition {
            regular: self.regular_region,
            soffit: self.soffit,
        }
        .regions()
    }

    /// Sum of the left and right member thicknesses.
    pub fn side_thickness(&self) -> f64 {
        self.members.left.thickness + self.members.right.thickness
    }

    /// The slot resolution, when the requested count was overridden.
    pub fn slot_count_adjusted(&self) -> Option<&SlotResolution> {
        Some(&self.slot_resolution).filter(|r| r.count_changed())
    }

    /// Slot covering position `x` on the width axis, if any.
    pub fn slot_at(&self, x: f64) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.contains(x))
    }

    /// The same layout with every length expressed in `unit`.
    pub fn to_unit(&self, unit: LengthUnit) -> Self {
        let factor = unit.scale_from_mm() / self.unit.scale_from_mm();
        Self {
            unit,
            width: self.width * factor,
            height: self.height * factor,
            depth: self.depth * factor,
            installation_type: self.installation_type,
            members: self.members.scaled(factor),
            regular_region: self.regular_region.scaled(factor),
            soffit: self.soffit.map(|s| s.scaled(factor)),
            slot_resolution: self.slot_resolution.scaled(factor),
            slots: self.slots.iter().map(|s| s.scaled(factor)).collect(),
            dimensions: self.dimensions.scaled(factor, unit),
        }
    }

    /// The layout reflected about the centre line.
    ///
    /// Matches the layout of [`SpaceConfig::mirrored`] up to float rounding.
    pub fn mirrored(&self) -> Self {
        let count = self.slots.len() as u32;
        let slots = self
            .slots
            .iter()
            .rev()
            .map(|slot| Slot {
                index: count - 1 - slot.index,
                center: -slot.center,
                width: slot.width,
            })
            .collect();

        Self {
            members: self.members.mirrored(),
            regular_region: self.regular_region.mirrored(),
            soffit: self.soffit.map(|s| s.mirrored()),
            slots,
            dimensions: self.dimensions.mirrored(),
            ..self.clone()
        }
    }
}
