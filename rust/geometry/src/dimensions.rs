// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Clear-opening dimensions shown to the user.
//!
//! Every value is read back from geometry that has already been placed, so
//! a label can never disagree with what gets built.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use wardrobe_lite_core::LengthUnit;

use crate::frame::FrameSet;
use crate::slots::SlotResolution;
use crate::soffit::Partition;

/// Identifies one dimension in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DimensionKey {
    TopInnerWidth,
    BaseInnerWidth,
    SoffitInnerWidth,
    LeftMemberHeight,
    RightMemberHeight,
    ClearHeight,
    SoffitClearHeight,
    SlotWidth,
}

impl DimensionKey {
    /// Display order.
    pub const ALL: [DimensionKey; 8] = [
        DimensionKey::TopInnerWidth,
        DimensionKey::BaseInnerWidth,
        DimensionKey::SoffitInnerWidth,
        DimensionKey::LeftMemberHeight,
        DimensionKey::RightMemberHeight,
        DimensionKey::ClearHeight,
        DimensionKey::SoffitClearHeight,
        DimensionKey::SlotWidth,
    ];

    /// Caption for on-screen labels.
    pub fn label(self) -> &'static str {
        match self {
            DimensionKey::TopInnerWidth => "Top inner width",
            DimensionKey::BaseInnerWidth => "Base inner width",
            DimensionKey::SoffitInnerWidth => "Soffit inner width",
            DimensionKey::LeftMemberHeight => "Left member height",
            DimensionKey::RightMemberHeight => "Right member height",
            DimensionKey::ClearHeight => "Clear height",
            DimensionKey::SoffitClearHeight => "Clear height under soffit",
            DimensionKey::SlotWidth => "Door width",
        }
    }

    /// Key as used by the JavaScript side.
    pub fn js_name(self) -> &'static str {
        match self {
            DimensionKey::TopInnerWidth => "topInnerWidth",
            DimensionKey::BaseInnerWidth => "baseInnerWidth",
            DimensionKey::SoffitInnerWidth => "soffitInnerWidth",
            DimensionKey::LeftMemberHeight => "leftMemberHeight",
            DimensionKey::RightMemberHeight => "rightMemberHeight",
            DimensionKey::ClearHeight => "clearHeight",
            DimensionKey::SoffitClearHeight => "soffitClearHeight",
            DimensionKey::SlotWidth => "slotWidth",
        }
    }
}

/// One formatted dimension.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DimensionEntry {
    pub key: DimensionKey,
    pub label: &'static str,
    pub value: f64,
    pub text: String,
}

/// Display-only measurements of a resolved layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DimensionTable {
    pub unit: LengthUnit,
    /// Span of the top frame; absent when there is none.
    pub top_inner_width: Option<f64>,
    /// Span of the floor base; absent when there is none.
    pub base_inner_width: Option<f64>,
    pub soffit_inner_width: Option<f64>,
    pub left_member_height: f64,
    pub right_member_height: f64,
    /// Height between base and top frame over the regular region.
    pub clear_height: f64,
    pub soffit_clear_height: Option<f64>,
    pub slot_width: f64,
    pub slot_count: u32,
}

impl DimensionTable {
    /// Read the table off resolved members, partition and slot resolution.
    pub fn from_geometry(
        frames: &FrameSet,
        partition: &Partition,
        slots: &SlotResolution,
        height: f64,
    ) -> Self {
        let clear_bottom = frames.base.map_or(0.0, |base| base.extent.top);
        let clear_top = frames.top.map_or(height, |top| top.extent.bottom);

        Self {
            unit: LengthUnit::Millimeter,
            top_inner_width: frames.top.map(|top| top.span.width()),
            base_inner_width: frames.base.map(|base| base.span.width()),
            soffit_inner_width: partition.soffit.map(|s| s.inner_width()),
            left_member_height: frames.left.height(),
            right_member_height: frames.right.height(),
            clear_height: clear_top - clear_bottom,
            soffit_clear_height: partition.soffit.map(|s| s.clear_height),
            slot_width: slots.width,
            slot_count: slots.count,
        }
    }

    /// Value for `key`, if the layout has it.
    pub fn get(&self, key: DimensionKey) -> Option<f64> {
        match key {
            DimensionKey::TopInnerWidth => self.top_inner_width,
            DimensionKey::BaseInnerWidth => self.base_inner_width,
            DimensionKey::SoffitInnerWidth => self.soffit_inner_width,
            DimensionKey::LeftMemberHeight => Some(self.left_member_height),
            DimensionKey::RightMemberHeight => Some(self.right_member_height),
            DimensionKey::ClearHeight => Some(self.clear_height),
            DimensionKey::SoffitClearHeight => self.soffit_clear_height,
            DimensionKey::SlotWidth => Some(self.slot_width),
        }
    }

    /// Formatted entries in display order, skipping absent dimensions.
    pub fn entries(&self) -> Vec<DimensionEntry> {
        DimensionKey::ALL
            .iter()
            .filter_map(|&key| {
                self.get(key).map(|value| DimensionEntry {
                    key,
                    label: key.label(),
                    value,
                    text: format_length(value, self.unit),
                })
            })
            .collect()
    }

    /// Formatted text for a single dimension.
    pub fn text(&self, key: DimensionKey) -> Option<String> {
        self.get(key).map(|value| format_length(value, self.unit))
    }

    pub(crate) fn scaled(&self, factor: f64, unit: LengthUnit) -> Self {
        let scale = |v: f64| v * factor;
        Self {
            unit,
            top_inner_width: self.top_inner_width.map(scale),
            base_inner_width: self.base_inner_width.map(scale),
            soffit_inner_width: self.soffit_inner_width.map(scale),
            left_member_height: scale(self.left_member_height),
            right_member_height: scale(self.right_member_height),
            clear_height: scale(self.clear_height),
            soffit_clear_height: self.soffit_clear_height.map(scale),
            slot_width: scale(self.slot_width),
            slot_count: self.slot_count,
        }
    }

    pub(crate) fn mirrored(&self) -> Self {
        Self {
            left_member_height: self.right_member_height,
            right_member_height: self.left_member_height,
            ..self.clone()
        }
    }
}

impl fmt::Display for DimensionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries() {
            writeln!(f, "{}: {}", entry.label, entry.text)?;
        }
        write!(f, "Doors: {}", self.slot_count)
    }
}

/// Format a length with its unit symbol, dropping trailing zeros.
///
/// `4700.0` mm becomes `"4700 mm"`, `1900.0 / 6.0` becomes `"316.7 mm"`.
pub fn format_length(value: f64, unit: LengthUnit) -> String {
    let mut text = format!("{:.*}", unit.display_precision(), value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    format!("{} {}", text, unit.symbol())
}

/// Millimetre shorthand for [`format_length`].
pub fn format_mm(value: f64) -> String {
    format_length(value, LengthUnit::Millimeter)
}
