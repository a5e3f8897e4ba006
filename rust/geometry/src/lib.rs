// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wardrobe-Lite Geometry
//!
//! Parametric layout of an enclosure's opening: structural members, the
//! soffit-affected sub-region and equal-width door slots, all as 1-D
//! intervals on a width axis centred at 0, plus the clear-opening dimensions
//! shown to the user.

pub mod dimensions;
pub mod error;
pub mod frame;
pub mod interval;
pub mod layout;
pub mod slots;
pub mod soffit;

pub use dimensions::{format_length, format_mm, DimensionEntry, DimensionKey, DimensionTable};
pub use error::{ConfigIssue, Error, Result};
pub use frame::{FrameResolver, FrameSet, StructuralMember};
pub use interval::{HorizontalRegion, VerticalExtent};
pub use layout::{compute_layout, LayoutSummary};
pub use slots::{Slot, SlotAdjustment, SlotResolution, SlotSubdivider};
pub use soffit::{Partition, SoffitLayout, SoffitPartitioner};

// Re-export the input model for convenience
pub use wardrobe_lite_core::{
    InstallationType, LengthUnit, MemberKind, MemberRole, Side, SlotWidthBounds, Soffit,
    SpaceConfig,
};
