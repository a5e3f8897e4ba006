// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Wardrobe-Lite Core
//!
//! Input model for the wardrobe/cabinet layout engine.
//!
//! ## Overview
//!
//! - **[`SpaceConfig`]**: the enclosure (width, height, depth in millimetres),
//!   its installation topology, member thicknesses, an optional soffit and the
//!   requested number of door slots
//! - **Validation**: [`SpaceConfig::validate`] rejects infeasible input with a
//!   typed [`ConfigIssue`]
//! - **Units**: [`LengthUnit`] converts millimetres for renderers that work
//!   in another unit
//!
//! ## Quick Start
//!
//! ```rust
//! use wardrobe_lite_core::{Side, Soffit, SpaceConfig};
//!
//! let config = SpaceConfig::new(4800.0, 2400.0, 600.0)
//!     .with_soffit(Soffit::new(Side::Left, 900.0, 300.0))
//!     .with_requested_slots(6);
//!
//! assert!(config.validate().is_ok());
//! ```

pub mod error;
pub mod model;
pub mod units;

pub use error::{ConfigIssue, Error, Result};
pub use model::{
    InstallationType, MemberKind, MemberRole, Side, SlotWidthBounds, Soffit, SpaceConfig,
    DEFAULT_END_PANEL_THICKNESS, DEFAULT_FRAME_THICKNESS, DEFAULT_MAX_SLOT_WIDTH,
    DEFAULT_MIN_SLOT_WIDTH, LENGTH_EPSILON,
};
pub use units::LengthUnit;
