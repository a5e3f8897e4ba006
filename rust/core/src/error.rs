// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for space configuration and layout resolution.

use crate::model::{InstallationType, MemberRole, Side};

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a layout.
///
/// Construction is all-or-nothing: when any of these is returned no partial
/// layout exists, and the caller keeps whatever it had before the edit.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The supplied configuration is geometrically infeasible.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigIssue),
}

impl Error {
    /// Returns the underlying configuration issue.
    pub fn issue(&self) -> &ConfigIssue {
        match self {
            Error::InvalidConfig(issue) => issue,
        }
    }
}

/// The specific reason a configuration was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigIssue {
    /// A length that must be positive and finite was not.
    #[error("{name} must be a positive finite length, got {value}")]
    NonPositiveDimension { name: &'static str, value: f64 },

    /// Semi-standing installs need to know which side touches the wall.
    #[error("{0:?} installation requires a wall side")]
    MissingWallSide(InstallationType),

    /// A structural member would take up half the width or more.
    #[error("{role:?} member thickness {thickness} mm leaves no opening in a {width} mm wide space")]
    DegenerateMember {
        role: MemberRole,
        thickness: f64,
        width: f64,
    },

    /// The soffit would consume the whole opening.
    #[error("soffit width {soffit_width} mm must be less than {limit} mm")]
    SoffitTooWide { soffit_width: f64, limit: f64 },

    /// The soffit is no wider than the member standing inside its footprint.
    #[error("soffit on {side:?} side is {soffit_width} mm wide but its member is {member_thickness} mm thick")]
    SoffitTooNarrow {
        side: Side,
        soffit_width: f64,
        member_thickness: f64,
    },

    /// The soffit leaves no clear height beneath it.
    #[error("soffit height {soffit_height} mm leaves no clearance in a {height} mm tall space")]
    SoffitTooTall { soffit_height: f64, height: f64 },

    /// Top and base members overlap vertically.
    #[error("top and base members ({stacked} mm together) do not fit in a {height} mm tall space")]
    DegenerateVerticalStack { stacked: f64, height: f64 },

    /// Slot width bounds are not an ordered positive range.
    #[error("slot width bounds [{min}, {max}] are not a positive ordered range")]
    InvalidSlotBounds { min: f64, max: f64 },

    /// At least one slot has to be requested.
    #[error("requested slot count must be at least 1")]
    ZeroSlotCount,
}
