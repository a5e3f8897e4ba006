// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the processing pipeline.

use serde::Serialize;
use thiserror::Error;
use wardrobe_lite_core::ConfigIssue;

/// Result type for processing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while processing layout requests
#[derive(Debug, Error)]
pub enum Error {
    #[error("Layout error: {0}")]
    Layout(#[from] wardrobe_lite_geometry::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Stable machine-readable code for UI messages.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Layout(err) => match err.issue() {
                ConfigIssue::NonPositiveDimension { .. } => "NON_POSITIVE_DIMENSION",
                ConfigIssue::MissingWallSide(_) => "MISSING_WALL_SIDE",
                ConfigIssue::DegenerateMember { .. } => "DEGENERATE_MEMBER",
                ConfigIssue::SoffitTooWide { .. } => "SOFFIT_TOO_WIDE",
                ConfigIssue::SoffitTooNarrow { .. } => "SOFFIT_TOO_NARROW",
                ConfigIssue::SoffitTooTall { .. } => "SOFFIT_TOO_TALL",
                ConfigIssue::DegenerateVerticalStack { .. } => "DEGENERATE_VERTICAL_STACK",
                ConfigIssue::InvalidSlotBounds { .. } => "INVALID_SLOT_BOUNDS",
                ConfigIssue::ZeroSlotCount => "ZERO_SLOT_COUNT",
            },
            Error::Serialization(_) => "SERIALIZATION",
        }
    }

    /// Serializable form handed to the UI.
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            error: self.to_string(),
            code: self.code().to_string(),
        }
    }
}

/// Error body returned across the FFI boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub error: String,
    pub code: String,
}
