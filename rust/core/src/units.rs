// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Length units and conversion
//!
//! The engine works in millimetres throughout. Renderers that use another
//! unit convert once, at the boundary, with the factors here.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Length unit a layout can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LengthUnit {
    #[default]
    Millimeter,
    Centimeter,
    Meter,
}

impl LengthUnit {
    /// Factor that converts a millimetre length into this unit
    #[inline]
    pub fn scale_from_mm(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 1.0,
            LengthUnit::Centimeter => 0.1,
            LengthUnit::Meter => 0.001,
        }
    }

    /// Convert a millimetre length into this unit
    #[inline]
    pub fn from_mm(self, value_mm: f64) -> f64 {
        value_mm * self.scale_from_mm()
    }

    /// Convert a length in this unit back to millimetres
    #[inline]
    pub fn to_mm(self, value: f64) -> f64 {
        value / self.scale_from_mm()
    }

    /// Unit suffix used in dimension labels
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
        }
    }

    /// Decimal places shown when formatting a length in this unit
    pub fn display_precision(self) -> usize {
        match self {
            LengthUnit::Millimeter => 1,
            LengthUnit::Centimeter => 2,
            LengthUnit::Meter => 4,
        }
    }
}
