// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Space description consumed by the layout engine.
//!
//! All lengths are millimetres. The width axis is centred on 0, so a space of
//! width `w` spans `[-w/2, +w/2]`; the vertical axis starts at the floor.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ConfigIssue, Result};

/// Default width of a structural frame member.
pub const DEFAULT_FRAME_THICKNESS: f64 = 50.0;

/// Default width of a thin end panel used where no frame exists.
pub const DEFAULT_END_PANEL_THICKNESS: f64 = 20.0;

/// Narrowest door slot the configurator will produce.
pub const DEFAULT_MIN_SLOT_WIDTH: f64 = 300.0;

/// Widest door slot the configurator will produce.
pub const DEFAULT_MAX_SLOT_WIDTH: f64 = 600.0;

/// Tolerance for comparing lengths in millimetres.
pub const LENGTH_EPSILON: f64 = 1e-6;

/// Horizontal side of the space, looking at its opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Direction of this side along the width axis (-1 for left, +1 for right).
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    /// The other side.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Position of this side's outer edge for a space of the given width.
    #[inline]
    pub fn outer_edge(self, width: f64) -> f64 {
        self.sign() * width / 2.0
    }

    /// Moves `distance` from `edge` towards the centre of the space.
    #[inline]
    pub fn inward(self, edge: f64, distance: f64) -> f64 {
        edge - self.sign() * distance
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// How the unit sits between its surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InstallationType {
    /// Enclosed on both sides.
    #[default]
    BuiltIn,
    /// One side against a wall, the other open.
    SemiStanding,
    /// Neither side enclosed.
    FreeStanding,
}

impl InstallationType {
    /// Whether a top frame and a floor base are generated.
    ///
    /// Free-standing units are open-topped and get neither.
    #[inline]
    pub fn has_top_and_base(self) -> bool {
        !matches!(self, InstallationType::FreeStanding)
    }

    /// Whether the installation needs a wall side to be resolved.
    #[inline]
    pub fn requires_wall_side(self) -> bool {
        matches!(self, InstallationType::SemiStanding)
    }
}

/// Which structural position a member occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MemberRole {
    Left,
    Right,
    Top,
    Base,
}

impl From<Side> for MemberRole {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => MemberRole::Left,
            Side::Right => MemberRole::Right,
        }
    }
}

/// Construction of a structural member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MemberKind {
    /// Full structural frame.
    Frame,
    /// Thin finishing panel.
    EndPanel,
}

/// Ceiling-mounted obstruction occupying part of the width.
///
/// `width` is measured from the enclosure's outer edge on `side`; `height`
/// is how far it drops from the ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Soffit {
    pub side: Side,
    pub width: f64,
    pub height: f64,
}

impl Soffit {
    pub fn new(side: Side, width: f64, height: f64) -> Self {
        Self {
            side,
            width,
            height,
        }
    }
}

/// Allowed range for a single slot width.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotWidthBounds {
    pub min: f64,
    pub max: f64,
}

impl SlotWidthBounds {
    pub const DEFAULT: SlotWidthBounds = SlotWidthBounds {
        min: DEFAULT_MIN_SLOT_WIDTH,
        max: DEFAULT_MAX_SLOT_WIDTH,
    };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `width` lies within the bounds, inclusive, up to [`LENGTH_EPSILON`].
    #[inline]
    pub fn contains(&self, width: f64) -> bool {
        width >= self.min - LENGTH_EPSILON && width <= self.max + LENGTH_EPSILON
    }

    pub fn validate(&self) -> Result<()> {
        let ordered = self.min.is_finite() && self.max.is_finite() && self.max >= self.min;
        if !(self.min > 0.0) || !ordered {
            return Err(ConfigIssue::InvalidSlotBounds {
                min: self.min,
                max: self.max,
            }
            .into());
        }
        Ok(())
    }
}

impl Default for SlotWidthBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Immutable description of the enclosure and its installation context.
///
/// Every derived layout is recomputed from scratch from this value; nothing
/// downstream is mutated in place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SpaceConfig {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub installation_type: InstallationType,
    /// Side touching a wall. Only meaningful for semi-standing installs.
    pub wall_side: Option<Side>,
    pub frame_thickness: f64,
    pub end_panel_thickness: f64,
    pub soffit: Option<Soffit>,
    pub requested_slot_count: u32,
    pub slot_width_bounds: SlotWidthBounds,
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            width: 2400.0,
            height: 2400.0,
            depth: 600.0,
            installation_type: InstallationType::BuiltIn,
            wall_side: None,
            frame_thickness: DEFAULT_FRAME_THICKNESS,
            end_panel_thickness: DEFAULT_END_PANEL_THICKNESS,
            soffit: None,
            requested_slot_count: 1,
            slot_width_bounds: SlotWidthBounds::DEFAULT,
        }
    }
}

impl SpaceConfig {
    /// Create a configuration with default thicknesses and slot bounds.
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
            ..Self::default()
        }
    }

    pub fn with_installation(mut self, installation_type: InstallationType) -> Self {
        self.installation_type = installation_type;
        self
    }

    pub fn with_wall_side(mut self, side: Side) -> Self {
        self.wall_side = Some(side);
        self
    }

    /// Semi-standing install against a wall on `side`.
    pub fn semi_standing(self, side: Side) -> Self {
        self.with_installation(InstallationType::SemiStanding)
            .with_wall_side(side)
    }

    pub fn with_soffit(mut self, soffit: Soffit) -> Self {
        self.soffit = Some(soffit);
        self
    }

    pub fn with_requested_slots(mut self, count: u32) -> Self {
        self.requested_slot_count = count;
        self
    }

    pub fn with_frame_thickness(mut self, thickness: f64) -> Self {
        self.frame_thickness = thickness;
        self
    }

    pub fn with_end_panel_thickness(mut self, thickness: f64) -> Self {
        self.end_panel_thickness = thickness;
        self
    }

    pub fn with_slot_width_bounds(mut self, bounds: SlotWidthBounds) -> Self {
        self.slot_width_bounds = bounds;
        self
    }

    /// Wall side as seen by the resolver: `None` unless the install is
    /// semi-standing.
    #[inline]
    pub fn effective_wall_side(&self) -> Option<Side> {
        if self.installation_type.requires_wall_side() {
            self.wall_side
        } else {
            None
        }
    }

    /// The soffit on `side`, if there is one.
    #[inline]
    pub fn soffit_on(&self, side: Side) -> Option<&Soffit> {
        self.soffit.as_ref().filter(|s| s.side == side)
    }

    /// Vertical thickness of the top frame, or 0 when there is none.
    #[inline]
    pub fn top_thickness(&self) -> f64 {
        if self.installation_type.has_top_and_base() {
            self.frame_thickness
        } else {
            0.0
        }
    }

    /// Vertical thickness of the floor base, or 0 when there is none.
    #[inline]
    pub fn base_thickness(&self) -> f64 {
        self.top_thickness()
    }

    /// The same configuration reflected about the centre line: wall side and
    /// soffit side swap.
    pub fn mirrored(&self) -> Self {
        let mut mirrored = self.clone();
        mirrored.wall_side = self.wall_side.map(Side::opposite);
        mirrored.soffit = self.soffit.map(|s| Soffit {
            side: s.side.opposite(),
            ..s
        });
        mirrored
    }

    /// Checks everything that can be decided without resolving members.
    ///
    /// Member-relative checks (degenerate members, soffit width against the
    /// opening) happen in the geometry resolver.
    pub fn validate(&self) -> Result<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("depth", self.depth)?;
        positive("frameThickness", self.frame_thickness)?;
        positive("endPanelThickness", self.end_panel_thickness)?;

        if self.requested_slot_count == 0 {
            return Err(ConfigIssue::ZeroSlotCount.into());
        }
        self.slot_width_bounds.validate()?;

        if self.installation_type.requires_wall_side() && self.wall_side.is_none() {
            return Err(ConfigIssue::MissingWallSide(self.installation_type).into());
        }

        let stacked = self.top_thickness() + self.base_thickness();
        if stacked >= self.height {
            return Err(ConfigIssue::DegenerateVerticalStack {
                stacked,
                height: self.height,
            }
            .into());
        }

        if let Some(soffit) = &self.soffit {
            positive("soffit.width", soffit.width)?;
            positive("soffit.height", soffit.height)?;
            if soffit.height + self.base_thickness() >= self.height {
                return Err(ConfigIssue::SoffitTooTall {
                    soffit_height: soffit.height,
                    height: self.height,
                }
                .into());
            }
        }

        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigIssue::NonPositiveDimension { name, value }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn side_edges_are_mirrored() {
        assert_eq!(Side::Left.outer_edge(4800.0), -2400.0);
        assert_eq!(Side::Right.outer_edge(4800.0), 2400.0);
        assert_eq!(Side::Left.inward(-2400.0, 50.0), -2350.0);
        assert_eq!(Side::Right.inward(2400.0, 50.0), 2350.0);
        assert_eq!(Side::Left.opposite(), Side::Right);
    }

    #[test]
    fn defaults_match_policy() {
        let config = SpaceConfig::default();
        assert_eq!(config.frame_thickness, 50.0);
        assert_eq!(config.end_panel_thickness, 20.0);
        assert_eq!(config.slot_width_bounds, SlotWidthBounds::new(300.0, 600.0));
        assert_eq!(config.requested_slot_count, 1);
        assert_eq!(SpaceConfig::new(1200.0, 2000.0, 600.0).requested_slot_count, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn top_and_base_must_leave_an_opening() {
        let config = SpaceConfig::new(2000.0, 100.0, 600.0);
        assert_eq!(
            config.validate(),
            Err(Error::InvalidConfig(ConfigIssue::DegenerateVerticalStack {
                stacked: 100.0,
                height: 100.0
            }))
        );

        // No top or base: the same height is a valid open-top unit.
        let open = config.with_installation(InstallationType::FreeStanding);
        assert_eq!(open.top_thickness() + open.base_thickness(), 0.0);
        assert!(open.validate().is_ok());
    }

    #[test]
    fn semi_standing_without_wall_side_is_rejected() {
        let config =
            SpaceConfig::new(3000.0, 2400.0, 600.0).with_installation(InstallationType::SemiStanding);
        assert_eq!(
            config.validate(),
            Err(Error::InvalidConfig(ConfigIssue::MissingWallSide(
                InstallationType::SemiStanding
            )))
        );
    }

    #[test]
    fn wall_side_ignored_outside_semi_standing() {
        let config = SpaceConfig::new(3000.0, 2400.0, 600.0).with_wall_side(Side::Left);
        assert_eq!(config.effective_wall_side(), None);
        assert!(config.validate().is_ok());

        let semi = SpaceConfig::new(3000.0, 2400.0, 600.0).semi_standing(Side::Left);
        assert_eq!(semi.effective_wall_side(), Some(Side::Left));
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        let err = SpaceConfig::new(0.0, 2400.0, 600.0).validate().unwrap_err();
        assert!(matches!(
            err.issue(),
            ConfigIssue::NonPositiveDimension { name: "width", .. }
        ));

        let err = SpaceConfig::new(2400.0, 2400.0, f64::NAN).validate().unwrap_err();
        assert!(matches!(
            err.issue(),
            ConfigIssue::NonPositiveDimension { name: "depth", .. }
        ));

        let err = SpaceConfig::default()
            .with_frame_thickness(-5.0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err.issue(),
            ConfigIssue::NonPositiveDimension {
                name: "frameThickness",
                ..
            }
        ));
    }

    #[test]
    fn zero_slots_and_bad_bounds_are_rejected() {
        let err = SpaceConfig::default()
            .with_requested_slots(0)
            .validate()
            .unwrap_err();
        assert_eq!(err.issue(), &ConfigIssue::ZeroSlotCount);

        let err = SpaceConfig::default()
            .with_slot_width_bounds(SlotWidthBounds::new(600.0, 300.0))
            .validate()
            .unwrap_err();
        assert!(matches!(err.issue(), ConfigIssue::InvalidSlotBounds { .. }));
    }

    #[test]
    fn soffit_must_leave_clear_height() {
        let config = SpaceConfig::new(4800.0, 2400.0, 600.0)
            .with_soffit(Soffit::new(Side::Left, 900.0, 2360.0));
        let err = config.validate().unwrap_err();
        assert!(matches!(err.issue(), ConfigIssue::SoffitTooTall { .. }));

        // Free-standing has no base, so the same drop still fits.
        let open = config.with_installation(InstallationType::FreeStanding);
        assert!(open.validate().is_ok());
    }

    #[test]
    fn mirrored_swaps_sides() {
        let config = SpaceConfig::new(3000.0, 2400.0, 600.0)
            .semi_standing(Side::Left)
            .with_soffit(Soffit::new(Side::Left, 600.0, 300.0));
        let mirrored = config.mirrored();
        assert_eq!(mirrored.wall_side, Some(Side::Right));
        assert_eq!(mirrored.soffit.map(|s| s.side), Some(Side::Right));
        assert_eq!(mirrored.mirrored(), config);
    }

    #[test]
    fn slot_bounds_are_inclusive() {
        let bounds = SlotWidthBounds::DEFAULT;
        assert!(bounds.contains(300.0));
        assert!(bounds.contains(600.0));
        assert!(!bounds.contains(299.0));
        assert!(!bounds.contains(600.5));
    }
}
