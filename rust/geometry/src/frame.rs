// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structural member resolution.
//!
//! Decides, for each side of the opening, whether a full frame or a thin end
//! panel closes it off, and places the top frame and floor base. Left and
//! right go through the same code path with a [`Side`] parameter; nothing here
//! is written twice for the two sides.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use wardrobe_lite_core::{
    ConfigIssue, InstallationType, MemberKind, MemberRole, Side, SpaceConfig,
};

use crate::error::Result;
use crate::interval::{HorizontalRegion, VerticalExtent};
use crate::soffit::check_soffit_fits;

/// One structural member of the enclosure.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StructuralMember {
    pub role: MemberRole,
    pub kind: MemberKind,
    /// Width for side members, vertical depth for top and base.
    pub thickness: f64,
    /// Footprint on the width axis.
    pub span: HorizontalRegion,
    /// Footprint on the vertical axis.
    pub extent: VerticalExtent,
}

impl StructuralMember {
    #[inline]
    pub fn height(&self) -> f64 {
        self.extent.height()
    }

    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self {
            thickness: self.thickness * factor,
            span: self.span.scaled(factor),
            extent: self.extent.scaled(factor),
            ..*self
        }
    }

    pub(crate) fn mirrored(&self) -> Self {
        let role = match self.role {
            MemberRole::Left => MemberRole::Right,
            MemberRole::Right => MemberRole::Left,
            other => other,
        };
        Self {
            role,
            span: self.span.mirrored(),
            ..*self
        }
    }
}

/// All members of a resolved enclosure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameSet {
    pub left: StructuralMember,
    pub right: StructuralMember,
    /// Absent for free-standing units.
    pub top: Option<StructuralMember>,
    /// Absent for free-standing units.
    pub base: Option<StructuralMember>,
}

impl FrameSet {
    /// The side member on `side`.
    pub fn side(&self, side: Side) -> &StructuralMember {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    #[inline]
    pub fn thickness(&self, side: Side) -> f64 {
        self.side(side).thickness
    }

    /// Interior between the two side members.
    pub fn interior(&self) -> HorizontalRegion {
        HorizontalRegion::new(self.left.span.right_boundary, self.right.span.left_boundary)
    }

    /// Members in left, right, top, base order, skipping absent ones.
    pub fn iter(&self) -> impl Iterator<Item = &StructuralMember> {
        [Some(&self.left), Some(&self.right), self.top.as_ref(), self.base.as_ref()]
            .into_iter()
            .flatten()
    }

    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self {
            left: self.left.scaled(factor),
            right: self.right.scaled(factor),
            top: self.top.map(|m| m.scaled(factor)),
            base: self.base.map(|m| m.scaled(factor)),
        }
    }

    pub(crate) fn mirrored(&self) -> Self {
        Self {
            left: self.right.mirrored(),
            right: self.left.mirrored(),
            top: self.top.map(|m| m.mirrored()),
            base: self.base.map(|m| m.mirrored()),
        }
    }
}

/// Resolves the structural members of a [`SpaceConfig`].
pub struct FrameResolver<'a> {
    config: &'a SpaceConfig,
}

impl<'a> FrameResolver<'a> {
    pub fn new(config: &'a SpaceConfig) -> Self {
        Self { config }
    }

    /// Member construction on `side`.
    ///
    /// | installation  | wall side | other side |
    /// |---------------|-----------|------------|
    /// | BuiltIn       | Frame     | Frame      |
    /// | SemiStanding  | Frame     | EndPanel   |
    /// | FreeStanding  | EndPanel  | EndPanel   |
    pub fn member_kind(&self, side: Side) -> Result<MemberKind> {
        match self.config.installation_type {
            InstallationType::BuiltIn => Ok(MemberKind::Frame),
            InstallationType::FreeStanding => Ok(MemberKind::EndPanel),
            InstallationType::SemiStanding => {
                let wall = self
                    .config
                    .effective_wall_side()
                    .ok_or(ConfigIssue::MissingWallSide(InstallationType::SemiStanding))?;
                Ok(if side == wall {
                    MemberKind::Frame
                } else {
                    MemberKind::EndPanel
                })
            }
        }
    }

    fn kind_thickness(&self, kind: MemberKind) -> f64 {
        match kind {
            MemberKind::Frame => self.config.frame_thickness,
            MemberKind::EndPanel => self.config.end_panel_thickness,
        }
    }

    /// The vertical member standing on `side`.
    ///
    /// It runs from the floor to the ceiling, or stops where a soffit on the
    /// same side begins.
    pub fn side_member(&self, side: Side) -> Result<StructuralMember> {
        let kind = self.member_kind(side)?;
        let thickness = self.kind_thickness(kind);
        let width = self.config.width;

        if thickness >= width / 2.0 {
            return Err(ConfigIssue::DegenerateMember {
                role: side.into(),
                thickness,
                width,
            }
            .into());
        }

        let outer = side.outer_edge(width);
        let top = match self.config.soffit_on(side) {
            Some(soffit) => self.config.height - soffit.height,
            None => self.config.height,
        };

        Ok(StructuralMember {
            role: side.into(),
            kind,
            thickness,
            span: HorizontalRegion::between(outer, side.inward(outer, thickness)),
            extent: VerticalExtent::new(0.0, top),
        })
    }

    /// Where the ceiling opening ends on `side`: the inner face of the side
    /// member, or the inner edge of a soffit on that side.
    fn ceiling_edge(&self, side: Side, member: &StructuralMember) -> f64 {
        let outer = side.outer_edge(self.config.width);
        match self.config.soffit_on(side) {
            Some(soffit) => side.inward(outer, soffit.width),
            None => side.inward(outer, member.thickness),
        }
    }

    /// Resolve every member.
    pub fn resolve(&self) -> Result<FrameSet> {
        let left = self.side_member(Side::Left)?;
        let right = self.side_member(Side::Right)?;
        check_soffit_fits(self.config, left.thickness, right.thickness)?;

        let (top, base) = if self.config.installation_type.has_top_and_base() {
            let height = self.config.height;
            let frame = self.config.frame_thickness;

            let top = StructuralMember {
                role: MemberRole::Top,
                kind: MemberKind::Frame,
                thickness: frame,
                span: HorizontalRegion::new(
                    self.ceiling_edge(Side::Left, &left),
                    self.ceiling_edge(Side::Right, &right),
                ),
                extent: VerticalExtent::new(height - frame, height),
            };
            let base = StructuralMember {
                role: MemberRole::Base,
                kind: MemberKind::Frame,
                thickness: frame,
                span: HorizontalRegion::new(left.span.right_boundary, right.span.left_boundary),
                extent: VerticalExtent::new(0.0, frame),
            };
            (Some(top), Some(base))
        } else {
            (None, None)
        };

        Ok(FrameSet {
            left,
            right,
            top,
            base,
        })
    }
}
