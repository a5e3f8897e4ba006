// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Layout invariants checked over a sweep of configurations.

use approx::assert_abs_diff_eq;
use wardrobe_lite_geometry::{
    compute_layout, InstallationType, LayoutSummary, Side, Soffit, SpaceConfig,
};

const TOLERANCE: f64 = 1e-6;

/// Every feasible combination of topology, wall side, soffit and requested
/// count over a handful of widths.
fn sweep() -> Vec<SpaceConfig> {
    let widths = [350.0, 900.0, 1200.0, 2000.0, 3000.0, 4800.0, 7350.0];
    let soffits = [
        None,
        Some(Soffit::new(Side::Left, 300.0, 250.0)),
        Some(Soffit::new(Side::Right, 640.0, 400.0)),
    ];
    let installs = [
        (InstallationType::BuiltIn, None),
        (InstallationType::SemiStanding, Some(Side::Left)),
        (InstallationType::SemiStanding, Some(Side::Right)),
        (InstallationType::FreeStanding, None),
    ];

    let mut configs = Vec::new();
    for &width in &widths {
        for soffit in soffits {
            for (installation_type, wall_side) in installs {
                for requested in [1, 2, 3, 5, 8, 13] {
                    let mut config = SpaceConfig::new(width, 2400.0, 600.0)
                        .with_installation(installation_type)
                        .with_requested_slots(requested);
                    config.wall_side = wall_side;
                    config.soffit = soffit;
                    configs.push(config);
                }
            }
        }
    }
    configs
}

fn feasible_layouts() -> Vec<(SpaceConfig, LayoutSummary)> {
    sweep()
        .into_iter()
        .filter_map(|config| compute_layout(&config).ok().map(|layout| (config, layout)))
        .collect()
}

#[test]
fn sweep_covers_feasible_and_infeasible_inputs() {
    let total = sweep().len();
    let feasible = feasible_layouts().len();
    assert!(feasible > total / 2);
    assert!(feasible < total);
}

#[test]
fn members_and_regions_tile_the_width() {
    for (config, layout) in feasible_layouts() {
        let regions: f64 = layout.regions().iter().map(|r| r.width()).sum();
        assert_abs_diff_eq!(
            layout.side_thickness() + regions,
            config.width,
            epsilon = TOLERANCE
        );

        // Regions and members abut with no gap.
        let regions = layout.regions();
        assert_abs_diff_eq!(
            regions[0].left_boundary,
            layout.members.left.span.right_boundary,
            epsilon = TOLERANCE
        );
        assert_abs_diff_eq!(
            regions[regions.len() - 1].right_boundary,
            layout.members.right.span.left_boundary,
            epsilon = TOLERANCE
        );
        for pair in regions.windows(2) {
            assert_abs_diff_eq!(pair[0].right_boundary, pair[1].left_boundary, epsilon = TOLERANCE);
        }
        for region in &regions {
            assert!(region.right_boundary > region.left_boundary);
        }
    }
}

#[test]
fn soffit_region_loses_exactly_its_own_member() {
    for (config, layout) in feasible_layouts() {
        let (Some(soffit), Some(input)) = (layout.soffit, config.soffit) else {
            continue;
        };
        let own = layout.members.side(input.side).thickness;
        assert_abs_diff_eq!(soffit.inner_width(), input.width - own, epsilon = TOLERANCE);

        let opposite = layout.members.side(input.side.opposite()).thickness;
        assert_abs_diff_eq!(
            layout.regular_region.width(),
            config.width - input.width - opposite,
            epsilon = TOLERANCE
        );
    }
}

#[test]
fn slots_cover_the_regular_region_equally() {
    for (_, layout) in feasible_layouts() {
        let region = layout.regular_region;
        let total: f64 = layout.slots.iter().map(|s| s.width).sum();
        assert_abs_diff_eq!(total, region.width(), epsilon = TOLERANCE);

        let expected = region.width() / layout.slots.len() as f64;
        for slot in &layout.slots {
            assert_eq!(slot.width, expected);
        }
        assert_abs_diff_eq!(layout.slots[0].left(), region.left_boundary, epsilon = TOLERANCE);
        for pair in layout.slots.windows(2) {
            assert_abs_diff_eq!(pair[0].right(), pair[1].left(), epsilon = TOLERANCE);
            assert!(pair[0].center < pair[1].center);
        }
    }
}

#[test]
fn slot_widths_respect_bounds() {
    for (config, layout) in feasible_layouts() {
        let bounds = config.slot_width_bounds;
        let width = layout.slot_resolution.width;
        if layout.regular_region.width() < bounds.min {
            assert_eq!(layout.slots.len(), 1);
            assert_eq!(width, layout.regular_region.width());
        } else {
            assert!(bounds.contains(width), "{width} outside bounds for {config:?}");
        }
    }
}

#[test]
fn no_slot_overlaps_the_soffit() {
    for (_, layout) in feasible_layouts() {
        let Some(soffit) = layout.soffit else {
            continue;
        };
        for slot in &layout.slots {
            assert!(!slot.span().overlaps(&soffit.region));
            assert!(!slot.span().overlaps(&soffit.footprint));
        }
    }
}

#[test]
fn layout_is_idempotent() {
    for config in sweep() {
        let first = compute_layout(&config);
        let second = compute_layout(&config);
        assert_eq!(first, second);
    }
}

#[test]
fn mirrored_config_gives_mirrored_layout() {
    for (config, layout) in feasible_layouts() {
        let mirrored = compute_layout(&config.mirrored()).unwrap();
        let expected = layout.mirrored();

        assert_eq!(mirrored.members.left.kind, layout.members.right.kind);
        assert_eq!(mirrored.members.left.thickness, layout.members.right.thickness);
        assert_eq!(mirrored.members.right.thickness, layout.members.left.thickness);
        assert_eq!(mirrored.slots.len(), expected.slots.len());
        for (a, b) in mirrored.slots.iter().zip(&expected.slots) {
            assert_eq!(a.index, b.index);
            assert_abs_diff_eq!(a.center, b.center, epsilon = TOLERANCE);
        }
        assert_abs_diff_eq!(
            mirrored.regular_region.left_boundary,
            expected.regular_region.left_boundary,
            epsilon = TOLERANCE
        );
        assert_eq!(
            mirrored.dimensions.left_member_height,
            expected.dimensions.left_member_height
        );
        assert_eq!(mirrored.soffit.map(|s| s.side), expected.soffit.map(|s| s.side));
    }
}

#[test]
fn semi_standing_wall_side_swap_is_a_mirror() {
    let left = SpaceConfig::new(3000.0, 2400.0, 600.0)
        .semi_standing(Side::Left)
        .with_requested_slots(5);
    let right = left.clone().with_wall_side(Side::Right);
    assert_eq!(right, left.mirrored());

    let a = compute_layout(&left).unwrap();
    let b = compute_layout(&right).unwrap();
    assert_eq!(a.members.left.thickness, b.members.right.thickness);
    for (x, y) in a.slots.iter().zip(b.slots.iter().rev()) {
        assert_abs_diff_eq!(x.center, -y.center, epsilon = TOLERANCE);
    }
}
