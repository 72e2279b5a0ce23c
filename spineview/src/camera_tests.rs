use crate::camera::{clip_from_world_centered, clip_from_world_fit};
use crate::geometry::Aabb;

fn assert_approx(actual: f32, expected: f32) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= 0.001,
        "expected {expected}, got {actual} (diff {diff})"
    );
}

/// Column-major transform of a world point into clip space.
fn apply(m: [[f32; 4]; 4], p: [f32; 2]) -> [f32; 2] {
    [
        m[0][0] * p[0] + m[1][0] * p[1] + m[3][0],
        m[0][1] * p[0] + m[1][1] * p[1] + m[3][1],
    ]
}

#[test]
fn centered_maps_origin_to_clip_origin() {
    let m = clip_from_world_centered(800.0, 600.0);
    let c = apply(m, [0.0, 0.0]);
    assert_approx(c[0], 0.0);
    assert_approx(c[1], 0.0);
}

#[test]
fn centered_maps_viewport_corner_to_clip_corner() {
    let m = clip_from_world_centered(800.0, 600.0);
    let c = apply(m, [400.0, 300.0]);
    assert_approx(c[0], 1.0);
    assert_approx(c[1], 1.0);
    let c = apply(m, [-400.0, -300.0]);
    assert_approx(c[0], -1.0);
    assert_approx(c[1], -1.0);
}

#[test]
fn fit_maps_bounds_center_to_clip_origin() {
    let bounds = Aabb {
        min: [100.0, -50.0],
        max: [300.0, 250.0],
    };
    let m = clip_from_world_fit(bounds, 800, 600, 0.9);
    let c = apply(m, bounds.center());
    assert_approx(c[0], 0.0);
    assert_approx(c[1], 0.0);
}

#[test]
fn fit_is_isotropic_in_pixels() {
    let bounds = Aabb {
        min: [0.0, 0.0],
        max: [100.0, 10.0],
    };
    let m = clip_from_world_fit(bounds, 200, 400, 1.0);
    // One world unit must span the same number of pixels on both axes.
    let px_per_unit_x = m[0][0] * 200.0 / 2.0;
    let px_per_unit_y = m[1][1] * 400.0 / 2.0;
    assert_approx(px_per_unit_x, px_per_unit_y);
}

#[test]
fn fit_limiting_axis_reaches_margin() {
    // Wide bounds in a square viewport: x is the limiting axis.
    let bounds = Aabb {
        min: [-50.0, -5.0],
        max: [50.0, 5.0],
    };
    let m = clip_from_world_fit(bounds, 400, 400, 0.8);
    let c = apply(m, [50.0, 0.0]);
    assert_approx(c[0], 0.8);
    let c = apply(m, [-50.0, 0.0]);
    assert_approx(c[0], -0.8);
}

#[test]
fn fit_clamps_margin_and_degenerate_bounds() {
    let bounds = Aabb {
        min: [10.0, 10.0],
        max: [10.0, 10.0],
    };
    // Degenerate bounds must not produce NaN or infinite scales.
    let m = clip_from_world_fit(bounds, 800, 600, 5.0);
    assert!(m[0][0].is_finite());
    assert!(m[1][1].is_finite());
    let c = apply(m, [10.0, 10.0]);
    assert_approx(c[0], 0.0);
    assert_approx(c[1], 0.0);
}
