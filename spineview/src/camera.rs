use crate::geometry::Aabb;
use glam::{Mat4, Quat, Vec3};

/// Clip-from-world matrix treating world coordinates as centered pixels:
/// x in [-w/2, w/2], y in [-h/2, h/2], y up.
pub fn clip_from_world_centered(width: f32, height: f32) -> [[f32; 4]; 4] {
    let hw = 0.5 * width.max(1.0);
    let hh = 0.5 * height.max(1.0);
    Mat4::orthographic_rh(-hw, hw, -hh, hh, -1.0, 1.0).to_cols_array_2d()
}

/// Clip-from-world matrix fitting `bounds` into the viewport.
///
/// World units stay isotropic in pixels; `margin` is the fraction of the
/// viewport the bounds may cover along the limiting axis, clamped to
/// [0.1, 1.0].
pub fn clip_from_world_fit(
    bounds: Aabb,
    viewport_width: u32,
    viewport_height: u32,
    margin: f32,
) -> [[f32; 4]; 4] {
    let vw = viewport_width.max(1) as f32;
    let vh = viewport_height.max(1) as f32;
    let margin = margin.clamp(0.1, 1.0);

    let [world_w, world_h] = bounds.extents();
    let world_w = world_w.abs().max(1.0e-3);
    let world_h = world_h.abs().max(1.0e-3);
    let [cx, cy] = bounds.center();

    let scale_px = (vw * margin / world_w).min(vh * margin / world_h);
    let sx = 2.0 * scale_px / vw;
    let sy = 2.0 * scale_px / vh;

    Mat4::from_scale_rotation_translation(
        Vec3::new(sx, sy, 1.0),
        Quat::IDENTITY,
        Vec3::new(-cx * sx, -cy * sy, 0.0),
    )
    .to_cols_array_2d()
}
