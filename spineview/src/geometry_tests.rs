use crate::geometry::{Aabb, draw_list_bounds};
use crate::mesh::{BlendMode, DrawList, append_mesh};

#[test]
fn aabb_from_points_is_none_for_empty_input() {
    assert_eq!(Aabb::from_points(std::iter::empty()), None);
}

#[test]
fn aabb_from_points_tracks_min_and_max() {
    let aabb = Aabb::from_points([[1.0, -2.0], [-3.0, 4.0], [0.5, 0.5]]).unwrap();
    assert_eq!(aabb.min, [-3.0, -2.0]);
    assert_eq!(aabb.max, [1.0, 4.0]);
}

#[test]
fn aabb_single_point_is_degenerate() {
    let aabb = Aabb::from_points([[2.0, 3.0]]).unwrap();
    assert_eq!(aabb.min, [2.0, 3.0]);
    assert_eq!(aabb.max, [2.0, 3.0]);
    assert_eq!(aabb.extents(), [0.0, 0.0]);
}

#[test]
fn aabb_center_and_extents() {
    let aabb = Aabb {
        min: [-10.0, 0.0],
        max: [30.0, 20.0],
    };
    assert_eq!(aabb.center(), [10.0, 10.0]);
    assert_eq!(aabb.extents(), [40.0, 20.0]);
}

#[test]
fn draw_list_bounds_covers_all_appended_meshes() {
    let mut list = DrawList::default();
    append_mesh(
        &mut list,
        &[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]],
        &[],
        &[],
        &[],
        &[0, 1, 2],
        BlendMode::Normal,
        false,
        None,
    );
    append_mesh(
        &mut list,
        &[[-20.0, 5.0], [0.0, 5.0], [0.0, 40.0]],
        &[],
        &[],
        &[],
        &[0, 1, 2],
        BlendMode::Normal,
        false,
        None,
    );

    let bounds = draw_list_bounds(&list).unwrap();
    assert_eq!(bounds.min, [-20.0, 0.0]);
    assert_eq!(bounds.max, [10.0, 40.0]);
}

#[test]
fn draw_list_bounds_is_none_for_empty_list() {
    assert_eq!(draw_list_bounds(&DrawList::default()), None);
}
