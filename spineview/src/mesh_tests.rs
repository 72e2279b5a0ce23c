use crate::mesh::{BlendMode, DrawList, NO_DARK, WHITE, append_mesh};

#[test]
fn append_rebases_indices_onto_the_pool() {
    let mut list = DrawList::default();
    append_mesh(
        &mut list,
        &[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
        &[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
        &[],
        &[],
        &[0, 1, 2],
        BlendMode::Normal,
        false,
        None,
    );
    append_mesh(
        &mut list,
        &[[2.0, 2.0], [3.0, 2.0], [3.0, 3.0]],
        &[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
        &[],
        &[],
        &[0, 1, 2],
        BlendMode::Additive,
        true,
        None,
    );

    assert_eq!(list.vertices.len(), 6);
    assert_eq!(list.indices, vec![0, 1, 2, 3, 4, 5]);

    assert_eq!(list.calls.len(), 2);
    assert_eq!(list.calls[0].first_index, 0);
    assert_eq!(list.calls[0].index_count, 3);
    assert_eq!(list.calls[0].blend, BlendMode::Normal);
    assert!(!list.calls[0].premultiplied_alpha);
    assert_eq!(list.calls[1].first_index, 3);
    assert_eq!(list.calls[1].index_count, 3);
    assert_eq!(list.calls[1].blend, BlendMode::Additive);
    assert!(list.calls[1].premultiplied_alpha);
}

#[test]
fn append_shared_vertices_keep_local_topology() {
    let mut list = DrawList::default();
    append_mesh(
        &mut list,
        &[[0.0, 0.0]],
        &[],
        &[],
        &[],
        &[0],
        BlendMode::Normal,
        false,
        None,
    );
    append_mesh(
        &mut list,
        &[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
        &[],
        &[],
        &[],
        &[0, 1, 2, 2, 3, 0],
        BlendMode::Normal,
        false,
        None,
    );
    assert_eq!(list.indices, vec![0, 1, 2, 3, 3, 4, 1]);
}

#[test]
fn append_skips_empty_meshes() {
    let mut list = DrawList::default();
    append_mesh(
        &mut list,
        &[],
        &[],
        &[],
        &[],
        &[],
        BlendMode::Normal,
        false,
        None,
    );
    append_mesh(
        &mut list,
        &[[0.0, 0.0]],
        &[],
        &[],
        &[],
        &[],
        BlendMode::Normal,
        false,
        None,
    );
    assert!(list.is_empty());
    assert!(list.calls.is_empty());
}

#[test]
fn missing_colors_default_to_white_light_and_no_dark() {
    let mut list = DrawList::default();
    append_mesh(
        &mut list,
        &[[0.0, 0.0], [1.0, 0.0]],
        &[[0.25, 0.5]],
        &[[0.5, 0.5, 0.5, 1.0]],
        &[],
        &[0, 1],
        BlendMode::Normal,
        false,
        None,
    );

    assert_eq!(list.vertices[0].uv, [0.25, 0.5]);
    assert_eq!(list.vertices[0].color, [0.5, 0.5, 0.5, 1.0]);
    assert_eq!(list.vertices[0].dark_color, NO_DARK);

    // Second vertex had no uv/color data at all.
    assert_eq!(list.vertices[1].uv, [0.0, 0.0]);
    assert_eq!(list.vertices[1].color, WHITE);
    assert_eq!(list.vertices[1].dark_color, NO_DARK);
}

#[test]
fn clear_empties_every_pool() {
    let mut list = DrawList::default();
    append_mesh(
        &mut list,
        &[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
        &[],
        &[],
        &[],
        &[0, 1, 2],
        BlendMode::Normal,
        false,
        None,
    );
    list.clear();
    assert!(list.vertices.is_empty());
    assert!(list.indices.is_empty());
    assert!(list.calls.is_empty());
    assert!(list.is_empty());
}

#[test]
fn blend_mode_converts_from_the_runtime_enum() {
    assert_eq!(
        BlendMode::from(rusty_spine::BlendMode::Normal),
        BlendMode::Normal
    );
    assert_eq!(
        BlendMode::from(rusty_spine::BlendMode::Additive),
        BlendMode::Additive
    );
    assert_eq!(
        BlendMode::from(rusty_spine::BlendMode::Multiply),
        BlendMode::Multiply
    );
    assert_eq!(
        BlendMode::from(rusty_spine::BlendMode::Screen),
        BlendMode::Screen
    );
}
