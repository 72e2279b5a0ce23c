use crate::texture::PagePtr;

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const NO_DARK: [f32; 4] = [0.0, 0.0, 0.0, 0.0];

/// Slot blend mode, decoupled from the runtime's enum so renderer crates
/// need no `rusty_spine` dependency.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlendMode {
    Normal,
    Additive,
    Multiply,
    Screen,
}

impl From<rusty_spine::BlendMode> for BlendMode {
    fn from(value: rusty_spine::BlendMode) -> Self {
        match value {
            rusty_spine::BlendMode::Normal => Self::Normal,
            rusty_spine::BlendMode::Additive => Self::Additive,
            rusty_spine::BlendMode::Multiply => Self::Multiply,
            rusty_spine::BlendMode::Screen => Self::Screen,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
    pub dark_color: [f32; 4],
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub first_index: usize,
    pub index_count: usize,
    pub blend: BlendMode,
    pub premultiplied_alpha: bool,
    pub page: Option<PagePtr>,
}

/// Posed skeleton meshes, ready for a renderer: one shared vertex/index pool
/// plus one call per runtime renderable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.calls.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty() || self.vertices.is_empty()
    }
}

/// Append one mesh as a draw call, rebasing its indices onto the pool.
///
/// Empty meshes append nothing. Missing per-vertex colors fall back to
/// opaque white light / transparent black dark.
#[allow(clippy::too_many_arguments)]
pub fn append_mesh(
    out: &mut DrawList,
    positions: &[[f32; 2]],
    uvs: &[[f32; 2]],
    colors: &[[f32; 4]],
    dark_colors: &[[f32; 4]],
    indices: &[u16],
    blend: BlendMode,
    premultiplied_alpha: bool,
    page: Option<PagePtr>,
) {
    if positions.is_empty() || indices.is_empty() {
        return;
    }

    let base = out.vertices.len() as u32;
    for (i, position) in positions.iter().enumerate() {
        out.vertices.push(Vertex {
            position: *position,
            uv: uvs.get(i).copied().unwrap_or([0.0, 0.0]),
            color: colors.get(i).copied().unwrap_or(WHITE),
            dark_color: dark_colors.get(i).copied().unwrap_or(NO_DARK),
        });
    }

    let first_index = out.indices.len();
    out.indices
        .extend(indices.iter().map(|&i| base + u32::from(i)));
    out.calls.push(DrawCall {
        first_index,
        index_count: indices.len(),
        blend,
        premultiplied_alpha,
        page,
    });
}
