use crate::geometry::Aabb;

pub const BONE_COLOR: [f32; 4] = [1.0, 0.1, 0.1, 1.0];
pub const AABB_COLOR: [f32; 4] = [0.1, 1.0, 0.1, 1.0];
pub const ORIGIN_COLOR: [f32; 4] = [0.4, 0.6, 1.0, 1.0];

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Debug overlay geometry as a flat line list (two vertices per segment).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DebugLines {
    pub vertices: Vec<LineVertex>,
}

impl DebugLines {
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn push_segment(&mut self, from: [f32; 2], to: [f32; 2], color: [f32; 4]) {
        self.vertices.push(LineVertex {
            position: from,
            color,
        });
        self.vertices.push(LineVertex {
            position: to,
            color,
        });
    }

    /// Closed rectangle outline.
    pub fn push_rect(&mut self, aabb: Aabb, color: [f32; 4]) {
        let [x0, y0] = aabb.min;
        let [x1, y1] = aabb.max;
        self.push_segment([x0, y0], [x1, y0], color);
        self.push_segment([x1, y0], [x1, y1], color);
        self.push_segment([x1, y1], [x0, y1], color);
        self.push_segment([x0, y1], [x0, y0], color);
    }

    /// Axis-aligned cross marker, `half` units from center to tip.
    pub fn push_cross(&mut self, center: [f32; 2], half: f32, color: [f32; 4]) {
        let [x, y] = center;
        self.push_segment([x - half, y], [x + half, y], color);
        self.push_segment([x, y - half], [x, y + half], color);
    }
}
