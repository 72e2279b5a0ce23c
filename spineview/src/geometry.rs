use crate::mesh::DrawList;

/// Axis-aligned bounding box in skeleton world space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Aabb {
    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = [f32; 2]>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut out = Self {
            min: first,
            max: first,
        };
        for point in points {
            out.expand(point);
        }
        Some(out)
    }

    pub fn expand(&mut self, point: [f32; 2]) {
        self.min[0] = self.min[0].min(point[0]);
        self.min[1] = self.min[1].min(point[1]);
        self.max[0] = self.max[0].max(point[0]);
        self.max[1] = self.max[1].max(point[1]);
    }

    pub fn center(&self) -> [f32; 2] {
        [
            0.5 * (self.min[0] + self.max[0]),
            0.5 * (self.min[1] + self.max[1]),
        ]
    }

    /// Width and height.
    pub fn extents(&self) -> [f32; 2] {
        [self.max[0] - self.min[0], self.max[1] - self.min[1]]
    }
}

/// Bounds of every vertex in the draw list, `None` when nothing was drawn.
pub fn draw_list_bounds(list: &DrawList) -> Option<Aabb> {
    Aabb::from_points(list.vertices.iter().map(|v| v.position))
}
