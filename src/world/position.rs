use cgmath::Point3;
use serde::{Deserialize, Serialize};

/// Integer coordinate identifying one cell of the voxel grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Cell containing a world-space point
    pub fn containing(point: Point3<f32>) -> Self {
        Self {
            x: point.x.floor() as i32,
            y: point.y.floor() as i32,
            z: point.z.floor() as i32,
        }
    }

    /// World-space point an agent standing in this cell occupies: the
    /// horizontal center of the cell, feet at the cell's base height.
    /// This is the teleport target convention for every search result.
    pub fn stand_point(&self) -> Point3<f32> {
        Point3::new(self.x as f32 + 0.5, self.y as f32, self.z as f32 + 0.5)
    }

    /// Cell `dy` blocks above this one
    pub fn above(&self, dy: i32) -> Self {
        Self::new(self.x, self.y + dy, self.z)
    }

    /// Cell `dy` blocks below this one
    pub fn below(&self, dy: i32) -> Self {
        Self::new(self.x, self.y - dy, self.z)
    }

    /// Same column, different height
    pub fn at_height(&self, y: i32) -> Self {
        Self::new(self.x, y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containing_floors_toward_negative_infinity() {
        let pos = VoxelPos::containing(Point3::new(1.9, -0.1, 0.0));
        assert_eq!(pos, VoxelPos::new(1, -1, 0));
    }

    #[test]
    fn test_stand_point_centers_horizontally() {
        let p = VoxelPos::new(3, 9, 0).stand_point();
        assert_eq!(p, Point3::new(3.5, 9.0, 0.5));
    }
}
