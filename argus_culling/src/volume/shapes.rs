/// Axis-aligned shapes handed to the classifiers.
///
/// Shapes are plain caller-owned values addressed by their minimal corner
/// (smallest x, y, z), matching how octree cells are usually stored. The
/// classifiers only ever read a shape's center and bounding radius.
///
/// Neither type validates its extents; negative scales are a caller error.

use glam::Vec3;

/// Half of sqrt(3): bounding radius of a unit cube.
const HALF_SQRT_THREE: f32 = 0.866_025_4;

// ===== AABOX =====

/// Axis-aligned box: minimal corner plus per-axis extents.
///
/// The opposite corner is `corner + scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABox {
    /// Minimal corner (smallest x, y, z)
    pub corner: Vec3,
    /// Per-axis edge lengths
    pub scale: Vec3,
}

impl AABox {
    /// Create a box from its minimal corner and per-axis extents.
    pub fn new(corner: Vec3, scale: Vec3) -> Self {
        Self { corner, scale }
    }

    /// Re-target the box in place.
    pub fn set_box(&mut self, corner: Vec3, scale: Vec3) {
        self.corner = corner;
        self.scale = scale;
    }

    /// Center of the box.
    pub fn center(&self) -> Vec3 {
        self.corner + 0.5 * self.scale
    }

    /// Radius of the circumscribing sphere (half the main diagonal).
    pub fn bounding_radius(&self) -> f32 {
        0.5 * self.scale.length()
    }
}

// ===== AACUBE =====

/// Axis-aligned cube: minimal corner plus one uniform edge length.
///
/// Kept distinct from [`AABox`] because octree cells are always cubic and
/// the bounding radius reduces to a single multiply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AACube {
    /// Minimal corner (smallest x, y, z)
    pub corner: Vec3,
    /// Edge length, shared by all three axes
    pub scale: f32,
}

impl AACube {
    /// Create a cube from its minimal corner and edge length.
    pub fn new(corner: Vec3, scale: f32) -> Self {
        Self { corner, scale }
    }

    /// Re-target the cube in place.
    pub fn set_box(&mut self, corner: Vec3, scale: f32) {
        self.corner = corner;
        self.scale = scale;
    }

    /// Center of the cube.
    pub fn center(&self) -> Vec3 {
        self.corner + Vec3::splat(0.5 * self.scale)
    }

    /// Radius of the circumscribing sphere (`0.5 * sqrt(3) * scale`).
    pub fn bounding_radius(&self) -> f32 {
        HALF_SQRT_THREE * self.scale
    }
}

#[cfg(test)]
#[path = "shapes_tests.rs"]
mod tests;
