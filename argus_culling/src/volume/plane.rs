/// Plane - one face of a convex volume, in normal + distance form.
///
/// A plane is stored as (normal, distance) where:
/// - `normal` is the unit normal pointing toward the volume interior
/// - `distance` is chosen so that `normal.dot(p) + distance == 0` on the plane
///
/// A point P is on the interior side when `signed_distance(P) >= 0`.

use glam::Vec3;

/// Inward-facing half-space boundary.
///
/// Distances are exact only when `normal` is unit length; the plane set
/// builder always supplies unit normals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing toward the volume interior
    pub normal: Vec3,
    /// Signed distance term: `normal.dot(p) + distance == 0` on the plane
    pub distance: f32,
}

impl Plane {
    /// Create a plane from an inward unit normal and its distance term.
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Create a plane from an inward unit normal and any point on the plane.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal,
            distance: -normal.dot(point),
        }
    }

    /// Signed distance from `point` to the plane.
    ///
    /// Positive on the interior side, negative outside, zero on the plane.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
