/// ViewVolume - pyramidal frustum plus keyhole visibility classifier.
///
/// The volume answers tri-state containment queries (point, sphere,
/// axis-aligned box and cube) against a six-plane frustum, and "keyhole"
/// queries against the union of that frustum with a sphere of
/// `center_radius` centered on the observer. The keyhole keeps content
/// immediately around the observer relevant even when it falls outside
/// the forward pyramid, which is what octree streaming wants.
///
/// Axis convention (fixed): observer-local forward is -Z, right is +X,
/// up is +Y; world axes are `orientation * local`. A sign error here
/// inverts every classifier, so all plane math is concentrated in
/// `calculate()`.
///
/// Lifecycle is mutate, then `calculate()`, then query. Setters only
/// store and mark the volume stale; `calculate()` rebuilds the plane set
/// and derived axes; queries take `&self` and run in constant time.
/// Querying a stale volume is a contract violation, checked with debug
/// assertions and free in release builds.

use glam::{Quat, Vec3};

use super::containment::Containment;
use super::plane::Plane;
use super::projection::Projection;
use super::shapes::{AABox, AACube};

/// Plane indices within [`ViewVolume::planes`]
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Observer view volume: frustum and keyhole classifier.
///
/// # Example
///
/// ```no_run
/// use argus_culling::glam::{Quat, Vec3};
/// use argus_culling::volume::{Containment, Projection, ViewVolume};
///
/// let projection = Projection::new(1.2, 16.0 / 9.0, 0.1, 500.0)?;
/// let mut volume = ViewVolume::new(Vec3::ZERO, Quat::IDENTITY, projection, 10.0);
///
/// volume.set_position(Vec3::new(0.0, 2.0, 0.0));
/// volume.calculate();
///
/// assert_eq!(volume.point_in_frustum(Vec3::new(0.0, 2.0, -5.0)), Containment::Inside);
/// # Ok::<(), argus_culling::argus::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ViewVolume {
    /// Observer position (frustum apex and keyhole center)
    position: Vec3,
    /// Observer orientation applied to the local axes
    orientation: Quat,
    /// Validated perspective parameters
    projection: Projection,
    /// Radius of the keyhole's central sphere (0 disables it)
    center_radius: f32,

    // Derived state, rebuilt by calculate()
    /// World-space forward axis
    direction: Vec3,
    /// World-space right axis
    right: Vec3,
    /// World-space up axis
    up: Vec3,
    /// Half of the horizontal field of view
    half_fov_x: f32,
    /// Half of the derived vertical field of view
    half_fov_y: f32,
    /// Frustum planes: left, right, bottom, top, near, far
    planes: [Plane; 6],
    /// True between a setter call and the next calculate()
    dirty: bool,
}

impl ViewVolume {
    /// Create a view volume and compute its plane set immediately.
    ///
    /// A freshly constructed volume is never stale; it can be queried
    /// right away.
    pub fn new(
        position: Vec3,
        orientation: Quat,
        projection: Projection,
        center_radius: f32,
    ) -> Self {
        let mut volume = Self {
            position,
            orientation,
            projection,
            center_radius,
            direction: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            half_fov_x: 0.0,
            half_fov_y: 0.0,
            planes: [Plane::new(Vec3::NEG_Z, 0.0); 6],
            dirty: true,
        };
        volume.calculate();
        volume
    }

    // ===== PLANE SET BUILDER =====

    /// Rebuild the derived axes and the six-plane set from the stored
    /// pose and projection, clearing the stale flag.
    ///
    /// The four side planes pass through the observer position (the
    /// pyramid apex), so a side plane's signed distance for a direction
    /// at angle `a` from the volume edge is `distance * sin(a)`. The
    /// near and far planes are perpendicular to the view direction at
    /// their clip distances.
    pub fn calculate(&mut self) {
        let half_fov_x = 0.5 * self.projection.field_of_view();
        let half_fov_y = (half_fov_x.sin() / self.projection.aspect_ratio()).asin();

        let direction = self.orientation * Vec3::NEG_Z;
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;

        let (sin_x, cos_x) = half_fov_x.sin_cos();
        let (sin_y, cos_y) = half_fov_y.sin_cos();

        // Side plane normals tilt inward from the lateral axes toward the
        // view direction by the respective half angle.
        self.planes[PLANE_LEFT] =
            Plane::from_normal_and_point(sin_x * direction + cos_x * right, self.position);
        self.planes[PLANE_RIGHT] =
            Plane::from_normal_and_point(sin_x * direction - cos_x * right, self.position);
        self.planes[PLANE_BOTTOM] =
            Plane::from_normal_and_point(sin_y * direction + cos_y * up, self.position);
        self.planes[PLANE_TOP] =
            Plane::from_normal_and_point(sin_y * direction - cos_y * up, self.position);
        self.planes[PLANE_NEAR] = Plane::from_normal_and_point(
            direction,
            self.position + self.projection.near_clip() * direction,
        );
        self.planes[PLANE_FAR] = Plane::from_normal_and_point(
            -direction,
            self.position + self.projection.far_clip() * direction,
        );

        self.direction = direction;
        self.right = right;
        self.up = up;
        self.half_fov_x = half_fov_x;
        self.half_fov_y = half_fov_y;
        self.dirty = false;

        crate::argus_trace!(
            "argus::ViewVolume",
            "recalculated planes: fov={:.4} aspect={:.4} near={} far={} keyhole={}",
            self.projection.field_of_view(),
            self.projection.aspect_ratio(),
            self.projection.near_clip(),
            self.projection.far_clip(),
            self.center_radius
        );
    }

    fn debug_check_calculated(&self) {
        debug_assert!(
            !self.dirty,
            "ViewVolume queried before calculate() after a mutation"
        );
    }

    // ===== FRUSTUM QUERIES =====

    /// Classify a point against the frustum.
    ///
    /// A point is never `Intersect`: it is inside when on the interior
    /// side of all six planes (boundary included), outside otherwise.
    pub fn point_in_frustum(&self, point: Vec3) -> Containment {
        self.debug_check_calculated();
        self.point_vs_planes(point)
    }

    /// Classify a sphere against the frustum.
    ///
    /// Exact for spheres: `Outside` when some plane excludes it entirely,
    /// `Intersect` when no plane excludes it but some plane cuts it,
    /// `Inside` when every plane clears it by at least its radius.
    pub fn sphere_in_frustum(&self, center: Vec3, radius: f32) -> Containment {
        self.debug_check_calculated();
        self.sphere_vs_planes(center, radius)
    }

    /// Classify an axis-aligned box against the frustum.
    ///
    /// The box is reduced to its bounding sphere, which is conservative:
    /// a reported `Intersect` may really be fully inside or outside, but
    /// `Inside` and `Outside` verdicts are always true of the box itself.
    pub fn box_in_frustum(&self, aabox: &AABox) -> Containment {
        self.debug_check_calculated();
        self.sphere_vs_planes(aabox.center(), aabox.bounding_radius())
    }

    /// Classify an axis-aligned cube against the frustum.
    ///
    /// Same bounding-sphere reduction as [`Self::box_in_frustum`].
    pub fn cube_in_frustum(&self, cube: &AACube) -> Containment {
        self.debug_check_calculated();
        self.sphere_vs_planes(cube.center(), cube.bounding_radius())
    }

    // ===== KEYHOLE QUERIES =====

    /// Classify a point against the keyhole (frustum union central sphere).
    pub fn point_in_keyhole(&self, point: Vec3) -> Containment {
        self.debug_check_calculated();
        self.keyhole_verdict(point, 0.0)
    }

    /// Classify a sphere against the keyhole.
    ///
    /// The verdict is the more permissive of the sphere's verdicts
    /// against the frustum and against the central sphere: inside either
    /// part is inside the union, outside both is outside the union,
    /// anything else straddles the boundary.
    pub fn sphere_in_keyhole(&self, center: Vec3, radius: f32) -> Containment {
        self.debug_check_calculated();
        self.keyhole_verdict(center, radius)
    }

    /// Classify an axis-aligned box against the keyhole.
    ///
    /// Conservative via the box's bounding sphere, like
    /// [`Self::box_in_frustum`].
    pub fn box_in_keyhole(&self, aabox: &AABox) -> Containment {
        self.debug_check_calculated();
        self.keyhole_verdict(aabox.center(), aabox.bounding_radius())
    }

    /// Classify an axis-aligned cube against the keyhole.
    pub fn cube_in_keyhole(&self, cube: &AACube) -> Containment {
        self.debug_check_calculated();
        self.keyhole_verdict(cube.center(), cube.bounding_radius())
    }

    /// True when any part of the point lies in the keyhole.
    ///
    /// Agrees exactly with `point_in_keyhole(point) != Outside`.
    pub fn point_touches_keyhole(&self, point: Vec3) -> bool {
        self.debug_check_calculated();
        self.keyhole_touch(point, 0.0)
    }

    /// True when any part of the sphere lies in the keyhole.
    ///
    /// Cheaper than the tri-state query when only a keep/prune decision
    /// is needed; agrees exactly with
    /// `sphere_in_keyhole(center, radius) != Outside`.
    pub fn sphere_touches_keyhole(&self, center: Vec3, radius: f32) -> bool {
        self.debug_check_calculated();
        self.keyhole_touch(center, radius)
    }

    /// True when any part of the box's bounding sphere lies in the keyhole.
    pub fn box_touches_keyhole(&self, aabox: &AABox) -> bool {
        self.debug_check_calculated();
        self.keyhole_touch(aabox.center(), aabox.bounding_radius())
    }

    /// True when any part of the cube's bounding sphere lies in the keyhole.
    pub fn cube_touches_keyhole(&self, cube: &AACube) -> bool {
        self.debug_check_calculated();
        self.keyhole_touch(cube.center(), cube.bounding_radius())
    }

    // ===== CLASSIFIER CORES =====
    //
    // The touch tests reuse the exact comparisons of the tri-state tests,
    // so the boolean and tri-state answers can never disagree, including
    // on exact boundary contact.

    fn point_vs_planes(&self, point: Vec3) -> Containment {
        for plane in &self.planes {
            if plane.signed_distance(point) < 0.0 {
                return Containment::Outside;
            }
        }
        Containment::Inside
    }

    fn sphere_vs_planes(&self, center: Vec3, radius: f32) -> Containment {
        let mut result = Containment::Inside;
        for plane in &self.planes {
            let distance = plane.signed_distance(center);
            if distance < -radius {
                // Entirely behind one plane: no need to look further
                return Containment::Outside;
            }
            if distance < radius {
                result = Containment::Intersect;
            }
        }
        result
    }

    /// Sphere against the keyhole's central sphere, with the same
    /// comparison structure as one plane test: `margin` is the signed
    /// distance from the shape center to the central sphere's surface,
    /// positive inside.
    fn sphere_vs_center(&self, center: Vec3, radius: f32) -> Containment {
        let margin = self.center_radius - (center - self.position).length();
        if margin < -radius {
            Containment::Outside
        } else if margin < radius {
            Containment::Intersect
        } else {
            Containment::Inside
        }
    }

    fn sphere_excluded_by_planes(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .any(|plane| plane.signed_distance(center) < -radius)
    }

    fn keyhole_verdict(&self, center: Vec3, radius: f32) -> Containment {
        let in_center = self.sphere_vs_center(center, radius);
        if in_center == Containment::Inside {
            return Containment::Inside;
        }
        self.sphere_vs_planes(center, radius).union(in_center)
    }

    fn keyhole_touch(&self, center: Vec3, radius: f32) -> bool {
        if self.sphere_vs_center(center, radius) != Containment::Outside {
            return true;
        }
        !self.sphere_excluded_by_planes(center, radius)
    }

    // ===== GETTERS =====

    /// Observer position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Observer orientation.
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Perspective parameters.
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Full horizontal field of view in radians.
    pub fn field_of_view(&self) -> f32 {
        self.projection.field_of_view()
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.projection.aspect_ratio()
    }

    /// Near clip distance.
    pub fn near_clip(&self) -> f32 {
        self.projection.near_clip()
    }

    /// Far clip distance.
    pub fn far_clip(&self) -> f32 {
        self.projection.far_clip()
    }

    /// Radius of the keyhole's central sphere.
    pub fn center_radius(&self) -> f32 {
        self.center_radius
    }

    /// World-space forward axis (derived, valid once calculated).
    pub fn direction(&self) -> Vec3 {
        self.debug_check_calculated();
        self.direction
    }

    /// World-space right axis (derived, valid once calculated).
    pub fn right(&self) -> Vec3 {
        self.debug_check_calculated();
        self.right
    }

    /// World-space up axis (derived, valid once calculated).
    pub fn up(&self) -> Vec3 {
        self.debug_check_calculated();
        self.up
    }

    /// Half of the horizontal field of view.
    pub fn half_fov_x(&self) -> f32 {
        self.debug_check_calculated();
        self.half_fov_x
    }

    /// Half of the derived vertical field of view.
    pub fn half_fov_y(&self) -> f32 {
        self.debug_check_calculated();
        self.half_fov_y
    }

    /// The six frustum planes, indexed by the `PLANE_*` constants.
    pub fn planes(&self) -> &[Plane; 6] {
        self.debug_check_calculated();
        &self.planes
    }

    /// True between a setter call and the next [`Self::calculate`].
    pub fn is_stale(&self) -> bool {
        self.dirty
    }

    // ===== SETTERS - store and mark stale, compute nothing =====

    /// Set the observer position. Takes effect at the next `calculate()`.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.dirty = true;
    }

    /// Set the observer orientation. Takes effect at the next `calculate()`.
    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
        self.dirty = true;
    }

    /// Replace the perspective parameters. Takes effect at the next
    /// `calculate()`.
    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
        self.dirty = true;
    }

    /// Set the keyhole's central sphere radius. Takes effect at the next
    /// `calculate()`.
    pub fn set_center_radius(&mut self, radius: f32) {
        self.center_radius = radius;
        self.dirty = true;
    }
}

#[cfg(test)]
#[path = "view_volume_tests.rs"]
mod tests;
