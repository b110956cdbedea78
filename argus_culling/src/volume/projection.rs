/// Projection - validated perspective parameters for a view volume.
///
/// Validation happens here once, at configuration time. The query path
/// never re-checks anything: a `Projection` that exists is geometrically
/// sound by construction.

use crate::error::{Error, Result};

/// Perspective projection parameters.
///
/// `field_of_view` is the full horizontal angle in radians;
/// `aspect_ratio` is width over height. The vertical angle is derived by
/// the plane set builder as `2 * asin(sin(field_of_view / 2) / aspect_ratio)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    field_of_view: f32,
    aspect_ratio: f32,
    near_clip: f32,
    far_clip: f32,
}

impl Projection {
    /// Create a projection, rejecting parameters that would describe a
    /// degenerate volume.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProjection`] when:
    /// - `field_of_view` is not in `(0, pi)`
    /// - `aspect_ratio` is not positive
    /// - the clip range does not satisfy `0 < near_clip < far_clip`
    /// - `aspect_ratio < sin(field_of_view / 2)`, which leaves no real
    ///   vertical angle
    ///
    /// NaN fails every range check and is rejected with the rest.
    pub fn new(
        field_of_view: f32,
        aspect_ratio: f32,
        near_clip: f32,
        far_clip: f32,
    ) -> Result<Self> {
        if !(field_of_view > 0.0 && field_of_view < std::f32::consts::PI) {
            return Err(Self::log_and_reject(format!(
                "field of view must be in (0, pi), got {}",
                field_of_view
            )));
        }

        if !(aspect_ratio > 0.0) {
            return Err(Self::log_and_reject(format!(
                "aspect ratio must be positive, got {}",
                aspect_ratio
            )));
        }

        if !(near_clip > 0.0 && near_clip < far_clip) {
            return Err(Self::log_and_reject(format!(
                "clip range must satisfy 0 < near < far, got near={} far={}",
                near_clip, far_clip
            )));
        }

        // The vertical half angle is asin(sin(fov/2) / aspect); keep the
        // argument inside the asin domain.
        if aspect_ratio < (0.5 * field_of_view).sin() {
            return Err(Self::log_and_reject(format!(
                "aspect ratio {} is too small for field of view {}, vertical angle is undefined",
                aspect_ratio, field_of_view
            )));
        }

        Ok(Self {
            field_of_view,
            aspect_ratio,
            near_clip,
            far_clip,
        })
    }

    /// Every rejection goes through here so it is logged exactly once.
    fn log_and_reject(message: String) -> Error {
        crate::argus_error!("argus::Projection", "{}", message);
        Error::InvalidProjection(message)
    }

    // ===== GETTERS =====

    /// Full horizontal field of view in radians.
    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Near clip distance along the view direction.
    pub fn near_clip(&self) -> f32 {
        self.near_clip
    }

    /// Far clip distance along the view direction.
    pub fn far_clip(&self) -> f32 {
        self.far_clip
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
