//! View volume module
//!
//! Provides the frustum/keyhole classifier and its supporting types:
//! containment verdicts, planes, projection parameters, and the
//! axis-aligned shapes the classifiers accept.

mod containment;
mod plane;
mod projection;
mod shapes;
mod view_volume;

pub use containment::Containment;
pub use plane::Plane;
pub use projection::Projection;
pub use shapes::{AABox, AACube};
pub use view_volume::{
    ViewVolume,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
