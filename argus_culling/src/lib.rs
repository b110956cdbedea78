/*!
# Argus Culling

View-volume visibility classification for octree-driven culling.

This crate provides the classifier used to decide which regions of a
spatially partitioned world matter to an observer: a six-plane pyramidal
frustum extended into a "keyhole" - the union of the frustum with a sphere
centered on the observer - so nearby content is never culled just because
it sits outside the forward pyramid.

## Architecture

- **ViewVolume**: observer pose + projection + keyhole radius, with an
  explicit `calculate()` step that rebuilds the plane set
- **Containment**: tri-state verdict (`Outside` / `Intersect` / `Inside`)
- **AABox / AACube**: axis-aligned shapes reduced to bounding spheres
- **Plane**: inward-facing half-space in normal + distance form

The spatial index that consumes the verdicts lives outside this crate; the
classifier only answers containment queries for shapes handed to it.
*/

// Internal modules
mod error;
pub mod log;
pub mod volume;

// Main argus namespace module
pub mod argus {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and registry, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        pub use crate::log::{set_logger, reset_logger};
        // Note: argus_* macros are NOT re-exported here - they live at the crate root
    }

    // Volume sub-module with the classifier types
    pub mod volume {
        pub use crate::volume::*;
    }
}

// Re-export math library at crate root
pub use glam;
