//! Demo: classify a field of cubes against a moving observer.
//!
//! Builds a view volume, sweeps a grid of octree-style cubes through it,
//! and shows the keyhole keeping content alive behind the observer.
//!
//! Run with: cargo run -p argus_demo

use argus_culling::argus_info;
use argus_culling::glam::{Quat, Vec3};
use argus_culling::volume::{AACube, Containment, Projection, ViewVolume};

/// Count keyhole verdicts over a cube field.
fn classify_field(volume: &ViewVolume, cubes: &[AACube]) -> (usize, usize, usize) {
    let mut inside = 0;
    let mut intersect = 0;
    let mut outside = 0;

    for cube in cubes {
        match volume.cube_in_keyhole(cube) {
            Containment::Inside => inside += 1,
            Containment::Intersect => intersect += 1,
            Containment::Outside => outside += 1,
        }
    }

    (inside, intersect, outside)
}

fn main() -> argus_culling::argus::Result<()> {
    let projection = Projection::new(std::f32::consts::FRAC_PI_2, 16.0 / 9.0, 0.1, 120.0)?;
    let mut volume = ViewVolume::new(Vec3::ZERO, Quat::IDENTITY, projection, 8.0);

    // 21x21 grid of cubes on the ground plane, 12 units apart
    let mut cubes = Vec::new();
    for ix in -10..=10 {
        for iz in -10..=10 {
            let center = Vec3::new(ix as f32 * 12.0, 0.0, iz as f32 * 12.0);
            cubes.push(AACube::new(center - Vec3::splat(1.5), 3.0));
        }
    }

    let (inside, intersect, outside) = classify_field(&volume, &cubes);
    argus_info!(
        "argus::Demo",
        "facing -z: {} inside, {} intersect, {} outside of {} cubes",
        inside,
        intersect,
        outside,
        cubes.len()
    );

    // A sphere behind the observer: culled by the frustum, kept by the keyhole
    let behind = Vec3::new(0.0, 0.0, 5.0);
    argus_info!(
        "argus::Demo",
        "sphere behind observer: frustum={:?} keyhole={:?} touches={}",
        volume.sphere_in_frustum(behind, 1.0),
        volume.sphere_in_keyhole(behind, 1.0),
        volume.sphere_touches_keyhole(behind, 1.0)
    );

    // Move and turn a quarter to the left, then re-classify the same field
    volume.set_position(Vec3::new(30.0, 0.0, 0.0));
    volume.set_orientation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
    volume.calculate();

    let (inside, intersect, outside) = classify_field(&volume, &cubes);
    argus_info!(
        "argus::Demo",
        "after moving: {} inside, {} intersect, {} outside of {} cubes",
        inside,
        intersect,
        outside,
        cubes.len()
    );

    Ok(())
}
