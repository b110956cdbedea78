use glam::Vec3;
use super::*;

const EPSILON: f32 = 1.0e-6;

// ============================================================================
// Plane::new
// ============================================================================

#[test]
fn test_new_stores_fields() {
    let plane = Plane::new(Vec3::Y, -2.0);
    assert_eq!(plane.normal, Vec3::Y);
    assert_eq!(plane.distance, -2.0);
}

// ============================================================================
// Plane::from_normal_and_point
// ============================================================================

#[test]
fn test_plane_through_origin() {
    let plane = Plane::from_normal_and_point(Vec3::Z, Vec3::ZERO);
    assert!(plane.distance.abs() < EPSILON);
    assert!((plane.signed_distance(Vec3::new(0.0, 0.0, 5.0)) - 5.0).abs() < EPSILON);
    assert!((plane.signed_distance(Vec3::new(0.0, 0.0, -3.0)) + 3.0).abs() < EPSILON);
}

#[test]
fn test_plane_through_offset_point() {
    // Horizontal plane at height 2, interior above
    let plane = Plane::from_normal_and_point(Vec3::Y, Vec3::new(0.0, 2.0, 0.0));
    assert!((plane.distance + 2.0).abs() < EPSILON);

    // Any point at height 2 is on the plane
    assert!(plane.signed_distance(Vec3::new(7.0, 2.0, -4.0)).abs() < EPSILON);
    assert!((plane.signed_distance(Vec3::new(0.0, 5.0, 0.0)) - 3.0).abs() < EPSILON);
    assert!((plane.signed_distance(Vec3::ZERO) + 2.0).abs() < EPSILON);
}

#[test]
fn test_tilted_plane() {
    let normal = Vec3::new(1.0, 1.0, 0.0).normalize();
    let plane = Plane::from_normal_and_point(normal, Vec3::new(1.0, 1.0, 0.0));

    // The origin sits sqrt(2) behind the plane
    let expected = -(2.0_f32).sqrt();
    assert!((plane.signed_distance(Vec3::ZERO) - expected).abs() < 1.0e-5);
}

// ============================================================================
// Plane::signed_distance
// ============================================================================

#[test]
fn test_signed_distance_sign_convention() {
    let anchor = Vec3::new(3.0, -1.0, 8.0);
    let normal = Vec3::new(0.2, 0.8, -0.3).normalize();
    let plane = Plane::from_normal_and_point(normal, anchor);

    // Positive along the normal, negative against it, zero on the plane
    assert!(plane.signed_distance(anchor).abs() < 1.0e-5);
    assert!(plane.signed_distance(anchor + 4.0 * normal) > 0.0);
    assert!(plane.signed_distance(anchor - 4.0 * normal) < 0.0);
    assert!((plane.signed_distance(anchor + 4.0 * normal) - 4.0).abs() < 1.0e-5);
}
