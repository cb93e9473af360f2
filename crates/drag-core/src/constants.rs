use glam::Vec3;

// Shared interaction tuning constants used by both web and native frontends.

// Geometry
pub const PARALLEL_EPSILON: f32 = 1e-6; // |n·d| below this treats a ray as parallel to a plane
pub const UP_PARALLEL_EPSILON: f32 = 1e-6; // |up × dir|² below this means up runs along the view

// Picking
pub const DEFAULT_PICK_RADIUS: f32 = 0.5; // bounding-sphere radius when an object has none

// Default camera: eye on +Z looking at the origin
pub const DEFAULT_CAMERA_EYE: [f32; 3] = [0.0, 0.0, 10.0];
pub const DEFAULT_FOVY_DEG: f32 = 45.0;
pub const DEFAULT_ZNEAR: f32 = 0.1;
pub const DEFAULT_ZFAR: f32 = 100.0;

#[inline]
pub fn default_camera_eye() -> Vec3 {
    Vec3::from_array(DEFAULT_CAMERA_EYE)
}
