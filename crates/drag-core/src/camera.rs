//! Camera description shared by every frontend.
//!
//! The camera is read-only to the interaction core: it is used to turn a
//! pointer sample into a world-space ray and to orient the drag plane.

use crate::constants::{
    default_camera_eye, DEFAULT_FOVY_DEG, DEFAULT_ZFAR, DEFAULT_ZNEAR, UP_PARALLEL_EPSILON,
};
use crate::geom::Ray;
use crate::viewport::PointerSample;
use glam::{Mat4, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: default_camera_eye(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: DEFAULT_FOVY_DEG.to_radians(),
            znear: DEFAULT_ZNEAR,
            zfar: DEFAULT_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.effective_up())
    }

    /// `up` when it is usable for orientation, otherwise the first world axis
    /// not parallel to the view direction. A camera looking straight down
    /// with `up = +Y` orients with `+Z` instead.
    pub fn effective_up(&self) -> Vec3 {
        let dir = self.view_direction();
        let usable = |axis: Vec3| axis.cross(dir).length_squared() > UP_PARALLEL_EPSILON;
        let up = self.up.normalize_or_zero();
        if usable(up) {
            return up;
        }
        [Vec3::Z, Vec3::X, Vec3::Y]
            .into_iter()
            .find(|axis| usable(*axis))
            .unwrap_or(Vec3::Y)
    }

    /// Unit vector the camera is looking along, in world space.
    pub fn view_direction(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    /// World-space ray from the eye through a normalized pointer sample.
    /// The direction is zero when the camera itself is degenerate (eye on
    /// target, non-finite projection).
    pub fn ray_through(&self, sample: PointerSample) -> Ray {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let p_far = inv * Vec4::new(sample.x, sample.y, 1.0, 1.0);
        let far: Vec3 = p_far.truncate() / p_far.w;
        Ray::new(self.eye, far - self.eye)
    }

    /// Project a world-space point into normalized device coordinates.
    pub fn project(&self, point: Vec3) -> PointerSample {
        let ndc = (self.projection_matrix() * self.view_matrix()).project_point3(point);
        PointerSample::new(ndc.x, ndc.y)
    }
}
