use crate::constants::{CURSOR_AUTO, CURSOR_MOVE, CURSOR_POINTER, MAX_FOVY_DEG, MIN_FOVY_DEG};
use drag_core::{Camera, CursorStyle, Viewport};
use glam::{Vec2, Vec3};

// ---------------- Pointer helpers ----------------
#[inline]
pub fn client_point(client_x: f64, client_y: f64) -> Vec2 {
    Vec2::new(client_x as f32, client_y as f32)
}

/// Viewport from a `getBoundingClientRect()` result, in CSS pixels.
#[inline]
pub fn viewport_from_rect(left: f64, top: f64, width: f64, height: f64) -> Viewport {
    Viewport::new(left as f32, top as f32, width as f32, height as f32)
}

#[inline]
pub fn cursor_css(style: CursorStyle) -> &'static str {
    match style {
        CursorStyle::Auto => CURSOR_AUTO,
        CursorStyle::Pointer => CURSOR_POINTER,
        CursorStyle::Move => CURSOR_MOVE,
    }
}

// ---------------- Camera from JS ----------------
/// Build a camera from loose JS numbers. Non-finite input, or an eye sitting
/// on its target, keeps the previous value; the field of view is clamped.
pub fn camera_from_js(
    previous: &Camera,
    eye: [f32; 3],
    target: [f32; 3],
    fovy_deg: f32,
    znear: f32,
    zfar: f32,
) -> Camera {
    let pick = |v: [f32; 3], fallback: Vec3| {
        let v = Vec3::from_array(v);
        if v.is_finite() {
            v
        } else {
            fallback
        }
    };
    let mut eye = pick(eye, previous.eye);
    let mut target = pick(target, previous.target);
    if eye.distance_squared(target) <= f32::EPSILON {
        eye = previous.eye;
        target = previous.target;
    }
    let fovy_radians = if fovy_deg.is_finite() {
        fovy_deg.clamp(MIN_FOVY_DEG, MAX_FOVY_DEG).to_radians()
    } else {
        previous.fovy_radians
    };
    let (znear, zfar) = if znear.is_finite() && zfar.is_finite() && znear > 0.0 && zfar > znear {
        (znear, zfar)
    } else {
        (previous.znear, previous.zfar)
    };
    Camera {
        eye,
        target,
        up: previous.up,
        aspect: previous.aspect,
        fovy_radians,
        znear,
        zfar,
    }
}
