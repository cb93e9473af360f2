use crate::error::InteractError;
use glam::Vec2;

/// Screen rectangle pointer coordinates are measured against, in the same
/// units as the device coordinates fed to the interactor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Viewport anchored at the origin, e.g. a native window's client area.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Width over height. Only meaningful for a viewport that passes
    /// [`Viewport::validate`].
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    pub fn validate(&self) -> Result<(), InteractError> {
        let finite = [self.left, self.top, self.width, self.height]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(InteractError::DegenerateViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Rescale device coordinates into normalized device coordinates, +Y up.
    pub fn normalize(&self, pointer: Vec2) -> Result<PointerSample, InteractError> {
        self.validate()?;
        let x = (pointer.x - self.left) / self.width * 2.0 - 1.0;
        let y = -((pointer.y - self.top) / self.height) * 2.0 + 1.0;
        Ok(PointerSample::new(x, y))
    }

    /// Inverse of [`Viewport::normalize`].
    pub fn to_device(&self, sample: PointerSample) -> Vec2 {
        Vec2::new(
            self.left + (sample.x + 1.0) * 0.5 * self.width,
            self.top + (1.0 - sample.y) * 0.5 * self.height,
        )
    }
}

/// Pointer position in normalized device coordinates. Points inside the
/// viewport land in \[-1, 1\] on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_inside(&self) -> bool {
        (-1.0..=1.0).contains(&self.x) && (-1.0..=1.0).contains(&self.y)
    }
}
