//! Ray intersection providers.
//!
//! The interactor never inspects object geometry itself: it asks a
//! [`RayCaster`] for a ray and for the hits along it.

use crate::camera::Camera;
use crate::constants::DEFAULT_PICK_RADIUS;
use crate::geom::Ray;
use crate::object::Draggable;
use crate::viewport::PointerSample;
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit<Id> {
    pub object: Id,
    pub point: Vec3,
    pub distance: f32,
}

/// Hits ordered nearest first.
pub type Hits<Id> = SmallVec<[Hit<Id>; 4]>;

pub trait RayCaster<O: Draggable> {
    fn ray(&self, sample: PointerSample, camera: &Camera) -> Ray {
        camera.ray_through(sample)
    }

    /// Every candidate the ray touches, sorted by ascending distance.
    fn intersect(&self, ray: &Ray, candidates: &[O]) -> Hits<O::Id>;
}

/// Picks objects by bounding sphere around their position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereCaster {
    pub default_radius: f32,
}

impl Default for SphereCaster {
    fn default() -> Self {
        Self {
            default_radius: DEFAULT_PICK_RADIUS,
        }
    }
}

impl SphereCaster {
    pub fn new(default_radius: f32) -> Self {
        Self { default_radius }
    }
}

impl<O: Draggable> RayCaster<O> for SphereCaster {
    fn intersect(&self, ray: &Ray, candidates: &[O]) -> Hits<O::Id> {
        let mut hits: Hits<O::Id> = candidates
            .iter()
            .filter_map(|o| {
                let radius = o.pick_radius().unwrap_or(self.default_radius);
                ray.intersect_sphere(o.position(), radius).map(|t| Hit {
                    object: o.id(),
                    point: ray.at(t),
                    distance: t,
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

#[inline]
pub fn nearest<Id: Copy>(hits: &[Hit<Id>]) -> Option<Hit<Id>> {
    hits.first().copied()
}
