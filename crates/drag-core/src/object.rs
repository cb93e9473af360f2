use glam::Vec3;
use std::fmt::Debug;

/// Anything the interactor can pick and translate.
pub trait Draggable {
    type Id: Copy + Eq + Debug;

    fn id(&self) -> Self::Id;
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);

    /// Bounding-sphere radius used by [`crate::SphereCaster`]; `None` falls
    /// back to the caster's default.
    fn pick_radius(&self) -> Option<f32> {
        None
    }
}

/// Minimal scene entry used by the bundled frontends.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub id: u32,
    pub position: Vec3,
    pub radius: f32,
}

impl SceneObject {
    pub fn new(id: u32, position: Vec3, radius: f32) -> Self {
        Self {
            id,
            position,
            radius,
        }
    }
}

impl Draggable for SceneObject {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
    fn position(&self) -> Vec3 {
        self.position
    }
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
    fn pick_radius(&self) -> Option<f32> {
        Some(self.radius)
    }
}

pub fn find_by_id<O: Draggable>(candidates: &[O], id: O::Id) -> Option<&O> {
    candidates.iter().find(|o| o.id() == id)
}

pub fn find_by_id_mut<O: Draggable>(candidates: &mut [O], id: O::Id) -> Option<&mut O> {
    candidates.iter_mut().find(|o| o.id() == id)
}
