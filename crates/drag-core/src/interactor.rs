//! Pointer-to-3D drag state machine.
//!
//! One [`DragInteractor`] owns the selection, hover and drag-plane state for a
//! single surface. Hosts feed it pointer-down/move/up in device coordinates;
//! it casts rays through the injected [`RayCaster`], moves the selected object
//! within a plane fixed at drag start, and reports lifecycle events to the
//! injected [`DragEventSink`].

use crate::camera::Camera;
use crate::error::InteractError;
use crate::event::{DragEvent, DragEventSink};
use crate::geom::{Plane, Ray};
use crate::object::{find_by_id, find_by_id_mut, Draggable};
use crate::pick::{nearest, RayCaster};
use crate::viewport::Viewport;
use glam::{Vec2, Vec3};
use std::fmt::Debug;

/// Cursor affordance the host should show over its surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorStyle {
    #[default]
    Auto,
    Pointer,
    Move,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractorConfig {
    pub enabled: bool,
}

impl Default for InteractorConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Drag plane together with the object it was anchored at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchoredPlane<Id> {
    pub object: Id,
    pub plane: Plane,
}

pub struct DragInteractor<Id, C, S> {
    caster: C,
    sink: S,
    enabled: bool,
    viewport: Option<Viewport>,
    selected: Option<Id>,
    hovered: Option<Id>,
    plane: Option<AnchoredPlane<Id>>,
    offset: Vec3,
    cursor: CursorStyle,
}

impl<Id, C, S> DragInteractor<Id, C, S>
where
    Id: Copy + Eq + Debug,
    S: DragEventSink<Id>,
{
    pub fn new(caster: C, sink: S) -> Self {
        Self::with_config(caster, sink, InteractorConfig::default())
    }

    pub fn with_config(caster: C, sink: S, config: InteractorConfig) -> Self {
        Self {
            caster,
            sink,
            enabled: config.enabled,
            viewport: None,
            selected: None,
            hovered: None,
            plane: None,
            offset: Vec3::ZERO,
            cursor: CursorStyle::Auto,
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }
    /// Takes effect on the next pointer-move; an active selection is kept.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn selected(&self) -> Option<Id> {
        self.selected
    }
    pub fn hovered(&self) -> Option<Id> {
        self.hovered
    }
    pub fn is_dragging(&self) -> bool {
        self.selected.is_some()
    }
    pub fn drag_plane(&self) -> Option<AnchoredPlane<Id>> {
        self.plane
    }
    pub fn drag_offset(&self) -> Vec3 {
        self.offset
    }
    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    /// Forget a plane staged by hover so the next pointer-down derives a
    /// fresh one. The plane of an active drag is kept.
    pub fn clear_staged_plane(&mut self) {
        if self.selected.is_none() {
            self.plane = None;
        }
    }

    pub fn caster(&self) -> &C {
        &self.caster
    }
    pub fn sink(&self) -> &S {
        &self.sink
    }
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn cast<O>(&self, pointer: Vec2, camera: &Camera) -> Result<Ray, InteractError>
    where
        O: Draggable<Id = Id>,
        C: RayCaster<O>,
    {
        let viewport = self.viewport.ok_or(InteractError::ViewportUnbound)?;
        let sample = viewport.normalize(pointer)?;
        let ray = self.caster.ray(sample, camera);
        if !ray.direction.is_finite() || ray.direction == Vec3::ZERO {
            return Err(InteractError::DegenerateCamera);
        }
        Ok(ray)
    }

    /// Select the nearest object under the pointer and start dragging it.
    pub fn pointer_down<O>(
        &mut self,
        pointer: Vec2,
        camera: &Camera,
        candidates: &[O],
    ) -> Result<(), InteractError>
    where
        O: Draggable<Id = Id>,
        C: RayCaster<O>,
    {
        let ray = self.cast::<O>(pointer, camera)?;
        let Some(hit) = nearest(&self.caster.intersect(&ray, candidates)) else {
            return Ok(());
        };
        let Some(object) = find_by_id(candidates, hit.object) else {
            log::warn!("[drag] caster reported unknown object {:?}", hit.object);
            return Ok(());
        };
        let position = object.position();

        let staged = self.plane.filter(|p| p.object == hit.object);
        let fresh = AnchoredPlane {
            object: hit.object,
            plane: Plane::from_normal_and_coplanar_point(camera.view_direction(), position),
        };
        let anchored = staged.unwrap_or(fresh);

        let start = match ray.intersect_plane(&anchored.plane) {
            Some(point) => Some((anchored, point)),
            None if staged.is_some() => ray.intersect_plane(&fresh.plane).map(|p| (fresh, p)),
            None => None,
        };
        let Some((anchored, intersection)) = start else {
            log::debug!("[drag] ray parallel to drag plane, not starting on {:?}", hit.object);
            return Ok(());
        };

        self.plane = Some(anchored);
        self.offset = intersection - position;
        self.selected = Some(hit.object);
        self.cursor = CursorStyle::Move;
        log::info!("[drag] start on {:?}", hit.object);
        self.sink.emit(DragEvent::DragStart(hit.object));
        Ok(())
    }

    /// Translate the selected object, or update hover when nothing is selected.
    pub fn pointer_move<O>(
        &mut self,
        pointer: Vec2,
        camera: &Camera,
        candidates: &mut [O],
    ) -> Result<(), InteractError>
    where
        O: Draggable<Id = Id>,
        C: RayCaster<O>,
    {
        let ray = self.cast::<O>(pointer, camera)?;

        if let Some(selected) = self.selected {
            if self.enabled {
                self.drag_to(&ray, selected, candidates);
            }
            return Ok(());
        }

        match nearest(&self.caster.intersect(&ray, candidates)) {
            Some(hit) => {
                if let Some(object) = find_by_id(candidates, hit.object) {
                    self.plane = Some(AnchoredPlane {
                        object: hit.object,
                        plane: Plane::from_normal_and_coplanar_point(
                            camera.view_direction(),
                            object.position(),
                        ),
                    });
                }
                if self.hovered != Some(hit.object) {
                    self.hovered = Some(hit.object);
                    self.cursor = CursorStyle::Pointer;
                    log::debug!("[hover] on {:?}", hit.object);
                    self.sink.emit(DragEvent::HoverOn(hit.object));
                }
            }
            None => {
                if let Some(previous) = self.hovered.take() {
                    self.cursor = CursorStyle::Auto;
                    log::debug!("[hover] off {:?}", previous);
                    self.sink.emit(DragEvent::HoverOff(previous));
                }
            }
        }
        Ok(())
    }

    fn drag_to<O>(&mut self, ray: &Ray, selected: Id, candidates: &mut [O])
    where
        O: Draggable<Id = Id>,
    {
        let Some(anchored) = self.plane else {
            return;
        };
        let Some(intersection) = ray.intersect_plane(&anchored.plane) else {
            return;
        };
        let Some(object) = find_by_id_mut(candidates, selected) else {
            log::warn!("[drag] selected object {:?} left the candidate set", selected);
            return;
        };
        object.set_position(intersection - self.offset);
        self.sink.emit(DragEvent::Drag(selected));
    }

    /// End the current drag, if any. Always resets the cursor.
    pub fn pointer_up(&mut self) {
        if let Some(selected) = self.selected.take() {
            log::info!("[drag] end on {:?}", selected);
            self.sink.emit(DragEvent::DragEnd(selected));
        }
        self.cursor = CursorStyle::Auto;
    }

    pub fn pointer_cancel(&mut self) {
        self.pointer_up();
    }

    /// Touch has no hover before it, so the plane is always derived here.
    pub fn touch_start<O>(
        &mut self,
        pointer: Vec2,
        camera: &Camera,
        candidates: &[O],
    ) -> Result<(), InteractError>
    where
        O: Draggable<Id = Id>,
        C: RayCaster<O>,
    {
        self.clear_staged_plane();
        self.pointer_down(pointer, camera, candidates)
    }

    /// Drives an active drag only; touch never evaluates hover.
    pub fn touch_move<O>(
        &mut self,
        pointer: Vec2,
        camera: &Camera,
        candidates: &mut [O],
    ) -> Result<(), InteractError>
    where
        O: Draggable<Id = Id>,
        C: RayCaster<O>,
    {
        if self.selected.is_none() {
            return Ok(());
        }
        self.pointer_move(pointer, camera, candidates)
    }
}
