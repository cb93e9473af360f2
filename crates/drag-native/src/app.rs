use crate::constants::{DEMO_POSITIONS, DEMO_RADIUS, WINDOW_TITLE};
use drag_core::{
    find_by_id, Camera, CursorStyle, DragEvent, DragInteractor, InteractError, PrimaryTouch,
    SceneObject, SphereCaster, Viewport,
};
use glam::{Vec2, Vec3};
use std::sync::mpsc;
use winit::event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent};
use winit::window::CursorIcon;

type Interactor = DragInteractor<u32, SphereCaster, mpsc::Sender<DragEvent<u32>>>;

/// Window-independent input state for the native frontend.
pub struct NativeApp {
    interactor: Interactor,
    events: mpsc::Receiver<DragEvent<u32>>,
    objects: Vec<SceneObject>,
    camera: Camera,
    cursor: Vec2,
    touch: PrimaryTouch,
}

impl NativeApp {
    pub fn new(width: u32, height: u32) -> Self {
        let (tx, rx) = mpsc::channel();
        let objects = DEMO_POSITIONS
            .iter()
            .zip(1u32..)
            .map(|(p, id)| SceneObject::new(id, Vec3::from_array(*p), DEMO_RADIUS))
            .collect();
        let mut app = Self {
            interactor: DragInteractor::new(SphereCaster::default(), tx),
            events: rx,
            objects,
            camera: Camera::default(),
            cursor: Vec2::ZERO,
            touch: PrimaryTouch::default(),
        };
        app.resize(width, height);
        app
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let viewport = Viewport::from_size(width as f32, height as f32);
        self.interactor.set_viewport(viewport);
        // Minimised windows report a zero size; keep the last aspect.
        if viewport.validate().is_ok() {
            self.camera.aspect = viewport.aspect();
        }
    }

    pub fn handle(&mut self, event: &WindowEvent) -> Result<(), InteractError> {
        match event {
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                self.interactor
                    .pointer_move(self.cursor, &self.camera, &mut self.objects)?;
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    self.interactor
                        .pointer_down(self.cursor, &self.camera, &self.objects)?;
                }
                ElementState::Released => self.interactor.pointer_up(),
            },
            WindowEvent::CursorLeft { .. } => self.interactor.pointer_cancel(),
            WindowEvent::Touch(touch) => self.on_touch(touch)?,
            _ => {}
        }
        Ok(())
    }

    // Only the first finger down drives the interactor until it lifts.
    fn on_touch(&mut self, touch: &Touch) -> Result<(), InteractError> {
        let pos = Vec2::new(touch.location.x as f32, touch.location.y as f32);
        match touch.phase {
            TouchPhase::Started if self.touch.begin(touch.id) => {
                self.interactor
                    .touch_start(pos, &self.camera, &self.objects)?;
            }
            TouchPhase::Moved if self.touch.is_primary(touch.id) => {
                self.interactor
                    .touch_move(pos, &self.camera, &mut self.objects)?;
            }
            TouchPhase::Ended if self.touch.end(touch.id) => self.interactor.pointer_up(),
            TouchPhase::Cancelled if self.touch.end(touch.id) => {
                self.interactor.pointer_cancel();
            }
            _ => {}
        }
        Ok(())
    }

    pub fn drain_events(&self) -> Vec<DragEvent<u32>> {
        self.events.try_iter().collect()
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        match self.interactor.cursor() {
            CursorStyle::Auto => CursorIcon::Default,
            CursorStyle::Pointer => CursorIcon::Pointer,
            CursorStyle::Move => CursorIcon::Move,
        }
    }

    pub fn title(&self) -> String {
        let describe = |id: u32| {
            find_by_id(&self.objects, id).map_or_else(
                || format!("#{}", id),
                |o| {
                    format!(
                        "#{} at ({:.2}, {:.2}, {:.2})",
                        id, o.position.x, o.position.y, o.position.z
                    )
                },
            )
        };
        match (self.interactor.selected(), self.interactor.hovered()) {
            (Some(id), _) => format!("{} | dragging {}", WINDOW_TITLE, describe(id)),
            (None, Some(id)) => format!("{} | over {}", WINDOW_TITLE, describe(id)),
            (None, None) => WINDOW_TITLE.to_string(),
        }
    }
}
