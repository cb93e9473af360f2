use crate::dom;
use crate::events::PointerBinding;
use crate::input;
use drag_core::{
    find_by_id_mut, Camera, DragEvent, DragEventKind, DragInteractor, InteractError, SceneObject,
    SphereCaster,
};
use fnv::FnvHashMap;
use glam::{Vec2, Vec3};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

pub(crate) type Interactor = DragInteractor<u32, SphereCaster, Vec<DragEvent<u32>>>;

pub(crate) struct ControlsState {
    pub interactor: Interactor,
    pub objects: Vec<SceneObject>,
    pub camera: Camera,
}

impl ControlsState {
    fn sync_viewport(&mut self, element: &web::Element) {
        let viewport = dom::viewport_of(element);
        self.interactor.set_viewport(viewport);
        if viewport.validate().is_ok() {
            self.camera.aspect = viewport.aspect();
        }
    }

    pub fn pointer_down(&mut self, pointer: Vec2) -> Result<(), InteractError> {
        self.interactor.pointer_down(pointer, &self.camera, &self.objects)
    }

    pub fn pointer_move(&mut self, pointer: Vec2) -> Result<(), InteractError> {
        self.interactor
            .pointer_move(pointer, &self.camera, &mut self.objects)
    }

    pub fn touch_start(&mut self, pointer: Vec2) -> Result<(), InteractError> {
        self.interactor.touch_start(pointer, &self.camera, &self.objects)
    }

    pub fn touch_move(&mut self, pointer: Vec2) -> Result<(), InteractError> {
        self.interactor
            .touch_move(pointer, &self.camera, &mut self.objects)
    }
}

#[derive(Default)]
pub(crate) struct JsListeners {
    by_kind: FnvHashMap<DragEventKind, Vec<js_sys::Function>>,
}

impl JsListeners {
    pub fn add(&mut self, kind: DragEventKind, listener: js_sys::Function) {
        let list = self.by_kind.entry(kind).or_default();
        if !list.contains(&listener) {
            list.push(listener);
        }
    }

    pub fn remove(&mut self, kind: DragEventKind, listener: &js_sys::Function) {
        if let Some(list) = self.by_kind.get_mut(&kind) {
            list.retain(|f| f != listener);
        }
    }

    pub fn targets(&self, kind: DragEventKind) -> Vec<js_sys::Function> {
        self.by_kind.get(&kind).cloned().unwrap_or_default()
    }
}

pub(crate) struct Shared {
    pub canvas: web::HtmlCanvasElement,
    pub state: RefCell<ControlsState>,
    pub listeners: RefCell<JsListeners>,
}

impl Shared {
    /// Run one pointer handler, then apply the cursor and deliver whatever it
    /// emitted. Listeners run after the state borrow is released so they can
    /// call back into `DragControls`.
    pub fn dispatch(
        &self,
        handler: impl FnOnce(&mut ControlsState) -> Result<(), InteractError>,
    ) {
        let (events, cursor) = {
            let mut st = self.state.borrow_mut();
            st.sync_viewport(&self.canvas);
            if let Err(e) = handler(&mut *st) {
                log::error!("[drag] {}", e);
            }
            (
                std::mem::take(st.interactor.sink_mut()),
                st.interactor.cursor(),
            )
        };
        dom::set_cursor(&self.canvas, input::cursor_css(cursor));
        for event in events {
            self.deliver(event);
        }
    }

    fn deliver(&self, event: DragEvent<u32>) {
        let kind = event.kind();
        let targets = self.listeners.borrow().targets(kind);
        if targets.is_empty() {
            return;
        }
        let payload = js_sys::Object::new();
        _ = js_sys::Reflect::set(&payload, &"type".into(), &kind.as_str().into());
        _ = js_sys::Reflect::set(&payload, &"object".into(), &JsValue::from(event.object()));
        for listener in targets {
            if let Err(e) = listener.call1(&JsValue::NULL, &payload) {
                log::error!("[events] {} listener threw: {:?}", kind, e);
            }
        }
    }
}

/// Mouse and touch drag controls bound to one canvas.
///
/// JS owns rendering: it registers objects by id, mirrors its camera, and
/// reads positions back (or listens for `drag`) to move its meshes.
#[wasm_bindgen]
pub struct DragControls {
    shared: Rc<Shared>,
    binding: PointerBinding,
}

#[wasm_bindgen]
impl DragControls {
    /// Bind to the canvas with `canvas_id` and start listening immediately.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<DragControls, JsValue> {
        let canvas = dom::canvas_by_id(canvas_id).map_err(to_js)?;
        let shared = Rc::new(Shared {
            canvas,
            state: RefCell::new(ControlsState {
                interactor: DragInteractor::new(SphereCaster::default(), Vec::new()),
                objects: Vec::new(),
                camera: Camera::default(),
            }),
            listeners: RefCell::new(JsListeners::default()),
        });
        let mut binding = PointerBinding::new(shared.clone());
        binding.activate().map_err(to_js)?;
        log::info!("[controls] bound to #{}", canvas_id);
        Ok(DragControls { shared, binding })
    }

    pub fn activate(&mut self) -> Result<(), JsValue> {
        self.binding.activate().map_err(to_js)
    }

    pub fn deactivate(&mut self) {
        self.binding.deactivate();
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.binding.is_active()
    }

    #[wasm_bindgen(getter)]
    pub fn enabled(&self) -> bool {
        self.shared.state.borrow().interactor.enabled()
    }

    #[wasm_bindgen(setter)]
    pub fn set_enabled(&self, enabled: bool) {
        self.shared.state.borrow_mut().interactor.set_enabled(enabled);
    }

    /// Register or replace the object with `id`.
    #[wasm_bindgen(js_name = addObject)]
    pub fn add_object(&self, id: u32, x: f32, y: f32, z: f32, radius: f32) {
        let object = SceneObject::new(id, Vec3::new(x, y, z), radius);
        let mut st = self.shared.state.borrow_mut();
        if let Some(existing) = find_by_id_mut(&mut st.objects, id) {
            *existing = object;
            return;
        }
        st.objects.push(object);
    }

    #[wasm_bindgen(js_name = removeObject)]
    pub fn remove_object(&self, id: u32) -> bool {
        let mut st = self.shared.state.borrow_mut();
        let before = st.objects.len();
        st.objects.retain(|o| o.id != id);
        st.objects.len() != before
    }

    #[wasm_bindgen(js_name = setObjectPosition)]
    pub fn set_object_position(&self, id: u32, x: f32, y: f32, z: f32) -> bool {
        let mut st = self.shared.state.borrow_mut();
        match find_by_id_mut(&mut st.objects, id) {
            Some(object) => {
                object.position = Vec3::new(x, y, z);
                true
            }
            None => false,
        }
    }

    #[wasm_bindgen(js_name = objectPosition)]
    pub fn object_position(&self, id: u32) -> Option<Vec<f32>> {
        let st = self.shared.state.borrow();
        st.objects
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.position.to_array().to_vec())
    }

    #[wasm_bindgen(js_name = setCamera)]
    #[allow(clippy::too_many_arguments)]
    pub fn set_camera(
        &self,
        eye_x: f32,
        eye_y: f32,
        eye_z: f32,
        target_x: f32,
        target_y: f32,
        target_z: f32,
        fovy_deg: f32,
        znear: f32,
        zfar: f32,
    ) {
        let mut st = self.shared.state.borrow_mut();
        st.camera = input::camera_from_js(
            &st.camera,
            [eye_x, eye_y, eye_z],
            [target_x, target_y, target_z],
            fovy_deg,
            znear,
            zfar,
        );
    }

    #[wasm_bindgen(getter)]
    pub fn selected(&self) -> Option<u32> {
        self.shared.state.borrow().interactor.selected()
    }

    #[wasm_bindgen(getter)]
    pub fn hovered(&self) -> Option<u32> {
        self.shared.state.borrow().interactor.hovered()
    }

    /// `kind` is one of `dragstart`, `drag`, `dragend`, `hoveron`, `hoveroff`.
    /// The listener receives `{ type, object }`.
    #[wasm_bindgen(js_name = addEventListener)]
    pub fn add_event_listener(
        &self,
        kind: &str,
        listener: js_sys::Function,
    ) -> Result<(), JsValue> {
        let kind: DragEventKind = kind.parse().map_err(to_js)?;
        self.shared.listeners.borrow_mut().add(kind, listener);
        Ok(())
    }

    #[wasm_bindgen(js_name = removeEventListener)]
    pub fn remove_event_listener(
        &self,
        kind: &str,
        listener: &js_sys::Function,
    ) -> Result<(), JsValue> {
        let kind: DragEventKind = kind.parse().map_err(to_js)?;
        self.shared.listeners.borrow_mut().remove(kind, listener);
        Ok(())
    }
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}
