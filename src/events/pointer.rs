use crate::constants::{MOUSE_EVENTS, TOUCH_EVENTS};
use crate::controls::Shared;
use crate::input;
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Handler = fn(&Shared, &web::Event);

// Order matches MOUSE_EVENTS then TOUCH_EVENTS.
const MOUSE_HANDLERS: [Handler; 4] = [on_mouse_down, on_mouse_move, on_pointer_up, on_cancel];
const TOUCH_HANDLERS: [Handler; 4] = [on_touch_start, on_touch_move, on_pointer_up, on_cancel];

/// DOM listeners feeding one canvas into the shared interactor. Listeners are
/// removed on `deactivate` and when the binding is dropped.
pub struct PointerBinding {
    shared: Rc<Shared>,
    closures: Vec<(&'static str, Closure<dyn FnMut(web::Event)>)>,
}

impl PointerBinding {
    pub(crate) fn new(shared: Rc<Shared>) -> Self {
        Self {
            shared,
            closures: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.closures.is_empty()
    }

    pub fn activate(&mut self) -> anyhow::Result<()> {
        if self.is_active() {
            return Ok(());
        }
        let names = MOUSE_EVENTS.iter().chain(TOUCH_EVENTS.iter());
        let handlers = MOUSE_HANDLERS.iter().chain(TOUCH_HANDLERS.iter());
        for (&name, &handler) in names.zip(handlers) {
            let shared = self.shared.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::Event| {
                ev.prevent_default();
                handler(&shared, &ev);
            }) as Box<dyn FnMut(_)>);
            if let Err(e) = self
                .shared
                .canvas
                .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                self.deactivate();
                return Err(anyhow::anyhow!("failed to listen for {}: {:?}", name, e));
            }
            self.closures.push((name, closure));
        }
        log::info!("[input] activated {} listeners", self.closures.len());
        Ok(())
    }

    pub fn deactivate(&mut self) {
        for (name, closure) in self.closures.drain(..) {
            if let Err(e) = self
                .shared
                .canvas
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                log::warn!("[input] failed to remove {} listener: {:?}", name, e);
            }
        }
    }
}

impl Drop for PointerBinding {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[inline]
fn mouse_point(ev: &web::Event) -> Option<Vec2> {
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| input::client_point(m.client_x() as f64, m.client_y() as f64))
}

// Only the first changed touch is sampled; extra fingers are ignored.
#[inline]
fn first_touch_point(ev: &web::Event) -> Option<Vec2> {
    ev.dyn_ref::<web::TouchEvent>()
        .and_then(|t| t.changed_touches().get(0))
        .map(|t| input::client_point(t.client_x() as f64, t.client_y() as f64))
}

fn on_mouse_down(shared: &Shared, ev: &web::Event) {
    if let Some(pos) = mouse_point(ev) {
        shared.dispatch(|st| st.pointer_down(pos));
    }
}

fn on_mouse_move(shared: &Shared, ev: &web::Event) {
    if let Some(pos) = mouse_point(ev) {
        shared.dispatch(|st| st.pointer_move(pos));
    }
}

fn on_touch_start(shared: &Shared, ev: &web::Event) {
    if let Some(pos) = first_touch_point(ev) {
        shared.dispatch(|st| st.touch_start(pos));
    }
}

fn on_touch_move(shared: &Shared, ev: &web::Event) {
    if let Some(pos) = first_touch_point(ev) {
        shared.dispatch(|st| st.touch_move(pos));
    }
}

fn on_pointer_up(shared: &Shared, _ev: &web::Event) {
    shared.dispatch(|st| {
        st.interactor.pointer_up();
        Ok(())
    });
}

fn on_cancel(shared: &Shared, _ev: &web::Event) {
    shared.dispatch(|st| {
        st.interactor.pointer_cancel();
        Ok(())
    });
}
