#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod constants;
mod controls;
mod dom;
mod events;
mod input;

pub use controls::DragControls;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("drag-controls starting");
    Ok(())
}

/// Convenience for pages that use the default `#app-canvas` element.
#[wasm_bindgen(js_name = attachDefault)]
pub fn attach_default() -> Result<DragControls, JsValue> {
    DragControls::new(constants::DEFAULT_CANVAS_ID)
}
