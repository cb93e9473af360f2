use crate::input;
use drag_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(element_id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?;
    element
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", element_id, e))
}

/// Current on-screen rectangle of `element`, matching `clientX`/`clientY`.
pub fn viewport_of(element: &web::Element) -> Viewport {
    let rect = element.get_bounding_client_rect();
    input::viewport_from_rect(rect.left(), rect.top(), rect.width(), rect.height())
}

pub fn set_cursor(element: &web::HtmlElement, css: &str) {
    if let Err(e) = element.style().set_property("cursor", css) {
        log::warn!("[dom] failed to set cursor {}: {:?}", css, e);
    }
}
