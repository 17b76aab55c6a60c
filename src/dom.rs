use crate::input::PointerOffsets;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

#[inline]
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Mirror the shared pointer offsets onto `--mx`/`--my` so stylesheet
/// consumers (background blobs, glyph tokens) follow without wiring.
pub fn publish_offset_vars(document: &web::Document, offsets: PointerOffsets) {
    if let Some(root) = document.document_element() {
        if let Ok(el) = root.dyn_into::<web::HtmlElement>() {
            let style = el.style();
            _ = style.set_property("--mx", &format!("{:.4}", offsets.mx));
            _ = style.set_property("--my", &format!("{:.4}", offsets.my));
        }
    }
}
