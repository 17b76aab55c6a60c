use crate::dom;
use crate::input::{PointerOffsets, SharedOffsets};
use crate::particles::ParticlePool;
use crate::render::TrailSurface;
use glam::Vec2;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scoped DOM listener registration. Dropping the handle removes the
/// listener; `forget` leaks it for page-lifetime wiring.
pub struct ListenerHandle {
    target: web::EventTarget,
    event: &'static str,
    function: js_sys::Function,
    _closure: Box<dyn std::any::Any>,
}

impl ListenerHandle {
    pub fn attach<T: ?Sized + 'static>(
        target: &web::EventTarget,
        event: &'static str,
        closure: Closure<T>,
    ) -> Option<Self> {
        let function: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        target.add_event_listener_with_callback(event, &function).ok()?;
        Some(Self {
            target: target.clone(),
            event,
            function,
            _closure: Box::new(closure),
        })
    }

    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, &self.function);
    }
}

/// Window pointermove -> shared offsets + `--mx`/`--my` custom properties.
pub fn wire_parallax(offsets: SharedOffsets) -> Option<ListenerHandle> {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(window) = web::window() {
            let (w, h) = dom::viewport_size(&window);
            let next =
                PointerOffsets::from_client(ev.client_x() as f32, ev.client_y() as f32, w, h);
            *offsets.borrow_mut() = next;
            if let Some(document) = window.document() {
                dom::publish_offset_vars(&document, next);
            }
        }
    }) as Box<dyn FnMut(_)>);
    let window = web::window()?;
    ListenerHandle::attach(&window, "pointermove", closure)
}

#[derive(Clone)]
pub struct TrailWiring {
    pub pool: Rc<RefCell<ParticlePool>>,
    pub rng: Rc<RefCell<StdRng>>,
}

/// Window pointermove -> one particle burst at the pointer position.
pub fn wire_trail_spawn(w: TrailWiring) -> Option<ListenerHandle> {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        w.pool.borrow_mut().spawn_burst(at, &mut *w.rng.borrow_mut());
    }) as Box<dyn FnMut(_)>);
    let window = web::window()?;
    ListenerHandle::attach(&window, "pointermove", closure)
}

/// Window resize -> synchronous backing-store resync.
pub fn wire_trail_resize(surface: Rc<RefCell<TrailSurface>>) -> Option<ListenerHandle> {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            surface.borrow_mut().sync_viewport_size(&window);
        }
    }) as Box<dyn FnMut()>);
    let window = web::window()?;
    ListenerHandle::attach(&window, "resize", closure)
}
