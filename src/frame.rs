use crate::particles::ParticlePool;
use crate::render::TrailSurface;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub pool: Rc<RefCell<ParticlePool>>,
    pub surface: Rc<RefCell<TrailSurface>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.pool.borrow_mut().step();
        let pool = self.pool.borrow();
        self.surface.borrow().draw(&pool);
    }
}

/// Handle for a running requestAnimationFrame loop. Dropping it cancels the
/// pending frame; `forget` leaks it for page-lifetime loops.
pub struct FrameLoop {
    cancelled: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(self.raf_id.get());
        }
    }

    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let cancelled = Rc::new(Cell::new(false));
    let raf_id = Rc::new(Cell::new(0));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let cancelled_tick = cancelled.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancelled_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_id_tick.set(id);
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(id);
        }
    }
    FrameLoop {
        cancelled,
        raf_id,
        _tick: tick,
    }
}
