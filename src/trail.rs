use crate::dom;
use crate::events::{self, ListenerHandle, TrailWiring};
use crate::frame::{self, FrameContext, FrameLoop};
use crate::particles::ParticlePool;
use crate::render::TrailSurface;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The assembled cursor trail: canvas surface, spawn/resize listeners, and
/// the frame loop. Dropping the engine tears all of it down.
pub struct TrailEngine {
    _spawn: ListenerHandle,
    _resize: ListenerHandle,
    _frame_loop: FrameLoop,
}

impl TrailEngine {
    /// Mounts nothing (returns None) when reduced motion is requested or
    /// the canvas/context is unavailable. Neither case is an error.
    pub fn mount(window: &web::Window, document: &web::Document, seed: u64) -> Option<Self> {
        if dom::prefers_reduced_motion(window) {
            log::info!("[trail] reduced motion requested; trail disabled");
            return None;
        }
        let canvas = match document
            .get_element_by_id("trail-canvas")
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        {
            Some(c) => c,
            None => {
                log::info!("[trail] missing #trail-canvas; trail disabled");
                return None;
            }
        };
        let mut surface = match TrailSurface::new(canvas) {
            Some(s) => s,
            None => {
                log::info!("[trail] no 2d context; trail disabled");
                return None;
            }
        };
        surface.sync_viewport_size(window);
        let surface = Rc::new(RefCell::new(surface));
        let pool = Rc::new(RefCell::new(ParticlePool::new()));
        let rng = Rc::new(RefCell::new(StdRng::seed_from_u64(seed)));

        let spawn = events::wire_trail_spawn(TrailWiring {
            pool: pool.clone(),
            rng,
        })?;
        let resize = events::wire_trail_resize(surface.clone())?;
        let frame_ctx = Rc::new(RefCell::new(FrameContext { pool, surface }));
        let frame_loop = frame::start_loop(frame_ctx);
        log::info!("[trail] engine mounted");
        Some(Self {
            _spawn: spawn,
            _resize: resize,
            _frame_loop: frame_loop,
        })
    }

    /// Leak the engine for page-lifetime mounts.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}
