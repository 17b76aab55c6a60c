use crate::constants::*;
#[cfg(target_arch = "wasm32")]
use crate::particles::ParticlePool;
#[cfg(target_arch = "wasm32")]
use std::f64::consts::TAU;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys as web;

/// Device pixel ratio actually used for the backing store. Non-positive
/// inputs fall back to 1.
#[inline]
pub fn clamped_dpr(dpr: f64) -> f64 {
    if dpr > 0.0 {
        dpr.min(DPR_CAP)
    } else {
        1.0
    }
}

/// Backing-store dimensions for a CSS-pixel viewport. Stable for equal
/// inputs, never below 1x1.
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = clamped_dpr(dpr);
    let w = (css_w * dpr) as u32;
    let h = (css_h * dpr) as u32;
    (w.max(1), h.max(1))
}

/// Full-viewport 2D canvas the trail is composited onto.
#[cfg(target_arch = "wasm32")]
pub struct TrailSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    css_w: f64,
    css_h: f64,
}

#[cfg(target_arch = "wasm32")]
impl TrailSurface {
    /// Returns None when the 2D context is unavailable.
    pub fn new(canvas: web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas,
            ctx,
            css_w: 0.0,
            css_h: 0.0,
        })
    }

    /// Match the backing store to the viewport at the capped device pixel
    /// ratio. No-op when the computed dimensions are unchanged.
    pub fn sync_viewport_size(&mut self, window: &web::Window) {
        let css_w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let css_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let dpr = clamped_dpr(window.device_pixel_ratio());
        let (w_px, h_px) = backing_size(css_w, css_h, dpr);
        if self.canvas.width() == w_px && self.canvas.height() == h_px {
            return;
        }
        self.canvas.set_width(w_px);
        self.canvas.set_height(h_px);
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", css_w));
        _ = style.set_property("height", &format!("{}px", css_h));
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.css_w = css_w;
        self.css_h = css_h;
        log::info!("[trail] surface {}x{} at dpr {:.2}", w_px, h_px, dpr);
    }

    /// Clear the surface and draw every particle additively.
    pub fn draw(&self, pool: &ParticlePool) {
        self.ctx.clear_rect(0.0, 0.0, self.css_w, self.css_h);
        self.ctx.set_global_composite_operation("lighter").ok();
        for p in pool.iter() {
            let radius = (p.size * p.life) as f64;
            self.ctx.begin_path();
            _ = self
                .ctx
                .arc(p.pos.x as f64, p.pos.y as f64, radius, 0.0, TAU);
            let alpha = TRAIL_ALPHA_COEFF * p.life;
            self.ctx.set_fill_style_str(&format!(
                "hsla({:.0}, 90%, 60%, {:.3})",
                p.hue, alpha
            ));
            self.ctx.fill();
        }
        self.ctx.set_global_composite_operation("source-over").ok();
    }
}
