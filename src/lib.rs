#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contact;
mod content;
mod dom;
mod events;
mod field;
mod frame;
mod glyphs;
mod input;
mod particles;
mod render;
mod trail;

use constants::{GLYPH_COLS, GLYPH_DENSITY, GLYPH_ROWS};

// Decorrelate the per-component RNG streams drawn from one wall-clock seed
fn sub_seed(seed: u64, stream: u64) -> u64 {
    seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    content::mount(&document);

    // Single writer; the stylesheet reads the mirrored --mx/--my properties
    let offsets = input::SharedOffsets::default();
    if let Some(handle) = events::wire_parallax(offsets) {
        handle.forget();
    }

    let seed = js_sys::Date::now() as u64;
    let reduced = dom::prefers_reduced_motion(&window);

    let mut glyph_rng = StdRng::seed_from_u64(sub_seed(seed, 0));
    let tokens = glyphs::build_field(GLYPH_COLS, GLYPH_ROWS, GLYPH_DENSITY, &mut glyph_rng);
    field::mount(&document, &tokens, reduced);

    if let Some(engine) = trail::TrailEngine::mount(&window, &document, sub_seed(seed, 1)) {
        engine.forget();
    }

    if let Some(handle) = contact::wire_contact_form(&document) {
        handle.forget();
    }

    log::info!("[init] portfolio mounted");
    Ok(())
}
