// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn trail_constants_are_within_reasonable_bounds() {
    assert!(TRAIL_SPAWN_PER_MOVE > 0);
    assert!(TRAIL_PARTICLE_CAP > TRAIL_SPAWN_PER_MOVE);

    assert!(TRAIL_SPEED_MIN > 0.0);
    assert!(TRAIL_SPEED_SPAN > 0.0);
    assert!(TRAIL_GRAVITY_BIAS >= 0.0);

    // Damping and decay keep every particle on a bounded, finite life
    assert!(TRAIL_DAMPING > 0.0 && TRAIL_DAMPING < 1.0);
    assert!(TRAIL_LIFE_DECAY > 0.0 && TRAIL_LIFE_DECAY < 1.0);

    assert!(TRAIL_SIZE_MIN > 0.0);
    assert!(TRAIL_SIZE_SPAN > 0.0);
    assert!(TRAIL_ALPHA_COEFF > 0.0 && TRAIL_ALPHA_COEFF <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn trail_lifetime_is_about_fifty_frames() {
    let frames = 1.0 / TRAIL_LIFE_DECAY;
    assert!((frames - 50.0).abs() < 1e-3);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hue_band_stays_in_the_cyan_blue_range() {
    assert!(TRAIL_HUE_BASE >= 0.0);
    assert!(TRAIL_HUE_BASE + TRAIL_HUE_SPAN <= 360.0);
    assert!(TRAIL_HUE_SPAN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn backing_store_cap_is_two() {
    assert!(DPR_CAP == 2.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glyph_constants_have_logical_relationships() {
    assert!(GLYPH_COLS > 0 && GLYPH_ROWS > 0 && GLYPH_DENSITY > 0);

    // Jitter must keep a token inside its own cell
    assert!(GLYPH_JITTER_FRAC > 0.0 && GLYPH_JITTER_FRAC <= 0.5);

    assert!(GLYPH_SCALE_BASE > 0.0);
    assert!(GLYPH_SCALE_SPAN > 0.0);
    assert!(GLYPH_DUR_BASE_SEC > 0.0);
    assert!(GLYPH_DUR_SPAN_SEC > 0.0);
    assert!(GLYPH_DELAY_MAX_SEC > 0.0);
    assert!(GLYPH_DRIFT_SPAN_PX > 0.0);

    assert!(GLYPH_OPACITY_MIN < GLYPH_OPACITY_MAX);
    assert!(GLYPH_OPACITY_MIN > 0.0);
    assert!(GLYPH_OPACITY_MAX < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glyph_pick_thresholds_are_cumulative() {
    assert!(GLYPH_PICK_ORBIT > 0.0);
    assert!(GLYPH_PICK_CHEVRONS > GLYPH_PICK_ORBIT);
    assert!(GLYPH_PICK_BRACES > GLYPH_PICK_CHEVRONS);
    assert!(GLYPH_PICK_BRACES < 1.0);
    // Icons together outweigh the text remainder
    assert!(GLYPH_PICK_BRACES > 1.0 - GLYPH_PICK_BRACES);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn parallax_multipliers_are_gentle() {
    assert!(GLYPH_PARALLAX_X_PX > 0.0);
    assert!(GLYPH_PARALLAX_Y_PX > 0.0);
    assert!(GLYPH_PARALLAX_X_PX < GLYPH_DRIFT_SPAN_PX);
    assert!(GLYPH_PARALLAX_Y_PX < GLYPH_DRIFT_SPAN_PX);
}

#[test]
fn contact_endpoint_is_https() {
    assert!(CONTACT_ENDPOINT.starts_with("https://"));
}
