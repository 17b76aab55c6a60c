// Host-side tests for the pure glyph field construction.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod glyphs {
    include!("../src/glyphs.rs");
}

use constants::*;
use glyphs::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn token_count_matches_grid() {
    let mut r = StdRng::seed_from_u64(1);
    let field = build_field(GLYPH_COLS, GLYPH_ROWS, GLYPH_DENSITY, &mut r);
    assert_eq!(field.len(), GLYPH_COLS * GLYPH_ROWS * GLYPH_DENSITY);

    let mut r = StdRng::seed_from_u64(1);
    let dense = build_field(4, 3, 2, &mut r);
    assert_eq!(dense.len(), 24);
}

#[test]
fn jitter_stays_within_cell_bounds() {
    let mut r = StdRng::seed_from_u64(5);
    let field = build_field(8, 6, 1, &mut r);
    let cell_w = 100.0 / 8.0;
    let cell_h = 100.0 / 6.0;
    for (i, token) in field.iter().enumerate() {
        let col = i % 8;
        let row = i / 8;
        let cx = (col as f32 + 0.5) * cell_w;
        let cy = (row as f32 + 0.5) * cell_h;
        assert!((token.left_pct - cx).abs() <= GLYPH_JITTER_FRAC * cell_w + 1e-4);
        assert!((token.top_pct - cy).abs() <= GLYPH_JITTER_FRAC * cell_h + 1e-4);
    }
}

#[test]
fn randomized_attributes_stay_in_range() {
    let mut r = StdRng::seed_from_u64(11);
    let field = build_field(GLYPH_COLS, GLYPH_ROWS, GLYPH_DENSITY, &mut r);
    for token in &field {
        assert!(token.scale >= GLYPH_SCALE_BASE);
        assert!(token.scale < GLYPH_SCALE_BASE + GLYPH_SCALE_SPAN);
        assert!(token.duration_sec >= GLYPH_DUR_BASE_SEC);
        assert!(token.duration_sec < GLYPH_DUR_BASE_SEC + GLYPH_DUR_SPAN_SEC);
        assert!(token.delay_sec >= 0.0);
        assert!(token.delay_sec < GLYPH_DELAY_MAX_SEC);
        assert!(token.drift.x.abs() <= GLYPH_DRIFT_SPAN_PX / 2.0);
        assert!(token.drift.y.abs() <= GLYPH_DRIFT_SPAN_PX / 2.0);
    }
}

#[test]
fn same_seed_builds_identical_field() {
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    let field_a = build_field(GLYPH_COLS, GLYPH_ROWS, GLYPH_DENSITY, &mut a);
    let field_b = build_field(GLYPH_COLS, GLYPH_ROWS, GLYPH_DENSITY, &mut b);
    assert_eq!(field_a, field_b);
}

#[test]
fn all_kinds_reachable_and_icons_dominate() {
    let mut r = StdRng::seed_from_u64(3);
    let mut orbit = 0usize;
    let mut chevrons = 0usize;
    let mut braces = 0usize;
    let mut text = 0usize;
    for _ in 0..2000 {
        match pick_kind(&mut r) {
            GlyphKind::Orbit => orbit += 1,
            GlyphKind::Chevrons => chevrons += 1,
            GlyphKind::Braces => braces += 1,
            GlyphKind::Snippet(s) => {
                assert!(SNIPPETS.contains(&s));
                text += 1;
            }
        }
    }
    assert!(orbit > 0);
    assert!(chevrons > 0);
    assert!(braces > 0);
    assert!(text > 0);
    assert!(orbit + chevrons + braces > text);
}
