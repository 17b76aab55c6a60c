// Host-side tests for pure pointer-offset math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn center_maps_to_zero() {
    assert_eq!(normalized_offset(500.0, 1000.0), 0.0);
    assert_eq!(normalized_offset(384.0, 768.0), 0.0);
}

#[test]
fn edges_map_to_unit_offsets() {
    assert_eq!(normalized_offset(0.0, 1000.0), -1.0);
    assert_eq!(normalized_offset(1000.0, 1000.0), 1.0);
}

#[test]
fn outside_viewport_is_clamped() {
    assert_eq!(normalized_offset(-250.0, 1000.0), -1.0);
    assert_eq!(normalized_offset(1800.0, 1000.0), 1.0);
}

#[test]
fn degenerate_extent_yields_zero() {
    assert_eq!(normalized_offset(100.0, 0.0), 0.0);
    assert_eq!(normalized_offset(100.0, -50.0), 0.0);
}

#[test]
fn from_client_combines_both_axes() {
    let o = PointerOffsets::from_client(1000.0, 0.0, 1000.0, 800.0);
    assert_eq!(o.mx, 1.0);
    assert_eq!(o.my, -1.0);

    let centered = PointerOffsets::from_client(500.0, 400.0, 1000.0, 800.0);
    assert_eq!(centered, PointerOffsets::default());

    let quarter = PointerOffsets::from_client(750.0, 600.0, 1000.0, 800.0);
    assert!((quarter.mx - 0.5).abs() < 1e-6);
    assert!((quarter.my - 0.5).abs() < 1e-6);
}
