// Host-side tests for the contact submission outcome model.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod contact {
    include!("../src/contact.rs");
}

use contact::*;

#[test]
fn each_outcome_has_a_distinct_acknowledgment() {
    let delivered = SubmitOutcome::Delivered.acknowledgment();
    let rejected = SubmitOutcome::Rejected.acknowledgment();
    let network = SubmitOutcome::NetworkFailed.acknowledgment();
    assert!(!delivered.is_empty());
    assert!(!rejected.is_empty());
    assert!(!network.is_empty());
    assert_ne!(delivered, rejected);
    assert_ne!(delivered, network);
    assert_ne!(rejected, network);
}

#[test]
fn only_delivery_clears_the_form() {
    assert!(SubmitOutcome::Delivered.clears_form());
    assert!(!SubmitOutcome::Rejected.clears_form());
    assert!(!SubmitOutcome::NetworkFailed.clears_form());
}
