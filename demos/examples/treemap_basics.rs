// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Squarified treemap basics.
//!
//! Split a square by weight, then split it again with padding the way
//! districts are laid out.
//!
//! Run:
//! - `cargo run -p codecity_demos --example treemap_basics`

use codecity::codecity_layout::treemap::{padded_slots, squarify};
use kurbo::Rect;

fn main() {
    let bounds = Rect::new(0.0, 0.0, 60.0, 40.0);
    let weights = [6.0, 6.0, 4.0, 3.0, 2.0, 2.0, 1.0];

    println!("squarify {weights:?} into {bounds:?}");
    for (w, r) in weights.iter().zip(squarify(&weights, bounds)) {
        let aspect = r.width().max(r.height()) / r.width().min(r.height());
        println!(
            "  weight {w:>3}: {:>5.1} x {:<5.1} at ({:>5.1}, {:>5.1})  aspect {aspect:.2}",
            r.width(),
            r.height(),
            r.x0,
            r.y0
        );
    }

    println!("with padding 2:");
    for (w, r) in weights.iter().zip(padded_slots(&weights, bounds, 2.0)) {
        println!("  weight {w:>3}: {r:?}");
    }

    // Zero weights get empty slots; an all-zero list is split evenly.
    let even = squarify(&[0.0, 0.0], bounds);
    println!("all zero: {even:?}");
}
