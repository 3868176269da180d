// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Codecity Index: reserve district plates, then probe candidate building spots.

use codecity_index::{Footprint, FootprintIndex};

fn main() {
    let mut reserved: FootprintIndex<&str> = FootprintIndex::new();
    reserved.insert(Footprint::new(0.0, 0.0, 20.0, 12.0), "org.jsoup.nodes");
    reserved.insert(Footprint::new(21.0, 0.0, 30.0, 9.0), "org.jsoup.helper");

    // Walk a 2x2 building along the top row until it finds a free spot.
    let mut x = 0.0;
    loop {
        let candidate = Footprint::from_origin_size(x, 0.0, 2.0, 2.0);
        match reserved.first_overlap(candidate) {
            Some((blocker, label)) => {
                println!("x={x:.1}: blocked by {label}");
                x = blocker.max_x + 0.5;
            }
            None => {
                println!("x={x:.1}: free");
                break;
            }
        }
    }
}
