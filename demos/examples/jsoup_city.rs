// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lay out the jsoup sample and print what a renderer would receive.
//!
//! Run:
//! - `cargo run -p codecity_demos --example jsoup_city`
//! - `RUST_LOG=info cargo run -p codecity_demos --example jsoup_city`
//! - `RUST_LOG=codecity=trace cargo run -p codecity_demos --example jsoup_city`

use codecity::sample::{JSOUP_EXAMPLES, jsoup};
use codecity::{
    Arc, BuildingPlacement, City, CityConfig, ConnectionScope, GroundPlacement, SceneSink,
};
use tracing_subscriber::EnvFilter;

/// Prints every call instead of drawing.
struct Printer;

impl SceneSink for Printer {
    fn ground(&mut self, g: &GroundPlacement) {
        println!(
            "ground   {:<10} {:>6.1} x {:<6.1} at ({:>6.1}, {:.1}, {:>6.1})  {:?}",
            g.label,
            g.width(),
            g.depth(),
            g.position.x,
            g.position.y,
            g.position.z,
            g.color
        );
    }

    fn building(&mut self, b: &BuildingPlacement) {
        println!(
            "building {:<20} {:>4.1} x {:<4.1} x {:<4.1} at ({:>6.1}, {:.2}, {:>6.1})",
            b.label, b.width, b.height, b.depth, b.position.x, b.position.y, b.position.z
        );
    }

    fn arc(&mut self, a: &Arc) {
        println!(
            "arc      {} -> {} ({:?}), apex {:.1}",
            a.source, a.target, a.label, a.control.y
        );
    }

    fn set_arcs_visible(&mut self, visible: bool) {
        println!("arcs visible: {visible}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let (districts, buildings) = jsoup();
    // Resolve references only inside the examples package, like the first
    // renderer of this dataset did.
    let mut config = CityConfig::default();
    config.arcs.scope = ConnectionScope::namespace(JSOUP_EXAMPLES);

    let mut city = match City::build(&districts, &buildings, &config) {
        Ok(city) => city,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        grounds = city.grounds().len(),
        buildings = city.buildings().len(),
        arcs = city.arcs().len(),
        diagnostics = city.diagnostics().len(),
        "city built"
    );
    println!(
        "layout {:.0} units, bounds {:?}, {} diagnostics",
        city.layout_size(),
        city.bounds(),
        city.diagnostics().len()
    );
    city.emit(&mut Printer);

    let points: usize = city.arcs().polylines(&config.arcs).map(|line| line.len()).sum();
    println!(
        "{} arc line strips, {points} points in total",
        city.arcs().visible().len()
    );

    city.set_connections_hidden(true);
    println!("after hiding connections:");
    city.emit(&mut Printer);
}
