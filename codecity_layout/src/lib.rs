// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Codecity Layout: deterministic placement of districts and buildings.
//!
//! ## Overview
//!
//! A code city maps a package hierarchy onto nested ground plates (districts)
//! and the classes in each package onto boxes (buildings). This crate turns
//! flat descriptor lists into world-space placements. It does not render.
//!
//! ## Pipeline
//!
//! [`layout`] runs these stages once, in order:
//!
//! 1. [`DistrictTree::build`] splits dotted labels into a tree.
//! 2. [`area::estimate`] sizes every district bottom-up.
//! 3. [`treemap::partition`] assigns nested squarified rectangles top-down.
//! 4. [`center::center`] moves the layout so its bounds are centred on the origin.
//! 5. [`walker::walk`] emits [`GroundPlacement`]s and fills the
//!    [`PlacementTable`] with [`BuildingPlacement`]s.
//!
//! ## Coordinates
//!
//! World `y` is up. Planar rectangles are [`kurbo::Rect`]s whose `y` axis is
//! world `z`. Positions are [`glam::DVec3`] centres.
//!
//! ## Errors
//!
//! Only configuration problems are fatal ([`ConfigError`]). Everything wrong
//! with the input data is recorded as a [`Diagnostic`], logged through
//! `tracing`, and the layout carries on.
//!
//! ## Example
//!
//! ```rust
//! use codecity_layout::{BuildingSpec, DistrictSpec, LayoutConfig, layout};
//!
//! let districts = [DistrictSpec::new("p")];
//! let buildings = [
//!     BuildingSpec::new("X", "p", 2.0, 4.0, 2.0),
//!     BuildingSpec::new("Y", "p", 2.0, 1.0, 2.0),
//! ];
//! let city = layout(&districts, &buildings, &LayoutConfig::default()).unwrap();
//!
//! // The root plate and `p`.
//! assert_eq!(city.grounds.len(), 2);
//! assert_eq!(city.buildings.len(), 2);
//! assert!(city.diagnostics.is_empty());
//!
//! // The layout is centred on the origin.
//! assert_eq!(city.bounds.center(), kurbo::Point::ZERO);
//! ```

pub mod area;
pub mod center;
mod color;
mod config;
mod descriptor;
mod diagnostics;
pub mod error;
mod hierarchy;
mod placement;
pub mod treemap;
pub mod walker;

pub use area::estimate_flat;
pub use color::Color;
pub use config::LayoutConfig;
pub use descriptor::{BuildingSpec, DistrictSpec};
pub use diagnostics::{Diagnostic, Diagnostics, OverflowReason};
pub use error::ConfigError;
pub use hierarchy::{DistrictNode, DistrictTree, NodeId};
pub use placement::{BuildingPlacement, GroundPlacement, PlacementTable};

use kurbo::{Rect, Vec2};

/// Result of a full layout run.
#[derive(Clone, Debug)]
pub struct CityLayout {
    /// The district tree with footprints and centred rectangles.
    pub tree: DistrictTree,
    /// One plate per district, root first, in depth-first order.
    pub grounds: Vec<GroundPlacement>,
    /// Every placed building.
    pub buildings: PlacementTable,
    /// Non-fatal findings in the order they were made.
    pub diagnostics: Diagnostics,
    /// Bounds of all district rectangles; centred on the origin.
    pub bounds: Rect,
    /// Side of the square treemap space.
    pub layout_size: f64,
    /// Translation applied by the centring stage.
    pub offset: Vec2,
}

/// Lay out a city.
///
/// Validates `config`, then runs every stage once. The result is
/// deterministic for a given input.
pub fn layout(
    districts: &[DistrictSpec],
    buildings: &[BuildingSpec],
    config: &LayoutConfig,
) -> Result<CityLayout, ConfigError> {
    config.validate()?;
    let mut diagnostics = Diagnostics::new();

    let mut tree = {
        let _span = tracing::debug_span!("hierarchy", districts = districts.len()).entered();
        DistrictTree::build(districts, &mut diagnostics)
    };
    {
        let _span = tracing::debug_span!("area", buildings = buildings.len()).entered();
        area::estimate(&mut tree, buildings, config);
    }
    let layout_size = {
        let _span = tracing::debug_span!("treemap").entered();
        treemap::partition(&mut tree, config, &mut diagnostics)
    };
    let offset = {
        let _span = tracing::debug_span!("center").entered();
        center::center(&mut tree)
    };
    let (grounds, placements) = {
        let _span = tracing::debug_span!("placement").entered();
        walker::walk(&tree, buildings, config, &mut diagnostics)
    };

    Ok(CityLayout {
        bounds: center::bounds(&tree),
        tree,
        grounds,
        buildings: placements,
        diagnostics,
        layout_size,
        offset,
    })
}
