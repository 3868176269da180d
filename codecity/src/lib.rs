// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Codecity: lay out a code base as a city.
//!
//! ## Overview
//!
//! Packages become nested ground plates (districts), classes become boxes
//! (buildings) standing on them, and references between classes become arcs
//! drawn above the city. [`City::build`] runs every stage once and keeps the
//! result; a renderer consumes it through [`SceneSink`].
//!
//! ```text
//! descriptors ─► hierarchy ─► area ─► treemap ─► centre ─► placement ─► arcs
//! ```
//!
//! The heavy lifting lives in two crates re-exported here:
//!
//! - [`codecity_layout`]: districts and buildings.
//! - [`codecity_arcs`]: connection arcs.
//!
//! ## Example
//!
//! ```rust
//! use codecity::{BuildingSpec, City, CityConfig, DistrictSpec};
//!
//! let districts = [DistrictSpec::new("app"), DistrictSpec::new("app.util")];
//! let buildings = [
//!     BuildingSpec::new("Main", "app", 3.0, 8.0, 3.0).connect_annotated("Strings", "calls"),
//!     BuildingSpec::new("Strings", "app.util", 2.0, 2.0, 2.0),
//!     BuildingSpec::new("Ghost", "app", 1.0, 1.0, 1.0).connect("Missing"),
//! ];
//! let mut city = City::build(&districts, &buildings, &CityConfig::default()).unwrap();
//!
//! // Root, `app` and `app.util`.
//! assert_eq!(city.grounds().len(), 3);
//! assert_eq!(city.buildings().len(), 3);
//! assert_eq!(city.arcs().len(), 1);
//! // The dangling reference is reported, not fatal.
//! assert_eq!(city.diagnostics().unresolved_connections(), 1);
//!
//! city.set_connections_hidden(true);
//! assert!(city.arcs().visible().is_empty());
//! ```

mod city;
mod config;
pub mod sample;
mod scene;

pub use city::City;
pub use config::CityConfig;
pub use scene::{SceneLayers, SceneSink};

pub use codecity_arcs::{self, Arc, ArcConfig, ArcCurve, ArcGroup, ConnectionScope};
pub use codecity_layout::{
    self, BuildingPlacement, BuildingSpec, Color, ConfigError, Diagnostic, Diagnostics,
    DistrictSpec, GroundPlacement, LayoutConfig, OverflowReason, PlacementTable,
};
