// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Codecity Arcs: curved connection lines between placed buildings.
//!
//! ## Overview
//!
//! Buildings name the buildings they refer to in their `connections`. Once a
//! layout has filled its [`PlacementTable`], the [`Router`] resolves each
//! connection label to a placed building and synthesises an [`Arc`]: a
//! centripetal Catmull-Rom curve ([`ArcCurve`]) from the source centre,
//! through a raised apex, to the target centre.
//!
//! - Target lookup goes through the [`TargetLookup`] trait. The
//!   [`PlacementTable`] implementation is first-match-wins.
//! - [`ConnectionScope`] controls where targets may live. The default searches
//!   the whole table.
//! - Unresolved targets are reported as
//!   [`Diagnostic::UnresolvedConnection`](codecity_layout::Diagnostic) and
//!   skipped.
//! - All arcs live in one [`ArcGroup`] with a single visibility toggle.
//!
//! ## Example
//!
//! ```rust
//! use codecity_arcs::{ArcConfig, route};
//! use codecity_layout::{BuildingSpec, DistrictSpec, LayoutConfig, layout};
//!
//! let districts = [DistrictSpec::new("p")];
//! let buildings = [
//!     BuildingSpec::new("A", "p", 2.0, 2.0, 2.0).connect_annotated("B", "calls B"),
//!     BuildingSpec::new("B", "p", 2.0, 2.0, 2.0),
//! ];
//! let mut city = layout(&districts, &buildings, &LayoutConfig::default()).unwrap();
//! let arcs = route(&city.buildings, &ArcConfig::default(), &mut city.diagnostics);
//!
//! assert_eq!(arcs.len(), 1);
//! let arc = &arcs.as_slice()[0];
//! assert_eq!(arc.label, "calls B");
//! assert_eq!(arc.from, city.buildings.find("A").unwrap().position);
//! assert_eq!(arc.polyline(200).len(), 201);
//! ```

mod arc;
mod config;
mod curve;
mod lookup;
pub mod router;

pub use arc::{Arc, ArcGroup};
pub use config::{ArcConfig, ConnectionScope};
pub use curve::ArcCurve;
pub use lookup::TargetLookup;
pub use router::{Router, route};

#[cfg(doc)]
use codecity_layout::PlacementTable;
