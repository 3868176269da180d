// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Codecity Index: ground-plane footprint reservations for code city layout.
//!
//! A district that hosts both child districts and its own buildings has to keep
//! those buildings off the plates of its children. This crate answers the one
//! question the placement pass keeps asking: *is this footprint free, and if not,
//! what is in the way?*
//!
//! - Reserve axis-aligned [`Footprint`]s on the `x`/`z` ground plane with a payload.
//! - Query by point or by overlapping footprint; results come back in insertion order.
//! - Release reservations through generational [`Key`] handles.
//!
//! It does not depend on any geometry crate. Higher layers convert their own
//! rectangles into [`Footprint`]s.
//!
//! Backends are pluggable via [`Backend`] so the spatial strategy can change
//! without touching call sites. The default backend is a flat vector (linear
//! scan); a uniform [`Grid`] with an origin offset is available for crowded
//! districts.
//!
//! Overlap means a shared region of positive area. Buildings packed edge to edge
//! do not collide.
//!
//! # Example
//!
//! ```rust
//! use codecity_index::{Footprint, FootprintIndex};
//!
//! let mut reserved: FootprintIndex<u32> = FootprintIndex::new();
//! reserved.insert(Footprint::new(0.0, 0.0, 10.0, 10.0), 7);
//!
//! // Touching the right edge is fine.
//! assert!(reserved.is_free(Footprint::new(10.0, 0.0, 12.0, 2.0)));
//!
//! // Straddling it is not.
//! let blocker = reserved.first_overlap(Footprint::new(9.0, 0.0, 11.0, 2.0));
//! assert_eq!(blocker.map(|(_, id)| id), Some(7));
//! ```
//!
//! Grid-backed indexes take a cell size and a lattice origin:
//!
//! ```rust
//! use codecity_index::{Footprint, FootprintIndex, Grid};
//!
//! let mut idx: FootprintIndex<u32, Grid> =
//!     FootprintIndex::with_uniform_grid(8.0, 8.0, -100.0, -100.0);
//! idx.insert(Footprint::from_center_size(-40.0, 12.0, 6.0, 6.0), 1);
//! assert_eq!(idx.query_point(-40.0, 12.0).count(), 1);
//! ```
//!
//! Float inputs are assumed to be finite (no NaNs).

#![no_std]

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod index;
pub mod types;

pub use backend::Backend;
pub use backends::{FlatVec, Grid};
pub use index::{FootprintIndex, Key};
pub use types::Footprint;
