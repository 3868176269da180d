// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different spatial strategies.
//!
//! - `flatvec`: flat vector with linear scans. Districts rarely hold more than a
//!   few dozen reservations, so this is the default.
//! - `grid`: uniform grid keyed by cell, with an origin offset so centered
//!   (negative) coordinates work. Worth it for very crowded districts.

pub mod flatvec;
pub mod grid;

pub use flatvec::FlatVec;
pub use grid::Grid;
