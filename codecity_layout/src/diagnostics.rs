// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-fatal findings collected while building a city.
//!
//! Nothing in here aborts the pipeline. The city renders whatever could be
//! placed, and every shortcut taken along the way is recorded as a
//! [`Diagnostic`] and logged at `warn` level as it happens.

use core::fmt;

/// Why a building ended up outside its intended space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OverflowReason {
    /// Row packing ran past the bottom or right edge of the district.
    OutsideDistrict,
    /// Collision avoidance gave up; the building sits at its first candidate.
    RetryLimit,
    /// The building is larger than its treemap slot.
    SlotTooSmall,
}

impl fmt::Display for OverflowReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OutsideDistrict => "placed outside the district",
            Self::RetryLimit => "no free spot within the attempt limit",
            Self::SlotTooSmall => "larger than its slot",
        })
    }
}

/// A recoverable problem with the input or the resulting layout.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Diagnostic {
    /// The district label is empty or has an empty segment; it was skipped.
    #[error("district label {label:?} is empty or has an empty segment")]
    EmptyDistrictLabel {
        /// The rejected label.
        label: String,
    },
    /// The same full label was declared twice; the last declaration won.
    #[error("district {label:?} is declared more than once; the last declaration wins")]
    DuplicateDistrict {
        /// The repeated label.
        label: String,
    },
    /// A building names a district that was never declared; it was not placed.
    #[error("building {building:?} belongs to unknown district {district:?}")]
    UnknownDistrict {
        /// Building label.
        building: String,
        /// The district it asked for.
        district: String,
    },
    /// A building was placed at a best-effort position that may overlap.
    #[error("building {building:?} in {district:?}: {reason}")]
    PlacementOverflow {
        /// Building label.
        building: String,
        /// Owning district label.
        district: String,
        /// What went wrong.
        reason: OverflowReason,
    },
    /// The city has no building area; the layout uses its minimum size.
    #[error("city has no building area; using the minimum layout size")]
    DegenerateLayout,
    /// A connection names a target that is not in the placement table.
    #[error("connection from {from:?} to {target:?} does not resolve; arc skipped")]
    UnresolvedConnection {
        /// Source building label.
        from: String,
        /// Missing target label.
        target: String,
    },
}

/// Ordered list of [`Diagnostic`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record and log a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(%diagnostic, "codecity diagnostic");
        self.items.push(diagnostic);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries in recording order.
    pub fn iter(&self) -> core::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Entries as a slice.
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    /// Count the unresolved connections.
    pub fn unresolved_connections(&self) -> usize {
        self.items
            .iter()
            .filter(|d| matches!(d, Diagnostic::UnresolvedConnection { .. }))
            .count()
    }

    /// Count the placement overflows with the given reason.
    pub fn overflows(&self, reason: OverflowReason) -> usize {
        self.items
            .iter()
            .filter(|d| matches!(d, Diagnostic::PlacementOverflow { reason: r, .. } if *r == reason))
            .count()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = core::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
