// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning building connections into arcs.
//!
//! ## Resolution
//!
//! - Every connection label of every source building is resolved through a
//!   [`TargetLookup`] within the configured [`ConnectionScope`].
//! - Empty labels are skipped without a diagnostic.
//! - Labels that do not resolve record
//!   [`Diagnostic::UnresolvedConnection`] and produce no arc.
//! - Self connections are drawn like any other.
//!
//! ## Apex
//!
//! The control point sits above the horizontal midpoint of the two building
//! centres, `base_height + jitter` above the higher of the two. Jitter is
//! drawn from a generator seeded by [`ArcConfig::seed`], once per resolved
//! connection and in source order, so equal inputs give equal arcs.
//!
//! [`ConnectionScope`]: crate::ConnectionScope

use codecity_layout::{BuildingPlacement, Diagnostic, Diagnostics, PlacementTable};
use glam::DVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::arc::{Arc, ArcGroup};
use crate::config::ArcConfig;
use crate::lookup::TargetLookup;

/// Deterministic connection router.
///
/// Construct with a lookup (usually `&PlacementTable`) and call
/// [`Router::route`] with the buildings whose connections should be drawn.
/// The jitter generator is reseeded only by [`Router::new`]; routing twice
/// with the same router continues the sequence.
pub struct Router<L> {
    lookup: L,
    config: ArcConfig,
    rng: StdRng,
}

impl<L> core::fmt::Debug for Router<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Router")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<L: TargetLookup> Router<L> {
    /// Create a router over `lookup`.
    pub fn new(lookup: L, config: ArcConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            lookup,
            config,
            rng,
        }
    }

    /// The router's settings.
    pub fn config(&self) -> &ArcConfig {
        &self.config
    }

    /// Build an arc for every resolvable connection of `sources`.
    pub fn route<'a>(
        &mut self,
        sources: impl IntoIterator<Item = &'a BuildingPlacement>,
        diagnostics: &mut Diagnostics,
    ) -> ArcGroup {
        let mut arcs = Vec::new();
        for source in sources {
            for (i, target) in source.connections.iter().enumerate() {
                if target.is_empty() {
                    continue;
                }
                let Some(found) = self.lookup.resolve(target, &self.config.scope) else {
                    diagnostics.push(Diagnostic::UnresolvedConnection {
                        from: source.label.clone(),
                        target: target.clone(),
                    });
                    continue;
                };
                let apex = self.config.base_height + self.rng.random::<f64>() * self.config.jitter;
                let arc = connect(source, found, apex, source.annotation(i));
                tracing::trace!(
                    source = %arc.source,
                    target = %arc.target,
                    apex = arc.apex_height,
                    "arc"
                );
                arcs.push(arc);
            }
        }
        tracing::debug!(arcs = arcs.len(), "connections routed");
        ArcGroup::new(arcs)
    }
}

fn connect(source: &BuildingPlacement, target: &BuildingPlacement, apex: f64, label: &str) -> Arc {
    let (from, to) = (source.position, target.position);
    let mid = (from + to) * 0.5;
    Arc {
        from,
        to,
        control: DVec3::new(mid.x, from.y.max(to.y) + apex, mid.z),
        apex_height: apex,
        label: label.to_owned(),
        color: source.color,
        source: source.label.clone(),
        target: target.label.clone(),
    }
}

/// Route every connection in `table` against the table itself.
pub fn route(table: &PlacementTable, config: &ArcConfig, diagnostics: &mut Diagnostics) -> ArcGroup {
    Router::new(table, config.clone()).route(table, diagnostics)
}
