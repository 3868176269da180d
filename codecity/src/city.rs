// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The assembled city.

use codecity_arcs::{ArcGroup, route};
use codecity_layout::{
    BuildingSpec, CityLayout, ConfigError, Diagnostics, DistrictSpec, DistrictTree,
    GroundPlacement, PlacementTable, layout,
};
use kurbo::Rect;

use crate::config::CityConfig;
use crate::scene::{SceneLayers, SceneSink};

/// Grounds, buildings and arcs of one city, ready to draw.
///
/// Built once by [`City::build`]. Afterwards only visibility can change.
#[derive(Clone, Debug)]
pub struct City {
    layout: CityLayout,
    arcs: ArcGroup,
    layers: SceneLayers,
}

impl City {
    /// Run the whole pipeline.
    ///
    /// Both halves of `config` are validated before any stage runs. The
    /// stages then run once each, in order: hierarchy, area estimation,
    /// treemap, centring, building placement, connection routing. Data
    /// problems never fail the build; they end up in [`City::diagnostics`].
    pub fn build(
        districts: &[DistrictSpec],
        buildings: &[BuildingSpec],
        config: &CityConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let _span = tracing::info_span!(
            "city",
            districts = districts.len(),
            buildings = buildings.len()
        )
        .entered();

        let mut layout = layout(districts, buildings, &config.layout)?;
        let arcs = {
            let _span = tracing::debug_span!("connections").entered();
            route(&layout.buildings, &config.arcs, &mut layout.diagnostics)
        };
        tracing::debug!(
            grounds = layout.grounds.len(),
            buildings = layout.buildings.len(),
            arcs = arcs.len(),
            diagnostics = layout.diagnostics.len(),
            "city built"
        );
        Ok(Self {
            layout,
            arcs,
            layers: SceneLayers::default(),
        })
    }

    /// District plates, root first, depth-first.
    pub fn grounds(&self) -> &[GroundPlacement] {
        &self.layout.grounds
    }

    /// Every placed building.
    pub fn buildings(&self) -> &PlacementTable {
        &self.layout.buildings
    }

    /// Connection arcs.
    pub fn arcs(&self) -> &ArcGroup {
        &self.arcs
    }

    /// Everything that went wrong without stopping the build.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.layout.diagnostics
    }

    /// Bounds of all district plates, centred on the origin.
    pub fn bounds(&self) -> Rect {
        self.layout.bounds
    }

    /// The district tree with sizes and rectangles.
    pub fn districts(&self) -> &DistrictTree {
        &self.layout.tree
    }

    /// Side of the square space the districts were laid out in.
    pub fn layout_size(&self) -> f64 {
        self.layout.layout_size
    }

    /// Currently shown layers.
    pub fn layers(&self) -> SceneLayers {
        self.layers
    }

    /// Replace the shown layers.
    pub fn set_layers(&mut self, layers: SceneLayers) {
        self.layers = layers;
        self.arcs.set_hidden(!layers.contains(SceneLayers::ARCS));
    }

    /// Hide or show all connection arcs.
    pub fn set_connections_hidden(&mut self, hidden: bool) {
        self.layers.set(SceneLayers::ARCS, !hidden);
        self.arcs.set_hidden(hidden);
    }

    /// Stream the city to `sink`.
    ///
    /// Hidden ground and building layers are skipped. Arcs are always
    /// streamed so the sink can show them later; their visibility follows as
    /// the final call.
    pub fn emit(&self, sink: &mut impl SceneSink) {
        if self.layers.contains(SceneLayers::GROUNDS) {
            for ground in &self.layout.grounds {
                sink.ground(ground);
            }
        }
        if self.layers.contains(SceneLayers::BUILDINGS) {
            for building in &self.layout.buildings {
                sink.building(building);
            }
        }
        for arc in &self.arcs {
            sink.arc(arc);
        }
        sink.set_arcs_visible(!self.arcs.is_hidden());
    }
}
