// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Author-supplied descriptors for districts and buildings.

use crate::color::Color;

/// A package or namespace, identified by its dotted label.
#[derive(Clone, Debug, PartialEq)]
pub struct DistrictSpec {
    /// Dotted hierarchical label, e.g. `"org.jsoup.nodes"`.
    pub label: String,
    /// Optional `(x, z)` footprint supplied by the author.
    ///
    /// Acts as a lower bound on the estimated footprint.
    pub footprint: Option<(f64, f64)>,
}

impl DistrictSpec {
    /// A district with an estimated footprint.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            footprint: None,
        }
    }

    /// Set a minimum footprint.
    pub fn with_footprint(mut self, x: f64, z: f64) -> Self {
        self.footprint = Some((x, z));
        self
    }
}

/// A class or file, drawn as a box inside its owning district.
///
/// `annotations[i]` describes `connections[i]`. Missing annotations read as
/// empty strings; see [`BuildingSpec::annotation`].
#[derive(Clone, Debug, PartialEq)]
pub struct BuildingSpec {
    /// Building label, matched by connection targets.
    pub label: String,
    /// Extent along x.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
    /// Extent along z.
    pub depth: f64,
    /// Box colour.
    pub color: Color,
    /// Full dotted label of the owning district.
    pub district: String,
    /// Labels of buildings this one refers to.
    pub connections: Vec<String>,
    /// Arc labels, index-aligned with `connections`.
    pub annotations: Vec<String>,
}

impl BuildingSpec {
    /// A building with the default palette colour and no connections.
    pub fn new(
        label: impl Into<String>,
        district: impl Into<String>,
        width: f64,
        height: f64,
        depth: f64,
    ) -> Self {
        Self {
            label: label.into(),
            width,
            height,
            depth,
            color: Color::default(),
            district: district.into(),
            connections: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Replace the colour.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Add an unlabelled connection.
    pub fn connect(mut self, target: impl Into<String>) -> Self {
        self.connections.push(target.into());
        self
    }

    /// Add a connection with an arc label.
    pub fn connect_annotated(mut self, target: impl Into<String>, note: impl Into<String>) -> Self {
        self.annotations.resize(self.connections.len(), String::new());
        self.connections.push(target.into());
        self.annotations.push(note.into());
        self
    }

    /// The annotation for connection `i`, or `""` if there is none.
    pub fn annotation(&self, i: usize) -> &str {
        self.annotations.get(i).map(String::as_str).unwrap_or("")
    }

    /// Ground-plane footprint `(width, depth)`, with negative or non-finite
    /// extents treated as zero.
    pub fn footprint(&self) -> (f64, f64) {
        (sanitize(self.width), sanitize(self.depth))
    }

    /// Footprint area used for sizing.
    pub fn footprint_area(&self) -> f64 {
        let (w, d) = self.footprint();
        w * d
    }
}

pub(crate) fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}
