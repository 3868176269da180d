// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout tuning constants.

use crate::error::{ConfigError, non_negative, positive};

/// Constants that drive every layout stage.
///
/// Lengths are world units. The defaults reproduce the reference city look.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Visibility floor for a district's footprint side.
    pub min_district_size: f64,
    /// Side length of the treemap space. `None` derives it from the total area.
    pub fixed_layout_size: Option<f64>,
    /// Multiplier applied to `sqrt(total area)` when deriving the layout size.
    pub layout_scaling_factor: f64,
    /// Lower clamp for the derived layout size.
    pub min_layout_size: f64,
    /// Upper clamp for the derived layout size.
    pub max_layout_size: f64,
    /// Treemap padding between sibling districts and around their children.
    pub district_padding: f64,
    /// Round district rectangles to whole units.
    pub round_districts: bool,
    /// Padding used by the per-district building treemap.
    pub building_treemap_padding: f64,
    /// Vertical distance between nesting levels.
    pub layer_height: f64,
    /// Thickness of a ground plate.
    pub ground_thickness: f64,
    /// Gap between row-packed buildings.
    pub building_padding: f64,
    /// How far a building is sunk into its plate to hide the seam.
    pub building_sink: f64,
    /// Collision-avoidance attempts per building before falling back.
    pub max_placement_attempts: usize,
    /// Ground lightness lost per nesting level, in percent.
    pub ground_lightness_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_district_size: 2.0,
            fixed_layout_size: None,
            layout_scaling_factor: 10.0,
            min_layout_size: 100.0,
            max_layout_size: 300.0,
            district_padding: 1.0,
            round_districts: true,
            building_treemap_padding: 1.0,
            layer_height: 0.4,
            ground_thickness: 0.5,
            building_padding: 0.5,
            building_sink: 0.05,
            max_placement_attempts: 64,
            ground_lightness_step: 15.0,
        }
    }
}

impl LayoutConfig {
    /// Reject settings the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("min_district_size", self.min_district_size)?;
        if let Some(size) = self.fixed_layout_size {
            positive("fixed_layout_size", size)?;
        }
        positive("layout_scaling_factor", self.layout_scaling_factor)?;
        positive("min_layout_size", self.min_layout_size)?;
        positive("max_layout_size", self.max_layout_size)?;
        if self.min_layout_size > self.max_layout_size {
            return Err(ConfigError::InvertedLayoutBounds {
                min: self.min_layout_size,
                max: self.max_layout_size,
            });
        }
        non_negative("district_padding", self.district_padding)?;
        non_negative("building_treemap_padding", self.building_treemap_padding)?;
        non_negative("layer_height", self.layer_height)?;
        non_negative("ground_thickness", self.ground_thickness)?;
        non_negative("building_padding", self.building_padding)?;
        non_negative("building_sink", self.building_sink)?;
        non_negative("ground_lightness_step", self.ground_lightness_step)?;
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::Zero {
                field: "max_placement_attempts",
            });
        }
        Ok(())
    }

    /// Side length of the square treemap space for a city of `total_area`.
    pub fn layout_size(&self, total_area: f64) -> f64 {
        if let Some(size) = self.fixed_layout_size {
            return size;
        }
        let derived = total_area.max(0.0).sqrt() * self.layout_scaling_factor;
        if derived.is_finite() {
            derived.clamp(self.min_layout_size, self.max_layout_size)
        } else {
            self.max_layout_size
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = LayoutConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.min_district_size, 2.0);
        assert_eq!(cfg.max_placement_attempts, 64);
    }

    #[test]
    fn rejects_bad_settings() {
        let cfg = LayoutConfig {
            min_layout_size: 400.0,
            ..LayoutConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvertedLayoutBounds {
                min: 400.0,
                max: 300.0
            })
        );

        let cfg = LayoutConfig {
            max_placement_attempts: 0,
            ..LayoutConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::Zero { .. })));

        let cfg = LayoutConfig {
            district_padding: -1.0,
            ..LayoutConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Negative {
                field: "district_padding",
                ..
            })
        ));

        let cfg = LayoutConfig {
            fixed_layout_size: Some(f64::INFINITY),
            ..LayoutConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::NonFinite { .. })));
    }

    #[test]
    fn layout_size_is_clamped() {
        let cfg = LayoutConfig::default();
        assert_eq!(cfg.layout_size(0.0), 100.0);
        assert_eq!(cfg.layout_size(400.0), 200.0);
        assert_eq!(cfg.layout_size(1.0e6), 300.0);
        let fixed = LayoutConfig {
            fixed_layout_size: Some(50.0),
            ..LayoutConfig::default()
        };
        assert_eq!(fixed.layout_size(1.0e6), 50.0);
    }
}
