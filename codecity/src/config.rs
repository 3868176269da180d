// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use codecity_arcs::ArcConfig;
use codecity_layout::{ConfigError, LayoutConfig};

/// Settings for a whole [`City`](crate::City) build.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CityConfig {
    /// District and building placement.
    pub layout: LayoutConfig,
    /// Connection arcs.
    pub arcs: ArcConfig,
}

impl CityConfig {
    /// Validate both halves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;
        self.arcs.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_settings_are_checked_too() {
        assert_eq!(CityConfig::default().validate(), Ok(()));
        let config = CityConfig {
            arcs: ArcConfig {
                base_height: f64::NAN,
                ..ArcConfig::default()
            },
            ..CityConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite {
                field: "base_height",
                ..
            })
        ));
    }
}
