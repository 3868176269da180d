// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router settings and the connection scope policy.

use codecity_layout::ConfigError;
use codecity_layout::error::non_negative;

/// Which buildings a connection target may resolve to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConnectionScope {
    /// Any building in the city.
    #[default]
    Anywhere,
    /// Only buildings owned by this exact district label.
    ///
    /// Matches the older renderer, which resolved every connection inside a
    /// single hardcoded package.
    Namespace(String),
}

impl ConnectionScope {
    /// Namespace-restricted scope.
    pub fn namespace(label: impl Into<String>) -> Self {
        Self::Namespace(label.into())
    }

    /// True if a building owned by `district` is a valid target.
    pub fn admits(&self, district: &str) -> bool {
        match self {
            Self::Anywhere => true,
            Self::Namespace(ns) => ns == district,
        }
    }
}

/// Settings for [`Router`](crate::Router).
#[derive(Clone, Debug, PartialEq)]
pub struct ArcConfig {
    /// Apex height above the higher end point, before jitter.
    pub base_height: f64,
    /// Upper bound of the random height added to each apex.
    pub jitter: f64,
    /// Seed for the jitter generator.
    pub seed: u64,
    /// Where connection targets are looked up.
    pub scope: ConnectionScope,
    /// Segments per curve in [`ArcGroup::polylines`](crate::ArcGroup::polylines).
    pub curve_segments: usize,
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            base_height: 25.0,
            jitter: 10.0,
            seed: 0x5EED,
            scope: ConnectionScope::Anywhere,
            curve_segments: 200,
        }
    }
}

impl ArcConfig {
    /// Reject settings the router cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("base_height", self.base_height)?;
        non_negative("jitter", self.jitter)?;
        if self.curve_segments == 0 {
            return Err(ConfigError::Zero {
                field: "curve_segments",
            });
        }
        if matches!(&self.scope, ConnectionScope::Namespace(ns) if ns.is_empty()) {
            return Err(ConfigError::EmptyNamespace);
        }
        Ok(())
    }
}
