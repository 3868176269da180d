// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fatal configuration errors.

/// A configuration value that would make the pipeline meaningless.
///
/// Returned before any layout stage runs. Problems with the *input data* are
/// never fatal; they are reported as [`Diagnostic`](crate::Diagnostic)s.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A float setting is NaN or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NonFinite {
        /// Setting name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A setting that may be zero is negative.
    #[error("`{field}` must not be negative, got {value}")]
    Negative {
        /// Setting name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A setting that must be strictly positive is not.
    #[error("`{field}` must be positive, got {value}")]
    NotPositive {
        /// Setting name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// `min_layout_size` exceeds `max_layout_size`.
    #[error("layout size bounds are inverted: min {min} > max {max}")]
    InvertedLayoutBounds {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// A count setting is zero.
    #[error("`{field}` must be at least 1")]
    Zero {
        /// Setting name.
        field: &'static str,
    },
    /// A namespace-scoped connection lookup names no namespace.
    #[error("connection namespace must not be empty")]
    EmptyNamespace,
}

pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

/// Check that `value` is finite and `>= 0`.
pub fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if finite(field, value)? < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

/// Check that `value` is finite and `> 0`.
pub fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if finite(field, value)? <= 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}
