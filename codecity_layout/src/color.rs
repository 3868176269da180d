// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packed RGB colours for grounds, buildings and arcs.

use core::fmt;

/// A packed `0xRRGGBB` colour.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Default building palette, picked from by [`Color::palette_pick`].
    pub const PALETTE: [Self; 5] = [
        Self(0x78a8b8),
        Self(0xa7cfcb),
        Self(0x63392c),
        Self(0xf7b29c),
        Self(0xf5d9c1),
    ];

    /// Pure white.
    pub const WHITE: Self = Self(0xff_ffff);

    /// Pack three 8-bit channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Unpack into `(r, g, b)`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Each channel is masked to 8 bits before the cast."
    )]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }

    /// An achromatic colour, HSL(0, 0%, `lightness`%).
    ///
    /// `lightness` is clamped to `0..=100`; non-finite input yields black.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The channel value is clamped to 0..=255 before the cast."
    )]
    pub fn gray(lightness: f64) -> Self {
        let l = if lightness.is_finite() {
            lightness.clamp(0.0, 100.0)
        } else {
            0.0
        };
        let v = (l / 100.0 * 255.0).round() as u8;
        Self::from_rgb(v, v, v)
    }

    /// Pick a palette entry, cycling through [`Color::PALETTE`].
    pub const fn palette_pick(seed: usize) -> Self {
        Self::PALETTE[seed % Self::PALETTE.len()]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::PALETTE[0]
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:06x})", self.0)
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Self(packed & 0xff_ffff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_round_trip() {
        let c = Color::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(c.0, 0x123456);
        assert_eq!(c.rgb(), (0x12, 0x34, 0x56));
    }

    #[test]
    fn gray_follows_lightness() {
        assert_eq!(Color::gray(100.0), Color::WHITE);
        assert_eq!(Color::gray(0.0), Color(0));
        assert_eq!(Color::gray(85.0), Color(0xd9d9d9));
        assert_eq!(Color::gray(-40.0), Color(0));
        assert_eq!(Color::gray(f64::NAN), Color(0));
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(Color::palette_pick(0), Color(0x78a8b8));
        assert_eq!(Color::palette_pick(7), Color(0x63392c));
        assert_eq!(Color::from(0xff12_3456), Color(0x123456));
    }
}
