// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion between floating-point colors and 8-bit channels.
//!
//! All blend math happens in `f32`. Rounding only happens here, and every
//! channel (alpha included) goes through [`quantize_channel`].

use peniko::Color;
use peniko::color::Rgba8;

use crate::blend::{color_dodge, overlay};

/// Converts a channel in `[0, 1]` to 8 bits, rounding half up.
///
/// Values outside `[0, 1]` are clamped first. NaN maps to `0`.
#[must_use]
#[inline]
pub fn quantize_channel(value: f32) -> u8 {
    let scaled = value.clamp(0.0, 1.0) * 255.0 + 0.5;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "scaled is in [0.5, 255.5], truncation is the floor we want"
    )]
    {
        scaled as u8
    }
}

/// Converts a color to 8-bit channels with [`quantize_channel`].
#[must_use]
pub fn quantize(color: Color) -> Rgba8 {
    let [r, g, b, a] = color.components.map(quantize_channel);
    Rgba8 { r, g, b, a }
}

/// Converts 8-bit channels to a color, dividing each by `255`.
#[must_use]
pub fn unquantize(rgba: Rgba8) -> Color {
    Color::new([rgba.r, rgba.g, rgba.b, rgba.a].map(|c| f32::from(c) / 255.0))
}

/// [`color_dodge`] on 8-bit inputs, rounded back to 8 bits.
#[must_use]
pub fn color_dodge_rgba8(base: Rgba8, blend: Rgba8) -> Rgba8 {
    quantize(color_dodge(unquantize(base), unquantize(blend)))
}

/// [`overlay`] on 8-bit inputs, rounded back to 8 bits.
#[must_use]
pub fn overlay_rgba8(base: Rgba8, blend: Rgba8) -> Rgba8 {
    quantize(overlay(unquantize(base), unquantize(blend)))
}
