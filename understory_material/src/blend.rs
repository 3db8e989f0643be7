// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-channel blend formulas.

use peniko::{Color, Mix};

use crate::error::UnsupportedBlendMode;

/// Blend modes with a flattened material equivalent.
///
/// This is a closed set. Renderer-level [`Mix`] values are converted with
/// `TryFrom<Mix>`, which is where unsupported modes are reported.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MaterialBlend {
    /// Brightens the base toward the blend color. Alpha is combined source-over.
    ColorDodge,
    /// Multiplies dark base channels and screens light ones. Alpha is the minimum
    /// of both inputs.
    Overlay,
}

impl MaterialBlend {
    /// Returns the equivalent renderer blend mode.
    #[must_use]
    #[inline]
    pub const fn to_mix(self) -> Mix {
        match self {
            Self::ColorDodge => Mix::ColorDodge,
            Self::Overlay => Mix::Overlay,
        }
    }
}

impl TryFrom<Mix> for MaterialBlend {
    type Error = UnsupportedBlendMode;

    fn try_from(mix: Mix) -> Result<Self, Self::Error> {
        match mix {
            Mix::ColorDodge => Ok(Self::ColorDodge),
            Mix::Overlay => Ok(Self::Overlay),
            _ => Err(UnsupportedBlendMode { mix }),
        }
    }
}

impl From<MaterialBlend> for Mix {
    fn from(blend: MaterialBlend) -> Self {
        blend.to_mix()
    }
}

/// Color dodge for a single channel in `[0, 1]`.
///
/// A black base stays black and a white blend saturates to white; otherwise the
/// base is divided by the inverted blend and clamped to `1`.
#[must_use]
#[inline]
pub fn dodge_channel(base: f32, blend: f32) -> f32 {
    if base == 0.0 {
        0.0
    } else if blend == 1.0 {
        1.0
    } else {
        (base / (1.0 - blend)).min(1.0)
    }
}

/// Overlay for a single channel in `[0, 1]`.
///
/// Bases up to and including `0.5` take the multiply branch, brighter bases the
/// screen branch. Both branches agree at exactly `0.5`.
#[must_use]
#[inline]
pub fn overlay_channel(base: f32, blend: f32) -> f32 {
    if base <= 0.5 {
        2.0 * base * blend
    } else {
        1.0 - 2.0 * (1.0 - base) * (1.0 - blend)
    }
}

/// Composites `blend` onto `base` with color dodge.
///
/// Alpha is `a0 + a1 - a0 * a1`.
#[must_use]
pub fn color_dodge(base: Color, blend: Color) -> Color {
    let [r0, g0, b0, a0] = base.components;
    let [r1, g1, b1, a1] = blend.components;
    Color::new([
        dodge_channel(r0, r1),
        dodge_channel(g0, g1),
        dodge_channel(b0, b1),
        a0 + a1 - a0 * a1,
    ])
}

/// Composites `blend` onto `base` with overlay.
///
/// Alpha is `min(a0, a1)`, unlike [`color_dodge`].
#[must_use]
pub fn overlay(base: Color, blend: Color) -> Color {
    let [r0, g0, b0, a0] = base.components;
    let [r1, g1, b1, a1] = blend.components;
    Color::new([
        overlay_channel(r0, r1),
        overlay_channel(g0, g1),
        overlay_channel(b0, b1),
        a0.min(a1),
    ])
}

/// Composites `blend` onto `base` using `mode`.
#[must_use]
pub fn blend(mode: MaterialBlend, base: Color, blend: Color) -> Color {
    match mode {
        MaterialBlend::ColorDodge => color_dodge(base, blend),
        MaterialBlend::Overlay => overlay(base, blend),
    }
}

#[cfg(test)]
mod tests {
    use peniko::{Color, Mix};

    use super::{MaterialBlend, blend, color_dodge, dodge_channel, overlay, overlay_channel};

    #[test]
    fn dodge_channel_edge_cases() {
        assert_eq!(dodge_channel(0.0, 1.0), 0.0);
        assert_eq!(dodge_channel(0.3, 1.0), 1.0);
        assert_eq!(dodge_channel(0.25, 0.5), 0.5);
        assert_eq!(dodge_channel(0.8, 0.5), 1.0);
        assert_eq!(dodge_channel(0.4, 0.0), 0.4);
    }

    #[test]
    fn overlay_channel_branches() {
        assert_eq!(overlay_channel(0.25, 0.5), 0.25);
        assert_eq!(overlay_channel(0.75, 0.5), 0.75);
        assert_eq!(overlay_channel(1.0, 0.0), 1.0);
        assert_eq!(overlay_channel(0.0, 1.0), 0.0);
    }

    #[test]
    fn overlay_branches_agree_at_midpoint() {
        let multiply = 2.0_f32 * 0.5 * 0.3;
        let screen = 1.0_f32 - 2.0 * 0.5 * (1.0 - 0.3);
        assert!((multiply - screen).abs() < 1e-6);
        assert!((overlay_channel(0.5, 0.3) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn alpha_rules_differ_between_modes() {
        let base = Color::new([0.2, 0.4, 0.6, 0.5]);
        let tint = Color::new([0.1, 0.1, 0.1, 0.5]);

        let dodged = color_dodge(base, tint);
        assert!((dodged.components[3] - 0.75).abs() < 1e-6);

        let overlaid = overlay(base, tint);
        assert_eq!(overlaid.components[3], 0.5);
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let base = Color::new([0.6, 0.3, 0.9, 0.8]);
        let tint = Color::new([0.2, 0.7, 0.5, 1.0]);
        assert_eq!(
            blend(MaterialBlend::ColorDodge, base, tint).components,
            color_dodge(base, tint).components
        );
        assert_eq!(
            blend(MaterialBlend::Overlay, base, tint).components,
            overlay(base, tint).components
        );
    }

    #[test]
    fn mix_conversion_accepts_only_material_modes() {
        assert_eq!(
            MaterialBlend::try_from(Mix::ColorDodge),
            Ok(MaterialBlend::ColorDodge)
        );
        assert_eq!(MaterialBlend::try_from(Mix::Overlay), Ok(MaterialBlend::Overlay));
        for mix in [Mix::Normal, Mix::Multiply, Mix::Screen, Mix::ColorBurn] {
            let err = MaterialBlend::try_from(mix).unwrap_err();
            assert_eq!(err.mix, mix);
        }
        assert_eq!(Mix::from(MaterialBlend::Overlay), Mix::Overlay);
    }
}
