// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Material styles for light and dark appearances.

use peniko::{Color, Mix};

use crate::blend::{MaterialBlend, blend};
use crate::error::UnsupportedBlendMode;

/// Platform appearance a material is resolved for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Brightness {
    /// Light appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl Brightness {
    /// Returns [`Brightness::Dark`] when `is_dark` is set.
    #[must_use]
    #[inline]
    pub const fn from_is_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }
}

impl From<bool> for Brightness {
    /// Interprets the flag as "is dark".
    fn from(is_dark: bool) -> Self {
        Self::from_is_dark(is_dark)
    }
}

/// One appearance of a material: a tint blended onto a background.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MaterialLayer {
    /// Tint color, the blend operand.
    pub color: Color,
    /// Background color, the base operand.
    pub background_color: Color,
    /// How `color` is composited onto `background_color`.
    pub blend: MaterialBlend,
}

impl MaterialLayer {
    /// Creates a layer.
    #[must_use]
    pub const fn new(color: Color, background_color: Color, blend: MaterialBlend) -> Self {
        Self {
            color,
            background_color,
            blend,
        }
    }

    /// Creates a layer from a renderer blend mode.
    ///
    /// Fails if `mix` is neither [`Mix::ColorDodge`] nor [`Mix::Overlay`].
    pub fn from_mix(
        color: Color,
        background_color: Color,
        mix: Mix,
    ) -> Result<Self, UnsupportedBlendMode> {
        Ok(Self::new(color, background_color, MaterialBlend::try_from(mix)?))
    }

    /// Returns the flattened color of this layer.
    #[must_use]
    pub fn resolve(&self) -> Color {
        blend(self.blend, self.background_color, self.color)
    }
}

/// A material with one layer per [`Brightness`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MaterialStyle {
    /// Layer used for [`Brightness::Light`].
    pub light: MaterialLayer,
    /// Layer used for [`Brightness::Dark`].
    pub dark: MaterialLayer,
}

impl MaterialStyle {
    /// Creates a style from its light and dark layers.
    #[must_use]
    pub const fn new(light: MaterialLayer, dark: MaterialLayer) -> Self {
        Self { light, dark }
    }

    /// Creates a style from `(color, background_color, mix)` triples.
    ///
    /// The light triple is checked first; the first unsupported mode is returned.
    pub fn from_mix_pairs(
        light: (Color, Color, Mix),
        dark: (Color, Color, Mix),
    ) -> Result<Self, UnsupportedBlendMode> {
        Ok(Self::new(
            MaterialLayer::from_mix(light.0, light.1, light.2)?,
            MaterialLayer::from_mix(dark.0, dark.1, dark.2)?,
        ))
    }

    /// Returns the layer for `brightness`.
    #[must_use]
    #[inline]
    pub const fn layer(&self, brightness: Brightness) -> &MaterialLayer {
        match brightness {
            Brightness::Light => &self.light,
            Brightness::Dark => &self.dark,
        }
    }

    /// Shorthand for [`resolve_layer`].
    #[must_use]
    pub fn resolve(&self, brightness: Brightness) -> Color {
        resolve_layer(self, brightness)
    }
}

/// Selects the layer of `style` for `brightness` and flattens it.
///
/// The layer's background is the base and its tint the blend color.
#[must_use]
pub fn resolve_layer(style: &MaterialStyle, brightness: Brightness) -> Color {
    let layer = style.layer(brightness);
    #[cfg(feature = "tracing")]
    tracing::trace!(?brightness, blend = ?layer.blend, "resolving material layer");
    layer.resolve()
}
