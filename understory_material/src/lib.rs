// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_material --heading-base-level=0

//! Understory Material: blend-mode math for translucent material backdrops.
//!
//! A "material" is a frosted, translucent surface drawn behind navigation chrome
//! such as sidebars and tab bars. Renderers that cannot run the native blend
//! pipeline approximate it by compositing a tint color onto a background color
//! with one of two blend modes and painting the flattened result.
//!
//! This crate provides that flattening step and nothing else:
//!
//! - [`color_dodge`] and [`overlay`]: per-channel blend formulas over straight
//!   (unpremultiplied) [`Color`] values, plus [`blend()`] which dispatches on a
//!   [`MaterialBlend`].
//! - [`quantize()`], [`color_dodge_rgba8`] and [`overlay_rgba8`]: the 8-bit
//!   boundary, rounding every channel half-up the same way.
//! - [`MaterialLayer`] and [`MaterialStyle`]: a `{color, background_color, blend}`
//!   triple for each [`Brightness`], and [`resolve_layer`] to pick one and
//!   flatten it.
//!
//! The two modes combine alpha differently. Color dodge uses source-over
//! (`a0 + a1 - a0 * a1`), while overlay keeps the smaller of the two alphas.
//! This matches the reference rendering and is kept as is.
//!
//! It does **not** know about blur, layout, or widgets. Hosts resolve a style
//! once per appearance change (or per frame) and paint the returned color.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_material::{Brightness, MaterialBlend, MaterialLayer, MaterialStyle, resolve_layer};
//! use peniko::Color;
//!
//! let style = MaterialStyle::new(
//!     MaterialLayer::new(
//!         Color::from_rgba8(64, 64, 64, 255),
//!         Color::from_rgba8(250, 250, 250, 209),
//!         MaterialBlend::ColorDodge,
//!     ),
//!     MaterialLayer::new(
//!         Color::from_rgba8(140, 140, 140, 255),
//!         Color::from_rgba8(37, 37, 37, 209),
//!         MaterialBlend::Overlay,
//!     ),
//! );
//!
//! let dark = resolve_layer(&style, Brightness::Dark);
//! // Overlay keeps the smaller alpha.
//! assert_eq!(understory_material::quantize(dark).a, 209);
//! ```
//!
//! ## Renderer blend modes
//!
//! Style tables are often written in terms of [`peniko::Mix`]. Only
//! [`Mix::ColorDodge`](peniko::Mix::ColorDodge) and [`Mix::Overlay`](peniko::Mix::Overlay)
//! have a flattened equivalent here; anything else is rejected with
//! [`UnsupportedBlendMode`] when the layer is built, so a bad table fails
//! loudly instead of quietly rendering some default color.
//!
//! ```rust
//! use peniko::{Color, Mix};
//! use understory_material::MaterialLayer;
//!
//! let err = MaterialLayer::from_mix(Color::BLACK, Color::WHITE, Mix::Multiply).unwrap_err();
//! assert_eq!(err.mix, Mix::Multiply);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod blend;
mod error;
mod quantize;
mod style;

pub use peniko::Color;
pub use peniko::color::Rgba8;

pub use blend::{MaterialBlend, blend, color_dodge, dodge_channel, overlay, overlay_channel};
pub use error::UnsupportedBlendMode;
pub use quantize::{color_dodge_rgba8, overlay_rgba8, quantize, quantize_channel, unquantize};
pub use style::{Brightness, MaterialLayer, MaterialStyle, resolve_layer};
