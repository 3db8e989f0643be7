// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use peniko::Mix;

/// Error returned when a renderer blend mode has no material equivalent.
///
/// This indicates a mistake in a style table, not a runtime condition. It is
/// produced when converting a [`Mix`] into a [`MaterialBlend`](crate::MaterialBlend).
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct UnsupportedBlendMode {
    /// The rejected blend mode.
    pub mix: Mix,
}

impl fmt::Debug for UnsupportedBlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnsupportedBlendMode {{ mix: {:?} }}", self.mix)
    }
}

impl fmt::Display for UnsupportedBlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "blend mode {:?} is not supported by materials (expected ColorDodge or Overlay)",
            self.mix
        )
    }
}

impl core::error::Error for UnsupportedBlendMode {}
