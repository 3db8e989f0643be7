// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction used for tab widths, offsets, and fractional indices.
//!
//! This trait is intentionally small and only implemented for `f32` and `f64`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Scalar type used for widths, pointer offsets, and selection positions.
///
/// This is currently implemented for `f32` and `f64`.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity (typically `0.0`).
    fn zero() -> Self;

    /// Returns the maximum of `self` and `other`.
    fn max(self, other: Self) -> Self;

    /// Returns `true` if the value is finite (not NaN or infinite).
    fn is_finite(self) -> bool;

    /// Constructs from a `usize` lossily.
    fn from_usize(value: usize) -> Self;

    /// Truncates the value toward zero and converts it to `isize`.
    ///
    /// For the non-negative values this crate works with, this is the floor.
    /// Callers clamp the result to a valid index range afterwards.
    fn floor_to_isize(self) -> isize;
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn floor_to_isize(self) -> isize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Selection positions are small tab indices; result is clamped immediately after"
        )]
        {
            self as isize
        }
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn floor_to_isize(self) -> isize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Selection positions are small tab indices; result is clamped immediately after"
        )]
        {
            self as isize
        }
    }
}
