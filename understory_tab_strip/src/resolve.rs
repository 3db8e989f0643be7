// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Free functions mapping between pointer offsets, tab indices, and indicator geometry.
//!
//! Every function takes the measured tab widths in strip order. Widths are
//! expected to be finite and non-negative; this is only checked in debug builds.

use crate::Scalar;

#[inline]
fn debug_check_widths<T: Scalar>(widths: &[T]) {
    debug_assert!(
        widths.iter().all(|w| w.is_finite() && *w >= T::zero()),
        "tab widths must be finite and non-negative: {widths:?}"
    );
}

/// Splits a selection position into its whole tab index and fractional remainder.
///
/// Negative positions yield index `0` with a negative remainder.
#[inline]
fn split_index<T: Scalar>(index: T) -> (usize, T) {
    let whole = usize::try_from(index.floor_to_isize()).unwrap_or(0);
    (whole, index - T::from_usize(whole))
}

/// Sum of all widths.
#[must_use]
pub fn total_extent<T: Scalar>(widths: &[T]) -> T {
    widths.iter().fold(T::zero(), |acc, &w| acc + w)
}

/// Returns the tab under `pointer`.
///
/// Walks the running sum of `widths` and returns the first index whose right
/// edge lies strictly beyond `pointer`, so a pointer exactly on a boundary
/// belongs to the tab on the right. Pointers past the end clamp to the last
/// tab; pointers before the start resolve to the first.
///
/// `widths` must not be empty. In release builds an empty slice yields `0`.
#[must_use]
pub fn closest_index<T: Scalar>(pointer: T, widths: &[T]) -> usize {
    debug_assert!(!widths.is_empty(), "closest_index requires at least one tab");
    debug_check_widths(widths);

    let mut right_edge = T::zero();
    for (index, &width) in widths.iter().enumerate() {
        right_edge = right_edge + width;
        if pointer < right_edge {
            return index;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(?pointer, extent = ?right_edge, "pointer past the tab strip, clamping to last tab");
    widths.len().saturating_sub(1)
}

/// Returns the left edge of the indicator for a selection position.
///
/// The whole part `w` of `index` contributes `widths[0..w]` in full and the
/// fractional part scales `widths[w]`, so the edge moves linearly from tab
/// `w` to tab `w + 1`. A whole part past the end adds nothing for the missing
/// tab, which keeps transient layouts with stale widths well-defined.
#[must_use]
pub fn position_for_index<T: Scalar>(index: T, widths: &[T]) -> T {
    debug_check_widths(widths);

    let (whole, fraction) = split_index(index);
    let before = total_extent(&widths[..whole.min(widths.len())]);
    match widths.get(whole) {
        Some(&width) => before + width * fraction,
        None => before,
    }
}

/// Inverse of [`position_for_index`]: the selection position whose indicator
/// starts at `offset`.
///
/// Used while an indicator follows a drag. The result is clamped to
/// `[0, widths.len() - 1]` and zero-width tabs are skipped. An empty slice
/// yields `0`.
#[must_use]
pub fn fractional_index_at_offset<T: Scalar>(offset: T, widths: &[T]) -> T {
    debug_check_widths(widths);

    let Some(last) = widths.len().checked_sub(1) else {
        return T::zero();
    };
    if offset <= T::zero() {
        return T::zero();
    }

    let mut start = T::zero();
    for (index, &width) in widths[..last].iter().enumerate() {
        let end = start + width;
        if width > T::zero() && offset < end {
            return T::from_usize(index) + (offset - start) / width;
        }
        start = end;
    }
    T::from_usize(last)
}

/// Returns the indicator width for a selection position.
///
/// Interpolates linearly between `widths[w]` and `widths[w + 1]`. Past the end
/// the last width is held; an empty slice yields `0`.
#[must_use]
pub fn extent_for_index<T: Scalar>(index: T, widths: &[T]) -> T {
    debug_check_widths(widths);

    let (whole, fraction) = split_index(index);
    let Some(&current) = widths.get(whole) else {
        return widths.last().copied().unwrap_or_else(T::zero);
    };
    let next = widths.get(whole + 1).copied().unwrap_or(current);
    current + (next - current) * fraction
}
