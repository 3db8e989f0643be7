// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Borrowed view over one layout pass worth of tab widths.

use kurbo::Rect;

use crate::{
    Scalar, SelectionState, closest_index, extent_for_index, fractional_index_at_offset,
    position_for_index, total_extent,
};

/// Tab widths measured by a single layout pass, in strip order.
///
/// `TabStrip` only borrows the widths; it is cheap to create per frame or per
/// gesture event and holds no other state. The current selection, drag state,
/// and animation progress stay with the host and are passed in as plain values.
///
/// ```rust
/// use understory_tab_strip::TabStrip;
///
/// let widths = [72.0, 96.0, 64.0];
/// let strip = TabStrip::new(&widths);
///
/// // Pointer dragged to x = 100: the second tab.
/// assert_eq!(strip.closest_index(100.0), 1);
///
/// // Halfway through animating from tab 0 to tab 1.
/// assert_eq!(strip.position_for_index(0.5), 36.0);
/// assert_eq!(strip.extent_for_index(0.5), 84.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TabStrip<'a, T> {
    widths: &'a [T],
}

impl<'a, T: Scalar> TabStrip<'a, T> {
    /// Wraps measured tab widths.
    #[must_use]
    #[inline]
    pub const fn new(widths: &'a [T]) -> Self {
        Self { widths }
    }

    /// The wrapped widths.
    #[must_use]
    #[inline]
    pub const fn widths(&self) -> &'a [T] {
        self.widths
    }

    /// Number of tabs.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.widths.len()
    }

    /// Returns `true` if no widths have been measured yet.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// See [`total_extent`].
    #[must_use]
    pub fn total_extent(&self) -> T {
        total_extent(self.widths)
    }

    /// See [`closest_index`].
    ///
    /// The strip must not be empty.
    #[must_use]
    pub fn closest_index(&self, pointer: T) -> usize {
        closest_index(pointer, self.widths)
    }

    /// See [`position_for_index`].
    #[must_use]
    pub fn position_for_index(&self, index: T) -> T {
        position_for_index(index, self.widths)
    }

    /// See [`fractional_index_at_offset`].
    #[must_use]
    pub fn fractional_index_at_offset(&self, offset: T) -> T {
        fractional_index_at_offset(offset, self.widths)
    }

    /// See [`extent_for_index`].
    #[must_use]
    pub fn extent_for_index(&self, index: T) -> T {
        extent_for_index(index, self.widths)
    }

    /// Selection state of every tab, given the selected index.
    pub fn selection_states(&self, selected: usize) -> impl Iterator<Item = SelectionState> {
        (0..self.widths.len()).map(move |index| SelectionState::for_index(index, selected))
    }
}

impl TabStrip<'_, f64> {
    /// See [`indicator_rect`].
    #[must_use]
    pub fn indicator_rect(&self, index: f64, height: f64) -> Rect {
        indicator_rect(index, self.widths, height)
    }
}

/// Rectangle of the selection indicator for a selection position.
///
/// The rectangle starts at [`position_for_index`], spans [`extent_for_index`],
/// and covers `0..height` vertically in strip-local coordinates.
#[must_use]
pub fn indicator_rect(index: f64, widths: &[f64], height: f64) -> Rect {
    let x0 = position_for_index(index, widths);
    Rect::new(x0, 0.0, x0 + extent_for_index(index, widths), height)
}
