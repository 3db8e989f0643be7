// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Whether a tab is the current selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SelectionState {
    /// The tab is selected.
    Selected,
    /// The tab is not selected.
    #[default]
    NotSelected,
}

impl SelectionState {
    /// Returns [`SelectionState::Selected`] when `index == selected`.
    #[must_use]
    #[inline]
    pub const fn for_index(index: usize, selected: usize) -> Self {
        if index == selected {
            Self::Selected
        } else {
            Self::NotSelected
        }
    }

    /// Returns `true` for [`SelectionState::Selected`].
    #[must_use]
    #[inline]
    pub const fn is_selected(self) -> bool {
        matches!(self, Self::Selected)
    }
}

impl From<bool> for SelectionState {
    fn from(selected: bool) -> Self {
        if selected {
            Self::Selected
        } else {
            Self::NotSelected
        }
    }
}
