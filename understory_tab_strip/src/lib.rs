// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tab_strip --heading-base-level=0

//! Understory Tab Strip: position resolution for variable-width tab strips.
//!
//! A floating tab bar lets the user drag across its tabs and animates a
//! selection indicator (a "pill") between them. Two small numeric mappings sit
//! underneath that interaction:
//!
//! - [`closest_index`]: a horizontal pointer offset to the tab under it.
//! - [`position_for_index`]: a possibly fractional selection position to the
//!   indicator's left edge, interpolating linearly while the selection moves
//!   from one tab to the next.
//!
//! Around those, the crate offers [`fractional_index_at_offset`] (the inverse
//! of `position_for_index`, for an indicator that follows a drag),
//! [`extent_for_index`] (the indicator width blended between neighbouring
//! tabs), [`indicator_rect`], and [`SelectionState`]. [`TabStrip`] bundles the
//! same queries as methods over one borrowed widths slice.
//!
//! The crate is stateless. Host frameworks own the current selection, drag
//! tracking, and animation, and are responsible for:
//!
//! - Measuring tab widths once per layout pass, in strip order.
//! - Converting pointer positions into strip-local offsets.
//! - Passing the current (possibly mid-animation) selection position in.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_tab_strip::{closest_index, position_for_index};
//!
//! let widths = [100.0, 100.0, 100.0];
//!
//! assert_eq!(closest_index(50.0, &widths), 0);
//! // Boundaries belong to the tab on the right.
//! assert_eq!(closest_index(100.0, &widths), 1);
//! // Past the end clamps to the last tab.
//! assert_eq!(closest_index(1000.0, &widths), 2);
//!
//! assert_eq!(position_for_index(1.5, &widths), 150.0);
//! ```
//!
//! Widths, offsets, and selection positions share a caller-chosen 1D
//! coordinate space (typically logical pixels). Widths must be finite and
//! non-negative and [`closest_index`] needs at least one tab; these are checked
//! with debug assertions only.
//!
//! This crate is `no_std`.

#![no_std]

mod resolve;
mod scalar;
mod selection_state;
mod strip;

pub use resolve::{
    closest_index, extent_for_index, fractional_index_at_offset, position_for_index, total_extent,
};
pub use scalar::Scalar;
pub use selection_state::SelectionState;
pub use strip::{TabStrip, indicator_rect};
