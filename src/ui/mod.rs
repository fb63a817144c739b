// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages up"
//! pattern.
//!
//! - [`gallery`] - The photo grid and its tap-to-enlarge cells
//! - [`design_tokens`] - Design system constants (colors, spacing, typography)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod theming;
