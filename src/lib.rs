// SPDX-License-Identifier: MPL-2.0
//! `petal_grid` is a small photo gallery built with the Iced GUI framework.
//!
//! Photos listed in a bundled XML manifest are shown in a two-column grid.
//! Clicking a photo smoothly enlarges it; clicking again shrinks it back.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod ui;
