// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Photo size**: The two square sizes a gallery cell moves between
//! - **Transition**: Size animation timing
//! - **Grid**: Gallery layout

// ==========================================================================
// Photo Size Defaults
// ==========================================================================

/// Side length of a photo in its resting state (logical pixels).
pub const PHOTO_SIZE_SMALL: f32 = 300.0;

/// Ratio between the enlarged and the resting side length.
pub const PHOTO_ENLARGE_FACTOR: f32 = 2.0;

/// Side length of an enlarged photo (logical pixels).
pub const PHOTO_SIZE_LARGE: f32 = PHOTO_SIZE_SMALL * PHOTO_ENLARGE_FACTOR;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default duration of the enlarge/shrink animation (milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Minimum transition duration. Zero snaps straight to the target.
pub const MIN_TRANSITION_MS: u64 = 0;

/// Maximum transition duration (milliseconds).
pub const MAX_TRANSITION_MS: u64 = 5_000;

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Number of cells per gallery row.
pub const GRID_COLUMNS: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_size_is_a_multiple_of_small() {
        assert!((PHOTO_SIZE_LARGE - 600.0).abs() < f32::EPSILON);
        assert!(PHOTO_SIZE_LARGE > PHOTO_SIZE_SMALL);
    }

    #[test]
    fn default_transition_is_within_bounds() {
        assert!((MIN_TRANSITION_MS..=MAX_TRANSITION_MS).contains(&DEFAULT_TRANSITION_MS));
    }
}
