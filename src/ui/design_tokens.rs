// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the gallery views.
//!
//! - **Palette**: Base colors
//! - **Spacing**: Spacing scale (8px grid)
//! - **Typography**: Font size scale
//! - **Radius**: Border radii

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Empty-state message.
    pub const TITLE_MD: f32 = 20.0;

    pub const BODY: f32 = 14.0;

    /// Tooltip captions.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_grid() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::XS * 3.0);
    }

    #[test]
    fn text_gray_contrasts_with_light_surface() {
        assert!(palette::GRAY_700.r < palette::WHITE.r - 0.5);
        assert!(palette::GRAY_200.r > palette::GRAY_900.r + 0.5);
    }
}
