// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the application's design tokens, following the W3C Design
Tokens standard.

## Organization

- **Palette**: Base colors and the default toast color scheme
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (purple scale, matching the showcase accent)
    pub const PRIMARY_400: Color = Color::from_rgb8(0xb0, 0x9a, 0xe0);
    pub const PRIMARY_500: Color = Color::from_rgb8(0x67, 0x50, 0xa4);
    pub const PRIMARY_700: Color = Color::from_rgb8(0x4a, 0x38, 0x7a);

    // Default toast color scheme (dark theme)
    pub const TOAST_BG: Color = Color::from_rgb8(0x16, 0x16, 0x16);
    pub const TOAST_ACCENT: Color = WHITE;
    pub const TOAST_TITLE: Color = Color::from_rgb8(0xf5, 0xf5, 0xf5);
    pub const TOAST_CONTENT: Color = Color::from_rgb8(0xc0, 0xc0, 0xc0);
    pub const TOAST_BODY_BORDER: Color = Color::from_rgb8(0x30, 0x30, 0x30);
    pub const TOAST_ICON_BORDER: Color = Color::from_rgb8(0x36, 0x36, 0x36);
    pub const TOAST_CLOSE_BG: Color = Color::from_rgb8(0x24, 0x24, 0x24);
    pub const TOAST_CLOSE_FG: Color = Color::from_rgb8(0xf5, 0xf5, 0xf5);
    pub const TOAST_CLOSE_HOVER_BG: Color = WHITE;
    pub const TOAST_CLOSE_HOVER_FG: Color = Color::from_rgb8(0x0a, 0x0a, 0x0a);
    pub const TOAST_TIMER_BG: Color = Color::from_rgb8(0x33, 0x33, 0x33);
    pub const TOAST_TIMER_FILL: Color = WHITE;
    pub const TOAST_SATELLITE: Color = Color::from_rgb8(0x36, 0x36, 0x36);

    // Showcase page background
    pub const PAGE_BG: Color = BLACK;
    pub const SEPARATOR: Color = Color::from_rgb8(0x16, 0x16, 0x16);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Toast geometry
    /// Default maximum toast width when the container does not override it.
    pub const TOAST_MAX_WIDTH: f32 = 360.0;
    /// Fallback toast height used until the rendering layer reports a
    /// measurement for a freshly shown toast.
    pub const TOAST_ESTIMATED_HEIGHT: f32 = 96.0;
    /// Side length of the square type-icon container.
    pub const TYPE_ICON_CONTAINER: f32 = 48.0;
    /// Height of the timer bar at the bottom of the toast body.
    pub const TIMER_BAR_HEIGHT: f32 = 4.0;
    /// Close button hit target.
    pub const CLOSE_BUTTON: f32 = 24.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - Page heading
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Section headers
    pub const TITLE_MD: f32 = 20.0;

    /// Toast title default size
    pub const TOAST_TITLE: f32 = 16.0;

    /// Standard body - Most UI text, toast content default size
    pub const BODY: f32 = 14.0;

    /// Caption - Hints, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, icon container outline
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Toast body border
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::TOAST_MAX_WIDTH > sizing::TYPE_ICON_CONTAINER);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TOAST_TITLE);
    assert!(typography::TOAST_TITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
