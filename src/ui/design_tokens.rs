// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the page's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (gray surfaces, teal accents)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Breakpoint**: Window widths switching the page layout
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Elevation shadows

## Examples

```
use summer_school::ui::design_tokens::{palette, opacity, spacing};
use iced::Color;

let glow = Color {
    a: opacity::GLOW,
    ..palette::TEAL_500
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const BLACK: Color = Color::BLACK;

    // Grayscale
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);

    // Brand colors (teal scale)
    pub const TEAL_300: Color = Color::from_rgb(0.369, 0.918, 0.831);
    pub const TEAL_400: Color = Color::from_rgb(0.176, 0.831, 0.749);
    pub const TEAL_500: Color = Color::from_rgb(0.078, 0.722, 0.651);
    pub const TEAL_600: Color = Color::from_rgb(0.051, 0.580, 0.533);
    pub const TEAL_700: Color = Color::from_rgb(0.059, 0.463, 0.431);
    pub const CYAN_500: Color = Color::from_rgb(0.024, 0.714, 0.831);

    /// Active carousel indicator.
    pub const INDIGO_600: Color = Color::from_rgb(0.310, 0.275, 0.898);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Blurred glow circles behind the hero.
    pub const GLOW: f32 = 0.1;
    /// Accent tints (chips, buttons, borders).
    pub const TINT: f32 = 0.2;
    pub const BORDER: f32 = 0.3;
    /// Caption gradient over the carousel image.
    pub const CAPTION: f32 = 0.7;
    pub const NAVBAR: f32 = 0.9;
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
    pub const SECTION: f32 = 96.0; // 12 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const NAVBAR_HEIGHT: f32 = 64.0;
    pub const HERO_HEIGHT: f32 = 640.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1280.0;
    pub const PROSE_MAX_WIDTH: f32 = 768.0;

    pub const CAROUSEL_HEIGHT: f32 = 256.0;
    pub const CAROUSEL_DOT: f32 = 8.0;
    pub const CAMPUS_IMAGE_HEIGHT: f32 = 256.0;

    pub const PORTRAIT: f32 = 80.0;
    pub const CONTACT_AVATAR: f32 = 40.0;
    pub const ICON_TILE: f32 = 48.0;

    /// Width of the underline accents below headings.
    pub const ACCENT_BAR: f32 = 96.0;
    pub const ACCENT_BAR_THICKNESS: f32 = 4.0;

    /// Hero backdrop grid cell.
    pub const GRID_CELL: f32 = 60.0;
}

// ============================================================================
// Layout Breakpoints
// ============================================================================

pub mod breakpoint {
    /// Below this width the navigation collapses into a menu.
    pub const SM: f32 = 640.0;
    /// From this width the hero shows its image carousel.
    pub const LG: f32 = 1024.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: hero heading
    //! - Titles: section headings, card headings
    //! - Body: primary content text
    //! - Caption: badges, hints, footer lines

    pub const DISPLAY: f32 = 44.0;
    pub const FACT: f32 = 30.0;
    pub const TITLE_LG: f32 = 34.0;
    pub const TITLE_MD: f32 = 24.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 17.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Scale
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    assert!(opacity::GLOW < opacity::TINT);

    assert!(breakpoint::SM < breakpoint::LG);
    assert!(sizing::CONTENT_MAX_WIDTH > breakpoint::LG);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
        assert_eq!(spacing::SECTION, spacing::XXL * 2.0);
    }

    #[test]
    fn accent_is_teal() {
        assert!(palette::TEAL_400.g > palette::TEAL_400.r);
        assert!(palette::TEAL_400.b > palette::TEAL_400.r);
    }
}
