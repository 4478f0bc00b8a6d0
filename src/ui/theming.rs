// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes for the page.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_page: Color,
    pub surface_section: Color,
    pub surface_card: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Brand colors
    pub accent: Color,
    pub accent_strong: Color,
    pub accent_soft: Color,

    pub border: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_page: palette::WHITE,
            surface_section: palette::GRAY_100,
            surface_card: palette::WHITE,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_muted: palette::GRAY_500,

            accent: palette::TEAL_600,
            accent_strong: palette::TEAL_700,
            accent_soft: palette::TEAL_500,

            border: palette::GRAY_200,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_page: palette::GRAY_900,
            surface_section: palette::GRAY_800,
            surface_card: palette::GRAY_800,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,
            text_muted: palette::GRAY_400,

            accent: palette::TEAL_400,
            accent_strong: palette::TEAL_500,
            accent_soft: palette::TEAL_300,

            border: palette::GRAY_700,
        }
    }

    /// Picks the scheme matching an Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if matches!(theme, Theme::Light) {
            Self::light()
        } else {
            Self::dark()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_page.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_page.r < 0.2);
    }

    #[test]
    fn both_themes_use_teal_accent() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert!(scheme.accent.g > scheme.accent.r);
            assert!(scheme.accent.b > scheme.accent.r);
        }
    }

    #[test]
    fn for_theme_matches_iced_theme() {
        let light = ColorScheme::for_theme(&Theme::Light);
        let dark = ColorScheme::for_theme(&Theme::Dark);
        assert!(light.surface_page.r > dark.surface_page.r);
    }

    #[test]
    fn explicit_modes_map_to_themes() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
        // System mode depends on the desktop settings
        let _ = ThemeMode::System.is_dark();
    }
}
