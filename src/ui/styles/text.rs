// SPDX-License-Identifier: MPL-2.0
//! Text color styles.

use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::Theme;

pub fn primary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_primary),
    }
}

pub fn secondary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_muted),
    }
}

/// Brand teal, used for headings accents and links.
pub fn accent(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).accent),
    }
}

/// Lighter teal for card headings.
pub fn accent_soft(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).accent_soft),
    }
}
