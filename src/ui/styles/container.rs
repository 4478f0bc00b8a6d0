// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Whole-page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_page)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Alternate background used by every other section.
pub fn section_alt(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_section)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Sticky navigation bar, slightly translucent.
pub fn navbar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::NAVBAR,
            ..colors.surface_page
        })),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Compact-layout dropdown holding the section links.
pub fn dropdown(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_card)),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Rounded surface for speaker, objective and technology cards.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_card)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Card with an accent-tinted border (date box, contact card).
pub fn accent_card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        border: Border {
            color: Color {
                a: opacity::BORDER,
                ..colors.accent
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..card(theme)
    }
}

/// Pill label (event badge, topic chips).
pub fn chip(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_section)),
        text_color: Some(colors.text_secondary),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Accent-colored pill label.
pub fn badge(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        text_color: Some(colors.accent),
        border: Border {
            color: Color {
                a: opacity::BORDER,
                ..colors.accent
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..chip(theme)
    }
}

/// Round tile holding an emoji, a number or initials.
pub fn icon_tile(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TINT,
            ..colors.accent
        })),
        text_color: Some(colors.accent),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Short accent underline below section headings.
pub fn accent_bar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.accent)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dark gradient strip under the carousel caption.
pub fn caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::CAPTION,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Empty image area shown while an image is missing or failed to load.
pub fn image_placeholder(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_section)),
        text_color: Some(colors.text_muted),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_card_keeps_card_background() {
        let card_style = card(&Theme::Dark);
        let accent = accent_card(&Theme::Dark);
        assert_eq!(card_style.background, accent.background);
        assert_ne!(card_style.border.color, accent.border.color);
    }

    #[test]
    fn page_follows_theme() {
        let light = page(&Theme::Light);
        let dark = page(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }
}
