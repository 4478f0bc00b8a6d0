// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Inline navigation link: plain text that takes the accent color on hover.
pub fn nav_link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.accent,
        _ => colors.text_secondary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Entry of the compact-layout dropdown menu.
pub fn menu_item(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(colors.surface_section)),
            text_color: colors.accent,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: colors.text_secondary,
            border: Border::default(),
            ..Default::default()
        },
    }
}

/// Hamburger toggle; highlighted while the menu is open.
pub fn menu_toggle(open: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let highlighted = open || matches!(status, button::Status::Hovered);

        button::Style {
            background: highlighted.then(|| Background::Color(colors.surface_section)),
            text_color: if highlighted {
                colors.accent
            } else {
                colors.text_secondary
            },
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Emphasized "Contact Us" link: accent tint with an accent border.
pub fn contact(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let tint = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::BORDER,
        _ => opacity::TINT,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: tint,
            ..colors.accent_strong
        })),
        text_color: colors.accent,
        border: Border {
            color: Color {
                a: opacity::BORDER,
                ..colors.accent_strong
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Locale switch entry; the active locale keeps the accent tint.
pub fn language(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);

        button::Style {
            background: (active || hovered).then(|| {
                Background::Color(Color {
                    a: opacity::TINT,
                    ..colors.accent_strong
                })
            }),
            text_color: if active {
                colors.accent
            } else {
                colors.text_secondary
            },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Carousel indicator dot.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = match (active, status) {
            (true, _) => palette::INDIGO_600,
            (false, button::Status::Hovered) => palette::GRAY_400,
            (false, _) => palette::GRAY_300,
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_dot_is_highlighted() {
        let active = dot(true)(&Theme::Dark, button::Status::Active);
        let inactive = dot(false)(&Theme::Dark, button::Status::Active);
        assert_ne!(active.background, inactive.background);
        assert_eq!(
            active.background,
            Some(Background::Color(palette::INDIGO_600))
        );
    }

    #[test]
    fn nav_link_takes_accent_on_hover() {
        let idle = nav_link(&Theme::Dark, button::Status::Active);
        let hovered = nav_link(&Theme::Dark, button::Status::Hovered);
        assert_eq!(hovered.text_color, ColorScheme::dark().accent);
        assert_ne!(idle.text_color, hovered.text_color);
    }

    #[test]
    fn contact_tint_strengthens_on_hover() {
        let idle = contact(&Theme::Dark, button::Status::Active);
        let hovered = contact(&Theme::Dark, button::Status::Hovered);
        assert_ne!(idle.background, hovered.background);
        assert_eq!(idle.text_color, ColorScheme::dark().accent);
    }

    #[test]
    fn menu_toggle_is_highlighted_while_open() {
        let open = menu_toggle(true)(&Theme::Dark, button::Status::Active);
        let closed = menu_toggle(false)(&Theme::Dark, button::Status::Active);
        assert!(open.background.is_some());
        assert!(closed.background.is_none());
    }

    #[test]
    fn active_language_keeps_accent() {
        let active = language(true)(&Theme::Light, button::Status::Active);
        let inactive = language(false)(&Theme::Light, button::Status::Active);
        assert_eq!(active.text_color, ColorScheme::light().accent);
        assert!(active.background.is_some());
        assert!(inactive.background.is_none());
    }
}
