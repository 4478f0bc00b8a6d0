// SPDX-License-Identifier: MPL-2.0
//! Hero banner: badge, typed headline, date box, key facts and, on wide
//! windows, the image carousel card. The decorative backdrop behind it
//! follows the page scroll.

use crate::i18n::fluent::I18n;
use crate::ui::carousel;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::{accent_bar, BOLD};
use crate::ui::state::Layout;
use crate::ui::styles;
use crate::ui::typewriter::Typewriter;
use crate::ui::widgets::Backdrop;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length};
use std::path::Path;

/// The two typed lines of the hero heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Headline {
    Title,
    Subtitle,
}

impl Headline {
    /// i18n key of the revealed text.
    #[must_use]
    pub fn text_key(self) -> &'static str {
        match self {
            Headline::Title => "hero-title",
            Headline::Subtitle => "hero-subtitle",
        }
    }
}

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: Layout,
    pub title: &'a Typewriter,
    pub subtitle: &'a Typewriter,
    /// Present only while the carousel is mounted.
    pub carousel: Option<&'a carousel::State>,
    pub assets_dir: &'a Path,
    pub parallax_offset: f32,
}

/// Render the hero section.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, carousel::Message> {
    let text_column = build_text_column(&ctx);

    let body: Element<'_, carousel::Message> = match ctx.carousel {
        Some(state) if ctx.layout.shows_carousel() => Row::new()
            .spacing(spacing::XXL)
            .align_y(Vertical::Center)
            .push(Container::new(text_column).width(Length::FillPortion(1)))
            .push(
                Container::new(build_carousel_card(&ctx, state)).width(Length::FillPortion(1)),
            )
            .into(),
        _ => text_column,
    };

    let foreground = Container::new(
        Container::new(body)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding([spacing::XL, spacing::LG]),
    )
    .center(Length::Fill);

    Container::new(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(Backdrop::new(ctx.parallax_offset).into_element())
            .push(foreground),
    )
    .width(Length::Fill)
    .height(sizing::HERO_HEIGHT)
    .clip(true)
    .style(styles::container::section_alt)
    .into()
}

fn build_text_column<'a>(ctx: &ViewContext<'a>) -> Element<'a, carousel::Message> {
    let i18n = ctx.i18n;

    let badge = Container::new(Text::new(i18n.tr("hero-badge")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::MD])
        .style(styles::container::badge);

    let heading = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.title.visible().to_string())
                .size(typography::DISPLAY)
                .font(BOLD)
                .style(styles::text::primary),
        )
        .push(
            Text::new(ctx.subtitle.visible().to_string())
                .size(typography::DISPLAY)
                .font(BOLD)
                .style(styles::text::accent),
        );

    let date_box = Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(
                Text::new(i18n.tr("hero-dates"))
                    .size(typography::TITLE_SM)
                    .font(BOLD)
                    .style(styles::text::primary),
            )
            .push(Text::new("|").style(styles::text::accent))
            .push(
                Text::new(i18n.tr("hero-venue"))
                    .size(typography::BODY_LG)
                    .style(styles::text::primary),
            ),
    )
    .padding([spacing::SM, spacing::LG])
    .style(styles::container::accent_card);

    Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(badge)
        .push(heading)
        .push(accent_bar(sizing::ACCENT_BAR * 2.0 / 3.0))
        .push(date_box)
        .push(build_facts(i18n))
        .into()
}

fn build_facts<'a>(i18n: &I18n) -> Element<'a, carousel::Message> {
    let facts = [
        ("hero-fact-days-value", "hero-fact-days"),
        ("hero-fact-speakers-value", "hero-fact-speakers"),
        ("hero-fact-topics-value", "hero-fact-topics"),
    ];

    facts
        .into_iter()
        .fold(
            Row::new().spacing(spacing::MD).width(Length::Fill),
            |row, (value_key, label_key)| {
                row.push(
                    Column::new()
                        .width(Length::FillPortion(1))
                        .align_x(Horizontal::Center)
                        .spacing(spacing::XXS)
                        .push(
                            Text::new(i18n.tr(value_key))
                                .size(typography::FACT)
                                .font(BOLD)
                                .style(styles::text::primary),
                        )
                        .push(
                            Text::new(i18n.tr(label_key))
                                .size(typography::CAPTION)
                                .style(styles::text::muted),
                        ),
                )
            },
        )
        .into()
}

fn build_carousel_card<'a>(
    ctx: &ViewContext<'a>,
    state: &'a carousel::State,
) -> Element<'a, carousel::Message> {
    let i18n = ctx.i18n;

    let image = carousel::view(carousel::ViewContext {
        i18n,
        state,
        assets_dir: ctx.assets_dir,
    });

    let footer = Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .align_y(Vertical::Center)
                .push(Space::new().width(Length::Fill))
                .push(
                    Text::new(i18n.tr("hero-card-tag"))
                        .size(typography::CAPTION)
                        .font(iced::Font::MONOSPACE)
                        .style(styles::text::muted),
                ),
        )
        .push(
            Text::new(i18n.tr("hero-card-hint-images"))
                .size(typography::CAPTION)
                .style(styles::text::muted),
        )
        .push(
            Text::new(i18n.tr("hero-card-hint-size"))
                .size(typography::CAPTION)
                .style(styles::text::muted),
        );

    Container::new(
        Column::new()
            .push(image)
            .push(Container::new(footer).padding(spacing::LG)),
    )
    .clip(true)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CAROUSEL_IMAGES;
    use crate::ui::state::{RevealDelay, RotationInterval};

    fn typewriters() -> (Typewriter, Typewriter) {
        (
            Typewriter::new("Generative AI for", RevealDelay::new(100)),
            Typewriter::new("Image Processing & Healthcare", RevealDelay::new(80)),
        )
    }

    #[test]
    fn hero_renders_with_carousel_on_wide_layout() {
        let i18n = I18n::default();
        let (title, subtitle) = typewriters();
        let state = carousel::State::new(&CAROUSEL_IMAGES, RotationInterval::default())
            .expect("carousel images");
        let _element = view(ViewContext {
            i18n: &i18n,
            layout: Layout::Wide,
            title: &title,
            subtitle: &subtitle,
            carousel: Some(&state),
            assets_dir: Path::new("assets/site"),
            parallax_offset: 12.0,
        });
    }

    #[test]
    fn hero_renders_without_carousel_on_compact_layout() {
        let i18n = I18n::default();
        let (title, subtitle) = typewriters();
        let _element = view(ViewContext {
            i18n: &i18n,
            layout: Layout::Compact,
            title: &title,
            subtitle: &subtitle,
            carousel: None,
            assets_dir: Path::new("assets/site"),
            parallax_offset: 0.0,
        });
    }

    #[test]
    fn headlines_map_to_distinct_keys() {
        assert_ne!(Headline::Title.text_key(), Headline::Subtitle.text_key());
    }
}
