// SPDX-License-Identifier: MPL-2.0
//! About section: intro, topic chips, motivation, objectives and technologies.

use crate::content::{AUDIENCE, OBJECTIVES, TECHNOLOGIES, TOPIC_CHIPS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::{bullet, grid, heading, section, BOLD, SEMIBOLD};
use crate::ui::state::Layout;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the about section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: Layout,
}

/// Render the about section.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let why = build_why_card(i18n);
    let objectives = build_objectives_card(i18n);
    let columns: Element<'a, Message> = if ctx.layout.shows_carousel() {
        Row::new()
            .spacing(spacing::XXL)
            .push(Container::new(why).width(Length::FillPortion(1)))
            .push(Container::new(objectives).width(Length::FillPortion(1)))
            .into()
    } else {
        Column::new()
            .spacing(spacing::XL)
            .push(why)
            .push(objectives)
            .into()
    };

    let content = Column::new()
        .spacing(spacing::XXL)
        .width(Length::Fill)
        .push(heading(i18n.tr("about-title"), None))
        .push(build_intro(i18n))
        .push(columns)
        .push(build_technologies(i18n, ctx.layout));

    section(content, false)
}

fn build_intro<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let badge = Container::new(Text::new(i18n.tr("about-badge")).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::MD])
        .style(styles::container::badge);

    let chips = TOPIC_CHIPS.into_iter().fold(
        Row::new().spacing(spacing::SM),
        |row, key| {
            row.push(
                Container::new(Text::new(i18n.tr(key)).size(typography::BODY_SM))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::container::chip),
            )
        },
    );

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .push(badge)
            .push(
                Text::new(i18n.tr("about-intro"))
                    .size(typography::BODY_LG)
                    .align_x(Horizontal::Center)
                    .style(styles::text::secondary),
            )
            .push(chips.wrap()),
    )
    .max_width(sizing::PROSE_MAX_WIDTH)
    .center_x(Length::Fill)
    .into()
}

fn build_why_card<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let audience = AUDIENCE.into_iter().fold(
        Column::new().spacing(spacing::XS),
        |column, key| column.push(bullet(i18n.tr(key))),
    );

    let audience_box = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(
                Text::new(i18n.tr("about-audience-title"))
                    .size(typography::TITLE_SM)
                    .font(SEMIBOLD)
                    .style(styles::text::primary),
            )
            .push(audience),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::section_alt);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(
                Text::new(i18n.tr("about-why-title"))
                    .size(typography::TITLE_MD)
                    .font(SEMIBOLD)
                    .style(styles::text::primary),
            )
            .push(
                Text::new(i18n.tr("about-why-body"))
                    .size(typography::BODY)
                    .style(styles::text::secondary),
            )
            .push(audience_box),
    )
    .padding(spacing::XL)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn build_objectives_card<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let objectives = OBJECTIVES.into_iter().enumerate().fold(
        Column::new().spacing(spacing::MD),
        |column, (index, (title_key, body_key))| {
            let number = Container::new(
                Text::new((index + 1).to_string())
                    .size(typography::BODY)
                    .font(BOLD),
            )
            .center(sizing::ICON_TILE * 0.6)
            .style(styles::container::icon_tile);

            column.push(
                Row::new()
                    .spacing(spacing::MD)
                    .push(number)
                    .push(
                        Column::new()
                            .spacing(spacing::XXS)
                            .push(
                                Text::new(i18n.tr(title_key))
                                    .size(typography::BODY_LG)
                                    .font(SEMIBOLD)
                                    .style(styles::text::accent_soft),
                            )
                            .push(
                                Text::new(i18n.tr(body_key))
                                    .size(typography::BODY)
                                    .style(styles::text::muted),
                            ),
                    ),
            )
        },
    );

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(
                Text::new(i18n.tr("about-objectives-title"))
                    .size(typography::TITLE_MD)
                    .font(BOLD)
                    .style(styles::text::primary),
            )
            .push(objectives),
    )
    .padding(spacing::XL)
    .width(Length::Fill)
    .style(styles::container::accent_card)
    .into()
}

fn build_technologies<'a, Message: 'a>(i18n: &I18n, layout: Layout) -> Element<'a, Message> {
    let tiles = TECHNOLOGIES
        .iter()
        .map(|technology| {
            Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .width(Length::Fill)
                .push(Text::new(technology.icon).size(typography::TITLE_MD))
                .push(
                    Text::new(technology.name)
                        .size(typography::BODY)
                        .font(SEMIBOLD)
                        .style(styles::text::primary),
                )
                .push(
                    Text::new(technology.description)
                        .size(typography::CAPTION)
                        .align_x(Horizontal::Center)
                        .style(styles::text::muted),
                )
                .into()
        })
        .collect();

    let columns = if layout.is_compact() { 3 } else { 6 };

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(
            Text::new(i18n.tr("about-technologies-title"))
                .size(typography::TITLE_SM)
                .font(SEMIBOLD)
                .style(styles::text::primary),
        )
        .push(grid(tiles, columns, spacing::MD))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_renders_in_every_layout() {
        let i18n = I18n::default();
        for layout in [Layout::Compact, Layout::Medium, Layout::Wide] {
            let _element: Element<'_, ()> = view(ViewContext {
                i18n: &i18n,
                layout,
            });
        }
    }

    #[test]
    fn every_about_key_is_translated() {
        let i18n = I18n::new(Some("en-US".to_string()), &Default::default());
        let keys = TOPIC_CHIPS
            .iter()
            .chain(AUDIENCE.iter())
            .chain(OBJECTIVES.iter().flat_map(|(title, body)| [title, body]));
        for key in keys {
            assert!(!i18n.tr(key).starts_with("MISSING"), "{key}");
        }
    }
}
