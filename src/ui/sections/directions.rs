// SPDX-License-Identifier: MPL-2.0
//! "How to reach" section: venue address, transport options, campus photo,
//! recommended transportation and the coordinator contact.

use crate::content::{CAMPUS_IMAGE, COORDINATOR, MAP_URL, RECOMMENDED, TRANSPORTS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::{bullet, framed_image, heading, section, BOLD, SEMIBOLD};
use crate::ui::state::Layout;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length};
use std::path::Path;

/// Glyphs shown in the transport tiles, in [`TRANSPORTS`] order.
const TRANSPORT_ICONS: [&str; 3] = ["✈", "🚆", "🚌"];

/// Contextual data needed to render the directions section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: Layout,
    pub assets_dir: &'a Path,
}

/// Render the directions section.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let location = build_location_card(i18n);
    let side = Column::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .push(build_campus_view(i18n, ctx.assets_dir))
        .push(build_recommended(i18n));

    let body: Element<'a, Message> = if ctx.layout.shows_carousel() {
        Row::new()
            .spacing(spacing::XXL)
            .push(Container::new(location).width(Length::FillPortion(1)))
            .push(Container::new(side).width(Length::FillPortion(1)))
            .into()
    } else {
        Column::new()
            .spacing(spacing::XL)
            .push(location)
            .push(side)
            .into()
    };

    let content = Column::new()
        .spacing(spacing::XXL)
        .width(Length::Fill)
        .push(heading(
            i18n.tr("directions-title"),
            Some(i18n.tr("directions-intro")),
        ))
        .push(body)
        .push(build_assistance(i18n));

    section(content, false)
}

fn build_location_card<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let address = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(i18n.tr("directions-address-title"))
                .size(typography::BODY_LG)
                .font(SEMIBOLD)
                .style(styles::text::accent_soft),
        )
        .push(
            Text::new(i18n.tr("directions-address"))
                .size(typography::BODY)
                .style(styles::text::secondary),
        );

    let transports = TRANSPORTS.into_iter().zip(TRANSPORT_ICONS).fold(
        Column::new().spacing(spacing::LG),
        |column, ((title_key, body_key), icon)| {
            column.push(
                Row::new()
                    .spacing(spacing::MD)
                    .push(
                        Container::new(Text::new(icon).size(typography::TITLE_SM))
                            .center(sizing::ICON_TILE)
                            .style(styles::container::icon_tile),
                    )
                    .push(
                        Column::new()
                            .spacing(spacing::XXS)
                            .width(Length::Fill)
                            .push(
                                Text::new(i18n.tr(title_key))
                                    .size(typography::BODY)
                                    .font(SEMIBOLD)
                                    .style(styles::text::primary),
                            )
                            .push(
                                Text::new(i18n.tr(body_key))
                                    .size(typography::BODY_SM)
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
                Text::new(i18n.tr("directions-campus-title"))
                    .size(typography::TITLE_MD)
                    .font(BOLD)
                    .style(styles::text::primary),
            )
            .push(address)
            .push(
                Text::new(i18n.tr("directions-transport-title"))
                    .size(typography::BODY_LG)
                    .font(SEMIBOLD)
                    .style(styles::text::accent_soft),
            )
            .push(transports),
    )
    .padding(spacing::XL)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn build_campus_view<'a, Message: 'a>(i18n: &I18n, assets_dir: &Path) -> Element<'a, Message> {
    let caption = Container::new(
        Text::new(i18n.tr("directions-campus-caption")).size(typography::BODY_SM),
    )
    .padding([spacing::XS, spacing::MD])
    .width(Length::Fill)
    .style(styles::container::caption);

    let photo = Stack::new()
        .width(Length::Fill)
        .height(sizing::CAMPUS_IMAGE_HEIGHT)
        .push(framed_image(
            assets_dir,
            CAMPUS_IMAGE,
            Length::Fill,
            sizing::CAMPUS_IMAGE_HEIGHT,
        ))
        .push(
            Column::new()
                .height(Length::Fill)
                .push(Space::new().height(Length::Fill))
                .push(caption),
        );

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(
                Text::new(i18n.tr("directions-campus-view"))
                    .size(typography::TITLE_SM)
                    .font(SEMIBOLD)
                    .style(styles::text::primary),
            )
            .push(Container::new(photo).clip(true)),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn build_recommended<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let items = RECOMMENDED.into_iter().fold(
        Column::new().spacing(spacing::XS),
        |column, key| column.push(bullet(i18n.tr(key))),
    );

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(
                Text::new(i18n.tr("directions-recommended-title"))
                    .size(typography::TITLE_SM)
                    .font(SEMIBOLD)
                    .style(styles::text::primary),
            )
            .push(items)
            .push(
                Text::new(format!("{} ↗ {MAP_URL}", i18n.tr("directions-map-link")))
                    .size(typography::BODY_SM)
                    .style(styles::text::accent),
            ),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::accent_card)
    .into()
}

fn build_assistance<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(
                Text::new(i18n.tr("directions-assistance"))
                    .size(typography::BODY_LG)
                    .style(styles::text::secondary),
            )
            .push(
                Text::new(format!(
                    "{}: {} ({})",
                    i18n.tr("directions-coordinator"),
                    COORDINATOR.name,
                    COORDINATOR.mailto()
                ))
                .size(typography::BODY)
                .font(SEMIBOLD)
                .style(styles::text::accent),
            ),
    )
    .center_x(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_render_in_every_layout() {
        let i18n = I18n::default();
        for layout in [Layout::Compact, Layout::Medium, Layout::Wide] {
            let _element: Element<'_, ()> = view(ViewContext {
                i18n: &i18n,
                layout,
                assets_dir: Path::new("assets/site"),
            });
        }
    }

    #[test]
    fn every_transport_has_an_icon() {
        assert_eq!(TRANSPORTS.len(), TRANSPORT_ICONS.len());
    }

    #[test]
    fn every_directions_key_is_translated() {
        let i18n = I18n::new(Some("en-US".to_string()), &Default::default());
        let keys = TRANSPORTS
            .iter()
            .flat_map(|(title, body)| [*title, *body])
            .chain(RECOMMENDED);
        for key in keys {
            assert!(!i18n.tr(key).starts_with("MISSING"), "{key}");
        }
    }
}
