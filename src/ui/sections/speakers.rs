// SPDX-License-Identifier: MPL-2.0
//! Speaker roster grid.

use crate::content::{initials, Speaker, SPEAKERS};
use crate::i18n::fluent::I18n;
use crate::media::ImageStatus;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::{framed_image, grid, heading, section, BOLD, SEMIBOLD};
use crate::ui::state::Layout;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{Element, Length};
use std::path::Path;

/// Contextual data needed to render the speaker grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: Layout,
    pub assets_dir: &'a Path,
    /// Probe results, indexed like [`SPEAKERS`].
    pub portraits: &'a [ImageStatus],
}

/// Render the speakers section.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let cards = SPEAKERS
        .iter()
        .enumerate()
        .map(|(index, speaker)| {
            let status = ctx.portraits.get(index).cloned().unwrap_or_default();
            build_card(ctx.i18n, ctx.assets_dir, speaker, &status)
        })
        .collect();

    let content = Column::new()
        .spacing(spacing::XXL)
        .width(Length::Fill)
        .push(heading(
            ctx.i18n.tr("speakers-title"),
            Some(ctx.i18n.tr("speakers-intro")),
        ))
        .push(grid(cards, ctx.layout.grid_columns(), spacing::LG));

    section(content, true)
}

fn build_card<'a, Message: 'a>(
    i18n: &I18n,
    assets_dir: &Path,
    speaker: &Speaker,
    status: &ImageStatus,
) -> Element<'a, Message> {
    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(
            Text::new(speaker.name)
                .size(typography::TITLE_SM)
                .font(SEMIBOLD)
                .style(styles::text::primary),
        )
        .push(
            Text::new(speaker.role)
                .size(typography::BODY)
                .style(styles::text::accent),
        )
        .push(
            Text::new(speaker.affiliation)
                .size(typography::BODY)
                .style(styles::text::secondary),
        )
        .push(
            Text::new(format!("{}: {}", i18n.tr("speakers-website"), speaker.website))
                .size(typography::CAPTION)
                .style(styles::text::muted),
        );

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(portrait(assets_dir, speaker, status))
            .push(details),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

/// Portrait frame. Failed loads keep the empty frame; speakers without a
/// portrait get their initials instead.
fn portrait<'a, Message: 'a>(
    assets_dir: &Path,
    speaker: &Speaker,
    status: &ImageStatus,
) -> Element<'a, Message> {
    match speaker.image {
        Some(_) if status.is_failed() => Container::new(Space::new())
            .width(sizing::PORTRAIT)
            .height(sizing::PORTRAIT)
            .style(styles::container::image_placeholder)
            .into(),
        Some(name) => framed_image(assets_dir, name, sizing::PORTRAIT, sizing::PORTRAIT),
        None => Container::new(
            Text::new(initials(speaker.name))
                .size(typography::TITLE_MD)
                .font(BOLD),
        )
        .center(sizing::PORTRAIT)
        .style(styles::container::icon_tile)
        .into(),
    }
}
