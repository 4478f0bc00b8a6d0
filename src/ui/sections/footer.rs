// SPDX-License-Identifier: MPL-2.0
//! Page footer: coordinator contact, quick links and the copyright line.
//!
//! Quick links reuse the navbar messages so a click scrolls exactly like the
//! matching navbar entry.

use crate::content::{initials, COORDINATOR, FOOTER_LINKS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::navbar;
use crate::ui::sections::{framed_image, BOLD, SEMIBOLD};
use crate::ui::state::Layout;
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};
use std::path::Path;

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: Layout,
    pub assets_dir: &'a Path,
    /// Shown in the copyright line.
    pub year: i32,
    /// Whether the coordinator avatar failed to load.
    pub avatar_failed: bool,
}

/// Render the footer.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, navbar::Message> {
    let i18n = ctx.i18n;

    let title = Text::new(i18n.tr("footer-title"))
        .size(typography::TITLE_SM)
        .font(BOLD)
        .style(styles::text::accent);

    let contact = build_contact(&ctx);
    let links = build_links(i18n);

    let columns: Element<'_, navbar::Message> = if ctx.layout.is_compact() {
        Column::new()
            .spacing(spacing::XL)
            .push(contact)
            .push(links)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XXL)
            .push(Container::new(contact).width(Length::FillPortion(2)))
            .push(Container::new(links).width(Length::FillPortion(1)))
            .into()
    };

    let bottom = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(
            Text::new(copyright(i18n, ctx.year))
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        )
        .push(
            Text::new(i18n.tr("footer-event-line"))
                .size(typography::CAPTION)
                .style(styles::text::muted),
        )
        .push(
            Text::new(i18n.tr("footer-credit"))
                .size(typography::CAPTION)
                .style(styles::text::muted),
        );

    let content = Column::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .push(title)
        .push(columns)
        .push(bottom);

    Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding([spacing::XXL, spacing::LG]),
    )
    .center_x(Length::Fill)
    .style(styles::container::section_alt)
    .into()
}

/// Copyright line for `year`.
#[must_use]
pub fn copyright(i18n: &I18n, year: i32) -> String {
    let mut args = FluentArgs::new();
    args.set("year", year);
    i18n.tr_with_args("footer-copyright", &args)
}

fn build_contact<'a>(ctx: &ViewContext<'a>) -> Element<'a, navbar::Message> {
    let i18n = ctx.i18n;

    let avatar: Element<'a, navbar::Message> = if ctx.avatar_failed {
        Container::new(
            Text::new(initials(COORDINATOR.name))
                .size(typography::BODY_SM)
                .font(BOLD),
        )
        .center(sizing::CONTACT_AVATAR)
        .style(styles::container::icon_tile)
        .into()
    } else {
        framed_image(
            ctx.assets_dir,
            COORDINATOR.image,
            sizing::CONTACT_AVATAR,
            sizing::CONTACT_AVATAR,
        )
    };

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(COORDINATOR.name)
                .size(typography::BODY)
                .font(SEMIBOLD)
                .style(styles::text::primary),
        )
        .push(
            Text::new(format!("{}: {}", i18n.tr("footer-email"), COORDINATOR.email))
                .size(typography::BODY_SM)
                .style(styles::text::secondary),
        )
        .push(
            Text::new(format!("{}: {}", i18n.tr("footer-profile"), COORDINATOR.profile))
                .size(typography::CAPTION)
                .style(styles::text::muted),
        );

    Column::new()
        .spacing(spacing::MD)
        .push(
            Text::new(i18n.tr("footer-contact-title"))
                .size(typography::BODY_LG)
                .font(SEMIBOLD)
                .style(styles::text::primary),
        )
        .push(
            Row::new()
                .spacing(spacing::MD)
                .align_y(Vertical::Center)
                .push(avatar)
                .push(details),
        )
        .into()
}

fn build_links<'a>(i18n: &I18n) -> Element<'a, navbar::Message> {
    FOOTER_LINKS
        .into_iter()
        .fold(
            Column::new().spacing(spacing::XXS).push(
                Text::new(i18n.tr("footer-links-title"))
                    .size(typography::BODY_LG)
                    .font(SEMIBOLD)
                    .style(styles::text::primary),
            ),
            |column, section| {
                column.push(
                    button(Text::new(i18n.tr(section.label_key())).size(typography::BODY))
                        .on_press(navbar::Message::SelectSection(section))
                        .padding([spacing::XXS, 0.0])
                        .style(styles::button::nav_link),
                )
            },
        )
        .into()
}
