// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar stays pinned above a single scrollable holding every section in
//! page order.

use super::{Message, PAGE_SCROLLABLE_ID};
use crate::i18n::fluent::I18n;
use crate::media::ImageStatus;
use crate::ui::carousel;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::sections::{about, directions, footer, hero, speakers};
use crate::ui::state::Layout;
use crate::ui::styles;
use crate::ui::typewriter::Typewriter;
use iced::widget::{scrollable, Column, Container, Id};
use iced::{Element, Length};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: Layout,
    pub menu_open: bool,
    pub title: &'a Typewriter,
    pub subtitle: &'a Typewriter,
    pub carousel: Option<&'a carousel::State>,
    pub assets_dir: &'a Path,
    pub parallax_offset: f32,
    pub portraits: &'a [ImageStatus],
    pub coordinator_avatar: &'a ImageStatus,
    pub year: i32,
}

/// Renders the whole page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        layout: ctx.layout,
        menu_open: ctx.menu_open,
    })
    .map(Message::Navbar);

    let hero_view = hero::view(hero::ViewContext {
        i18n: ctx.i18n,
        layout: ctx.layout,
        title: ctx.title,
        subtitle: ctx.subtitle,
        carousel: ctx.carousel,
        assets_dir: ctx.assets_dir,
        parallax_offset: ctx.parallax_offset,
    })
    .map(Message::Carousel);

    let footer_view = footer::view(footer::ViewContext {
        i18n: ctx.i18n,
        layout: ctx.layout,
        assets_dir: ctx.assets_dir,
        year: ctx.year,
        avatar_failed: ctx.coordinator_avatar.is_failed(),
    })
    .map(Message::Navbar);

    let page = Column::new()
        .width(Length::Fill)
        .push(hero_view)
        .push(about::view(about::ViewContext {
            i18n: ctx.i18n,
            layout: ctx.layout,
        }))
        .push(speakers::view(speakers::ViewContext {
            i18n: ctx.i18n,
            layout: ctx.layout,
            assets_dir: ctx.assets_dir,
            portraits: ctx.portraits,
        }))
        .push(directions::view(directions::ViewContext {
            i18n: ctx.i18n,
            layout: ctx.layout,
            assets_dir: ctx.assets_dir,
        }))
        .push(footer_view);

    let body = scrollable(page)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .on_scroll(|viewport| Message::PageScrolled(viewport.absolute_offset().y))
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(
        Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(navbar_view)
            .push(body),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page)
    .into()
}
