// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of `App` it
//! may touch and returns the follow-up task.

use super::message::Portrait;
use super::{Message, PAGE_SCROLLABLE_ID};
use crate::config;
use crate::content::{Section, CAROUSEL_IMAGES, COORDINATOR, SPEAKERS};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageStatus};
use crate::ui::carousel;
use crate::ui::design_tokens::sizing;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::parallax::Parallax;
use crate::ui::sections::anchors::PageGeometry;
use crate::ui::sections::hero::Headline;
use crate::ui::state::{Layout, RotationInterval};
use crate::ui::typewriter::Typewriter;
use iced::widget::{operation, scrollable::RelativeOffset, Id};
use iced::{Size, Task};
use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    /// Directory `settings.toml` is written to, when overridden.
    pub config_dir: Option<&'a Path>,
    pub assets_dir: &'a Path,
    pub window_size: &'a mut Size,
    pub menu_open: &'a mut bool,
    pub title: &'a mut Typewriter,
    pub subtitle: &'a mut Typewriter,
    pub carousel: &'a mut Option<carousel::State>,
    pub carousel_interval: RotationInterval,
    pub parallax: &'a mut Parallax,
    pub portraits: &'a mut [ImageStatus],
    pub coordinator_avatar: &'a mut ImageStatus,
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::ScrollTo(section) => scroll_to(section, *ctx.window_size),
        NavbarEvent::ChangeLanguage(locale) => change_language(ctx, locale),
    }
}

/// Switches the page language, restarts both hero reveals on the translated
/// headings and stores the choice in `settings.toml`.
pub fn change_language(ctx: &mut UpdateContext<'_>, locale: LanguageIdentifier) -> Task<Message> {
    if !ctx.i18n.set_locale(locale.clone()) {
        return Task::none();
    }
    ctx.title.set_target(ctx.i18n.tr(Headline::Title.text_key()));
    ctx.subtitle.set_target(ctx.i18n.tr(Headline::Subtitle.text_key()));
    tracing::info!(%locale, "language changed");

    let config_dir = ctx.config_dir.map(Path::to_path_buf);
    let (mut settings, _warning) = config::load_with_override(config_dir.clone());
    settings.general.language = Some(locale.to_string());
    if let Err(err) = config::save_with_override(&settings, config_dir) {
        tracing::warn!(
            warning = %ctx.i18n.tr("notification-config-save-error"),
            reason = %ctx.i18n.tr(err.i18n_key()),
            %err,
            "language not persisted"
        );
    }
    Task::none()
}

/// Where the page scrollable lands for `section` in a window of `window_size`.
#[must_use]
pub fn anchor_offset(section: Section, window_size: Size) -> RelativeOffset {
    let geometry = PageGeometry::estimate(Layout::from_width(window_size.width));
    let viewport = (window_size.height - sizing::NAVBAR_HEIGHT).max(0.0);
    RelativeOffset {
        x: 0.0,
        y: geometry.relative_offset(section, viewport),
    }
}

/// Snaps the page scrollable to the anchor of `section`.
pub fn scroll_to(section: Section, window_size: Size) -> Task<Message> {
    let offset = anchor_offset(section, window_size);
    tracing::debug!(anchor = section.anchor(), y = offset.y, "navigating");
    operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), offset)
}

pub fn handle_carousel_message(
    ctx: &mut UpdateContext<'_>,
    message: carousel::Message,
) -> Task<Message> {
    match ctx.carousel.as_mut() {
        Some(state) => state.update(message),
        None => tracing::debug!(?message, "carousel message while unmounted, ignoring"),
    }
    Task::none()
}

pub fn handle_typewriter_tick(
    ctx: &mut UpdateContext<'_>,
    headline: Headline,
    generation: u64,
) -> Task<Message> {
    let writer = match headline {
        Headline::Title => &mut *ctx.title,
        Headline::Subtitle => &mut *ctx.subtitle,
    };
    writer.tick(generation);
    Task::none()
}

pub fn handle_page_scrolled(ctx: &mut UpdateContext<'_>, scroll_y: f32) -> Task<Message> {
    ctx.parallax.observe(scroll_y);
    Task::none()
}

/// Tracks the window width and mounts or unmounts the carousel when the
/// layout crosses the wide breakpoint.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_size = size;
    let layout = Layout::from_width(size.width);

    if !layout.is_compact() {
        *ctx.menu_open = false;
    }

    match (layout.shows_carousel(), ctx.carousel.is_some()) {
        (true, false) => mount_carousel(ctx.carousel, ctx.carousel_interval, ctx.assets_dir),
        (false, true) => {
            *ctx.carousel = None;
            tracing::info!(width = size.width, "carousel unmounted");
            Task::none()
        }
        _ => Task::none(),
    }
}

/// Creates the carousel at its first image and probes its files.
pub fn mount_carousel(
    slot: &mut Option<carousel::State>,
    interval: RotationInterval,
    assets_dir: &Path,
) -> Task<Message> {
    let Some(state) = carousel::State::new(&CAROUSEL_IMAGES, interval) else {
        return Task::none();
    };
    tracing::info!(
        images = state.len(),
        interval_ms = interval.value(),
        "carousel mounted"
    );
    let probes = state.probe_images(assets_dir).map(Message::Carousel);
    *slot = Some(state);
    probes
}

pub fn handle_portrait_probed(
    ctx: &mut UpdateContext<'_>,
    portrait: Portrait,
    result: Result<(), Error>,
) -> Task<Message> {
    match portrait {
        Portrait::Speaker(index) => {
            let (Some(speaker), Some(status)) = (SPEAKERS.get(index), ctx.portraits.get_mut(index))
            else {
                return Task::none();
            };
            let name = speaker.image.unwrap_or(speaker.name);
            *status = ImageStatus::from_probe(name, result);
        }
        Portrait::Coordinator => {
            *ctx.coordinator_avatar = ImageStatus::from_probe(COORDINATOR.image, result);
        }
    }
    Task::none()
}

/// Probes every speaker portrait and the coordinator avatar.
pub fn probe_portraits(assets_dir: &Path) -> Task<Message> {
    let speakers = SPEAKERS.iter().enumerate().filter_map(|(index, speaker)| {
        speaker
            .image
            .map(|name| probe(assets_dir, name, Portrait::Speaker(index)))
    });
    let coordinator = probe(assets_dir, COORDINATOR.image, Portrait::Coordinator);

    Task::batch(speakers.chain(std::iter::once(coordinator)))
}

fn probe(assets_dir: &Path, name: &str, portrait: Portrait) -> Task<Message> {
    let path = media::resolve(assets_dir, name);
    Task::perform(media::probe_image_async(path), move |result| {
        Message::PortraitProbed { portrait, result }
    })
}
