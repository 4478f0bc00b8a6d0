// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the event page.
//!
//! The `App` struct owns every piece of runtime state (menu flag, reveal
//! progress, carousel, scroll offset, image probe results) and translates
//! messages into state changes and follow-up tasks. Components are mounted by
//! being present in `App`; their timers exist only while `subscription`
//! returns them.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Portrait};

use crate::config::{self, DEFAULT_HEADING_DELAY_MS, DEFAULT_SUBHEADING_DELAY_MS};
use crate::content::SPEAKERS;
use crate::i18n::fluent::I18n;
use crate::media::ImageStatus;
use crate::ui::carousel;
use crate::ui::parallax::Parallax;
use crate::ui::sections::hero::Headline;
use crate::ui::state::{Layout, ParallaxCoefficient, RevealDelay, RotationInterval};
use crate::ui::theming::ThemeMode;
use crate::ui::typewriter::Typewriter;
use chrono::Datelike;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Identifier of the page scrollable, targeted by anchor navigation.
pub const PAGE_SCROLLABLE_ID: &str = "page";

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// `--config-dir` override, also used when persisting the language.
    config_dir: Option<PathBuf>,
    assets_dir: PathBuf,
    window_size: Size,
    /// Whether the compact navigation menu is open.
    menu_open: bool,
    title: Typewriter,
    subtitle: Typewriter,
    /// Mounted only while the layout is wide.
    carousel: Option<carousel::State>,
    carousel_interval: RotationInterval,
    parallax: Parallax,
    /// Speaker portrait probe results, indexed like `SPEAKERS`.
    portraits: Vec<ImageStatus>,
    coordinator_avatar: ImageStatus,
    year: i32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("window_size", &self.window_size)
            .field("menu_open", &self.menu_open)
            .field("carousel_mounted", &self.carousel.is_some())
            .finish()
    }
}

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences, prepares the hero state and kicks off image probes.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            tracing::warn!(warning = %i18n.tr(&key), "settings not applied");
        }

        let assets_dir = paths::resolve_assets_dir(flags.assets_dir, config.assets.dir.as_deref());
        let carousel_interval = RotationInterval::new(
            config
                .carousel
                .interval_ms
                .unwrap_or(config::DEFAULT_ROTATION_INTERVAL_MS),
        );
        let heading_delay = RevealDelay::new(
            config
                .typewriter
                .heading_delay_ms
                .unwrap_or(DEFAULT_HEADING_DELAY_MS),
        );
        let subheading_delay = RevealDelay::new(
            config
                .typewriter
                .subheading_delay_ms
                .unwrap_or(DEFAULT_SUBHEADING_DELAY_MS),
        );
        let coefficient = ParallaxCoefficient::new(
            config
                .parallax
                .coefficient
                .unwrap_or(config::DEFAULT_PARALLAX_COEFFICIENT),
        );

        tracing::info!(
            locale = %i18n.current_locale(),
            assets_dir = %assets_dir.display(),
            rotation_ms = carousel_interval.value(),
            parallax = coefficient.value(),
            "starting"
        );

        let title = Typewriter::new(i18n.tr(Headline::Title.text_key()), heading_delay);
        let subtitle = Typewriter::new(i18n.tr(Headline::Subtitle.text_key()), subheading_delay);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            config_dir: flags.config_dir,
            assets_dir,
            window_size: default_window_size(),
            menu_open: false,
            title,
            subtitle,
            carousel: None,
            carousel_interval,
            parallax: Parallax::new(coefficient),
            portraits: vec![ImageStatus::Pending; SPEAKERS.len()],
            coordinator_avatar: ImageStatus::Pending,
            year: chrono::Local::now().year(),
        };

        let carousel_task = if app.layout().shows_carousel() {
            update::mount_carousel(&mut app.carousel, carousel_interval, &app.assets_dir)
        } else {
            Task::none()
        };
        let portrait_task = update::probe_portraits(&app.assets_dir);

        (app, Task::batch([carousel_task, portrait_task]))
    }

    fn layout(&self) -> Layout {
        Layout::from_width(self.window_size.width)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_resize_subscription(),
            subscription::create_menu_subscription(self.menu_open),
            subscription::create_typewriter_subscription(&self.title, &self.subtitle),
            subscription::create_carousel_subscription(self.carousel.as_ref()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config_dir: self.config_dir.as_deref(),
            assets_dir: &self.assets_dir,
            window_size: &mut self.window_size,
            menu_open: &mut self.menu_open,
            title: &mut self.title,
            subtitle: &mut self.subtitle,
            carousel: &mut self.carousel,
            carousel_interval: self.carousel_interval,
            parallax: &mut self.parallax,
            portraits: &mut self.portraits,
            coordinator_avatar: &mut self.coordinator_avatar,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Carousel(carousel_message) => {
                update::handle_carousel_message(&mut ctx, carousel_message)
            }
            Message::Typewriter {
                headline,
                generation,
            } => update::handle_typewriter_tick(&mut ctx, headline, generation),
            Message::PageScrolled(scroll_y) => update::handle_page_scrolled(&mut ctx, scroll_y),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::PortraitProbed { portrait, result } => {
                update::handle_portrait_probed(&mut ctx, portrait, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            layout: self.layout(),
            menu_open: self.menu_open,
            title: &self.title,
            subtitle: &self.subtitle,
            carousel: self.carousel.as_ref(),
            assets_dir: &self.assets_dir,
            parallax_offset: self.parallax.offset(),
            portraits: &self.portraits,
            coordinator_avatar: &self.coordinator_avatar,
            year: self.year,
        })
    }
}
