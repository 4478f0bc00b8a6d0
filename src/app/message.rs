// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::carousel;
use crate::ui::navbar;
use crate::ui::sections::hero::Headline;
use iced::Size;
use std::path::PathBuf;

/// Which portrait a probe result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Portrait {
    /// Index into the speaker roster.
    Speaker(usize),
    Coordinator,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Carousel(carousel::Message),
    /// One reveal step for a hero heading, tagged with the generation the
    /// timer was started for.
    Typewriter {
        headline: Headline,
        generation: u64,
    },
    /// Vertical offset of the page scrollable, in logical pixels.
    PageScrolled(f32),
    WindowResized(Size),
    PortraitProbed {
        portrait: Portrait,
        result: Result<(), Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SUMMER_SCHOOL_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
    /// Optional directory holding the page images.
    pub assets_dir: Option<PathBuf>,
}
