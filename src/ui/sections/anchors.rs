// SPDX-License-Identifier: MPL-2.0
//! Vertical position of each navigation anchor.
//!
//! Block heights are estimated per [`Layout`] from the same column counts the
//! sections render with, so an anchor keeps landing on its section when the
//! speaker grid collapses to a single column.

use crate::content::{Section, OBJECTIVES, SPEAKERS, TECHNOLOGIES};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::state::Layout;

/// Section title, accent bar and intro paragraph.
const HEADING: f32 = 180.0;
/// Speaker card plus the grid gap below it.
const SPEAKER_CARD: f32 = 340.0;
const TECHNOLOGY_TILE: f32 = 150.0;

/// Estimated page layout in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    about: f32,
    topics: f32,
    speakers: f32,
    directions: f32,
    footer: f32,
    height: f32,
}

impl PageGeometry {
    #[must_use]
    pub fn estimate(layout: Layout) -> Self {
        let padding = 2.0 * spacing::SECTION;

        let hero = match layout {
            Layout::Compact => 760.0,
            Layout::Medium => 700.0,
            Layout::Wide => sizing::HERO_HEIGHT,
        };

        let intro = match layout {
            Layout::Compact => 520.0,
            Layout::Medium => 420.0,
            Layout::Wide => 380.0,
        };
        let why: f32 = match layout {
            Layout::Compact => 460.0,
            Layout::Medium => 380.0,
            Layout::Wide => 360.0,
        };
        let objective_row = if layout.is_compact() { 150.0 } else { 110.0 };
        let objectives = spacing::XXL + OBJECTIVES.len() as f32 * objective_row;
        let technology_columns = if layout.is_compact() { 3 } else { 6 };
        let technologies =
            HEADING / 2.0 + rows(TECHNOLOGIES.len(), technology_columns) * TECHNOLOGY_TILE;

        // The why and objectives cards sit side by side only in the wide layout.
        let (topics_from_about, cards) = if layout.shows_carousel() {
            (spacing::SECTION + intro, why.max(objectives))
        } else {
            (
                spacing::SECTION + intro + why + spacing::XXL,
                why + spacing::XXL + objectives,
            )
        };
        let about_height = padding + intro + cards + spacing::XXL + technologies;

        let speakers_height =
            padding + HEADING + rows(SPEAKERS.len(), layout.grid_columns()) * SPEAKER_CARD;

        let directions_height = padding
            + HEADING
            + match layout {
                Layout::Compact => 1300.0,
                Layout::Medium => 1150.0,
                Layout::Wide => 620.0,
            };

        let footer_height = match layout {
            Layout::Compact => 900.0,
            Layout::Medium => 560.0,
            Layout::Wide => 460.0,
        };

        let about = hero;
        let speakers = about + about_height;
        let directions = speakers + speakers_height;
        let footer = directions + directions_height;

        Self {
            about,
            topics: about + topics_from_about,
            speakers,
            directions,
            footer,
            height: footer + footer_height,
        }
    }

    /// Distance from the top of the page to `section`.
    ///
    /// `topics` has no block of its own and lands on the program objectives.
    #[must_use]
    pub fn top(&self, section: Section) -> f32 {
        match section {
            Section::About => self.about,
            Section::Topics => self.topics,
            Section::Speakers => self.speakers,
            Section::Directions => self.directions,
            Section::Footer => self.footer,
        }
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Anchor position as a fraction of the scrollable range, for a page
    /// viewport `viewport_height` pixels tall.
    #[must_use]
    pub fn relative_offset(&self, section: Section, viewport_height: f32) -> f32 {
        let range = (self.height - viewport_height).max(1.0);
        (self.top(section) / range).clamp(0.0, 1.0)
    }
}

fn rows(items: usize, columns: usize) -> f32 {
    items.div_ceil(columns.max(1)) as f32
}
