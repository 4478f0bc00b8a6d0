// SPDX-License-Identifier: MPL-2.0
//! Static page sections and the layout helpers they share.
//!
//! Each section exposes a `ViewContext` and a `view` function. Only the hero
//! (carousel dots) and the footer (quick links) emit messages; the others are
//! generic over the message type.

pub mod about;
pub mod anchors;
pub mod directions;
pub mod footer;
pub mod hero;
pub mod speakers;

use crate::media;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::image::{Handle, Image};
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{ContentFit, Element, Font, Length};
use std::path::Path;

/// Bold variant of the default font.
pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Semi-bold variant for card headings.
pub const SEMIBOLD: Font = Font {
    weight: Weight::Semibold,
    ..Font::DEFAULT
};

/// Wraps a section body: centered, width-capped, with vertical breathing room.
pub fn section<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    alternate: bool,
) -> Element<'a, Message> {
    let inner = Container::new(content)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding([spacing::SECTION, spacing::LG]);

    let outer = Container::new(inner).center_x(Length::Fill);
    if alternate {
        outer.style(styles::container::section_alt).into()
    } else {
        outer.style(styles::container::page).into()
    }
}

/// Centered section title with the accent underline and an optional intro.
pub fn heading<'a, Message: 'a>(title: String, intro: Option<String>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(
            Text::new(title)
                .size(typography::TITLE_LG)
                .font(BOLD)
                .style(styles::text::primary),
        )
        .push(accent_bar(sizing::ACCENT_BAR));

    if let Some(intro) = intro {
        column = column.push(
            Container::new(
                Text::new(intro)
                    .size(typography::BODY_LG)
                    .align_x(Horizontal::Center)
                    .style(styles::text::secondary),
            )
            .max_width(sizing::PROSE_MAX_WIDTH),
        );
    }

    column.into()
}

/// Short rounded accent line.
pub fn accent_bar<'a, Message: 'a>(width: f32) -> Element<'a, Message> {
    Container::new(Space::new())
        .width(width)
        .height(sizing::ACCENT_BAR_THICKNESS)
        .style(styles::container::accent_bar)
        .into()
}

/// Lays `items` out in rows of `columns` equally wide cells.
pub fn grid<'a, Message: 'a>(
    items: Vec<Element<'a, Message>>,
    columns: usize,
    gap: f32,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(gap).width(Length::Fill);
    let mut row = Row::new().spacing(gap).width(Length::Fill);
    let mut filled = 0;

    for item in items {
        row = row.push(Container::new(item).width(Length::FillPortion(1)));
        filled += 1;
        if filled == columns {
            rows = rows.push(row);
            row = Row::new().spacing(gap).width(Length::Fill);
            filled = 0;
        }
    }

    if filled > 0 {
        for _ in filled..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        rows = rows.push(row);
    }

    rows.into()
}

/// Bullet line with a small accent marker.
pub fn bullet<'a, Message: 'a>(text: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Top)
        .push(Text::new("•").size(typography::BODY).style(styles::text::accent))
        .push(
            Text::new(text)
                .size(typography::BODY)
                .style(styles::text::secondary),
        )
        .into()
}

/// Image from the assets directory inside a placeholder frame.
///
/// A missing file leaves the frame empty.
pub fn framed_image<'a, Message: 'a>(
    assets_dir: &Path,
    name: &str,
    width: impl Into<Length>,
    height: impl Into<Length>,
) -> Element<'a, Message> {
    let image = Image::new(Handle::from_path(media::resolve(assets_dir, name)))
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover);

    Container::new(image)
        .width(width)
        .height(height)
        .style(styles::container::image_placeholder)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(count: usize) -> Vec<Element<'static, ()>> {
        (0..count).map(|i| Text::new(i.to_string()).into()).collect()
    }

    #[test]
    fn grid_accepts_partial_rows_and_zero_columns() {
        let _full = grid(cells(6), 3, spacing::MD);
        let _partial = grid(cells(4), 3, spacing::MD);
        let _degenerate = grid(cells(2), 0, spacing::MD);
        let _empty = grid(cells(0), 3, spacing::MD);
    }

    #[test]
    fn heading_renders_with_and_without_intro() {
        let _plain: Element<'_, ()> = heading("Title".into(), None);
        let _intro: Element<'_, ()> = heading("Title".into(), Some("Intro".into()));
    }
}
