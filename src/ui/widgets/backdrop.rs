// SPDX-License-Identifier: MPL-2.0
//! Decorative hero backdrop drawn on a Canvas.
//!
//! Two soft glows and a line grid, shifted downward by the parallax offset.

use crate::ui::design_tokens::{opacity, palette, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};

/// Rings used to fake a blur around each glow.
const GLOW_RINGS: u16 = 8;

/// Hero background layer.
pub struct Backdrop {
    cache: Cache,
    offset: f32,
}

impl Backdrop {
    /// Creates a backdrop shifted down by `offset` logical pixels.
    #[must_use]
    pub fn new(offset: f32) -> Self {
        Self {
            cache: Cache::default(),
            offset,
        }
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Creates a Canvas widget filling its parent.
    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for Backdrop {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let width = frame.width();
                let height = frame.height();
                let shift = self.offset;

                draw_glow(
                    frame,
                    Point::new(width * 0.10 + 128.0, 80.0 + 128.0 + shift),
                    128.0,
                    palette::TEAL_500,
                );
                draw_glow(
                    frame,
                    Point::new(width * 0.85 - 112.0, height - 80.0 - 112.0 + shift),
                    112.0,
                    palette::CYAN_500,
                );
                draw_grid(frame, shift);
            });

        vec![geometry]
    }
}

fn draw_glow(frame: &mut Frame, center: Point, radius: f32, color: Color) {
    // Outer rings first, each smaller and slightly more opaque.
    for ring in 0..GLOW_RINGS {
        let t = f32::from(GLOW_RINGS - ring) / f32::from(GLOW_RINGS);
        let circle = Path::circle(center, radius * (1.0 + t));
        frame.fill(
            &circle,
            Color {
                a: opacity::GLOW / f32::from(GLOW_RINGS),
                ..color
            },
        );
    }
    frame.fill(
        &Path::circle(center, radius),
        Color {
            a: opacity::GLOW,
            ..color
        },
    );
}

fn draw_grid(frame: &mut Frame, shift: f32) {
    let stroke = Stroke::default().with_width(1.0).with_color(Color {
        a: opacity::TINT * 0.25,
        ..palette::GRAY_400
    });
    let cell = sizing::GRID_CELL;
    let (width, height) = (frame.width(), frame.height());

    let mut x = 0.0;
    while x <= width {
        frame.stroke(
            &Path::line(Point::new(x, 0.0), Point::new(x, height)),
            stroke,
        );
        x += cell;
    }

    let mut y = shift.rem_euclid(cell);
    while y <= height {
        frame.stroke(
            &Path::line(Point::new(0.0, y), Point::new(width, y)),
            stroke,
        );
        y += cell;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_keeps_offset() {
        assert_eq!(Backdrop::new(42.0).offset(), 42.0);
    }

    #[test]
    fn backdrop_element_builds() {
        let _element: iced::Element<'_, ()> = Backdrop::new(0.0).into_element();
    }
}
