// SPDX-License-Identifier: MPL-2.0
//! Rotating image display for the hero section.
//!
//! The carousel cycles through a fixed list of images on a timer and shows
//! one indicator dot per image. Clicking a dot jumps to that image without
//! restarting the timer, so the next tick advances from the selected image.
//!
//! The state only exists while the hero shows the carousel. Dropping it (and
//! no longer returning [`State::subscription`]) stops the rotation.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageStatus};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::RotationInterval;
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, container, Column, Container, Row, Space, Stack, Text};
use iced::{time, Alignment, ContentFit, Element, Length, Subscription, Task};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_MOUNT: AtomicU64 = AtomicU64::new(1);

/// Ordered, non-empty list of items with a cursor that stays in bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSequence<T> {
    items: Vec<T>,
    current: usize,
}

impl<T> ImageSequence<T> {
    /// Builds a sequence positioned on its first item.
    ///
    /// Returns `None` for an empty list.
    #[must_use]
    pub fn new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items, current: 0 })
        }
    }

    #[must_use]
    pub fn current(&self) -> &T {
        &self.items[self.current]
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never true for a constructed sequence.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Moves to the next item, wrapping after the last one.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.items.len();
    }

    /// Jumps to `index`. Out-of-range indices are ignored and return false.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.current = index;
            true
        } else {
            false
        }
    }
}

/// Messages handled by the carousel.
#[derive(Debug, Clone)]
pub enum Message {
    Tick,
    Select(usize),
    /// Probe result, tagged with the mount that requested it.
    ImageProbed {
        mount: u64,
        index: usize,
        result: Result<(), Error>,
    },
}

/// Mounted carousel state.
#[derive(Debug, Clone)]
pub struct State {
    sequence: ImageSequence<&'static str>,
    interval: RotationInterval,
    statuses: Vec<ImageStatus>,
    mount: u64,
}

impl State {
    /// Mounts a carousel over `images`. Returns `None` when there is nothing to show.
    #[must_use]
    pub fn new(images: &[&'static str], interval: RotationInterval) -> Option<Self> {
        let sequence = ImageSequence::new(images.to_vec())?;
        let statuses = vec![ImageStatus::Pending; sequence.len()];
        Some(Self {
            sequence,
            interval,
            statuses,
            mount: NEXT_MOUNT.fetch_add(1, Ordering::Relaxed),
        })
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick => self.sequence.advance(),
            Message::Select(index) => {
                if !self.sequence.select(index) {
                    tracing::debug!(index, "ignoring out-of-range carousel selection");
                }
            }
            Message::ImageProbed {
                mount,
                index,
                result,
            } => {
                if mount != self.mount {
                    tracing::debug!(index, "dropping image probe from an earlier mount");
                    return;
                }
                let Some(name) = self.sequence.iter().nth(index).copied() else {
                    return;
                };
                if let Some(status) = self.statuses.get_mut(index) {
                    *status = ImageStatus::from_probe(name, result);
                }
            }
        }
    }

    /// Probes every image once so missing files get reported.
    pub fn probe_images(&self, assets_dir: &Path) -> Task<Message> {
        let mount = self.mount;
        Task::batch(self.sequence.iter().enumerate().map(|(index, name)| {
            let path = media::resolve(assets_dir, name);
            Task::perform(media::probe_image_async(path), move |result| {
                Message::ImageProbed {
                    mount,
                    index,
                    result,
                }
            })
        }))
    }

    /// Rotation timer. Only subscribed while the carousel is mounted.
    pub fn subscription(&self) -> Subscription<Message> {
        time::every(self.interval.as_duration()).map(|_| Message::Tick)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.sequence.current_index()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    #[must_use]
    pub fn interval(&self) -> RotationInterval {
        self.interval
    }

    /// Identifies this mount; a remount gets a new value.
    #[must_use]
    pub fn mount(&self) -> u64 {
        self.mount
    }

    #[must_use]
    pub fn status(&self, index: usize) -> Option<&ImageStatus> {
        self.statuses.get(index)
    }

    #[must_use]
    pub fn picture(&self, assets_dir: &Path) -> Picture {
        if self
            .status(self.current_index())
            .is_some_and(ImageStatus::is_failed)
        {
            Picture::Placeholder
        } else {
            Picture::Image(media::resolve(assets_dir, self.sequence.current()))
        }
    }
}

/// What the carousel draws for its current image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Picture {
    Image(PathBuf),
    /// Empty frame for an image that failed to load.
    Placeholder,
}

/// Contextual data needed to render the carousel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub assets_dir: &'a Path,
}

/// Render the current image with its caption and indicator dots.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let index = ctx.state.current_index();

    let picture: Element<'_, Message> = match ctx.state.picture(ctx.assets_dir) {
        Picture::Placeholder => Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::image_placeholder)
            .into(),
        Picture::Image(path) => Image::new(Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
    };

    let caption = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(ctx.i18n.tr("hero-card-title")).size(typography::BODY))
            .push(Text::new(ctx.i18n.tr("hero-card-caption")).size(typography::CAPTION)),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::caption);

    let dots = (0..ctx.state.len()).fold(
        Row::new().spacing(spacing::XS).align_y(Alignment::Center),
        |row, dot_index| {
            row.push(
                button(Space::new())
                    .width(sizing::CAROUSEL_DOT)
                    .height(sizing::CAROUSEL_DOT)
                    .padding(0)
                    .on_press(Message::Select(dot_index))
                    .style(styles::button::dot(dot_index == index)),
            )
        },
    );

    let overlay = Column::new()
        .height(Length::Fill)
        .push(Space::new().height(Length::Fill))
        .push(caption)
        .push(
            container(dots)
                .center_x(Length::Fill)
                .padding(spacing::SM),
        );

    Stack::new()
        .width(Length::Fill)
        .height(sizing::CAROUSEL_HEIGHT)
        .push(picture)
        .push(overlay)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::advanced::subscription::into_recipes;

    const IMAGES: [&str; 4] = ["1.png", "11.png", "111.png", "1111.png"];

    fn mounted() -> State {
        State::new(&IMAGES, RotationInterval::default()).expect("non-empty image list")
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert!(ImageSequence::<&str>::new(Vec::new()).is_none());
        assert!(State::new(&[], RotationInterval::default()).is_none());
    }

    #[test]
    fn n_ticks_return_to_first_image() {
        let mut sequence = ImageSequence::new(IMAGES.to_vec()).expect("non-empty");
        for _ in 0..IMAGES.len() {
            sequence.advance();
        }
        assert_eq!(sequence.current_index(), 0);
        assert_eq!(*sequence.current(), "1.png");
    }

    #[test]
    fn tick_advances_from_selected_index() {
        let mut state = mounted();
        state.update(Message::Select(2));
        assert_eq!(state.current_index(), 2);

        state.update(Message::Tick);
        assert_eq!(state.current_index(), 3);

        state.update(Message::Tick);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut state = mounted();
        state.update(Message::Tick);
        state.update(Message::Select(IMAGES.len()));
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn single_image_stays_on_index_zero() {
        let mut sequence = ImageSequence::new(vec!["only.png"]).expect("non-empty");
        sequence.advance();
        sequence.advance();
        assert_eq!(sequence.current_index(), 0);
    }

    #[test]
    fn failed_probe_is_recorded_without_stopping_rotation() {
        let mut state = mounted();
        let mount = state.mount();
        state.update(Message::ImageProbed {
            mount,
            index: 1,
            result: Err(Error::Io("missing".into())),
        });
        state.update(Message::ImageProbed {
            mount,
            index: 0,
            result: Ok(()),
        });

        assert_eq!(state.status(0), Some(&ImageStatus::Ready));
        assert!(state.status(1).is_some_and(ImageStatus::is_failed));
        assert_eq!(state.status(2), Some(&ImageStatus::Pending));

        state.update(Message::Tick);
        state.update(Message::Tick);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn probe_for_unknown_index_is_ignored() {
        let mut state = mounted();
        state.update(Message::ImageProbed {
            mount: state.mount(),
            index: 99,
            result: Ok(()),
        });
        assert!((0..state.len()).all(|i| state.status(i) == Some(&ImageStatus::Pending)));
    }

    #[test]
    fn probe_from_earlier_mount_is_dropped() {
        let earlier = mounted();
        let mut state = mounted();
        assert_ne!(earlier.mount(), state.mount());

        state.update(Message::ImageProbed {
            mount: earlier.mount(),
            index: 0,
            result: Err(Error::Io("missing".into())),
        });
        assert_eq!(state.status(0), Some(&ImageStatus::Pending));
    }

    #[test]
    fn failed_image_shows_empty_placeholder() {
        let assets = Path::new("assets/site");
        let mut state = mounted();
        assert_eq!(
            state.picture(assets),
            Picture::Image(assets.join("1.png"))
        );

        state.update(Message::ImageProbed {
            mount: state.mount(),
            index: 0,
            result: Err(Error::Image("truncated".into())),
        });
        assert_eq!(state.picture(assets), Picture::Placeholder);

        state.update(Message::Tick);
        assert_eq!(
            state.picture(assets),
            Picture::Image(assets.join("11.png"))
        );
    }

    #[test]
    fn mounted_carousel_runs_one_timer() {
        let recipes = into_recipes(mounted().subscription());
        assert_eq!(recipes.len(), 1);
    }

    #[test]
    fn carousel_view_renders_loaded_and_failed_images() {
        let i18n = I18n::default();
        let mut state = mounted();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            assets_dir: Path::new("assets/site"),
        });
        drop(_element);

        state.update(Message::ImageProbed {
            mount: state.mount(),
            index: 0,
            result: Err(Error::Image("truncated".into())),
        });
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            assets_dir: Path::new("assets/site"),
        });
    }
}
