// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.
//!
//! Every subscription here exists only while `App::subscription` returns it:
//! dropping one from the batch is how a timer or listener gets cancelled.

use super::Message;
use crate::ui::carousel;
use crate::ui::navbar;
use crate::ui::sections::hero::Headline;
use crate::ui::typewriter::Typewriter;
use iced::{event, mouse, window, Event, Subscription};

/// Window size, always observed so the layout can follow the width.
///
/// The size reported when the window opens counts as a resize: the platform
/// may not honor the requested default size.
pub fn create_resize_subscription() -> Subscription<Message> {
    Subscription::batch([
        window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::Opened { size, .. }) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        }),
    ])
}

/// Outside-click listener for the navigation menu.
///
/// Only left presses that no widget captured count as outside clicks; the
/// toggle and the menu entries capture their own presses.
pub fn create_menu_subscription(menu_open: bool) -> Subscription<Message> {
    if !menu_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window| match (event, status) {
        (
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            event::Status::Ignored,
        ) => Some(Message::Navbar(navbar::Message::CloseMenu)),
        _ => None,
    })
}

/// Reveal timers for both hero headings. Finished headings contribute none.
pub fn create_typewriter_subscription(
    title: &Typewriter,
    subtitle: &Typewriter,
) -> Subscription<Message> {
    Subscription::batch([
        title.subscription(Headline::Title).map(typewriter_tick),
        subtitle.subscription(Headline::Subtitle).map(typewriter_tick),
    ])
}

fn typewriter_tick((headline, generation): (Headline, u64)) -> Message {
    Message::Typewriter {
        headline,
        generation,
    }
}

/// Carousel rotation timer, present only while the carousel is mounted.
pub fn create_carousel_subscription(carousel: Option<&carousel::State>) -> Subscription<Message> {
    carousel.map_or_else(Subscription::none, |state| {
        state.subscription().map(Message::Carousel)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::{RevealDelay, RotationInterval};
    use iced::advanced::subscription::into_recipes;

    #[test]
    fn window_size_is_observed_from_open_and_resize() {
        assert_eq!(into_recipes(create_resize_subscription()).len(), 2);
    }

    #[test]
    fn unmounted_carousel_has_no_timer() {
        assert!(into_recipes(create_carousel_subscription(None)).is_empty());

        let state = carousel::State::new(&["1.png", "11.png"], RotationInterval::default())
            .expect("non-empty image list");
        assert_eq!(into_recipes(create_carousel_subscription(Some(&state))).len(), 1);
    }

    #[test]
    fn closed_menu_does_not_listen_for_clicks() {
        assert!(into_recipes(create_menu_subscription(false)).is_empty());
        assert_eq!(into_recipes(create_menu_subscription(true)).len(), 1);
    }

    #[test]
    fn finished_headings_contribute_no_timers() {
        let delay = RevealDelay::new(100);
        let empty = Typewriter::new("", delay);
        assert!(into_recipes(create_typewriter_subscription(&empty, &empty)).is_empty());

        let pending = Typewriter::new("AI", delay);
        assert_eq!(
            into_recipes(create_typewriter_subscription(&pending, &empty)).len(),
            1
        );
    }
}
