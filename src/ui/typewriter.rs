// SPDX-License-Identifier: MPL-2.0
//! Character-by-character text reveal.
//!
//! A [`Typewriter`] reveals its target one Unicode scalar value per tick and
//! stops once the whole string is visible. Every instance carries a
//! generation token: ticks are tagged with the generation they were scheduled
//! for, and a tick whose generation no longer matches is dropped. Retargeting
//! bumps the generation, which also changes the subscription identity so Iced
//! cancels the previous timer.

use crate::ui::state::RevealDelay;
use iced::{time, Subscription};
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// Progressive reveal of a fixed string.
#[derive(Debug, Clone)]
pub struct Typewriter {
    target: String,
    /// Byte offset of each char boundary, ending with `target.len()`.
    boundaries: Vec<usize>,
    cursor: usize,
    delay: RevealDelay,
    generation: u64,
}

impl Typewriter {
    #[must_use]
    pub fn new(target: impl Into<String>, delay: RevealDelay) -> Self {
        let target = target.into();
        Self {
            boundaries: char_boundaries(&target),
            target,
            cursor: 0,
            delay,
            generation: next_generation(),
        }
    }

    /// The revealed prefix.
    #[must_use]
    pub fn visible(&self) -> &str {
        &self.target[..self.boundaries[self.cursor]]
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Number of revealed characters.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cursor + 1 >= self.boundaries.len()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn delay(&self) -> RevealDelay {
        self.delay
    }

    /// Reveals one more character.
    ///
    /// Returns false (and changes nothing) for a stale generation or once the
    /// reveal is complete.
    pub fn tick(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.is_complete() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Restarts the reveal on a new string. Same string is a no-op.
    pub fn set_target(&mut self, target: impl Into<String>) {
        let target = target.into();
        if target == self.target {
            return;
        }
        self.boundaries = char_boundaries(&target);
        self.target = target;
        self.cursor = 0;
        self.generation = next_generation();
    }

    /// Reveal timer, tagged with `key` and the current generation.
    ///
    /// Returns no subscription once the reveal is complete, so an empty target
    /// never schedules anything.
    pub fn subscription<K>(&self, key: K) -> Subscription<(K, u64)>
    where
        K: Hash + Clone + Send + Sync + 'static,
    {
        if self.is_complete() {
            return Subscription::none();
        }
        time::every(self.delay.as_duration())
            .with((key, self.generation))
            .map(|(tag, _instant)| tag)
    }
}

fn char_boundaries(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::advanced::subscription::into_recipes;

    fn writer(target: &str) -> Typewriter {
        Typewriter::new(target, RevealDelay::new(100))
    }

    #[test]
    fn reveals_one_character_per_tick() {
        let mut typewriter = writer("AI");
        let generation = typewriter.generation();
        assert_eq!(typewriter.visible(), "");

        assert!(typewriter.tick(generation));
        assert_eq!(typewriter.visible(), "A");

        assert!(typewriter.tick(generation));
        assert_eq!(typewriter.visible(), "AI");
        assert!(typewriter.is_complete());

        assert!(!typewriter.tick(generation));
        assert_eq!(typewriter.visible(), "AI");
    }

    #[test]
    fn empty_target_is_complete_immediately() {
        let typewriter = writer("");
        assert!(typewriter.is_complete());
        assert_eq!(typewriter.visible(), "");
    }

    #[test]
    fn multibyte_characters_are_revealed_whole() {
        let mut typewriter = writer("7th – 9th");
        let generation = typewriter.generation();
        for _ in 0..5 {
            typewriter.tick(generation);
        }
        assert_eq!(typewriter.visible(), "7th –");
        assert_eq!(typewriter.cursor(), 5);
    }

    #[test]
    fn full_heading_completes_after_one_tick_per_char() {
        let target = "Image Processing & Healthcare";
        let mut typewriter = writer(target);
        let generation = typewriter.generation();
        let mut ticks = 0;
        while typewriter.tick(generation) {
            ticks += 1;
        }
        assert_eq!(ticks, target.chars().count());
        assert_eq!(typewriter.visible(), target);
    }

    #[test]
    fn stale_generation_is_ignored() {
        let mut typewriter = writer("Generative AI for");
        let stale = typewriter.generation();

        typewriter.set_target("IA générative pour");
        assert_ne!(typewriter.generation(), stale);

        assert!(!typewriter.tick(stale));
        assert_eq!(typewriter.visible(), "");

        assert!(typewriter.tick(typewriter.generation()));
        assert_eq!(typewriter.visible(), "I");
    }

    #[test]
    fn set_target_with_same_text_keeps_progress() {
        let mut typewriter = writer("AI");
        let generation = typewriter.generation();
        typewriter.tick(generation);

        typewriter.set_target("AI");

        assert_eq!(typewriter.generation(), generation);
        assert_eq!(typewriter.visible(), "A");
    }

    #[test]
    fn instances_get_distinct_generations() {
        let first = writer("AI");
        let second = writer("AI");
        assert_ne!(first.generation(), second.generation());
    }

    #[test]
    fn empty_target_never_schedules_a_timer() {
        assert!(into_recipes(writer("").subscription("title")).is_empty());
    }

    #[test]
    fn timer_stops_once_reveal_completes() {
        let mut typewriter = writer("AI");
        assert_eq!(into_recipes(typewriter.subscription("title")).len(), 1);

        let generation = typewriter.generation();
        while typewriter.tick(generation) {}
        assert!(into_recipes(typewriter.subscription("title")).is_empty());
    }

    #[test]
    fn retargeting_a_finished_reveal_restarts_its_timer() {
        let mut typewriter = writer("AI");
        let generation = typewriter.generation();
        while typewriter.tick(generation) {}

        typewriter.set_target("IA");
        assert_eq!(into_recipes(typewriter.subscription("title")).len(), 1);
    }
}
