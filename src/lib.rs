// SPDX-License-Identifier: MPL-2.0
//! `summer_school` is the event page of the "Generative AI for Image
//! Processing & Healthcare" summer school, built with the Iced GUI framework.
//!
//! It renders a single scrolling page (hero, about, speakers, directions,
//! footer) with a rotating image carousel, typed headings, a scroll-linked
//! hero backdrop and a collapsible navigation menu. Text goes through Fluent
//! and preferences are read from `settings.toml`.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
