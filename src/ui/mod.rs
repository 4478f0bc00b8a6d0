// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Effects
//!
//! - [`carousel`] - Timed image rotation with indicator dots
//! - [`typewriter`] - Character-by-character heading reveal
//! - [`parallax`] - Scroll-linked backdrop offset
//! - [`navbar`] - Sticky navigation with the compact-layout menu
//!
//! # Page
//!
//! - [`sections`] - Hero, about, speakers, directions and footer blocks
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Range-checked settings and the responsive layout
//! - [`widgets`] - Custom Iced widgets (hero backdrop)
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod carousel;
pub mod design_tokens;
pub mod navbar;
pub mod parallax;
pub mod sections;
pub mod state;
pub mod styles;
pub mod theming;
pub mod typewriter;
pub mod widgets;
