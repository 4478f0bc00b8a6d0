// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Carousel**: Hero image rotation interval
//! - **Typewriter**: Per-character reveal delays for the hero headings
//! - **Parallax**: Scroll coefficient for the hero backdrop
//! - **Assets**: Location of the page images

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default delay between two carousel images (in milliseconds).
pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = 5_000;

/// Minimum carousel rotation interval (in milliseconds).
pub const MIN_ROTATION_INTERVAL_MS: u64 = 500;

/// Maximum carousel rotation interval (in milliseconds).
pub const MAX_ROTATION_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Typewriter Defaults
// ==========================================================================

/// Default per-character delay for the first heading line.
pub const DEFAULT_HEADING_DELAY_MS: u64 = 100;

/// Default per-character delay for the accented second heading line.
pub const DEFAULT_SUBHEADING_DELAY_MS: u64 = 80;

/// Minimum per-character reveal delay.
pub const MIN_REVEAL_DELAY_MS: u64 = 10;

/// Maximum per-character reveal delay.
pub const MAX_REVEAL_DELAY_MS: u64 = 2_000;

// ==========================================================================
// Parallax Defaults
// ==========================================================================

/// Fraction of the page scroll applied to the hero backdrop.
pub const DEFAULT_PARALLAX_COEFFICIENT: f32 = 0.15;

pub const MIN_PARALLAX_COEFFICIENT: f32 = 0.0;

pub const MAX_PARALLAX_COEFFICIENT: f32 = 1.0;

// ==========================================================================
// Asset Defaults
// ==========================================================================

/// Directory (relative to the working directory) holding the page images.
pub const DEFAULT_ASSETS_DIR: &str = "assets/site";

const _: () = {
    assert!(MIN_ROTATION_INTERVAL_MS <= DEFAULT_ROTATION_INTERVAL_MS);
    assert!(DEFAULT_ROTATION_INTERVAL_MS <= MAX_ROTATION_INTERVAL_MS);
    assert!(MIN_REVEAL_DELAY_MS <= DEFAULT_SUBHEADING_DELAY_MS);
    assert!(DEFAULT_HEADING_DELAY_MS <= MAX_REVEAL_DELAY_MS);
    assert!(MIN_PARALLAX_COEFFICIENT <= DEFAULT_PARALLAX_COEFFICIENT);
    assert!(DEFAULT_PARALLAX_COEFFICIENT <= MAX_PARALLAX_COEFFICIENT);
};
