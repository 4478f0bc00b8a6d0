// SPDX-License-Identifier: MPL-2.0
//! Responsive layout derived from the window width.

use crate::ui::design_tokens::breakpoint;

/// Page layout for a given window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Narrow windows: navigation collapses into a menu, single column.
    Compact,
    /// Inline navigation, hero still single column.
    Medium,
    /// Two-column hero with the image carousel.
    #[default]
    Wide,
}

impl Layout {
    #[must_use]
    pub fn from_width(width: f32) -> Self {
        if width < breakpoint::SM {
            Layout::Compact
        } else if width < breakpoint::LG {
            Layout::Medium
        } else {
            Layout::Wide
        }
    }

    #[must_use]
    pub fn is_compact(self) -> bool {
        self == Layout::Compact
    }

    /// Whether the hero shows (and therefore mounts) its carousel.
    #[must_use]
    pub fn shows_carousel(self) -> bool {
        self == Layout::Wide
    }

    /// Number of columns for the card grids.
    #[must_use]
    pub fn grid_columns(self) -> usize {
        match self {
            Layout::Compact => 1,
            Layout::Medium => 2,
            Layout::Wide => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_split_layouts() {
        assert_eq!(Layout::from_width(400.0), Layout::Compact);
        assert_eq!(Layout::from_width(639.9), Layout::Compact);
        assert_eq!(Layout::from_width(640.0), Layout::Medium);
        assert_eq!(Layout::from_width(1023.0), Layout::Medium);
        assert_eq!(Layout::from_width(1024.0), Layout::Wide);
        assert_eq!(Layout::from_width(1200.0), Layout::Wide);
    }

    #[test]
    fn only_wide_layout_shows_carousel() {
        assert!(!Layout::Compact.shows_carousel());
        assert!(!Layout::Medium.shows_carousel());
        assert!(Layout::Wide.shows_carousel());
    }

    #[test]
    fn grid_columns_grow_with_width() {
        assert!(Layout::Compact.grid_columns() < Layout::Medium.grid_columns());
        assert!(Layout::Medium.grid_columns() < Layout::Wide.grid_columns());
    }
}
