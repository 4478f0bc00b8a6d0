// SPDX-License-Identifier: MPL-2.0
//! UI state value types
//!
//! Range-checked settings and the responsive layout, kept apart from the
//! main App struct.

pub mod layout;
pub mod timing;

pub use layout::Layout;
pub use timing::{ParallaxCoefficient, RevealDelay, RotationInterval};
