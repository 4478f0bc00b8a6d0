// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Every user-facing string on the page, from navigation labels to section prose,
//! is looked up here.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Translation files embedded at compile time from `assets/i18n/`
//! - Fallback to the default locale when a requested one is unavailable

pub mod fluent;
