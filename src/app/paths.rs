// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Config directory:
//! 1. **Explicit override** - the `--config-dir` flag, or a test directory
//! 2. **Environment variable** (`SUMMER_SCHOOL_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate
//!
//! Assets directory:
//! 1. `--assets-dir` flag
//! 2. `[assets] dir` from `settings.toml`
//! 3. `SUMMER_SCHOOL_ASSETS_DIR` environment variable
//! 4. [`DEFAULT_ASSETS_DIR`](crate::config::DEFAULT_ASSETS_DIR)

use crate::config::DEFAULT_ASSETS_DIR;
use std::path::{Path, PathBuf};

/// Application name used for directory naming.
const APP_NAME: &str = "SummerSchool";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "SUMMER_SCHOOL_CONFIG_DIR";

/// Environment variable to override the assets directory.
pub const ENV_ASSETS_DIR: &str = "SUMMER_SCHOOL_ASSETS_DIR";

/// Returns the application config directory path with an optional override.
///
/// Without override or environment variable:
/// - Linux: `~/.config/SummerSchool/`
/// - macOS: `~/Library/Application Support/SummerSchool/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\SummerSchool\`
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Resolves the directory the page images are loaded from.
pub fn resolve_assets_dir(cli: Option<PathBuf>, configured: Option<&Path>) -> PathBuf {
    if let Some(path) = cli {
        return path;
    }
    if let Some(path) = configured {
        return path.to_path_buf();
    }
    non_empty_env(ENV_ASSETS_DIR).unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
}

fn non_empty_env(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_config_override_wins() {
        let dir = PathBuf::from("/tmp/summer-school-test");
        assert_eq!(
            get_app_config_dir_with_override(Some(dir.clone())),
            Some(dir)
        );
    }

    #[test]
    fn cli_assets_dir_takes_precedence_over_config() {
        let resolved = resolve_assets_dir(
            Some(PathBuf::from("cli-assets")),
            Some(Path::new("config-assets")),
        );
        assert_eq!(resolved, PathBuf::from("cli-assets"));
    }

    #[test]
    fn configured_assets_dir_used_without_cli_flag() {
        let resolved = resolve_assets_dir(None, Some(Path::new("config-assets")));
        assert_eq!(resolved, PathBuf::from("config-assets"));
    }
}
