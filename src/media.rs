// SPDX-License-Identifier: MPL-2.0
//! Page image lookup and load probing.
//!
//! Images are referenced by file name and resolved against the assets
//! directory. Probing decodes only the image header, so a missing or
//! corrupt file is detected without loading pixels.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Load state of one page image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageStatus {
    #[default]
    Pending,
    Ready,
    Failed(Error),
}

impl ImageStatus {
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, ImageStatus::Failed(_))
    }

    /// Records a probe result, logging failures.
    pub fn from_probe(name: &str, result: Result<()>) -> Self {
        match result {
            Ok(()) => ImageStatus::Ready,
            Err(err) => {
                tracing::warn!(image = name, %err, "image failed to load");
                ImageStatus::Failed(err)
            }
        }
    }
}

/// Resolves an image file name against the assets directory.
#[must_use]
pub fn resolve(assets_dir: &Path, name: &str) -> PathBuf {
    assets_dir.join(name)
}

/// Checks that the file exists and carries a decodable image header.
pub fn probe_image(path: &Path) -> Result<()> {
    image_rs::image_dimensions(path)?;
    Ok(())
}

/// [`probe_image`] on the blocking thread pool, for use inside a `Task`.
pub async fn probe_image_async(path: PathBuf) -> Result<()> {
    tokio::task::spawn_blocking(move || probe_image(&path))
        .await
        .map_err(|err| Error::Io(err.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn probe_missing_file_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = probe_image(&dir.path().join("absent.png"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn probe_garbage_file_fails() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").expect("write");
        assert!(probe_image(&path).is_err());
    }

    #[test]
    fn probe_valid_png_succeeds() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("pixel.png");
        image_rs::RgbaImage::new(2, 2)
            .save(&path)
            .expect("failed to write png");
        assert!(probe_image(&path).is_ok());
    }

    #[tokio::test]
    async fn async_probe_reports_missing_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = probe_image_async(dir.path().join("absent.png")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn from_probe_records_failure() {
        let status = ImageStatus::from_probe("1.png", Err(Error::Image("bad".into())));
        assert!(status.is_failed());
        assert_eq!(ImageStatus::from_probe("1.png", Ok(())), ImageStatus::Ready);
    }

    #[test]
    fn resolve_joins_assets_dir() {
        assert_eq!(
            resolve(Path::new("assets/site"), "11.png"),
            PathBuf::from("assets/site/11.png")
        );
    }
}
