//! Image discovery.
//!
//! Walks one bucket directory and returns every image file found at any depth,
//! in the order the directory listing produces them. Nothing is sorted: the
//! manifest mirrors traversal order.
//!
//! ## What counts as an image
//!
//! Any non-directory entry whose extension (case-insensitive) is one of the
//! configured image extensions. Dotfiles are not special here: `.hero.jpg` is
//! discovered, `.keep` is not (it has no extension).
//!
//! ## Missing buckets
//!
//! A bucket directory that does not exist, or is not a directory, is simply
//! empty. [`bucket_exists`] never fails.
//!
//! ## Cycles
//!
//! Symlinks are not followed below the bucket root, and directory hard-link
//! cycles are assumed not to exist, so the walk always terminates.

use crate::config::Config;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Whether `dir` is an existing directory. Any stat failure reads as "no".
pub fn bucket_exists(dir: &Path) -> bool {
    std::fs::metadata(dir).map(|m| m.is_dir()).unwrap_or(false)
}

/// List every image under `dir`, depth-first, in directory-listing order.
///
/// The whole list is collected before returning so callers can rename files
/// without disturbing an in-progress walk. An unreadable subdirectory aborts
/// the listing.
pub fn list_images(dir: &Path, config: &Config) -> Result<Vec<PathBuf>, ScanError> {
    let mut images = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        if is_image(entry.path(), config) {
            images.push(entry.into_path());
        }
    }
    Ok(images)
}

fn is_image(path: &Path, config: &Config) -> bool {
    path.extension()
        .map(|e| config.is_image_extension(&e.to_string_lossy()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn finds_images_by_extension() {
        let tmp = TempDir::new().unwrap();
        write_files(
            tmp.path(),
            &["a.jpg", "b.jpeg", "c.png", "d.webp", "e.gif", "notes.txt"],
        );

        let images = list_images(tmp.path(), &Config::default()).unwrap();
        assert_eq!(
            names(&images),
            vec!["a.jpg", "b.jpeg", "c.png", "d.webp", "e.gif"]
        );
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        write_files(tmp.path(), &["Photo (1).PNG", "scan.JpEg"]);

        let images = list_images(tmp.path(), &Config::default()).unwrap();
        assert_eq!(names(&images), vec!["Photo (1).PNG", "scan.JpEg"]);
    }

    #[test]
    fn recurses_into_nested_directories() {
        let tmp = TempDir::new().unwrap();
        write_files(
            tmp.path(),
            &["top.jpg", "2024/event/IMG_01.jpg", "2024/cover.png"],
        );

        let images = list_images(tmp.path(), &Config::default()).unwrap();
        assert_eq!(names(&images), vec!["IMG_01.jpg", "cover.png", "top.jpg"]);
        assert!(images.iter().any(|p| p.ends_with("2024/event/IMG_01.jpg")));
    }

    #[test]
    fn skips_files_without_image_extension() {
        let tmp = TempDir::new().unwrap();
        write_files(tmp.path(), &[".keep", "weird_file", "archive.tar.gz", "file."]);

        let images = list_images(tmp.path(), &Config::default()).unwrap();
        assert!(images.is_empty());
    }

    #[test]
    fn dotfile_with_image_extension_is_discovered() {
        let tmp = TempDir::new().unwrap();
        write_files(tmp.path(), &[".hero.jpg"]);

        let images = list_images(tmp.path(), &Config::default()).unwrap();
        assert_eq!(names(&images), vec![".hero.jpg"]);
    }

    #[test]
    fn directory_named_like_an_image_is_not_listed() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("album.jpg")).unwrap();
        write_files(tmp.path(), &["album.jpg/inner.png"]);

        let images = list_images(tmp.path(), &Config::default()).unwrap();
        assert_eq!(names(&images), vec!["inner.png"]);
    }

    #[test]
    fn bucket_exists_distinguishes_dirs_files_and_missing() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("gallery")).unwrap();
        write_files(tmp.path(), &["staff"]);

        assert!(bucket_exists(&tmp.path().join("gallery")));
        assert!(!bucket_exists(&tmp.path().join("staff")));
        assert!(!bucket_exists(&tmp.path().join("media")));
    }

    #[test]
    fn missing_directory_is_an_error_for_list_images() {
        let tmp = TempDir::new().unwrap();
        let result = list_images(&tmp.path().join("nope"), &Config::default());
        assert!(matches!(result, Err(ScanError::Walk(_))));
    }
}
