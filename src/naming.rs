//! Canonical filenames and captions.
//!
//! Every discovered image is renamed in place to a canonical kebab-case form:
//! a slug of the original stem plus a lowercase, recognized extension.
//!
//! ```text
//! Photo (1).PNG          → photo-1.png
//! customer_service.JPG   → customer-service.jpg
//! IMG_01.jpg             → img-01.jpg
//! weird_file             → weird-file.jpg     (missing extension → .jpg)
//! scan.tiff              → scan.jpg           (unrecognized → .jpg)
//! .keep                  → .keep              (dotfiles untouched)
//! ```
//!
//! The extension fallback only relabels the file. The bytes are not
//! inspected or converted.
//!
//! ## Collisions
//!
//! Two source files that slug to the same name are not told apart. The later
//! rename replaces the earlier file (last writer wins).
//!
//! ## Captions
//!
//! Captioned buckets derive a display caption from the canonical stem:
//! dashes become spaces and every alphanumeric run gets an uppercase first
//! letter. `jane-doe` → "Jane Doe".

use crate::config::Config;
use std::io;
use std::path::{Path, PathBuf};

/// Used when slugging leaves nothing behind.
const EMPTY_SLUG: &str = "image";

/// Lowercase and collapse everything outside `[a-z0-9]` into single dashes.
///
/// Always returns a non-empty string matching `^[a-z0-9]+(-[a-z0-9]+)*$`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;
    for c in input.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug
    }
}

/// Lowercase `ext` and keep it if recognized, otherwise use the fallback.
pub fn canonical_extension(ext: Option<&str>, config: &Config) -> String {
    match ext {
        Some(e) if config.is_image_extension(e) => e.to_lowercase(),
        _ => config.fallback_extension.clone(),
    }
}

/// Split a basename into stem and extension at the last dot.
///
/// A leading dot does not start an extension, and a trailing dot yields an
/// empty extension.
fn split_extension(basename: &str) -> (&str, Option<&str>) {
    match basename.rfind('.') {
        Some(0) | None => (basename, None),
        Some(idx) => (&basename[..idx], Some(&basename[idx + 1..])),
    }
}

/// Canonical basename for `basename`, or `None` for dotfiles.
pub fn canonical_file_name(basename: &str, config: &Config) -> Option<String> {
    if basename.starts_with('.') {
        return None;
    }
    let (stem, ext) = split_extension(basename);
    Some(format!(
        "{}.{}",
        slugify(stem),
        canonical_extension(ext, config)
    ))
}

/// Rename `path` to its canonical name within the same directory.
///
/// Returns the path to use from now on: the new path after a rename, or
/// `path` itself when it is already canonical or is a dotfile. An existing
/// file at the target is replaced.
pub fn ensure_kebab_case(path: &Path, config: &Config) -> io::Result<PathBuf> {
    let Some(basename) = path.file_name().map(|n| n.to_string_lossy()) else {
        return Ok(path.to_path_buf());
    };
    let Some(canonical) = canonical_file_name(&basename, config) else {
        return Ok(path.to_path_buf());
    };
    if canonical == basename {
        return Ok(path.to_path_buf());
    }

    let renamed = path.with_file_name(&canonical);
    std::fs::rename(path, &renamed)?;
    tracing::debug!(from = %path.display(), to = %renamed.display(), "renamed");
    Ok(renamed)
}

/// Display caption for a canonical stem: `customer-service` → "Customer Service".
pub fn caption(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut prev_word = false;
    for c in stem.chars() {
        let c = if c == '-' { ' ' } else { c };
        let word = c.is_ascii_alphanumeric() || c == '_';
        if word && !prev_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        prev_word = word;
    }
    out
}
