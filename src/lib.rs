//! # Photo Manifest
//!
//! Build-time index of the site's photo assets. One run walks the asset tree,
//! gives every image a canonical kebab-case filename, and writes
//! `manifest.json` describing what it found.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan       gallery/ departments/ staff/ media/  →  image paths
//! 2. Normalize  image paths                          →  renamed in place
//! 3. Emit       canonical paths                      →  manifest.json
//! ```
//!
//! Stages run strictly in sequence, bucket by bucket. The manifest is written
//! once, after every bucket has been assembled, and fully replaces the
//! previous one. Running twice in a row produces the same bytes: the first run
//! renames, the second finds everything canonical.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Root, bucket list, recognized extensions |
//! | [`scan`] | Recursive discovery of image files per bucket |
//! | [`naming`] | Slugs, canonical filenames, in-place rename, captions |
//! | [`manifest`] | Assembly, JSON serialization, and the final write |
//! | [`output`] | The stdout confirmation line |
//!
//! # Side Effects
//!
//! Running is not read-only. Files are renamed in the asset tree, and two
//! sources that slug to the same name collapse into one file. Concurrent runs
//! against the same tree are unsupported.

pub mod config;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod scan;

pub use config::Config;
pub use manifest::{Manifest, ManifestError, run};

#[cfg(test)]
pub(crate) mod test_helpers;
