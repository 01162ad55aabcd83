//! Run configuration.
//!
//! Everything the pipeline needs to know about the asset tree lives in a single
//! [`Config`] value. It is built once at startup and passed by reference into
//! each stage; nothing reads global state.
//!
//! ## Layout
//!
//! ```text
//! assets/photos/                 # root
//! ├── manifest.json              # written by the run
//! ├── gallery/                   # plain path list
//! ├── departments/               # captioned records
//! ├── staff/                     # captioned records
//! └── media/                     # plain path list
//! ```
//!
//! There is no config file. The root can be overridden from the command line;
//! everything else is fixed.

use std::path::{Path, PathBuf};

/// Default root of the asset tree, relative to the working directory.
pub const DEFAULT_ROOT: &str = "assets/photos";

/// Name of the manifest file written under the root.
pub const MANIFEST_FILENAME: &str = "manifest.json";

/// Recognized image extensions, lowercase, without the dot.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Extension given to files whose own extension is missing or unrecognized.
pub const FALLBACK_EXTENSION: &str = "jpg";

/// A top-level image category under the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub name: String,
    /// Emit `{src, caption}` records instead of bare paths.
    pub captioned: bool,
}

impl Bucket {
    pub fn new(name: impl Into<String>, captioned: bool) -> Self {
        Self {
            name: name.into(),
            captioned,
        }
    }

    /// Directory holding this bucket's images.
    pub fn dir(&self, root: &Path) -> PathBuf {
        root.join(&self.name)
    }
}

/// Default bucket list, in manifest key order.
pub fn default_buckets() -> Vec<Bucket> {
    vec![
        Bucket::new("gallery", false),
        Bucket::new("departments", true),
        Bucket::new("staff", true),
        Bucket::new("media", false),
    ]
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the scanned tree. The manifest is written directly under it.
    pub root: PathBuf,
    /// Buckets in the order they appear in the manifest.
    pub buckets: Vec<Bucket>,
    pub image_extensions: Vec<String>,
    pub fallback_extension: String,
    pub manifest_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_root(DEFAULT_ROOT)
    }
}

impl Config {
    /// Stock configuration rooted somewhere other than [`DEFAULT_ROOT`].
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            buckets: default_buckets(),
            image_extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            fallback_extension: FALLBACK_EXTENSION.to_string(),
            manifest_filename: MANIFEST_FILENAME.to_string(),
        }
    }

    /// Whether `ext` (no leading dot) is a recognized image extension.
    /// Case-insensitive.
    pub fn is_image_extension(&self, ext: &str) -> bool {
        self.image_extensions
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest_filename)
    }
}
