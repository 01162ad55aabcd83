//! Manifest assembly and emission.
//!
//! For each bucket, in configuration order: discover images, normalize each
//! filename, and record it. Per file the order is strict (discover → rename →
//! record) so the manifest only ever names canonical files.
//!
//! ## Output
//!
//! ```json
//! {
//!   "gallery": ["gallery/foo.jpg"],
//!   "departments": [{ "src": "departments/sales.jpg", "caption": "Sales" }],
//!   "staff": [],
//!   "media": ["media/clip.gif"]
//! }
//! ```
//!
//! Every bucket key is present, in configuration order, even when its
//! directory is missing. Paths are flattened to `bucket/basename`: nesting
//! inside a bucket is used for discovery only.
//!
//! The manifest file is written only after the whole structure has been
//! assembled, and it always fully replaces the previous one.

use crate::config::{Bucket, Config};
use crate::naming;
use crate::scan::{self, ScanError};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Failed to rename {path}: {source}")]
    Rename {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One image in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    /// `bucket/filename`
    Path(String),
    Captioned { src: String, caption: String },
}

impl Entry {
    pub fn src(&self) -> &str {
        match self {
            Entry::Path(src) => src,
            Entry::Captioned { src, .. } => src,
        }
    }
}

/// Entries for one bucket, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketEntries {
    pub name: String,
    pub entries: Vec<Entry>,
}

/// The full manifest. Serializes as a JSON object keyed by bucket name, keys
/// in the order the buckets were processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub buckets: Vec<BucketEntries>,
}

impl Serialize for Manifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for bucket in &self.buckets {
            map.serialize_entry(&bucket.name, &bucket.entries)?;
        }
        map.end()
    }
}

impl Manifest {
    /// Entries for `name`, if that bucket was processed.
    pub fn bucket(&self, name: &str) -> Option<&[Entry]> {
        self.buckets
            .iter()
            .find(|b| b.name == name)
            .map(|b| b.entries.as_slice())
    }

    pub fn image_count(&self) -> usize {
        self.buckets.iter().map(|b| b.entries.len()).sum()
    }

    /// Pretty JSON with two-space indentation and a trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Build the manifest entry for a file whose name is already canonical.
pub fn entry_for(bucket: &Bucket, path: &Path) -> Entry {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let src = format!("{}/{}", bucket.name, filename);
    if bucket.captioned {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        Entry::Captioned {
            src,
            caption: naming::caption(&stem),
        }
    } else {
        Entry::Path(src)
    }
}

fn collect_bucket(bucket: &Bucket, config: &Config) -> Result<Vec<Entry>, ManifestError> {
    let dir = bucket.dir(&config.root);
    if !scan::bucket_exists(&dir) {
        tracing::info!(bucket = %bucket.name, dir = %dir.display(), "bucket missing, treating as empty");
        return Ok(Vec::new());
    }

    let files = scan::list_images(&dir, config)?;
    let mut entries = Vec::with_capacity(files.len());
    for file in files {
        let fixed = naming::ensure_kebab_case(&file, config).map_err(|source| {
            ManifestError::Rename {
                path: file.clone(),
                source,
            }
        })?;
        entries.push(entry_for(bucket, &fixed));
    }
    tracing::info!(bucket = %bucket.name, images = entries.len(), "bucket collected");
    Ok(entries)
}

/// Discover, normalize and record every bucket. Renames files on disk.
pub fn build_manifest(config: &Config) -> Result<Manifest, ManifestError> {
    let mut buckets = Vec::with_capacity(config.buckets.len());
    for bucket in &config.buckets {
        buckets.push(BucketEntries {
            name: bucket.name.clone(),
            entries: collect_bucket(bucket, config)?,
        });
    }
    Ok(Manifest { buckets })
}

/// Write `manifest` to the configured manifest path, replacing any existing
/// file. Returns the path written.
pub fn write_manifest(manifest: &Manifest, config: &Config) -> Result<PathBuf, ManifestError> {
    let path = config.manifest_path();
    let json = manifest.to_json()?;
    std::fs::write(&path, json).map_err(|source| ManifestError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Build and write the manifest. Nothing is written if building fails.
pub fn run(config: &Config) -> Result<(Manifest, PathBuf), ManifestError> {
    let manifest = build_manifest(config)?;
    let path = write_manifest(&manifest, config)?;
    Ok((manifest, path))
}
