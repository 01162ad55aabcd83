//! Shared test utilities.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = build_manifest(&Config::with_root(tmp.path())).unwrap();
//!
//! let tmp = TempDir::new().unwrap();
//! write_files(tmp.path(), &["gallery/a.jpg", "staff/Jane Doe.png"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

/// Contents written by [`write_files`]. Discovery only looks at names.
pub const FAKE_IMAGE: &str = "fake image";

/// Copy `fixtures/photos/` to a temp directory and return it.
///
/// Runs rename files, so every test gets its own copy.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/photos");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Create each relative path under `root` (parents included) holding
/// [`FAKE_IMAGE`].
pub fn write_files(root: &Path, files: &[&str]) {
    for rel in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, FAKE_IMAGE).unwrap();
    }
}
