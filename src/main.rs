use clap::Parser;
use photo_manifest::{Config, config, manifest, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "generate-manifest")]
#[command(about = "Normalize photo filenames and write manifest.json")]
#[command(long_about = "\
Normalize photo filenames and write manifest.json

Scans four buckets under the root, renames every image to a canonical
kebab-case name, and writes <root>/manifest.json.

Layout:

  assets/photos/
  ├── gallery/          # [\"gallery/foo.jpg\", ...]
  ├── departments/      # [{\"src\": ..., \"caption\": ...}, ...]
  ├── staff/            # [{\"src\": ..., \"caption\": ...}, ...]
  └── media/            # [\"media/clip.gif\", ...]

Missing buckets are written as empty lists. Nested directories are scanned
but flattened in the manifest (gallery/2024/IMG_01.jpg → gallery/img-01.jpg).

Renames happen in place and are not undone.")]
#[command(version)]
struct Cli {
    /// Root of the asset tree
    #[arg(long, default_value = config::DEFAULT_ROOT)]
    root: PathBuf,

    /// Log each rename and bucket to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::with_root(cli.root);
    let (manifest, path) = manifest::run(&config)?;
    tracing::debug!(images = manifest.image_count(), "manifest complete");
    output::print_written(&path);

    Ok(())
}

/// Diagnostics go to stderr so stdout carries only the confirmation line.
/// `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
