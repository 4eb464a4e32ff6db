//! List every file under the given folders.
//!
//! Usage: `list_files [--json] <folder>...`
//!
//! Prints one full path per line, or one JSON object per item with
//! `--json`. Set `RUST_LOG=debug` to see which roots were dropped.

use honq::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let mut json = false;
    let mut folders = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            folders.push(arg);
        }
    }
    if folders.is_empty() {
        folders.push(".".to_string());
    }

    let files = Files::with_config(&folders, WalkConfig::new().with_sort_by_name(true));
    files.check_roots()?;
    info!("Walking {} of {} folder(s)", files.roots().len(), folders.len());

    let mut count = 0usize;
    for item in &files {
        if json {
            println!("{}", serde_json::to_string(&item)?);
        } else {
            println!("{}", item.full_path);
        }
        count += 1;
    }

    info!("Listed {} file(s)", count);
    Ok(())
}
