//! Find images, skipping temporary folders.
//!
//! Usage: `find_images [--case-sensitive] <folder>...`
//!
//! Finds all `.jpg` and `.jpeg` files, skipping any folder with "temp" in
//! its name and any file whose name starts with "thumb".

use honq::prelude::*;
use tracing::{Level, info};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let mut folders = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--case-sensitive" {
            // Must happen before any filter is built.
            set_ignore_case(false);
        } else {
            folders.push(arg);
        }
    }

    info!(
        "Searching {} folder(s), ignore case: {}",
        folders.len(),
        ignore_case()
    );

    let images = Files::new(&folders)
        .skip_folders(["temp"])?
        .types(["jpg", "jpeg"])?
        .not_like(["^thumb"])?
        .f_slash()
        .full();

    let mut found = 0usize;
    for path in &images {
        println!("{path}");
        found += 1;
    }

    info!("Found {} image(s)", found);
    Ok(())
}
