//! Merge command: fold several files into one

use std::path::{Path, PathBuf};

use colored::Colorize;
use tierconf_core::ConfigStore;
use tierconf_model::{Config, Format};

use crate::error::Result;

/// Merge `sources` into `target` in order and rewrite `target`.
///
/// A missing target starts empty. Sources must exist.
pub fn run_merge(target: &Path, format: Format, sources: &[PathBuf]) -> Result<()> {
    let mut store = ConfigStore::open_or_create(target, format.clone())?;

    for source in sources {
        let config = Config::read_file(source, format.clone())?;
        tracing::debug!(source = %source.display(), "merging");
        store.config_mut().merge(&config);
    }

    let names: Vec<String> = sources.iter().map(|s| s.display().to_string()).collect();
    store.persist(&format!("merged from {}", names.join(", ")))?;

    println!(
        "{} {} file(s) into {}",
        "merged".green().bold(),
        sources.len(),
        target.display()
    );
    Ok(())
}
