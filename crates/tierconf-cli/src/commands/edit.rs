//! Set and delete commands

use std::path::Path;

use colored::Colorize;
use tierconf_core::ConfigStore;
use tierconf_model::Format;

use crate::error::Result;

/// Set `section`/`option` to `value`, creating `file` if it does not exist.
pub fn run_set(
    file: &Path,
    format: Format,
    section: &str,
    option: &str,
    value: &str,
) -> Result<()> {
    let mut store = ConfigStore::open_or_create(file, format)?;
    store.set(section, option, value)?;
    println!(
        "{} {}:{} = {}",
        "set".green().bold(),
        section,
        option,
        value
    );
    Ok(())
}

/// Remove `section`/`option` from `file`.
pub fn run_delete(file: &Path, format: Format, section: &str, option: &str) -> Result<()> {
    let mut store = ConfigStore::open(file, format)?;
    store.delete(section, option)?;
    println!("{} {}:{}", "deleted".yellow().bold(), section, option);
    Ok(())
}
