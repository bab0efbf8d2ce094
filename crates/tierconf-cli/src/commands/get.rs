//! Get command: print one option's value

use std::path::Path;

use tierconf_model::{Config, Format};

use crate::error::Result;

/// Print the value of `section`/`option` in `file`.
pub fn run_get(file: &Path, format: Format, section: &str, option: &str, raw: bool) -> Result<()> {
    let config = Config::read_file(file, format)?;
    println!("{}", lookup(&config, section, option, raw)?);
    Ok(())
}

/// Literal text when `raw`, otherwise the interpolated value.
pub fn lookup(config: &Config, section: &str, option: &str, raw: bool) -> Result<String> {
    if raw {
        Ok(config.raw_string(section, option)?.to_string())
    } else {
        Ok(config.string(section, option)?)
    }
}
