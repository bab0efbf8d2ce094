//! Show command: print a file's content in order

use std::path::Path;

use serde_json::json;
use tierconf_model::{Config, Format};

use crate::error::Result;

/// Print every section and option of `file`.
///
/// The plain output is the file re-rendered without comments, so it can be
/// parsed again.
pub fn run_show(file: &Path, format: Format, json: bool) -> Result<()> {
    let config = Config::read_file(file, format)?;
    if json {
        println!("{}", to_json(&config)?);
    } else {
        print!("{config}");
    }
    Ok(())
}

/// Sections in order, each with its options in order.
///
/// An array is used instead of an object so the order survives.
pub fn to_json(config: &Config) -> Result<String> {
    let mut sections = Vec::new();
    for section in config.sections() {
        let options: Vec<_> = config
            .options(section)?
            .into_iter()
            .map(|option| {
                json!({
                    "name": option,
                    "value": config.raw_string(section, option).unwrap_or_default(),
                })
            })
            .collect();
        sections.push(json!({ "name": section, "options": options }));
    }
    Ok(serde_json::to_string_pretty(&json!({ "sections": sections }))?)
}
