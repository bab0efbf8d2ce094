//! Serialization of a model back to the line format.
//!
//! Output re-parses to an equal model. Comments from a parsed source are not
//! kept, since the model does not hold them; only an optional header is
//! written. Multi-line values are written with their embedded newlines, so
//! nothing may be emitted between a value's lines.

use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::{Config, DEFAULT_SECTION, Error, Result};

impl Config {
    /// Render the model, prefixed by `header` as comment lines when non-empty.
    pub fn render(&self, header: &str) -> String {
        let mut out = String::new();
        let prefix = self.format().comment_prefix();

        if !header.is_empty() {
            for line in header.lines() {
                out.push_str(prefix);
                out.push_str(line);
                out.push('\n');
            }
        }

        for section in self.sections() {
            if section == DEFAULT_SECTION && self.option_count(section) == 0 {
                continue;
            }
            out.push('\n');
            out.push('[');
            out.push_str(section);
            out.push_str("]\n");
            for (option, value) in self.ordered_options(section) {
                out.push_str(option);
                out.push_str(self.format().separator());
                out.push_str(value);
                out.push('\n');
            }
        }

        out
    }

    /// Write the rendered model to a byte stream.
    pub fn write_to<W: Write>(&self, mut writer: W, header: &str) -> Result<()> {
        writer
            .write_all(self.render(header).as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|source| Error::Stream { source })
    }

    /// Replace the file at `path` with the rendered model.
    pub fn write_file(&self, path: impl AsRef<Path>, mode: u32, header: &str) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), mode = %format!("{mode:o}"), "writing config file");
        tierconf_fs::write_atomic(path, self.render(header).as_bytes(), mode)?;
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(""))
    }
}
