//! Line parser for the sectioned key/value format.
//!
//! ```text
//! [section]
//! option1: value1
//! option2 = value2   ; inline comment
//! multiline: first line
//!   second line
//! # full-line comment
//! ```
//!
//! Single pass, one line of state: the current section and, while a value
//! may still be continued, the option it belongs to.

use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use crate::{Config, Error, Format, Result};

/// Inline comment markers. Only recognised after a space or tab.
const INLINE_COMMENT_MARKERS: [&str; 4] = [" ;", "\t;", " #", "\t#"];

/// How a single trimmed, non-comment line is read.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Section(&'a str),
    Option { name: &'a str, value: &'a str },
    Continuation(&'a str),
}

fn classify(line: &str) -> Option<Line<'_>> {
    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return None;
    }
    if line.starts_with('[') && line.ends_with(']') {
        return Some(Line::Section(line[1..line.len() - 1].trim()));
    }
    match line.find(['=', ':']) {
        Some(i) if i > 0 => Some(Line::Option {
            name: line[..i].trim(),
            value: strip_inline_comment(&line[i + 1..]).trim(),
        }),
        _ => Some(Line::Continuation(strip_inline_comment(line).trim())),
    }
}

/// Cut a value at the earliest inline comment marker.
pub(crate) fn strip_inline_comment(value: &str) -> &str {
    INLINE_COMMENT_MARKERS
        .iter()
        .filter_map(|marker| value.find(marker))
        .min()
        .map_or(value, |i| &value[..i])
}

impl Config {
    /// Parse a byte stream into a new model using `format`.
    pub fn read<R: BufRead>(mut reader: R, format: Format) -> Result<Self> {
        let mut config = Config::new(format);
        let mut section = String::new();
        let mut option: Option<String> = None;
        let mut buf = String::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            let read = reader
                .read_line(&mut buf)
                .map_err(|source| Error::Stream { source })?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let Some(line) = classify(buf.trim()) else {
                continue;
            };

            match line {
                Line::Section(name) => {
                    option = None;
                    section = name.to_string();
                    config.add_section(&section);
                }
                Line::Option { name, value } => {
                    config.add_option(&section, name, value);
                    option = Some(name.to_string());
                }
                Line::Continuation(text) => {
                    let Some(name) = option.as_deref() else {
                        return Err(Error::Syntax {
                            line: line_no,
                            content: buf.trim().to_string(),
                        });
                    };
                    let joined = format!("{}\n{}", config.raw_string(&section, name)?, text);
                    config.add_option(&section, name, joined);
                }
            }
        }

        tracing::trace!(lines = line_no, sections = config.sections().len(), "parsed config");
        Ok(config)
    }

    /// Parse text into a new model using `format`.
    pub fn from_str_with(text: &str, format: Format) -> Result<Self> {
        Self::read(text.as_bytes(), format)
    }

    /// Read and parse a file.
    pub fn read_file(path: impl AsRef<Path>, format: Format) -> Result<Self> {
        let path = path.as_ref();
        let text = tierconf_fs::read_text(path)?;
        tracing::debug!(path = %path.display(), "reading config file");
        Self::from_str_with(&text, format)
    }

    /// Read and parse a file with the default format.
    pub fn read_default(path: impl AsRef<Path>) -> Result<Self> {
        Self::read_file(path, Format::default())
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with(s, Format::default())
    }
}
