//! Comment prefix and separator conventions used when writing a model.
//!
//! Both are closed sets. A [`Format`] built from the enums is always valid;
//! string input goes through [`FromStr`] and is rejected with
//! [`Error::InvalidArgument`].

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Prefix written in front of comment lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comment {
    /// `"# "`
    #[default]
    Hash,
    /// `"; "`
    Semicolon,
}

impl Comment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hash => "# ",
            Self::Semicolon => "; ",
        }
    }
}

impl FromStr for Comment {
    type Err = Error;

    /// Accepts the full prefix (`"# "`) or the bare marker (`"#"`).
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "# " | "#" => Ok(Self::Hash),
            "; " | ";" => Ok(Self::Semicolon),
            _ => Err(Error::InvalidArgument {
                argument: "comment prefix",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base token between an option name and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    /// `":"`
    #[default]
    Colon,
    /// `"="`
    Equals,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Colon => ":",
            Self::Equals => "=",
        }
    }
}

impl FromStr for Separator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            ":" => Ok(Self::Colon),
            "=" => Ok(Self::Equals),
            _ => Err(Error::InvalidArgument {
                argument: "separator",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writing conventions of a [`Config`](crate::Config), fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    comment: Comment,
    separator: String,
}

impl Format {
    /// Build a format, padding the separator with a space on either side
    /// as requested.
    pub fn new(
        comment: Comment,
        separator: Separator,
        space_before: bool,
        space_after: bool,
    ) -> Self {
        let mut padded = String::with_capacity(3);
        if space_before {
            padded.push(' ');
        }
        padded.push_str(separator.as_str());
        if space_after {
            padded.push(' ');
        }
        Self {
            comment,
            separator: padded,
        }
    }

    /// Build a format from untyped input, e.g. command-line flags.
    pub fn parse(
        comment: &str,
        separator: &str,
        space_before: bool,
        space_after: bool,
    ) -> Result<Self> {
        Ok(Self::new(
            comment.parse()?,
            separator.parse()?,
            space_before,
            space_after,
        ))
    }

    /// The comment prefix, e.g. `"# "`.
    pub fn comment_prefix(&self) -> &'static str {
        self.comment.as_str()
    }

    /// The separator including any padding, e.g. `": "`.
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for Format {
    /// `"# "` comments and `": "` separators.
    fn default() -> Self {
        Self::new(Comment::Hash, Separator::Colon, false, true)
    }
}
