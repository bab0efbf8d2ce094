//! Ordered configuration model for tierconf.
//!
//! A [`Config`] holds named sections of string options and remembers the
//! order in which both were first seen. It is filled by the line parser
//! ([`Config::read`]), edited in place, merged with other models, and
//! rendered back to text by the writer ([`Config::render`]).
//!
//! # Format
//!
//! ```text
//! [section-name]
//! option1: value1
//! option2 = value2   ; inline comment
//! multiline: first line
//!   second line
//! # full-line comment
//! ```
//!
//! Options that appear before any `[section]` header belong to the section
//! named `""`. The `DEFAULT` section always exists.

pub mod error;
pub mod format;
pub mod interpolate;
pub mod model;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use format::{Comment, Format, Separator};
pub use interpolate::MAX_EXPANSION_DEPTH;
pub use model::{Config, DEFAULT_SECTION};
