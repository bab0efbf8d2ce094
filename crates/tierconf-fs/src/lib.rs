//! File I/O boundary for tierconf
//!
//! Whole-file reads and atomic whole-file writes. Everything above this
//! crate works on in-memory text.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{DEFAULT_FILE_MODE, read_text, read_text_if_exists, write_atomic};
