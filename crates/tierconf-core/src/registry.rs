//! Option registry boundary.
//!
//! A registry owns the live value of every option in one scope. Resolution
//! reads names and explicit-set state from it and writes winning values
//! back, tagged with where they came from.

use std::fmt;

use crate::Result;

/// Where an option's current value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Origin {
    /// Compiled-in default; nothing overrode it
    #[default]
    Default,
    /// Assigned by the caller, e.g. parsed from command-line arguments
    Explicit,
    /// Taken from an environment variable
    Environment,
    /// Taken from the config file
    File,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Default => "default",
            Self::Explicit => "explicit",
            Self::Environment => "environment",
            Self::File => "file",
        })
    }
}

/// Per-scope store of option values consumed by the resolver.
pub trait OptionRegistry {
    /// All option names, in a stable order.
    fn option_names(&self) -> Vec<String>;

    /// Current value as a string, `None` if the option is unknown.
    fn value(&self, name: &str) -> Option<String>;

    /// Whether the caller assigned the option before resolution.
    fn is_explicit(&self, name: &str) -> bool;

    /// Store `value` for `name`, validating it against the option's type.
    fn assign(&mut self, name: &str, value: &str, origin: Origin) -> Result<()>;
}
