//! `%(name)s` reference expansion on top of the literal model.

use regex::Regex;
use std::sync::LazyLock;

use crate::{Config, DEFAULT_SECTION, Error, Result};

/// Maximum nesting depth of references, counted along one chain.
pub const MAX_EXPANSION_DEPTH: usize = 200;

static REFERENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%\(([a-zA-Z0-9_.\-]+)\)s").expect("Invalid reference regex"));

impl Config {
    /// Value of an option with `DEFAULT` fallback and references expanded.
    ///
    /// The option is looked up in `section`, then in `DEFAULT`. Each
    /// `%(name)s` is replaced by the expanded value of `name` from the same
    /// section or, failing that, from `DEFAULT`. Any number of references
    /// may sit side by side; only nesting counts towards the limit.
    ///
    /// # Errors
    ///
    /// `OptionNotFound` when the option or a referenced name is missing
    /// from both sections; `InterpolationDepth` when a reference refers
    /// back to itself or nests deeper than [`MAX_EXPANSION_DEPTH`].
    pub fn string(&self, section: &str, option: &str) -> Result<String> {
        let raw = self
            .lookup_with_default(section, option)
            .ok_or_else(|| Error::option_not_found(section, option))?;
        let mut chain = vec![option.to_string()];
        self.expand(section, option, raw, &mut chain)
    }

    /// Expand every reference in `value`. `chain` holds the names being
    /// expanded above this call.
    fn expand(
        &self,
        section: &str,
        option: &str,
        value: &str,
        chain: &mut Vec<String>,
    ) -> Result<String> {
        let mut out = String::with_capacity(value.len());
        let mut last = 0;
        for caps in REFERENCE_REGEX.captures_iter(value) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let name = name.as_str();
            if chain.len() > MAX_EXPANSION_DEPTH || chain.iter().any(|n| n == name) {
                tracing::warn!(
                    section,
                    option,
                    reference = name,
                    "reference expansion does not settle"
                );
                return Err(Error::InterpolationDepth {
                    section: section.to_string(),
                    option: option.to_string(),
                });
            }
            let raw = self
                .lookup_with_default(section, name)
                .ok_or_else(|| Error::option_not_found(section, name))?;

            chain.push(name.to_string());
            let expanded = self.expand(section, option, raw, chain)?;
            chain.pop();

            out.push_str(&value[last..whole.start()]);
            out.push_str(&expanded);
            last = whole.end();
        }
        out.push_str(&value[last..]);
        Ok(out)
    }

    fn lookup_with_default(&self, section: &str, option: &str) -> Option<&str> {
        self.raw_string(section, option)
            .or_else(|_| self.raw_string(DEFAULT_SECTION, option))
            .ok()
    }
}
