//! Ordered section/option model.
//!
//! Lookups go through hash maps; order comes from positions handed out by
//! per-model and per-section counters. Every mutation updates both, and all
//! iteration sorts by position, never by map order.

use std::collections::HashMap;

use crate::{Error, Format, Result};

/// Name of the section that always exists.
pub const DEFAULT_SECTION: &str = "DEFAULT";

#[derive(Debug, Clone)]
struct Value {
    position: usize,
    text: String,
}

#[derive(Debug, Clone)]
struct Section {
    position: usize,
    next_option: usize,
    options: HashMap<String, Value>,
}

impl Section {
    fn new(position: usize) -> Self {
        Self {
            position,
            next_option: 0,
            options: HashMap::new(),
        }
    }

    fn ordered(&self) -> Vec<(&str, &str)> {
        let mut options: Vec<_> = self.options.iter().collect();
        options.sort_by_key(|(_, v)| v.position);
        options
            .into_iter()
            .map(|(name, v)| (name.as_str(), v.text.as_str()))
            .collect()
    }
}

/// In-memory configuration: sections of string options, in insertion order.
///
/// The `DEFAULT` section is created with the model and cannot be removed.
/// Comments are not part of the model.
#[derive(Debug, Clone)]
pub struct Config {
    format: Format,
    next_section: usize,
    sections: HashMap<String, Section>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Format::default())
    }
}

impl PartialEq for Config {
    /// Same format, same sections and options in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.format == other.format
            && self.sections() == other.sections()
            && self.sections().iter().all(|s| {
                self.sections[*s].ordered() == other.sections[*s].ordered()
            })
    }
}

impl Config {
    /// Create an empty model holding only the `DEFAULT` section.
    pub fn new(format: Format) -> Self {
        let mut config = Self {
            format,
            next_section: 0,
            sections: HashMap::new(),
        };
        config.add_section(DEFAULT_SECTION);
        config
    }

    pub fn format(&self) -> &Format {
        &self.format
    }

    /// Append a section if absent. Returns whether it was created.
    pub fn add_section(&mut self, section: &str) -> bool {
        if self.sections.contains_key(section) {
            return false;
        }
        let position = self.next_section;
        self.next_section += 1;
        self.sections.insert(section.to_string(), Section::new(position));
        true
    }

    /// Set an option, creating its section when missing.
    ///
    /// New options go to the end of the section; overwriting keeps the
    /// original position. Returns whether the option was new.
    pub fn add_option(&mut self, section: &str, option: &str, value: impl Into<String>) -> bool {
        self.add_section(section);
        let Some(entry) = self.sections.get_mut(section) else {
            return false;
        };
        let text = value.into();

        if let Some(existing) = entry.options.get_mut(option) {
            existing.text = text;
            return false;
        }

        let position = entry.next_option;
        entry.next_option += 1;
        entry.options.insert(option.to_string(), Value { position, text });
        true
    }

    /// Remove an option from a section.
    pub fn remove_option(&mut self, section: &str, option: &str) -> Result<()> {
        let entry = self
            .sections
            .get_mut(section)
            .ok_or_else(|| Error::section_not_found(section))?;
        entry
            .options
            .remove(option)
            .map(|_| ())
            .ok_or_else(|| Error::option_not_found(section, option))
    }

    /// Remove a section and all of its options. `DEFAULT` is refused.
    pub fn remove_section(&mut self, section: &str) -> Result<()> {
        if section == DEFAULT_SECTION {
            return Err(Error::ProtectedSection {
                section: section.to_string(),
            });
        }
        self.sections
            .remove(section)
            .map(|_| ())
            .ok_or_else(|| Error::section_not_found(section))
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    pub fn has_option(&self, section: &str, option: &str) -> bool {
        self.sections
            .get(section)
            .is_some_and(|s| s.options.contains_key(option))
    }

    /// Section names in insertion order, `DEFAULT` included.
    pub fn sections(&self) -> Vec<&str> {
        let mut sections: Vec<_> = self.sections.iter().collect();
        sections.sort_by_key(|(_, s)| s.position);
        sections.into_iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Option names of one section in insertion order.
    pub fn options(&self, section: &str) -> Result<Vec<&str>> {
        let entry = self
            .sections
            .get(section)
            .ok_or_else(|| Error::section_not_found(section))?;
        Ok(entry.ordered().into_iter().map(|(name, _)| name).collect())
    }

    /// Number of options in a section; zero when the section is absent.
    pub fn option_count(&self, section: &str) -> usize {
        self.sections.get(section).map_or(0, |s| s.options.len())
    }

    /// `(option, value)` pairs of one section in order; empty when absent.
    pub(crate) fn ordered_options(&self, section: &str) -> Vec<(&str, &str)> {
        self.sections
            .get(section)
            .map(Section::ordered)
            .unwrap_or_default()
    }

    /// All `(section, option, value)` triples in order.
    pub fn entries(&self) -> Vec<(&str, &str, &str)> {
        self.sections()
            .into_iter()
            .flat_map(|section| {
                self.sections[section]
                    .ordered()
                    .into_iter()
                    .map(move |(option, value)| (section, option, value))
            })
            .collect()
    }

    /// Literal value of an option. No `DEFAULT` fallback, no expansion.
    pub fn raw_string(&self, section: &str, option: &str) -> Result<&str> {
        let entry = self
            .sections
            .get(section)
            .ok_or_else(|| Error::section_not_found(section))?;
        entry
            .options
            .get(option)
            .map(|v| v.text.as_str())
            .ok_or_else(|| Error::option_not_found(section, option))
    }

    /// Copy every option of `source` into this model; `source` wins on conflict.
    pub fn merge(&mut self, source: &Config) {
        for (section, option, value) in source.entries() {
            self.add_option(section, option, value);
        }
    }
}
