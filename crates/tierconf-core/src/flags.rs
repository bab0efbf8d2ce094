//! A typed, ordered flag set usable as an [`OptionRegistry`].
//!
//! Values are kept as strings. The declared [`FlagKind`] only decides which
//! strings are accepted and how the typed getters decode them.

use std::collections::HashMap;

use crate::{Error, OptionRegistry, Origin, Result};

/// Accepted value type of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    String,
    Bool,
    Int,
    Float,
}

impl FlagKind {
    fn check(&self, value: &str) -> std::result::Result<(), String> {
        match self {
            Self::String => Ok(()),
            Self::Bool => parse_bool(value)
                .map(|_| ())
                .ok_or_else(|| "expected a boolean".to_string()),
            Self::Int => value.parse::<i64>().map(|_| ()).map_err(|e| e.to_string()),
            Self::Float => value.parse::<f64>().map(|_| ()).map_err(|e| e.to_string()),
        }
    }
}

/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// One declared option.
#[derive(Debug, Clone, PartialEq)]
pub struct Flag {
    pub name: String,
    pub kind: FlagKind,
    pub usage: String,
    pub default: String,
    value: String,
    origin: Origin,
}

impl Flag {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }
}

/// Named, ordered collection of flags; one per scope.
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    name: String,
    flags: Vec<Flag>,
    index: HashMap<String, usize>,
}

impl FlagSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare a flag. Declaring an existing name replaces it in place.
    pub fn define(
        &mut self,
        name: &str,
        kind: FlagKind,
        default: impl Into<String>,
        usage: impl Into<String>,
    ) -> &mut Self {
        let default = default.into();
        let flag = Flag {
            name: name.to_string(),
            kind,
            usage: usage.into(),
            value: default.clone(),
            default,
            origin: Origin::Default,
        };
        match self.index.get(name) {
            Some(&i) => {
                tracing::warn!(scope = %self.name, name, "flag redefined");
                self.flags[i] = flag;
            }
            None => {
                self.index.insert(name.to_string(), self.flags.len());
                self.flags.push(flag);
            }
        }
        self
    }

    pub fn string(&mut self, name: &str, default: &str, usage: &str) -> &mut Self {
        self.define(name, FlagKind::String, default, usage)
    }

    pub fn bool(&mut self, name: &str, default: bool, usage: &str) -> &mut Self {
        self.define(name, FlagKind::Bool, default.to_string(), usage)
    }

    pub fn int(&mut self, name: &str, default: i64, usage: &str) -> &mut Self {
        self.define(name, FlagKind::Int, default.to_string(), usage)
    }

    pub fn float(&mut self, name: &str, default: f64, usage: &str) -> &mut Self {
        self.define(name, FlagKind::Float, default.to_string(), usage)
    }

    pub fn flag(&self, name: &str) -> Option<&Flag> {
        self.index.get(name).map(|&i| &self.flags[i])
    }

    /// Flags in declaration order.
    pub fn flags(&self) -> impl Iterator<Item = &Flag> {
        self.flags.iter()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.flag(name).map(Flag::value)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(parse_bool)
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(|v| v.parse().ok())
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|v| v.parse().ok())
    }

    /// Explicitly assign a value, as if given on the command line.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        self.assign(name, value, Origin::Explicit)
    }

    /// Parse `-name=value`, `--name=value`, `-name value` and bare `-name`
    /// for booleans, marking each as explicit.
    ///
    /// Stops at `--` or at the first positional argument and returns the
    /// arguments not consumed.
    pub fn parse_args<I, S>(&mut self, args: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut rest = Vec::new();

        while let Some(arg) = args.next() {
            if arg == "--" {
                rest.extend(args);
                break;
            }
            let body = match arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) {
                Some(body) if arg != "-" => body,
                _ => {
                    rest.push(arg);
                    rest.extend(args);
                    break;
                }
            };
            if body.is_empty() || body.starts_with('-') || body.starts_with('=') {
                return Err(Error::UnknownFlag { arg });
            }

            let (name, inline) = match body.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (body, None),
            };
            let Some(kind) = self.flag(name).map(|f| f.kind) else {
                return Err(Error::UnknownFlag { arg: arg.clone() });
            };

            let value = match (inline, kind) {
                (Some(value), _) => value,
                (None, FlagKind::Bool) => "true".to_string(),
                (None, _) => args.next().ok_or_else(|| Error::MissingFlagValue {
                    name: name.to_string(),
                })?,
            };
            self.set(name, &value)?;
        }

        Ok(rest)
    }
}

impl OptionRegistry for FlagSet {
    fn option_names(&self) -> Vec<String> {
        self.flags.iter().map(|f| f.name.clone()).collect()
    }

    fn value(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }

    fn is_explicit(&self, name: &str) -> bool {
        self.flag(name).is_some_and(|f| f.origin == Origin::Explicit)
    }

    fn assign(&mut self, name: &str, value: &str, origin: Origin) -> Result<()> {
        let Some(&i) = self.index.get(name) else {
            return Err(Error::UnknownOption {
                scope: self.name.clone(),
                name: name.to_string(),
            });
        };
        let flag = &mut self.flags[i];
        flag.kind.check(value).map_err(|reason| Error::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
            reason,
        })?;
        flag.value = value.to_string();
        flag.origin = origin;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_is_kept() {
        let mut flags = FlagSet::new("");
        flags.string("z", "", "").bool("a", false, "").float("m", 0.0, "");
        assert_eq!(flags.option_names(), vec!["z", "a", "m"]);
    }

    #[test]
    fn typed_defaults_render_as_strings() {
        let mut flags = FlagSet::new("");
        flags.bool("a", false, "").float("b", 0.5, "").int("c", -3, "");
        assert_eq!(flags.get("a"), Some("false"));
        assert_eq!(flags.get_float("b"), Some(0.5));
        assert_eq!(flags.get_int("c"), Some(-3));
    }

    #[test]
    fn redefining_replaces_in_place() {
        let mut flags = FlagSet::new("");
        flags.string("a", "1", "").string("b", "2", "").string("a", "3", "");
        assert_eq!(flags.option_names(), vec!["a", "b"]);
        assert_eq!(flags.get("a"), Some("3"));
    }
}
