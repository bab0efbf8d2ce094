//! Three-tier override resolution
//!
//! For every option of a scope, the effective value is chosen in this order:
//!
//! 1. **Explicit** - already assigned by the caller; left untouched
//! 2. **Environment** - `UPPER(prefix + scope + "_" + name)`, non-empty
//! 3. **File** - the option in the section named after the scope
//! 4. **Default** - whatever the registry was declared with
//!
//! The global scope (`""`) reads the unnamed section first and then the
//! `DEFAULT` section. Named scopes read only their own section.
//!
//! A value the registry refuses does not stop resolution. The option keeps
//! its current value, the refusal is logged and recorded in the report, and
//! the remaining options are resolved as usual.

use tierconf_model::{Config, DEFAULT_SECTION};

use crate::env::{Environment, env_key};
use crate::{OptionRegistry, Origin};

/// Outcome of resolving one option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub name: String,
    pub origin: Origin,
    pub value: String,
    /// Override the registry refused, if any.
    pub rejected: Option<Rejection>,
}

/// An environment or file value the registry would not accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub origin: Origin,
    pub value: String,
    pub reason: String,
}

/// Resolves registries against a model and an environment.
///
/// Holds only borrows; build one per resolution pass.
pub struct Resolver<'a, E: Environment + ?Sized> {
    config: &'a Config,
    env: &'a E,
    env_prefix: Option<&'a str>,
}

impl<'a, E: Environment + ?Sized> Resolver<'a, E> {
    /// A resolver with no environment prefix; the environment tier is skipped.
    pub fn new(config: &'a Config, env: &'a E) -> Self {
        Self {
            config,
            env,
            env_prefix: None,
        }
    }

    /// Enable the environment tier. An empty prefix disables it again.
    pub fn with_env_prefix(mut self, prefix: Option<&'a str>) -> Self {
        self.env_prefix = prefix.filter(|p| !p.is_empty());
        self
    }

    /// Environment variable name for an option, if the environment tier is on.
    pub fn env_key(&self, scope: &str, name: &str) -> Option<String> {
        env_key(self.env_prefix?, scope, name)
    }

    /// Non-empty environment override for an option.
    pub fn env_value(&self, scope: &str, name: &str) -> Option<String> {
        let key = self.env_key(scope, name)?;
        self.env.lookup(&key).filter(|v| !v.is_empty())
    }

    /// Persisted value for an option.
    pub fn file_value(&self, scope: &str, name: &str) -> Option<&'a str> {
        let config = self.config;
        config.raw_string(scope, name).ok().or_else(|| {
            if scope.is_empty() {
                config.raw_string(DEFAULT_SECTION, name).ok()
            } else {
                None
            }
        })
    }

    /// Resolve every option of `registry` as belonging to `scope`.
    ///
    /// Assigns winning environment and file values into the registry and
    /// reports the outcome per option, in the registry's order.
    pub fn resolve<R: OptionRegistry + ?Sized>(
        &self,
        scope: &str,
        registry: &mut R,
    ) -> Vec<Resolution> {
        let names = registry.option_names();
        let mut resolved = Vec::with_capacity(names.len());

        for name in names {
            let explicit = registry.is_explicit(&name);
            let candidate = if explicit {
                None
            } else if let Some(value) = self.env_value(scope, &name) {
                Some((Origin::Environment, value))
            } else {
                self.file_value(scope, &name)
                    .map(|value| (Origin::File, value.to_string()))
            };

            let resolution = match candidate {
                None => Resolution {
                    origin: if explicit {
                        Origin::Explicit
                    } else {
                        Origin::Default
                    },
                    value: registry.value(&name).unwrap_or_default(),
                    name,
                    rejected: None,
                },
                Some((origin, value)) => match registry.assign(&name, &value, origin) {
                    Ok(()) => Resolution {
                        name,
                        origin,
                        value,
                        rejected: None,
                    },
                    Err(err) => {
                        tracing::warn!(
                            scope,
                            name = %name,
                            %origin,
                            value = %value,
                            error = %err,
                            "override rejected, keeping current value"
                        );
                        Resolution {
                            origin: Origin::Default,
                            value: registry.value(&name).unwrap_or_default(),
                            name,
                            rejected: Some(Rejection {
                                origin,
                                value,
                                reason: err.to_string(),
                            }),
                        }
                    }
                },
            };

            tracing::debug!(
                scope,
                name = %resolution.name,
                origin = %resolution.origin,
                "resolved option"
            );
            resolved.push(resolution);
        }

        resolved
    }
}
