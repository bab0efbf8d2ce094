//! Environment lookup boundary and override key derivation.

use std::collections::HashMap;

/// Read-only key/value lookup standing in for the process environment.
pub trait Environment {
    fn lookup(&self, key: &str) -> Option<String>;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// An in-memory environment, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }
}

impl Environment for MapEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (k, v) in iter {
            env.insert(k, v);
        }
        env
    }
}

/// Environment variable consulted for option `name` of `scope`.
///
/// `UPPER(prefix + scope + "_" + name)` with dots in `name` turned into
/// underscores; the scope part is left out for the global scope. `None`
/// when no prefix is configured.
pub fn env_key(prefix: &str, scope: &str, name: &str) -> Option<String> {
    if prefix.is_empty() {
        return None;
    }
    let mut key = String::from(prefix);
    if !scope.is_empty() {
        key.push_str(scope);
        key.push('_');
    }
    key.push_str(&name.replace('.', "_"));
    Some(key.to_uppercase())
}
