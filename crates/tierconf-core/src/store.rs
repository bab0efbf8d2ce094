//! Model, backing file, environment and registered scopes in one place.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tierconf_fs::DEFAULT_FILE_MODE;
use tierconf_model::{Config, Format};

use crate::env::{Environment, ProcessEnv};
use crate::resolver::{Resolution, Resolver};
use crate::{Error, FlagSet, OptionRegistry, Result};

/// Name of the global scope. It is always registered.
pub const GLOBAL_SCOPE: &str = "";

/// Persisted option store with three-tier resolution.
///
/// Each registered scope is a [`FlagSet`] whose options are looked up in the
/// config section of the same name. `set` and `delete` rewrite the backing
/// file when one is configured.
///
/// # Example
///
/// ```ignore
/// use tierconf_core::{ConfigStore, FlagSet};
/// use tierconf_model::Format;
///
/// let mut store = ConfigStore::open("app.ini", Format::default())?.with_env_prefix("APP_");
/// store.global_mut().string("host", "localhost", "server host");
/// store.parse_args(std::env::args().skip(1))?;
/// println!("host = {:?}", store.global().get("host"));
/// ```
#[derive(Debug)]
pub struct ConfigStore<E = ProcessEnv> {
    config: Config,
    path: Option<PathBuf>,
    file_mode: u32,
    env_prefix: Option<String>,
    env: E,
    global: FlagSet,
    scopes: BTreeMap<String, FlagSet>,
}

impl ConfigStore<ProcessEnv> {
    /// Wrap a model with no backing file and the process environment.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            path: None,
            file_mode: DEFAULT_FILE_MODE,
            env_prefix: None,
            env: ProcessEnv,
            global: FlagSet::new(GLOBAL_SCOPE),
            scopes: BTreeMap::new(),
        }
    }

    /// Read `path` and use it as the backing file.
    pub fn open(path: impl AsRef<Path>, format: Format) -> Result<Self> {
        let path = path.as_ref();
        let config = Config::read_file(path, format)?;
        Ok(Self::new(config).with_file(path))
    }

    /// Like [`open`](Self::open), but a missing file yields an empty model.
    pub fn open_or_create(path: impl AsRef<Path>, format: Format) -> Result<Self> {
        let path = path.as_ref();
        let config = match tierconf_fs::read_text_if_exists(path)? {
            Some(text) => Config::from_str_with(&text, format)?,
            None => {
                tracing::debug!(path = %path.display(), "config file missing, starting empty");
                Config::new(format)
            }
        };
        Ok(Self::new(config).with_file(path))
    }
}

impl<E: Environment> ConfigStore<E> {
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_file_mode(mut self, mode: u32) -> Self {
        self.file_mode = mode;
        self
    }

    /// Enable environment overrides; an empty prefix disables them.
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.env_prefix = (!prefix.is_empty()).then_some(prefix);
        self
    }

    /// Swap the environment lookup.
    pub fn with_environment<E2: Environment>(self, env: E2) -> ConfigStore<E2> {
        ConfigStore {
            config: self.config,
            path: self.path,
            file_mode: self.file_mode,
            env_prefix: self.env_prefix,
            env,
            global: self.global,
            scopes: self.scopes,
        }
    }

    /// Register a scope, replacing any previous flag set of that name.
    pub fn register(&mut self, scope: impl Into<String>, flags: FlagSet) -> Option<FlagSet> {
        let scope = scope.into();
        if scope == GLOBAL_SCOPE {
            return Some(std::mem::replace(&mut self.global, flags));
        }
        self.scopes.insert(scope, flags)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn env_prefix(&self) -> Option<&str> {
        self.env_prefix.as_deref()
    }

    /// Registered scope names; the global scope sorts first.
    pub fn scope_names(&self) -> Vec<&str> {
        std::iter::once(GLOBAL_SCOPE)
            .chain(self.scopes.keys().map(String::as_str))
            .collect()
    }

    pub fn scope(&self, scope: &str) -> Option<&FlagSet> {
        if scope == GLOBAL_SCOPE {
            return Some(&self.global);
        }
        self.scopes.get(scope)
    }

    pub fn scope_mut(&mut self, scope: &str) -> Result<&mut FlagSet> {
        if scope == GLOBAL_SCOPE {
            return Ok(&mut self.global);
        }
        self.scopes.get_mut(scope).ok_or_else(|| Error::UnknownScope {
            scope: scope.to_string(),
        })
    }

    pub fn global(&self) -> &FlagSet {
        &self.global
    }

    pub fn global_mut(&mut self) -> &mut FlagSet {
        &mut self.global
    }

    /// A resolver over this store's model and environment.
    pub fn resolver(&self) -> Resolver<'_, E> {
        Resolver::new(&self.config, &self.env).with_env_prefix(self.env_prefix.as_deref())
    }

    /// Resolve a registry owned by the caller as if it were `scope`.
    pub fn resolve_into<R: OptionRegistry + ?Sized>(
        &self,
        scope: &str,
        registry: &mut R,
    ) -> Vec<Resolution> {
        self.resolver().resolve(scope, registry)
    }

    /// Resolve every registered scope.
    ///
    /// Every scope is resolved even when some values are refused; the
    /// refusals are in each scope's report as [`Resolution::rejected`].
    pub fn parse_all(&mut self) -> BTreeMap<String, Vec<Resolution>> {
        let resolver =
            Resolver::new(&self.config, &self.env).with_env_prefix(self.env_prefix.as_deref());
        let mut report = BTreeMap::new();
        report.insert(
            GLOBAL_SCOPE.to_string(),
            resolver.resolve(GLOBAL_SCOPE, &mut self.global),
        );
        for (scope, flags) in &mut self.scopes {
            report.insert(scope.clone(), resolver.resolve(scope, flags));
        }
        report
    }

    /// Parse command-line arguments into the global scope, then resolve all
    /// scopes. Returns the arguments left unparsed.
    pub fn parse_args<I, S>(&mut self, args: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rest = self.global_mut().parse_args(args)?;
        self.parse_all();
        Ok(rest)
    }

    /// Assign `value` explicitly and persist it.
    ///
    /// The value goes into the flag set when the scope declares `name`, and
    /// into the model's `scope` section either way. For the global scope
    /// that is the unnamed section, never `DEFAULT`.
    pub fn set(&mut self, scope: &str, name: &str, value: &str) -> Result<()> {
        match self.scope_mut(scope) {
            Ok(flags) if flags.flag(name).is_some() => flags.set(name, value)?,
            _ => tracing::debug!(scope, name, "option not declared, writing to file only"),
        }
        self.config.add_option(scope, name, value);
        self.persist(&format!("action set {scope}:{name} = {value}"))?;
        Ok(())
    }

    /// Remove an option from the model and persist the change.
    ///
    /// Only the literal `scope` section is touched. A global option that
    /// resolves from `DEFAULT` is not found here; delete it through
    /// `config_mut` or by addressing `DEFAULT` as the scope.
    pub fn delete(&mut self, scope: &str, name: &str) -> Result<()> {
        self.config.remove_option(scope, name)?;
        self.persist(&format!("action delete {scope}:{name}"))?;
        Ok(())
    }

    /// Rewrite the backing file. Returns `false` when there is none.
    pub fn persist(&self, header: &str) -> Result<bool> {
        let Some(path) = self.path.as_deref() else {
            tracing::debug!("no backing file, skipping persist");
            return Ok(false);
        };
        self.config.write_file(path, self.file_mode, header)?;
        Ok(true)
    }
}
