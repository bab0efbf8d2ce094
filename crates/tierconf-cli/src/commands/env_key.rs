//! Env-key command: show which variable overrides an option

use tierconf_core::env_key;

use crate::error::{CliError, Result};

/// Print the environment variable name for `scope`/`name` under `prefix`.
pub fn run_env_key(prefix: &str, scope: &str, name: &str) -> Result<()> {
    println!("{}", key_for(prefix, scope, name)?);
    Ok(())
}

fn key_for(prefix: &str, scope: &str, name: &str) -> Result<String> {
    env_key(prefix, scope, name).ok_or_else(|| {
        CliError::user("an empty prefix disables environment overrides; pass --prefix")
    })
}
