//! Override resolution and persisted option store for tierconf
//!
//! This crate layers three sources over compiled-in defaults:
//!
//! - **Explicit** assignments, e.g. command-line flags
//! - **Environment** variables derived from a prefix, scope and option name
//! - **File** values from a [`tierconf_model::Config`]
//!
//! # Architecture
//!
//! ```text
//!              tierconf-cli
//!                   |
//!             tierconf-core
//!        (Resolver, ConfigStore, FlagSet)
//!                   |
//!            tierconf-model
//!                   |
//!             tierconf-fs
//! ```
//!
//! The resolver never touches process-wide state: the environment and the
//! registries are passed in, so several stores can live in one process.

pub mod env;
pub mod error;
pub mod flags;
pub mod registry;
pub mod resolver;
pub mod store;

pub use env::{Environment, MapEnv, ProcessEnv, env_key};
pub use error::{Error, Result};
pub use flags::{Flag, FlagKind, FlagSet, parse_bool};
pub use registry::{OptionRegistry, Origin};
pub use resolver::{Rejection, Resolution, Resolver};
pub use store::{ConfigStore, GLOBAL_SCOPE};
