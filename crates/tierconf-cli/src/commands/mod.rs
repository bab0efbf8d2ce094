//! Command implementations for tierconf-cli

pub mod edit;
pub mod env_key;
pub mod get;
pub mod merge;
pub mod show;

pub use edit::{run_delete, run_set};
pub use env_key::run_env_key;
pub use get::run_get;
pub use merge::run_merge;
pub use show::run_show;
