//! Error types for tierconf-core

/// Result type for tierconf-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or persisting options
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Option is not declared in the addressed scope
    #[error("Unknown option {name:?} in scope {scope:?}")]
    UnknownOption { scope: String, name: String },

    /// A typed option rejected a string value
    #[error("Invalid value {value:?} for option {name:?}: {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },

    /// Scope has not been registered with the store
    #[error("Scope not registered: {scope:?}")]
    UnknownScope { scope: String },

    /// Command-line flag expects a value but none followed
    #[error("flag needs an argument: -{name}")]
    MissingFlagValue { name: String },

    /// Command-line argument names no declared flag
    #[error("flag provided but not defined: {arg}")]
    UnknownFlag { arg: String },

    // Transparent wrappers for underlying crate errors
    /// Model error from tierconf-model
    #[error(transparent)]
    Model(#[from] tierconf_model::Error),

    /// Filesystem error from tierconf-fs
    #[error(transparent)]
    Fs(#[from] tierconf_fs::Error),
}
