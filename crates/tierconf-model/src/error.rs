//! Error types for tierconf-model

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] tierconf_fs::Error),

    #[error("Config stream I/O failed: {source}")]
    Stream {
        #[source]
        source: std::io::Error,
    },

    #[error("section not found: {section}")]
    SectionNotFound { section: String },

    #[error("option not found: {option} (section {section:?})")]
    OptionNotFound { section: String, option: String },

    #[error("section {section:?} cannot be removed")]
    ProtectedSection { section: String },

    #[error("invalid {argument}: {value:?}")]
    InvalidArgument {
        argument: &'static str,
        value: String,
    },

    #[error("could not parse line {line}: {content}")]
    Syntax { line: usize, content: String },

    #[error("possible cycle while expanding {option:?} in section {section:?}: max depth reached")]
    InterpolationDepth { section: String, option: String },
}

impl Error {
    pub(crate) fn section_not_found(section: &str) -> Self {
        Self::SectionNotFound {
            section: section.to_string(),
        }
    }

    pub(crate) fn option_not_found(section: &str, option: &str) -> Self {
        Self::OptionNotFound {
            section: section.to_string(),
            option: option.to_string(),
        }
    }
}
