//! Error types for the LinksKit library.
//!
//! Every error records the file and line where it was created.

#![warn(missing_docs)]

mod build;
mod config;

pub use build::{BuildError, BuildErrorKind};
pub use config::{ConfigError, ConfigErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum LinksKitErrorKind {
    /// Profile URL could not be built
    #[display("{_0}")]
    Build(BuildError),
    /// Configuration could not be loaded
    #[display("{_0}")]
    Config(ConfigError),
}

/// LinksKit error with kind discrimination.
#[derive(Debug, derive_more::Display)]
#[display("LinksKit Error: {}", _0)]
pub struct LinksKitError(Box<LinksKitErrorKind>);

impl LinksKitError {
    /// Create a new error from a kind.
    pub fn new(kind: LinksKitErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LinksKitErrorKind {
        &self.0
    }
}

impl std::error::Error for LinksKitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            LinksKitErrorKind::Build(e) => Some(e),
            LinksKitErrorKind::Config(e) => Some(e),
        }
    }
}

// Generic From implementation for any type that converts to LinksKitErrorKind
impl<T> From<T> for LinksKitError
where
    T: Into<LinksKitErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for LinksKit operations.
pub type LinksKitResult<T> = std::result::Result<T, LinksKitError>;
