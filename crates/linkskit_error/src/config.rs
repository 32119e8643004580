//! Links configuration error types.

/// Kinds of links configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Configuration file could not be read
    #[display("Failed to read links config: {_0}")]
    Read(String),
    /// Configuration text is not valid TOML or names an unknown platform
    #[display("Failed to parse links config: {_0}")]
    Parse(String),
    /// Configuration could not be written as TOML
    #[display("Failed to serialize links config: {_0}")]
    Serialize(String),
}

/// Links configuration error with location tracking.
///
/// # Examples
///
/// ```
/// use linkskit_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Parse("expected `=`".to_string()));
/// assert!(matches!(err.kind(), ConfigErrorKind::Parse(_)));
/// assert!(err.to_string().contains("expected `=`"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    line: u32,
    file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}

impl From<ConfigErrorKind> for ConfigError {
    #[track_caller]
    fn from(kind: ConfigErrorKind) -> Self {
        Self::new(kind)
    }
}
