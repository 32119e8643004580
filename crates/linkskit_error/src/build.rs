//! Profile URL construction error types.

/// Kinds of profile URL construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum BuildErrorKind {
    /// Handle was empty or contained only whitespace
    #[display("Handle is empty")]
    EmptyHandle,
    /// Handle would be dropped or rewritten by path normalization
    #[display("Invalid handle: {_0:?}")]
    InvalidHandle(String),
    /// Mastodon instance was empty or contained only whitespace
    #[display("Instance is empty")]
    EmptyInstance,
    /// Mastodon instance is not a bare host
    #[display("Invalid instance: {_0:?}")]
    InvalidInstance(String),
    /// URL parser rejected the composed URL
    #[display("Malformed URL: {_0}")]
    MalformedUrl(String),
}

/// Profile URL construction error with location tracking.
///
/// # Examples
///
/// ```
/// use linkskit_error::{BuildError, BuildErrorKind};
///
/// let err = BuildError::new(BuildErrorKind::EmptyHandle);
/// assert_eq!(err.kind(), &BuildErrorKind::EmptyHandle);
/// assert!(format!("{}", err).contains("Handle is empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Build Error: {} at line {} in {}", kind, line, file)]
pub struct BuildError {
    kind: BuildErrorKind,
    line: u32,
    file: &'static str,
}

impl BuildError {
    /// Create a new build error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BuildErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BuildErrorKind {
        &self.kind
    }

    /// Line number where the error was created.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// File where the error was created.
    pub fn file(&self) -> &'static str {
        self.file
    }
}

impl From<BuildErrorKind> for BuildError {
    #[track_caller]
    fn from(kind: BuildErrorKind) -> Self {
        Self::new(kind)
    }
}
