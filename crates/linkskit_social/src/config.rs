//! Declarative link configuration loaded from TOML.

use crate::{ResolvedLink, SocialLink};
use derive_getters::Getters;
use linkskit_error::{BuildError, ConfigError, ConfigErrorKind, LinksKitResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// What to do with a link whose profile URL cannot be built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidLinkPolicy {
    /// Leave the link out and log a warning
    #[default]
    Skip,
    /// Fail resolution with the link's error
    Fail,
}

/// A row of social links.
///
/// ```toml
/// on_invalid = "skip"
///
/// [[links]]
/// platform = "github"
/// handle = "torvalds"
///
/// [[links]]
/// platform = "mastodon"
/// instance = "mastodon.social"
/// handle = "alice"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct LinksConfig {
    /// Handling of links that cannot be resolved
    #[serde(default)]
    on_invalid: InvalidLinkPolicy,
    /// Links in display order
    #[serde(default)]
    links: Vec<SocialLink>,
}

impl LinksConfig {
    /// Create a configuration from links and a policy.
    pub fn new(links: Vec<SocialLink>, on_invalid: InvalidLinkPolicy) -> Self {
        Self { on_invalid, links }
    }

    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns error if the TOML is invalid or names an unknown platform.
    #[instrument(skip(contents), fields(len = contents.len()))]
    pub fn from_toml_str(contents: &str) -> LinksKitResult<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;
        debug!(links = config.links.len(), "Parsed links config");
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or its TOML is invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> LinksKitResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Read(e.to_string())))?;
        let config = Self::from_toml_str(&contents)?;
        info!(links = config.links.len(), "Loaded links config");
        Ok(config)
    }

    /// Serialize the configuration back to TOML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_toml_string(&self) -> LinksKitResult<String> {
        Ok(toml::to_string(self)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Serialize(e.to_string())))?)
    }

    /// Resolve every link in order, applying the invalid-link policy.
    ///
    /// # Errors
    ///
    /// With [`InvalidLinkPolicy::Fail`], returns the first link's error.
    #[instrument(skip(self), fields(links = self.links.len(), policy = ?self.on_invalid))]
    pub fn resolve(&self) -> Result<Vec<ResolvedLink>, BuildError> {
        let mut resolved = Vec::with_capacity(self.links.len());
        for link in &self.links {
            match link.resolve() {
                Ok(r) => resolved.push(r),
                Err(e) if self.on_invalid == InvalidLinkPolicy::Skip => {
                    warn!(
                        platform = link.platform().kind().name(),
                        handle = %link.handle(),
                        error = %e,
                        "Skipping social link"
                    );
                }
                Err(e) => return Err(e),
            }
        }
        debug!(resolved = resolved.len(), "Resolved social links");
        Ok(resolved)
    }
}
