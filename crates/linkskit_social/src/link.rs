//! Configured profile links and their UI-ready resolution.

use crate::SocialPlatform;
use derive_getters::Getters;
use linkskit_error::BuildError;
use serde::{Deserialize, Serialize};
use url::Url;

/// A profile on one platform, as configured by the application.
///
/// Flattened when serialized, so a link reads as
/// `{ platform = "github", handle = "torvalds" }`.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct SocialLink {
    /// Platform the profile lives on
    #[serde(flatten)]
    platform: SocialPlatform,
    /// Account identifier substituted into the profile URL
    handle: String,
}

impl SocialLink {
    /// Create a link for `handle` on `platform`.
    pub fn new(platform: SocialPlatform, handle: impl Into<String>) -> Self {
        Self {
            platform,
            handle: handle.into(),
        }
    }

    /// Profile URL of this link.
    ///
    /// # Errors
    ///
    /// See [`SocialPlatform::profile_url`].
    pub fn url(&self) -> Result<Url, BuildError> {
        self.platform.profile_url(&self.handle)
    }

    /// Icon symbol name of this link's platform.
    pub fn icon_id(&self) -> &'static str {
        self.platform.icon_id()
    }

    /// Label of this link's platform.
    pub fn display_name(&self) -> &'static str {
        self.platform.display_name()
    }

    /// Everything a UI needs to render this link as a button.
    ///
    /// # Errors
    ///
    /// Returns error if the profile URL cannot be built.
    pub fn resolve(&self) -> Result<ResolvedLink, BuildError> {
        Ok(ResolvedLink {
            platform: self.platform.clone(),
            handle: self.handle.clone(),
            display_name: self.display_name(),
            icon_id: self.icon_id(),
            url: self.url()?,
        })
    }
}

/// A link with its label, icon and profile URL computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ResolvedLink {
    /// Platform the profile lives on
    #[serde(flatten)]
    platform: SocialPlatform,
    /// Account identifier
    handle: String,
    /// Human-readable platform label
    #[getter(skip)]
    display_name: &'static str,
    /// Icon symbol name
    #[getter(skip)]
    icon_id: &'static str,
    /// Public profile URL
    url: Url,
}

impl ResolvedLink {
    /// Human-readable platform label
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Icon symbol name
    pub fn icon_id(&self) -> &'static str {
        self.icon_id
    }
}
