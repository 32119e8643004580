//! The closed set of supported social platforms.

use crate::{PlatformKind, url_builder};
use linkskit_error::BuildError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported social media service.
///
/// Mastodon is federated, so it carries the host of the instance the
/// account lives on. Equality and hashing include that host.
///
/// Serialized internally tagged by lowercase platform name:
///
/// ```toml
/// platform = "mastodon"
/// instance = "mastodon.social"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub enum SocialPlatform {
    /// Bluesky (bsky.app)
    Bluesky,
    /// Facebook
    Facebook,
    /// GitHub
    GitHub,
    /// Instagram
    Instagram,
    /// LinkedIn
    LinkedIn,
    /// Mastodon, on the given instance
    Mastodon {
        /// Host of the Mastodon server, e.g. `mastodon.social`
        instance: String,
    },
    /// Pinterest
    Pinterest,
    /// Reddit
    Reddit,
    /// Threads
    Threads,
    /// TikTok
    TikTok,
    /// X, formerly Twitter
    Twitter,
    /// YouTube
    YouTube,
}

impl SocialPlatform {
    /// Create a Mastodon platform, checking that `instance` is a bare host.
    ///
    /// # Errors
    ///
    /// Returns error if the instance is empty, is not a valid host, or
    /// carries a path, query, fragment or user info.
    pub fn mastodon(instance: impl Into<String>) -> Result<Self, BuildError> {
        let instance = instance.into();
        url_builder::base_url(&instance)?;
        Ok(Self::Mastodon { instance })
    }

    /// The payload-free tag of this platform.
    pub fn kind(&self) -> PlatformKind {
        match self {
            Self::Bluesky => PlatformKind::Bluesky,
            Self::Facebook => PlatformKind::Facebook,
            Self::GitHub => PlatformKind::GitHub,
            Self::Instagram => PlatformKind::Instagram,
            Self::LinkedIn => PlatformKind::LinkedIn,
            Self::Mastodon { .. } => PlatformKind::Mastodon,
            Self::Pinterest => PlatformKind::Pinterest,
            Self::Reddit => PlatformKind::Reddit,
            Self::Threads => PlatformKind::Threads,
            Self::TikTok => PlatformKind::TikTok,
            Self::Twitter => PlatformKind::Twitter,
            Self::YouTube => PlatformKind::YouTube,
        }
    }

    /// Instance host, for platforms that carry one.
    pub fn instance(&self) -> Option<&str> {
        match self {
            Self::Mastodon { instance } => Some(instance),
            _ => None,
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
