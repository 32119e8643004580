//! Payload-free platform tags.

use serde::{Deserialize, Serialize};

/// The tag of a [`SocialPlatform`](crate::SocialPlatform), without any payload.
///
/// Icon and name lookups are keyed by kind, so every Mastodon instance
/// shares one icon and one name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumCount,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlatformKind {
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
    /// Mastodon, on some instance
    Mastodon,
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

impl PlatformKind {
    /// Iterate over every supported kind in declaration order.
    pub fn all() -> impl Iterator<Item = PlatformKind> {
        <Self as strum::IntoEnumIterator>::iter()
    }

    /// Lowercase machine name, e.g. `"github"`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Whether the platform needs a host (instance) to build a profile URL.
    pub fn requires_instance(self) -> bool {
        matches!(self, Self::Mastodon)
    }
}
