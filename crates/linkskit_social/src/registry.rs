//! Per-platform icons, names and profile URL templates.

use crate::url_builder::ProfileTemplate;
use crate::{PlatformKind, SocialPlatform};
use linkskit_error::BuildError;
use tracing::{debug, instrument};
use url::Url;

impl PlatformKind {
    /// Symbol name in the host UI's icon set.
    pub fn icon_id(self) -> &'static str {
        match self {
            Self::Bluesky => "b.circle.fill",
            Self::Facebook => "hand.thumbsup",
            Self::GitHub => "cat.circle.fill",
            Self::Instagram => "camera.circle",
            Self::LinkedIn => "point.topleft.down.to.point.bottomright.curvepath",
            Self::Mastodon => "square.split.1x2",
            Self::Pinterest => "pin.circle",
            Self::Reddit => "antenna.radiowaves.left.and.right.circle",
            Self::Threads => "at.circle",
            Self::TikTok => "music.note",
            Self::Twitter => "bird",
            Self::YouTube => "play.rectangle.fill",
        }
    }

    /// Human-readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Bluesky => "Bluesky",
            Self::Facebook => "Facebook",
            Self::GitHub => "GitHub",
            Self::Instagram => "Instagram",
            Self::LinkedIn => "LinkedIn",
            Self::Mastodon => "Mastodon",
            Self::Pinterest => "Pinterest",
            Self::Reddit => "Reddit",
            Self::Threads => "Threads",
            Self::TikTok => "TikTok",
            Self::Twitter => "X/Twitter",
            Self::YouTube => "YouTube",
        }
    }
}

impl SocialPlatform {
    /// Symbol name in the host UI's icon set.
    ///
    /// All Mastodon instances share one icon.
    pub fn icon_id(&self) -> &'static str {
        self.kind().icon_id()
    }

    /// Human-readable label, e.g. `"X/Twitter"`.
    pub fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }

    /// Build the public profile URL for `handle` on this platform.
    ///
    /// The handle is percent-encoded as a single path segment, so it can
    /// never change the host or add path segments, a query or a fragment.
    ///
    /// # Errors
    ///
    /// Returns error if the handle is blank or a dot segment, or if the
    /// Mastodon instance is not a valid bare host.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkskit_social::SocialPlatform;
    ///
    /// let url = SocialPlatform::GitHub.profile_url("torvalds").unwrap();
    /// assert_eq!(url.as_str(), "https://github.com/torvalds");
    /// ```
    #[instrument(level = "debug", skip(self), fields(platform = self.kind().name()))]
    pub fn profile_url(&self, handle: &str) -> Result<Url, BuildError> {
        let result = self.template().build(handle);
        match &result {
            Ok(url) => debug!(url = %url, "Built profile URL"),
            Err(e) => debug!(error = %e, "Rejected profile URL"),
        }
        result
    }

    fn template(&self) -> ProfileTemplate<'_> {
        match self {
            Self::Bluesky => ProfileTemplate::new("bsky.app", Some("profile"), false),
            Self::Facebook => ProfileTemplate::new("facebook.com", None, false),
            Self::GitHub => ProfileTemplate::new("github.com", None, false),
            Self::Instagram => ProfileTemplate::new("instagram.com", None, false),
            Self::LinkedIn => ProfileTemplate::new("www.linkedin.com", Some("in"), false),
            Self::Mastodon { instance } => ProfileTemplate::new(instance, None, true),
            Self::Pinterest => ProfileTemplate::new("pinterest.com", None, false),
            Self::Reddit => ProfileTemplate::new("reddit.com", Some("user"), false),
            Self::Threads => ProfileTemplate::new("www.threads.net", None, true),
            Self::TikTok => ProfileTemplate::new("www.tiktok.com", None, true),
            Self::Twitter => ProfileTemplate::new("twitter.com", None, false),
            Self::YouTube => ProfileTemplate::new("www.youtube.com", None, false),
        }
    }
}
