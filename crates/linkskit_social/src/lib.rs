//! Social media platforms and profile links for LinksKit.
//!
//! [`SocialPlatform`] is the closed set of supported services. Each platform
//! knows its icon symbol, its display name and how to build a profile URL
//! for a handle:
//!
//! ```
//! use linkskit_social::SocialPlatform;
//!
//! let mastodon = SocialPlatform::mastodon("mastodon.social").unwrap();
//! assert_eq!(mastodon.display_name(), "Mastodon");
//! assert_eq!(
//!     mastodon.profile_url("alice").unwrap().as_str(),
//!     "https://mastodon.social/@alice"
//! );
//! assert_eq!(SocialPlatform::Twitter.to_string(), "X/Twitter");
//! ```
//!
//! [`LinksConfig`] loads a row of [`SocialLink`]s from TOML and resolves
//! them into UI-ready [`ResolvedLink`]s.

#![warn(missing_docs)]

mod config;
mod kind;
mod link;
mod platform;
mod registry;
mod url_builder;

pub use config::{InvalidLinkPolicy, LinksConfig};
pub use kind::PlatformKind;
pub use link::{ResolvedLink, SocialLink, SocialLinkBuilder, SocialLinkBuilderError};
pub use platform::SocialPlatform;

pub use url::Url;
