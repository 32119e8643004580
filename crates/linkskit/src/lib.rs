//! LinksKit: social media platforms and profile links for UI layers.
//!
//! This crate re-exports the public surface of the LinksKit workspace:
//! - [`SocialPlatform`] with its icon, display name and profile URL lookups
//! - [`SocialLink`] / [`LinksConfig`] for declaring a row of links
//! - the error types from `linkskit_error`
//!
//! ```
//! use linkskit::{SocialLink, SocialPlatform};
//!
//! let link = SocialLink::new(SocialPlatform::Bluesky, "alice");
//! let resolved = link.resolve().unwrap();
//! assert_eq!(resolved.url().as_str(), "https://bsky.app/profile/alice");
//! ```

#![warn(missing_docs)]

mod observability;

pub use observability::init_tracing;

pub use linkskit_error::{
    BuildError, BuildErrorKind, ConfigError, ConfigErrorKind, LinksKitError, LinksKitErrorKind,
    LinksKitResult,
};
pub use linkskit_social::{
    InvalidLinkPolicy, LinksConfig, PlatformKind, ResolvedLink, SocialLink, SocialLinkBuilder,
    SocialLinkBuilderError, SocialPlatform, Url,
};
