//! Tests for the facade re-exports and tracing setup.

use linkskit::{
    InvalidLinkPolicy, LinksConfig, LinksKitErrorKind, SocialLink, SocialPlatform, init_tracing,
};

#[test]
fn test_init_tracing_is_idempotent() {
    assert!(init_tracing("debug"));
    assert!(!init_tracing("debug"));
}

#[test]
fn test_resolve_row_through_facade() {
    let config = LinksConfig::new(
        vec![
            SocialLink::new(SocialPlatform::GitHub, "torvalds"),
            SocialLink::new(SocialPlatform::LinkedIn, "satyanadella"),
            SocialLink::new(SocialPlatform::TikTok, "khaby.lame"),
        ],
        InvalidLinkPolicy::Fail,
    );

    let urls: Vec<String> = config
        .resolve()
        .unwrap()
        .iter()
        .map(|link| link.url().to_string())
        .collect();

    assert_eq!(
        urls,
        [
            "https://github.com/torvalds",
            "https://www.linkedin.com/in/satyanadella",
            "https://www.tiktok.com/@khaby.lame",
        ]
    );
}

#[test]
fn test_build_error_lifts_into_crate_error() {
    let err = SocialPlatform::Pinterest.profile_url("").unwrap_err();
    let err: linkskit::LinksKitError = err.into();
    assert!(matches!(err.kind(), LinksKitErrorKind::Build(_)));
}
