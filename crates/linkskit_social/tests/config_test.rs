//! Tests for links configuration loading and resolution.

use linkskit_error::{BuildErrorKind, ConfigErrorKind, LinksKitErrorKind};
use linkskit_social::{
    InvalidLinkPolicy, LinksConfig, SocialLink, SocialLinkBuilder, SocialPlatform,
};
use std::io::Write;

const CONFIG: &str = r#"
[[links]]
platform = "github"
handle = "torvalds"

[[links]]
platform = "mastodon"
instance = "mastodon.social"
handle = "alice"

[[links]]
platform = "twitter"
handle = ""
"#;

#[test]
fn test_parse_links_config() {
    let config = LinksConfig::from_toml_str(CONFIG).expect("valid TOML");
    assert_eq!(config.on_invalid(), &InvalidLinkPolicy::Skip);
    assert_eq!(config.links().len(), 3);
    assert_eq!(config.links()[0].platform(), &SocialPlatform::GitHub);
    assert_eq!(config.links()[0].handle(), "torvalds");
    assert_eq!(
        config.links()[1].platform(),
        &SocialPlatform::Mastodon {
            instance: "mastodon.social".to_string()
        }
    );
}

#[test]
fn test_skip_policy_omits_broken_links() {
    let config = LinksConfig::from_toml_str(CONFIG).unwrap();
    let resolved = config.resolve().expect("skip never fails");

    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0].display_name(), "GitHub");
    assert_eq!(resolved[0].icon_id(), "cat.circle.fill");
    assert_eq!(resolved[0].url().as_str(), "https://github.com/torvalds");
    assert_eq!(resolved[1].display_name(), "Mastodon");
    assert_eq!(resolved[1].url().as_str(), "https://mastodon.social/@alice");
}

#[test]
fn test_fail_policy_returns_first_error() {
    let toml = format!("on_invalid = \"fail\"\n{CONFIG}");
    let config = LinksConfig::from_toml_str(&toml).unwrap();
    assert_eq!(config.on_invalid(), &InvalidLinkPolicy::Fail);

    let err = config.resolve().unwrap_err();
    assert_eq!(err.kind(), &BuildErrorKind::EmptyHandle);
}

#[test]
fn test_unknown_platform_is_config_error() {
    let toml = r#"
[[links]]
platform = "myspace"
handle = "tom"
"#;
    let err = LinksConfig::from_toml_str(toml).unwrap_err();
    match err.kind() {
        LinksKitErrorKind::Config(e) => assert!(matches!(e.kind(), ConfigErrorKind::Parse(_))),
        other => panic!("Expected config parse error, got {other}"),
    }
}

#[test]
fn test_empty_config_resolves_to_nothing() {
    let config = LinksConfig::from_toml_str("").unwrap();
    assert!(config.links().is_empty());
    assert!(config.resolve().unwrap().is_empty());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CONFIG.as_bytes()).unwrap();

    let config = LinksConfig::from_file(file.path()).expect("readable config");
    assert_eq!(config.links().len(), 3);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = LinksConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
    match err.kind() {
        LinksKitErrorKind::Config(e) => assert!(matches!(e.kind(), ConfigErrorKind::Read(_))),
        other => panic!("Expected config read error, got {other}"),
    }
    assert!(err.to_string().contains("Failed to read links config"));
}

#[test]
fn test_toml_round_trip_preserves_links() {
    let config = LinksConfig::new(
        vec![
            SocialLink::new(SocialPlatform::Bluesky, "alice.bsky.social"),
            SocialLink::new(SocialPlatform::mastodon("hachyderm.io").unwrap(), "bob"),
        ],
        InvalidLinkPolicy::Fail,
    );

    let toml = config.to_toml_string().unwrap();
    let parsed = LinksConfig::from_toml_str(&toml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_link_builder() {
    let link = SocialLinkBuilder::default()
        .platform(SocialPlatform::Threads)
        .handle("zuck")
        .build()
        .unwrap();

    assert_eq!(link.display_name(), "Threads");
    assert_eq!(link.icon_id(), "at.circle");
    assert_eq!(link.url().unwrap().as_str(), "https://www.threads.net/@zuck");
}

#[test]
fn test_resolved_link_serializes_flat() {
    let resolved = SocialLink::new(SocialPlatform::YouTube, "@rustlang")
        .resolve()
        .unwrap();
    let json = serde_json::to_value(&resolved).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "platform": "youtube",
            "handle": "@rustlang",
            "display_name": "YouTube",
            "icon_id": "play.rectangle.fill",
            "url": "https://www.youtube.com/@rustlang",
        })
    );
}
