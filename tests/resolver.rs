//! Release resolution scenarios through an injected source

mod helper;

use helper::{InMemorySource, create_test_resolver};
use release_tags::notes::{RenderStyle, render};
use release_tags::version::error::{ResolveError, SourceError};

const TAGS: &[&str] = &["v2.1.0", "v2.0.0-rc.1", "v1.9.0", "v2.2.0"];

fn versions_as_strings(versions: &[release_tags::version::semver::SemanticVersion]) -> Vec<String> {
    versions.iter().map(ToString::to_string).collect()
}

#[tokio::test]
async fn lists_line_newest_first() {
    let resolver = create_test_resolver(InMemorySource::new().with_tags(TAGS), "v2");

    let versions = resolver.list_versions_descending().await.unwrap();

    assert_eq!(
        versions_as_strings(&versions),
        vec!["2.2.0", "2.1.0", "2.0.0-rc.1"]
    );
}

#[tokio::test]
async fn resolves_latest_stable_and_pre_release() {
    let resolver = create_test_resolver(InMemorySource::new().with_tags(TAGS), "v2");

    assert_eq!(resolver.latest_stable().await.unwrap().to_string(), "2.2.0");
    assert_eq!(
        resolver.latest_pre_release().await.unwrap().to_string(),
        "2.0.0-rc.1"
    );
}

#[tokio::test]
async fn compares_pre_release_numbers_numerically() {
    let resolver = create_test_resolver(
        InMemorySource::new().with_tags(&["v2.0.0-rc.1", "v2.0.0-rc.2"]),
        "v2",
    );

    assert_eq!(
        resolver.latest_pre_release().await.unwrap().to_string(),
        "2.0.0-rc.2"
    );
}

#[tokio::test]
async fn release_supersedes_its_own_candidates() {
    let resolver = create_test_resolver(
        InMemorySource::new().with_tags(&["v2.0.0-rc.3", "v2.0.0", "v2.0.0-rc.1"]),
        "v2",
    );

    let versions = resolver.list_versions_descending().await.unwrap();
    assert_eq!(
        versions_as_strings(&versions),
        vec!["2.0.0", "2.0.0-rc.3", "2.0.0-rc.1"]
    );
}

#[tokio::test]
async fn empty_line_has_no_release() {
    let resolver = create_test_resolver(InMemorySource::new().with_tags(&["v1.0.0"]), "v2");

    assert!(matches!(
        resolver.latest_stable().await,
        Err(ResolveError::NoRelease)
    ));
    assert!(matches!(
        resolver.latest_pre_release().await,
        Err(ResolveError::NoPreRelease)
    ));
}

#[tokio::test]
async fn validates_candidates_against_line() {
    let resolver = create_test_resolver(InMemorySource::new().with_tags(TAGS), "v2");

    assert!(resolver.is_valid_tag("2.2.0").await.unwrap());
    assert!(resolver.is_valid_tag("v2.2.0").await.unwrap());
    assert!(!resolver.is_valid_tag("9.9.9").await.unwrap());
    assert!(matches!(
        resolver.is_valid_tag("").await,
        Err(ResolveError::EmptyCandidate)
    ));
}

#[tokio::test]
async fn malformed_tag_in_line_aborts_resolution() {
    let resolver = create_test_resolver(
        InMemorySource::new().with_tags(&["v2.1.0", "v2.x.0"]),
        "v2",
    );

    let result = resolver.list_versions_descending().await;

    match result {
        Err(ResolveError::Parse(err)) => assert_eq!(err.tag, "v2.x.0"),
        other => panic!("expected parse error, got {:?}", other),
    }
    assert!(resolver.latest_stable().await.is_err());
    assert!(resolver.is_valid_tag("2.1.0").await.is_err());
}

#[tokio::test]
async fn source_failure_is_surfaced() {
    let resolver = create_test_resolver(InMemorySource::new().failing(), "v2");

    assert!(matches!(
        resolver.list_versions_descending().await,
        Err(ResolveError::Source(SourceError::InvalidResponse(_)))
    ));
}

#[tokio::test]
async fn release_notes_render_as_plain_text() {
    let resolver = create_test_resolver(
        InMemorySource::new().with_notes("v2.1.0", "## Fixed\n\n* Window resizing"),
        "v2",
    );

    let notes = resolver.release_notes("v2.1.0").await.unwrap();

    assert_eq!(
        render(&notes, RenderStyle::Plain),
        "Release Notes for v2.1.0\n\nFixed\n\n- Window resizing\n"
    );
}

#[tokio::test]
async fn missing_release_notes_are_not_found() {
    let resolver = create_test_resolver(InMemorySource::new(), "v2");

    assert!(matches!(
        resolver.release_notes("v2.1.0").await,
        Err(ResolveError::Source(SourceError::NotFound(_)))
    ));
}
