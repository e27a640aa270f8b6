//! Release resolution over an in-memory tag list
//!
//! Every function here is pure: filter to the tag line, parse every survivor, sort newest
//! first, then scan. A malformed tag inside the line aborts the whole resolution.

use tracing::debug;

use crate::version::error::ResolveError;
use crate::version::filter::filter_line;
use crate::version::semver::{SemanticVersion, strip_prefix};

/// Parse every tag on `line_prefix` and return them newest first
pub fn list_versions_descending<S: AsRef<str>>(
    tags: &[S],
    line_prefix: &str,
) -> Result<Vec<SemanticVersion>, ResolveError> {
    let mut versions = filter_line(tags, line_prefix)
        .into_iter()
        .map(SemanticVersion::parse)
        .collect::<Result<Vec<_>, _>>()?;

    // Stable sort, so equal versions keep their tag order
    versions.sort_by(|a, b| b.cmp(a));

    debug!(
        "Resolved {} of {} tags on line {}",
        versions.len(),
        tags.len(),
        line_prefix
    );

    Ok(versions)
}

/// Newest version without a pre-release qualifier
pub fn latest_stable<S: AsRef<str>>(
    tags: &[S],
    line_prefix: &str,
) -> Result<SemanticVersion, ResolveError> {
    list_versions_descending(tags, line_prefix)?
        .into_iter()
        .find(SemanticVersion::is_release)
        .ok_or(ResolveError::NoRelease)
}

/// Newest version carrying a pre-release qualifier
pub fn latest_pre_release<S: AsRef<str>>(
    tags: &[S],
    line_prefix: &str,
) -> Result<SemanticVersion, ResolveError> {
    list_versions_descending(tags, line_prefix)?
        .into_iter()
        .find(SemanticVersion::is_pre_release)
        .ok_or(ResolveError::NoPreRelease)
}

/// Check whether `candidate` names one of the tags on the line
///
/// The candidate may carry a `v` prefix. It is compared against the canonical form of each
/// parsed tag, so `2.2.0` and `v2.2.0` are both found when the tag `v2.2.0` exists.
pub fn is_valid_tag<S: AsRef<str>>(
    candidate: &str,
    tags: &[S],
    line_prefix: &str,
) -> Result<bool, ResolveError> {
    let candidate = strip_prefix(candidate);
    if candidate.is_empty() {
        return Err(ResolveError::EmptyCandidate);
    }

    let versions = list_versions_descending(tags, line_prefix)?;
    Ok(versions.iter().any(|v| v.to_string() == candidate))
}
