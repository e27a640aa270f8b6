//! Source traits for fetching raw tag names and release notes

use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;

use crate::version::error::SourceError;

/// Trait for fetching the raw tag names of a project
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TagSource: Send + Sync {
    /// Fetches every tag name, e.g. `["v2.1.0", "v2.0.0-rc.1", "v1.9.0"]`
    ///
    /// The order is whatever the source returns; callers sort.
    async fn fetch_tag_names(&self) -> Result<Vec<String>, SourceError>;
}

/// Release text published alongside a tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
    pub tag: String,
    pub body: String,
    pub published_at: Option<DateTime<Utc>>,
}

/// Trait for fetching the notes published with a release
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseNotesSource: Send + Sync {
    /// Fetches the notes for `tag`
    ///
    /// # Returns
    /// * `Ok(ReleaseNotes)` - The markdown body of the release
    /// * `Err(SourceError::NotFound)` - If the release or its body does not exist
    async fn fetch_release_notes(&self, tag: &str) -> Result<ReleaseNotes, SourceError>;
}
