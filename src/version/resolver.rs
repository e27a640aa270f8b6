//! Release resolver backed by injected sources
//!
//! Groups a tag source, a release notes source and the tag line they are resolved against.
//! Each call fetches the tag list once and hands it to [`crate::version::resolve`].

use std::sync::Arc;

use tracing::debug;

use crate::version::error::ResolveError;
use crate::version::resolve;
use crate::version::semver::{SemanticVersion, strip_prefix};
use crate::version::source::{ReleaseNotesSource, TagSource};

pub struct ReleaseResolver {
    tags: Arc<dyn TagSource>,
    notes: Arc<dyn ReleaseNotesSource>,
    line_prefix: String,
}

impl ReleaseResolver {
    /// Create a resolver for tags starting with `line_prefix` (e.g. `"v2"`)
    pub fn new(
        tags: Arc<dyn TagSource>,
        notes: Arc<dyn ReleaseNotesSource>,
        line_prefix: &str,
    ) -> Self {
        Self {
            tags,
            notes,
            line_prefix: line_prefix.to_string(),
        }
    }

    pub fn line_prefix(&self) -> &str {
        &self.line_prefix
    }

    async fn fetch(&self) -> Result<Vec<String>, ResolveError> {
        let tags = self.tags.fetch_tag_names().await?;
        debug!("Fetched {} tag names", tags.len());
        Ok(tags)
    }

    /// All versions on the line, newest first
    pub async fn list_versions_descending(&self) -> Result<Vec<SemanticVersion>, ResolveError> {
        let tags = self.fetch().await?;
        resolve::list_versions_descending(&tags, &self.line_prefix)
    }

    pub async fn latest_stable(&self) -> Result<SemanticVersion, ResolveError> {
        let tags = self.fetch().await?;
        resolve::latest_stable(&tags, &self.line_prefix)
    }

    pub async fn latest_pre_release(&self) -> Result<SemanticVersion, ResolveError> {
        let tags = self.fetch().await?;
        resolve::latest_pre_release(&tags, &self.line_prefix)
    }

    /// Whether `candidate` (with or without `v`) is a published tag on the line
    pub async fn is_valid_tag(&self, candidate: &str) -> Result<bool, ResolveError> {
        // Checked before fetching so a bad candidate never costs a request
        if strip_prefix(candidate).is_empty() {
            return Err(ResolveError::EmptyCandidate);
        }
        let tags = self.fetch().await?;
        resolve::is_valid_tag(candidate, &tags, &self.line_prefix)
    }

    /// Markdown release notes for `tag`, headed with the tag name
    pub async fn release_notes(&self, tag: &str) -> Result<String, ResolveError> {
        let notes = self.notes.fetch_release_notes(tag).await?;

        let mut text = format!("# Release Notes for {}\n", tag);
        if let Some(published_at) = notes.published_at {
            text.push_str(&format!(
                "\nPublished {}\n\n",
                published_at.format("%Y-%m-%d")
            ));
        }
        text.push_str(&notes.body);
        Ok(text)
    }
}
