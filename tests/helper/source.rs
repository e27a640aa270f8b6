//! Source test utilities

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use release_tags::version::error::SourceError;
use release_tags::version::resolver::ReleaseResolver;
use release_tags::version::source::{ReleaseNotes, ReleaseNotesSource, TagSource};

/// In-memory source for testing
#[derive(Default)]
pub struct InMemorySource {
    tags: Vec<String>,
    notes: HashMap<String, String>,
    fail: bool,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_notes(mut self, tag: &str, body: &str) -> Self {
        self.notes.insert(tag.to_string(), body.to_string());
        self
    }

    /// Make every fetch fail as if the network were down
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl TagSource for InMemorySource {
    async fn fetch_tag_names(&self) -> Result<Vec<String>, SourceError> {
        if self.fail {
            return Err(SourceError::InvalidResponse("source unavailable".to_string()));
        }
        Ok(self.tags.clone())
    }
}

#[async_trait]
impl ReleaseNotesSource for InMemorySource {
    async fn fetch_release_notes(&self, tag: &str) -> Result<ReleaseNotes, SourceError> {
        match self.notes.get(tag) {
            Some(body) => Ok(ReleaseNotes {
                tag: tag.to_string(),
                body: body.clone(),
                published_at: None,
            }),
            None => Err(SourceError::NotFound(tag.to_string())),
        }
    }
}

/// Create a resolver that reads tags and notes from `source`
pub fn create_test_resolver(source: InMemorySource, line_prefix: &str) -> ReleaseResolver {
    let source = Arc::new(source);
    ReleaseResolver::new(source.clone(), source, line_prefix)
}
