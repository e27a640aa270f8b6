use thiserror::Error;

/// A tag that does not follow the `vMAJOR.MINOR.PATCH[-label[.n]]` grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid version tag '{tag}': {reason}")]
pub struct ParseError {
    pub tag: String,
    pub reason: String,
}

impl ParseError {
    pub fn new(tag: &str, reason: impl Into<String>) -> Self {
        Self {
            tag: tag.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Tag listing did not end within {pages} pages")]
    Truncated { pages: usize },

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no release tag found")]
    NoRelease,

    #[error("no prerelease tag found")]
    NoPreRelease,

    #[error("tag candidate must not be empty")]
    EmptyCandidate,

    #[error(transparent)]
    Source(#[from] SourceError),
}
