//! GitHub REST API source for tags and release notes

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::version::error::SourceError;
use crate::version::source::{ReleaseNotes, ReleaseNotesSource, TagSource};

/// Default base URL for GitHub API
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Largest page size the tags endpoint accepts
const DEFAULT_PAGE_SIZE: usize = 100;

/// Default limit on pages fetched per tag listing
pub const DEFAULT_MAX_PAGES: usize = 10;

/// Entry of the GitHub Tags API response
#[derive(Debug, Deserialize)]
struct Tag {
    name: String,
}

/// Response from the GitHub Releases API for a single tag
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
}

/// Tag and release notes source backed by a GitHub repository
pub struct GitHubSource {
    client: reqwest::Client,
    base_url: String,
    repository: String,
    token: Option<String>,
    page_size: usize,
    max_pages: usize,
}

impl GitHubSource {
    /// Creates a source for `repository` (`owner/name`) served from `base_url`
    pub fn new(base_url: &str, repository: &str) -> Result<Self, SourceError> {
        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("release-tags/", env!("CARGO_PKG_VERSION")))
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            repository: repository.to_string(),
            token: None,
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        })
    }

    /// Authenticate requests with a personal access token
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.clamp(1, DEFAULT_PAGE_SIZE);
        self
    }

    async fn get(&self, url: &str, subject: &str) -> Result<reqwest::Response, SourceError> {
        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(subject.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || (status == reqwest::StatusCode::FORBIDDEN && rate_limit_exhausted(response.headers()))
        {
            return Err(SourceError::RateLimited {
                retry_after_secs: retry_after_secs(response.headers(), Utc::now()),
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(SourceError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        Ok(response)
    }
}

fn rate_limit_exhausted(headers: &HeaderMap) -> bool {
    headers
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0")
}

/// Seconds to wait, from `retry-after` or else the `x-ratelimit-reset` epoch
fn retry_after_secs(headers: &HeaderMap, now: DateTime<Utc>) -> Option<u64> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<i64>().ok())
    };

    if let Some(secs) = header("retry-after") {
        return u64::try_from(secs).ok();
    }

    header("x-ratelimit-reset")
        .and_then(|reset| u64::try_from(reset - now.timestamp()).ok())
}

#[async_trait::async_trait]
impl TagSource for GitHubSource {
    async fn fetch_tag_names(&self) -> Result<Vec<String>, SourceError> {
        let mut names = Vec::new();

        for page in 1..=self.max_pages {
            let url = format!(
                "{}/repos/{}/tags?per_page={}&page={}",
                self.base_url, self.repository, self.page_size, page
            );

            let tags: Vec<Tag> = self
                .get(&url, &self.repository)
                .await?
                .json()
                .await
                .map_err(|e| {
                    warn!("Failed to parse GitHub tags response: {}", e);
                    SourceError::InvalidResponse(e.to_string())
                })?;

            debug!("Fetched {} tags from page {} of {}", tags.len(), page, self.repository);

            let last_page = tags.len() < self.page_size;
            names.extend(tags.into_iter().map(|t| t.name));
            if last_page {
                return Ok(names);
            }
        }

        // A full final page means more tags may follow
        warn!(
            "Tags of {} did not fit in {} pages",
            self.repository, self.max_pages
        );
        Err(SourceError::Truncated {
            pages: self.max_pages,
        })
    }
}

#[async_trait::async_trait]
impl ReleaseNotesSource for GitHubSource {
    async fn fetch_release_notes(&self, tag: &str) -> Result<ReleaseNotes, SourceError> {
        let base = format!("{}/repos/{}/releases/tags", self.base_url, self.repository);
        let mut url =
            reqwest::Url::parse(&base).map_err(|e| SourceError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SourceError::InvalidUrl(base.clone()))?
            .push(tag);

        let release: Release = self.get(url.as_str(), tag).await?.json().await.map_err(|e| {
            warn!("Failed to parse GitHub release response: {}", e);
            SourceError::InvalidResponse(e.to_string())
        })?;

        match release.body {
            Some(body) if !body.trim().is_empty() => Ok(ReleaseNotes {
                tag: release.tag_name,
                body,
                published_at: release.published_at,
            }),
            _ => Err(SourceError::NotFound(format!(
                "no release notes found for {}",
                tag
            ))),
        }
    }
}
