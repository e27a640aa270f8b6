//! Concrete tag and release notes sources

pub mod github;

pub use github::GitHubSource;
