//! Version resolution layer for release tags
//!
//! This module turns a project's raw tag names into ordered semantic versions and answers
//! which one is the latest release, which is the latest pre-release, and whether a given
//! string names a published tag.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  TagSource  │────▶│   Filter    │────▶│   Semver    │────▶│   Resolve   │
//! │  (fetch)    │     │ (tag line)  │     │(parse, ord) │     │(latest, ok?)│
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!        ▲                                                            ▲
//!        │                   ┌─────────────┐                          │
//!        └───────────────────│  Resolver   │──────────────────────────┘
//!                            │ (injected)  │
//!                            └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`semver`]: Tag parsing, precedence and release classification
//! - [`filter`]: Restricting tags to one major version line
//! - [`resolve`]: Pure resolution over an in-memory tag list
//! - [`resolver`]: Resolver that fetches through injected sources
//! - [`source`]: Source traits for tags and release notes
//! - [`sources`]: Concrete sources (GitHub)
//! - [`error`]: Error types for parsing, fetching and resolving

pub mod error;
pub mod filter;
pub mod resolve;
pub mod resolver;
pub mod semver;
pub mod source;
pub mod sources;
