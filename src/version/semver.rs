//! Semantic version model for release tags
//!
//! Tags follow `vMAJOR.MINOR.PATCH[-label[.number]]`. The leading `v` is optional and
//! dropped on parse; everything else must match exactly.
//!
//! Examples:
//! - "v2.1.0" -> 2.1.0 (release)
//! - "v2.0.0-rc.1" -> 2.0.0-rc.1 (pre-release `rc`, number 1)
//! - "2.0.0-beta" -> 2.0.0-beta (pre-release `beta`, no number)

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::ParseError;

/// Prefix character carried by tags such as `v2.1.0`
pub const VERSION_PREFIX: char = 'v';

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.(\d+)\.(\d+)(?:-([0-9A-Za-z-]*)(?:\.(\d+))?)?$").unwrap()
});

/// Strip a single leading version prefix, if present
pub fn strip_prefix(raw: &str) -> &str {
    raw.strip_prefix(VERSION_PREFIX).unwrap_or(raw)
}

/// Pre-release qualifier such as `rc.1` or `beta`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreRelease {
    pub label: String,
    pub number: Option<u64>,
}

impl PreRelease {
    pub fn new(label: &str, number: Option<u64>) -> Self {
        Self {
            label: label.to_string(),
            number,
        }
    }
}

impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> Ordering {
        // `None < Some(_)`, so a bare label sorts before a numbered one
        self.label
            .cmp(&other.label)
            .then_with(|| self.number.cmp(&other.number))
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number {
            Some(number) => write!(f, "{}.{}", self.label, number),
            None => write!(f, "{}", self.label),
        }
    }
}

/// A parsed version tag
///
/// Equality, ordering and hashing only look at the numeric triple and the pre-release;
/// the original text is kept for display.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
    pre: Option<PreRelease>,
    original: String,
}

impl SemanticVersion {
    /// Parse a raw tag name, accepting an optional leading `v`
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let input = strip_prefix(raw);

        let captures = VERSION_RE.captures(input).ok_or_else(|| {
            ParseError::new(raw, "expected MAJOR.MINOR.PATCH[-label[.number]]")
        })?;

        let major = parse_number(raw, "major", &captures[1])?;
        let minor = parse_number(raw, "minor", &captures[2])?;
        let patch = parse_number(raw, "patch", &captures[3])?;

        let pre = match captures.get(4) {
            Some(label) => {
                let label = label.as_str();
                if label.is_empty() {
                    return Err(ParseError::new(raw, "empty pre-release label"));
                }
                if label.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseError::new(
                        raw,
                        format!("pre-release label '{}' must not be purely numeric", label),
                    ));
                }
                let number = captures
                    .get(5)
                    .map(|n| parse_number(raw, "pre-release number", n.as_str()))
                    .transpose()?;
                Some(PreRelease::new(label, number))
            }
            None => None,
        };

        Ok(Self {
            major,
            minor,
            patch,
            pre,
            original: input.to_string(),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> Option<&PreRelease> {
        self.pre.as_ref()
    }

    /// The input this version was parsed from, without the `v` prefix
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// A release is any version without a pre-release qualifier
    pub fn is_release(&self) -> bool {
        self.pre.is_none()
    }

    pub fn is_pre_release(&self) -> bool {
        !self.is_release()
    }
}

fn parse_number(raw: &str, component: &str, digits: &str) -> Result<u64, ParseError> {
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(ParseError::new(
            raw,
            format!("{} component '{}' has a leading zero", component, digits),
        ));
    }
    digits.parse::<u64>().map_err(|e| {
        ParseError::new(
            raw,
            format!("{} component '{}' is not a valid number: {}", component, digits, e),
        )
    })
}

impl FromStr for SemanticVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemanticVersion {}

impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre.hash(state);
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                // A release supersedes its own pre-releases
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

impl TryFrom<&SemanticVersion> for semver::Version {
    type Error = semver::Error;

    fn try_from(version: &SemanticVersion) -> Result<Self, Self::Error> {
        let pre = match version.pre_release() {
            Some(pre) => semver::Prerelease::new(&pre.to_string())?,
            None => semver::Prerelease::EMPTY,
        };
        Ok(semver::Version {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            pre,
            build: semver::BuildMetadata::EMPTY,
        })
    }
}
