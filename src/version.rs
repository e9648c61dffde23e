use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

/// The version of this crate, read from Cargo.toml at compile time.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separates the numeric part of a version string from its suffix.
const SUFFIX_SEPARATOR: char = '-';
const COMPONENT_SEPARATOR: char = '.';

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionError {
    #[error("invalid version format")]
    InvalidFormat,
}

/// A four-component version with an optional free-text suffix, e.g. `1.2.3.4-rc`.
///
/// Ordering compares `major`, `minor`, `patch` and `build` numerically in that
/// order, then falls back to a lexicographic comparison of `suffix`. Two
/// versions are equal exactly when that comparison yields `Ordering::Equal`.
#[derive(Debug, Clone, Default)]
pub struct Version {
    pub major: i32,
    pub minor: i32,
    pub patch: i32,
    pub build: i32,
    pub suffix: String,
}

impl Version {
    /// Build a version from trusted components. Nothing is validated.
    pub fn new(major: i32, minor: i32, patch: i32, build: i32, suffix: impl Into<String>) -> Self {
        Self {
            major,
            minor,
            patch,
            build,
            suffix: suffix.into(),
        }
    }

    /// Parse a string-encoded version.
    ///
    /// Accepted shapes are `N`, `N.N`, `N.N.N` and `N.N.N.N`, each optionally
    /// followed by `-suffix`. Missing trailing components are zero. Every
    /// component must fit in an `i32`, and the suffix may not itself contain
    /// a `-`.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let pieces: Vec<&str> = input.split(SUFFIX_SEPARATOR).collect();
        if pieces.len() > 2 {
            debug!("Rejected version {:?}: {} suffix separators", input, pieces.len() - 1);
            return Err(VersionError::InvalidFormat);
        }

        let groups: Vec<&str> = pieces[0].split(COMPONENT_SEPARATOR).collect();
        let mut components = [0i32; 4];
        if groups.len() > components.len() {
            debug!("Rejected version {:?}: {} numeric components", input, groups.len());
            return Err(VersionError::InvalidFormat);
        }

        for (slot, group) in components.iter_mut().zip(&groups) {
            *slot = group.parse::<i32>().map_err(|e| {
                debug!("Rejected version {:?}: component {:?}: {}", input, group, e);
                VersionError::InvalidFormat
            })?;
        }

        let [major, minor, patch, build] = components;
        let suffix = pieces.get(1).copied().unwrap_or_default();
        Ok(Self::new(major, minor, patch, build, suffix))
    }
}

/// Parse the crate's own version from [`PKG_VERSION`].
pub fn current() -> Result<Version, VersionError> {
    Version::parse(PKG_VERSION)
}

/// Three-way comparison of two versions.
pub fn compare(v1: &Version, v2: &Version) -> Ordering {
    v1.major
        .cmp(&v2.major)
        .then(v1.minor.cmp(&v2.minor))
        .then(v1.patch.cmp(&v2.patch))
        .then(v1.build.cmp(&v2.build))
        .then_with(|| v1.suffix.cmp(&v2.suffix))
}

pub fn equal(v1: &Version, v2: &Version) -> bool {
    compare(v1, v2) == Ordering::Equal
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.major, self.minor, self.patch, self.build)?;
        if !self.suffix.is_empty() {
            write!(f, "{}{}", SUFFIX_SEPARATOR, self.suffix)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        equal(self, other)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.build.hash(state);
        self.suffix.hash(state);
    }
}

// Serialized as the canonical string, so versions can sit directly in config files.
impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
