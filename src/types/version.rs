//! Safe contract versions
//!
//! Only the numeric core (major, minor, patch) takes part in comparisons, so
//! deployment tags such as `1.3.0+L2` order the same as `1.3.0`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Semantic version of a Safe singleton contract
#[derive(Debug, Clone)]
pub struct SafeVersion(Version);

impl SafeVersion {
    /// First version naming the refund overhead `baseGas` instead of `dataGas`
    pub const BASE_GAS_RENAME: SafeVersion = SafeVersion::new(1, 0, 0);

    /// First version binding the chain id into the EIP-712 domain
    pub const CHAIN_ID_DOMAIN: SafeVersion = SafeVersion::new(1, 3, 0);

    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(Version::new(major, minor, patch))
    }

    /// (major, minor, patch)
    pub fn triple(&self) -> (u64, u64, u64) {
        (self.0.major, self.0.minor, self.0.patch)
    }

    /// Whether the EIP-712 domain includes `chainId` (>= 1.3.0)
    pub fn has_chain_id_domain(&self) -> bool {
        *self >= Self::CHAIN_ID_DOMAIN
    }

    /// Whether the SafeTx schema names the sixth field `baseGas` (>= 1.0.0)
    pub fn has_base_gas(&self) -> bool {
        *self >= Self::BASE_GAS_RENAME
    }

    /// The full semver value, including pre-release and build metadata
    pub fn as_semver(&self) -> &Version {
        &self.0
    }
}

impl PartialEq for SafeVersion {
    fn eq(&self, other: &Self) -> bool {
        self.triple() == other.triple()
    }
}

impl Eq for SafeVersion {}

impl PartialOrd for SafeVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SafeVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.triple().cmp(&other.triple())
    }
}

impl std::hash::Hash for SafeVersion {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.triple().hash(state);
    }
}

impl FromStr for SafeVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

        Version::parse(trimmed)
            .map(Self)
            .map_err(|e| Error::VersionParse {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for SafeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for SafeVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SafeVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
