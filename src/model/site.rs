// Passforge — Site identity model
//
// A SiteIdentity names *which* password is wanted (site name, counter,
// type); it never contains the derived value. Identities are immutable
// once constructed and safe to serialize — persisting them reveals
// nothing about the passwords they derive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("site counter must be >= 1")]
    CounterOutOfRange,

    #[error("unknown site type: {0}")]
    UnknownSiteType(String),
}

/// The password policy class for a site. Each type maps to a fixed set of
/// character-class templates (see `template::tables`); the tables are
/// compiled in, not user-configurable, so a derived password is portable
/// across installations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteType {
    MaximumSecurity,
    Long,
    Medium,
    Short,
    Basic,
    Pin,
    Name,
    Phrase,
}

impl SiteType {
    /// Every variant, in canonical order. Used by the CLI listing and by
    /// the template-conformance tests.
    pub const ALL: [SiteType; 8] = [
        SiteType::MaximumSecurity,
        SiteType::Long,
        SiteType::Medium,
        SiteType::Short,
        SiteType::Basic,
        SiteType::Pin,
        SiteType::Name,
        SiteType::Phrase,
    ];

    /// Stable one-byte tag mixed into the canonical seed encoding.
    /// Renumbering an existing variant is a breaking change: it would
    /// silently change every derived password of that type.
    pub(crate) fn tag(self) -> u8 {
        match self {
            SiteType::MaximumSecurity => 1,
            SiteType::Long => 2,
            SiteType::Medium => 3,
            SiteType::Short => 4,
            SiteType::Basic => 5,
            SiteType::Pin => 6,
            SiteType::Name => 7,
            SiteType::Phrase => 8,
        }
    }
}

impl fmt::Display for SiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SiteType::MaximumSecurity => "Maximum Security",
            SiteType::Long => "Long",
            SiteType::Medium => "Medium",
            SiteType::Short => "Short",
            SiteType::Basic => "Basic",
            SiteType::Pin => "PIN",
            SiteType::Name => "Name",
            SiteType::Phrase => "Phrase",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SiteType {
    type Err = IdentityError;

    /// Parse the CLI/persistence spelling. Accepts the kebab-case name and
    /// a couple of obvious shorthands.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "maximum-security" | "maximum" | "max" => Ok(SiteType::MaximumSecurity),
            "long" => Ok(SiteType::Long),
            "medium" => Ok(SiteType::Medium),
            "short" => Ok(SiteType::Short),
            "basic" => Ok(SiteType::Basic),
            "pin" => Ok(SiteType::Pin),
            "name" => Ok(SiteType::Name),
            "phrase" => Ok(SiteType::Phrase),
            other => Err(IdentityError::UnknownSiteType(other.to_string())),
        }
    }
}

/// Identifies one derivable password: (site name, counter, type).
/// Fields are private — construct via `new()`, which enforces the
/// counter >= 1 invariant, and read via the getters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteIdentity {
    name: String,
    counter: u32,
    site_type: SiteType,
}

impl SiteIdentity {
    /// Create a validated identity. The counter starts at 1; bumping it is
    /// how a user rotates a site's password without changing anything else.
    pub fn new(
        name: impl Into<String>,
        counter: u32,
        site_type: SiteType,
    ) -> Result<Self, IdentityError> {
        if counter == 0 {
            return Err(IdentityError::CounterOutOfRange);
        }
        Ok(Self {
            name: name.into(),
            counter,
            site_type,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn site_type(&self) -> SiteType {
        self.site_type
    }
}

impl fmt::Display for SiteIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{} ({})", self.name, self.counter, self.site_type)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
