// Passforge — Site Seed Derivation
//
// Turns (master key, site identity) into a 32-byte seed with HMAC-SHA256.
// The identity is serialized into a canonical injective byte encoding
// before hashing, so no two distinct identities can ever share a message:
//
//   namespace || u32-BE(len(site name)) || site name || u32-BE(counter) || type tag
//
// Pure and deterministic — recomputed on every request, never cached.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::model::SiteIdentity;

use super::{DerivationError, MasterKey};

type HmacSha256 = Hmac<Sha256>;

/// Namespace prefix for the seed message, distinct from the master-key
/// salt scope so the two derivation stages can never be confused.
const SEED_SCOPE: &[u8] = b"com.passforge/seed";

/// Length of a site seed in bytes (HMAC-SHA256 output).
pub const SITE_SEED_LEN: usize = 32;

/// The per-site derived seed, input to the templating engine. Wiped on
/// drop, never persisted.
pub struct SiteSeed(Zeroizing<[u8; SITE_SEED_LEN]>);

impl SiteSeed {
    #[cfg(test)]
    pub(crate) fn from_bytes(bytes: [u8; SITE_SEED_LEN]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    pub(crate) fn as_bytes(&self) -> &[u8; SITE_SEED_LEN] {
        &self.0
    }
}

/// Debug output NEVER reveals seed material.
impl fmt::Debug for SiteSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteSeed")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// The canonical seed message for an identity. Injective: the length
/// prefix on the name and the fixed-width counter and tag fields mean two
/// different identities always encode to different byte strings.
fn encode_identity(identity: &SiteIdentity) -> Vec<u8> {
    let name = identity.name().as_bytes();
    let mut message = Vec::with_capacity(SEED_SCOPE.len() + 4 + name.len() + 4 + 1);
    message.extend_from_slice(SEED_SCOPE);
    message.extend_from_slice(&(name.len() as u32).to_be_bytes());
    message.extend_from_slice(name);
    message.extend_from_slice(&identity.counter().to_be_bytes());
    message.push(identity.site_type().tag());
    message
}

/// Compute the seed for `identity`, keyed by the master key.
pub fn derive_site_seed(
    master_key: &MasterKey,
    identity: &SiteIdentity,
) -> Result<SiteSeed, DerivationError> {
    let mut mac = HmacSha256::new_from_slice(master_key.as_bytes())
        .map_err(|e| DerivationError::KeyedHash(e.to_string()))?;
    mac.update(&encode_identity(identity));

    let digest = mac.finalize().into_bytes();
    let mut seed = Zeroizing::new([0u8; SITE_SEED_LEN]);
    seed.copy_from_slice(&digest);
    Ok(SiteSeed(seed))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::mock::FixedDeriver;
    use crate::derive::MasterKeyDeriver;
    use crate::model::SiteType;

    fn test_key() -> MasterKey {
        FixedDeriver.derive_master_key("alice", b"hunter2").unwrap()
    }

    fn identity(name: &str, counter: u32, site_type: SiteType) -> SiteIdentity {
        SiteIdentity::new(name, counter, site_type).unwrap()
    }

    #[test]
    fn test_seed_is_deterministic() {
        let key = test_key();
        let id = identity("example.com", 1, SiteType::Long);
        let a = derive_site_seed(&key, &id).unwrap();
        let b = derive_site_seed(&key, &id).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_seed_changes_with_every_identity_field() {
        let key = test_key();
        let base = derive_site_seed(&key, &identity("example.com", 1, SiteType::Long)).unwrap();

        let other_name =
            derive_site_seed(&key, &identity("example.org", 1, SiteType::Long)).unwrap();
        let other_counter =
            derive_site_seed(&key, &identity("example.com", 2, SiteType::Long)).unwrap();
        let other_type =
            derive_site_seed(&key, &identity("example.com", 1, SiteType::Short)).unwrap();

        assert_ne!(base.as_bytes(), other_name.as_bytes());
        assert_ne!(base.as_bytes(), other_counter.as_bytes());
        assert_ne!(base.as_bytes(), other_type.as_bytes());
    }

    #[test]
    fn test_seed_changes_with_master_key() {
        let alice = test_key();
        let bob = FixedDeriver.derive_master_key("bob", b"hunter2").unwrap();
        let id = identity("example.com", 1, SiteType::Long);
        assert_ne!(
            derive_site_seed(&alice, &id).unwrap().as_bytes(),
            derive_site_seed(&bob, &id).unwrap().as_bytes()
        );
    }

    #[test]
    fn test_identity_encoding_is_injective() {
        // Pairs that would collide under naive concatenation.
        let tricky = [
            identity("ab", 1, SiteType::Long),
            identity("a", 1, SiteType::Long),
            identity("a", 0x6200_0001, SiteType::Long),
            identity("example.com", 1, SiteType::Long),
            identity("example.com", 1, SiteType::Medium),
            identity("example.com", 256, SiteType::Long),
        ];
        let encodings: Vec<Vec<u8>> = tricky.iter().map(encode_identity).collect();
        for (i, a) in encodings.iter().enumerate() {
            for b in &encodings[i + 1..] {
                assert_ne!(a, b, "identity encodings must never collide");
            }
        }
    }

    #[test]
    fn test_seed_has_fixed_length() {
        let seed = derive_site_seed(&test_key(), &identity("x", 1, SiteType::Pin)).unwrap();
        assert_eq!(seed.as_bytes().len(), SITE_SEED_LEN);
    }

    #[test]
    fn test_debug_output_redacts_seed_bytes() {
        let seed = derive_site_seed(&test_key(), &identity("x", 1, SiteType::Pin)).unwrap();
        assert!(format!("{:?}", seed).contains("[REDACTED]"));
    }
}
