// Passforge — Master Key Derivation
//
// Stretches (master password, user name) into a 64-byte master key with
// scrypt. The user name is folded into the salt under a namespace
// constant, so the same password under two user names yields unrelated
// keys. The cost parameters are a compatibility contract: every
// installation must use the same values or derived passwords diverge.
//
// Flow:
//   1. `build_salt()` — namespace || u32-BE(len(user)) || user bytes
//   2. `scrypt()` — N=32768, r=8, p=2, 64-byte output
//   3. The key lives in a `Zeroizing` buffer and is wiped on drop

use std::fmt;

use scrypt::Params;
use zeroize::Zeroizing;

use super::DerivationError;

// ─── Constants ───────────────────────────────────────────────────────────────

/// Namespace prefix for the master-key salt. Scopes the derivation so the
/// same (password, user) pair fed into some other protocol cannot collide
/// with ours.
const KEY_SCOPE: &[u8] = b"com.passforge/key";

/// Length of the stretched master key in bytes.
pub const MASTER_KEY_LEN: usize = 64;

// scrypt cost parameters (N = 2^15 = 32768, r = 8, p = 2), the published
// parameters of the Master Password v3 derivation this crate follows.
// Changing any of these is a breaking change requiring explicit migration:
// every previously derived site password becomes irreproducible.
const SCRYPT_LOG_N: u8 = 15;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 2;

// ─── Master key ──────────────────────────────────────────────────────────────

/// The stretched master key. Exists only in memory, only between login and
/// logout; the backing buffer is zeroed when the value is dropped.
pub struct MasterKey(Zeroizing<Vec<u8>>);

impl MasterKey {
    pub(crate) fn from_bytes(bytes: Zeroizing<Vec<u8>>) -> Self {
        Self(bytes)
    }

    /// Raw key bytes, for keying the site-seed HMAC. Crate-internal: the
    /// key never crosses the public API surface.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Debug output NEVER reveals key material.
impl fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MasterKey")
            .field("len", &self.0.len())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over master-key derivation, enabling fault injection and
/// cheap fixed keys in tests (the real derivation is deliberately slow).
pub trait MasterKeyDeriver {
    /// Stretch the master password into a [`MasterKey`] for `user_name`.
    ///
    /// Must not log or retain either input. A failure means "not logged
    /// in" — implementations never fall back to a weak or zero key.
    fn derive_master_key(
        &self,
        user_name: &str,
        master_password: &[u8],
    ) -> Result<MasterKey, DerivationError>;
}

// ─── scrypt implementation ───────────────────────────────────────────────────

/// Production deriver using the fixed scrypt parameters above.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScryptDeriver;

impl ScryptDeriver {
    pub fn new() -> Self {
        Self
    }

    /// Build the deterministic, injective salt for the key stretch:
    /// namespace || u32-BE byte length of the user name || user name.
    /// The length prefix keeps distinct user names from ever producing
    /// the same salt bytes.
    fn build_salt(user_name: &str) -> Vec<u8> {
        let name = user_name.as_bytes();
        let mut salt = Vec::with_capacity(KEY_SCOPE.len() + 4 + name.len());
        salt.extend_from_slice(KEY_SCOPE);
        salt.extend_from_slice(&(name.len() as u32).to_be_bytes());
        salt.extend_from_slice(name);
        salt
    }
}

impl MasterKeyDeriver for ScryptDeriver {
    fn derive_master_key(
        &self,
        user_name: &str,
        master_password: &[u8],
    ) -> Result<MasterKey, DerivationError> {
        let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, MASTER_KEY_LEN)
            .map_err(|e| DerivationError::InvalidParams(e.to_string()))?;

        let salt = Self::build_salt(user_name);
        let mut key = Zeroizing::new(vec![0u8; MASTER_KEY_LEN]);
        scrypt::scrypt(master_password, &salt, &params, &mut key)
            .map_err(|e| DerivationError::Scrypt(e.to_string()))?;

        // Sanity check: a faulting primitive must never be mistaken for a
        // successful derivation of the zero key.
        if key.iter().all(|&b| b == 0) {
            return Err(DerivationError::DegenerateKey);
        }

        tracing::debug!(user = %user_name, "master key derived");
        Ok(MasterKey::from_bytes(key))
    }
}

// ─── Test doubles ────────────────────────────────────────────────────────────


// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_key_has_expected_length() {
        let key = ScryptDeriver::new()
            .derive_master_key("alice", b"Tr0ub4dor&3")
            .unwrap();
        assert_eq!(key.len(), MASTER_KEY_LEN);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let deriver = ScryptDeriver::new();
        let first = deriver.derive_master_key("alice", b"Tr0ub4dor&3").unwrap();
        let second = deriver.derive_master_key("alice", b"Tr0ub4dor&3").unwrap();
        assert_eq!(
            first.as_bytes(),
            second.as_bytes(),
            "same inputs must produce the same master key"
        );
    }

    #[test]
    fn test_different_user_names_produce_different_keys() {
        let deriver = ScryptDeriver::new();
        let alice = deriver.derive_master_key("alice", b"Tr0ub4dor&3").unwrap();
        let bob = deriver.derive_master_key("bob", b"Tr0ub4dor&3").unwrap();
        assert_ne!(
            alice.as_bytes(),
            bob.as_bytes(),
            "the user name salts the derivation"
        );
    }

    #[test]
    fn test_different_passwords_produce_different_keys() {
        let deriver = ScryptDeriver::new();
        let a = deriver.derive_master_key("alice", b"Tr0ub4dor&3").unwrap();
        let b = deriver.derive_master_key("alice", b"correct horse").unwrap();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_salt_encoding_is_injective() {
        let salts: Vec<Vec<u8>> = ["", "a", "ab", "b", "aa"]
            .iter()
            .map(|name| ScryptDeriver::build_salt(name))
            .collect();
        for (i, a) in salts.iter().enumerate() {
            for b in &salts[i + 1..] {
                assert_ne!(a, b, "distinct user names must yield distinct salts");
            }
        }
    }

    #[test]
    fn test_debug_output_redacts_key_bytes() {
        let key = mock::FixedDeriver
            .derive_master_key("alice", b"hunter2")
            .unwrap();
        let debug_output = format!("{:?}", key);
        assert!(debug_output.contains("[REDACTED]"));
        // no hex or byte-list rendering of the key may appear
        assert!(!debug_output.contains("0x"));
    }

    #[test]
    fn test_faulty_deriver_surfaces_derivation_error() {
        let err = mock::FaultyDeriver
            .derive_master_key("alice", b"hunter2")
            .unwrap_err();
        assert!(matches!(err, DerivationError::Scrypt(_)));
    }
}
