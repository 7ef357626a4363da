// Passforge — Derivation Module
//
// The cryptographic core: scrypt key stretching of the master password
// (master_key) and HMAC-SHA256 site seeds (site_seed). Everything here is
// a pure function of its inputs — no I/O, no randomness, no global state.

mod error;
mod master_key;
mod site_seed;

pub use error::DerivationError;
pub use master_key::{MasterKey, MasterKeyDeriver, ScryptDeriver, MASTER_KEY_LEN};
pub use site_seed::{derive_site_seed, SiteSeed, SITE_SEED_LEN};

#[cfg(test)]
pub use master_key::mock;
