// Passforge — Derivation error types

use thiserror::Error;

/// A fault in one of the underlying cryptographic primitives. Never
/// retried automatically: a memory-hard derivation that failed once will
/// fail again, and masking it risks handing out a weak key.
#[derive(Debug, Error)]
pub enum DerivationError {
    #[error("scrypt parameters rejected: {0}")]
    InvalidParams(String),

    #[error("scrypt derivation failed: {0}")]
    Scrypt(String),

    #[error("keyed hash failed: {0}")]
    KeyedHash(String),

    #[error("derived key has no entropy — primitive returned all zeros")]
    DegenerateKey,

    #[error("template references unknown character class '{0}'")]
    UnknownTemplateClass(char),
}
