// Passforge — Top-level error types
//
// Aggregates errors from the derivation, session, and model modules into
// a single error enum for the application boundary.

use thiserror::Error;

/// Top-level error type for all passforge operations.
#[derive(Debug, Error)]
pub enum PassforgeError {
    #[error("Derivation error: {0}")]
    Derivation(#[from] crate::derive::DerivationError),

    #[error("Session error: {0}")]
    Session(#[from] crate::session::SessionError),

    #[error("Invalid site identity: {0}")]
    Identity(#[from] crate::model::IdentityError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PassforgeError>;
