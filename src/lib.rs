// Passforge — Library root
//
// Deterministic site-password derivation: one memorized master password,
// reproducible per-site passwords, nothing written to disk. Re-exports
// the derivation core, templating, session lifecycle, and CLI modules.

pub mod cli;
pub mod derive;
pub mod error;
pub mod model;
pub mod session;
pub mod template;

pub use error::{PassforgeError, Result};
pub use model::{SiteIdentity, SiteType};
pub use session::{Session, SessionError};
