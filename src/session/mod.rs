// Passforge — Session Module
//
// Holds the master key between login and logout and serves site-password
// requests against it. The only place in the crate where a master key
// outlives a single function call.

mod manager;

pub use manager::{Session, SessionError};
