// Passforge — Data Model Module
//
// Plain-value site identity records. These are the only records the
// surrounding application is expected to persist — never the master
// password, the master key, or any derived password.

mod site;

pub use site::{IdentityError, SiteIdentity, SiteType};
