// Passforge — Templating Module
//
// Renders a derived seed into a human-typable password through fixed
// per-type character-class templates. The tables are static policy data:
// identical on every installation, so derivation stays portable.

mod render;
mod tables;

pub use render::render_password;
pub(crate) use tables::{alphabet, templates_for};
