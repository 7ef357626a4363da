// Passforge — Password rendering
//
// Maps seed bytes onto a template: byte 0 picks the template from the
// type's list, then each template position consumes exactly one further
// byte to index into that position's character-class alphabet. One byte
// per position, always, so the same (seed, type) renders the same string
// on every installation.
//
// Seed expansion: a template longer than the seed provides bytes for is
// served from extra blocks SHA-256(seed || u32-BE block index), index
// starting at 1. Deterministic and documented; the built-in tables never
// need it (checked in tables.rs), but custom-length templates must not
// silently wrap around and repeat seed bytes.

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::derive::{DerivationError, SiteSeed, SITE_SEED_LEN};
use crate::model::SiteType;

use super::{alphabet, templates_for};

/// Seed bytes stretched to at least `needed` bytes.
fn expand_seed(seed: &SiteSeed, needed: usize) -> Zeroizing<Vec<u8>> {
    let mut bytes = Zeroizing::new(Vec::with_capacity(needed.max(SITE_SEED_LEN)));
    bytes.extend_from_slice(seed.as_bytes());

    let mut block_index: u32 = 1;
    while bytes.len() < needed {
        let mut hasher = Sha256::new();
        hasher.update(seed.as_bytes());
        hasher.update(block_index.to_be_bytes());
        bytes.extend_from_slice(&hasher.finalize());
        block_index += 1;
    }
    bytes
}

/// Render `seed` into a password of the given type. Pure: no I/O, no
/// randomness, no caching.
pub fn render_password(seed: &SiteSeed, site_type: SiteType) -> Result<String, DerivationError> {
    let templates = templates_for(site_type);
    let longest = templates.iter().map(|t| t.chars().count()).max().unwrap_or(0);
    let bytes = expand_seed(seed, longest + 1);

    let template = templates[bytes[0] as usize % templates.len()];

    let mut password = String::with_capacity(template.len());
    for (position, class) in template.chars().enumerate() {
        let letters = alphabet(class).ok_or(DerivationError::UnknownTemplateClass(class))?;
        let index = bytes[position + 1] as usize % letters.chars().count();
        // alphabets are ASCII, so chars().nth() is exact
        let ch = letters.chars().nth(index).ok_or(DerivationError::UnknownTemplateClass(class))?;
        password.push(ch);
    }
    Ok(password)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
