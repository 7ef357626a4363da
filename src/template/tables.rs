// Passforge — Template tables and character-class alphabets
//
// The policy data of the Master Password v3 template scheme. Each site
// type maps to a fixed list of templates; a template is a string of
// character-class codes, one per output position:
//
//   V C  upper-case vowel / consonant        v c  lower-case vowel / consonant
//   A a  upper-case / mixed-case alphabetic  n    digit
//   o    symbol ("other")                    x    any (alnum + symbols)
//   ' '  literal space (phrases only)
//
// These tables are a compatibility contract. Reordering a list, editing a
// template, or changing an alphabet silently changes every password
// derived for that type.

use crate::model::SiteType;

const TEMPLATES_MAXIMUM: &[&str] = &["anoxxxxxxxxxxxxxxxxx", "axxxxxxxxxxxxxxxxxno"];

const TEMPLATES_LONG: &[&str] = &[
    "CvcvnoCvcvCvcv",
    "CvcvCvcvnoCvcv",
    "CvcvCvcvCvcvno",
    "CvccnoCvcvCvcv",
    "CvccCvcvnoCvcv",
    "CvccCvcvCvcvno",
    "CvcvnoCvccCvcv",
    "CvcvCvccnoCvcv",
    "CvcvCvccCvcvno",
    "CvcvnoCvcvCvcc",
    "CvcvCvcvnoCvcc",
    "CvcvCvcvCvccno",
    "CvccnoCvccCvcv",
    "CvccCvccnoCvcv",
    "CvccCvccCvcvno",
    "CvcvnoCvccCvcc",
    "CvcvCvccnoCvcc",
    "CvcvCvccCvccno",
    "CvccnoCvcvCvcc",
    "CvccCvcvnoCvcc",
    "CvccCvcvCvccno",
];

const TEMPLATES_MEDIUM: &[&str] = &["CvcnoCvc", "CvcCvcno"];

const TEMPLATES_SHORT: &[&str] = &["Cvcn"];

const TEMPLATES_BASIC: &[&str] = &["aaanaaan", "aannaaan", "aaannaaa"];

const TEMPLATES_PIN: &[&str] = &["nnnn"];

const TEMPLATES_NAME: &[&str] = &["cvccvcvcv"];

const TEMPLATES_PHRASE: &[&str] = &[
    "cvcc cvc cvccvcv cvc",
    "cvc cvccvcvcv cvcc",
    "cv cvccv cvc cvcvccv",
];

/// The template list for a site type. Never empty.
pub(crate) fn templates_for(site_type: SiteType) -> &'static [&'static str] {
    match site_type {
        SiteType::MaximumSecurity => TEMPLATES_MAXIMUM,
        SiteType::Long => TEMPLATES_LONG,
        SiteType::Medium => TEMPLATES_MEDIUM,
        SiteType::Short => TEMPLATES_SHORT,
        SiteType::Basic => TEMPLATES_BASIC,
        SiteType::Pin => TEMPLATES_PIN,
        SiteType::Name => TEMPLATES_NAME,
        SiteType::Phrase => TEMPLATES_PHRASE,
    }
}

/// The alphabet for one character-class code, or `None` for a code the
/// scheme does not define. Every code used by the tables above is covered,
/// which `test_every_template_class_has_an_alphabet` pins down.
pub(crate) fn alphabet(class: char) -> Option<&'static str> {
    match class {
        'V' => Some("AEIOU"),
        'C' => Some("BCDFGHJKLMNPQRSTVWXYZ"),
        'v' => Some("aeiou"),
        'c' => Some("bcdfghjklmnpqrstvwxyz"),
        'A' => Some("AEIOUBCDFGHJKLMNPQRSTVWXYZ"),
        'a' => Some("AEIOUaeiouBCDFGHJKLMNPQRSTVWXYZbcdfghjklmnpqrstvwxyz"),
        'n' => Some("0123456789"),
        'o' => Some("@&%?,=[]_:-+*$#!'^~;()/."),
        'x' => Some("AEIOUaeiouBCDFGHJKLMNPQRSTVWXYZbcdfghjklmnpqrstvwxyz0123456789!@#$%^&*()"),
        ' ' => Some(" "),
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_at_least_one_template() {
        for site_type in SiteType::ALL {
            assert!(
                !templates_for(site_type).is_empty(),
                "{} has no templates",
                site_type
            );
        }
    }

    #[test]
    fn test_every_template_class_has_an_alphabet() {
        for site_type in SiteType::ALL {
            for template in templates_for(site_type) {
                for class in template.chars() {
                    assert!(
                        alphabet(class).is_some(),
                        "template {:?} of {} uses undefined class {:?}",
                        template,
                        site_type,
                        class
                    );
                }
            }
        }
    }

    #[test]
    fn test_alphabets_are_nonempty_and_duplicate_free() {
        for class in ['V', 'C', 'v', 'c', 'A', 'a', 'n', 'o', 'x', ' '] {
            let chars: Vec<char> = alphabet(class).unwrap().chars().collect();
            assert!(!chars.is_empty());
            let unique: std::collections::HashSet<char> = chars.iter().copied().collect();
            assert_eq!(unique.len(), chars.len(), "class {:?} repeats a character", class);
        }
    }

    #[test]
    fn test_longest_template_fits_one_seed_block() {
        // Seed expansion (render.rs) must stay unreachable for built-in
        // tables: longest template + 1 selector byte <= 32 seed bytes.
        let longest = SiteType::ALL
            .iter()
            .flat_map(|t| templates_for(*t))
            .map(|tpl| tpl.len())
            .max()
            .unwrap();
        assert!(longest + 1 <= crate::derive::SITE_SEED_LEN);
    }
}
