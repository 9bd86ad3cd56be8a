//! Customer-mode text simplifier.
//!
//! Staff write catalog copy in trade terms; customer mode rewrites the
//! jargon into plain language at render time. The table is applied in
//! order, case-insensitively, and the stored catalog text is never
//! modified.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

// Trade term -> plain language. Order matters: earlier rows run first.
static REPLACEMENTS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)anti[- ]?reflection", "clear coating"),
        (r"(?i)hydrophobic", "water-repellent"),
        (r"(?i)oleophobic", "smudge-resistant"),
        (r"(?i)anti[- ]?static", "dust-resistant"),
        (r"(?i)refractive index", "material index"),
    ]
    .into_iter()
    .map(|(pattern, plain)| {
        let re = Regex::new(pattern).expect("replacement table pattern is valid");
        (re, plain)
    })
    .collect()
});

/// Rewrite `text` for customers, or return it untouched when customer
/// mode is off. Borrowed when nothing in the table matched.
pub fn customer_text(text: &str, customer_mode: bool) -> Cow<'_, str> {
    if !customer_mode || text.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut out = Cow::Borrowed(text);
    for (pattern, plain) in REPLACEMENTS.iter() {
        if pattern.is_match(&out) {
            let replaced = pattern.replace_all(&out, *plain).into_owned();
            out = Cow::Owned(replaced);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_trade_terms_case_insensitively() {
        let text = "Anti-Reflection coating is hydrophobic";
        assert_eq!(
            customer_text(text, true),
            "clear coating coating is water-repellent"
        );
    }

    #[test]
    fn mode_off_returns_text_unchanged() {
        let text = "Anti-Reflection coating is hydrophobic";
        assert_eq!(customer_text(text, false), text);
        assert!(matches!(customer_text(text, false), Cow::Borrowed(_)));
    }

    #[test]
    fn hyphen_space_and_joined_spellings_all_match() {
        assert_eq!(customer_text("anti reflection", true), "clear coating");
        assert_eq!(customer_text("antireflection", true), "clear coating");
        assert_eq!(customer_text("ANTI-STATIC", true), "dust-resistant");
    }

    #[test]
    fn rewrites_every_occurrence() {
        assert_eq!(
            customer_text("oleophobic and oleophobic", true),
            "smudge-resistant and smudge-resistant"
        );
    }

    #[test]
    fn text_without_trade_terms_is_borrowed() {
        let out = customer_text("Clear indoors, tinted outdoors", true);
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(customer_text("", true), "");
    }

    #[test]
    fn refractive_index_becomes_material_index() {
        assert_eq!(
            customer_text("A higher refractive index bends light more.", true),
            "A higher material index bends light more."
        );
    }
}
