//! Deterministic text cleanup applied before lexical indexing and
//! embedding. The exact same function runs at build time and query time;
//! any divergence between the two call sites is a correctness bug.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Characters allowed to survive normalization besides lowercase ASCII
/// letters and digits. Accented vowels are listed for completeness even
/// though the NFD pass strips their marks first.
fn is_whitelisted(c: char) -> bool {
    c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || matches!(c, 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ñ' | '.' | ',' | ';' | ':' | '(' | ')')
}

/// Normalize text for indexing. Pure and total; order of steps matters:
/// lowercase → NFD decomposition with combining marks dropped → whitelist
/// substitution → whitespace collapse → trim.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let substituted: String = stripped
        .chars()
        .map(|c| if is_whitelisted(c) { c } else { ' ' })
        .collect();
    substituted.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn strips_accents_and_lowercases() {
        assert_eq!(normalize("Artículo 12º"), "articulo 12");
        assert_eq!(normalize("SECCIÓN Segunda"), "seccion segunda");
        assert_eq!(normalize("señaló"), "senalo");
    }

    #[test]
    fn keeps_allowed_punctuation() {
        assert_eq!(normalize("inciso a); (ver: cap. 2,3)"), "inciso a); (ver: cap. 2,3)");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(normalize("  uno \n\n  dos\t tres  "), "uno dos tres");
    }

    #[test]
    fn drops_forbidden_characters() {
        assert_eq!(normalize("50% — ¡aprobado!"), "50 aprobado");
    }

    proptest! {
        #[test]
        fn idempotent(s in "\\PC{0,200}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn output_is_whitelisted_with_single_spaces(s in "\\PC{0,200}") {
            let out = normalize(&s);
            prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
            prop_assert!(!out.contains("  "));
            for c in out.chars() {
                prop_assert!(c == ' ' || is_whitelisted(c), "unexpected char {c:?}");
            }
        }
    }
}
