//! Text normalization applied before any positional character extraction.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Uppercase, replace `Ñ` with `X` and strip diacritics.
///
/// `Ñ` is replaced before decomposition; otherwise NFD would split it into
/// `N` plus a combining tilde and the tilde would be dropped. Input is
/// composed first so a decomposed `N` + U+0303 is treated the same way.
///
/// The result is idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(s: &str) -> String {
    let upper = s.nfc().collect::<String>().to_uppercase();
    upper
        .replace('Ñ', "X")
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Like [`normalize`], but also drops every character outside `A-Z`.
///
/// Lookup tables (state names, blocklisted words) are keyed on this form.
pub fn clean_alpha(s: &str) -> String {
    normalize(s)
        .chars()
        .filter(|c| c.is_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_accents() {
        assert_eq!(normalize("José Pérez"), "JOSE PEREZ");
        assert_eq!(normalize("Michoacán"), "MICHOACAN");
        assert_eq!(normalize("Güemes"), "GUEMES");
    }

    #[test]
    fn test_normalize_replaces_enye() {
        assert_eq!(normalize("Muñoz"), "MUXOZ");
        assert_eq!(normalize("ÑANDU"), "XANDU");
        // Decomposed N + combining tilde
        assert_eq!(normalize("Mun\u{0303}oz"), "MUXOZ");
    }

    #[test]
    fn test_normalize_keeps_punctuation_and_digits() {
        assert_eq!(normalize("o'brien 2"), "O'BRIEN 2");
    }

    #[test]
    fn test_normalize_idempotent() {
        for s in ["Ñoño Álvarez", "", "   ", "ÀÉÎÕÜ ñ", "abc-123"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_clean_alpha() {
        assert_eq!(clean_alpha("Ciudad de México"), "CIUDADDEMEXICO");
        assert_eq!(clean_alpha("C.D.M.X."), "CDMX");
        assert_eq!(clean_alpha("San Luis Potosí 78"), "SANLUISPOTOSI");
        assert_eq!(clean_alpha(""), "");
    }
}
