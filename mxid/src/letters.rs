//! Letter-class extractors over already-normalized name segments.
//!
//! All of them fall back to [`FILL`] when the segment is empty or lacks the
//! requested letter class.

/// Fill character for any position that cannot be derived.
pub const FILL: char = 'X';

const VOWELS: &str = "AEIOU";

/// The 21 Latin consonants. `X` is included, so a normalized `Ñ` counts.
const CONSONANTS: &str = "BCDFGHJKLMNPQRSTVWXYZ";

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(c)
}

/// First vowel anywhere in `s`.
pub fn first_vowel(s: &str) -> char {
    s.chars().find(|c| is_vowel(*c)).unwrap_or(FILL)
}

/// First character of `s`.
pub fn first_letter(s: &str) -> char {
    s.chars().next().unwrap_or(FILL)
}

/// First vowel after the leading letter.
pub fn first_internal_vowel(s: &str) -> char {
    s.chars().skip(1).find(|c| is_vowel(*c)).unwrap_or(FILL)
}

/// First consonant after the leading letter.
pub fn first_internal_consonant(s: &str) -> char {
    s.chars().skip(1).find(|c| is_consonant(*c)).unwrap_or(FILL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_vowel() {
        assert_eq!(first_vowel("ARIAS"), 'A');
        assert_eq!(first_vowel("PEREZ"), 'E');
        assert_eq!(first_vowel("LYNCH"), 'X');
        assert_eq!(first_vowel(""), 'X');
    }

    #[test]
    fn test_first_letter() {
        assert_eq!(first_letter("GARCIA"), 'G');
        assert_eq!(first_letter(""), 'X');
    }

    #[test]
    fn test_first_internal_vowel_skips_leading_letter() {
        assert_eq!(first_internal_vowel("ARIAS"), 'I');
        assert_eq!(first_internal_vowel("HERNANDEZ"), 'E');
        assert_eq!(first_internal_vowel("A"), 'X');
        assert_eq!(first_internal_vowel("BRYNN"), 'X');
    }

    #[test]
    fn test_first_internal_consonant() {
        assert_eq!(first_internal_consonant("HERNANDEZ"), 'R');
        assert_eq!(first_internal_consonant("GLORIA"), 'L');
        assert_eq!(first_internal_consonant("NUXEZ"), 'X');
        assert_eq!(first_internal_consonant("OIA"), 'X');
        assert_eq!(first_internal_consonant("B"), 'X');
    }
}
