use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::blocklist::filter_obscenity;
use crate::check_digit::curp_check_digit;
use crate::date::{birth_date_to_yymmdd, century_digit};
use crate::error::Error;
use crate::identity::Gender;
use crate::letters::{first_internal_consonant, first_internal_vowel, first_letter};
use crate::name::ParsedName;
use crate::state::{is_known_code, FOREIGN_BORN};

/// Length of a CURP
pub const CURP_LEN: usize = 18;

/// Regular expression for the official CURP shape
static CURP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[A-Z][AEIOUX][A-Z]{2}[0-9]{2}(0[1-9]|1[0-2])(0[1-9]|[12][0-9]|3[01])[HMX]",
        r"(AS|BC|BS|CC|CL|CM|CS|CH|DF|DG|GT|GR|HG|JC|MC|MN|MS|NT|NL|OC|PL|QT|QR|SP|SL|SR|TC|TS|TL|VZ|YN|ZS|NE)",
        r"[B-DF-HJ-NP-TV-Z]{3}[0-9A-Z][0-9]$"
    ))
    .expect("Failed to compile CURP_REGEX")
});

/// Clave Única de Registro de Población
///
/// An 18-character code laid out as:
///
/// | chars  | content                                      |
/// |--------|----------------------------------------------|
/// | 1-4    | surname and given-name initials              |
/// | 5-10   | birth date `YYMMDD`                          |
/// | 11     | gender code                                  |
/// | 12-13  | birth state code                             |
/// | 14-16  | internal consonants of each name segment     |
/// | 17     | century indicator                            |
/// | 18     | verification digit                           |
///
/// Values produced by [`Curp::generate`] are always 18 characters with a
/// correct verification digit, even for degenerate input. Values parsed with
/// [`FromStr`] must also match the official shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Curp(String);

impl Curp {
    /// Assemble a CURP from its parts. Never fails.
    pub fn generate(
        name: &ParsedName,
        birth_date: &str,
        gender: Gender,
        state_code: &str,
    ) -> Self {
        let mut base = String::with_capacity(CURP_LEN);
        base.push(first_letter(&name.paternal));
        base.push(first_internal_vowel(&name.paternal));
        base.push(first_letter(&name.maternal));
        base.push(first_letter(&name.first));
        base.push_str(&birth_date_to_yymmdd(birth_date));
        base.push(gender.code());
        base.push_str(if is_known_code(state_code) {
            state_code
        } else {
            FOREIGN_BORN
        });
        base.push(first_internal_consonant(&name.paternal));
        base.push(first_internal_consonant(&name.maternal));
        base.push(first_internal_consonant(&name.first));

        let mut code = filter_obscenity(&base);
        code.push(century_digit(birth_date));
        code.push(curp_check_digit(&code));

        Self(code)
    }

    /// The full code
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `YYMMDD` birth date segment
    pub fn birth_date_segment(&self) -> &str {
        &self.0[4..10]
    }

    /// Gender from the 11th character
    pub fn gender(&self) -> Option<Gender> {
        self.0[10..11].chars().next().and_then(Gender::from_code)
    }

    /// Two-letter birth state code
    pub fn state_code(&self) -> &str {
        &self.0[11..13]
    }

    /// The 17th character
    pub fn century_indicator(&self) -> char {
        self.0[16..17].chars().next().unwrap_or('0')
    }

    /// The 18th character
    pub fn check_digit(&self) -> char {
        self.0[17..18].chars().next().unwrap_or('0')
    }

    /// Whether the verification digit matches the first 17 characters
    pub fn has_valid_check_digit(&self) -> bool {
        curp_check_digit(&self.0[..17]) == self.check_digit()
    }

    /// Read back a value previously produced by [`Curp::generate`].
    ///
    /// Generated values may hold fill segments (`000000`, `X`) that the
    /// official shape rejects, so only length, charset, known state code and
    /// the verification digit are checked.
    pub fn from_generated(s: &str) -> Result<Self, Error> {
        let candidate = s.trim().to_uppercase();
        let well_formed = candidate.len() == CURP_LEN
            && candidate
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
            && is_known_code(&candidate[11..13]);
        if !well_formed {
            return Err(Error::InvalidCurp(s.to_string()));
        }

        let expected = curp_check_digit(&candidate[..17]);
        let found = candidate[17..].chars().next().unwrap_or('0');
        if expected != found {
            return Err(Error::CheckDigitMismatch {
                curp: candidate,
                expected,
                found,
            });
        }

        Ok(Self(candidate))
    }
}

impl FromStr for Curp {
    type Err = Error;

    /// Parse and verify a CURP. Surrounding whitespace and lowercase are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let candidate = s.trim().to_uppercase();
        if !CURP_REGEX.is_match(&candidate) {
            return Err(Error::InvalidCurp(s.to_string()));
        }

        let expected = curp_check_digit(&candidate[..17]);
        let found = candidate[17..].chars().next().unwrap_or('0');
        if expected != found {
            return Err(Error::CheckDigitMismatch {
                curp: candidate,
                expected,
                found,
            });
        }

        Ok(Self(candidate))
    }
}

impl std::fmt::Display for Curp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Curp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Curp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Curp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Curp::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::parse_full_name;

    #[test]
    fn test_generate_published_reference() {
        let name = parse_full_name("Gloria Hernández García");
        let curp = Curp::generate(&name, "27/04/1956", Gender::Female, "VZ");
        assert_eq!(curp.as_str(), "HEGG560427MVZRRL04");
        assert!(curp.has_valid_check_digit());
    }

    #[test]
    fn test_generate_degenerate() {
        let curp = Curp::generate(&ParsedName::default(), "", Gender::Unspecified, "NE");
        assert_eq!(curp.as_str(), "XXXX000000XNEXXX01");
        assert_eq!(curp.as_str().len(), CURP_LEN);
    }

    #[test]
    fn test_generate_blocked_prefix() {
        let name = parse_full_name("Ana Cacahuate Cruz");
        let curp = Curp::generate(&name, "01/01/1990", Gender::Female, "JC");
        assert_eq!(curp.as_str(), "XACA900101MJCCRN08");
    }

    #[test]
    fn test_generate_2000s() {
        let name = parse_full_name("Sofía Núñez");
        let curp = Curp::generate(&name, "03/11/2004", Gender::Female, "NL");
        assert_eq!(curp.as_str(), "NUXS041103MNLXXFA4");
        assert_eq!(curp.century_indicator(), 'A');
    }

    #[test]
    fn test_generate_rejects_malformed_state_code() {
        let name = parse_full_name("Gloria Hernández García");
        let curp = Curp::generate(&name, "27/04/1956", Gender::Female, "Veracruz");
        assert_eq!(curp.state_code(), "NE");
        assert_eq!(curp.as_str().len(), CURP_LEN);
    }

    #[test]
    fn test_generate_unknown_state_code_falls_back() {
        let name = parse_full_name("Gloria Hernández García");
        let curp = Curp::generate(&name, "27/04/1956", Gender::Female, "ZZ");
        assert_eq!(curp.state_code(), "NE");
        assert!(Curp::from_str(curp.as_str()).is_ok());
    }

    #[test]
    fn test_from_generated_accepts_fill_segments() {
        let curp = Curp::from_generated("XXXX000000XNEXXX01").unwrap();
        assert_eq!(curp.birth_date_segment(), "000000");
        assert!(Curp::from_str("XXXX000000XNEXXX01").is_err());
    }

    #[test]
    fn test_from_generated_rejects_tampering() {
        assert!(matches!(
            Curp::from_generated("XXXX000000XNEXXX02"),
            Err(Error::CheckDigitMismatch { .. })
        ));
        assert!(matches!(
            Curp::from_generated("XXXX000000XNEXXX0"),
            Err(Error::InvalidCurp(_))
        ));
        assert!(matches!(
            Curp::from_generated("XXXX000000XZZXXX01"),
            Err(Error::InvalidCurp(_))
        ));
        assert!(matches!(
            Curp::from_generated("XXXX-00000XNEXXX01"),
            Err(Error::InvalidCurp(_))
        ));
    }

    #[test]
    fn test_accessors() {
        let curp = Curp::from_str("HEGG560427MVZRRL04").unwrap();
        assert_eq!(curp.birth_date_segment(), "560427");
        assert_eq!(curp.gender(), Some(Gender::Female));
        assert_eq!(curp.state_code(), "VZ");
        assert_eq!(curp.century_indicator(), '0');
        assert_eq!(curp.check_digit(), '4');
    }

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let curp = Curp::from_str("  hegg560427mvzrrl04\n").unwrap();
        assert_eq!(curp.to_string(), "HEGG560427MVZRRL04");
    }

    #[test]
    fn test_parse_rejects_bad_shape() {
        assert!(matches!(Curp::from_str(""), Err(Error::InvalidCurp(_))));
        assert!(matches!(
            Curp::from_str("HEGG560427MVZRRL0"),
            Err(Error::InvalidCurp(_))
        ));
        // Unknown state code
        assert!(Curp::from_str("HEGG560427MZZRRL04").is_err());
        // Month 13
        assert!(Curp::from_str("HEGG561327MVZRRL04").is_err());
        // Vowel slot holds a consonant
        assert!(Curp::from_str("HBGG560427MVZRRL04").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_check_digit() {
        match Curp::from_str("HEGG560427MVZRRL05") {
            Err(Error::CheckDigitMismatch {
                expected, found, ..
            }) => {
                assert_eq!(expected, '4');
                assert_eq!(found, '5');
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_serialization() {
        let curp = Curp::from_str("HEGG560427MVZRRL04").unwrap();
        let serialized = serde_json::to_string(&curp).unwrap();
        assert_eq!(serialized, r#""HEGG560427MVZRRL04""#);

        let deserialized: Curp = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, curp);

        assert!(serde_json::from_str::<Curp>(r#""HEGG560427MVZRRL05""#).is_err());
    }
}
