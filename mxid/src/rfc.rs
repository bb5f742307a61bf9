use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::blocklist::filter_obscenity;
use crate::date::birth_date_to_yymmdd;
use crate::error::Error;
use crate::homoclave::rfc_homoclave;
use crate::letters::{first_letter, first_vowel};
use crate::name::ParsedName;

/// Length of an RFC for a natural person
pub const RFC_LEN: usize = 13;

/// Notice attached to every generated RFC.
pub const PROVISIONAL_HOMOCLAVE_NOTICE: &str = "RFC homoclave is a provisional placeholder \
     generated locally; it is not the value assigned by SAT and must not be used as a \
     legally valid tax identifier.";

/// Regular expression for a natural-person RFC
static RFC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z&]{4}[0-9]{6}[A-Z0-9]{3}$").expect("Failed to compile RFC_REGEX")
});

/// Registro Federal de Contribuyentes for a natural person
///
/// Ten base characters (initials and `YYMMDD`) followed by a three-character
/// homoclave. A generated RFC carries a provisional homoclave and reports
/// [`Rfc::is_provisional`] as `true`; a parsed one is taken as issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rfc {
    code: String,
    provisional: bool,
}

impl Rfc {
    /// Assemble an RFC with a provisional homoclave. Never fails.
    pub fn generate(name: &ParsedName, birth_date: &str) -> Self {
        let mut base = String::with_capacity(RFC_LEN);
        base.push(first_letter(&name.paternal));
        base.push(first_vowel(&name.paternal));
        base.push(first_letter(&name.maternal));
        base.push(first_letter(&name.first));
        base.push_str(&birth_date_to_yymmdd(birth_date));

        let mut code = filter_obscenity(&base);
        code.push_str(&rfc_homoclave(name, birth_date));

        Self {
            code,
            provisional: true,
        }
    }

    /// The full code
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Initials and birth date
    pub fn base(&self) -> &str {
        &self.code[..10]
    }

    /// Last three characters
    pub fn homoclave(&self) -> &str {
        &self.code[10..]
    }

    /// `true` when the homoclave was generated locally rather than issued
    pub fn is_provisional(&self) -> bool {
        self.provisional
    }

    /// Parse a stored RFC, keeping the provenance recorded with it.
    pub fn with_provenance(s: &str, provisional: bool) -> Result<Self, Error> {
        let mut rfc = Rfc::from_str(s)?;
        rfc.provisional = provisional;
        Ok(rfc)
    }
}

impl FromStr for Rfc {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let candidate = s.trim().to_uppercase();
        if !RFC_REGEX.is_match(&candidate) {
            return Err(Error::InvalidRfc(s.to_string()));
        }
        Ok(Self {
            code: candidate,
            provisional: false,
        })
    }
}

impl std::fmt::Display for Rfc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl AsRef<str> for Rfc {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl Serialize for Rfc {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.code)
    }
}

impl<'de> Deserialize<'de> for Rfc {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rfc::from_str(&s).map_err(serde::de::Error::custom)
    }
}
