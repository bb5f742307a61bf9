//! Birth-state lookup for the two-letter CURP entity code.
//!
//! Keys are stored in [`clean_alpha`] form. Full names (and their official
//! long forms) may be found inside a longer input when matching in
//! [`StateMatch::Contains`] mode; abbreviations only ever match exactly.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::normalize::clean_alpha;

/// Code for people born outside Mexico, and for any unmatched input.
pub const FOREIGN_BORN: &str = "NE";

/// How free-text state names are matched against the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMatch {
    /// Only the whole normalized input may equal a key
    Exact,
    /// Exact first, then longest full-name key contained in the input
    #[default]
    Contains,
}

impl FromStr for StateMatch {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "contains" => Ok(Self::Contains),
            _ => Err(format!(
                "Unknown state match mode: {}. Use 'exact' or 'contains'",
                s
            )),
        }
    }
}

impl fmt::Display for StateMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Contains => write!(f, "contains"),
        }
    }
}

/// One federal entity with its canonical name and code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MexicanState {
    pub code: &'static str,
    pub name: &'static str,
}

/// The 32 federal entities in RENAPO order.
pub const STATES: [MexicanState; 32] = [
    MexicanState { code: "AS", name: "Aguascalientes" },
    MexicanState { code: "BC", name: "Baja California" },
    MexicanState { code: "BS", name: "Baja California Sur" },
    MexicanState { code: "CC", name: "Campeche" },
    MexicanState { code: "CL", name: "Coahuila" },
    MexicanState { code: "CM", name: "Colima" },
    MexicanState { code: "CS", name: "Chiapas" },
    MexicanState { code: "CH", name: "Chihuahua" },
    MexicanState { code: "DF", name: "Ciudad de México" },
    MexicanState { code: "DG", name: "Durango" },
    MexicanState { code: "GT", name: "Guanajuato" },
    MexicanState { code: "GR", name: "Guerrero" },
    MexicanState { code: "HG", name: "Hidalgo" },
    MexicanState { code: "JC", name: "Jalisco" },
    MexicanState { code: "MC", name: "Estado de México" },
    MexicanState { code: "MN", name: "Michoacán" },
    MexicanState { code: "MS", name: "Morelos" },
    MexicanState { code: "NT", name: "Nayarit" },
    MexicanState { code: "NL", name: "Nuevo León" },
    MexicanState { code: "OC", name: "Oaxaca" },
    MexicanState { code: "PL", name: "Puebla" },
    MexicanState { code: "QT", name: "Querétaro" },
    MexicanState { code: "QR", name: "Quintana Roo" },
    MexicanState { code: "SP", name: "San Luis Potosí" },
    MexicanState { code: "SL", name: "Sinaloa" },
    MexicanState { code: "SR", name: "Sonora" },
    MexicanState { code: "TC", name: "Tabasco" },
    MexicanState { code: "TS", name: "Tamaulipas" },
    MexicanState { code: "TL", name: "Tlaxcala" },
    MexicanState { code: "VZ", name: "Veracruz" },
    MexicanState { code: "YN", name: "Yucatán" },
    MexicanState { code: "ZS", name: "Zacatecas" },
];

/// Alternate spellings that may appear inside a longer input.
const FULL_NAME_ALIASES: &[(&str, &str)] = &[
    ("Distrito Federal", "DF"),
    ("México", "MC"),
    ("Edo de México", "MC"),
    ("Coahuila de Zaragoza", "CL"),
    ("Michoacán de Ocampo", "MN"),
    ("Veracruz de Ignacio de la Llave", "VZ"),
    ("Nacido en el extranjero", FOREIGN_BORN),
    ("Extranjero", FOREIGN_BORN),
];

/// Abbreviations, matched exactly only.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("CDMX", "DF"),
    ("DF", "DF"),
    ("EDOMEX", "MC"),
    ("EDOMEXICO", "MC"),
    ("BCS", "BS"),
    ("BC", "BC"),
    ("NL", "NL"),
    ("SLP", "SP"),
    ("QROO", "QR"),
    ("NE", FOREIGN_BORN),
];

struct StateKey {
    key: String,
    code: &'static str,
}

/// Every key usable for exact lookups.
static EXACT_KEYS: Lazy<Vec<StateKey>> = Lazy::new(|| {
    let mut keys = full_name_keys();
    keys.extend(ABBREVIATIONS.iter().map(|&(abbr, code)| StateKey {
        key: clean_alpha(abbr),
        code,
    }));
    keys
});

/// Full-name keys, longest first, so `ESTADODEMEXICO` wins over `MEXICO`.
static CONTAINS_KEYS: Lazy<Vec<StateKey>> = Lazy::new(|| {
    let mut keys = full_name_keys();
    keys.sort_by(|a, b| b.key.len().cmp(&a.key.len()));
    keys
});

fn full_name_keys() -> Vec<StateKey> {
    STATES
        .iter()
        .map(|state| (state.name, state.code))
        .chain(FULL_NAME_ALIASES.iter().copied())
        .map(|(name, code)| StateKey {
            key: clean_alpha(name),
            code,
        })
        .collect()
}

/// Resolve a state name with the default [`StateMatch::Contains`] mode.
pub fn state_code(state_name: &str) -> &'static str {
    state_code_with(state_name, StateMatch::default())
}

/// Resolve a state name to its two-letter code, or [`FOREIGN_BORN`].
pub fn state_code_with(state_name: &str, mode: StateMatch) -> &'static str {
    let input = clean_alpha(state_name);
    if input.is_empty() {
        debug!("Empty birth state, using {}", FOREIGN_BORN);
        return FOREIGN_BORN;
    }

    if let Some(found) = EXACT_KEYS.iter().find(|k| k.key == input) {
        return found.code;
    }

    if mode == StateMatch::Contains {
        if let Some(found) = CONTAINS_KEYS.iter().find(|k| input.contains(&k.key)) {
            debug!(input = %input, key = %found.key, "Matched state by containment");
            return found.code;
        }
    }

    debug!(input = %input, "Unmatched birth state, using {}", FOREIGN_BORN);
    FOREIGN_BORN
}

/// Canonical name for a code, `None` for unknown codes.
pub fn state_name(code: &str) -> Option<&'static str> {
    if code == FOREIGN_BORN {
        return Some("Nacido en el extranjero");
    }
    STATES.iter().find(|s| s.code == code).map(|s| s.name)
}

/// Whether `code` is one of the 32 entity codes or [`FOREIGN_BORN`].
pub fn is_known_code(code: &str) -> bool {
    state_name(code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_canonical_names_resolve() {
        for state in STATES.iter() {
            assert_eq!(state_code(state.name), state.code, "{}", state.name);
            assert_eq!(state_code_with(state.name, StateMatch::Exact), state.code);
        }
    }

    #[test]
    fn test_mexico_city_aliases() {
        assert_eq!(state_code("Ciudad de México"), "DF");
        assert_eq!(state_code("CDMX"), "DF");
        assert_eq!(state_code("Distrito Federal"), "DF");
        assert_eq!(state_code("cdmx"), "DF");
    }

    #[test]
    fn test_state_of_mexico_aliases() {
        assert_eq!(state_code("México"), "MC");
        assert_eq!(state_code("Estado de México"), "MC");
        assert_eq!(state_code("Edo. de México"), "MC");
    }

    #[test]
    fn test_longest_key_wins() {
        assert_eq!(state_code("Baja California Sur, México"), "BS");
        assert_eq!(state_code("Ciudad de México, México"), "DF");
        assert_eq!(state_code("Nuevo León, México"), "NL");
    }

    #[test]
    fn test_contains_vs_exact() {
        assert_eq!(state_code("Estado de Jalisco"), "JC");
        assert_eq!(state_code_with("Estado de Jalisco", StateMatch::Exact), "NE");
    }

    #[test]
    fn test_bare_mexico_alias_overmatches() {
        // Known false positive of containment: any input ending in "México"
        // resolves to the State of Mexico.
        assert_eq!(state_code("Nuevo México"), "MC");
        assert_eq!(state_code("New Mexico"), "MC");
        assert_eq!(state_code_with("Nuevo México", StateMatch::Exact), "NE");
        assert_eq!(state_code_with("New Mexico", StateMatch::Exact), "NE");
    }

    #[test]
    fn test_abbreviations_are_exact_only() {
        assert_eq!(state_code("BCS"), "BS");
        // "DF" appears inside this word but must not match
        assert_eq!(state_code("Endfield"), "NE");
    }

    #[test]
    fn test_unmatched_and_foreign() {
        assert_eq!(state_code("Marte"), "NE");
        assert_eq!(state_code(""), "NE");
        assert_eq!(state_code("Nacido en el extranjero"), "NE");
        assert_eq!(state_code("Texas"), "NE");
    }

    #[test]
    fn test_official_long_forms() {
        assert_eq!(state_code("Veracruz de Ignacio de la Llave"), "VZ");
        assert_eq!(state_code("Michoacán de Ocampo"), "MN");
        assert_eq!(state_code("Coahuila de Zaragoza"), "CL");
    }

    #[test]
    fn test_state_name_lookup() {
        assert_eq!(state_name("YN"), Some("Yucatán"));
        assert_eq!(state_name("NE"), Some("Nacido en el extranjero"));
        assert_eq!(state_name("ZZ"), None);
        assert!(is_known_code("DF"));
        assert!(!is_known_code("XX"));
    }

    #[test]
    fn test_state_match_parsing() {
        assert_eq!("EXACT".parse::<StateMatch>().unwrap(), StateMatch::Exact);
        assert_eq!("contains".parse::<StateMatch>().unwrap(), StateMatch::Contains);
        assert!("fuzzy".parse::<StateMatch>().is_err());
    }
}
