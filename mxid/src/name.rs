//! Positional full-name parsing.
//!
//! The rule is purely positional and knows nothing about particles such as
//! `DE LA`, so `Juan de la Cruz` parses with `LA` as the paternal surname.

use serde::{Deserialize, Serialize};

use crate::normalize::{clean_alpha, normalize};

/// A full name split into the three segments identifier generation uses.
///
/// Every segment is normalized and contains only `A-Z`; absent segments are
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedName {
    /// First token of the given-name portion
    pub first: String,
    /// First surname
    pub paternal: String,
    /// Second surname, empty if absent
    pub maternal: String,
}

impl ParsedName {
    /// Parse a space-separated full name, given names first.
    pub fn parse(full_name: &str) -> Self {
        let tokens: Vec<String> = normalize(full_name)
            .split_whitespace()
            .map(clean_alpha)
            .filter(|token| !token.is_empty())
            .collect();

        match tokens.as_slice() {
            [] => Self::default(),
            [first] => Self {
                first: first.clone(),
                ..Self::default()
            },
            [first, paternal] => Self {
                first: first.clone(),
                paternal: paternal.clone(),
                maternal: String::new(),
            },
            [first, .., paternal, maternal] => Self {
                first: first.clone(),
                paternal: paternal.clone(),
                maternal: maternal.clone(),
            },
        }
    }
}

/// Parse a full name; see [`ParsedName::parse`].
pub fn parse_full_name(full_name: &str) -> ParsedName {
    ParsedName::parse(full_name)
}
