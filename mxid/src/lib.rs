//! # mxid: Mexican personal identifiers
//!
//! Derives a CURP (Clave Única de Registro de Población, 18 characters) and
//! an RFC (Registro Federal de Contribuyentes, 13 characters) from the fields
//! a person enters at registration: full name, birth date, gender and birth
//! state.
//!
//! Generation is pure and total. Malformed or missing input never produces
//! an error; it degrades to fill values instead (`X` for letters, `000000`
//! for the date, `NE` for the state, `0` for the century indicator).
//!
//! The RFC homoclave produced here is a deterministic placeholder, not the
//! value SAT assigns. Generated [`Rfc`] values report
//! [`Rfc::is_provisional`] and [`GeneratedIds`] carries a notice to show
//! downstream.
//!
//! ```rust
//! use mxid::{generate_curp, generate_rfc};
//!
//! let curp = generate_curp("Gloria Hernández García", "27/04/1956", "Mujer", "Veracruz");
//! assert_eq!(curp.as_str(), "HEGG560427MVZRRL04");
//!
//! let rfc = generate_rfc("Gloria Hernández García", "27/04/1956");
//! assert_eq!(rfc.base(), "HEGG560427");
//! assert!(rfc.is_provisional());
//! ```

pub mod blocklist;
pub mod check_digit;
pub mod curp;
pub mod date;
pub mod error;
pub mod generator;
pub mod homoclave;
pub mod identity;
pub mod letters;
pub mod name;
pub mod normalize;
pub mod rfc;
pub mod state;

pub use blocklist::filter_obscenity;
pub use check_digit::curp_check_digit;
pub use curp::Curp;
pub use date::{birth_date_to_yymmdd, century_digit};
pub use error::{Error, Result};
pub use generator::{generate_curp, generate_rfc, GeneratedIds, Generator, GeneratorConfig};
pub use homoclave::rfc_homoclave;
pub use identity::{Gender, PersonalIdentity, PersonalIdentityBuilder};
pub use name::{parse_full_name, ParsedName};
pub use normalize::{clean_alpha, normalize};
pub use rfc::{Rfc, PROVISIONAL_HOMOCLAVE_NOTICE};
pub use state::{state_code, state_code_with, StateMatch};

use std::str::FromStr;

/// Either identifier kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdKind {
    Curp(Curp),
    Rfc(Rfc),
}

/// Parse a string as a CURP, or failing that as an RFC.
///
/// A CURP-shaped input with a wrong verification digit reports the
/// mismatch rather than falling through to RFC parsing.
pub fn parse(s: &str) -> Result<IdKind> {
    match Curp::from_str(s) {
        Ok(curp) => return Ok(IdKind::Curp(curp)),
        Err(e @ Error::CheckDigitMismatch { .. }) => return Err(e),
        Err(_) => {}
    }

    if let Ok(rfc) = Rfc::from_str(s) {
        return Ok(IdKind::Rfc(rfc));
    }

    Err(Error::UnrecognizedFormat(s.to_string()))
}

impl std::fmt::Display for IdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdKind::Curp(id) => write!(f, "{}", id),
            IdKind::Rfc(id) => write!(f, "{}", id),
        }
    }
}
