//! Top-level assembly of CURP and RFC from a personal identity.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::curp::Curp;
use crate::error::{Error, Result};
use crate::identity::{Gender, PersonalIdentity};
use crate::name::ParsedName;
use crate::rfc::{Rfc, PROVISIONAL_HOMOCLAVE_NOTICE};
use crate::state::{state_code_with, StateMatch};

/// Generator settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// How birth-state text is matched to a code
    #[serde(default)]
    pub state_match: StateMatch,
}

impl GeneratorConfig {
    /// Set the state matching mode
    pub fn with_state_match(mut self, state_match: StateMatch) -> Self {
        self.state_match = state_match;
        self
    }
}

/// Identifiers derived for one registration
///
/// Deserializing reads the CURP back as a generated value (fill segments
/// allowed) and restores the RFC's provenance from
/// `rfcHomoclaveProvisional`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredIds")]
pub struct GeneratedIds {
    pub curp: Curp,
    pub rfc: Rfc,
    /// Always `true` for generated values
    pub rfc_homoclave_provisional: bool,
    pub notice: String,
}

/// Wire form of [`GeneratedIds`] before identifier checks
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredIds {
    curp: String,
    rfc: String,
    rfc_homoclave_provisional: bool,
    notice: String,
}

impl TryFrom<StoredIds> for GeneratedIds {
    type Error = Error;

    fn try_from(stored: StoredIds) -> Result<Self> {
        Ok(Self {
            curp: Curp::from_generated(&stored.curp)?,
            rfc: Rfc::with_provenance(&stored.rfc, stored.rfc_homoclave_provisional)?,
            rfc_homoclave_provisional: stored.rfc_homoclave_provisional,
            notice: stored.notice,
        })
    }
}

/// Pure CURP/RFC generator.
///
/// Holds no state beyond its configuration. Every method is total and
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator with the given configuration
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// CURP from raw form fields.
    ///
    /// `second_surname`, when non-blank, is appended to `full_name` before
    /// parsing and so becomes the maternal surname.
    pub fn curp(
        &self,
        full_name: &str,
        second_surname: Option<&str>,
        birth_date: &str,
        gender: &str,
        birth_state: &str,
    ) -> Curp {
        let identity = PersonalIdentity {
            full_name: full_name.to_string(),
            second_surname: second_surname.map(str::to_string),
            birth_date: birth_date.to_string(),
            gender: gender.to_string(),
            birth_state: birth_state.to_string(),
        };
        self.curp_for(&identity)
    }

    /// CURP for an identity record
    pub fn curp_for(&self, identity: &PersonalIdentity) -> Curp {
        let name = ParsedName::parse(&identity.name_for_parsing());
        let gender = Gender::from_label(&identity.gender);
        let state = state_code_with(&identity.birth_state, self.config.state_match);
        trace!(?name, ?gender, state, "Assembling CURP");
        Curp::generate(&name, &identity.birth_date, gender, state)
    }

    /// RFC from a full name and birth date
    pub fn rfc(&self, full_name: &str, birth_date: &str) -> Rfc {
        Rfc::generate(&ParsedName::parse(full_name), birth_date)
    }

    /// RFC from an already parsed name
    pub fn rfc_from_parts(&self, name: &ParsedName, birth_date: &str) -> Rfc {
        Rfc::generate(name, birth_date)
    }

    /// Both identifiers for one registration
    pub fn generate(&self, identity: &PersonalIdentity) -> GeneratedIds {
        let name = ParsedName::parse(&identity.name_for_parsing());
        let curp = self.curp_for(identity);
        let rfc = Rfc::generate(&name, &identity.birth_date);
        debug!(curp = %curp, rfc = %rfc, "Generated identifiers");

        GeneratedIds {
            curp,
            rfc_homoclave_provisional: rfc.is_provisional(),
            rfc,
            notice: PROVISIONAL_HOMOCLAVE_NOTICE.to_string(),
        }
    }
}

/// CURP with the default configuration.
pub fn generate_curp(full_name: &str, birth_date: &str, gender: &str, birth_state: &str) -> Curp {
    Generator::default().curp(full_name, None, birth_date, gender, birth_state)
}

/// RFC with a provisional homoclave.
pub fn generate_rfc(full_name: &str, birth_date: &str) -> Rfc {
    Generator::default().rfc(full_name, birth_date)
}
