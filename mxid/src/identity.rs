//! Personal identity input record and gender codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{Error, Result};
use crate::normalize::clean_alpha;

/// Sex as encoded in the 11th CURP character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// `H` (hombre)
    Male,
    /// `M` (mujer)
    Female,
    /// `X`, used when the label is not recognized
    Unspecified,
}

impl Gender {
    /// Map a form label to a gender. Unknown labels give [`Gender::Unspecified`].
    pub fn from_label(label: &str) -> Self {
        match clean_alpha(label).as_str() {
            "HOMBRE" | "H" | "MASCULINO" => Self::Male,
            "MUJER" | "M" | "FEMENINO" => Self::Female,
            other => {
                debug!(label = other, "Unrecognized gender label");
                Self::Unspecified
            }
        }
    }

    /// Single-letter CURP code
    pub fn code(&self) -> char {
        match self {
            Self::Male => 'H',
            Self::Female => 'M',
            Self::Unspecified => 'X',
        }
    }

    /// Parse a CURP gender code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'H' => Some(Self::Male),
            'M' => Some(Self::Female),
            'X' => Some(Self::Unspecified),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Hombre"),
            Self::Female => write!(f, "Mujer"),
            Self::Unspecified => write!(f, "No especificado"),
        }
    }
}

/// Fields collected by the registration form.
///
/// All fields are raw text exactly as the user typed or picked them. Nothing
/// here is validated on construction; generation accepts anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalIdentity {
    /// Given name(s) followed by one or two surnames
    pub full_name: String,
    /// Second surname entered in its own field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_surname: Option<String>,
    /// `DD/MM/YYYY`
    pub birth_date: String,
    /// `Hombre` or `Mujer`
    pub gender: String,
    /// Free-text birth state
    pub birth_state: String,
}

impl PersonalIdentity {
    /// Start building an identity
    pub fn builder() -> PersonalIdentityBuilder {
        PersonalIdentityBuilder::new()
    }

    /// The name string used for parsing.
    ///
    /// A separately entered second surname is appended so that it lands in
    /// the maternal slot.
    pub fn name_for_parsing(&self) -> String {
        match self.second_surname.as_deref().map(str::trim) {
            Some(surname) if !surname.is_empty() => format!("{} {}", self.full_name, surname),
            _ => self.full_name.clone(),
        }
    }

    /// Parsed gender label
    pub fn gender(&self) -> Gender {
        Gender::from_label(&self.gender)
    }

    /// Report every missing required field.
    ///
    /// Generation does not require this to pass.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("fullName", &self.full_name),
            ("birthDate", &self.birth_date),
            ("gender", &self.gender),
            ("birthState", &self.birth_state),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();

        let mut issues: Vec<String> = missing
            .iter()
            .map(|field| format!("Missing required field: {}", field))
            .collect();

        if !self.birth_date.trim().is_empty() {
            if let Err(e) = crate::date::parse_birth_date(&self.birth_date) {
                issues.push(e.to_string());
            }
        }

        if !self.gender.trim().is_empty() && self.gender() == Gender::Unspecified {
            issues.push(format!("Unrecognized gender: {}", self.gender));
        }

        match (missing.as_slice(), issues.len()) {
            (_, 0) => Ok(()),
            ([field], 1) => Err(Error::MissingRequiredField(field.to_string())),
            _ => Err(Error::ValidationFailed { issues }),
        }
    }
}

/// Builder for [`PersonalIdentity`]
#[derive(Debug, Default)]
pub struct PersonalIdentityBuilder {
    identity: PersonalIdentity,
}

impl PersonalIdentityBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the full name
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.identity.full_name = full_name.into();
        self
    }

    /// Set a separately entered second surname
    pub fn second_surname(mut self, surname: impl Into<String>) -> Self {
        self.identity.second_surname = Some(surname.into());
        self
    }

    /// Set the birth date (`DD/MM/YYYY`)
    pub fn birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.identity.birth_date = birth_date.into();
        self
    }

    /// Set the gender label
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.identity.gender = gender.into();
        self
    }

    /// Set the birth state
    pub fn birth_state(mut self, birth_state: impl Into<String>) -> Self {
        self.identity.birth_state = birth_state.into();
        self
    }

    /// Finish without validation
    pub fn build(self) -> PersonalIdentity {
        self.identity
    }

    /// Finish, rejecting incomplete identities
    pub fn build_validated(self) -> Result<PersonalIdentity> {
        self.identity.validate()?;
        Ok(self.identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gloria() -> PersonalIdentityBuilder {
        PersonalIdentity::builder()
            .full_name("Gloria Hernández García")
            .birth_date("27/04/1956")
            .gender("Mujer")
            .birth_state("Veracruz")
    }

    #[test]
    fn test_gender_labels() {
        assert_eq!(Gender::from_label("Hombre"), Gender::Male);
        assert_eq!(Gender::from_label("mujer"), Gender::Female);
        assert_eq!(Gender::from_label(" H "), Gender::Male);
        assert_eq!(Gender::from_label("Femenino"), Gender::Female);
        assert_eq!(Gender::from_label(""), Gender::Unspecified);
        assert_eq!(Gender::from_label("Otro"), Gender::Unspecified);
    }

    #[test]
    fn test_gender_codes() {
        assert_eq!(Gender::Male.code(), 'H');
        assert_eq!(Gender::Female.code(), 'M');
        assert_eq!(Gender::Unspecified.code(), 'X');
        assert_eq!(Gender::from_code('M'), Some(Gender::Female));
        assert_eq!(Gender::from_code('Q'), None);
    }

    #[test]
    fn test_valid_identity() {
        assert!(gloria().build_validated().is_ok());
    }

    #[test]
    fn test_single_missing_field() {
        let result = gloria().birth_state("").build_validated();
        match result {
            Err(Error::MissingRequiredField(field)) => assert_eq!(field, "birthState"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_multiple_issues() {
        let identity = PersonalIdentity::builder()
            .full_name("Juan")
            .birth_date("31/02/1990")
            .gender("otro")
            .build();
        match identity.validate() {
            Err(Error::ValidationFailed { issues }) => {
                assert_eq!(issues.len(), 3);
                assert!(issues.iter().any(|i| i.contains("birthState")));
                assert!(issues.iter().any(|i| i.contains("31/02/1990")));
                assert!(issues.iter().any(|i| i.contains("otro")));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_name_for_parsing() {
        let identity = PersonalIdentity::builder()
            .full_name("Gloria Hernández")
            .second_surname(" García ")
            .build();
        assert_eq!(identity.name_for_parsing(), "Gloria Hernández García");

        let blank = PersonalIdentity::builder()
            .full_name("Gloria Hernández")
            .second_surname("  ")
            .build();
        assert_eq!(blank.name_for_parsing(), "Gloria Hernández");
    }

    #[test]
    fn test_deserialize_form_record() {
        let json = r#"{
            "fullName": "Gloria Hernández García",
            "birthDate": "27/04/1956",
            "gender": "Mujer",
            "birthState": "Veracruz"
        }"#;
        let identity: PersonalIdentity = serde_json::from_str(json).unwrap();
        assert_eq!(identity, gloria().build());
        assert!(identity.second_surname.is_none());
    }
}
